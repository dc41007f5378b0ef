use std::path::PathBuf;

use thiserror::Error;

/// Every expected failure the core can report.
///
/// None of these are panics: callers branch on the variant (or bubble it up with `?`)
/// and decide what to show the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// A client attribute or a query argument broke its contract.
    #[error("{0}")]
    Validation(String),

    /// The data source does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The data source exists but could not be read.
    #[error("{reason}")]
    Io { path: PathBuf, reason: String },

    /// The data source is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(String),

    /// The JSON is valid but not shaped like a client list.
    #[error("{0}")]
    Schema(String),
}

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Short label used when logging a failure.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::FileNotFound(_) => "file not found",
            Self::Io { .. } => "io",
            Self::Parse(_) => "parse",
            Self::Schema(_) => "schema",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
