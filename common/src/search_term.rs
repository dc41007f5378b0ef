use crate::client::normalize;
use crate::error::{ClientError, Result};

pub const TERM_MISSING: &str = "search_term cannot be nil";
pub const TERM_EMPTY: &str = "search_term cannot be empty";

/// A validated, non-blank search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    normalized: String,
}

impl SearchTerm {
    /// Validates a raw term: it must be present and not blank after trimming.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let raw: &str = raw.ok_or_else(|| ClientError::validation(TERM_MISSING))?;
        let normalized: String = normalize(raw);

        if normalized.is_empty() {
            return Err(ClientError::validation(TERM_EMPTY));
        }

        Ok(Self {
            raw: raw.to_string(),
            normalized,
        })
    }

    /// The term as the caller typed it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}
