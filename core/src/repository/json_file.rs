use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};

use clientele_common::client::Client;
use clientele_common::error::{ClientError, Result};

use super::ClientRepository;

pub const ROOT_NOT_ARRAY: &str = "JSON root must be an array";

/// Reads clients from a JSON file whose root is an array of objects.
///
/// Nothing is cached: each [`ClientRepository::load_all`] call re-reads the file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String> {
        match self.path.try_exists() {
            Ok(true) => {}
            Ok(false) => return Err(ClientError::FileNotFound(self.path.clone())),
            Err(err) => return Err(read_error(&self.path, err)),
        }

        debug!("Reading client data from {}", self.path.display());
        fs::read_to_string(&self.path).map_err(|err| read_error(&self.path, err))
    }
}

impl ClientRepository for JsonFileRepository {
    fn load_all(&self) -> Result<Vec<Client>> {
        let text: String = self.read()?;
        let root: Value =
            serde_json::from_str(&text).map_err(|err| ClientError::Parse(err.to_string()))?;
        let clients: Vec<Client> = build_clients(&root)?;

        info!("Loaded {} clients from {}", clients.len(), self.path.display());
        Ok(clients)
    }
}

/// Converts the parsed document into clients, stopping at the first bad record.
fn build_clients(root: &Value) -> Result<Vec<Client>> {
    let Value::Array(records) = root else {
        return Err(ClientError::Schema(ROOT_NOT_ARRAY.to_string()));
    };

    let mut clients: Vec<Client> = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        match Client::from_record(record) {
            Ok(client) => clients.push(client),
            Err(err) => {
                warn!("Rejecting client record at index {idx}: {err}");
                return Err(ClientError::validation(format!(
                    "Invalid client data at index {idx}: {err}"
                )));
            }
        }
    }

    Ok(clients)
}

fn read_error(path: &Path, err: io::Error) -> ClientError {
    match err.kind() {
        ErrorKind::NotFound => ClientError::FileNotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => ClientError::Io {
            path: path.to_path_buf(),
            reason: format!("permission denied reading {}", path.display()),
        },
        _ => ClientError::Io {
            path: path.to_path_buf(),
            reason: format!("failed to read {}: {err}", path.display()),
        },
    }
}
