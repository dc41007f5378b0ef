//! The data-source boundary.
//!
//! Callers depend on [`ClientRepository`]; [`JsonFileRepository`] is the only adapter
//! today. Loading is all-or-nothing: either every record is valid or nothing is returned.

use std::path::Path;

use clientele_common::client::Client;
use clientele_common::error::Result;

mod json_file;

pub use json_file::JsonFileRepository;

/// Defines the contract for obtaining the full client collection.
pub trait ClientRepository {
    /// Loads every client from the underlying source, in source order.
    ///
    /// # Returns
    /// * `Ok(Vec<Client>)` - All records converted successfully (possibly none).
    /// * `Err(ClientError)` - The source was unreachable, malformed, or held an invalid record.
    fn load_all(&self) -> Result<Vec<Client>>;
}

/// Loads the client list stored at `path`.
pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Client>> {
    JsonFileRepository::new(path.as_ref()).load_all()
}
