//! # Clientele Core
//!
//! Loading and querying of client records.
//!
//! * **[`repository`]**: The [`repository::ClientRepository`] port and its JSON file adapter.
//! * **[`search`]**: Case-insensitive name search.
//! * **[`duplicates`]**: Grouping of clients that share an email address.
//!
//! Queries work on a slice that has already been loaded; they never touch the file system.

pub mod duplicates;
pub mod repository;
pub mod search;

pub use duplicates::{DuplicateGroups, DuplicateQuery, find_duplicates};
pub use repository::{ClientRepository, JsonFileRepository, load_all};
pub use search::{SearchQuery, search};
