//! # Clientele Common
//!
//! Shared building blocks for every `clientele` crate.
//!
//! * **[`error`]**: The failure taxonomy and the crate-wide [`error::Result`] alias.
//! * **[`client`]**: The validated [`client::Client`] value object.
//! * **[`search_term`]**: The validated [`search_term::SearchTerm`] query argument.
//! * **[`config`]**: Runtime options injected by the command line.
//!
//! Nothing in here performs IO. Reading the data file is the job of `clientele-core`.

pub mod client;
pub mod config;
pub mod error;
pub mod search_term;
