//! # Client Search
//!
//! Case-insensitive substring matching on [`Client::full_name`]. Both sides are
//! trimmed and lowercased before comparing; results keep the collection order.

use tracing::debug;

use clientele_common::client::Client;
use clientele_common::error::Result;
use clientele_common::search_term::SearchTerm;

pub struct SearchQuery<'a> {
    clients: &'a [Client],
}

impl<'a> SearchQuery<'a> {
    pub fn new(clients: &'a [Client]) -> Self {
        Self { clients }
    }

    /// Returns every client whose name contains `term`.
    ///
    /// Fails only when the term is missing or blank. No match is an empty result.
    pub fn execute(&self, term: Option<&str>) -> Result<Vec<&'a Client>> {
        let term: SearchTerm = SearchTerm::parse(term)?;

        let matches: Vec<&'a Client> = self
            .clients
            .iter()
            .filter(|client| client.normalized_name().contains(term.normalized()))
            .collect();

        debug!(
            "Search for {:?} matched {} of {} clients",
            term.as_str(),
            matches.len(),
            self.clients.len()
        );
        Ok(matches)
    }
}

/// Searches `clients` by name.
pub fn search<'a>(clients: &'a [Client], term: &str) -> Result<Vec<&'a Client>> {
    SearchQuery::new(clients).execute(Some(term))
}
