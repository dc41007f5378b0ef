//! # Duplicate Detection
//!
//! Groups clients by normalized email (trimmed, lowercased) and keeps only the groups
//! that hold more than one client.

use std::collections::BTreeMap;

use tracing::debug;

use clientele_common::client::Client;
use clientele_common::error::Result;

/// Normalized email mapped to the clients sharing it, in input order.
pub type DuplicateGroups<'a> = BTreeMap<String, Vec<&'a Client>>;

pub struct DuplicateQuery<'a> {
    clients: &'a [Client],
}

impl<'a> DuplicateQuery<'a> {
    pub fn new(clients: &'a [Client]) -> Self {
        Self { clients }
    }

    /// Always succeeds; an empty map means no email is shared.
    pub fn execute(&self) -> Result<DuplicateGroups<'a>> {
        let mut groups: DuplicateGroups<'a> = BTreeMap::new();
        for client in self.clients {
            groups.entry(client.normalized_email()).or_default().push(client);
        }

        groups.retain(|_, members| members.len() > 1);

        debug!("Found {} shared emails among {} clients", groups.len(), self.clients.len());
        Ok(groups)
    }
}

/// Finds clients in `clients` that share an email address.
pub fn find_duplicates(clients: &[Client]) -> Result<DuplicateGroups<'_>> {
    DuplicateQuery::new(clients).execute()
}
