#![cfg(test)]
use clientele_common::client::Client;
use clientele_core::{find_duplicates, load_all, search};
use serde_json::json;

use crate::fixtures::json_file;

fn scenario_clients() -> anyhow::Result<Vec<Client>> {
    let file = json_file(&json!([
        {"id": 1, "full_name": "John Doe", "email": "duplicate@example.com"},
        {"id": 2, "full_name": "Jane Smith", "email": "unique@example.com"},
        {"id": 3, "full_name": "Bob Jones", "email": "duplicate@example.com"}
    ]))?;
    Ok(load_all(file.path())?)
}

#[test]
fn duplicates_group_shared_email() -> anyhow::Result<()> {
    let clients = scenario_clients()?;

    let groups = find_duplicates(&clients)?;

    assert_eq!(groups.len(), 1);
    assert_eq!(groups["duplicate@example.com"], vec![&clients[0], &clients[2]]);
    Ok(())
}

#[test]
fn search_returns_matches_in_file_order() -> anyhow::Result<()> {
    let clients = scenario_clients()?;

    let found = search(&clients, "jo")?;

    let names: Vec<&str> = found.iter().map(|c| c.full_name()).collect();
    assert_eq!(names, vec!["John Doe", "Bob Jones"]);
    Ok(())
}

#[test]
fn queries_leave_loaded_clients_untouched() -> anyhow::Result<()> {
    let clients = scenario_clients()?;
    let snapshot = clients.clone();

    search(&clients, "SMITH")?;
    find_duplicates(&clients)?;
    find_duplicates(&clients)?;

    assert_eq!(clients, snapshot);
    assert_eq!(find_duplicates(&clients)?, find_duplicates(&clients)?);
    Ok(())
}

#[test]
fn email_normalization_spans_whitespace_and_case() -> anyhow::Result<()> {
    let file = json_file(&json!([
        {"id": 1, "full_name": "A", "email": " Test@Example.com"},
        {"id": 2, "full_name": "B", "email": "test@example.com "},
        {"id": 3, "full_name": "C", "email": "TEST@EXAMPLE.COM"}
    ]))?;
    let clients = load_all(file.path())?;

    let groups = find_duplicates(&clients)?;

    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["test@example.com"]);
    assert_eq!(groups["test@example.com"].len(), 3);
    Ok(())
}
