#![cfg(test)]
use clientele_common::client::Client;
use clientele_common::error::ClientError;
use clientele_core::{ClientRepository, JsonFileRepository, load_all};
use serde_json::{Value, json};

use crate::fixtures::{json_file, raw_file};

#[test]
fn round_trip_preserves_count_and_order() -> anyhow::Result<()> {
    let records: Vec<Value> = (1..=25)
        .rev()
        .map(|id| {
            json!({
                "id": id,
                "full_name": format!("Client {id}"),
                "email": format!("c{id}@example.com"),
            })
        })
        .collect();
    let file = json_file(&Value::Array(records))?;

    let clients: Vec<Client> = load_all(file.path())?;

    assert_eq!(clients.len(), 25);
    let ids: Vec<u64> = clients.iter().map(Client::id).collect();
    assert_eq!(ids, (1..=25).rev().collect::<Vec<u64>>());
    Ok(())
}

#[test]
fn repository_trait_and_free_function_agree() -> anyhow::Result<()> {
    let file = json_file(&json!([
        {"id": 1, "full_name": "John Doe", "email": "john@example.com"},
        {"id": 2, "fullName": "Jane Smith", "email": "jane@example.com"}
    ]))?;

    let repo: Box<dyn ClientRepository> = Box::new(JsonFileRepository::new(file.path()));

    assert_eq!(repo.load_all()?, load_all(file.path())?);
    Ok(())
}

#[test]
fn object_root_is_rejected() -> anyhow::Result<()> {
    let file = json_file(&json!({"clients": []}))?;

    let err = load_all(file.path()).unwrap_err();

    assert!(matches!(err, ClientError::Schema(_)));
    assert!(err.to_string().contains("JSON root must be an array"));
    Ok(())
}

#[test]
fn invalid_record_reports_its_index() -> anyhow::Result<()> {
    let file = json_file(&json!([
        {"id": 1, "full_name": "John Doe", "email": "john@example.com"},
        {"id": "invalid", "full_name": "Jane Smith", "email": "jane@example.com"}
    ]))?;

    let msg = load_all(file.path()).unwrap_err().to_string();

    assert!(msg.contains("index 1"), "message was: {msg}");
    assert!(msg.contains("id must be a positive integer"), "message was: {msg}");
    Ok(())
}

#[test]
fn missing_email_is_reported_like_an_empty_one() -> anyhow::Result<()> {
    let missing = json_file(&json!([{"id": 1, "full_name": "John Doe"}]))?;
    let empty = json_file(&json!([{"id": 1, "full_name": "John Doe", "email": "  "}]))?;

    assert_eq!(load_all(missing.path()), load_all(empty.path()));
    assert_eq!(
        load_all(missing.path()).unwrap_err().to_string(),
        "Invalid client data at index 0: email must be a non-empty string"
    );
    Ok(())
}

#[test]
fn truncated_document_is_a_parse_error() -> anyhow::Result<()> {
    let file = raw_file(r#"[{"id": 1, "full_name": "John"#)?;

    assert_eq!(load_all(file.path()).unwrap_err().kind(), "parse");
    Ok(())
}

#[test]
fn non_utf8_file_is_an_io_error() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    std::io::Write::write_all(&mut file, &[0xff, 0xfe, 0x5b, 0x5d])?;

    assert_eq!(load_all(file.path()).unwrap_err().kind(), "io");
    Ok(())
}

#[test]
fn missing_file_names_the_path() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nowhere.json");

    let err = load_all(&path).unwrap_err();

    assert_eq!(err.kind(), "file not found");
    assert!(err.to_string().contains("nowhere.json"));
    Ok(())
}
