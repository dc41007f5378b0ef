#![cfg(test)]
use std::io::Write;

use serde_json::Value;
use tempfile::NamedTempFile;

/// Writes `document` to a fresh temp file that lives as long as the returned handle.
pub fn json_file(document: &Value) -> anyhow::Result<NamedTempFile> {
    raw_file(&serde_json::to_string_pretty(document)?)
}

pub fn raw_file(contents: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}
