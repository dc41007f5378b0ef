//! # Client Value Object
//!
//! A [`Client`] only ever exists in a valid state: every constructor runs the same
//! validation and there are no setters. Two clients are equal when all of their
//! fields are equal.
//!
//! Stored strings are kept exactly as provided. Trimming and lowercasing happen only
//! when checking for emptiness or comparing (see [`Client::normalized_name`] and
//! [`Client::normalized_email`]).

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, Result};

pub const INVALID_ID: &str = "id must be a positive integer";
pub const INVALID_FULL_NAME: &str = "full_name must be a non-empty string";
pub const INVALID_EMAIL: &str = "email must be a non-empty string";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Client {
    id: u64,
    full_name: String,
    email: String,
}

impl Client {
    /// Builds a client, checking `id`, then `full_name`, then `email`.
    ///
    /// The first attribute that breaks its rule produces a [`ClientError::Validation`].
    pub fn new(id: i64, full_name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        validate(u64::try_from(id).ok(), Some(full_name.into()), Some(email.into()))
    }

    /// Decodes a loosely-typed JSON record.
    ///
    /// Recognized keys are `id`, `full_name` (or `fullName`) and `email`. A key that is
    /// missing or holds the wrong JSON type is treated as absent, which then fails the
    /// regular validation with the same message an empty value would. Unknown keys
    /// are ignored.
    pub fn from_record(record: &Value) -> Result<Self> {
        let id: Option<u64> = record.get("id").and_then(Value::as_u64);
        let full_name: Option<String> = string_field(record, "full_name")
            .or_else(|| string_field(record, "fullName"));
        let email: Option<String> = string_field(record, "email");

        validate(id, full_name, email)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Trimmed, lowercased name used for matching.
    pub fn normalized_name(&self) -> String {
        normalize(&self.full_name)
    }

    /// Trimmed, lowercased email used for grouping.
    pub fn normalized_email(&self) -> String {
        normalize(&self.email)
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Client #{}: {} ({})", self.id, self.full_name, self.email)
    }
}

pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn string_field(record: &Value, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(String::from)
}

fn validate(id: Option<u64>, full_name: Option<String>, email: Option<String>) -> Result<Client> {
    let id: u64 = id
        .filter(|id| *id > 0)
        .ok_or_else(|| ClientError::validation(INVALID_ID))?;
    let full_name: String =
        non_blank(full_name).ok_or_else(|| ClientError::validation(INVALID_FULL_NAME))?;
    let email: String = non_blank(email).ok_or_else(|| ClientError::validation(INVALID_EMAIL))?;

    Ok(Client {
        id,
        full_name,
        email,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
