//! Wire DTOs for the `/users` collection endpoint.
//!
//! DESIGN
//! ======
//! These types mirror the JSON bodies the Users service exchanges. Records are
//! never patched locally; a fresh `Vec<User>` replaces the roster on each
//! successful list call.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A registered user as returned by `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned unique identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address, as accepted by the server.
    pub email: String,
}

/// Request body for `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Error body the server may attach to a failed request.
///
/// Only a string `detail` is surfaced; structured validation payloads
/// (arrays/objects under `detail`) decode as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "deserialize_string_detail")]
    pub detail: Option<String>,
}

fn deserialize_string_detail<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}
