use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Login credentials. The password lives behind `SecretString` so it never
/// shows up in debug output; serialization goes through
/// [`SerializableLoginPayload`].
#[derive(Debug)]
pub struct LoginPayload {
    pub username: String,
    pub password: SecretString,
}

/// Registration credentials, same secrecy treatment as [`LoginPayload`].
#[derive(Debug)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: SecretString,
}

// Wire-format mirrors. These exist so the secret is exposed only at the
// moment the request body is encoded, and so the body always goes through
// serde rather than string interpolation.
#[derive(Serialize)]
pub(super) struct SerializableLoginPayload<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a LoginPayload> for SerializableLoginPayload<'a> {
    fn from(payload: &'a LoginPayload) -> Self {
        Self {
            username: &payload.username,
            password: payload.password.expose_secret(),
        }
    }
}

#[derive(Serialize)]
pub(super) struct SerializableRegisterPayload<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a RegisterPayload> for SerializableRegisterPayload<'a> {
    fn from(payload: &'a RegisterPayload) -> Self {
        Self {
            username: &payload.username,
            email: &payload.email,
            password: payload.password.expose_secret(),
        }
    }
}

/// Token pair returned by `/login`. The service may omit either field;
/// absent values default to the empty string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Response of `/refresh`: a new access token only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RefreshedAccess {
    pub access_token: String,
}

/// One row of the books catalog. Every field is a display string regardless
/// of its JSON type on the wire (the service serves `year`, `price` and
/// `stock` as numbers); missing or null fields become `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookRecord {
    #[serde(deserialize_with = "display_string")]
    pub isbn: String,
    #[serde(deserialize_with = "display_string")]
    pub book_id: String,
    #[serde(deserialize_with = "display_string")]
    pub title: String,
    #[serde(deserialize_with = "display_string")]
    pub author: String,
    #[serde(deserialize_with = "display_string")]
    pub publisher: String,
    #[serde(deserialize_with = "display_string")]
    pub year: String,
    #[serde(deserialize_with = "display_string")]
    pub genre: String,
    #[serde(deserialize_with = "display_string")]
    pub price: String,
    #[serde(deserialize_with = "display_string")]
    pub stock: String,
    #[serde(deserialize_with = "display_string")]
    pub format: String,
}

/// Coerce any JSON scalar to its display form; null becomes `""`.
fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Derived from the root endpoint: `healthy` is true only for HTTP 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    pub healthy: bool,
}
