//! Installation keys and the owner records they resolve to.
//!
//! An install key is the sole credential a caller presents to the notify
//! endpoint. It is opaque: generated randomly, never parsed, never mutated.
//! Revocation is always delete-old + create-new.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque bearer credential bound to a chat destination.
///
/// Generated from UUID v4 (122 bits of randomness), so collisions are
/// treated as a non-issue and not actively checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstallKey(String);

impl InstallKey {
    /// Generate a fresh unguessable key.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for InstallKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for InstallKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value stored under an install key.
///
/// Serialized as camelCase JSON (`{"chatId": 42, "firstName": "Ada"}`),
/// the wire shape the store holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRecord {
    /// Telegram chat the key is bound to (provider-assigned, opaque).
    pub chat_id: i64,
    /// Best-effort display name; never required for correctness.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}
