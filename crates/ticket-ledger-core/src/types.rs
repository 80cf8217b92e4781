//! Strong type definitions for the ticket ledger.
//!
//! Ticket identifiers are a newtype so they cannot be confused with buyer or
//! event names at call sites.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// An opaque ticket identifier.
///
/// Issued tickets carry a random UUID in canonical hyphenated form. The value
/// `"GENESIS"` is reserved for the block at index 0.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// The sentinel id carried by the genesis block.
    pub const GENESIS_STR: &'static str = "GENESIS";

    /// Wrap an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The genesis sentinel as a `TicketId`.
    pub fn genesis() -> Self {
        Self(Self::GENESIS_STR.to_string())
    }

    /// Generate a fresh random identifier (UUID v4, 122 random bits).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Whether this is the genesis sentinel.
    pub fn is_genesis(&self) -> bool {
        self.0 == Self::GENESIS_STR
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the identifier text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TicketId({})", self.0)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TicketId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TicketId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for TicketId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TicketId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl PartialEq<str> for TicketId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TicketId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_canonical_uuids() {
        let id = TicketId::generate();
        let parsed = uuid::Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.hyphenated().to_string(), id.as_str());
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(TicketId::generate(), TicketId::generate());
    }

    #[test]
    fn test_genesis_sentinel() {
        let id = TicketId::genesis();
        assert!(id.is_genesis());
        assert_eq!(id, "GENESIS");
        assert!(!TicketId::new("genesis").is_genesis());
    }

    #[test]
    fn test_ticket_id_text_accessors() {
        let id = TicketId::from("abc-123");
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(id.into_string(), String::from("abc-123"));
    }

    #[test]
    fn test_ticket_id_display_and_debug() {
        let id = TicketId::new("abc-123");
        assert_eq!(format!("{}", id), "abc-123");
        assert_eq!(format!("{:?}", id), "TicketId(abc-123)");
    }

    #[test]
    fn test_ticket_id_serializes_as_plain_string() {
        let id = TicketId::new("abc-123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc-123\"");
    }
}
