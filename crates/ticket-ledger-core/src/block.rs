//! Block: one immutable ledger entry.
//!
//! A block records a single ticket issuance (or the genesis marker) and
//! commits to its fields with a SHA-256 hash fixed at construction.

use serde::{Deserialize, Serialize};

use crate::canonical::BlockFields;
use crate::crypto::BlockHash;
use crate::types::TicketId;

/// Sentinel stored in the genesis block's `previous_hash`.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// A ledger entry.
///
/// Fields are public so callers can inspect them; the chain detects any
/// modification made after construction through [`Block::recompute_hash`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain (genesis is 0).
    pub index: u64,

    /// Creation time (Unix milliseconds).
    pub timestamp: i64,

    /// The ticket this block issues, or `GENESIS`.
    pub ticket_id: TicketId,

    /// Free-text buyer name.
    pub buyer_name: String,

    /// Free-text event name.
    pub event_name: String,

    /// Hex hash of the preceding block, or `"0"` for genesis.
    pub previous_hash: String,

    /// Hex hash of the six fields above, computed at construction.
    pub hash: String,
}

impl Block {
    /// Build a block and commit to its fields.
    pub fn new(
        index: u64,
        timestamp: i64,
        ticket_id: TicketId,
        buyer_name: impl Into<String>,
        event_name: impl Into<String>,
        previous_hash: impl Into<String>,
    ) -> Self {
        let mut block = Self {
            index,
            timestamp,
            ticket_id,
            buyer_name: buyer_name.into(),
            event_name: event_name.into(),
            previous_hash: previous_hash.into(),
            hash: String::new(),
        };
        block.hash = block.compute_digest().to_hex();
        block
    }

    /// Build the genesis block.
    pub fn genesis(timestamp: i64, buyer_name: &str, event_name: &str) -> Self {
        Self::new(
            0,
            timestamp,
            TicketId::genesis(),
            buyer_name,
            event_name,
            GENESIS_PREVIOUS_HASH,
        )
    }

    /// The hashed fields, borrowed.
    pub fn fields(&self) -> BlockFields<'_> {
        BlockFields {
            index: self.index,
            timestamp: self.timestamp,
            ticket_id: self.ticket_id.as_str(),
            buyer_name: &self.buyer_name,
            event_name: &self.event_name,
            previous_hash: &self.previous_hash,
        }
    }

    /// Re-derive the digest from the current field values.
    pub fn compute_digest(&self) -> BlockHash {
        self.fields().digest()
    }

    /// Re-derive the hex hash from the current field values.
    ///
    /// Equals `self.hash` as long as no field has been modified.
    pub fn recompute_hash(&self) -> String {
        self.compute_digest().to_hex()
    }

    /// Whether the stored hash still matches the fields.
    pub fn is_intact(&self) -> bool {
        self.hash == self.recompute_hash()
    }

    /// Whether this is the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.index == 0 && self.ticket_id.is_genesis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Block {
        Block::new(
            1,
            1_736_870_400_000,
            TicketId::new("9b2f7a52-1c4e-4d1a-9a51-0d6a3f4b2c11"),
            "Alice",
            "Concert",
            "ab".repeat(32),
        )
    }

    #[test]
    fn test_hash_is_hex_sha256() {
        let block = sample();
        assert_eq!(block.hash.len(), 64);
        assert!(block.hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(BlockHash::from_hex(&block.hash).unwrap(), block.compute_digest());
    }

    #[test]
    fn test_recompute_matches_stored() {
        let block = sample();
        assert_eq!(block.recompute_hash(), block.hash);
        assert!(block.is_intact());
    }

    #[test]
    fn test_same_fields_same_hash() {
        assert_eq!(sample().hash, sample().hash);
    }

    #[test]
    fn test_each_field_is_committed() {
        let original = sample();

        let mut b = original.clone();
        b.index = 2;
        assert!(!b.is_intact());

        let mut b = original.clone();
        b.timestamp += 1;
        assert!(!b.is_intact());

        let mut b = original.clone();
        b.ticket_id = TicketId::new("forged");
        assert!(!b.is_intact());

        let mut b = original.clone();
        b.buyer_name = "Mallory".into();
        assert!(!b.is_intact());

        let mut b = original.clone();
        b.event_name = "Opera".into();
        assert!(!b.is_intact());

        let mut b = original;
        b.previous_hash = "0".into();
        assert!(!b.is_intact());
    }

    #[test]
    fn test_recompute_has_no_side_effects() {
        let mut block = sample();
        block.buyer_name = "Mallory".into();
        let stored = block.hash.clone();
        let _ = block.recompute_hash();
        assert_eq!(block.hash, stored);
    }

    #[test]
    fn test_genesis_block() {
        let genesis = Block::genesis(0, "System", "Genesis Event");
        assert!(genesis.is_genesis());
        assert_eq!(genesis.index, 0);
        assert_eq!(genesis.previous_hash, GENESIS_PREVIOUS_HASH);
        assert_eq!(genesis.ticket_id, "GENESIS");
        assert!(genesis.is_intact());
        assert!(!sample().is_genesis());
    }

    #[test]
    fn test_block_json_roundtrip_keeps_hash_valid() {
        let block = sample();
        let json = serde_json::to_string(&block).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
        assert!(back.is_intact());
    }
}
