//! Error types for the ticket ledger core.

use thiserror::Error;

/// A break in the chain found while re-deriving hashes and links.
///
/// Positions count from the front of the chain (genesis is 0). They are taken
/// from where the block sits, not from its stored `index`, which may itself
/// have been tampered with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    #[error("block {position}: stored hash {stored} does not match recomputed hash {computed}")]
    HashMismatch {
        position: usize,
        stored: String,
        computed: String,
    },

    #[error("block {position}: previous_hash {found} does not match predecessor hash {expected}")]
    BrokenLink {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("block at position {position}: expected index {expected}, got {found}")]
    IndexGap {
        position: usize,
        expected: u64,
        found: u64,
    },

    #[error("genesis block is malformed: {reason}")]
    GenesisMismatch { reason: String },
}

impl IntegrityViolation {
    /// Position in the chain of the block that failed.
    pub fn position(&self) -> usize {
        match self {
            IntegrityViolation::HashMismatch { position, .. }
            | IntegrityViolation::BrokenLink { position, .. }
            | IntegrityViolation::IndexGap { position, .. } => *position,
            IntegrityViolation::GenesisMismatch { .. } => 0,
        }
    }
}

/// Errors from building a ledger around an existing block sequence.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("a ledger needs at least a genesis block")]
    EmptyChain,

    #[error("integrity violation: {0}")]
    Integrity(#[from] IntegrityViolation),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
