//! # Ticket Ledger Core
//!
//! Pure primitives for the ticket ledger: blocks, digests, and the
//! hash-linked chain that records every issued ticket.
//!
//! This crate contains no I/O. Time and identifier generation come in through
//! the [`Clock`] and [`TicketIdSource`] capabilities.
//!
//! ## Key Types
//!
//! - [`Block`] - One immutable ledger entry, committing to its fields
//! - [`Ledger`] - The append-only chain: issue, find, validate, list
//! - [`TicketId`] - Opaque ticket identifier (random UUID, or `GENESIS`)
//! - [`IntegrityViolation`] - Where and how a chain check failed
//!
//! ## Hashing
//!
//! Block hashes are SHA-256 over deterministic CBOR. See [`canonical`].
//!
//! ```rust
//! use ticket_ledger_core::Ledger;
//!
//! let mut ledger = Ledger::new();
//! let id = ledger.issue("Alice", "Concert");
//! assert_eq!(ledger.find(id.as_str()).unwrap().buyer_name, "Alice");
//! assert!(ledger.validate());
//! ```

pub mod block;
pub mod canonical;
pub mod capability;
pub mod config;
pub mod crypto;
pub mod error;
pub mod ledger;
pub mod types;
pub mod validation;

pub use block::{Block, GENESIS_PREVIOUS_HASH};
pub use canonical::{BlockFields, BLOCK_DOMAIN};
pub use capability::{Clock, RandomTicketIds, SystemClock, TicketIdSource};
pub use config::LedgerConfig;
pub use crypto::BlockHash;
pub use error::{IntegrityViolation, LedgerError, Result};
pub use ledger::{Ledger, Tickets};
pub use types::TicketId;
pub use validation::{audit_chain, verify_chain};
