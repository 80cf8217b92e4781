//! # Ticket Ledger
//!
//! Event tickets recorded on an append-only, hash-linked ledger.
//!
//! ## Overview
//!
//! Every issued ticket becomes a block whose SHA-256 hash commits to its own
//! fields and to the hash of the block before it. Any later edit to a block,
//! or any removal or reordering, shows up when the chain is validated.
//!
//! - **Issue**: append a block for a buyer and an event, get a ticket id back
//! - **Verify**: look a ticket id up
//! - **Validate**: re-derive every hash and link
//! - **List**: walk the issued tickets in order
//!
//! ## Usage
//!
//! ```rust
//! use ticket_ledger::Ledger;
//!
//! let mut ledger = Ledger::new();
//! let alice = ledger.issue("Alice", "Concert");
//! ledger.issue("Bob", "Concert");
//!
//! assert!(ledger.validate());
//! assert_eq!(ledger.find(alice.as_str()).unwrap().buyer_name, "Alice");
//! assert_eq!(ledger.list_all().count(), 2);
//! ```
//!
//! The `ticket-ledger` binary wraps the same operations in an interactive
//! menu; see [`cli::Menu`].
//!
//! ## Re-exports
//!
//! - `ticket_ledger::core` - Core primitives (Block, Ledger, TicketId, ...)

pub mod cli;
pub mod config;
pub mod display;
pub mod error;

// Re-export component crates
pub use ticket_ledger_core as core;

// Re-export main types for convenience
pub use cli::{Choice, Menu};
pub use config::{CliConfig, Command};
pub use error::{CliError, Result};

// Re-export commonly used core types
pub use ticket_ledger_core::{
    Block, BlockHash, Clock, IntegrityViolation, Ledger, LedgerConfig, LedgerError,
    RandomTicketIds, SystemClock, TicketId, TicketIdSource,
};
