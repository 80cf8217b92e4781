//! # Ticket Ledger Testkit
//!
//! Testing utilities for the ticket ledger.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed block inputs with their expected canonical bytes and hashes
//! - **Generators**: Proptest strategies for names, timestamps, and tampering
//! - **Fixtures**: Deterministic clock and id sources, and a ledger wired to them
//!
//! ## Golden Vectors
//!
//! ```rust
//! use ticket_ledger_testkit::vectors::{all_vectors, block_from_vector};
//!
//! for vector in all_vectors() {
//!     let block = block_from_vector(&vector);
//!     assert_eq!(block.hash, vector.hash);
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use ticket_ledger_testkit::fixtures::{Tamper, TestFixture};
//! use ticket_ledger_core::Ledger;
//!
//! let fixture = TestFixture::with_tickets(3);
//! let blocks = fixture.tampered_blocks(2, &Tamper::BuyerName("Mallory".into()));
//! assert!(!Ledger::from_blocks(blocks).unwrap().validate());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{test_ledger, SequentialTicketIds, StepClock, Tamper, TestFixture, TestLedger};
pub use generators::{field_tamper, free_text, issuance, issuances};
pub use vectors::{all_vectors, block_from_vector, verify_all_vectors, GoldenVector};
