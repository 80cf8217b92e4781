//! Human-readable rendering of blocks and integrity reports.

use chrono::{DateTime, Utc};

use ticket_ledger_core::{Block, IntegrityViolation};

/// Separator printed after each ticket in a listing.
pub const RULE: &str = "--------------------------------------------------";

/// Render Unix milliseconds as `Tue Jan 14 16:00:00 2025 UTC`.
///
/// Out-of-range values fall back to the raw number.
pub fn format_timestamp(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(at) => at.format("%a %b %e %H:%M:%S %Y UTC").to_string(),
        None => format!("{millis} ms"),
    }
}

/// One ticket as it appears in the full listing.
pub fn format_ticket(block: &Block) -> String {
    format!(
        "Index: {}\nTicket ID: {}\nBuyer: {}\nEvent: {}\nIssued on: {}\nHash: {}\n{}\n",
        block.index,
        block.ticket_id,
        block.buyer_name,
        block.event_name,
        format_timestamp(block.timestamp),
        block.hash,
        RULE,
    )
}

/// The one-line summary shown after a successful verification.
pub fn format_verified(block: &Block) -> String {
    format!(
        "Buyer: {}, Event: {}, Issued: {}",
        block.buyer_name,
        block.event_name,
        format_timestamp(block.timestamp)
    )
}

/// One line per violation, prefixed with a bullet.
pub fn format_violations(violations: &[IntegrityViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}\n"))
        .collect()
}
