//! Injected capabilities: the time source and the ticket id generator.
//!
//! The ledger never reads the wall clock or an RNG directly. Production code
//! uses [`SystemClock`] and [`RandomTicketIds`]; tests supply deterministic
//! implementations.

use crate::types::TicketId;

/// A source of block timestamps.
pub trait Clock {
    /// Current time in Unix milliseconds.
    fn now_millis(&self) -> i64;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

impl<F: Fn() -> i64> Clock for F {
    fn now_millis(&self) -> i64 {
        self()
    }
}

/// A source of fresh ticket identifiers.
///
/// Implementations must never yield [`TicketId::GENESIS_STR`] and should not
/// repeat an id within one ledger.
pub trait TicketIdSource {
    /// Produce the next identifier.
    fn next_id(&mut self) -> TicketId;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTicketIds;

impl TicketIdSource for RandomTicketIds {
    fn next_id(&mut self) -> TicketId {
        TicketId::generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_recent() {
        // 2024-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_704_067_200_000);
    }

    #[test]
    fn test_closure_clock() {
        let clock = || 42i64;
        assert_eq!(clock.now_millis(), 42);
    }

    #[test]
    fn test_random_ids_are_fresh() {
        let mut ids = RandomTicketIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(!a.is_genesis());
    }
}
