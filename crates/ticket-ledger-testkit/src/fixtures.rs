//! Test fixtures and helpers.
//!
//! Deterministic capabilities and ways to corrupt a chain on purpose.

use std::cell::Cell;

use ticket_ledger_core::{Block, Clock, Ledger, LedgerConfig, TicketId, TicketIdSource};

/// Start time used by [`StepClock::default`]: 2025-01-14T16:00:00Z.
pub const FIXTURE_EPOCH_MILLIS: i64 = 1_736_870_400_000;

/// A clock that advances by a fixed step on every reading.
#[derive(Debug, Clone)]
pub struct StepClock {
    next: Cell<i64>,
    step: i64,
}

impl StepClock {
    /// Start at `start`, advancing `step` milliseconds per reading.
    pub fn new(start: i64, step: i64) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }

    /// A clock that always returns the same instant.
    pub fn frozen(at: i64) -> Self {
        Self::new(at, 0)
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new(FIXTURE_EPOCH_MILLIS, 1000)
    }
}

impl Clock for StepClock {
    fn now_millis(&self) -> i64 {
        let now = self.next.get();
        self.next.set(now.saturating_add(self.step));
        now
    }
}

/// Predictable ids in UUID layout: `00000000-0000-4000-8000-000000000001`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialTicketIds {
    issued: u64,
}

impl SequentialTicketIds {
    /// The id the `n`th call (1-based) returns.
    pub fn nth(n: u64) -> TicketId {
        TicketId::new(format!("00000000-0000-4000-8000-{:012x}", n))
    }
}

impl TicketIdSource for SequentialTicketIds {
    fn next_id(&mut self) -> TicketId {
        self.issued += 1;
        Self::nth(self.issued)
    }
}

/// A ledger wired to deterministic capabilities.
pub type TestLedger = Ledger<StepClock, SequentialTicketIds>;

/// Create an empty deterministic ledger.
pub fn test_ledger() -> TestLedger {
    Ledger::with_capabilities(
        LedgerConfig::default(),
        StepClock::default(),
        SequentialTicketIds::default(),
    )
}

/// A deterministic ledger plus the ids it has issued.
pub struct TestFixture {
    pub ledger: TestLedger,
    pub issued: Vec<TicketId>,
}

impl TestFixture {
    /// Create a fixture holding only genesis.
    pub fn new() -> Self {
        Self {
            ledger: test_ledger(),
            issued: Vec::new(),
        }
    }

    /// Create a fixture with `count` tickets issued to `buyer-1`, `buyer-2`, ...
    pub fn with_tickets(count: usize) -> Self {
        let mut fixture = Self::new();
        for i in 1..=count {
            fixture.issue(&format!("buyer-{i}"), "Concert");
        }
        fixture
    }

    /// Issue a ticket and remember its id.
    pub fn issue(&mut self, buyer: &str, event: &str) -> TicketId {
        let id = self.ledger.issue(buyer, event);
        self.issued.push(id.clone());
        id
    }

    /// A copy of the chain with one modification applied.
    pub fn tampered_blocks(&self, position: usize, tamper: &Tamper) -> Vec<Block> {
        let mut blocks = self.ledger.blocks().to_vec();
        tamper.apply(&mut blocks, position);
        blocks
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A single post-hoc modification of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tamper {
    BuyerName(String),
    EventName(String),
    TicketId(String),
    Timestamp(i64),
    Index(u64),
    PreviousHash(String),
    /// Remove the block entirely.
    Remove,
    /// Swap the block with its successor.
    SwapWithNext,
}

impl Tamper {
    /// Apply to the block at `position`.
    ///
    /// Field tampers that would leave the value unchanged still rewrite it, so
    /// callers should pick values that differ from the original.
    pub fn apply(&self, blocks: &mut Vec<Block>, position: usize) {
        match self {
            Tamper::BuyerName(v) => blocks[position].buyer_name = v.clone(),
            Tamper::EventName(v) => blocks[position].event_name = v.clone(),
            Tamper::TicketId(v) => blocks[position].ticket_id = TicketId::new(v.clone()),
            Tamper::Timestamp(v) => blocks[position].timestamp = *v,
            Tamper::Index(v) => blocks[position].index = *v,
            Tamper::PreviousHash(v) => blocks[position].previous_hash = v.clone(),
            Tamper::Remove => {
                blocks.remove(position);
            }
            Tamper::SwapWithNext => blocks.swap(position, position + 1),
        }
    }
}
