//! Ledger: the ordered, append-only chain of ticket blocks.
//!
//! The ledger owns its blocks exclusively. It grows only through
//! [`Ledger::issue`], which assigns the next index and links to the current
//! head inside a single `&mut self` call, so two appends can never claim the
//! same predecessor.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::block::Block;
use crate::capability::{Clock, RandomTicketIds, SystemClock, TicketIdSource};
use crate::config::LedgerConfig;
use crate::error::{IntegrityViolation, LedgerError, Result};
use crate::types::TicketId;
use crate::validation::{audit_chain, verify_chain};

/// Iterator over issued tickets (every block after genesis).
///
/// The iterator is `Clone`, so a pass can be replayed without touching the
/// ledger.
pub type Tickets<'a> = std::iter::Skip<std::slice::Iter<'a, Block>>;

/// The ticket ledger.
///
/// Generic over its time source and id generator; [`Ledger::new`] uses the
/// system clock and random UUIDs.
#[derive(Debug, Clone)]
pub struct Ledger<C: Clock = SystemClock, G: TicketIdSource = RandomTicketIds> {
    /// The chain. Never empty: position 0 is genesis.
    blocks: Vec<Block>,
    /// ticket_id -> position of the first block carrying it.
    positions: HashMap<TicketId, usize>,
    clock: C,
    ids: G,
    config: LedgerConfig,
}

impl Ledger {
    /// Create a ledger with default configuration and capabilities.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create a ledger with the given configuration and default capabilities.
    pub fn with_config(config: LedgerConfig) -> Self {
        Self::with_capabilities(config, SystemClock, RandomTicketIds)
    }

    /// Rebuild a ledger around an existing chain.
    ///
    /// The chain is taken as-is, tampered or not, so it can be inspected with
    /// [`Ledger::validate`]. Fails only when `blocks` is empty.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self> {
        Self::from_blocks_with(blocks, SystemClock, RandomTicketIds)
    }

    /// Rebuild a ledger around an existing chain, rejecting a broken one.
    pub fn from_verified_blocks(blocks: Vec<Block>) -> Result<Self> {
        verify_chain(&blocks)?;
        Self::from_blocks(blocks)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, G: TicketIdSource> Ledger<C, G> {
    /// Create a ledger holding only a genesis block.
    pub fn with_capabilities(config: LedgerConfig, clock: C, ids: G) -> Self {
        let genesis = Block::genesis(
            clock.now_millis(),
            &config.genesis_buyer,
            &config.genesis_event,
        );
        debug!(hash = %genesis.hash, "created ledger");

        let mut positions = HashMap::new();
        positions.insert(genesis.ticket_id.clone(), 0);

        Self {
            blocks: vec![genesis],
            positions,
            clock,
            ids,
            config,
        }
    }

    /// Rebuild a ledger around an existing chain with the given capabilities.
    pub fn from_blocks_with(blocks: Vec<Block>, clock: C, ids: G) -> Result<Self> {
        if blocks.is_empty() {
            return Err(LedgerError::EmptyChain);
        }

        let mut positions = HashMap::with_capacity(blocks.len());
        for (position, block) in blocks.iter().enumerate() {
            positions.entry(block.ticket_id.clone()).or_insert(position);
        }

        let genesis = &blocks[0];
        let config = LedgerConfig {
            genesis_buyer: genesis.buyer_name.clone(),
            genesis_event: genesis.event_name.clone(),
        };

        Ok(Self {
            blocks,
            positions,
            clock,
            ids,
            config,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Append
    // ─────────────────────────────────────────────────────────────────────────

    /// Issue a ticket: append a block for it and return its id.
    pub fn issue(&mut self, buyer_name: &str, event_name: &str) -> TicketId {
        let ticket_id = self.ids.next_id();
        let (index, previous_hash) = {
            let head = self.head();
            (head.index.wrapping_add(1), head.hash.clone())
        };

        let block = Block::new(
            index,
            self.clock.now_millis(),
            ticket_id.clone(),
            buyer_name,
            event_name,
            previous_hash,
        );
        debug!(index, ticket_id = %ticket_id, hash = %block.hash, "issued ticket");

        let position = self.blocks.len();
        if ticket_id.is_genesis() {
            warn!(position, "id source yielded the reserved genesis id; lookups return the genesis block");
        } else if self.positions.contains_key(&ticket_id) {
            warn!(ticket_id = %ticket_id, "id source repeated a ticket id; lookups return the earlier block");
        } else {
            self.positions.insert(ticket_id.clone(), position);
        }
        self.blocks.push(block);

        ticket_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lookup
    // ─────────────────────────────────────────────────────────────────────────

    /// Find the first block carrying `ticket_id`.
    pub fn find(&self, ticket_id: &str) -> Option<&Block> {
        let found = self
            .positions
            .get(ticket_id)
            .and_then(|&position| self.blocks.get(position))
            .filter(|block| block.ticket_id == ticket_id);
        trace!(ticket_id, found = found.is_some(), "ticket lookup");
        found
    }

    /// Issued tickets in chain order, genesis excluded.
    pub fn list_all(&self) -> Tickets<'_> {
        self.blocks.iter().skip(1)
    }

    /// Block at the given chain position.
    pub fn get(&self, position: usize) -> Option<&Block> {
        self.blocks.get(position)
    }

    /// The most recently appended block.
    pub fn head(&self) -> &Block {
        // non-empty by construction
        &self.blocks[self.blocks.len() - 1]
    }

    /// The genesis block.
    pub fn genesis(&self) -> &Block {
        &self.blocks[0]
    }

    /// Every block, genesis first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks, genesis included.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of issued tickets.
    pub fn ticket_count(&self) -> usize {
        self.blocks.len() - 1
    }

    /// The configuration the genesis block was built from.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Give up the chain.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Integrity
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether every hash and link in the chain checks out.
    ///
    /// Stricter than a hash-and-link walk over blocks 1..n: the genesis block
    /// must also be well formed (index 0, `GENESIS` id, `"0"` link, intact
    /// hash) and stored indices must run without gaps. See
    /// [`Ledger::verify_chain`] for which check failed.
    pub fn validate(&self) -> bool {
        self.verify_chain().is_ok()
    }

    /// Like [`Ledger::validate`], but report the first violation.
    pub fn verify_chain(&self) -> std::result::Result<(), IntegrityViolation> {
        let result = verify_chain(&self.blocks);
        if let Err(violation) = &result {
            warn!(position = violation.position(), %violation, "chain integrity check failed");
        }
        result
    }

    /// Every violation in the chain.
    pub fn audit(&self) -> Vec<IntegrityViolation> {
        let violations = audit_chain(&self.blocks);
        if !violations.is_empty() {
            warn!(count = violations.len(), "chain audit found violations");
        }
        violations
    }
}
