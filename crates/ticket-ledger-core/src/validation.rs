//! Chain validation: hash re-derivation and link checks.

use crate::block::{Block, GENESIS_PREVIOUS_HASH};
use crate::error::IntegrityViolation;

/// Check that a block's stored hash matches its fields.
pub fn verify_block(position: usize, block: &Block) -> Result<(), IntegrityViolation> {
    let computed = block.recompute_hash();
    if computed != block.hash {
        return Err(IntegrityViolation::HashMismatch {
            position,
            stored: block.hash.clone(),
            computed,
        });
    }
    Ok(())
}

/// Check that `block` (at `position`) follows directly after `previous`.
///
/// This performs:
/// - Index continuity (`previous.index + 1`)
/// - Link check (`previous_hash == previous.hash`)
pub fn verify_link(
    position: usize,
    previous: &Block,
    block: &Block,
) -> Result<(), IntegrityViolation> {
    let expected_index = previous.index.wrapping_add(1);
    if block.index != expected_index {
        return Err(IntegrityViolation::IndexGap {
            position,
            expected: expected_index,
            found: block.index,
        });
    }

    if block.previous_hash != previous.hash {
        return Err(IntegrityViolation::BrokenLink {
            position,
            expected: previous.hash.clone(),
            found: block.previous_hash.clone(),
        });
    }

    Ok(())
}

/// Check the genesis block: index 0, sentinel id and link, intact hash.
pub fn verify_genesis(block: &Block) -> Result<(), IntegrityViolation> {
    if block.index != 0 {
        return Err(genesis_mismatch(format!("index is {}", block.index)));
    }
    if !block.ticket_id.is_genesis() {
        return Err(genesis_mismatch(format!("ticket id is {}", block.ticket_id)));
    }
    if block.previous_hash != GENESIS_PREVIOUS_HASH {
        return Err(genesis_mismatch(format!(
            "previous_hash is {}",
            block.previous_hash
        )));
    }
    verify_block(0, block)
}

/// Verify the tail of the chain (every block after genesis).
///
/// Each block is checked for (a) an intact hash and (b) a correct link to its
/// predecessor. Returns the first violation found.
pub fn verify_links(blocks: &[Block]) -> Result<(), IntegrityViolation> {
    for (position, pair) in blocks.windows(2).enumerate() {
        let position = position + 1;
        verify_block(position, &pair[1])?;
        verify_link(position, &pair[0], &pair[1])?;
    }
    Ok(())
}

/// Verify a whole chain, genesis included, stopping at the first violation.
pub fn verify_chain(blocks: &[Block]) -> Result<(), IntegrityViolation> {
    if let Some(genesis) = blocks.first() {
        verify_genesis(genesis)?;
    }
    verify_links(blocks)
}

/// Collect every violation in the chain.
///
/// Checking continues past each violation, so one removed block reports both
/// the index gap and the broken link at the position it left behind.
pub fn audit_chain(blocks: &[Block]) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();

    if let Some(genesis) = blocks.first() {
        if let Err(e) = verify_genesis(genesis) {
            violations.push(e);
        }
    }

    for (position, pair) in blocks.windows(2).enumerate() {
        let position = position + 1;
        if let Err(e) = verify_block(position, &pair[1]) {
            violations.push(e);
        }
        if let Err(e) = verify_link(position, &pair[0], &pair[1]) {
            violations.push(e);
        }
    }

    violations
}

fn genesis_mismatch(reason: String) -> IntegrityViolation {
    IntegrityViolation::GenesisMismatch { reason }
}
