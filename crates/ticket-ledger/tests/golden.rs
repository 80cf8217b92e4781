//! Golden digest vectors, checked through the public facade.

use ticket_ledger::core::verify_chain;
use ticket_ledger::Block;
use ticket_ledger_testkit::{all_vectors, block_from_vector, verify_all_vectors, TestFixture};

#[test]
fn golden_vectors_match() {
    assert_eq!(verify_all_vectors(), Ok(()));
}

#[test]
fn golden_chain_is_valid() {
    let blocks: Vec<Block> = all_vectors()[..3].iter().map(block_from_vector).collect();
    assert!(verify_chain(&blocks).is_ok());
}

#[test]
fn deterministic_ledger_reproduces_golden_chain() {
    let mut fixture = TestFixture::new();
    fixture.issue("Alice", "Concert");
    fixture.issue("Bob", "Concert");

    let expected: Vec<&str> = all_vectors()[..3].iter().map(|v| v.hash).collect();
    let actual: Vec<&str> = fixture.ledger.blocks().iter().map(|b| b.hash.as_str()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn boundary_vectors_differ() {
    let vectors = all_vectors();
    let ab_c = vectors.iter().find(|v| v.name == "boundary_ab_c").unwrap();
    let a_bc = vectors.iter().find(|v| v.name == "boundary_a_bc").unwrap();
    assert_ne!(ab_c.hash, a_bc.hash);
}
