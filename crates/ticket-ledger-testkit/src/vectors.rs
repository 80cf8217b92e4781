//! Golden test vectors for the block digest.
//!
//! Any change to the canonical encoding or the domain prefix breaks these.
//! The first three vectors form a linked chain: genesis, Alice, Bob.

use serde::Serialize;

use ticket_ledger_core::{Block, TicketId};

/// A block's inputs with its expected canonical bytes and hash.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    pub name: &'static str,
    pub description: &'static str,

    // Inputs
    pub index: u64,
    pub timestamp: i64,
    pub ticket_id: &'static str,
    pub buyer_name: &'static str,
    pub event_name: &'static str,
    pub previous_hash: &'static str,

    // Expected outputs (hex)
    pub canonical_bytes: &'static str,
    pub hash: &'static str,
}

const GENESIS_HASH: &str = "79394fd53718edf0af8edc695da5f6781d3153a66654dcaa8a41f9bfcab8da2a";
const ALICE_HASH: &str = "59b96c71b486c05e5eb0951e57b8671a2efbadde39097c51b4dd52484361646e";

/// All golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "genesis",
            description: "Default genesis block",
            index: 0,
            timestamp: 1_736_870_400_000,
            ticket_id: "GENESIS",
            buyer_name: "System",
            event_name: "Genesis Event",
            previous_hash: "0",
            canonical_bytes: "a60000011b00000194658b1000026747454e45534953036653797374656d046d47656e65736973204576656e74056130",
            hash: GENESIS_HASH,
        },
        GoldenVector {
            name: "first_ticket",
            description: "Alice's ticket, linked to genesis",
            index: 1,
            timestamp: 1_736_870_401_000,
            ticket_id: "00000000-0000-4000-8000-000000000001",
            buyer_name: "Alice",
            event_name: "Concert",
            previous_hash: GENESIS_HASH,
            canonical_bytes: "a60001011b00000194658b13e802782430303030303030302d303030302d343030302d383030302d3030303030303030303030310365416c6963650467436f6e6365727405784037393339346664353337313865646630616638656463363935646135663637383164333135336136363635346463616138613431663962666361623864613261",
            hash: ALICE_HASH,
        },
        GoldenVector {
            name: "second_ticket",
            description: "Bob's ticket, linked to Alice's",
            index: 2,
            timestamp: 1_736_870_402_000,
            ticket_id: "00000000-0000-4000-8000-000000000002",
            buyer_name: "Bob",
            event_name: "Concert",
            previous_hash: ALICE_HASH,
            canonical_bytes: "a60002011b00000194658b17d002782430303030303030302d303030302d343030302d383030302d3030303030303030303030320363426f620467436f6e6365727405784035396239366337316234383663303565356562303935316535376238363731613265666261646465333930393763353162346464353234383433363136343665",
            hash: "0ca32218f0311fd774b3f5406d753fb75c99ba764342da26f5b26e9756fa098e",
        },
        GoldenVector {
            name: "boundary_ab_c",
            description: "Buyer \"ab\", event \"c\"",
            index: 1,
            timestamp: 0,
            ticket_id: "t",
            buyer_name: "ab",
            event_name: "c",
            previous_hash: "0",
            canonical_bytes: "a60001010002617403626162046163056130",
            hash: "c7e4d1c4c631036f22c1e5a6e9a3e844acb02152d8c1f52b943642cec4c1a640",
        },
        GoldenVector {
            name: "boundary_a_bc",
            description: "Buyer \"a\", event \"bc\": same concatenation, different hash",
            index: 1,
            timestamp: 0,
            ticket_id: "t",
            buyer_name: "a",
            event_name: "bc",
            previous_hash: "0",
            canonical_bytes: "a60001010002617403616104626263056130",
            hash: "305b458dbbf2f04376c935ee06e6693cb6af630695a5340d5fa04d5db569b820",
        },
        GoldenVector {
            name: "unicode_negative_time",
            description: "Multi-byte text and a timestamp before the epoch",
            index: 1,
            timestamp: -1,
            ticket_id: "t",
            buyer_name: "Zoë 🎟\u{fe0f}",
            event_name: "Café Night",
            previous_hash: "0",
            canonical_bytes: "a600010120026174036c5a6fc3ab20f09f8e9fefb88f046b436166c3a9204e69676874056130",
            hash: "05f08864c436e05ec6c9d217e521a3ffa5b95228d5805d11bd42d1d768f6f327",
        },
        GoldenVector {
            name: "all_empty",
            description: "Empty text fields at index 0",
            index: 0,
            timestamp: 0,
            ticket_id: "",
            buyer_name: "",
            event_name: "",
            previous_hash: "0",
            canonical_bytes: "a600000100026003600460056130",
            hash: "b8badd091f5baf4ff3cab88f5bd6cdb359d9a26ca0630bb7db8872bb22ac5df4",
        },
    ]
}

/// Build the block a vector describes.
pub fn block_from_vector(vector: &GoldenVector) -> Block {
    Block::new(
        vector.index,
        vector.timestamp,
        TicketId::new(vector.ticket_id),
        vector.buyer_name,
        vector.event_name,
        vector.previous_hash,
    )
}

/// Check every vector, returning the names of the ones that do not match.
pub fn verify_all_vectors() -> Result<(), Vec<&'static str>> {
    let failures: Vec<&'static str> = all_vectors()
        .iter()
        .filter(|v| {
            let block = block_from_vector(v);
            hex::encode(block.fields().canonical_bytes()) != v.canonical_bytes || block.hash != v.hash
        })
        .map(|v| v.name)
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_match() {
        for vector in all_vectors() {
            let block = block_from_vector(&vector);
            assert_eq!(
                hex::encode(block.fields().canonical_bytes()),
                vector.canonical_bytes,
                "canonical bytes for {}",
                vector.name
            );
            assert_eq!(block.hash, vector.hash, "hash for {}", vector.name);
        }
        assert!(verify_all_vectors().is_ok());
    }

    #[test]
    fn test_chain_vectors_link() {
        let vectors = all_vectors();
        let blocks: Vec<Block> = vectors[..3].iter().map(block_from_vector).collect();
        assert!(ticket_ledger_core::verify_chain(&blocks).is_ok());
    }

    #[test]
    fn test_vectors_serialize() {
        let json = serde_json::to_string_pretty(&all_vectors()).unwrap();
        assert!(json.contains("boundary_a_bc"));
    }
}
