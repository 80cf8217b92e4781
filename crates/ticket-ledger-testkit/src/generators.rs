//! Proptest generators for property-based testing.

use proptest::prelude::*;

use crate::fixtures::Tamper;

/// Free text as a buyer or event name might arrive: any unicode, possibly
/// empty.
pub fn free_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z][A-Za-z .'-]{0,23}".prop_map(String::from),
        any::<String>(),
        Just(String::new()),
    ]
}

/// A (buyer, event) pair to issue.
pub fn issuance() -> impl Strategy<Value = (String, String)> {
    (free_text(), free_text())
}

/// A list of issuances of length within `len`.
pub fn issuances(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(issuance(), len)
}

/// A timestamp anywhere in the representable range.
pub fn timestamp() -> impl Strategy<Value = i64> {
    any::<i64>()
}

/// A hex-looking hash value.
pub fn hex_hash() -> impl Strategy<Value = String> {
    "[0-9a-f]{64}".prop_map(String::from)
}

/// A field-level tamper. Values are marked so they never equal what the
/// fixtures issue (`buyer-N`, `Concert`, sequential ids, step clock times).
pub fn field_tamper() -> impl Strategy<Value = Tamper> {
    prop_oneof![
        free_text().prop_map(|s| Tamper::BuyerName(format!("~{s}"))),
        free_text().prop_map(|s| Tamper::EventName(format!("~{s}"))),
        free_text().prop_map(|s| Tamper::TicketId(format!("~{s}"))),
        (-1_000_000i64..0).prop_map(Tamper::Timestamp),
        (1_000u64..u64::MAX).prop_map(Tamper::Index),
        hex_hash().prop_map(|h| Tamper::PreviousHash(format!("~{h}"))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticket_ledger_core::{Block, TicketId};

    proptest! {
        #[test]
        fn test_block_hash_deterministic(
            (buyer, event) in issuance(),
            ts in timestamp(),
            prev in hex_hash(),
        ) {
            let a = Block::new(1, ts, TicketId::new("t"), buyer.clone(), event.clone(), prev.clone());
            let b = Block::new(1, ts, TicketId::new("t"), buyer, event, prev);
            prop_assert_eq!(&a.hash, &b.hash);
            prop_assert_eq!(a.recompute_hash(), a.hash);
        }

        #[test]
        fn test_split_point_changes_hash(text in "[a-z]{2,16}", split in 1usize..16) {
            let split = split.min(text.len() - 1);
            let (left, right) = text.split_at(split);
            let a = Block::new(1, 0, TicketId::new("t"), left, right, "0");
            let b = Block::new(1, 0, TicketId::new("t"), text.as_str(), "", "0");
            prop_assert_ne!(a.hash, b.hash);
        }
    }
}
