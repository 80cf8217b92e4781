//! Canonical CBOR encoding of block fields for hashing.
//!
//! Block digests are taken over deterministic CBOR (RFC 8949 core
//! deterministic encoding):
//! - A map with integer keys 0..=5, sorted by encoded key bytes
//! - Integers use the smallest valid encoding
//! - Text strings carry a definite length prefix
//!
//! Length prefixes keep field boundaries unambiguous: buyer `"ab"` with event
//! `"c"` encodes differently from buyer `"a"` with event `"bc"`.
//!
//! **This encoding is frozen.** Changing it changes every block hash.

use ciborium::value::Value;

use crate::crypto::BlockHash;

/// Domain separation prefix fed to the hasher before the CBOR map.
pub const BLOCK_DOMAIN: &[u8] = b"ticket-ledger/block/v1";

/// Map keys (integer keys for compact encoding).
///
/// Keys 0-23 encode as single bytes in CBOR.
mod keys {
    pub const INDEX: u64 = 0;
    pub const TIMESTAMP: u64 = 1;
    pub const TICKET_ID: u64 = 2;
    pub const BUYER_NAME: u64 = 3;
    pub const EVENT_NAME: u64 = 4;
    pub const PREVIOUS_HASH: u64 = 5;
}

/// The six hashed fields of a block, borrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockFields<'a> {
    pub index: u64,
    pub timestamp: i64,
    pub ticket_id: &'a str,
    pub buyer_name: &'a str,
    pub event_name: &'a str,
    pub previous_hash: &'a str,
}

impl BlockFields<'_> {
    /// Canonical CBOR bytes of these fields.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(64 + self.text_len());
        encode_value_to(&mut buf, &fields_to_cbor_value(self));
        buf
    }

    /// SHA-256 over `BLOCK_DOMAIN || canonical_bytes`.
    pub fn digest(&self) -> BlockHash {
        BlockHash::hash_parts(&[BLOCK_DOMAIN, &self.canonical_bytes()])
    }

    fn text_len(&self) -> usize {
        self.ticket_id.len() + self.buyer_name.len() + self.event_name.len() + self.previous_hash.len()
    }
}

/// Convert block fields to a CBOR map value.
fn fields_to_cbor_value(fields: &BlockFields<'_>) -> Value {
    // Entries in key order (already sorted 0-5)
    let entries = vec![
        (
            Value::Integer(keys::INDEX.into()),
            Value::Integer(fields.index.into()),
        ),
        (
            Value::Integer(keys::TIMESTAMP.into()),
            Value::Integer(fields.timestamp.into()),
        ),
        (
            Value::Integer(keys::TICKET_ID.into()),
            Value::Text(fields.ticket_id.to_string()),
        ),
        (
            Value::Integer(keys::BUYER_NAME.into()),
            Value::Text(fields.buyer_name.to_string()),
        ),
        (
            Value::Integer(keys::EVENT_NAME.into()),
            Value::Text(fields.event_name.to_string()),
        ),
        (
            Value::Integer(keys::PREVIOUS_HASH.into()),
            Value::Text(fields.previous_hash.to_string()),
        ),
    ];

    Value::Map(entries)
}

/// Recursively encode a CBOR value.
///
/// Only the value kinds produced by [`fields_to_cbor_value`] are supported.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Integer(i) => encode_integer(buf, *i),
        Value::Text(s) => encode_text(buf, s),
        Value::Map(entries) => encode_map_canonical(buf, entries),
        _ => unreachable!("block fields only contain integers and text"),
    }
}

/// Encode a CBOR integer (major types 0 and 1).
fn encode_integer(buf: &mut Vec<u8>, i: ciborium::value::Integer) {
    let n: i128 = i.into();

    if n >= 0 {
        encode_uint(buf, 0, n as u64);
    } else {
        // CBOR encodes -1 as 0, -2 as 1, etc.
        encode_uint(buf, 1, (-1 - n) as u64);
    }
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffff_ffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a text string (major type 3).
fn encode_text(buf: &mut Vec<u8>, s: &str) {
    encode_uint(buf, 3, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}

/// Encode a map canonically (major type 5), keys sorted by encoded bytes.
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) {
    let mut pairs: Vec<(Vec<u8>, &Value)> = entries
        .iter()
        .map(|(k, v)| {
            let mut key_buf = Vec::new();
            encode_value_to(&mut key_buf, k);
            (key_buf, v)
        })
        .collect();

    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    encode_uint(buf, 5, pairs.len() as u64);
    for (key_bytes, value) in pairs {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value);
    }
}
