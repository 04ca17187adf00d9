//! Core ledger types for batch transaction validation

use serde::{Deserialize, Serialize};

/// Hash type: 256-bit transaction digest
pub type Hash = [u8; 32];

/// Byte string type (public keys, DER signatures)
pub type ByteString = Vec<u8>;

/// Exact integer amount carried by an output
pub type Value = i64;

/// Reference to a single output of a previously accepted transaction.
///
/// Equality and hashing cover both fields; the pair is the unique key into
/// the unspent-output pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutputReference {
    pub txid: Hash,
    pub index: u32,
}

/// An unspent output: the amount it holds and the public key entitled to
/// spend it.
///
/// Records are never mutated in place. Spending removes the record; the
/// spending transaction creates fresh ones under its own identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub value: Value,
    pub owner: ByteString,
}
