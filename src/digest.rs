//! The per-record workload: a deterministic, deliberately expensive digest.
//!
//! The digest primitive itself is an opaque pure function (SHA-256); the
//! cost comes from chaining it over its own hex rendering. Identical
//! records always produce identical digests, no matter which worker thread
//! computes them or in what order.

use crate::types::Record;
use sha2::{Digest, Sha256};

/// Number of self-composition rounds applied after the base digest. This is
/// a fixed cost amplifier, not configuration.
const CHAIN_ROUNDS: usize = 100;

/// Renders the canonical byte string for a record: fields in fixed order
/// (name, rank, score, handle, category), no separators. Any change to
/// this order changes every digest.
fn canonical_bytes(record: &Record) -> Vec<u8> {
    format!(
        "{}{}{}{}{}",
        record.name, record.rank, record.score, record.handle, record.category
    )
    .into_bytes()
}

/// Computes the chained digest for one record, hex-encoded.
///
/// The base digest covers the canonical field rendering; each subsequent
/// round hashes the previous round's hex output concatenated with the
/// 0-based round index in decimal.
pub fn chain(record: &Record) -> String {
    let mut current = hex::encode(Sha256::digest(canonical_bytes(record)));
    for round in 0..CHAIN_ROUNDS {
        let mut hasher = Sha256::new();
        hasher.update(current.as_bytes());
        hasher.update(round.to_string().as_bytes());
        current = hex::encode(hasher.finalize());
    }
    current
}
