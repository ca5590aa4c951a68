//! The result-collection side of the pipeline: an always-sorted store that
//! accepts out-of-order completions under a single lock.

use crate::types::Scored;
use std::sync::Mutex;
use thiserror::Error;

/// Errors from indexed access into the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("result index {index} is out of bounds for a store of {len} entries")]
    OutOfBounds { index: usize, len: usize },
}

/// Unbounded concurrent collector that keeps results in descending
/// `(rank, score)` order at all times.
///
/// Insertion scans from the front for the first entry that does not outrank
/// the newcomer and shift-inserts there. An equal key therefore lands just
/// before the entries it ties with; the relative order among equal keys is
/// not a contract. Every qualifying result is placed; there is no
/// deduplication by key.
#[derive(Debug, Default)]
pub struct ResultStore {
    entries: Mutex<Vec<Scored>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a result at its sorted position.
    ///
    /// Linear in the current store size, all of it under the lock. The
    /// store never exceeds the input size, which bounds the hold time.
    pub fn add(&self, scored: Scored) {
        let mut entries = self.entries.lock().expect("result store lock poisoned");
        let key = scored.record.rank_key();
        let position = entries
            .iter()
            .position(|existing| existing.record.rank_key() <= key)
            .unwrap_or(entries.len());
        entries.insert(position, scored);
    }

    /// Returns a copy of the entry at `index`.
    pub fn get(&self, index: usize) -> Result<Scored, StoreError> {
        let entries = self.entries.lock().expect("result store lock poisoned");
        entries.get(index).cloned().ok_or(StoreError::OutOfBounds {
            index,
            len: entries.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("result store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the store and returns the final ordering. Call only after
    /// every writer has been joined.
    pub fn into_results(self) -> Vec<Scored> {
        self.entries.into_inner().expect("result store lock poisoned")
    }
}
