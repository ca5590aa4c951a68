//! The work-intake side of the pipeline: a fixed-capacity, lock-guarded
//! LIFO buffer with a closed flag for end-of-input signalling.
//!
//! Nothing here blocks. A refused add hands the record back, a take on an
//! empty buffer returns `None`, and callers spin-retry. The closed flag is
//! the only end-of-stream signal; the protocol for reading it correctly is
//! documented on [`WorkBuffer::is_closed`].

use crate::types::Record;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Fixed-capacity concurrent intake buffer.
///
/// Removal is LIFO. Work items are interchangeable, so stack discipline
/// costs nothing and keeps both operations a push/pop on the tail of the
/// backing `Vec`, which never reallocates past its construction capacity.
#[derive(Debug)]
pub struct WorkBuffer {
    slots: Mutex<Vec<Record>>,
    capacity: usize,
    closed: AtomicBool,
}

impl WorkBuffer {
    /// Creates a buffer that never holds more than `capacity` records.
    ///
    /// A zero capacity would leave the feeder spinning forever against a
    /// buffer no worker can drain, so it is clamped to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
            closed: AtomicBool::new(false),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Attempts to append a record without blocking.
    ///
    /// On a full buffer the record is handed back unchanged so the caller
    /// can retry without cloning.
    pub fn try_add(&self, record: Record) -> Result<(), Record> {
        let mut slots = self.slots.lock().expect("work buffer lock poisoned");
        if slots.len() < self.capacity {
            slots.push(record);
            Ok(())
        } else {
            Err(record)
        }
    }

    /// Attempts to remove the most recently added record without blocking.
    pub fn try_take(&self) -> Option<Record> {
        self.slots.lock().expect("work buffer lock poisoned").pop()
    }

    /// Marks the buffer closed: no further adds will ever arrive. Idempotent.
    ///
    /// The release store pairs with the acquire load in [`is_closed`], so a
    /// thread that observes the flag also observes every add that preceded
    /// it.
    ///
    /// [`is_closed`]: WorkBuffer::is_closed
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    /// Whether the feeder has finished.
    ///
    /// "Empty" and "closed" are not checked atomically together, so a
    /// consumer must read this flag BEFORE a take attempt and only treat a
    /// failed take as terminal when the flag was already set beforehand.
    /// The feeder completes all of its adds before closing, so that
    /// ordering guarantees no item is missed. A failed take without a
    /// prior closed observation must spin, never exit.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Current resident count. May be momentarily stale for non-owning
    /// threads; suitable for termination heuristics only.
    pub fn len(&self) -> usize {
        self.slots.lock().expect("work buffer lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
