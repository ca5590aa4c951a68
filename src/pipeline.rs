// ========================================================================================
//
//                              THE CONCURRENT PIPELINE
//
// ========================================================================================
//
// This module owns the parallel region: one feeder thread pushes every
// record into the shared `WorkBuffer`, N worker threads drain it, compute
// the chained digest, and insert qualifying results into the shared
// `ResultStore`. All coordination is spin-retry against the two container
// locks; the only end-of-stream signal is the buffer's closed flag. The
// region is one `thread::scope`: every role is spawned together and joined
// together, and the run is complete when the scope exits.

use crate::buffer::WorkBuffer;
use crate::digest;
use crate::store::ResultStore;
use crate::types::{Record, Scored};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::debug;
use std::hint;
use std::io::IsTerminal;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

// --- Pipeline Tuning Parameters ---

/// Records scoring at or below this floor are dropped before the store.
const SCORE_FLOOR: f64 = 7.0;
/// How often the updater thread refreshes the progress bar.
const PROGRESS_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Sizing for one pipeline run.
///
/// `threads` counts the whole pool, one feeder plus the workers, so it
/// maps directly onto "number of parallel threads". A pool of one still
/// gets a worker, otherwise no run could ever finish.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub threads: usize,
    /// Work buffer capacity; defaults to half the input size when `None`.
    pub capacity: Option<usize>,
}

impl RunOptions {
    pub fn workers(&self) -> usize {
        self.threads.saturating_sub(1).max(1)
    }

    fn capacity_for(&self, input_len: usize) -> usize {
        self.capacity.unwrap_or(input_len / 2).max(1)
    }
}

fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let draw_target = if std::io::stderr().is_terminal() {
        ProgressDrawTarget::stderr_with_hz(20)
    } else {
        ProgressDrawTarget::hidden()
    };

    let pb = ProgressBar::with_draw_target(Some(len), draw_target);
    pb.set_style(
        ProgressStyle::with_template(
            "> [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        )
        .expect("progress bar template is valid")
        .progress_chars("█▉▊▋▌▍▎▏  "),
    );
    pb.set_message(message.to_string());

    pb
}

/// Executes the full concurrent pipeline and returns the populated store,
/// already in final ranked order.
///
/// Synchronous: returns only after the feeder and every worker have been
/// joined, so the store is safe to read without further synchronization.
pub fn run(records: Vec<Record>, options: &RunOptions) -> ResultStore {
    let total = records.len() as u64;
    let capacity = options.capacity_for(records.len());
    let workers = options.workers();
    debug!("pipeline: {workers} workers, buffer capacity {capacity}, {total} records");

    let buffer = WorkBuffer::with_capacity(capacity);
    let store = ResultStore::new();
    let processed = AtomicU64::new(0);
    let pb = create_progress_bar(total, "Digesting records...");

    thread::scope(|s| {
        let buffer = &buffer;
        let store = &store;
        let processed = &processed;

        // The updater thread polls the shared counter and drives the bar.
        // Its loop ends when every record has been processed (qualifying
        // or not), so it always finishes before the scope does.
        let updater_pb = pb.clone();
        s.spawn(move || {
            while processed.load(Ordering::Relaxed) < total {
                updater_pb.set_position(processed.load(Ordering::Relaxed));
                thread::sleep(PROGRESS_POLL_INTERVAL);
            }
            updater_pb.set_position(processed.load(Ordering::Relaxed));
        });

        // Roles are assigned at spawn time: one feeder, `workers` workers.
        s.spawn(move || feed(records, buffer));
        for _ in 0..workers {
            s.spawn(move || work(buffer, store, processed));
        }
    });

    pb.finish_and_clear();
    store
}

/// The feeder role: pushes every record into the buffer in input order,
/// spin-retrying on a full buffer, then closes it exactly once.
fn feed(records: Vec<Record>, buffer: &WorkBuffer) {
    for record in records {
        let mut pending = record;
        loop {
            match buffer.try_add(pending) {
                Ok(()) => break,
                Err(rejected) => {
                    pending = rejected;
                    hint::spin_loop();
                }
            }
        }
    }
    buffer.close();
}

/// One worker: alternates between seeking a record and processing it until
/// the buffer is empty and closed.
///
/// The closed flag is read before each take attempt. The feeder finishes
/// every add before closing, so a failed take after the flag was already
/// observed set means no work can ever arrive. A failed take without that
/// prior observation means the feeder may still be running, and the worker
/// spins.
fn work(buffer: &WorkBuffer, store: &ResultStore, processed: &AtomicU64) {
    loop {
        let record = loop {
            let closed_before_take = buffer.is_closed();
            match buffer.try_take() {
                Some(record) => break record,
                None if closed_before_take => return,
                None => hint::spin_loop(),
            }
        };

        let digest = digest::chain(&record);
        if record.score > SCORE_FLOOR {
            store.add(Scored { record, digest });
        }
        processed.fetch_add(1, Ordering::Relaxed);
    }
}
