//! Output-side collaborator: the fixed-width flat text report.
//!
//! One header line, then one line per result in the store's final order.
//! Columns are left-justified with fixed widths of name(12), handle(17),
//! category(7), rank(4), score(5), separated by `" |"`, with the digest
//! last. The widths are a compatibility contract with downstream readers
//! of the report, so they live in one place here.

use crate::store::ResultStore;
use crate::types::Scored;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes the full report to `path`, truncating any existing file.
///
/// This function minimizes I/O overhead the same way the rest of the crate
/// does: each line is formatted into a reusable in-memory buffer before
/// being written to the `BufWriter` in a single operation. Rows are read
/// back through the store's bounds-checked `get`, so a bad index surfaces
/// as an error rather than a silently truncated report.
pub fn write_report(path: &Path, store: &ResultStore) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let mut line_buffer = String::new();
    header_line(&mut line_buffer);
    writeln!(writer, "{line_buffer}")?;

    for index in 0..store.len() {
        let scored = store.get(index).map_err(io::Error::other)?;
        line_buffer.clear();
        result_line(&mut line_buffer, &scored);
        writeln!(writer, "{line_buffer}")?;
    }

    writer.flush()
}

fn header_line(buffer: &mut String) {
    // The `unwrap` is safe because writing to a `String` cannot fail.
    write!(
        buffer,
        "{:<12} |{:<17} |{:<7} |{:<4} |{:<5} |{}",
        "Name", "Handle", "Class", "Rank", "Score", "Digest"
    )
    .unwrap();
}

fn result_line(buffer: &mut String, scored: &Scored) {
    let record = &scored.record;
    write!(
        buffer,
        "{:<12} |{:<17} |{:<7} |{:<4} |{:<5} |{}",
        record.name, record.handle, record.category, record.rank, record.score, scored.digest
    )
    .unwrap();
}
