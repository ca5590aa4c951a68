//! # Roster Loading
//!
//! This module is the exclusive entry point for user-provided data: it
//! reads the JSON roster file into an ordered list of [`Record`]s.
//!
//! - Strict schema: the wire field names (`name`, `username`, `gender`,
//!   `year`, `grade`) are not configurable; serde maps them onto the
//!   domain names in `types`.
//! - User-centric errors: failures here are assumed to be user-input
//!   errors and carry the offending path, so the message alone is
//!   actionable.
//!
//! The core receives an already-parsed sequence; nothing downstream of
//! this module touches the filesystem on the input side.

use crate::types::Record;
use log::warn;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A comprehensive error type for roster loading failures.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("roster file '{}' is not a valid record list: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The on-disk shape: a single object holding the `records` array.
#[derive(Debug, Deserialize)]
struct Roster {
    records: Vec<Record>,
}

/// Loads the ordered record list from `path`.
///
/// An empty roster is legal (the run produces an empty report) but almost
/// certainly unintended, so it is logged.
pub fn load_records(path: &Path) -> Result<Vec<Record>, RosterError> {
    let raw = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let roster: Roster = serde_json::from_str(&raw).map_err(|source| RosterError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if roster.records.is_empty() {
        warn!(
            "roster '{}' contains no records; the report will be empty",
            path.display()
        );
    }

    Ok(roster.records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_roster(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp roster");
        file.write_all(contents.as_bytes()).expect("write roster");
        file
    }

    #[test]
    fn loads_records_and_maps_wire_names() {
        let file = write_roster(
            r#"{"records": [
                {"name": "A", "username": "a1", "gender": "M", "year": 2021, "grade": 8.5}
            ]}"#,
        );

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "A");
        assert_eq!(records[0].handle, "a1");
        assert_eq!(records[0].category, "M");
        assert_eq!(records[0].rank, 2021);
        assert_eq!(records[0].score, 8.5);
    }

    #[test]
    fn preserves_input_order() {
        let file = write_roster(
            r#"{"records": [
                {"name": "B", "username": "b1", "gender": "F", "year": 2022, "grade": 6.0},
                {"name": "A", "username": "a1", "gender": "M", "year": 2021, "grade": 8.5}
            ]}"#,
        );

        let records = load_records(file.path()).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_records(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let file = write_roster(r#"{"records": [{"name": "A"#);
        let err = load_records(file.path()).unwrap_err();
        assert!(matches!(err, RosterError::Parse { .. }));
    }

    #[test]
    fn missing_fields_are_a_parse_error() {
        let file = write_roster(r#"{"records": [{"name": "A", "username": "a1"}]}"#);
        let err = load_records(file.path()).unwrap_err();
        assert!(matches!(err, RosterError::Parse { .. }));
    }
}
