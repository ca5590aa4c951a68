//! End-to-end coverage: roster file in, ranked report out, exercising the
//! same path the binary drives.

use quern::pipeline::{self, RunOptions};
use quern::report;
use quern::roster;
use quern::types::Record;
use std::fs;
use std::io::Write;
use tempfile::tempdir;

const ROSTER: &str = r#"{"records": [
    {"name": "A", "username": "a1", "gender": "M", "year": 2021, "grade": 8.5},
    {"name": "B", "username": "b1", "gender": "F", "year": 2022, "grade": 6.0},
    {"name": "C", "username": "c1", "gender": "F", "year": 2021, "grade": 9.0}
]}"#;

fn options(threads: usize) -> RunOptions {
    RunOptions {
        threads,
        capacity: None,
    }
}

#[test]
fn roster_to_report_round_trip() {
    let dir = tempdir().unwrap();
    let roster_path = dir.path().join("roster.json");
    let report_path = dir.path().join("report.txt");
    fs::File::create(&roster_path)
        .unwrap()
        .write_all(ROSTER.as_bytes())
        .unwrap();

    let records = roster::load_records(&roster_path).unwrap();
    assert_eq!(records.len(), 3);

    let store = pipeline::run(records, &options(4));
    report::write_report(&report_path, &store).unwrap();

    let contents = fs::read_to_string(&report_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    // B is filtered out (6.0 <= 7); C outranks A by score within rank 2021.
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Name"));
    assert!(lines[1].starts_with("C "));
    assert!(lines[2].starts_with("A "));
    assert!(!contents.contains("b1"));

    // Every result row ends in a 64-character hex digest.
    for row in &lines[1..] {
        let digest = row.rsplit('|').next().unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.bytes().all(|b| b.is_ascii_hexdigit()));
    }
}

#[test]
fn report_is_identical_across_pool_sizes() {
    let make = || -> Vec<Record> {
        (0..60)
            .map(|i| Record {
                name: format!("r{i}"),
                handle: format!("h{i}"),
                category: if i % 2 == 0 { "F" } else { "M" }.to_string(),
                rank: 2015 + (i % 5),
                score: 5.0 + (i % 10) as f64,
            })
            .collect()
    };

    let dir = tempdir().unwrap();
    let narrow_path = dir.path().join("narrow.txt");
    let wide_path = dir.path().join("wide.txt");

    let narrow = pipeline::run(
        make(),
        &RunOptions {
            threads: 2,
            capacity: Some(1),
        },
    );
    let wide = pipeline::run(make(), &options(8));
    report::write_report(&narrow_path, &narrow).unwrap();
    report::write_report(&wide_path, &wide).unwrap();

    let narrow_contents = fs::read_to_string(&narrow_path).unwrap();
    let wide_contents = fs::read_to_string(&wide_path).unwrap();

    // Digests and the ranked key order are deterministic; only the
    // relative order among identical keys may differ between runs, so the
    // reports are compared as sorted line sets.
    let mut narrow_lines: Vec<&str> = narrow_contents.lines().collect();
    let mut wide_lines: Vec<&str> = wide_contents.lines().collect();
    assert_eq!(narrow_lines.len(), wide_lines.len());
    narrow_lines.sort_unstable();
    wide_lines.sort_unstable();
    assert_eq!(narrow_lines, wide_lines);
}
