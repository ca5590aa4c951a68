// ========================================================================================
//
//                         THE STRATEGIC ORCHESTRATOR: QUERN
//
// ========================================================================================
//
// This binary is the conductor of the application. Its sole responsibility
// is to drive the phases in order (parse arguments, load the roster, run
// the concurrent pipeline, write the report) while owning every major
// resource. Complex tuning lives as internal constants in the modules that
// need it; the CLI exposes only the knobs a user has reason to turn.

use clap::Parser;
use quern::pipeline::{self, RunOptions};
use quern::report;
use quern::roster;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

// ========================================================================================
//                         COMMAND-LINE INTERFACE DEFINITION
// ========================================================================================

#[derive(Parser, Debug)]
#[clap(
    name = "quern",
    version,
    about = "A concurrent digest engine for ranked record reports."
)]
struct Args {
    /// Path to the JSON roster of records to digest.
    input: PathBuf,

    /// Path for the flat text report.
    #[clap(long, default_value = "report.txt")]
    out: PathBuf,

    /// Total thread pool size: one feeder plus the workers.
    #[clap(long, default_value_t = num_cpus::get())]
    threads: usize,

    /// Work buffer capacity. Defaults to half the roster size.
    #[clap(long)]
    capacity: Option<usize>,
}

// ========================================================================================
//                           THE MAIN ORCHESTRATION LOGIC
// ========================================================================================

fn main() {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();

    // --- Phase 1: Ingest ---
    eprintln!("> Reading roster: {}", args.input.display());
    let records = match roster::load_records(&args.input) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Fatal error reading input: {e}");
            process::exit(1);
        }
    };
    eprintln!("> Loaded {} records", records.len());

    // --- Phase 2: The parallel region ---
    let options = RunOptions {
        threads: args.threads,
        capacity: args.capacity,
    };
    let store = pipeline::run(records, &options);
    eprintln!("> {} results passed the score filter", store.len());

    // --- Phase 3: Report ---
    if let Err(e) = report::write_report(&args.out, &store) {
        eprintln!("Error writing report '{}': {e}", args.out.display());
        process::exit(1);
    }
    eprintln!("> Report written to {}", args.out.display());

    eprintln!(
        "\nSuccess! Total execution time: {:.2?}",
        start_time.elapsed()
    );
}
