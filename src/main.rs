//! kintone-csv CLI
//!
//! Command-line interface for converting between CSV files and kintone
//! records.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- import --schema fields.json records.csv > records.json
//! cargo run -- import --schema fields.json --marker-column PRIMARY --group-column record records.csv
//! cargo run -- export records.json > records.csv
//! cargo run -- export --utc records.json > records.csv
//! ```
//!
//! Converted output goes to stdout; logs go to stderr and are controlled by
//! `RUST_LOG` (default `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed CSV or JSON, write failure, etc.)

use kintone_csv::cli;
use kintone_csv::strategy;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let strategy = strategy::create_strategy(&args.command);

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(args.command.input_file(), &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
