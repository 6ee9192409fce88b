//! Theater Billing CLI
//!
//! Reads a play catalog and a performance list, then prints one statement per
//! customer.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- plays.csv performances.csv > statements.txt
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use log::info;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use theater_billing::{read_summaries, PlayCatalog, Result, Statement, StatementError, UsdFormatter};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(StatementError::MissingArgument);
    }

    let catalog = PlayCatalog::from_csv(BufReader::new(File::open(&args[1])?))?;
    let summaries = read_summaries(BufReader::new(File::open(&args[2])?))?;
    info!(
        "Loaded {} plays and {} customers",
        catalog.len(),
        summaries.len()
    );

    // Price everything before printing so a bad row never yields partial output.
    let statements = summaries
        .iter()
        .map(|summary| Statement::compute(summary, &catalog))
        .collect::<Result<Vec<_>>>()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for statement in &statements {
        statement.write_to(&mut handle, &UsdFormatter)?;
    }

    Ok(())
}
