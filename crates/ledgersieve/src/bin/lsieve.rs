//! lsieve - filter a personal expense ledger with boolean queries.
//!
//! # Usage
//!
//! ```bash
//! lsieve -i expense.csv -q '拉麵 OR amount>=500'
//! lsieve -i expense.csv -q 'label:拉麵' -b 'date>=2020/06/01'
//! cat expense.csv | lsieve -q '-(食 amount>=200)'
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use ledgersieve::{ingest, render};
use ledgersieve_core::total_amount;
use ledgersieve_query::query;
use std::io;
use std::process::ExitCode;
use tracing::Level;

/// Filter a personal expense CSV with boolean queries.
#[derive(Parser, Debug)]
#[command(name = "lsieve")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Supported query fields: id, date, major_category, minor_category, amount, \
                  description, label"
)]
struct Args {
    /// Query expression; empty selects everything
    #[arg(short, long, default_value = "")]
    query: String,

    /// Base query defining the denominator set for the percentage line
    /// (defaults to the full input)
    #[arg(short, long, value_name = "QUERY")]
    base_query: Option<String>,

    /// Path to the expense CSV file; reads stdin when omitted
    #[arg(short, long, value_name = "FILE")]
    input: Option<std::path::PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .init();
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let all = match &args.input {
        Some(path) => ingest::read_entries_from_path(path)?,
        None => ingest::read_entries_from_stdin()?,
    };
    tracing::debug!(entries = all.len(), "loaded input");

    let base = match &args.base_query {
        Some(text) => query(&all, text)
            .context("failed to evaluate base query")?
            .into_entries(&all),
        None => all,
    };

    let result = query(&base, &args.query)
        .context("failed to evaluate query")?
        .into_entries(&base);
    tracing::debug!(matched = result.len(), "query evaluated");

    let stdout = io::stdout();
    render::write_table(&mut stdout.lock(), &result, Some(total_amount(&base)))
        .context("failed to write output")?;
    Ok(())
}
