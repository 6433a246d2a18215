//! Line-oriented front end for the matchbook simulator.
//!
//! Reads one command per line (stdin or a file), feeds each placement to
//! the book, and prints the resulting trades followed by the book table.
//! Malformed lines go to the log on stderr and are skipped; stdout stays
//! machine-readable.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use matchbook_core::OrderBook;
use matchbook_protocol::{format_order, format_trade, parse_command, render_book, Command};

#[derive(Parser)]
#[clap(name = "matchbook")]
#[clap(about = "Single-market order-matching simulator")]
struct Cli {
    /// Command file to replay; reads stdin when omitted
    input: Option<PathBuf>,

    /// Echo each accepted order before its trades
    #[clap(long)]
    echo_orders: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    run(reader, cli.echo_orders)
}

fn run(reader: impl BufRead, echo_orders: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut book = OrderBook::new();

    for line in reader.lines() {
        let line = line.context("reading input")?;

        let request = match parse_command(&line) {
            Ok(Command::Place(request)) => request,
            Ok(Command::Comment) | Ok(Command::Blank) => continue,
            Err(err) => {
                // Input errors are non-fatal: report and keep going.
                warn!("{err}");
                continue;
            }
        };

        if echo_orders {
            writeln!(out, "{}", format_order(&request))?;
        }

        // An Err here is an engine defect, not bad input; stop rather
        // than keep printing from a corrupt book.
        let trades = book
            .insert_aggressive(&request)
            .context("matching engine invariant violation")?;

        for trade in &trades {
            writeln!(out, "{}", format_trade(trade))?;
        }
        write!(out, "{}", render_book(&book))?;
    }

    Ok(())
}
