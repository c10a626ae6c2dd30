//! CLI tool that converts pasted lists into person data YAML.
//!
//! Reads lines from stdin (or a file) until end of input and prints the
//! YAML list items for each line.

use clap::Parser;
use lists_extract::extract;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process;

/// Convert pasted memberships ("Site (date), ...") or remembrances
/// ("one; two; ...") into YAML list items.
#[derive(Parser)]
#[command(name = "lists-extract")]
struct Cli {
    /// Read lines from this file instead of stdin
    #[arg(short, long)]
    input: Option<String>,
}

fn run(reader: impl BufRead) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in reader.lines() {
        for yaml in extract(&line?) {
            writeln!(out, "{yaml}")?;
        }
        out.flush()?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.input {
        Some(path) => match File::open(path) {
            Ok(file) => run(BufReader::new(file)),
            Err(e) => {
                eprintln!("Error reading input file '{path}': {e}");
                process::exit(1);
            }
        },
        None => run(io::stdin().lock()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
