//! CLI tool to render person data (.yaml) into memorial books.
//!
//! Usage:
//!   in-memoriam -d persons.yaml -f person-format.txt -o books/
//!   in-memoriam -d persons.yaml
//!
//! Without a format file the fixed section order is used. One file per
//! non-empty book is written as `<output>/<data-name>-<GROUP>.txt`.

use clap::Parser;
use in_memoriam::{
    Layout, Result, output_prefix, read_records, read_template, render_records, write_buckets,
};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Render remembered persons into one text file per group of initials.
#[derive(Parser)]
#[command(name = "in-memoriam")]
struct Cli {
    /// The input YAML file containing the persons data
    #[arg(short, long, default_value = "persons.yaml")]
    data: PathBuf,

    /// The input TXT file containing person formatting
    #[arg(short, long)]
    format: Option<PathBuf>,

    /// The output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Log paths and per-book counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    debug!(data = %cli.data.display(), output = %cli.output.display(), "starting");

    let records = read_records(&cli.data)?;
    let layout = match &cli.format {
        Some(path) => Layout::Template(read_template(path)?),
        None => Layout::FixedOrder,
    };

    let buckets = render_records(records, &layout)?;
    write_buckets(&cli.output, &output_prefix(&cli.data), &buckets)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
