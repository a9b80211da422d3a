//! Command-line interface for img-size-compress
//!
//! A single command: point it at a directory and it shrinks the JPEG and PNG
//! files inside, printing per-file sizes as JSON on stdout.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

mod output;

pub use output::Output;

use crate::report::{self, table};
use crate::runner;

/// Shrink the JPEG and PNG images in a directory by re-encoding them in place
#[derive(Parser, Debug)]
#[command(name = "img-size-compress", author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing images to compress (not searched recursively)
    #[arg(value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Increase log verbosity on stderr (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress logs and per-file skip notices; fatal errors are still shown
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single-line JSON array of {name, original, final}
    Json,
    /// Aligned table with human-readable sizes and total saved
    Table,
}

impl Cli {
    /// Execute the run and print the report
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.quiet);
        let results = runner::run(&self.directory, &output)?;

        match self.format {
            OutputFormat::Json => println!("{}", report::to_json_line(&results)?),
            OutputFormat::Table => print!("{}", table::render_table(&results)),
        }

        Ok(())
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // Logs share stderr with diagnostics; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
