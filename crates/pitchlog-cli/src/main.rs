//! pitchlog CLI - Extract structured facts from a recruiter message archive.

use clap::Parser;
use pitchlog_cli::Cli;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code when the run finished but some messages were skipped
const EXIT_SKIPPED: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the records
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = BufWriter::new(io::stdout().lock());
    match pitchlog_cli::run(&cli, stdout) {
        Ok(summary) if summary.skipped.is_empty() => ExitCode::SUCCESS,
        Ok(summary) => {
            for skipped in &summary.skipped {
                eprintln!("Skipped message #{}: {}", skipped.index, skipped.reason);
            }
            ExitCode::from(EXIT_SKIPPED)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
