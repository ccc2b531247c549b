//! pitchlog CLI library.
//!
//! This library provides the pieces behind the `pitchlog` binary: argument
//! parsing, configuration resolution, the archive pipeline and JSON-lines
//! output.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;

pub use cli::Cli;
pub use error::{CliError, Result};
pub use output::RecordWriter;
pub use pipeline::{process_archive, run, RunSummary, SkippedBlock};
