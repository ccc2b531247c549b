//! Error types for the CLI application.

use pitchlog_extractor::ExtractorError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Archive could not be read
    #[error("Failed to read {}: {source}", path.display())]
    ReadArchive {
        /// Archive path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Extraction setup error (config, patterns)
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),

    /// A message could not be parsed and the run was aborted
    #[error("Malformed message #{index}: {source}")]
    MalformedBlock {
        /// 1-based position of the message in the archive
        index: usize,
        /// What was wrong with it
        source: ExtractorError,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
