//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// No line in the block looks like a `Name  3:45 PM` header
    #[error("No sender header line found in block starting with {preview:?}")]
    MissingHeader {
        /// First line of the offending block
        preview: String,
    },

    /// Header matched but the name part is not usable
    #[error("Invalid sender name: {name:?}")]
    InvalidSenderName {
        /// Name text after cleanup
        name: String,
    },

    /// Header time token could not be read as a 12-hour clock time
    #[error("Invalid time token: {token:?}")]
    InvalidTime {
        /// Raw time text from the header
        token: String,
    },

    /// Block has no date line
    #[error("No date found in message from {sender}")]
    MissingDate {
        /// Best-effort sender name for locating the block
        sender: String,
    },

    /// Date line found but it does not name a real date
    #[error("Invalid date {token:?} in message from {sender}")]
    InvalidDate {
        /// Best-effort sender name for locating the block
        sender: String,
        /// Matched date text
        token: String,
    },

    /// A built-in pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record could not be rendered as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ExtractorError {
    /// True when the error comes from the block's text rather than from setup.
    ///
    /// Malformed blocks can be skipped; anything else should stop the run.
    pub fn is_malformed_block(&self) -> bool {
        !matches!(
            self,
            ExtractorError::Pattern(_) | ExtractorError::Config(_) | ExtractorError::Serialization(_)
        )
    }
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Config(format!("Failed to parse TOML: {}", e))
    }
}
