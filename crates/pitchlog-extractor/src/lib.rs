//! pitchlog Extractor
//!
//! Pulls structured facts out of recruiter messages exported from a chat
//! archive.
//!
//! # Overview
//!
//! An archive is one flat text file. Messages are separated by five blank
//! lines and look roughly like this:
//!
//! ```text
//! Jane Doe (She/Her)  3:45 PM
//! · 2nd
//! Talent Partner at Mollie
//! Mar 7
//! Hi Nikita, we pay 80k-120k for Python engineers...
//! ```
//!
//! Each field of a [`FieldRecord`] comes from its own heuristic in
//! [`fields`]. The sender header and the date are required; every other field
//! falls back to an empty value when its pattern does not match.
//!
//! # Architecture
//!
//! ```text
//! archive text → BlockSplitter → RawBlock → Extractor → FieldRecord → JSON line
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use pitchlog_extractor::{split_blocks, Extractor, ExtractorConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new(ExtractorConfig::default())?;
//! let archive = std::fs::read_to_string("raw.txt")?;
//!
//! for block in split_blocks(&archive) {
//!     println!("{}", extractor.extract_json_line(&block)?);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod patterns;
mod splitter;
mod extractor;
pub mod fields;

#[cfg(test)]
mod tests;

pub use error::ExtractorError;
pub use config::{ExtractorConfig, OnMalformed, TimeFormat, DEFAULT_BLOCK_DELIMITER};
pub use types::{FieldRecord, OutputRecord, RawBlock, Salary};
pub use splitter::{split_blocks, BlockSplitter};
pub use extractor::Extractor;
