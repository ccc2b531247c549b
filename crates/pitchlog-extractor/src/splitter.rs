//! Splitting an archive into message blocks

use crate::config::DEFAULT_BLOCK_DELIMITER;
use crate::types::RawBlock;

/// Splits archive text on a fixed delimiter
pub struct BlockSplitter {
    delimiter: String,
}

impl BlockSplitter {
    /// Create a new splitter
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// Split the archive into trimmed, non-empty blocks numbered from 1
    pub fn split<'a>(&self, text: &'a str) -> Vec<RawBlock<'a>> {
        text.split(self.delimiter.as_str())
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .enumerate()
            .map(|(idx, chunk)| RawBlock::new(idx + 1, chunk))
            .collect()
    }
}

impl Default for BlockSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_DELIMITER)
    }
}

/// Split with the default five-newline delimiter
pub fn split_blocks(text: &str) -> Vec<RawBlock<'_>> {
    BlockSplitter::default().split(text)
}
