//! Archive → records pipeline.

use crate::cli::Cli;
use crate::config;
use crate::error::{CliError, Result};
use crate::output::RecordWriter;
use pitchlog_extractor::{Extractor, OnMalformed};
use std::fs;
use std::io::Write;
use tracing::{debug, info, warn};

/// A message that was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    /// 1-based position in the archive
    pub index: usize,
    /// Why it was skipped
    pub reason: String,
}

/// Outcome of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Messages found in the archive
    pub blocks: usize,
    /// Records written
    pub written: usize,
    /// Messages skipped under [`OnMalformed::Skip`]
    pub skipped: Vec<SkippedBlock>,
}

/// Extract every message of an archive and write one JSON line per record.
///
/// Output order follows the archive. Under [`OnMalformed::Abort`] the first
/// malformed message stops the run; records already written stay written.
pub fn process_archive<W: Write>(
    archive: &str,
    extractor: &Extractor,
    out: W,
) -> Result<RunSummary> {
    let policy = extractor.config().on_malformed;
    let blocks = extractor.splitter().split(archive);
    let mut writer = RecordWriter::new(out, extractor.config().time_format);
    let mut skipped = Vec::new();

    debug!("Split archive into {} messages", blocks.len());

    for block in &blocks {
        match extractor.extract(block) {
            Ok(record) => writer.write_record(&record)?,
            Err(e) if e.is_malformed_block() => match policy {
                OnMalformed::Abort => {
                    writer.finish()?;
                    return Err(CliError::MalformedBlock {
                        index: block.index,
                        source: e,
                    });
                }
                OnMalformed::Skip => {
                    warn!(block = block.index, "Skipping malformed message: {}", e);
                    skipped.push(SkippedBlock {
                        index: block.index,
                        reason: e.to_string(),
                    });
                }
            },
            Err(e) => return Err(e.into()),
        }
    }

    let written = writer.written();
    writer.finish()?;

    info!(
        "Processed {} messages: {} written, {} skipped",
        blocks.len(),
        written,
        skipped.len()
    );

    Ok(RunSummary {
        blocks: blocks.len(),
        written,
        skipped,
    })
}

/// Resolve config, read the archive named on the command line and process it.
pub fn run<W: Write>(cli: &Cli, out: W) -> Result<RunSummary> {
    let config = config::resolve(cli)?;
    let extractor = Extractor::new(config)?;

    let archive = fs::read_to_string(&cli.input).map_err(|source| CliError::ReadArchive {
        path: cli.input.clone(),
        source,
    })?;

    process_archive(&archive, &extractor, out)
}
