//! Configuration resolution for the CLI.

use crate::cli::Cli;
use crate::error::Result;
use pitchlog_extractor::ExtractorConfig;
use tracing::debug;

/// Build the extractor config: file (or defaults), then command-line overrides.
pub fn resolve(cli: &Cli) -> Result<ExtractorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration");
            ExtractorConfig::from_file(path)?
        }
        None => ExtractorConfig::default(),
    };

    if let Some(time_format) = cli.time_format {
        config.time_format = time_format.into();
    }
    if let Some(on_malformed) = cli.on_malformed {
        config.on_malformed = on_malformed.into();
    }

    Ok(config)
}
