//! CLI argument parsing.

use clap::Parser;
use pitchlog_extractor::{OnMalformed, TimeFormat};
use std::path::PathBuf;

/// pitchlog - Extract structured facts from an archive of recruiter messages.
///
/// Prints one JSON object per message to stdout.
#[derive(Debug, Parser)]
#[command(name = "pitchlog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Message archive to read
    #[arg(default_value = "raw.txt")]
    pub input: PathBuf,

    /// Configuration file (TOML)
    #[arg(short, long, env = "PITCHLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// How to render the `time` field
    #[arg(long, value_enum)]
    pub time_format: Option<TimeFormatArg>,

    /// What to do with a message whose header or date cannot be read
    #[arg(long, value_enum)]
    pub on_malformed: Option<OnMalformedArg>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Time format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TimeFormatArg {
    /// Hour, then 12-hour-clock hour (historical output)
    Legacy,
    /// Hour and minutes
    Fixed,
}

impl From<TimeFormatArg> for TimeFormat {
    fn from(arg: TimeFormatArg) -> Self {
        match arg {
            TimeFormatArg::Legacy => TimeFormat::Legacy,
            TimeFormatArg::Fixed => TimeFormat::Fixed,
        }
    }
}

/// Malformed block policy options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OnMalformedArg {
    /// Stop at the first malformed message
    Abort,
    /// Report malformed messages and continue
    Skip,
}

impl From<OnMalformedArg> for OnMalformed {
    fn from(arg: OnMalformedArg) -> Self {
        match arg {
            OnMalformedArg::Abort => OnMalformed::Abort,
            OnMalformedArg::Skip => OnMalformed::Skip,
        }
    }
}

impl Cli {
    /// Log filter implied by `-v` flags
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
