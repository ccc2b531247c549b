//! Configuration for the Extractor
//!
//! Personal tokens and the company list are reference data, not code: they
//! are loaded once (from TOML or the built-in defaults) and handed to the
//! [`Extractor`](crate::Extractor) by value.

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Block delimiter used by the archive export: five consecutive newlines
pub const DEFAULT_BLOCK_DELIMITER: &str = "\n\n\n\n\n";

/// Companies recognised out of the box
const DEFAULT_COMPANIES: &[&str] = &[
    "@fb.com",
    "Amazon",
    "Ariga",
    "Biller",
    "Bitpanda",
    "BOTS",
    "Capgemini Client",
    "Capri Partners",
    "Crowdstrike",
    "DCVTechnologies",
    "Elastic",
    "Enreach",
    "Flexport",
    "FLYR Labs",
    "Form3",
    "GeekSoft Consulting",
    "HCL Technologies",
    "HelloFresh",
    "InDebted",
    "IndyKite",
    "Lightspeed",
    "M2A Media",
    "Makersite",
    "Marko",
    "Mollie",
    "Nebius",
    "NetData",
    "Orbis",
    "planet.com",
    "Pollen",
    "PostNL",
    "Prodapt",
    "Seamly",
    "Sendcloud",
    "Sentinels",
    "Smart.pr",
    "Smiler",
    "TCS",
    "Tessian",
    "v7labs",
    "viafintech",
    "vpTech",
];

/// How the `time` field is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    /// `%H:%I`: hour, then the 12-hour-clock hour where minutes belong.
    /// Matches records produced by earlier versions of the tool.
    Legacy,
    /// `%H:%M`: hour and minutes
    Fixed,
}

impl TimeFormat {
    /// chrono format string for this variant
    pub fn pattern(&self) -> &'static str {
        match self {
            TimeFormat::Legacy => "%H:%I",
            TimeFormat::Fixed => "%H:%M",
        }
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        TimeFormat::Legacy
    }
}

/// What to do with a block whose header or date cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnMalformed {
    /// Stop the whole run at the first malformed block
    Abort,
    /// Report the block and keep going
    Skip,
}

impl Default for OnMalformed {
    fn default() -> Self {
        OnMalformed::Abort
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Tokens meaning "the sender used my name"
    pub self_name_tokens: BTreeSet<String>,

    /// Nickname tokens; only someone who read the CV knows them
    pub nickname_tokens: BTreeSet<String>,

    /// Literal that marks a templated reply even when the name is present
    pub injection_canary: String,

    /// Company names or domains, searched in sorted order
    pub known_companies: BTreeSet<String>,

    /// Separator between message blocks in the archive
    pub block_delimiter: String,

    /// Rendering of the `time` field
    pub time_format: TimeFormat,

    /// Policy for malformed blocks
    pub on_malformed: OnMalformed,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            self_name_tokens: BTreeSet::from(["Nikita".to_string()]),
            nickname_tokens: BTreeSet::from(["Gram".to_string()]),
            injection_canary: "OR 1 --".to_string(),
            known_companies: DEFAULT_COMPANIES.iter().map(|c| c.to_string()).collect(),
            block_delimiter: DEFAULT_BLOCK_DELIMITER.to_string(),
            time_format: TimeFormat::default(),
            on_malformed: OnMalformed::default(),
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.self_name_tokens.is_empty() {
            return Err("self_name_tokens must not be empty".to_string());
        }
        if self.self_name_tokens.iter().chain(&self.nickname_tokens).any(|t| t.is_empty()) {
            return Err("name tokens must not be empty strings".to_string());
        }
        if self.injection_canary.is_empty() {
            return Err("injection_canary must not be empty".to_string());
        }
        if self.known_companies.iter().any(|c| c.is_empty()) {
            return Err("known_companies must not contain empty strings".to_string());
        }
        if self.block_delimiter.is_empty() {
            return Err("block_delimiter must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate().map_err(ExtractorError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ExtractorError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }
}
