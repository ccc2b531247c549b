//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::fields;
use crate::patterns::Patterns;
use crate::splitter::BlockSplitter;
use crate::types::{FieldRecord, RawBlock};
use chrono::{Local, NaiveDate};
use tracing::debug;

/// The Extractor turns one message block into a [`FieldRecord`]
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
    patterns: Patterns,
    reference_date: NaiveDate,
}

impl Extractor {
    /// Create a new Extractor, validating the config and compiling patterns
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            config,
            patterns: Patterns::compile()?,
            reference_date: Local::now().date_naive(),
        })
    }

    /// Pin the date used to fill in a missing year or month
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Splitter matching the configured delimiter
    pub fn splitter(&self) -> BlockSplitter {
        BlockSplitter::new(self.config.block_delimiter.as_str())
    }

    /// Extract every field from a block
    pub fn extract(&self, block: &RawBlock<'_>) -> Result<FieldRecord, ExtractorError> {
        let text = block.text;
        let config = &self.config;

        let (name_text, time_text) = fields::name_time(text, &self.patterns.header)
            .ok_or_else(|| ExtractorError::MissingHeader {
                preview: block.preview().to_string(),
            })?;
        let sender_name = fields::sender_name(name_text)?;
        let time = fields::parse_time(time_text)?;
        let date = fields::date(text, &self.patterns.date, self.reference_date, &sender_name)?;

        debug!(block = block.index, sender = %sender_name, "Extracting fields");

        Ok(FieldRecord {
            sender_title: fields::sender_title(text),
            sender_pronouns: fields::sender_pronouns(text).to_string(),
            has_name: fields::has_name(text, config),
            read_cv: fields::read_cv(text, config),
            autogenerated: fields::autogenerated(text, config),
            salary: fields::salary(text, &self.patterns.salary),
            has_emoji: fields::has_emoji(text, &self.patterns.emoji),
            has_email: fields::has_email(text, &self.patterns.email),
            has_url: fields::has_url(text),
            company: fields::company(text, &config.known_companies),
            python: fields::python(text),
            chars: text.chars().count(),
            sender_name,
            date,
            time,
        })
    }

    /// Extract a record and render it as one JSON line
    pub fn extract_json_line(&self, block: &RawBlock<'_>) -> Result<String, ExtractorError> {
        let record = self.extract(block)?;
        Ok(record.to_json_line(self.config.time_format)?)
    }
}
