//! Input and output types for extraction

use crate::config::TimeFormat;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One message from the archive, untouched apart from outer trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// 1-based position of the block in the archive
    pub index: usize,

    /// Message text
    pub text: &'a str,
}

impl<'a> RawBlock<'a> {
    /// Wrap a piece of text as a block
    pub fn new(index: usize, text: &'a str) -> Self {
        Self { index, text }
    }

    /// First line of the block, for diagnostics
    pub fn preview(&self) -> &'a str {
        self.text.lines().next().unwrap_or("")
    }
}

/// Salary range mentioned in a message.
///
/// `low`/`high` follow the order of appearance, not magnitude.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Salary {
    /// First figure, empty when only one distinct figure appears
    pub low: String,

    /// Second figure, or the only one
    pub high: String,
}

/// Everything extracted from one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    /// Sender display name
    pub sender_name: String,

    /// Line under the sender's connection-degree marker
    pub sender_title: String,

    /// "she", "he", "they" or empty
    pub sender_pronouns: String,

    /// Message mentions my name or nickname
    pub has_name: bool,

    /// Message uses the nickname only found in the CV
    pub read_cv: bool,

    /// Message looks like a bulk template
    pub autogenerated: bool,

    /// Salary figures
    pub salary: Salary,

    /// Contains an emoji
    pub has_emoji: bool,

    /// Contains an email address
    pub has_email: bool,

    /// Contains a link
    pub has_url: bool,

    /// First known company mentioned
    pub company: String,

    /// Mentions Python
    pub python: bool,

    /// Length of the block in characters
    pub chars: usize,

    /// Message date
    pub date: NaiveDate,

    /// Message time from the header
    pub time: NaiveTime,
}

/// Flat, string-formatted view of a [`FieldRecord`], one JSON line each
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub sender_name: String,
    pub sender_title: String,
    pub sender_pronouns: String,
    pub has_name: bool,
    pub read_cv: bool,
    pub autogenerated: bool,
    pub salary_low: String,
    pub salary_high: String,
    pub has_emoji: bool,
    pub has_email: bool,
    pub has_url: bool,
    pub company: String,
    pub python: bool,
    pub chars: usize,
    pub date: String,
    pub time: String,
}

impl FieldRecord {
    /// Format dates and flatten the salary pair
    pub fn to_output(&self, time_format: TimeFormat) -> OutputRecord {
        OutputRecord {
            sender_name: self.sender_name.clone(),
            sender_title: self.sender_title.clone(),
            sender_pronouns: self.sender_pronouns.clone(),
            has_name: self.has_name,
            read_cv: self.read_cv,
            autogenerated: self.autogenerated,
            salary_low: self.salary.low.clone(),
            salary_high: self.salary.high.clone(),
            has_emoji: self.has_emoji,
            has_email: self.has_email,
            has_url: self.has_url,
            company: self.company.clone(),
            python: self.python,
            chars: self.chars,
            date: self.date.format("%Y-%m-%d").to_string(),
            time: self.time.format(time_format.pattern()).to_string(),
        }
    }

    /// Serialize as a single line of JSON
    pub fn to_json_line(&self, time_format: TimeFormat) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_output(time_format))
    }
}
