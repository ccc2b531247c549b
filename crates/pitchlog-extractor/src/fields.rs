//! Per-field heuristics
//!
//! Every function here is pure: it reads the block text (plus reference data
//! or a compiled pattern) and returns one field. Only the header and the date
//! are allowed to fail; everything else falls back to an empty value.

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::types::Salary;
use chrono::{Datelike, Month, NaiveDate, NaiveTime, Weekday};
use regex::Regex;
use std::collections::BTreeSet;

const SENT_MESSAGES_SUFFIX: &str = " sent the following messages at";

/// Find the first header line and split it into (name text, time text)
pub fn name_time<'a>(text: &'a str, header: &Regex) -> Option<(&'a str, &'a str)> {
    text.lines().find_map(|line| {
        let caps = header.captures(line)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    })
}

/// Clean the name part of a header
pub fn sender_name(name_text: &str) -> Result<String, ExtractorError> {
    // Pronouns come in parentheses after the name
    let name = name_text.split('(').next().unwrap_or("").trim();
    let name = name.strip_suffix(SENT_MESSAGES_SUFFIX).unwrap_or(name);

    match name.chars().next() {
        Some(first) if !first.is_lowercase() => Ok(name.to_string()),
        _ => Err(ExtractorError::InvalidSenderName {
            name: name.to_string(),
        }),
    }
}

/// Parse `3:45 PM` style header times.
///
/// Hour 0 is accepted with AM (`0:30 AM` is half past midnight).
pub fn parse_time(token: &str) -> Result<NaiveTime, ExtractorError> {
    NaiveTime::parse_from_str(token, "%I:%M %p")
        .or_else(|e| match token.strip_suffix(" AM") {
            Some(clock) if clock.starts_with('0') => NaiveTime::parse_from_str(clock, "%H:%M"),
            _ => Err(e),
        })
        .map_err(|_| ExtractorError::InvalidTime {
            token: token.to_string(),
        })
}

fn contains_any(text: &str, tokens: &BTreeSet<String>) -> bool {
    tokens.iter().any(|t| text.contains(t.as_str()))
}

/// Message mentions my name or nickname
pub fn has_name(text: &str, config: &ExtractorConfig) -> bool {
    contains_any(text, &config.nickname_tokens) || contains_any(text, &config.self_name_tokens)
}

/// Nickname appears only in the CV, so using it means the CV was read
pub fn read_cv(text: &str, config: &ExtractorConfig) -> bool {
    contains_any(text, &config.nickname_tokens)
}

/// Template detection.
///
/// A nickname always means a personal message. Without the nickname, a message
/// that doesn't use my name is a template, and one that does is a template
/// only if it also carries the canary.
pub fn autogenerated(text: &str, config: &ExtractorConfig) -> bool {
    if contains_any(text, &config.nickname_tokens) {
        return false;
    }
    if !contains_any(text, &config.self_name_tokens) {
        return true;
    }
    text.contains(config.injection_canary.as_str())
}

/// First of she/he/they found, in that order
pub fn sender_pronouns(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    ["she", "he", "they"]
        .into_iter()
        .find(|p| lower.contains(&format!("{}/", p)))
        .unwrap_or("")
}

/// The line right after the `· ` connection-degree marker
pub fn sender_title(text: &str) -> String {
    let mut lines = text.lines();
    while let Some(line) = lines.next() {
        if line.contains("· ") {
            return lines.next().unwrap_or("").to_string();
        }
    }
    String::new()
}

/// Salary figures in order of appearance
pub fn salary(text: &str, pattern: &Regex) -> Salary {
    let figures: Vec<&str> = pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    let Some(first) = figures.first() else {
        return Salary::default();
    };
    if figures.iter().all(|f| f == first) {
        return Salary {
            low: String::new(),
            high: first.to_string(),
        };
    }
    Salary {
        low: figures[0].to_string(),
        high: figures[1].to_string(),
    }
}

/// Any pictographic character
pub fn has_emoji(text: &str, pattern: &Regex) -> bool {
    pattern.is_match(text)
}

/// Anything shaped like `name@host.tld`
pub fn has_email(text: &str, pattern: &Regex) -> bool {
    pattern.is_match(text)
}

/// Links, with or without a scheme
pub fn has_url(text: &str) -> bool {
    text.contains("https://") || text.contains("www.")
}

/// First known company, in sorted order, that the text mentions
pub fn company(text: &str, companies: &BTreeSet<String>) -> String {
    companies
        .iter()
        .find(|c| text.contains(c.as_str()))
        .cloned()
        .unwrap_or_default()
}

/// Case-insensitive
pub fn python(text: &str) -> bool {
    text.to_lowercase().contains("python")
}

/// Message date from the first date line.
///
/// The leading word is a month (`Mar 7`) or a weekday (`Tue 14`); in the
/// weekday case the number is a day of the reference month. A missing year
/// means the reference year. A number too large for a day (`Mar 45`) is a
/// two-digit year, and the day then comes from the reference date.
pub fn date(
    text: &str,
    pattern: &Regex,
    reference: NaiveDate,
    sender: &str,
) -> Result<NaiveDate, ExtractorError> {
    let caps = pattern
        .captures(text)
        .ok_or_else(|| ExtractorError::MissingDate {
            sender: sender.to_string(),
        })?;
    let token = caps.get(0).map_or("", |m| m.as_str()).trim();
    let invalid = || ExtractorError::InvalidDate {
        sender: sender.to_string(),
        token: token.to_string(),
    };

    let word = caps.name("word").ok_or_else(invalid)?.as_str();
    let number: u32 = caps
        .name("day")
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(invalid)?;
    let explicit_year: Option<i32> = match caps.name("year") {
        Some(m) => Some(m.as_str().parse().map_err(|_| invalid())?),
        None => None,
    };

    let month = if let Ok(month) = word.parse::<Month>() {
        month.number_from_month()
    } else if word.parse::<Weekday>().is_ok() {
        reference.month()
    } else {
        return Err(invalid());
    };

    match (number, explicit_year) {
        (1..=31, year) => {
            NaiveDate::from_ymd_opt(year.unwrap_or(reference.year()), month, number)
                .ok_or_else(invalid)
        }
        (32..=99, None) => {
            let year = expand_two_digit_year(number as i32, reference.year());
            // Clamp the reference day to the length of the target month
            (1..=reference.day())
                .rev()
                .find_map(|day| NaiveDate::from_ymd_opt(year, month, day))
                .ok_or_else(invalid)
        }
        _ => Err(invalid()),
    }
}

/// Place a two-digit year within 50 years of the reference year
fn expand_two_digit_year(short: i32, reference_year: i32) -> i32 {
    let year = reference_year / 100 * 100 + short;
    if year >= reference_year + 50 {
        year - 100
    } else if year < reference_year - 50 {
        year + 100
    } else {
        year
    }
}
