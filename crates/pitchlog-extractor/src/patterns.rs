//! Regular expressions shared by the field extractors

use regex::Regex;

/// Whole-line sender header: `Jane Doe  3:45 PM`
const HEADER: &str = r"^(.+)  ?([0-9]{1,2}:[0-9]{1,2} [AP]M)$";

/// `€120k`, `85K`, `£90,000`
const SALARY: &str = r"[€£]?([0-9]{2,3})(k|K|,000)";

const EMAIL: &str = r".+@.+\.[a-z]{2,3}";

/// Date line: `Mar 7`, `Dec 12, 2022`, `Tue 14`
const DATE: &str = r"\n(?P<word>[A-Z][A-Za-z]{2}) (?P<day>[0-9]{1,2})(?:, (?P<year>[0-9]{4}))?";

const EMOJI: &str = r"[\p{Extended_Pictographic}\p{Emoji_Presentation}]";

/// Compiled patterns, built once per [`Extractor`](crate::Extractor)
#[derive(Debug, Clone)]
pub(crate) struct Patterns {
    pub header: Regex,
    pub salary: Regex,
    pub email: Regex,
    pub date: Regex,
    pub emoji: Regex,
}

impl Patterns {
    pub fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            header: Regex::new(HEADER)?,
            salary: Regex::new(SALARY)?,
            email: Regex::new(EMAIL)?,
            date: Regex::new(DATE)?,
            emoji: Regex::new(EMOJI)?,
        })
    }
}
