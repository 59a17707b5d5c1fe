//! Seed data supplied by the caller: words, their date hints, and the global
//! special character list.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::hint::DateHint;
use crate::error::{PassmithError, Result};

/// Default cap on the number of special characters accepted from input.
pub const DEFAULT_MAX_SPECIAL_CHARS: usize = 5;

/// A non-blank, trimmed base word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeedWord(String);

impl SeedWord {
    pub fn new<S: AsRef<str>>(word: S) -> Result<Self> {
        let trimmed = word.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PassmithError::invalid_seed("seed word must not be blank"));
        }
        Ok(SeedWord(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SeedWord {
    type Error = PassmithError;

    fn try_from(word: String) -> Result<Self> {
        SeedWord::new(word)
    }
}

impl From<SeedWord> for String {
    fn from(word: SeedWord) -> Self {
        word.0
    }
}

impl fmt::Display for SeedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A seed word with its optional date hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    pub word: SeedWord,
    #[serde(flatten)]
    pub date: DateHint,
}

impl SeedEntry {
    pub fn new(word: SeedWord, date: DateHint) -> Self {
        SeedEntry { word, date }
    }

    /// A seed word without date information.
    pub fn word<S: AsRef<str>>(word: S) -> Result<Self> {
        Ok(SeedEntry::new(SeedWord::new(word)?, DateHint::none()))
    }

    /// Load a JSON array of `{"word": .., "day": .., "month": .., "year": ..}`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<SeedEntry>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PassmithError::invalid_seed(format!(
                "Failed to read seed file '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Date fields are trimmed and validated while deserializing.
        let entries: Vec<SeedEntry> = serde_json::from_str(&content)?;
        Ok(entries)
    }
}

/// Parses `WORD` or `WORD@DAY/MONTH/YEAR`.
///
/// The suffix after the last `@` is only treated as a date when it has the
/// slashed shape, so words containing `@` survive untouched.
impl FromStr for SeedEntry {
    type Err = PassmithError;

    fn from_str(text: &str) -> Result<Self> {
        if let Some((word, date)) = text.rsplit_once('@')
            && DateHint::looks_slashed(date)
        {
            return Ok(SeedEntry::new(
                SeedWord::new(word)?,
                DateHint::parse_slashed(date)?,
            ));
        }
        SeedEntry::word(text)
    }
}

/// Ordered list of special characters applied one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialChars(Vec<char>);

impl SpecialChars {
    pub fn new(chars: Vec<char>) -> Self {
        SpecialChars(chars)
    }

    /// Split a run of characters written together (`"!@#"`), trimming the
    /// ends and rejecting more than `max` characters when a cap is given.
    pub fn parse(input: &str, max: Option<usize>) -> Result<Self> {
        let chars: Vec<char> = input.trim().chars().collect();
        if let Some(max) = max
            && chars.len() > max
        {
            return Err(PassmithError::invalid_config(format!(
                "too many special characters ({}), the maximum is {max}",
                chars.len()
            )));
        }
        Ok(SpecialChars(chars))
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<char> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_word_trims() {
        assert_eq!(SeedWord::new("  cat ").unwrap().as_str(), "cat");
        assert!(matches!(SeedWord::new("   "), Err(PassmithError::InvalidSeed(_))));
    }

    #[test]
    fn test_parse_seed_entry() {
        let entry: SeedEntry = "cat".parse().unwrap();
        assert_eq!(entry.word.as_str(), "cat");
        assert!(entry.date.is_empty());

        let entry: SeedEntry = "cat@5/3/99".parse().unwrap();
        assert_eq!(entry.word.as_str(), "cat");
        assert_eq!(entry.date, DateHint::new("5", "3", "99").unwrap());

        let entry: SeedEntry = "me@example.com".parse().unwrap();
        assert_eq!(entry.word.as_str(), "me@example.com");
        assert!(entry.date.is_empty());
    }

    #[test]
    fn test_parse_seed_entry_invalid_date() {
        assert!(matches!(
            "cat@123//".parse::<SeedEntry>(),
            Err(PassmithError::InvalidDateComponent { .. })
        ));
        assert!("@5//".parse::<SeedEntry>().is_err());
    }

    #[test]
    fn test_seed_entry_json() {
        let entries: Vec<SeedEntry> =
            serde_json::from_str(r#"[{"word": "cat", "day": "5"}, {"word": "dog"}]"#).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date.day, "5");
        assert!(entries[1].date.is_empty());

        assert!(serde_json::from_str::<Vec<SeedEntry>>(r#"[{"word": "  "}]"#).is_err());
    }

    #[test]
    fn test_load_from_file_trims_dates() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("seeds.json");
        std::fs::write(&path, r#"[{"word": "cat", "day": " 5", "year": "99 "}]"#).unwrap();

        let entries = SeedEntry::load_from_file(&path).unwrap();
        assert_eq!(entries[0].date, DateHint::new("5", "", "99").unwrap());

        std::fs::write(&path, r#"[{"word": "cat", "day": "123"}]"#).unwrap();
        assert!(matches!(
            SeedEntry::load_from_file(&path),
            Err(PassmithError::Json(_))
        ));
    }

    #[test]
    fn test_special_chars_parse() {
        let chars = SpecialChars::parse(" !@# ", Some(DEFAULT_MAX_SPECIAL_CHARS)).unwrap();
        assert_eq!(chars.as_slice(), &['!', '@', '#']);

        assert!(SpecialChars::parse("", None).unwrap().is_empty());
        assert!(matches!(
            SpecialChars::parse("!@#$%^", Some(5)),
            Err(PassmithError::InvalidConfig(_))
        ));
        assert_eq!(SpecialChars::parse("!@#$%^", None).unwrap().len(), 6);
    }
}
