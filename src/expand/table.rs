//! Leetspeak substitution table.
//!
//! Maps a lowercase ASCII letter to the ordered list of tokens that may
//! replace it. The default table is:
//!
//! | letter | replacements |
//! |--------|--------------|
//! | a      | `4`          |
//! | e      | `3`          |
//! | i      | `1`          |
//! | o      | `0`          |
//! | s      | `5`, `$`     |
//! | l      | `1`          |
//!
//! A custom table can be loaded from a JSON object:
//!
//! ```json
//! { "a": ["4", "@"], "t": ["7"] }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PassmithError, Result};

/// Immutable mapping from letter to replacement tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<String>>", into = "BTreeMap<String, Vec<String>>")]
pub struct SubstitutionTable {
    entries: BTreeMap<char, Vec<String>>,
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        let entries: BTreeMap<char, Vec<String>> = [
            ('a', vec!["4"]),
            ('e', vec!["3"]),
            ('i', vec!["1"]),
            ('o', vec!["0"]),
            ('s', vec!["5", "$"]),
            ('l', vec!["1"]),
        ]
        .into_iter()
        .map(|(letter, tokens)| (letter, tokens.into_iter().map(str::to_string).collect()))
        .collect();

        SubstitutionTable { entries }
    }
}

impl SubstitutionTable {
    /// A table with no entries; substitution then reduces to case expansion.
    pub fn empty() -> Self {
        SubstitutionTable {
            entries: BTreeMap::new(),
        }
    }

    /// Build a table, validating every key and replacement list.
    pub fn new<I, T>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, Vec<T>)>,
        T: Into<String>,
    {
        let mut table = Self::empty();
        for (letter, tokens) in entries {
            table.insert(letter, tokens.into_iter().map(Into::into).collect())?;
        }
        Ok(table)
    }

    /// Load a table from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PassmithError::invalid_config(format!(
                "Failed to read substitution table '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse a table from a JSON object of `letter -> [tokens]`.
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(content)?;
        Self::try_from(raw)
    }

    fn insert(&mut self, letter: char, tokens: Vec<String>) -> Result<()> {
        if !letter.is_ascii_lowercase() {
            return Err(PassmithError::invalid_config(format!(
                "substitution key '{letter}' must be a lowercase ASCII letter"
            )));
        }
        if tokens.is_empty() {
            return Err(PassmithError::invalid_config(format!(
                "substitution key '{letter}' has no replacements"
            )));
        }
        if tokens.iter().any(String::is_empty) {
            return Err(PassmithError::invalid_config(format!(
                "substitution key '{letter}' has an empty replacement"
            )));
        }
        self.entries.insert(letter, tokens);
        Ok(())
    }

    /// Replacements for a character, matched case-insensitively.
    pub fn replacements(&self, ch: char) -> Option<&[String]> {
        self.entries
            .get(&ch.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    pub fn is_eligible(&self, ch: char) -> bool {
        self.replacements(ch).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &[String])> {
        self.entries
            .iter()
            .map(|(letter, tokens)| (*letter, tokens.as_slice()))
    }
}

impl TryFrom<BTreeMap<String, Vec<String>>> for SubstitutionTable {
    type Error = PassmithError;

    fn try_from(raw: BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut table = Self::empty();
        for (key, tokens) in raw {
            let mut chars = key.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(letter), None) => letter,
                _ => {
                    return Err(PassmithError::invalid_config(format!(
                        "substitution key '{key}' must be a single letter"
                    )));
                }
            };
            table.insert(letter, tokens)?;
        }
        Ok(table)
    }
}

impl From<SubstitutionTable> for BTreeMap<String, Vec<String>> {
    fn from(table: SubstitutionTable) -> Self {
        table
            .entries
            .into_iter()
            .map(|(letter, tokens)| (letter.to_string(), tokens))
            .collect()
    }
}
