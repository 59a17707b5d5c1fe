//! Per-word date information.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::date::component::validate_component;
use crate::error::{PassmithError, Result};

/// One of the three date components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateField {
    Day,
    Month,
    Year,
}

impl DateField {
    /// All fields in composition order.
    pub const ALL: [DateField; 3] = [DateField::Day, DateField::Month, DateField::Year];

    pub fn label(&self) -> &'static str {
        match self {
            DateField::Day => "day",
            DateField::Month => "month",
            DateField::Year => "year",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Optional day, month and year for a seed word.
///
/// Each component is either empty (not supplied) or 1 to 2 ASCII digits.
/// Deserialized hints go through [`DateHint::new`], so they are trimmed and
/// validated like hints given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateHint")]
pub struct DateHint {
    pub day: String,
    pub month: String,
    pub year: String,
}

/// Date fields as written in a seeds file, before trimming.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDateHint {
    day: String,
    month: String,
    year: String,
}

impl TryFrom<RawDateHint> for DateHint {
    type Error = PassmithError;

    fn try_from(raw: RawDateHint) -> Result<Self> {
        DateHint::new(raw.day, raw.month, raw.year)
    }
}

impl DateHint {
    /// Build a hint from trimmed, validated components.
    pub fn new<D, M, Y>(day: D, month: M, year: Y) -> Result<Self>
    where
        D: AsRef<str>,
        M: AsRef<str>,
        Y: AsRef<str>,
    {
        let hint = DateHint {
            day: day.as_ref().trim().to_string(),
            month: month.as_ref().trim().to_string(),
            year: year.as_ref().trim().to_string(),
        };
        hint.validate()?;
        Ok(hint)
    }

    /// A hint with no components.
    pub fn none() -> Self {
        DateHint::default()
    }

    /// Check every component.
    pub fn validate(&self) -> Result<()> {
        for (_, value) in self.components() {
            validate_component(value)?;
        }
        Ok(())
    }

    pub fn get(&self, field: DateField) -> &str {
        match field {
            DateField::Day => &self.day,
            DateField::Month => &self.month,
            DateField::Year => &self.year,
        }
    }

    /// Components in day, month, year order (empty ones included).
    pub fn components(&self) -> [(DateField, &str); 3] {
        DateField::ALL.map(|field| (field, self.get(field)))
    }

    /// True when no component is supplied.
    pub fn is_empty(&self) -> bool {
        self.day.is_empty() && self.month.is_empty() && self.year.is_empty()
    }

    /// Parse the `DAY/MONTH/YEAR` form used on the command line.
    ///
    /// Exactly two slashes are required; any part may be empty (`5//` is day
    /// only).
    pub fn parse_slashed(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('/').collect();
        match parts.as_slice() {
            [day, month, year] => DateHint::new(day, month, year),
            _ => Err(PassmithError::invalid_seed(format!(
                "date '{text}' must have the form DAY/MONTH/YEAR"
            ))),
        }
    }

    /// Whether `text` has the shape of [`DateHint::parse_slashed`] input.
    pub fn looks_slashed(text: &str) -> bool {
        text.matches('/').count() == 2 && text.chars().all(|ch| ch == '/' || ch.is_ascii_digit())
    }
}

impl fmt::Display for DateHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}
