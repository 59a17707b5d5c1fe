//! Interactive collection of seed data.
//!
//! The dialogue has three steps:
//! 1. seed words, one per line, ended by a blank line or end of input
//! 2. day, month and year for each word; blank or end of input skips a
//!    component, an invalid answer is asked again up to three times
//! 3. the special characters, written together on one line
//!
//! The prompter is generic over its reader and writer so the whole dialogue
//! can be driven from memory.

use std::io::{BufRead, Write};

use log::debug;

use crate::date::component::validate_component;
use crate::date::hint::{DateField, DateHint};
use crate::error::{PassmithError, Result};
use crate::seed::{SeedEntry, SeedWord, SpecialChars};

/// Number of attempts for each date component.
pub const MAX_ATTEMPTS: usize = 3;

/// Everything the dialogue collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveSession {
    pub seeds: Vec<SeedEntry>,
    pub special_chars: SpecialChars,
}

/// Line-oriented prompter.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Run all three steps.
    pub fn collect(&mut self, max_special: usize) -> Result<InteractiveSession> {
        let words = self.collect_words()?;

        let mut seeds = Vec::with_capacity(words.len());
        for word in words {
            let date = self.collect_date(&word)?;
            seeds.push(SeedEntry::new(word, date));
        }

        let special_chars = self.collect_special_chars(max_special)?;
        Ok(InteractiveSession {
            seeds,
            special_chars,
        })
    }

    /// Step 1: seed words until a blank line or end of input.
    pub fn collect_words(&mut self) -> Result<Vec<SeedWord>> {
        writeln!(self.output, "Step 1: enter the seed words, one per line.")?;
        writeln!(self.output, "- Leave a line blank when done.")?;

        let mut words = Vec::new();
        loop {
            match self.read_line("Seed word")? {
                None if words.is_empty() => return Err(PassmithError::EmptySeedInput),
                None => break,
                Some(line) if line.is_empty() => {
                    if !words.is_empty() {
                        break;
                    }
                    writeln!(self.output, "Enter at least one seed word.")?;
                }
                Some(line) => words.push(SeedWord::new(line)?),
            }
        }

        debug!("collected {} seed words", words.len());
        Ok(words)
    }

    /// Step 2: date components for one word.
    pub fn collect_date(&mut self, word: &SeedWord) -> Result<DateHint> {
        writeln!(self.output)?;
        writeln!(self.output, "Step 2: date information for '{word}'.")?;
        writeln!(self.output, "- Leave a field blank to skip it.")?;

        let day = self.ask_component(DateField::Day)?;
        let month = self.ask_component(DateField::Month)?;
        let year = self.ask_component(DateField::Year)?;
        DateHint::new(day, month, year)
    }

    /// Step 3: special characters written together.
    pub fn collect_special_chars(&mut self, max_special: usize) -> Result<SpecialChars> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Step 3: enter the special characters, written together (at most {max_special})."
        )?;

        let line = self.read_line("Special characters")?.unwrap_or_default();
        SpecialChars::parse(&line, Some(max_special))
    }

    fn ask_component(&mut self, field: DateField) -> Result<String> {
        let prompt = format!("{} (1 or 2 digits)", capitalize(field.label()));

        for attempt in 1..=self.max_attempts {
            let answer = self.read_line(&prompt)?.unwrap_or_default();
            match validate_component(&answer) {
                Ok(()) => return Ok(answer),
                Err(e) => {
                    writeln!(self.output, "Error: {e}")?;
                    if attempt < self.max_attempts {
                        writeln!(self.output, "Try again.")?;
                    }
                }
            }
        }

        Err(PassmithError::input_aborted(format!(
            "no valid {} after {} attempts",
            field.label(),
            self.max_attempts
        )))
    }

    /// Print a prompt and read one trimmed line; `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
