//! Upper-bound size estimates.
//!
//! Generation has no built-in truncation, and every stage multiplies the set
//! size. These estimates count the strings each stage would produce before
//! deduplication, so they never undercount. They are exact whenever distinct
//! choices yield distinct strings, which holds for the default table.

use serde::{Deserialize, Serialize};

use crate::date::composer::DateVariantComposer;
use crate::error::Result;
use crate::expand::case::case_positions;
use crate::pipeline::config::PipelineConfig;
use crate::seed::SeedEntry;

/// Estimated sizes for one seed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeEstimate {
    pub word: String,
    /// Substitution variants, before case expansion.
    pub substitution_variants: u64,
    /// Substitution variants after case expansion.
    pub base_variants: u64,
    /// Date tokens composed from the hint.
    pub date_tokens: u64,
    /// Final upper bound after date merging and special characters.
    pub total: u64,
}

/// Estimate the output size for `entry` under `config`.
pub fn estimate_word(entry: &SeedEntry, config: &PipelineConfig) -> Result<SizeEstimate> {
    let table = &config.substitutions;
    let word = entry.word.as_str();

    let mut substitution_variants: u64 = 1;
    let mut base_variants: u64 = 1;
    for ch in word.chars() {
        let own_cases: u64 = if ch.is_ascii_alphabetic() { 2 } else { 1 };
        match table.replacements(ch) {
            Some(tokens) => {
                substitution_variants =
                    substitution_variants.saturating_mul(1 + tokens.len() as u64);
                let token_cases = tokens
                    .iter()
                    .map(|token| pow2(case_positions(token)))
                    .fold(0u64, u64::saturating_add);
                base_variants = base_variants.saturating_mul(own_cases.saturating_add(token_cases));
            }
            None => base_variants = base_variants.saturating_mul(own_cases),
        }
    }

    let date_tokens = if entry.date.is_empty() {
        0
    } else {
        DateVariantComposer::new().compose(&entry.date)?.len() as u64
    };

    let special = config.special_chars.len() as u64;
    let total = base_variants
        .saturating_mul(1u64.saturating_add(date_tokens.saturating_mul(2)))
        .saturating_mul(1u64.saturating_add(special.saturating_mul(3)));

    Ok(SizeEstimate {
        word: word.to_string(),
        substitution_variants,
        base_variants,
        date_tokens,
        total,
    })
}

fn pow2(exponent: usize) -> u64 {
    u32::try_from(exponent)
        .ok()
        .and_then(|e| 1u64.checked_shl(e))
        .unwrap_or(u64::MAX)
}
