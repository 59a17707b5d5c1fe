//! Leetspeak substitution expansion.
//!
//! Substitution is incremental: for a word with eligible positions `I`, every
//! non-empty subset of `I` is replaced (one position, then two, and so on),
//! and for each subset every combination of replacement tokens is produced.
//! The unmodified word is always kept. This covers partial substitutions such
//! as `p4ssword` as well as the fully substituted `p455w0rd`.
//!
//! Every substitution variant is then run through case expansion.
//!
//! # Examples
//!
//! ```
//! use passmith::expand::substitution::SubstitutionExpander;
//! use passmith::expand::table::SubstitutionTable;
//!
//! let expander = SubstitutionExpander::new(SubstitutionTable::default());
//! let variants = expander.expand_word("cat");
//!
//! assert!(variants.contains("cat"));
//! assert!(variants.contains("C4t"));
//! assert!(!variants.contains("1aT"));
//! assert_eq!(variants.len(), 12);
//! ```

use rayon::prelude::*;

use crate::combinatorics::{CartesianProduct, NonEmptySubsets};
use crate::error::Result;
use crate::expand::case::case_variants;
use crate::expand::table::SubstitutionTable;
use crate::expand::{Expander, fan_out};
use crate::variant::{VariantHashSet, VariantSet};

/// Expander applying a [`SubstitutionTable`] followed by case expansion.
#[derive(Clone, Debug)]
pub struct SubstitutionExpander {
    table: SubstitutionTable,
    parallel: bool,
}

impl SubstitutionExpander {
    pub fn new(table: SubstitutionTable) -> Self {
        SubstitutionExpander {
            table,
            parallel: false,
        }
    }

    /// Fan subset enumeration and case expansion out over the rayon pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Positions (in characters) whose letter has an entry in the table.
    pub fn eligible_positions(&self, word: &str) -> Vec<usize> {
        word.chars()
            .enumerate()
            .filter(|(_, ch)| self.table.is_eligible(*ch))
            .map(|(position, _)| position)
            .collect()
    }

    /// The word plus every partial and full substitution, before case expansion.
    pub fn substitution_variants(&self, word: &str) -> VariantSet {
        let chars: Vec<char> = word.chars().collect();
        let eligible = self.eligible_positions(word);

        let substitute = |subset: Vec<usize>| -> Vec<String> {
            let positions: Vec<usize> = subset.iter().map(|&k| eligible[k]).collect();
            let pools: Vec<&[String]> = positions
                .iter()
                .map(|&p| self.table.replacements(chars[p]).unwrap_or_default())
                .collect();

            CartesianProduct::new(pools)
                .map(|tokens| splice(&chars, &positions, &tokens))
                .collect()
        };

        let mut variants = if self.parallel {
            VariantSet::from(
                NonEmptySubsets::new(eligible.len())
                    .par_bridge()
                    .flat_map_iter(substitute)
                    .collect::<VariantHashSet>(),
            )
        } else {
            NonEmptySubsets::new(eligible.len())
                .flat_map(substitute)
                .collect()
        };

        variants.insert(word);
        variants
    }

    /// Substitution variants of a single word, each expanded through every case combination.
    pub fn expand_word(&self, word: &str) -> VariantSet {
        let substituted = self.substitution_variants(word);
        fan_out(&substituted, self.parallel, case_variants)
    }
}

/// Rebuild `chars` with `tokens[i]` in place of the character at `positions[i]`.
///
/// `positions` must be ascending.
fn splice(chars: &[char], positions: &[usize], tokens: &[&String]) -> String {
    let mut out = String::with_capacity(chars.len() + tokens.iter().map(|t| t.len()).sum::<usize>());
    let mut replacements = positions.iter().zip(tokens).peekable();

    for (index, &ch) in chars.iter().enumerate() {
        match replacements.peek() {
            Some(&(&position, token)) if position == index => {
                out.push_str(token);
                replacements.next();
            }
            _ => out.push(ch),
        }
    }
    out
}

impl Expander for SubstitutionExpander {
    fn expand(&self, variants: VariantSet) -> Result<VariantSet> {
        let mut expanded = VariantSet::new();
        for variant in &variants {
            expanded.union_with(self.expand_word(variant));
        }
        Ok(expanded)
    }

    fn name(&self) -> &'static str {
        "substitution"
    }
}
