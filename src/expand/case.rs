//! Upper/lower case expansion.
//!
//! Every ASCII letter independently takes its lowercase or uppercase form;
//! every other character is kept verbatim. A word with `k` letters therefore
//! expands to exactly `2^k` strings. There is no cap: this stage is the
//! dominant source of combinatorial growth in the whole generator, and a
//! 20-letter seed alone yields over a million variants.
//!
//! # Examples
//!
//! ```
//! use passmith::expand::case::case_variants;
//!
//! let variants = case_variants("c4t");
//! assert_eq!(variants.len(), 4);
//! assert!(variants.contains("C4T"));
//! assert!(variants.contains("c4T"));
//! ```

use crate::combinatorics::CartesianProduct;
use crate::error::Result;
use crate::expand::{Expander, fan_out};
use crate::variant::VariantSet;

/// All case combinations of a single string.
pub fn case_variants(word: &str) -> VariantSet {
    let choices: Vec<Vec<char>> = word
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphabetic() {
                vec![ch.to_ascii_lowercase(), ch.to_ascii_uppercase()]
            } else {
                vec![ch]
            }
        })
        .collect();

    let pools: Vec<&[char]> = choices.iter().map(Vec::as_slice).collect();
    CartesianProduct::new(pools)
        .map(|chars| chars.into_iter().collect::<String>())
        .collect()
}

/// Number of letters that take part in case expansion.
pub fn case_positions(word: &str) -> usize {
    word.chars().filter(char::is_ascii_alphabetic).count()
}

/// Expander that replaces every member with all of its case combinations.
#[derive(Clone, Debug, Default)]
pub struct CaseExpander {
    parallel: bool,
}

impl CaseExpander {
    pub fn new() -> Self {
        CaseExpander::default()
    }

    /// Fan the members out over the rayon pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Expander for CaseExpander {
    fn expand(&self, variants: VariantSet) -> Result<VariantSet> {
        Ok(fan_out(&variants, self.parallel, case_variants))
    }

    fn name(&self) -> &'static str {
        "case"
    }
}
