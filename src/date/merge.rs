//! Concatenation of word variants with date tokens.

use crate::error::Result;
use crate::expand::{Expander, fan_out};
use crate::variant::VariantSet;

/// Expander adding `word + date` and `date + word` for every date token.
///
/// The input variants are kept: date augmentation is additive.
#[derive(Clone, Debug, Default)]
pub struct DateMerger {
    dates: Vec<String>,
    parallel: bool,
}

impl DateMerger {
    pub fn new(dates: VariantSet) -> Self {
        DateMerger {
            dates: dates.into_sorted_vec(),
            parallel: false,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    fn merge(&self, variant: &str) -> Vec<String> {
        let mut out = Vec::with_capacity(1 + 2 * self.dates.len());
        out.push(variant.to_string());
        for date in &self.dates {
            out.push(format!("{variant}{date}"));
            out.push(format!("{date}{variant}"));
        }
        out
    }
}

impl Expander for DateMerger {
    fn expand(&self, variants: VariantSet) -> Result<VariantSet> {
        if self.dates.is_empty() {
            return Ok(variants);
        }
        Ok(fan_out(&variants, self.parallel, |variant| self.merge(variant)))
    }

    fn name(&self) -> &'static str {
        "date_merge"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_both_orders() {
        let dates: VariantSet = ["5", "05"].into_iter().collect();
        let merger = DateMerger::new(dates);
        let result = merger.expand(VariantSet::singleton("cat")).unwrap();

        assert_eq!(
            result.into_sorted_vec(),
            vec!["05cat", "5cat", "cat", "cat05", "cat5"]
        );
    }

    #[test]
    fn test_empty_dates_is_identity() {
        let input: VariantSet = ["cat", "CAT"].into_iter().collect();
        let result = DateMerger::default().expand(input.clone()).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dates: VariantSet = ["1", "01", "12"].into_iter().collect();
        let input: VariantSet = ["a", "b", "c"].into_iter().collect();
        let merger = DateMerger::new(dates);

        let sequential = merger.expand(input.clone()).unwrap();
        let parallel = merger.clone().parallel(true).expand(input).unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.len(), 3 * (1 + 2 * 3));
    }
}
