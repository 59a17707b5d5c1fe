//! Variant expanders.
//!
//! An expander takes a [`VariantSet`] and returns a (usually larger) one.
//! The per-word pipeline is a chain of expanders:
//!
//! ```text
//! seed word → Substitution (+ Case) → DateMerger → SpecialCharAugmenter → sink
//! ```
//!
//! # Available Expanders
//!
//! - [`case::CaseExpander`] - every upper/lower case combination
//! - [`substitution::SubstitutionExpander`] - leetspeak substitutions, then case
//! - [`special::SpecialCharAugmenter`] - prefix/suffix/both special characters
//! - [`crate::date::merge::DateMerger`] - word+date and date+word concatenations
//!
//! # Examples
//!
//! ```
//! use passmith::expand::Expander;
//! use passmith::expand::special::SpecialCharAugmenter;
//! use passmith::variant::VariantSet;
//!
//! let augmenter = SpecialCharAugmenter::new(vec!['!']);
//! let result = augmenter.expand(VariantSet::singleton("cat")).unwrap();
//!
//! assert!(result.contains("!cat!"));
//! assert_eq!(result.len(), 4);
//! ```

use crate::error::Result;
use crate::variant::VariantSet;

/// Trait for stages that transform a variant set.
///
/// Implementations must be `Send + Sync` so that independent seed words can
/// be pushed through the same stages from several worker threads.
pub trait Expander: Send + Sync {
    /// Apply this stage to a set of variants.
    fn expand(&self, variants: VariantSet) -> Result<VariantSet>;

    /// Get the name of this stage (for logging).
    fn name(&self) -> &'static str;
}

pub mod case;
pub mod special;
pub mod substitution;
pub mod table;

/// Map every member through `expand_one` and union the results.
///
/// With `parallel` set the members are fanned out over the current rayon
/// pool and merged by collecting into a single hash set; membership is the
/// same either way.
pub(crate) fn fan_out<F, I>(variants: &VariantSet, parallel: bool, expand_one: F) -> VariantSet
where
    F: Fn(&str) -> I + Send + Sync,
    I: IntoIterator<Item = String>,
{
    if parallel {
        use rayon::prelude::*;

        variants
            .as_hash_set()
            .par_iter()
            .flat_map_iter(|variant| expand_one(variant.as_str()))
            .collect::<crate::variant::VariantHashSet>()
            .into()
    } else {
        variants
            .iter()
            .flat_map(|variant| expand_one(variant.as_str()))
            .collect()
    }
}
