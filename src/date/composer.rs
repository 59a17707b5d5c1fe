//! Composition of date tokens from the supplied components.
//!
//! For the components actually supplied (in day, month, year order) the
//! composer takes every non-empty subset, every ordering of that subset, and
//! every choice of one written form per component, and concatenates them.
//! A single component yields its own forms; two yield both orders; three
//! yield all six orders plus every pair and single. No caller-side order is
//! needed: `DDMM`, `MMDD`, `YY` alone and so on are all covered.

use log::debug;

use crate::combinatorics::{CartesianProduct, NonEmptySubsets, Permutations};
use crate::date::component::DateComponentExpander;
use crate::date::hint::{DateField, DateHint};
use crate::error::Result;
use crate::variant::VariantSet;

/// Builds the set of date tokens for a [`DateHint`].
#[derive(Clone, Debug, Default)]
pub struct DateVariantComposer {
    component_expander: DateComponentExpander,
}

impl DateVariantComposer {
    pub fn new() -> Self {
        DateVariantComposer::default()
    }

    /// Expand every component of `hint` and compose the results.
    pub fn compose(&self, hint: &DateHint) -> Result<VariantSet> {
        let [day, month, year] = hint.components();
        let day = self.component_expander.expand(day.1)?;
        let month = self.component_expander.expand(month.1)?;
        let year = self.component_expander.expand(year.1)?;

        Ok(self.compose_sets(day, month, year))
    }

    /// Compose already-expanded component sets. An empty set means the
    /// component was not supplied.
    pub fn compose_sets(&self, day: VariantSet, month: VariantSet, year: VariantSet) -> VariantSet {
        let present: Vec<(DateField, Vec<String>)> = DateField::ALL
            .into_iter()
            .zip([day, month, year])
            .filter(|(_, forms)| !forms.is_empty())
            .map(|(field, forms)| (field, forms.into_sorted_vec()))
            .collect();

        let mut dates = VariantSet::new();
        for subset in NonEmptySubsets::new(present.len()) {
            let chosen: Vec<&(DateField, Vec<String>)> = subset.iter().map(|&i| &present[i]).collect();

            for ordering in Permutations::of(&chosen) {
                let pools: Vec<&[String]> = ordering.iter().map(|entry| entry.1.as_slice()).collect();
                dates.extend(
                    CartesianProduct::new(pools)
                        .map(|parts| parts.into_iter().map(String::as_str).collect::<String>()),
                );
            }
        }

        debug!(
            "composed {} date tokens from [{}]",
            dates.len(),
            present
                .iter()
                .map(|(field, _)| field.label())
                .collect::<Vec<_>>()
                .join(", ")
        );
        dates
    }
}
