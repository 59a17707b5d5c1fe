//! Pipeline expanding one seed word into its complete variant set.
//!
//! The stages run in this order:
//! 1. Substitution (which includes case expansion)
//! 2. Date merge, when the word carries a date hint that yields tokens
//! 3. Special characters, when any are configured
//!
//! Stages are additive: every stage keeps its input members.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::date::composer::DateVariantComposer;
use crate::date::merge::DateMerger;
use crate::error::{PassmithError, Result};
use crate::expand::Expander;
use crate::expand::special::SpecialCharAugmenter;
use crate::expand::substitution::SubstitutionExpander;
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::estimate::estimate_word;
use crate::seed::SeedEntry;
use crate::variant::VariantSet;

/// Estimated sizes above this are logged as warnings.
const LARGE_WORD_WARNING: u64 = 10_000_000;

/// Expands seed words according to a [`PipelineConfig`].
#[derive(Clone)]
pub struct WordVariantPipeline {
    config: PipelineConfig,
    substitution: Arc<SubstitutionExpander>,
    special: Arc<SpecialCharAugmenter>,
    composer: DateVariantComposer,
}

impl WordVariantPipeline {
    pub fn new(config: &PipelineConfig) -> Self {
        let substitution = SubstitutionExpander::new(config.substitutions.clone()).parallel(config.parallel);
        let special =
            SpecialCharAugmenter::new(config.special_chars.clone().into_vec()).parallel(config.parallel);

        WordVariantPipeline {
            config: config.clone(),
            substitution: Arc::new(substitution),
            special: Arc::new(special),
            composer: DateVariantComposer::new(),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The stages that apply to `entry`, in execution order.
    fn stages_for(&self, entry: &SeedEntry) -> Result<Vec<Arc<dyn Expander>>> {
        let mut stages: Vec<Arc<dyn Expander>> = vec![self.substitution.clone()];

        if !entry.date.is_empty() {
            let dates = self.composer.compose(&entry.date)?;
            if !dates.is_empty() {
                stages.push(Arc::new(DateMerger::new(dates).parallel(self.config.parallel)));
            }
        }

        if !self.special.chars().is_empty() {
            stages.push(self.special.clone());
        }

        Ok(stages)
    }

    /// Check the size guard for `entry`, if one is configured.
    fn check_size(&self, entry: &SeedEntry) -> Result<()> {
        let estimate = estimate_word(entry, &self.config)?;

        if let Some(max) = self.config.max_variants_per_word
            && estimate.total > max
        {
            return Err(PassmithError::resource_exhausted(format!(
                "seed '{}' would produce up to {} variants, above the limit of {}",
                entry.word, estimate.total, max
            )));
        }
        if estimate.total > LARGE_WORD_WARNING {
            warn!(
                "seed '{}' may produce up to {} variants",
                entry.word, estimate.total
            );
        }
        Ok(())
    }

    /// Generate the full variant set of one seed word.
    pub fn generate(&self, entry: &SeedEntry) -> Result<VariantSet> {
        self.check_size(entry)?;

        let mut variants = VariantSet::singleton(entry.word.as_str());
        for stage in self.stages_for(entry)? {
            let before = variants.len();
            variants = stage.expand(variants)?;
            debug!(
                "'{}' {}: {} -> {} variants",
                entry.word,
                stage.name(),
                before,
                variants.len()
            );
        }

        info!("'{}': {} variants", entry.word, variants.len());
        Ok(variants)
    }
}
