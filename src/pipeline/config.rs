//! Configuration for a generation run.

use serde::{Deserialize, Serialize};

use crate::error::{PassmithError, Result};
use crate::expand::table::SubstitutionTable;
use crate::seed::SpecialChars;

/// Configuration shared by every seed word of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Leetspeak substitution table.
    pub substitutions: SubstitutionTable,

    /// Special characters applied as prefix/suffix, one at a time.
    pub special_chars: SpecialChars,

    /// Fan expansion and independent seed words out over a thread pool.
    pub parallel: bool,

    /// Thread pool size for parallel execution.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,

    /// Sort each word's block before writing. Presentation only.
    pub sort_output: bool,

    /// Refuse to generate a word whose estimated variant count exceeds this.
    /// If None, generation is bounded only by memory.
    pub max_variants_per_word: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            substitutions: SubstitutionTable::default(),
            special_chars: SpecialChars::default(),
            parallel: false,
            thread_pool_size: None,
            sort_output: true,
            max_variants_per_word: None,
        }
    }
}

impl PipelineConfig {
    /// Set the substitution table.
    pub fn with_substitutions(mut self, substitutions: SubstitutionTable) -> Self {
        self.substitutions = substitutions;
        self
    }

    /// Set the special characters.
    pub fn with_special_chars(mut self, special_chars: SpecialChars) -> Self {
        self.special_chars = special_chars;
        self
    }

    /// Enable or disable parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the worker thread count (implies nothing unless `parallel` is set).
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    /// Set whether blocks are sorted before writing.
    pub fn with_sort_output(mut self, sort: bool) -> Self {
        self.sort_output = sort;
        self
    }

    /// Set the per-word size guard.
    pub fn with_max_variants_per_word(mut self, max: u64) -> Self {
        self.max_variants_per_word = Some(max);
        self
    }

    /// Effective number of worker threads.
    pub fn worker_threads(&self) -> usize {
        self.thread_pool_size.unwrap_or_else(num_cpus::get).max(1)
    }

    /// Check the configuration for values no run can use.
    pub fn validate(&self) -> Result<()> {
        if self.thread_pool_size == Some(0) {
            return Err(PassmithError::invalid_config(
                "thread pool size must be at least 1",
            ));
        }
        if self.max_variants_per_word == Some(0) {
            return Err(PassmithError::invalid_config(
                "max variants per word must be at least 1",
            ));
        }
        Ok(())
    }
}
