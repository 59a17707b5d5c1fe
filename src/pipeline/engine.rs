//! Run-level dictionary generation.
//!
//! The generator validates all seed data up front, then expands the seed
//! words in input order and writes each word's block to the sink before
//! moving on. A word's block is only written once its full set exists, so a
//! failure never leaves a partial block behind.
//!
//! In parallel mode, words are processed in batches the size of the thread
//! pool. Results within a batch are collected in input order, so the output
//! keeps the same block order as a sequential run.

use std::time::{Duration, Instant};

use log::info;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{PassmithError, Result};
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::word::WordVariantPipeline;
use crate::seed::SeedEntry;
use crate::sink::VariantSink;
use crate::variant::VariantSet;

/// Lines written for one seed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordReport {
    pub word: String,
    pub variants: usize,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Number of seed words processed.
    pub words: usize,

    /// Total lines written across all blocks.
    pub variants_written: u64,

    /// Per-word line counts, in seed order.
    pub per_word: Vec<WordReport>,

    /// Whether the parallel path was used.
    pub parallel: bool,

    /// Wall-clock time of the run.
    pub duration_ms: u64,
}

/// Generates the dictionary for a list of seed words.
pub struct DictionaryGenerator {
    pipeline: WordVariantPipeline,
    thread_pool: Option<ThreadPool>,
}

impl DictionaryGenerator {
    /// Create a generator. Builds the worker pool when `parallel` is set.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;

        let thread_pool = if config.parallel {
            let pool = ThreadPoolBuilder::new()
                .num_threads(config.worker_threads())
                .thread_name(|i| format!("passmith-worker-{i}"))
                .build()
                .map_err(|e| PassmithError::thread_pool(format!("Failed to create thread pool: {e}")))?;
            Some(pool)
        } else {
            None
        };

        Ok(DictionaryGenerator {
            pipeline: WordVariantPipeline::new(&config),
            thread_pool,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        self.pipeline.config()
    }

    /// Expand every seed word and stream each block to `sink`, in seed order.
    pub fn generate<S: VariantSink + ?Sized>(
        &self,
        seeds: &[SeedEntry],
        sink: &mut S,
    ) -> Result<GenerationReport> {
        if seeds.is_empty() {
            return Err(PassmithError::EmptySeedInput);
        }
        for seed in seeds {
            seed.date.validate()?;
        }

        let start = Instant::now();
        let mut per_word = Vec::with_capacity(seeds.len());

        match &self.thread_pool {
            Some(pool) => {
                let batch_size = pool.current_num_threads().max(1);
                for batch in seeds.chunks(batch_size) {
                    let results: Vec<Result<VariantSet>> = pool.install(|| {
                        batch
                            .par_iter()
                            .map(|seed| self.pipeline.generate(seed))
                            .collect()
                    });
                    for (seed, result) in batch.iter().zip(results) {
                        per_word.push(self.write_block(seed, result?, sink)?);
                    }
                }
            }
            None => {
                for seed in seeds {
                    let variants = self.pipeline.generate(seed)?;
                    per_word.push(self.write_block(seed, variants, sink)?);
                }
            }
        }

        let report = GenerationReport {
            words: per_word.len(),
            variants_written: per_word.iter().map(|w| w.variants as u64).sum(),
            per_word,
            parallel: self.thread_pool.is_some(),
            duration_ms: duration_ms(start.elapsed()),
        };

        info!(
            "generated {} variants for {} seed words in {} ms",
            report.variants_written, report.words, report.duration_ms
        );
        Ok(report)
    }

    fn write_block<S: VariantSink + ?Sized>(
        &self,
        seed: &SeedEntry,
        variants: VariantSet,
        sink: &mut S,
    ) -> Result<WordReport> {
        let lines = if self.config().sort_output {
            variants.into_sorted_vec()
        } else {
            variants.into_vec()
        };

        for line in &lines {
            sink.append(line)?;
        }
        sink.end_block()?;

        Ok(WordReport {
            word: seed.word.to_string(),
            variants: lines.len(),
        })
    }
}

fn duration_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
