//! Per-word variant pipeline and the run-level generator.
//!
//! - [`config::PipelineConfig`] - substitution table, special characters,
//!   parallelism and size guard, passed explicitly into every component
//! - [`word::WordVariantPipeline`] - expands one seed word into its full
//!   variant set
//! - [`engine::DictionaryGenerator`] - runs the pipeline over every seed
//!   word and streams each word's block to a sink
//! - [`estimate`] - upper-bound size estimates, computed without generating
//!
//! # Examples
//!
//! ```
//! use passmith::pipeline::config::PipelineConfig;
//! use passmith::pipeline::engine::DictionaryGenerator;
//! use passmith::seed::{SeedEntry, SpecialChars};
//! use passmith::sink::MemorySink;
//!
//! let config = PipelineConfig::default().with_special_chars(SpecialChars::new(vec!['!']));
//! let generator = DictionaryGenerator::new(config).unwrap();
//!
//! let seeds = vec![SeedEntry::word("Cat").unwrap()];
//! let mut sink = MemorySink::new();
//! let report = generator.generate(&seeds, &mut sink).unwrap();
//!
//! assert!(sink.lines().any(|line| line == "!CAT!"));
//! assert!(sink.lines().any(|line| line == "C4t!"));
//! assert_eq!(report.words, 1);
//! ```

pub mod config;
pub mod engine;
pub mod estimate;
pub mod word;
