//! # Passmith
//!
//! Generates a deduplicated dictionary of password candidates from seed
//! words, optional per-word date hints, and a set of special characters. It
//! is meant for password-strength auditing: feed it what you know about a
//! target and it produces every plausible variant.
//!
//! ## Features
//!
//! - Incremental leetspeak substitution (`a → 4`, `s → 5 / $`, ...)
//! - Every upper/lower case combination
//! - Date tokens from day/month/year in every order, with zero padding
//! - Special characters as prefix, suffix, or both, one at a time
//! - Streaming output, one block per seed word
//! - Optional data-parallel expansion with rayon
//!
//! Output size grows geometrically with word length, substitution table
//! size and special character count. See [`pipeline::estimate`] for
//! computing bounds before generating.

pub mod cli;
pub mod combinatorics;
pub mod date;
pub mod error;
pub mod expand;
pub mod pipeline;
pub mod seed;
pub mod sink;
pub mod variant;

pub mod prelude {
    pub use crate::date::hint::DateHint;
    pub use crate::error::{PassmithError, Result};
    pub use crate::expand::Expander;
    pub use crate::expand::table::SubstitutionTable;
    pub use crate::pipeline::config::PipelineConfig;
    pub use crate::pipeline::engine::{DictionaryGenerator, GenerationReport};
    pub use crate::pipeline::word::WordVariantPipeline;
    pub use crate::seed::{SeedEntry, SeedWord, SpecialChars};
    pub use crate::sink::{FileSink, MemorySink, VariantSink, WriterSink};
    pub use crate::variant::VariantSet;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
