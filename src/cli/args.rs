//! Command line argument parsing for the Passmith CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::seed::{DEFAULT_MAX_SPECIAL_CHARS, SeedEntry};
use crate::sink::DEFAULT_OUTPUT_FILE;

/// Passmith - seed-driven password candidate generator
#[derive(Parser, Debug, Clone)]
#[command(name = "passmith")]
#[command(about = "Generate a deduplicated password-candidate dictionary from seed words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Passmith Contributors")]
#[command(long_about = None)]
pub struct PassmithArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for the run summary
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PassmithArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Log level for the effective verbosity: errors only when quiet,
    /// warnings by default, then info and debug.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a dictionary from seeds given on the command line or in a file
    Generate(GenerateArgs),

    /// Collect seeds interactively, then generate a dictionary
    Interactive(InteractiveArgs),

    /// Print upper-bound variant counts without generating
    Estimate(EstimateArgs),
}

/// Seed sources shared by `generate` and `estimate`
#[derive(Args, Debug, Clone, Default)]
pub struct SeedArgs {
    /// Seed word, optionally with a date: WORD or WORD@DAY/MONTH/YEAR
    #[arg(short = 's', long = "seed", value_name = "SEED")]
    pub seeds: Vec<SeedEntry>,

    /// JSON file with an array of {"word", "day", "month", "year"} objects
    #[arg(long = "seeds", value_name = "SEEDS_FILE")]
    pub seeds_file: Option<PathBuf>,

    /// Special characters written together, e.g. "!@#"
    #[arg(short = 'c', long = "special", value_name = "CHARS", default_value = "")]
    pub special: String,

    /// Maximum number of special characters accepted
    #[arg(long, default_value_t = DEFAULT_MAX_SPECIAL_CHARS)]
    pub max_special: usize,

    /// JSON file overriding the substitution table, e.g. {"a": ["4", "@"]}
    #[arg(long, value_name = "TABLE_FILE")]
    pub substitutions: Option<PathBuf>,
}

/// Generation options shared by `generate` and `interactive`
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output file ("-" for standard output)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Process seed words and expansions in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads (defaults to the number of CPUs)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Write each word's block in generation order instead of sorted
    #[arg(long)]
    pub no_sort: bool,

    /// Refuse words whose estimated variant count exceeds this
    #[arg(long, value_name = "COUNT")]
    pub max_variants: Option<u64>,
}

impl OutputArgs {
    /// Whether the dictionary goes to standard output.
    pub fn is_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}

/// Arguments for non-interactive generation
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub seeds: SeedArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for interactive generation
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Maximum number of special characters accepted
    #[arg(long, default_value_t = DEFAULT_MAX_SPECIAL_CHARS)]
    pub max_special: usize,

    /// JSON file overriding the substitution table
    #[arg(long, value_name = "TABLE_FILE")]
    pub substitutions: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for size estimation
#[derive(Parser, Debug, Clone)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub seeds: SeedArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
