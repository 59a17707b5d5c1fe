//! Output formatting for CLI commands.
//!
//! Summaries go to whatever writer the command picks: standard output
//! normally, standard error when the dictionary itself is streamed to
//! standard output.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, PassmithArgs};
use crate::error::Result;
use crate::pipeline::engine::GenerationReport;
use crate::pipeline::estimate::SizeEstimate;

/// Result structure for a generation run.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub output: String,
    #[serde(flatten)]
    pub report: GenerationReport,
}

/// Result structure for size estimation.
#[derive(Debug, Serialize, Deserialize)]
pub struct EstimateReport {
    pub estimates: Vec<SizeEstimate>,
    pub total: u64,
}

impl EstimateReport {
    pub fn new(estimates: Vec<SizeEstimate>) -> Self {
        let total = estimates
            .iter()
            .map(|e| e.total)
            .fold(0u64, u64::saturating_add);
        EstimateReport { estimates, total }
    }
}

/// Human-readable rendering of a result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write, args: &PassmithArgs) -> Result<()>;
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &PassmithArgs,
    out: &mut dyn Write,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out, args)
        }
        OutputFormat::Json => output_json(result, args, out),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PassmithArgs, out: &mut dyn Write) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

impl HumanOutput for GenerationSummary {
    fn write_human(&self, out: &mut dyn Write, args: &PassmithArgs) -> Result<()> {
        writeln!(out, "Dictionary:")?;
        writeln!(out, "═══════════")?;
        writeln!(out, "Output: {}", self.output)?;
        writeln!(out, "Seed words: {}", self.report.words)?;
        writeln!(out, "Variants written: {}", self.report.variants_written)?;
        writeln!(out, "Generation time: {}ms", self.report.duration_ms)?;

        if args.verbosity() > 1 {
            writeln!(out)?;
            writeln!(out, "Per word:")?;
            writeln!(out, "─────────")?;
            for word in &self.report.per_word {
                writeln!(out, "  {}: {}", word.word, word.variants)?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for EstimateReport {
    fn write_human(&self, out: &mut dyn Write, _args: &PassmithArgs) -> Result<()> {
        writeln!(out, "Size Estimates:")?;
        writeln!(out, "═══════════════")?;

        for estimate in &self.estimates {
            writeln!(out)?;
            writeln!(out, "Seed: {}", estimate.word)?;
            writeln!(out, "  Substitution variants: {}", estimate.substitution_variants)?;
            writeln!(out, "  With case variants: {}", estimate.base_variants)?;
            writeln!(out, "  Date tokens: {}", estimate.date_tokens)?;
            writeln!(out, "  Upper bound: {}", format_count(estimate.total))?;
        }

        writeln!(out)?;
        writeln!(out, "Total upper bound: {}", format_count(self.total))?;
        Ok(())
    }
}

/// Format a count, marking saturated values.
fn format_count(count: u64) -> String {
    if count == u64::MAX {
        format!(">= {count}")
    } else {
        count.to_string()
    }
}
