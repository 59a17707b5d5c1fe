//! Command implementations for the Passmith CLI.

use std::io::{self, Write};

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::cli::prompt::Prompter;
use crate::error::{PassmithError, Result};
use crate::expand::table::SubstitutionTable;
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::engine::DictionaryGenerator;
use crate::pipeline::estimate::estimate_word;
use crate::seed::{SeedEntry, SpecialChars};
use crate::sink::{FileSink, VariantSink, WriterSink};

/// Execute a CLI command.
pub fn execute_command(args: PassmithArgs) -> Result<()> {
    match &args.command {
        Command::Generate(generate_args) => generate(generate_args.clone(), &args),
        Command::Interactive(interactive_args) => interactive(interactive_args.clone(), &args),
        Command::Estimate(estimate_args) => estimate(estimate_args.clone(), &args),
    }
}

/// Generate a dictionary from command line or file seeds.
fn generate(args: GenerateArgs, cli_args: &PassmithArgs) -> Result<()> {
    let seeds = load_seeds(&args.seeds)?;
    let config = build_config(&args.seeds, &args.output)?;

    run_generation(&seeds, config, &args.output, cli_args)
}

/// Collect seeds interactively, then generate.
fn interactive(args: InteractiveArgs, cli_args: &PassmithArgs) -> Result<()> {
    let session = {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stderr());
        prompter.collect(args.max_special)?
    };

    let config = output_config(&args.output, load_table(args.substitutions.as_deref())?)
        .with_special_chars(session.special_chars);

    run_generation(&session.seeds, config, &args.output, cli_args)
}

/// Print upper-bound sizes without generating.
fn estimate(args: EstimateArgs, cli_args: &PassmithArgs) -> Result<()> {
    let seeds = load_seeds(&args.seeds)?;
    let config = PipelineConfig::default()
        .with_substitutions(load_table(args.seeds.substitutions.as_deref())?)
        .with_special_chars(SpecialChars::parse(
            &args.seeds.special,
            Some(args.seeds.max_special),
        )?);

    let estimates = seeds
        .iter()
        .map(|seed| estimate_word(seed, &config))
        .collect::<Result<Vec<_>>>()?;

    output_result(
        "Estimated dictionary size",
        &EstimateReport::new(estimates),
        cli_args,
        &mut io::stdout(),
    )
}

fn run_generation(
    seeds: &[SeedEntry],
    config: PipelineConfig,
    output: &OutputArgs,
    cli_args: &PassmithArgs,
) -> Result<()> {
    let generator = DictionaryGenerator::new(config)?;

    // The output file is truncated here, once, before any word is generated.
    let mut sink: Box<dyn VariantSink> = if output.is_stdout() {
        Box::new(WriterSink::new(io::stdout()))
    } else {
        let file_sink = FileSink::create(&output.output)?;
        info!("writing dictionary to {}", file_sink.path().display());
        Box::new(file_sink)
    };

    info!("generating dictionary for {} seed words", seeds.len());
    let report = generator.generate(seeds, sink.as_mut())?;
    drop(sink);

    let summary = GenerationSummary {
        output: output.output.display().to_string(),
        report,
    };

    if cli_args.verbosity() == 0 {
        return Ok(());
    }

    // Keep standard output clean when it carries the dictionary.
    let mut out: Box<dyn Write> = if output.is_stdout() {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    output_result("Dictionary generated", &summary, cli_args, out.as_mut())
}

/// Gather seeds from `--seed` arguments and the optional seeds file.
fn load_seeds(args: &SeedArgs) -> Result<Vec<SeedEntry>> {
    let mut seeds = args.seeds.clone();
    if let Some(path) = &args.seeds_file {
        seeds.extend(SeedEntry::load_from_file(path)?);
    }

    if seeds.is_empty() {
        return Err(PassmithError::EmptySeedInput);
    }
    Ok(seeds)
}

fn load_table(path: Option<&std::path::Path>) -> Result<SubstitutionTable> {
    match path {
        Some(path) => SubstitutionTable::load_from_file(path),
        None => Ok(SubstitutionTable::default()),
    }
}

fn build_config(seeds: &SeedArgs, output: &OutputArgs) -> Result<PipelineConfig> {
    let special_chars = SpecialChars::parse(&seeds.special, Some(seeds.max_special))?;
    let table = load_table(seeds.substitutions.as_deref())?;

    Ok(output_config(output, table).with_special_chars(special_chars))
}

fn output_config(output: &OutputArgs, table: SubstitutionTable) -> PipelineConfig {
    let mut config = PipelineConfig::default()
        .with_substitutions(table)
        .with_parallel(output.parallel)
        .with_sort_output(!output.no_sort);

    if let Some(threads) = output.threads {
        config = config.with_thread_pool_size(threads);
    }
    if let Some(max) = output.max_variants {
        config = config.with_max_variants_per_word(max);
    }
    config
}
