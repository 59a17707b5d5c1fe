use std::collections::HashSet;
use std::fs;

use clap::Parser;
use tempfile::Builder;

use passmith::cli::args::PassmithArgs;
use passmith::cli::commands::execute_command;
use passmith::date::hint::DateHint;
use passmith::error::PassmithError;
use passmith::pipeline::config::PipelineConfig;
use passmith::pipeline::engine::DictionaryGenerator;
use passmith::seed::{SeedEntry, SeedWord, SpecialChars};
use passmith::sink::FileSink;

#[test]
fn test_file_sink_truncates_previous_output() {
    let dir = Builder::new().prefix("test_truncate").tempdir().unwrap();
    let path = dir.path().join("password_dictionary.txt");
    fs::write(&path, "stale line\nanother stale line\n").unwrap();

    let generator = DictionaryGenerator::new(PipelineConfig::default()).unwrap();
    let mut sink = FileSink::create(&path).unwrap();
    let report = generator
        .generate(&[SeedEntry::word("dog").unwrap()], &mut sink)
        .unwrap();
    assert_eq!(sink.lines_written(), report.variants_written);
    drop(sink);

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("stale"));
    assert_eq!(content.lines().count(), 12);
    assert!(content.ends_with('\n'));
}

#[test]
fn test_blocks_follow_seed_order_without_cross_word_dedup() {
    let dir = Builder::new().prefix("test_blocks").tempdir().unwrap();
    let path = dir.path().join("dict.txt");

    let seeds = vec![
        SeedEntry::word("zz").unwrap(),
        SeedEntry::word("aa").unwrap(),
        SeedEntry::word("ZZ").unwrap(),
    ];
    let generator = DictionaryGenerator::new(PipelineConfig::default()).unwrap();
    let mut sink = FileSink::create(&path).unwrap();
    generator.generate(&seeds, &mut sink).unwrap();
    drop(sink);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    // "zz": 4 case variants, "aa": 9 substitution/case variants, "ZZ": 4 again.
    assert_eq!(lines.len(), 4 + 9 + 4);
    assert_eq!(&lines[..4], &["ZZ", "Zz", "zZ", "zz"]);
    assert!(
        lines[4..13]
            .iter()
            .all(|line| line.eq_ignore_ascii_case("aa") || line.contains('4'))
    );
    assert_eq!(&lines[13..], &lines[..4]);

    let unique: HashSet<&str> = lines.iter().copied().collect();
    assert_eq!(unique.len(), 4 + 9);
}

#[test]
fn test_parallel_run_writes_identical_file() {
    let dir = Builder::new().prefix("test_parallel").tempdir().unwrap();
    let sequential_path = dir.path().join("sequential.txt");
    let parallel_path = dir.path().join("parallel.txt");

    let seeds = vec![
        SeedEntry::new(
            SeedWord::new("Sam").unwrap(),
            DateHint::new("1", "7", "").unwrap(),
        ),
        SeedEntry::word("rex").unwrap(),
        SeedEntry::word("olive").unwrap(),
    ];
    let config = PipelineConfig::default()
        .with_special_chars(SpecialChars::new(vec!['!']))
        .with_thread_pool_size(2);

    let mut sink = FileSink::create(&sequential_path).unwrap();
    DictionaryGenerator::new(config.clone())
        .unwrap()
        .generate(&seeds, &mut sink)
        .unwrap();
    drop(sink);

    let mut sink = FileSink::create(&parallel_path).unwrap();
    DictionaryGenerator::new(config.with_parallel(true))
        .unwrap()
        .generate(&seeds, &mut sink)
        .unwrap();
    drop(sink);

    assert_eq!(
        fs::read_to_string(&sequential_path).unwrap(),
        fs::read_to_string(&parallel_path).unwrap()
    );
}

#[test]
fn test_size_guard_refuses_large_words() {
    let dir = Builder::new().prefix("test_guard").tempdir().unwrap();
    let path = dir.path().join("dict.txt");

    let config = PipelineConfig::default().with_max_variants_per_word(100);
    let generator = DictionaryGenerator::new(config).unwrap();
    let mut sink = FileSink::create(&path).unwrap();

    let result = generator.generate(
        &[
            SeedEntry::word("cat").unwrap(),
            SeedEntry::word("sassafras").unwrap(),
        ],
        &mut sink,
    );
    assert!(matches!(result, Err(PassmithError::ResourceExhausted(_))));
    drop(sink);

    // The first word's block was complete before the failure.
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 12);
}

#[test]
fn test_cli_generate_with_dated_seed() {
    let dir = Builder::new().prefix("test_cli").tempdir().unwrap();
    let path = dir.path().join("dict.txt");

    let args = PassmithArgs::try_parse_from([
        "passmith",
        "--quiet",
        "generate",
        "--seed",
        "Cat@5//",
        "--special",
        "!",
        "--output",
        path.to_str().unwrap(),
    ])
    .unwrap();
    execute_command(args).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: HashSet<&str> = content.lines().collect();

    // 12 base variants, 2 date tokens, 1 special char.
    assert_eq!(lines.len(), 12 * (1 + 2 * 2) * 4);
    for line in ["Cat", "C4t05", "5cAT", "!05C4T!", "cat5!"] {
        assert!(lines.contains(line), "{line} missing");
    }
}

#[test]
fn test_binary_exit_codes() {
    let dir = Builder::new().prefix("test_exit").tempdir().unwrap();
    let path = dir.path().join("dict.txt");
    let run = |special: &str| {
        std::process::Command::new(env!("CARGO_BIN_EXE_passmith"))
            .args(["-q", "generate", "-s", "cat", "-c", special, "-o"])
            .arg(&path)
            .output()
            .unwrap()
    };

    let ok = run("!");
    assert!(ok.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 48);

    let rejected = run("!@#$%^");
    assert_eq!(rejected.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&rejected.stderr).contains("too many special characters"));
}
