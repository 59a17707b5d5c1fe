//! Criterion benchmarks for Passmith.
//!
//! Covers the expansion stages that dominate run time:
//! - Case expansion
//! - Incremental substitution
//! - Full per-word pipeline, sequential and parallel

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use passmith::date::hint::DateHint;
use passmith::expand::case::case_variants;
use passmith::expand::substitution::SubstitutionExpander;
use passmith::expand::table::SubstitutionTable;
use passmith::pipeline::config::PipelineConfig;
use passmith::pipeline::word::WordVariantPipeline;
use passmith::seed::{SeedEntry, SeedWord, SpecialChars};
use std::hint::black_box;

const WORDS: [&str; 4] = ["cat", "sally", "password", "ilovesoccer"];

/// Benchmark case expansion for words of growing length.
fn bench_case_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("case_variants");

    for word in WORDS {
        group.throughput(Throughput::Elements(1 << word.len()));
        group.bench_with_input(BenchmarkId::from_parameter(word), word, |b, word| {
            b.iter(|| black_box(case_variants(black_box(word))))
        });
    }

    group.finish();
}

/// Benchmark substitution followed by case expansion.
fn bench_substitution(c: &mut Criterion) {
    let mut group = c.benchmark_group("substitution");
    group.sample_size(20);

    let sequential = SubstitutionExpander::new(SubstitutionTable::default());
    let parallel = SubstitutionExpander::new(SubstitutionTable::default()).parallel(true);

    for word in &WORDS[..3] {
        group.bench_with_input(BenchmarkId::new("sequential", word), word, |b, word| {
            b.iter(|| black_box(sequential.expand_word(black_box(word))))
        });
        group.bench_with_input(BenchmarkId::new("parallel", word), word, |b, word| {
            b.iter(|| black_box(parallel.expand_word(black_box(word))))
        });
    }

    group.finish();
}

/// Benchmark the full pipeline for one seed with a date and special characters.
fn bench_word_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_pipeline");
    group.sample_size(10);

    let entry = SeedEntry::new(
        SeedWord::new("sally").unwrap(),
        DateHint::new("5", "12", "99").unwrap(),
    );
    let config = PipelineConfig::default().with_special_chars(SpecialChars::new(vec!['!', '@']));

    let sequential = WordVariantPipeline::new(&config);
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(sequential.generate(black_box(&entry)).unwrap()))
    });

    let parallel = WordVariantPipeline::new(&config.clone().with_parallel(true));
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(parallel.generate(black_box(&entry)).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_case_variants,
    bench_substitution,
    bench_word_pipeline
);
criterion_main!(benches);
