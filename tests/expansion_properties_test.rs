use passmith::date::component::DateComponentExpander;
use passmith::date::composer::DateVariantComposer;
use passmith::date::hint::DateHint;
use passmith::error::PassmithError;
use passmith::expand::Expander;
use passmith::expand::case::{CaseExpander, case_variants};
use passmith::expand::special::SpecialCharAugmenter;
use passmith::expand::substitution::SubstitutionExpander;
use passmith::expand::table::SubstitutionTable;
use passmith::pipeline::config::PipelineConfig;
use passmith::pipeline::word::WordVariantPipeline;
use passmith::seed::{SeedEntry, SeedWord, SpecialChars};
use passmith::variant::VariantSet;

fn set(items: &[&str]) -> VariantSet {
    items.iter().copied().collect()
}

#[test]
fn test_case_expansion_size_and_members() {
    let expander = CaseExpander::new();

    for word in ["", "a", "Cat", "p4ss!", "sally99", "MiXeD"] {
        let letters = word.chars().filter(|c| c.is_ascii_alphabetic()).count();
        let variants = expander.expand(VariantSet::singleton(word)).unwrap();

        assert_eq!(variants.len(), 1 << letters, "word {word:?}");
        for variant in &variants {
            assert!(variant.eq_ignore_ascii_case(word));
        }
    }
}

#[test]
fn test_substitution_keeps_case_variants_of_word() {
    let expander = SubstitutionExpander::new(SubstitutionTable::default());

    for word in ["Sally", "seal", "oil", "Cat"] {
        let variants = expander.expand_word(word);
        for variant in &case_variants(word) {
            assert!(variants.contains(variant), "{variant} missing for {word}");
        }
    }
}

#[test]
fn test_substitution_without_eligible_characters() {
    let expander = SubstitutionExpander::new(SubstitutionTable::default());

    assert_eq!(expander.expand_word("xyz"), case_variants("xyz"));
    assert_eq!(expander.expand_word("4$1"), set(&["4$1"]));
    assert_eq!(
        expander.expand_word("C4T"),
        expander.expand_word("c4t"),
        "already substituted characters are not substituted again"
    );
}

#[test]
fn test_date_component_expansion() {
    let expander = DateComponentExpander::new();

    assert_eq!(expander.expand("5").unwrap(), set(&["5", "05"]));
    assert_eq!(expander.expand("05").unwrap(), set(&["05"]));
    assert!(expander.expand("").unwrap().is_empty());
    assert!(matches!(
        expander.expand("123"),
        Err(PassmithError::InvalidDateComponent { .. })
    ));
    assert!(matches!(
        expander.expand("ab"),
        Err(PassmithError::InvalidDateComponent { .. })
    ));
}

#[test]
fn test_date_composition() {
    let composer = DateVariantComposer::new();

    let single = composer.compose(&DateHint::new("5", "", "").unwrap()).unwrap();
    assert_eq!(single, set(&["5", "05"]));

    let pair = composer.compose(&DateHint::new("1", "2", "").unwrap()).unwrap();
    for token in ["12", "102", "0102", "21", "201", "021", "0201"] {
        assert!(pair.contains(token), "{token} missing");
    }
    assert_eq!(pair.len(), 4 + 8);
}

#[test]
fn test_special_char_augmentation() {
    let augmenter = SpecialCharAugmenter::new(vec!['!']);
    let variants = augmenter.expand(set(&["cat"])).unwrap();

    assert_eq!(variants, set(&["cat", "!cat", "cat!", "!cat!"]));
}

#[test]
fn test_end_to_end_single_word() {
    let config = PipelineConfig::default().with_special_chars(SpecialChars::new(vec!['!']));
    let pipeline = WordVariantPipeline::new(&config);
    let entry = SeedEntry::word("Cat").unwrap();

    let variants = pipeline.generate(&entry).unwrap();

    assert!(variants.contains("!CAT!"));
    assert!(variants.contains("cat"));
    assert!(!variants.contains("1aT!"));
    for variant in ["C4t", "c4T", "!C4T", "c4t!", "!c4T!"] {
        assert!(variants.contains(variant), "{variant} missing");
    }
    assert_eq!(variants.len(), 12 * 4);
}

#[test]
fn test_generation_is_deterministic() {
    let config = PipelineConfig::default().with_special_chars(SpecialChars::new(vec!['#', '!']));
    let entry = SeedEntry::new(
        SeedWord::new("Lisa").unwrap(),
        DateHint::new("7", "", "88").unwrap(),
    );

    let first = WordVariantPipeline::new(&config).generate(&entry).unwrap();
    let second = WordVariantPipeline::new(&config).generate(&entry).unwrap();
    let parallel = WordVariantPipeline::new(&config.clone().with_parallel(true))
        .generate(&entry)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first, parallel);
}
