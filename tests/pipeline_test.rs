//! End-to-end pipeline tests: payment descriptions in, canonical names out.

use once_cell::sync::Lazy;
use payscreen::config::Config;
use payscreen::filter::Decision;
use payscreen::pipeline::{EntityKind, Pipeline, ProcessOptions};
use payscreen::Lang;

static PIPELINE: Lazy<Pipeline> = Lazy::new(|| Pipeline::new(&Config::default()));

#[test]
fn test_payment_with_contract_tail() {
    let r = PIPELINE.process_simple("Оплата от Петро Порошенко по договору №123");
    assert!(r.success, "errors: {:?}", r.errors);
    assert_eq!(r.normalized, "Петро Порошенко");
    // -енко surname heuristic overrides the ru detection
    assert_eq!(r.language, Lang::Uk);
    assert_eq!(r.entity_kind, EntityKind::Person);
}

#[test]
fn test_company_with_legal_prefix_and_tail() {
    let r = PIPELINE.process_simple("Платеж для ООО \"Ромашка\" по счету 5");
    assert!(r.success, "errors: {:?}", r.errors);
    assert_eq!(r.normalized, "Ромашка");
    assert_eq!(r.entity_kind, EntityKind::Company);
}

#[test]
fn test_fop_treated_as_person() {
    let r = PIPELINE.process_simple("ФОП Павлова Дарья");
    assert!(r.success, "errors: {:?}", r.errors);
    assert_eq!(r.normalized, "Дарья Павлова");
    assert_eq!(r.entity_kind, EntityKind::Person);
}

#[test]
fn test_romanized_slavic_payment() {
    let r = PIPELINE.process_simple("Oplata vid Petro Poroshenko");
    assert!(r.success, "errors: {:?}", r.errors);
    assert_eq!(r.normalized, "Петро Порошенко");
    assert_eq!(r.language, Lang::Uk);
}

#[test]
fn test_initial_expands_via_preferences() {
    let r = PIPELINE.process_simple("П. Порошенко");
    assert!(r.success, "errors: {:?}", r.errors);
    assert_eq!(r.normalized, "Петро Порошенко");
}

#[test]
fn test_plain_word_fails_screening() {
    let r = PIPELINE.process_simple("сьогодні");
    assert!(!r.success);
    assert!(r.variants.is_empty());
    assert_eq!(PIPELINE.screen("сьогодні").decision, Decision::Allow);
}

#[test]
fn test_document_only_input() {
    let r = PIPELINE.process_simple("ИНН 1234567890 от 01.02.2020");
    assert!(!r.success, "no canonical should be produced");
    assert!(r.variants.is_empty());
    assert_eq!(
        PIPELINE.screen("ИНН 1234567890 от 01.02.2020").decision,
        Decision::Allow
    );
}

#[test]
fn test_empty_and_whitespace_inputs() {
    for text in ["", "   ", "\t\n"] {
        let r = PIPELINE.process_simple(text);
        assert!(!r.success);
        assert!(r.variants.is_empty());
    }
}

#[test]
fn test_language_always_classified() {
    for text in [
        "Петро Порошенко",
        "John Smith payment",
        "Подъём",
        "...",
        "ミク",
    ] {
        let r = PIPELINE.process_simple(text);
        assert!(
            matches!(r.language, Lang::Ru | Lang::Uk | Lang::En | Lang::Other),
            "text {text:?}"
        );
        assert!(
            (0.0..=1.0).contains(&r.language_confidence),
            "text {text:?}"
        );
    }
}

#[test]
fn test_variants_are_a_set() {
    let r = PIPELINE.process_simple("Переказ від Сергія Коваленка");
    assert!(r.success);
    let lowered: Vec<String> = r.variants.iter().map(|v| v.to_lowercase()).collect();
    let unique: std::collections::HashSet<&String> = lowered.iter().collect();
    assert_eq!(unique.len(), r.variants.len(), "variants: {:?}", r.variants);
    assert!(r.variants.iter().all(|v| !v.trim().is_empty()));
    assert!(r.variants.len() <= 50);
}

#[test]
fn test_determinism_across_runs() {
    let opts = ProcessOptions {
        force_reprocess: true,
        ..Default::default()
    };
    let a = PIPELINE.process("Оплата від Петра Порошенка", &opts);
    let b = PIPELINE.process("Оплата від Петра Порошенка", &opts);
    assert_eq!(a.normalized, b.normalized);
    assert_eq!(a.language, b.language);
    assert_eq!(a.variants, b.variants);
    assert_eq!(a.success, b.success);
}

#[test]
fn test_cache_returns_equal_result() {
    // fresh pipeline so the cache state is deterministic
    let p = Pipeline::new(&Config::default());
    let first = p.process_simple("Переказ від Івана Франка");
    let second = p.process_simple("Переказ від Івана Франка");
    assert_eq!(first.normalized, second.normalized);
    assert_eq!(first.variants, second.variants);
    assert_eq!(first.language, second.language);
    assert_eq!(p.stats().pipeline.cache_hits, 1);
}

#[test]
fn test_surname_firstname_order() {
    let r = PIPELINE.process_simple("Оплата від Порошенка Петра");
    assert!(r.success);
    assert_eq!(r.normalized, "Петро Порошенко");
}

#[test]
fn test_diminutive_in_payment() {
    let r = PIPELINE.process_simple("Переказ від Сашка Шевченка");
    assert!(r.success);
    assert_eq!(r.normalized, "Олександр Шевченко");
}

#[test]
fn test_variants_cover_cross_script() {
    let r = PIPELINE.process_simple("Оплата від Петра Порошенка");
    assert!(r.success);
    assert!(
        r.variants.iter().any(|v| v == "Petro Poroshenko"),
        "variants: {:?}",
        r.variants
    );
}

#[test]
fn test_high_risk_text_blocks() {
    let d = PIPELINE.screen("финансирование терроризма сбор средств");
    assert_eq!(d.decision, Decision::Block);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        /// The pipeline never panics and always upholds the result
        /// invariants, whatever bytes arrive.
        #[test]
        fn process_never_panics(text in "\\PC{0,80}") {
            let r = PIPELINE.process(
                &text,
                &ProcessOptions { force_reprocess: true, ..Default::default() },
            );
            prop_assert!((0.0..=1.0).contains(&r.language_confidence));
            if !r.success {
                prop_assert!(r.variants.is_empty());
            } else {
                prop_assert!(!r.normalized.is_empty());
                prop_assert!(r.variants.iter().all(|v| !v.trim().is_empty()));
            }
        }

        /// Screening confidence always lands in the unit interval.
        #[test]
        fn screen_never_panics(text in "\\PC{0,80}") {
            let d = PIPELINE.screen(&text);
            prop_assert!((0.0..=1.0).contains(&d.confidence));
        }
    }
}
