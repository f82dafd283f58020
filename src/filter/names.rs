//! Person-name signal detection for the pre-screening filter.
//!
//! Each sub-detector contributes `min(count · step, cap)`; the group total
//! is capped at 1.0. Steps and caps are inherited constants.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dicts::Dictionary;
use crate::filter::SignalGroup;

static FULL_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[А-ЯЁІЇЄҐA-Z][а-яёіїєґa-z'ʼ\-]+\s+[А-ЯЁІЇЄҐA-Z][а-яёіїєґa-z'ʼ\-]+\b")
        .expect("valid regex")
});
static INITIALS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[А-ЯЁІЇЄҐA-Z]\.\s*(?:[А-ЯЁІЇЄҐA-Z]\.\s*)?[А-ЯЁІЇЄҐA-Z][а-яёіїєґa-z'ʼ\-]+")
        .expect("valid regex")
});
static PATRONYMIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[А-ЯЁІЇЄҐ][а-яёіїєґ]+(?:ович|евич|йович|івна|ївна|овна|евна)\b")
        .expect("valid regex")
});
static SLAVIC_SURNAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[А-ЯЁІЇЄҐ][а-яёіїєґ]+(?:енко|чук|юк|ук|ський|цький|зький|ский|цкий|ов|ев|ин|ова|ева|ина)\b")
        .expect("valid regex")
});

pub struct NameDetector {
    dict: Arc<Dictionary>,
}

impl NameDetector {
    pub fn new(dict: Arc<Dictionary>) -> Self {
        NameDetector { dict }
    }

    pub fn detect(&self, text: &str) -> SignalGroup {
        let mut group = SignalGroup::default();

        let full = FULL_NAME.find_iter(text).count();
        group.add(full, 0.4, 0.9, "full_name");

        let initials = INITIALS.find_iter(text).count();
        group.add(initials, 0.6, 0.8, "initials");

        let patronymics = PATRONYMIC.find_iter(text).count();
        group.add(patronymics, 0.8, 0.95, "patronymic");

        let surnames = SLAVIC_SURNAME.find_iter(text).count();
        group.add(surnames, 0.7, 0.9, "slavic_surname");

        // Dictionary membership of standalone capitalized tokens.
        let dict_hits = text
            .split(|c: char| !c.is_alphabetic() && c != '\'' && c != 'ʼ' && c != '-')
            .filter(|w| w.chars().next().is_some_and(|c| c.is_uppercase()))
            .filter(|w| self.dict.is_known_given_name(w))
            .count();
        group.add(dict_hits, 0.3, 0.6, "dictionary_name");

        group.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> NameDetector {
        NameDetector::new(Arc::new(Dictionary::new()))
    }

    #[test]
    fn test_full_name_signal() {
        let g = detector().detect("Оплата от Петро Порошенко");
        assert!(g.confidence > 0.5, "confidence {}", g.confidence);
        assert!(g.count > 0);
    }

    #[test]
    fn test_patronymic_strong_signal() {
        let g = detector().detect("Иван Петрович Сидоров");
        assert!(g.signals.iter().any(|s| *s == "patronymic"));
        assert!(g.confidence >= 0.8);
    }

    #[test]
    fn test_no_names() {
        let g = detector().detect("оплата по счету 5");
        assert_eq!(g.count, 0);
        assert_eq!(g.confidence, 0.0);
    }

    #[test]
    fn test_confidence_capped_at_one() {
        let g = detector()
            .detect("Петро Порошенко Іван Франко Тарас Шевченко Сергій Коваленко Анна Мельник");
        assert!(g.confidence <= 1.0);
    }
}
