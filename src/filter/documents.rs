//! Document-identifier signal detection: tax numbers, dates, document
//! numbers, IBAN, phone, email.
//!
//! Tax-number detection is two-pass because the engine has no variable-width
//! lookbehind: first find candidate digit runs of plausible length, then
//! check a short window before each run for a tax-context keyword.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::filter::SignalGroup;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{8,12}\b").expect("valid regex"));
static TAX_CONTEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:инн|інн|єдрпоу|огрн|кпп|tin|ein|itn)[\s:№#]*$").expect("valid regex")
});
static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{1,2}[./-]\d{1,2}[./-]\d{2,4}\b|\b\d{4}-\d{2}-\d{2}\b").expect("valid regex")
});
static DOC_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[№#]\s*\d+").expect("valid regex"));
static IBAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{2}\d{2}[A-Z0-9]{10,30}\b").expect("valid regex"));
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d{1,3}[\s\-]?\(?\d{2,4}\)?[\s\-]?\d{3}[\s\-]?\d{2}[\s\-]?\d{2}\b")
        .expect("valid regex")
});
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});
static BANK_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:бик|мфо|swift|bic)[\s:№#]*[A-Z0-9]{6,11}\b").expect("valid regex")
});

/// Window (in bytes, clamped to char boundary) inspected before a digit run.
const CONTEXT_WINDOW: usize = 16;

#[derive(Default)]
pub struct DocumentDetector;

impl DocumentDetector {
    pub fn new() -> Self {
        DocumentDetector
    }

    pub fn detect(&self, text: &str) -> SignalGroup {
        let mut group = SignalGroup::default();

        // Pass 1: candidate digit runs. Pass 2: tax keyword in the window
        // immediately before the run.
        let tax_ids = DIGIT_RUN
            .find_iter(text)
            .filter(|m| {
                let start = m.start();
                let window_start = start.saturating_sub(CONTEXT_WINDOW);
                let window_start = (window_start..=start)
                    .find(|i| text.is_char_boundary(*i))
                    .unwrap_or(start);
                TAX_CONTEXT.is_match(text[window_start..start].trim_end())
            })
            .count();
        group.add(tax_ids, 0.8, 0.95, "tax_id");

        let dates = DATE.find_iter(text).count();
        group.add(dates, 0.3, 0.7, "date");

        let doc_numbers = DOC_NUMBER.find_iter(text).count();
        group.add(doc_numbers, 0.6, 0.9, "document_number");

        let ibans = IBAN.find_iter(text).count();
        group.add(ibans, 0.9, 0.95, "iban");

        let bank_codes = BANK_CODE.find_iter(text).count();
        group.add(bank_codes, 0.6, 0.9, "bank_code");

        let phones = PHONE.find_iter(text).count();
        group.add(phones, 0.4, 0.7, "phone");

        let emails = EMAIL.find_iter(text).count();
        group.add(emails, 0.5, 0.8, "email");

        group.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inn_with_context() {
        let g = DocumentDetector::new().detect("ИНН 1234567890 от 01.02.2020");
        assert!(g.signals.iter().any(|s| *s == "tax_id"));
        assert!(g.signals.iter().any(|s| *s == "date"));
        assert!(g.confidence >= 0.8);
    }

    #[test]
    fn test_bare_digits_not_tax_id() {
        let g = DocumentDetector::new().detect("перевод 1234567890");
        assert!(!g.signals.iter().any(|s| *s == "tax_id"));
    }

    #[test]
    fn test_iban() {
        let g = DocumentDetector::new().detect("UA213223130000026007233566001");
        assert!(g.signals.iter().any(|s| *s == "iban"));
    }

    #[test]
    fn test_document_number() {
        let g = DocumentDetector::new().detect("по договору №123");
        assert!(g.signals.iter().any(|s| *s == "document_number"));
    }

    #[test]
    fn test_email_and_phone() {
        let g = DocumentDetector::new().detect("contact: john@example.com +380 44 123 45 67");
        assert!(g.signals.iter().any(|s| *s == "email"));
        assert!(g.signals.iter().any(|s| *s == "phone"));
    }

    #[test]
    fn test_clean_text() {
        let g = DocumentDetector::new().detect("Оплата від Петра");
        assert_eq!(g.confidence, 0.0);
    }
}
