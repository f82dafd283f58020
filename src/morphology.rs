//! Morphological normalization to nominative case
//!
//! Dictionary-first: a token that maps to a canonical name via the
//! dictionary store is taken as already lemmatized and never re-processed.
//! Everything else goes through ordered suffix-stripping rules for the
//! declared language. Unknown languages pass tokens through unchanged and
//! record an error string — this stage never fails.

use crate::dicts::Dictionary;
use crate::language::Lang;

/// Result of a normalization pass over a whole text.
#[derive(Debug, Clone)]
pub struct MorphResult {
    pub normalized: String,
    pub errors: Vec<String>,
}

/// Oblique-form → nominative suffix rules, longest first.
///
/// Feminine nominative adjective surnames ("Павлова") intentionally reduce
/// to the masculine base; gender-aware correction downstream restores the
/// feminine ending when the given name requires it.
static RULES_RU: &[(&str, &str)] = &[
    ("ского", "ский"),
    ("цкого", "цкий"),
    ("зкого", "зкий"),
    ("скому", "ский"),
    ("ским", "ский"),
    ("ском", "ский"),
    ("ская", "ский"),
    ("овой", "ова"),
    ("евой", "ева"),
    ("иной", "ина"),
    ("овым", "ов"),
    ("евым", "ев"),
    ("иным", "ин"),
    ("ову", "ов"),
    ("еву", "ев"),
    ("ину", "ин"),
    ("ова", "ов"),
    ("ева", "ев"),
    ("ина", "ин"),
    ("ым", "ый"),
    ("ом", ""),
    ("ем", ""),
    ("ой", "а"),
    ("ою", "а"),
    ("ия", "ия"),
    ("ую", "ая"),
    ("а", ""),
    ("у", ""),
    ("е", ""),
];

static RULES_UK: &[(&str, &str)] = &[
    ("ського", "ський"),
    ("цького", "цький"),
    ("зького", "зький"),
    ("ському", "ський"),
    ("ським", "ський"),
    ("ська", "ський"),
    ("енкові", "енко"),
    ("енком", "енко"),
    ("енку", "енко"),
    ("енка", "енко"),
    ("чукові", "чук"),
    ("чуком", "чук"),
    ("чука", "чук"),
    ("юкові", "юк"),
    ("юком", "юк"),
    ("юка", "юк"),
    ("ові", ""),
    ("єві", "й"),
    ("єм", "й"),
    ("ом", ""),
    ("ою", "а"),
    ("ію", "ія"),
    ("ії", "ія"),
    ("ією", "ія"),
    ("я", ""),
    ("ю", ""),
    ("а", ""),
    ("і", "а"),
];

fn rules_for(lang: Lang) -> Option<&'static [(&'static str, &'static str)]> {
    match lang {
        Lang::Ru => Some(RULES_RU),
        Lang::Uk => Some(RULES_UK),
        // English carries no case morphology; identity is the analyzer.
        Lang::En => Some(&[]),
        Lang::Other => None,
    }
}

/// Reduce a single word to nominative.
///
/// Order: lemma blacklist → dictionary canonical map → suffix rules →
/// identity. Stems shorter than three characters are never truncated.
pub fn to_nominative(dict: &Dictionary, word: &str, lang: Lang) -> String {
    if word.is_empty() || dict.is_lemma_blacklisted(word) {
        return word.to_string();
    }
    if let Some(canonical) = dict.lookup_canonical(lang, word) {
        return canonical.to_string();
    }
    let Some(rules) = rules_for(lang) else {
        return word.to_string();
    };
    let lower = word.to_lowercase();
    for (suffix, replacement) in rules {
        if let Some(stem_lower) = lower.strip_suffix(suffix) {
            if stem_lower.chars().count() < 3 {
                continue;
            }
            // Cut the original (case-preserved) stem, not the lowered copy.
            let cut = word.chars().count() - suffix.chars().count();
            let stem: String = word.chars().take(cut).collect();
            return stem + replacement;
        }
    }
    word.to_string()
}

/// Normalize all alphabetic tokens of `text` to nominative, preserving
/// punctuation and token order. `remove_stop_words` is off in the core
/// pipeline; boundary trimming belongs to pattern extraction.
pub fn normalize(
    dict: &Dictionary,
    text: &str,
    lang: Lang,
    remove_stop_words: bool,
) -> MorphResult {
    let mut errors = Vec::new();
    if lang == Lang::Other && !text.trim().is_empty() {
        errors.push(format!("no analyzer for language '{lang}', tokens passed through"));
    }

    let mut out = Vec::new();
    for token in text.split_whitespace() {
        let is_word = token.chars().all(|c| c.is_alphabetic() || c == '\'' || c == 'ʼ' || c == '-');
        if !is_word {
            out.push(token.to_string());
            continue;
        }
        if dict.is_stop(lang, token) {
            if !remove_stop_words {
                out.push(token.to_string());
            }
            continue;
        }
        // Only name-like (capitalized) tokens are lemmatized; lowercase
        // common nouns keep their surface form.
        let name_like = token.chars().next().is_some_and(|c| c.is_uppercase());
        if name_like {
            out.push(to_nominative(dict, token, lang));
        } else {
            out.push(token.to_string());
        }
    }

    MorphResult {
        normalized: out.join(" "),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::new()
    }

    #[test]
    fn test_dictionary_mapped_token_wins() {
        let d = dict();
        // genitive diminutive resolves through the dictionary, not the rules
        assert_eq!(to_nominative(&d, "Сергія", Lang::Uk), "Сергій");
        assert_eq!(to_nominative(&d, "Даша", Lang::Ru), "Дарья");
    }

    #[test]
    fn test_uk_surname_genitive() {
        let d = dict();
        assert_eq!(to_nominative(&d, "Порошенка", Lang::Uk), "Порошенко");
        assert_eq!(to_nominative(&d, "Ковальчука", Lang::Uk), "Ковальчук");
    }

    #[test]
    fn test_ru_feminine_surname_reduces_to_base() {
        let d = dict();
        // nominative feminine reduces to the masculine base; the gender fix
        // downstream restores it when the first name is feminine
        assert_eq!(to_nominative(&d, "Павлова", Lang::Ru), "Павлов");
        assert_eq!(to_nominative(&d, "Смирновой", Lang::Ru), "Смирнова");
    }

    #[test]
    fn test_adjective_surname_oblique() {
        let d = dict();
        assert_eq!(to_nominative(&d, "Левицького", Lang::Uk), "Левицький");
        assert_eq!(to_nominative(&d, "Бродского", Lang::Ru), "Бродский");
    }

    #[test]
    fn test_short_stems_untouched() {
        let d = dict();
        assert_eq!(to_nominative(&d, "Ока", Lang::Ru), "Ока");
    }

    #[test]
    fn test_english_identity() {
        let d = dict();
        assert_eq!(to_nominative(&d, "Poroshenko", Lang::En), "Poroshenko");
    }

    #[test]
    fn test_unknown_language_records_error() {
        let d = dict();
        let r = normalize(&d, "какой-то текст", Lang::Other, false);
        assert!(!r.errors.is_empty());
        assert_eq!(r.normalized, "какой-то текст");
    }

    #[test]
    fn test_blacklisted_token_untouched() {
        let d = dict();
        assert_eq!(to_nominative(&d, "ТОВ", Lang::Uk), "ТОВ");
        assert_eq!(to_nominative(&d, "ООО", Lang::Ru), "ООО");
    }

    #[test]
    fn test_normalize_preserves_non_words() {
        let d = dict();
        let r = normalize(&d, "Оплата №123 від Петра", Lang::Uk, false);
        assert!(r.normalized.contains("№123"));
        assert!(r.normalized.contains("Петро"));
    }

    #[test]
    fn test_stop_word_removal_opt_in() {
        let d = dict();
        let r = normalize(&d, "оплата від Петра", Lang::Uk, true);
        assert_eq!(r.normalized, "Петро");
    }
}
