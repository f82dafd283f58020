//! Script-statistics language detection
//!
//! Classifies input among `ru`, `uk`, `en`, `other` by counting characters in
//! disjoint script classes. Ukrainian- and Russian-specific Cyrillic letters
//! are decisive; generic Cyrillic ties break toward `ru`. Never fails: empty
//! input yields `Other` with zero confidence.

use serde::{Deserialize, Serialize};

/// Languages the pipeline distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ru,
    Uk,
    En,
    Other,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::Uk => "uk",
            Lang::En => "en",
            Lang::Other => "other",
        }
    }

    /// Both Slavic languages share dictionaries and stop-word unions.
    pub fn is_slavic(&self) -> bool {
        matches!(self, Lang::Ru | Lang::Uk)
    }

    /// The fallback partner for cross-dictionary lookups.
    pub fn other_slavic(&self) -> Option<Lang> {
        match self {
            Lang::Ru => Some(Lang::Uk),
            Lang::Uk => Some(Lang::Ru),
            _ => None,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the detector arrived at its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionMethod {
    ScriptStats,
    DictionaryVote,
    Fallback,
}

/// Detection outcome with a confidence in `[0, 1]`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LanguageResult {
    pub language: Lang,
    pub confidence: f32,
    pub method: DetectionMethod,
}

const UK_SPECIFIC: &str = "іїєґІЇЄҐ";
const RU_SPECIFIC: &str = "ёъыэЁЪЫЭ";

/// Detect the dominant language of `text`.
pub fn detect(text: &str) -> LanguageResult {
    let mut uk_specific = 0usize;
    let mut ru_specific = 0usize;
    let mut cyrillic = 0usize;
    let mut latin = 0usize;
    let mut other = 0usize;
    let mut total = 0usize;

    for ch in text.chars() {
        if ch.is_whitespace() {
            continue;
        }
        total += 1;
        if UK_SPECIFIC.contains(ch) {
            uk_specific += 1;
            cyrillic += 1;
        } else if RU_SPECIFIC.contains(ch) {
            ru_specific += 1;
            cyrillic += 1;
        } else if ('\u{0400}'..='\u{04FF}').contains(&ch) {
            cyrillic += 1;
        } else if ch.is_ascii_alphabetic() {
            latin += 1;
        } else {
            other += 1;
        }
    }

    if total == 0 {
        return LanguageResult {
            language: Lang::Other,
            confidence: 0.0,
            method: DetectionMethod::Fallback,
        };
    }

    let (language, class_count, method) = if uk_specific > 0 {
        (Lang::Uk, cyrillic, DetectionMethod::ScriptStats)
    } else if ru_specific > 0 {
        (Lang::Ru, cyrillic, DetectionMethod::ScriptStats)
    } else if cyrillic > 0 {
        // Generic Cyrillic with no language-specific letters: let the
        // stop-word vocabularies vote before the ru tie-break.
        match dictionary_vote(text) {
            Some(lang) => (lang, cyrillic, DetectionMethod::DictionaryVote),
            None if cyrillic > latin => (Lang::Ru, cyrillic, DetectionMethod::ScriptStats),
            None => (Lang::En, latin.max(1), DetectionMethod::ScriptStats),
        }
    } else if latin > 0 {
        (Lang::En, latin, DetectionMethod::ScriptStats)
    } else {
        (Lang::Other, other, DetectionMethod::Fallback)
    };

    let confidence = (class_count as f32 / total as f32).clamp(0.2, 1.0);

    LanguageResult {
        language,
        confidence,
        method,
    }
}

/// Count stop-word hits per Slavic language; a strict majority wins.
fn dictionary_vote(text: &str) -> Option<Lang> {
    let lower = text.to_lowercase();
    let mut uk_votes = 0usize;
    let mut ru_votes = 0usize;
    for word in lower.split(|c: char| !c.is_alphabetic()) {
        if word.is_empty() {
            continue;
        }
        // Words unique to one vocabulary are the signal; shared ones cancel.
        let in_uk = crate::dicts::uk_stop_words().contains(word);
        let in_ru = crate::dicts::ru_stop_words().contains(word);
        match (in_uk, in_ru) {
            (true, false) => uk_votes += 1,
            (false, true) => ru_votes += 1,
            _ => {}
        }
    }
    match uk_votes.cmp(&ru_votes) {
        std::cmp::Ordering::Greater => Some(Lang::Uk),
        std::cmp::Ordering::Less => Some(Lang::Ru),
        std::cmp::Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_ukrainian_specific_letters() {
        let r = detect("Переказ від Сергія");
        assert_eq!(r.language, Lang::Uk);
        assert!(r.confidence > 0.5);
        assert_eq!(r.method, DetectionMethod::ScriptStats);
    }

    #[test]
    fn test_detect_russian_specific_letters() {
        let r = detect("Подъём платежа");
        assert_eq!(r.language, Lang::Ru);
    }

    #[test]
    fn test_generic_cyrillic_ties_to_russian() {
        // No uk/ru-specific letters, no stop-word votes either way.
        let r = detect("Иванов Петров");
        assert_eq!(r.language, Lang::Ru);
    }

    #[test]
    fn test_dictionary_vote_breaks_cyrillic_tie() {
        // "переказ" is uk-only vocabulary; no uk-specific letters present.
        let r = detect("переказ на картку");
        assert_eq!(r.language, Lang::Uk);
        assert_eq!(r.method, DetectionMethod::DictionaryVote);
    }

    #[test]
    fn test_detect_latin() {
        let r = detect("John Smith payment");
        assert_eq!(r.language, Lang::En);
    }

    #[test]
    fn test_empty_input_never_fails() {
        let r = detect("");
        assert_eq!(r.language, Lang::Other);
        assert_eq!(r.confidence, 0.0);
        let r = detect("   \t ");
        assert_eq!(r.language, Lang::Other);
        assert_eq!(r.confidence, 0.0);
    }

    #[test]
    fn test_digits_only_is_other() {
        let r = detect("1234567890");
        assert_eq!(r.language, Lang::Other);
    }

    #[test]
    fn test_confidence_bounds() {
        for text in ["Петро", "hello", "тест 123", "...", "і"] {
            let r = detect(text);
            assert!((0.0..=1.0).contains(&r.confidence), "bad conf for {text:?}");
        }
    }

    #[test]
    fn test_mixed_cyrillic_dominates_latin() {
        let r = detect("Оплата payment від");
        assert_eq!(r.language, Lang::Uk);
    }
}
