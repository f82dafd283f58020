//! Canonical-name reconstruction
//!
//! Turns a raw name span into `First Last` in nominative case: decides token
//! order, re-decides the name language from character and surname-suffix
//! evidence, expands initials through the preference maps, maps diminutives
//! and declensions to canonical given names, and re-genders adjective
//! surnames to match the given name. Idempotent over its own output.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dicts::{self, Dictionary, Gender};
use crate::language::Lang;
use crate::morphology;

static NAME_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-zА-Яа-яЁёІіЇїЄєҐґ'ʼ\-]+").expect("valid regex"));
static INITIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zА-ЯЁІЇЄҐ]\.?$").expect("valid regex"));

const UK_CHARS: &str = "іїєґІЇЄҐ";
const RU_CHARS: &str = "ёъыэЁЪЫЭ";

static FEM_ENDINGS_RU: &[(&str, &str)] = &[
    ("ский", "ская"),
    ("цкий", "цкая"),
    ("зкий", "зкая"),
    ("ов", "ова"),
    ("ев", "ева"),
    ("ин", "ина"),
    ("ын", "ына"),
];

static FEM_ENDINGS_UK: &[(&str, &str)] =
    &[("ський", "ська"), ("цький", "цька"), ("зький", "зька")];

pub struct Canonicalizer {
    dict: Arc<Dictionary>,
}

impl Canonicalizer {
    pub fn new(dict: Arc<Dictionary>) -> Self {
        Canonicalizer { dict }
    }

    /// Canonicalize a free-form name span. Returns `None` when no name
    /// tokens survive tokenization.
    pub fn canonicalize(&self, name_text: &str, default_lang: Lang) -> Option<String> {
        let parts: Vec<&str> = NAME_TOKEN.find_iter(name_text).map(|m| m.as_str()).collect();
        if parts.is_empty() {
            return None;
        }

        let mut first = parts[0];
        let mut last = if parts.len() > 1 {
            parts[parts.len() - 1]
        } else {
            ""
        };

        // `Surname Firstname` order: swap when only the trailing token is a
        // known given name.
        if parts.len() >= 2
            && self.dict.is_known_given_name(last)
            && !self.dict.is_known_given_name(first)
        {
            std::mem::swap(&mut first, &mut last);
        }

        let lang = self.name_language(first, last, default_lang);

        // Initial-only first token: `П` or `П.` expands via the preference map.
        if INITIAL.is_match(first) {
            let letter = first
                .chars()
                .next()
                .and_then(|c| c.to_uppercase().next())?;
            let mut expansions = self.dict.initial_expansions(lang, letter);
            if expansions.is_empty() {
                if let Some(alt) = lang.other_slavic() {
                    expansions = self.dict.initial_expansions(alt, letter);
                }
            }
            if let Some(expanded) = expansions.first() {
                let canon_last = if last.is_empty() {
                    String::new()
                } else {
                    morphology::to_nominative(&self.dict, last, lang)
                };
                return Some(join_name(title(expanded), title(&canon_last)));
            }
        }

        // Dictionary first; lemmatize only on miss; retry the map afterwards
        // to catch genitive-of-diminutive chains.
        let mut canon_first = match self.dict.lookup_canonical(lang, first) {
            Some(c) => c.to_string(),
            None => {
                let nominative = morphology::to_nominative(&self.dict, first, lang);
                match self.dict.lookup_canonical(lang, &nominative) {
                    Some(c) => c.to_string(),
                    None => nominative,
                }
            }
        };

        let mut canon_last = if last.is_empty() {
            String::new()
        } else {
            morphology::to_nominative(&self.dict, last, lang)
        };

        let gender = self.dict.gender_of(lang, &canon_first);
        if gender == Gender::Femn && !canon_last.is_empty() {
            canon_last = fix_surname_gender(&canon_last, lang);
        }

        canon_first = title(&canon_first);
        canon_last = title(&canon_last);
        Some(join_name(canon_first, canon_last))
    }

    /// Re-decide the name language: character evidence first, then the
    /// Ukrainian surname-suffix heuristic, then the detected default.
    fn name_language(&self, first: &str, last: &str, default: Lang) -> Lang {
        let has = |s: &str, set: &str| s.chars().any(|c| set.contains(c));
        if has(first, UK_CHARS) || has(last, UK_CHARS) {
            return Lang::Uk;
        }
        if has(first, RU_CHARS) || has(last, RU_CHARS) {
            return Lang::Ru;
        }
        let last_lower = last.to_lowercase();
        if dicts::uk_surname_suffixes()
            .iter()
            .any(|suf| last_lower.ends_with(suf))
        {
            return Lang::Uk;
        }
        if matches!(default, Lang::Ru | Lang::Uk | Lang::En) {
            default
        } else {
            Lang::Uk
        }
    }
}

/// Map masculine adjective endings to feminine, preserving stem case.
fn fix_surname_gender(last: &str, lang: Lang) -> String {
    let endings = match lang {
        Lang::Ru => FEM_ENDINGS_RU,
        Lang::Uk => FEM_ENDINGS_UK,
        _ => return last.to_string(),
    };
    let lower = last.to_lowercase();
    for (src, dst) in endings {
        if lower.ends_with(src) {
            let cut = last.chars().count() - src.chars().count();
            let stem: String = last.chars().take(cut).collect();
            return stem + dst;
        }
    }
    last.to_string()
}

/// Uppercase the first character, keep the rest as-is.
fn title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn join_name(first: String, last: String) -> String {
    if last.is_empty() {
        first
    } else {
        format!("{first} {last}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon() -> Canonicalizer {
        Canonicalizer::new(Arc::new(Dictionary::new()))
    }

    #[test]
    fn test_plain_full_name() {
        let c = canon();
        assert_eq!(
            c.canonicalize("Петро Порошенко", Lang::Uk).unwrap(),
            "Петро Порошенко"
        );
    }

    #[test]
    fn test_genitive_reduces_to_nominative() {
        let c = canon();
        assert_eq!(
            c.canonicalize("Петра Порошенка", Lang::Uk).unwrap(),
            "Петро Порошенко"
        );
    }

    #[test]
    fn test_surname_first_order_swapped() {
        let c = canon();
        assert_eq!(
            c.canonicalize("Павлова Дарья", Lang::Ru).unwrap(),
            "Дарья Павлова"
        );
    }

    #[test]
    fn test_feminine_surname_regendered() {
        let c = canon();
        // morphology reduces Павлова → Павлов; the femn given name restores it
        assert_eq!(
            c.canonicalize("Дарья Павлова", Lang::Ru).unwrap(),
            "Дарья Павлова"
        );
    }

    #[test]
    fn test_initial_expansion_uk_preference() {
        let c = canon();
        assert_eq!(
            c.canonicalize("П. Порошенко", Lang::Uk).unwrap(),
            "Петро Порошенко"
        );
    }

    #[test]
    fn test_initial_expansion_ru() {
        let c = canon();
        assert_eq!(
            c.canonicalize("С. Иванов", Lang::Ru).unwrap(),
            "Сергей Иванов"
        );
    }

    #[test]
    fn test_uk_suffix_overrides_ru_detection() {
        let c = canon();
        // no uk-specific characters, but -енко forces uk
        let result = c.canonicalize("Петро Порошенко", Lang::Ru).unwrap();
        assert_eq!(result, "Петро Порошенко");
    }

    #[test]
    fn test_diminutive_mapped_to_canonical() {
        let c = canon();
        assert_eq!(
            c.canonicalize("Сашко Шевченко", Lang::Uk).unwrap(),
            "Олександр Шевченко"
        );
    }

    #[test]
    fn test_single_token() {
        let c = canon();
        assert_eq!(c.canonicalize("Петро", Lang::Uk).unwrap(), "Петро");
    }

    #[test]
    fn test_no_tokens() {
        let c = canon();
        assert!(c.canonicalize("№123 456", Lang::Uk).is_none());
        assert!(c.canonicalize("", Lang::Uk).is_none());
    }

    #[test]
    fn test_idempotent() {
        let c = canon();
        for input in [
            "Петра Порошенка",
            "Дарья Павлова",
            "П. Порошенко",
            "Сашко Шевченко",
        ] {
            let once = c.canonicalize(input, Lang::Uk).unwrap();
            let twice = c.canonicalize(&once, Lang::Uk).unwrap();
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }
}
