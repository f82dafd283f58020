//! Cross-script and morphological variant expansion
//!
//! Expands a canonical name into the alternative spellings indexed alongside
//! it: declensions, diminutives, dictionary variants, transliteration pairs,
//! a Cyrillic→Latin rendering of the whole name, an Arabic→Latin rendering
//! when Arabic code points are present, and a punctuation-stripped alias for
//! compound names. Output is insertion-ordered and deduplicated, so a fixed
//! input always yields the identical sequence.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::dicts::Dictionary;
use crate::language::Lang;
use crate::translit;

/// Default cap applied by the orchestrator.
pub const MAX_VARIANTS: usize = 50;

/// Generated variants with index weights per index-time convention:
/// 1.0 primary, 0.8 generated, 0.7 Arabic→Latin, 0.6 Cyrillic→Latin.
#[derive(Debug, Clone, Serialize)]
pub struct WeightedVariant {
    pub text: String,
    pub lang: String,
    pub weight: f32,
}

/// Cap on generated (weight 0.8) records per base name at index time.
const MAX_GENERATED_RECORDS: usize = 10;

pub struct VariantGenerator {
    dict: Arc<Dictionary>,
}

impl VariantGenerator {
    pub fn new(dict: Arc<Dictionary>) -> Self {
        VariantGenerator { dict }
    }

    /// Expand `text` (a canonical name) into up to `max_variants` distinct
    /// non-empty strings. The canonical itself is always first.
    pub fn generate(&self, text: &str, lang: Lang, max_variants: usize) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let mut out = Vec::new();
        let mut seen = HashSet::new();
        let mut push = |s: String, out: &mut Vec<String>| {
            let trimmed = s.trim();
            if !trimmed.is_empty() && seen.insert(trimmed.to_lowercase()) {
                out.push(trimmed.to_string());
            }
        };

        push(text.to_string(), &mut out);

        let tokens: Vec<&str> = text.split_whitespace().collect();
        let first = tokens.first().copied().unwrap_or(text);
        let rest = if tokens.len() > 1 {
            tokens[1..].join(" ")
        } else {
            String::new()
        };
        let with_rest = |form: &str| {
            if rest.is_empty() {
                form.to_string()
            } else {
                format!("{form} {rest}")
            }
        };

        if let Some(canonical) = self.dict.lookup_canonical(lang, first) {
            if let Some(rec) = self
                .dict
                .record(lang, canonical)
                .or_else(|| lang.other_slavic().and_then(|l| self.dict.record(l, canonical)))
            {
                for form in rec.declensions {
                    push(with_rest(form), &mut out);
                }
                for form in rec.diminutives.iter().chain(rec.variants) {
                    push(with_rest(form), &mut out);
                }
                for form in rec.transliterations {
                    push(with_rest(form), &mut out);
                }
            }
        }

        if translit::contains_cyrillic(text) {
            push(translit::cyrillic_to_latin(text), &mut out);
        }
        if translit::contains_arabic(text) {
            push(translit::arabic_to_latin(text), &mut out);
        }

        // Compound names get a punctuation-stripped alias: O'Brien → OBrien.
        if text.contains('\'') || text.contains('ʼ') || text.contains('-') {
            let stripped: String = text
                .chars()
                .filter(|c| c.is_alphanumeric() || c.is_whitespace())
                .collect();
            push(stripped, &mut out);
        }

        out.truncate(max_variants);
        out
    }

    /// Index-time weighted records for a normalized name and its variants.
    ///
    /// The primary form leads at weight 1.0; generated variants are capped
    /// and weighted 0.8; script transliterations carry their own weights and
    /// script-qualified language tags.
    pub fn weighted_records(
        &self,
        normalized: &str,
        variants: &[String],
        lang: Lang,
    ) -> Vec<WeightedVariant> {
        let mut records = Vec::new();
        let mut seen = HashSet::new();

        let normalized = normalized.trim();
        if normalized.is_empty() {
            return records;
        }
        seen.insert(normalized.to_lowercase());
        records.push(WeightedVariant {
            text: normalized.to_string(),
            lang: lang.as_str().to_string(),
            weight: 1.0,
        });

        // Script renderings are reserved for their own weight classes even
        // when the generator already produced them as plain variants.
        let arabic = translit::contains_arabic(normalized)
            .then(|| translit::arabic_to_latin(normalized));
        let latin = translit::contains_cyrillic(normalized)
            .then(|| translit::cyrillic_to_latin(normalized));
        for form in arabic.iter().chain(latin.iter()) {
            seen.insert(form.to_lowercase());
        }

        for v in variants
            .iter()
            .filter(|v| seen.insert(v.to_lowercase()))
            .take(MAX_GENERATED_RECORDS)
        {
            records.push(WeightedVariant {
                text: v.clone(),
                lang: lang.as_str().to_string(),
                weight: 0.8,
            });
        }

        if let Some(ar) = arabic {
            records.push(WeightedVariant {
                text: ar,
                lang: "ar-Latn".to_string(),
                weight: 0.7,
            });
        }
        if let Some(lat) = latin {
            records.push(WeightedVariant {
                text: lat,
                lang: format!("{lang}-Latn"),
                weight: 0.6,
            });
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> VariantGenerator {
        VariantGenerator::new(Arc::new(Dictionary::new()))
    }

    #[test]
    fn test_canonical_always_first() {
        let g = generator();
        let vs = g.generate("Петро Порошенко", Lang::Uk, MAX_VARIANTS);
        assert_eq!(vs[0], "Петро Порошенко");
    }

    #[test]
    fn test_declensions_and_diminutives_included() {
        let g = generator();
        let vs = g.generate("Петро Порошенко", Lang::Uk, MAX_VARIANTS);
        assert!(vs.iter().any(|v| v == "Петра Порошенко"), "got {vs:?}");
        assert!(vs.iter().any(|v| v == "Петя Порошенко"), "got {vs:?}");
    }

    #[test]
    fn test_transliteration_pairs_included() {
        let g = generator();
        let vs = g.generate("Сергій", Lang::Uk, MAX_VARIANTS);
        for t in ["Serhii", "Serhiy", "Sergiy"] {
            assert!(vs.iter().any(|v| v == t), "{t} missing from {vs:?}");
        }
    }

    #[test]
    fn test_full_name_cyrillic_to_latin() {
        let g = generator();
        let vs = g.generate("Петро Порошенко", Lang::Uk, MAX_VARIANTS);
        assert!(vs.iter().any(|v| v == "Petro Poroshenko"), "got {vs:?}");
    }

    #[test]
    fn test_no_duplicates_no_empties() {
        let g = generator();
        let vs = g.generate("Анна Коваленко", Lang::Uk, MAX_VARIANTS);
        let lowered: Vec<String> = vs.iter().map(|v| v.to_lowercase()).collect();
        let set: HashSet<&String> = lowered.iter().collect();
        assert_eq!(set.len(), vs.len());
        assert!(vs.iter().all(|v| !v.trim().is_empty()));
    }

    #[test]
    fn test_max_variants_cap() {
        let g = generator();
        let vs = g.generate("Олександр Шевченко", Lang::Uk, 3);
        assert_eq!(vs.len(), 3);
        assert_eq!(vs[0], "Олександр Шевченко");
    }

    #[test]
    fn test_deterministic_order() {
        let g = generator();
        let a = g.generate("Володимир Коваль", Lang::Uk, MAX_VARIANTS);
        let b = g.generate("Володимир Коваль", Lang::Uk, MAX_VARIANTS);
        assert_eq!(a, b);
    }

    #[test]
    fn test_compound_name_alias() {
        let g = generator();
        let vs = g.generate("O'Brien", Lang::En, MAX_VARIANTS);
        assert!(vs.iter().any(|v| v == "OBrien"), "got {vs:?}");
    }

    #[test]
    fn test_empty_input() {
        let g = generator();
        assert!(g.generate("", Lang::Uk, MAX_VARIANTS).is_empty());
        assert!(g.generate("   ", Lang::Uk, MAX_VARIANTS).is_empty());
    }

    #[test]
    fn test_weighted_records_convention() {
        let g = generator();
        let variants = g.generate("Петро Порошенко", Lang::Uk, MAX_VARIANTS);
        let records = g.weighted_records("Петро Порошенко", &variants, Lang::Uk);
        assert_eq!(records[0].text, "Петро Порошенко");
        assert!((records[0].weight - 1.0).abs() < f32::EPSILON);
        // cyrillic→latin record carries weight 0.6 and a -Latn tag
        let lat = records.iter().find(|r| r.lang == "uk-Latn").unwrap();
        assert!((lat.weight - 0.6).abs() < f32::EPSILON);
        // generated records capped
        let generated = records.iter().filter(|r| r.weight == 0.8).count();
        assert!(generated <= MAX_GENERATED_RECORDS);
    }
}
