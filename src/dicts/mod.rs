//! Dictionary store: canonical name tables, stop words, triggers, initials.
//!
//! All tables are static and compiled in; [`Dictionary::new`] builds the
//! derived lookup maps (alt-form → canonical, initial → preferences) once at
//! startup. The store is read-only after construction and shared by
//! reference — no locking anywhere downstream.
//!
//! Duplicate canonical keys exist in the source tables; map construction
//! inserts in declaration order, so the last definition wins.

mod names_en;
mod names_ru;
mod names_uk;
mod regional;
mod stopwords;
mod triggers;

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::language::Lang;

/// Grammatical gender of a canonical given name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masc,
    Femn,
    Neut,
    Unknown,
}

/// One canonical name with all its alternative forms.
///
/// `canonical` is the nominative singular. The alt arrays may repeat the
/// canonical itself; lookups are case-insensitive over all of them.
#[derive(Debug, Clone, Copy)]
pub struct NameRecord {
    pub canonical: &'static str,
    pub gender: Gender,
    pub variants: &'static [&'static str],
    pub diminutives: &'static [&'static str],
    pub transliterations: &'static [&'static str],
    pub declensions: &'static [&'static str],
}

/// Per-language derived tables.
struct LangTables {
    /// lowercased alt form (canonical, variant, diminutive, declension) → canonical
    canonical: HashMap<String, &'static str>,
    /// canonical → full record (last definition wins)
    records: HashMap<&'static str, &'static NameRecord>,
    /// uppercase initial → ordered canonical preferences
    initials: HashMap<char, Vec<&'static str>>,
    /// lowercased given-name membership (canonical forms only)
    names: HashSet<String>,
    /// lowercased surname membership
    surnames: HashSet<String>,
}

impl LangTables {
    fn build(
        table: &'static [NameRecord],
        surnames: &'static [&'static str],
        preferences: &'static [(char, &'static [&'static str])],
    ) -> Self {
        let mut canonical = HashMap::new();
        let mut records: HashMap<&'static str, &'static NameRecord> = HashMap::new();
        let mut names = HashSet::new();

        for rec in table {
            // Insertion order preserves the source's last-wins duplicate rule.
            records.insert(rec.canonical, rec);
            names.insert(rec.canonical.to_lowercase());
            canonical.insert(rec.canonical.to_lowercase(), rec.canonical);
            for alt in rec
                .variants
                .iter()
                .chain(rec.diminutives)
                .chain(rec.declensions)
            {
                canonical.insert(alt.to_lowercase(), rec.canonical);
            }
        }

        // Initial map: every canonical under its first letter, then explicit
        // preferences spliced to the front in order.
        let mut initials: HashMap<char, Vec<&'static str>> = HashMap::new();
        for rec in table {
            if let Some(first) = rec.canonical.chars().next() {
                let key = first.to_uppercase().next().unwrap_or(first);
                let list = initials.entry(key).or_default();
                if !list.contains(&rec.canonical) {
                    list.push(rec.canonical);
                }
            }
        }
        for (letter, preferred) in preferences {
            let list = initials.entry(*letter).or_default();
            for name in preferred.iter().rev() {
                list.retain(|n| n != name);
                list.insert(0, name);
            }
        }

        let surnames = surnames.iter().map(|s| s.to_lowercase()).collect();

        LangTables {
            canonical,
            records,
            initials,
            names,
            surnames,
        }
    }

}

/// The in-memory dictionary store.
pub struct Dictionary {
    uk: LangTables,
    ru: LangTables,
    en: LangTables,
    /// Regional packs flattened into one membership set (lowercased).
    regional: HashSet<String>,
    /// Tokens never lemmatized.
    lemma_blacklist: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        let regional = regional::ASIAN
            .iter()
            .chain(regional::ARABIC)
            .chain(regional::INDIAN)
            .chain(regional::EUROPEAN)
            .chain(regional::SCANDINAVIAN)
            .map(|s| s.to_lowercase())
            .collect();

        let lemma_blacklist = triggers::LEMMA_BLACKLIST
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        let dict = Dictionary {
            uk: LangTables::build(names_uk::NAMES, names_uk::SURNAMES, triggers::INITIALS_UK),
            ru: LangTables::build(names_ru::NAMES, names_ru::SURNAMES, triggers::INITIALS_RU),
            en: LangTables::build(names_en::NAMES, names_en::SURNAMES, &[]),
            regional,
            lemma_blacklist,
        };
        tracing::debug!(
            uk = dict.uk.records.len(),
            ru = dict.ru.records.len(),
            en = dict.en.records.len(),
            regional = dict.regional.len(),
            "Dictionary tables built"
        );
        dict
    }

    fn tables(&self, lang: Lang) -> &LangTables {
        match lang {
            Lang::Uk => &self.uk,
            Lang::Ru => &self.ru,
            Lang::En => &self.en,
            Lang::Other => &self.en,
        }
    }

    /// Case-insensitive alt-form → canonical lookup. On miss for a Slavic
    /// language, falls back to the other Slavic table.
    pub fn lookup_canonical(&self, lang: Lang, token: &str) -> Option<&'static str> {
        let key = token.to_lowercase();
        if let Some(c) = self.tables(lang).canonical.get(&key) {
            return Some(c);
        }
        lang.other_slavic()
            .and_then(|alt| self.tables(alt).canonical.get(&key).copied())
    }

    /// Gender of a canonical name, consulting the other Slavic table on miss.
    pub fn gender_of(&self, lang: Lang, canonical: &str) -> Gender {
        if let Some(rec) = self.tables(lang).records.get(canonical) {
            return rec.gender;
        }
        lang.other_slavic()
            .and_then(|alt| self.tables(alt).records.get(canonical))
            .map(|rec| rec.gender)
            .unwrap_or(Gender::Unknown)
    }

    /// Ordered expansion preferences for an uppercase initial.
    pub fn initial_expansions(&self, lang: Lang, letter: char) -> &[&'static str] {
        self.tables(lang)
            .initials
            .get(&letter)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Full record for a canonical name (declensions, diminutives, translits).
    pub fn record(&self, lang: Lang, canonical: &str) -> Option<&'static NameRecord> {
        self.tables(lang).records.get(canonical).copied()
    }

    /// Stop-word membership. Slavic languages test the ru ∪ uk union so mixed
    /// phrasing trims from either side.
    pub fn is_stop(&self, lang: Lang, token: &str) -> bool {
        let key = token.to_lowercase();
        match lang {
            Lang::Ru | Lang::Uk => {
                ru_stop_words().contains(key.as_str()) || uk_stop_words().contains(key.as_str())
            }
            Lang::En => stopwords::EN.contains(&key.as_str()),
            Lang::Other => false,
        }
    }

    /// Known given name in either Slavic table (any alt form).
    pub fn is_known_given_name(&self, token: &str) -> bool {
        let key = token.to_lowercase();
        self.uk.canonical.contains_key(&key) || self.ru.canonical.contains_key(&key)
    }

    /// Canonical-form membership for the pattern extractor.
    pub fn is_dictionary_name(&self, lang: Lang, word: &str) -> bool {
        let key = word.to_lowercase();
        self.tables(lang).names.contains(&key) || self.regional.contains(&key)
    }

    pub fn is_dictionary_surname(&self, lang: Lang, word: &str) -> bool {
        self.tables(lang).surnames.contains(&word.to_lowercase())
    }

    pub fn is_lemma_blacklisted(&self, token: &str) -> bool {
        self.lemma_blacklist.contains(&token.to_lowercase())
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Static vocabularies (no per-instance state) =====

pub(crate) fn uk_stop_words() -> &'static HashSet<&'static str> {
    static SET: Lazy<HashSet<&'static str>> =
        Lazy::new(|| stopwords::UK.iter().copied().collect());
    &SET
}

pub(crate) fn ru_stop_words() -> &'static HashSet<&'static str> {
    static SET: Lazy<HashSet<&'static str>> =
        Lazy::new(|| stopwords::RU.iter().copied().collect());
    &SET
}

/// Payment-context trigger words for a language.
pub fn payment_context(lang: Lang) -> &'static [&'static str] {
    match lang {
        Lang::Ru => triggers::PAYMENT_CONTEXT_RU,
        Lang::Uk => triggers::PAYMENT_CONTEXT_UK,
        _ => triggers::PAYMENT_CONTEXT_EN,
    }
}

/// Counterparty prepositions for a language.
pub fn preps(lang: Lang) -> &'static [&'static str] {
    match lang {
        Lang::Ru => triggers::PREPS_RU,
        Lang::Uk => triggers::PREPS_UK,
        _ => triggers::PREPS_EN,
    }
}

/// Legal-entity abbreviations for a language.
pub fn legal_entities(lang: Lang) -> &'static [&'static str] {
    match lang {
        Lang::Ru => triggers::LEGAL_ENTITIES_RU,
        Lang::Uk => triggers::LEGAL_ENTITIES_UK,
        _ => triggers::LEGAL_ENTITIES_EN,
    }
}

/// Long legal phrases for a language.
pub fn long_phrases(lang: Lang) -> &'static [&'static str] {
    match lang {
        Lang::Ru => triggers::LONG_PHRASES_RU,
        Lang::Uk => triggers::LONG_PHRASES_UK,
        _ => triggers::LONG_PHRASES_EN,
    }
}

/// Lowercased legal-entity markers across all languages.
pub(crate) fn all_legal_entities_lower() -> &'static HashSet<String> {
    static SET: Lazy<HashSet<String>> = Lazy::new(|| {
        triggers::LEGAL_ENTITIES_RU
            .iter()
            .chain(triggers::LEGAL_ENTITIES_UK)
            .chain(triggers::LEGAL_ENTITIES_EN)
            .map(|s| s.to_lowercase())
            .collect()
    });
    &SET
}

/// Lowercased long legal phrases across all languages.
pub(crate) fn all_long_phrases_lower() -> &'static Vec<String> {
    static LIST: Lazy<Vec<String>> = Lazy::new(|| {
        triggers::LONG_PHRASES_RU
            .iter()
            .chain(triggers::LONG_PHRASES_UK)
            .chain(triggers::LONG_PHRASES_EN)
            .map(|s| s.to_lowercase())
            .collect()
    });
    &LIST
}

/// Multi-pattern automaton over the long legal phrases. Patterns are stored
/// lowercase; match against a lowercased haystack.
pub(crate) fn long_phrase_matcher() -> &'static aho_corasick::AhoCorasick {
    static AC: Lazy<aho_corasick::AhoCorasick> = Lazy::new(|| {
        aho_corasick::AhoCorasick::builder()
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(all_long_phrases_lower())
            .expect("valid phrase automaton")
    });
    &AC
}

/// Ukrainian surname suffixes (nominative and oblique forms).
pub(crate) fn uk_surname_suffixes() -> &'static [&'static str] {
    triggers::UK_SURNAME_SUFFIXES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_canonical_direct() {
        let d = Dictionary::new();
        assert_eq!(d.lookup_canonical(Lang::Uk, "Петро"), Some("Петро"));
        assert_eq!(d.lookup_canonical(Lang::Uk, "петро"), Some("Петро"));
    }

    #[test]
    fn test_lookup_canonical_via_diminutive() {
        let d = Dictionary::new();
        assert_eq!(d.lookup_canonical(Lang::Uk, "Сашко"), Some("Олександр"));
        assert_eq!(d.lookup_canonical(Lang::Ru, "Даша"), Some("Дарья"));
    }

    #[test]
    fn test_lookup_canonical_via_declension() {
        let d = Dictionary::new();
        // genitive form
        assert_eq!(d.lookup_canonical(Lang::Uk, "Петра"), Some("Петро"));
        assert_eq!(d.lookup_canonical(Lang::Uk, "Сергія"), Some("Сергій"));
    }

    #[test]
    fn test_slavic_fallback_lookup() {
        let d = Dictionary::new();
        // "Ольга" is only in the ru table; the uk lookup falls through.
        assert_eq!(d.lookup_canonical(Lang::Uk, "Ольга"), Some("Ольга"));
    }

    #[test]
    fn test_gender_of() {
        let d = Dictionary::new();
        assert_eq!(d.gender_of(Lang::Uk, "Дарія"), Gender::Femn);
        assert_eq!(d.gender_of(Lang::Ru, "Пётр"), Gender::Masc);
        assert_eq!(d.gender_of(Lang::Ru, "Чужинець"), Gender::Unknown);
    }

    #[test]
    fn test_initial_expansions_preference_order() {
        let d = Dictionary::new();
        let p = d.initial_expansions(Lang::Uk, 'П');
        assert_eq!(p.first().copied(), Some("Петро"));
        let s = d.initial_expansions(Lang::Ru, 'С');
        assert_eq!(s.first().copied(), Some("Сергей"));
    }

    #[test]
    fn test_stop_words_slavic_union() {
        let d = Dictionary::new();
        // uk word recognized under ru and vice versa
        assert!(d.is_stop(Lang::Ru, "від"));
        assert!(d.is_stop(Lang::Uk, "перевод"));
        assert!(!d.is_stop(Lang::Uk, "Порошенко"));
    }

    #[test]
    fn test_duplicate_canonical_last_wins() {
        let d = Dictionary::new();
        // names_uk carries two "Олена" records; the later payload (with the
        // extra "Олёна" variant) must be the one in the map.
        let rec = d.record(Lang::Uk, "Олена").expect("record exists");
        assert!(rec.variants.contains(&"Олёна"));
    }

    #[test]
    fn test_regional_membership() {
        let d = Dictionary::new();
        assert!(d.is_dictionary_name(Lang::En, "Muhammad"));
        assert!(d.is_dictionary_name(Lang::Uk, "Хіроші"));
        assert!(!d.is_dictionary_name(Lang::En, "Zzyzx"));
    }

    #[test]
    fn test_surname_membership() {
        let d = Dictionary::new();
        assert!(d.is_dictionary_surname(Lang::Uk, "Порошенко"));
        assert!(d.is_dictionary_surname(Lang::Ru, "Иванов"));
    }
}
