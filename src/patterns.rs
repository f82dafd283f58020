//! Name-pattern extraction
//!
//! Regex + dictionary engine emitting typed [`NamePattern`] spans: person
//! names in payment context, company names after legal-entity markers,
//! dictionary membership hits, bare capitalized-pair matches, and positional
//! guesses. Confidence is a fixed base per family — monotone within a kind,
//! not comparable across kinds.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;

use crate::dicts::{self, Dictionary};
use crate::language::Lang;

/// Pattern families, in descending extraction priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    PaymentContext,
    CompanyContext,
    DictionaryName,
    DictionarySurname,
    DictionaryNameClean,
    DictionarySurnameClean,
    FullName,
    InitialsSurname,
    SurnameInitials,
    SingleInitialSurname,
    PositionBased,
}

/// One extracted span with its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct NamePattern {
    pub span: String,
    pub kind: PatternKind,
    pub language: Lang,
    pub confidence: f32,
    pub source: &'static str,
    pub created_at: DateTime<Utc>,
}

impl NamePattern {
    fn new(span: String, kind: PatternKind, language: Lang, confidence: f32, source: &'static str) -> Self {
        NamePattern {
            span,
            kind,
            language,
            confidence,
            source,
            created_at: Utc::now(),
        }
    }
}

const CYR_NAME: &str = r"[А-ЯЁІЇЄҐ][а-яёіїєґ'ʼ\-]+(?:\s+[А-ЯЁІЇЄҐ][а-яёіїєґ'ʼ\-]+){0,3}";
const LAT_NAME: &str = r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+){0,3}";
const CYR_INITIAL: &str = r"([А-ЯЁІЇЄҐ])\.?\s*([А-ЯЁІЇЄҐ][а-яёіїєґ'ʼ\-]+)";
const LAT_INITIAL: &str = r"([A-Z])\.\s*([A-Z][a-z]+)";
const SEP: &str = r"[\s,:;\-]*";

/// Company name core: a quoted run or a capitalized multi-token phrase.
const COMP_CORE: &str =
    r#"(?:"[^"\n]{2,}"|«[^»\n]{2,}»|[A-ZА-ЯЁІЇЄҐ0-9][\w\-]+(?:\s+[A-ZА-ЯЁІЇЄҐ0-9][\w\-]+){0,6})"#;

/// Quoted-only company core. A quoted run or a legal marker is required for
/// a company span; a bare capitalized pair is a person, not a company.
const COMP_QUOTED: &str = r#"(?:"[^"\n]{2,}"|«[^»\n]{2,}»)"#;

struct LangPatterns {
    basic: Vec<(PatternKind, Regex)>,
    payment: Vec<Regex>,
    payment_initial: Regex,
    company: Vec<Regex>,
}

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

impl LangPatterns {
    fn build(lang: Lang) -> Self {
        let name = if lang.is_slavic() { CYR_NAME } else { LAT_NAME };
        let initial = if lang.is_slavic() { CYR_INITIAL } else { LAT_INITIAL };
        let context = alternation(dicts::payment_context(lang));
        let preps = alternation(dicts::preps(lang));
        let legal = alternation(dicts::legal_entities(lang));

        // Full names need two capitalized tokens; the 0-to-3 continuation is
        // only for payment-context capture where the trigger anchors intent.
        let full_name = if lang.is_slavic() {
            r"\b[А-ЯЁІЇЄҐ][а-яёіїєґ'ʼ\-]+(?:\s+[А-ЯЁІЇЄҐ][а-яёіїєґ'ʼ\-]+){1,3}\b"
        } else {
            r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,3}\b"
        };
        let basic = vec![
            (
                PatternKind::FullName,
                Regex::new(full_name).expect("valid regex"),
            ),
            (
                PatternKind::InitialsSurname,
                Regex::new(&if lang.is_slavic() {
                    r"\b[А-ЯЁІЇЄҐ]\.\s*[А-ЯЁІЇЄҐ]\.\s*[А-ЯЁІЇЄҐ][а-яёіїєґ'ʼ\-]+\b".to_string()
                } else {
                    r"\b[A-Z]\.\s*[A-Z]\.\s*[A-Z][a-z]+\b".to_string()
                })
                .expect("valid regex"),
            ),
            (
                PatternKind::SurnameInitials,
                Regex::new(&if lang.is_slavic() {
                    r"\b[А-ЯЁІЇЄҐ][а-яёіїєґ'ʼ\-]+\s+[А-ЯЁІЇЄҐ]\.\s*[А-ЯЁІЇЄҐ]\.".to_string()
                } else {
                    r"\b[A-Z][a-z]+\s+[A-Z]\.\s*[A-Z]\.".to_string()
                })
                .expect("valid regex"),
            ),
            (
                PatternKind::SingleInitialSurname,
                Regex::new(&if lang.is_slavic() {
                    r"\b[А-ЯЁІЇЄҐ]\.\s*[А-ЯЁІЇЄҐ][а-яёіїєґ'ʼ\-]+\b".to_string()
                } else {
                    r"\b[A-Z]\.\s*[A-Z][a-z]+\b".to_string()
                })
                .expect("valid regex"),
            ),
        ];

        let payment = vec![
            Regex::new(&format!(r"(?i:{context}){SEP}(?i:{preps})\b{SEP}({name})"))
                .expect("valid regex"),
            Regex::new(&format!(r"\b(?i:{preps})\b{SEP}({name})")).expect("valid regex"),
            Regex::new(&format!(
                r"(?i:получатель|одержувач|beneficiary|recipient)[:\s,\-]*({name})"
            ))
            .expect("valid regex"),
            Regex::new(&format!(
                r"(?i:на\s+имя|на\s+ім['ʼ]я|on\s+behalf\s+of){SEP}({name})"
            ))
            .expect("valid regex"),
        ];

        let payment_initial = Regex::new(&format!(
            r"(?i:{context}){SEP}(?i:{preps})\b{SEP}{initial}"
        ))
        .expect("valid regex");

        let company = vec![
            Regex::new(&format!(
                r"(?i:{context}){SEP}(?i:{preps})\b{SEP}((?i:{legal}))[\s.]+({COMP_CORE})"
            ))
            .expect("valid regex"),
            Regex::new(&format!(
                r"(?i:{context}){SEP}(?i:{preps})\b{SEP}({COMP_QUOTED})"
            ))
            .expect("valid regex"),
            Regex::new(&format!(
                r"\b(?i:получатель|одержувач|beneficiary|recipient)[:\s,\-]*((?i:{legal}))[\s.]+({COMP_CORE})"
            ))
            .expect("valid regex"),
            Regex::new(&format!(
                r"\b(?i:получатель|одержувач|beneficiary|recipient)[:\s,\-]*({COMP_QUOTED})"
            ))
            .expect("valid regex"),
            Regex::new(&format!(r"\b((?i:{legal}))[\s.]+({COMP_CORE})")).expect("valid regex"),
        ];

        LangPatterns {
            basic,
            payment,
            payment_initial,
            company,
        }
    }
}

/// Regex + dictionary pattern extraction over a shared dictionary store.
pub struct PatternExtractor {
    dict: Arc<Dictionary>,
    ru: LangPatterns,
    uk: LangPatterns,
    en: LangPatterns,
    word: Regex,
}

impl PatternExtractor {
    pub fn new(dict: Arc<Dictionary>) -> Self {
        PatternExtractor {
            dict,
            ru: LangPatterns::build(Lang::Ru),
            uk: LangPatterns::build(Lang::Uk),
            en: LangPatterns::build(Lang::En),
            word: Regex::new(r"[A-Za-zА-Яа-яЁёІіЇїЄєҐґ'ʼ\-]+").expect("valid regex"),
        }
    }

    fn lang_patterns(&self, lang: Lang) -> &LangPatterns {
        match lang {
            Lang::Ru => &self.ru,
            Lang::Uk => &self.uk,
            _ => &self.en,
        }
    }

    /// Extract all pattern families from `text`, deduplicated by
    /// `(lowercased span, kind, language)`.
    pub fn extract(&self, text: &str, lang: Lang) -> Vec<NamePattern> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let lang = if lang == Lang::Other { Lang::En } else { lang };

        let mut patterns = Vec::new();
        self.extract_payment_context(text, lang, &mut patterns);
        self.extract_company_context(text, lang, &mut patterns);
        self.extract_dictionary(text, lang, &mut patterns);
        self.extract_basic(text, lang, &mut patterns);
        self.extract_positional(text, lang, &mut patterns);

        dedup(patterns)
    }

    fn extract_basic(&self, text: &str, lang: Lang, out: &mut Vec<NamePattern>) {
        for (kind, re) in &self.lang_patterns(lang).basic {
            for m in re.find_iter(text) {
                out.push(NamePattern::new(
                    m.as_str().to_string(),
                    *kind,
                    lang,
                    0.8,
                    "regex",
                ));
            }
        }
    }

    fn extract_payment_context(&self, text: &str, lang: Lang, out: &mut Vec<NamePattern>) {
        let lp = self.lang_patterns(lang);
        for re in &lp.payment {
            for caps in re.captures_iter(text) {
                let Some(raw) = caps.get(1) else { continue };
                let span = self.trim_boundaries(raw.as_str(), lang);
                if self.plausible_name_span(&span, lang) {
                    out.push(NamePattern::new(
                        span,
                        PatternKind::PaymentContext,
                        lang,
                        0.9,
                        "payment_context",
                    ));
                }
            }
        }
        for caps in lp.payment_initial.captures_iter(text) {
            if let (Some(initial), Some(surname)) = (caps.get(1), caps.get(2)) {
                out.push(NamePattern::new(
                    format!("{}. {}", initial.as_str(), surname.as_str()),
                    PatternKind::PaymentContext,
                    lang,
                    0.9,
                    "payment_context",
                ));
            }
        }
    }

    fn extract_company_context(&self, text: &str, lang: Lang, out: &mut Vec<NamePattern>) {
        for re in &self.lang_patterns(lang).company {
            for caps in re.captures_iter(text) {
                // Company name is the last non-empty group.
                let mut span = None;
                for gi in (1..=caps.len().saturating_sub(1)).rev() {
                    if let Some(m) = caps.get(gi) {
                        if !m.as_str().trim().is_empty() {
                            span = Some(m.as_str());
                            break;
                        }
                    }
                }
                let Some(span) = span else { continue };
                let cleaned = strip_quotes(span.trim());
                if cleaned.chars().count() < 2 {
                    continue;
                }
                // A bare legal marker is not a company name.
                if dicts::all_legal_entities_lower().contains(&cleaned.to_lowercase()) {
                    continue;
                }
                out.push(NamePattern::new(
                    cleaned,
                    PatternKind::CompanyContext,
                    lang,
                    0.85,
                    "company_context",
                ));
            }
        }
    }

    fn extract_dictionary(&self, text: &str, lang: Lang, out: &mut Vec<NamePattern>) {
        for m in self.word.find_iter(text) {
            let word = m.as_str();
            if !word.chars().next().is_some_and(|c| c.is_uppercase()) {
                continue;
            }
            if self.dict.is_dictionary_name(lang, word) {
                out.push(NamePattern::new(
                    word.to_string(),
                    PatternKind::DictionaryName,
                    lang,
                    0.95,
                    "name_dictionary",
                ));
            }
            if self.dict.is_dictionary_surname(lang, word) {
                out.push(NamePattern::new(
                    word.to_string(),
                    PatternKind::DictionarySurname,
                    lang,
                    0.95,
                    "surname_dictionary",
                ));
            }
            // Compound forms checked with punctuation stripped: O'Connor → OConnor
            if word.contains('\'') || word.contains('ʼ') || word.contains('-') {
                let clean: String = word.chars().filter(|c| c.is_alphabetic()).collect();
                if self.dict.is_dictionary_name(lang, &clean) {
                    out.push(NamePattern::new(
                        clean.clone(),
                        PatternKind::DictionaryNameClean,
                        lang,
                        0.9,
                        "name_dictionary_clean",
                    ));
                }
                if self.dict.is_dictionary_surname(lang, &clean) {
                    out.push(NamePattern::new(
                        clean,
                        PatternKind::DictionarySurnameClean,
                        lang,
                        0.9,
                        "surname_dictionary_clean",
                    ));
                }
            }
        }
    }

    fn extract_positional(&self, text: &str, lang: Lang, out: &mut Vec<NamePattern>) {
        let words: Vec<&str> = text.split_whitespace().collect();
        // The 3rd or 4th token of a payment line is often the counterparty.
        for idx in 2..4usize {
            if let Some(word) = words.get(idx) {
                if looks_like_name(word, lang) {
                    out.push(NamePattern::new(
                        (*word).to_string(),
                        PatternKind::PositionBased,
                        lang,
                        0.6,
                        "position_analysis",
                    ));
                }
            }
        }
    }

    /// Strip long legal phrases, then stop words, from both span ends.
    pub(crate) fn trim_boundaries(&self, span: &str, lang: Lang) -> String {
        let mut s = span.trim().to_string();
        // Cyrillic and ASCII lowercase 1:1 in UTF-8, so byte offsets from the
        // lowered copy are valid in the original.
        let lower = s.to_lowercase();
        if let Some(m) = dicts::long_phrase_matcher().find(&lower) {
            if m.start() == 0 {
                s = s[m.end()..].trim_start().to_string();
            }
        }
        let mut tokens: Vec<&str> = self.word.find_iter(&s).map(|m| m.as_str()).collect();
        while tokens.first().is_some_and(|t| self.dict.is_stop(lang, t)) {
            tokens.remove(0);
        }
        while tokens.last().is_some_and(|t| self.dict.is_stop(lang, t)) {
            tokens.pop();
        }
        tokens.join(" ")
    }

    /// Multiword spans need one name-looking token; single tokens must look
    /// like a name themselves.
    fn plausible_name_span(&self, span: &str, lang: Lang) -> bool {
        let tokens: Vec<&str> = self.word.find_iter(span).map(|m| m.as_str()).collect();
        match tokens.len() {
            0 => false,
            1 => looks_like_name(tokens[0], lang),
            _ => looks_like_name(tokens[0], lang) || looks_like_name(tokens[1], lang),
        }
    }
}

/// Capitalized-word test: `^[А-ЯІЇЄ][а-яіїє]+$` for Cyrillic languages,
/// `^[A-Z][a-z]+$` for Latin.
pub(crate) fn looks_like_name(word: &str, lang: Lang) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest: Vec<char> = chars.collect();
    if rest.is_empty() {
        return false;
    }
    if lang.is_slavic() {
        let upper = ('А'..='Я').contains(&first) || "ЁІЇЄҐ".contains(first);
        upper
            && rest
                .iter()
                .all(|c| ('а'..='я').contains(c) || "ёіїєґ'ʼ-".contains(*c))
    } else {
        first.is_ascii_uppercase() && rest.iter().all(|c| c.is_ascii_lowercase())
    }
}

fn strip_quotes(s: &str) -> String {
    s.trim_matches(|c| c == '"' || c == '«' || c == '»' || c == '\'')
        .trim()
        .to_string()
}

fn dedup(patterns: Vec<NamePattern>) -> Vec<NamePattern> {
    let mut seen = std::collections::HashSet::new();
    patterns
        .into_iter()
        .filter(|p| seen.insert((p.span.to_lowercase(), p.kind, p.language)))
        .collect()
}
