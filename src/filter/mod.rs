//! Smart pre-screening filter
//!
//! Collects four signal groups — person names, companies, document
//! identifiers, high-risk terms — and classifies the text into
//! `ALLOW | FULL_SEARCH | REVIEW | BLOCK`. High-risk scores short-circuit at
//! the 0.8 (block) and 0.5 (review) thresholds; everything else is a
//! weighted average over `{names: 0.7, companies: 0.6, documents: 0.8}`
//! against the 0.7 / 0.5 / 0.3 decision ladder.

pub mod companies;
pub mod documents;
pub mod names;
pub mod terrorism;

use std::sync::Arc;
use std::time::Instant;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::dicts::Dictionary;
pub use terrorism::TerrorRisk;

/// Final routing decision for a screened text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Allow,
    FullSearch,
    Review,
    Block,
}

/// Risk tier accompanying a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    Critical,
}

/// Accumulated evidence from one detector.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignalGroup {
    pub confidence: f32,
    pub signals: Vec<&'static str>,
    pub count: usize,
}

impl SignalGroup {
    /// Contribute `min(count · step, cap)` under `label` when count > 0.
    pub(crate) fn add(&mut self, count: usize, step: f32, cap: f32, label: &'static str) {
        if count == 0 {
            return;
        }
        self.confidence += (count as f32 * step).min(cap);
        self.count += count;
        self.signals.push(label);
    }

    pub(crate) fn finish(mut self) -> Self {
        self.confidence = self.confidence.min(1.0);
        self
    }
}

/// Decision with full supporting evidence.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionResult {
    pub decision: Decision,
    pub confidence: f32,
    pub risk_level: RiskLevel,
    pub reasoning: String,
    pub names: SignalGroup,
    pub companies: SignalGroup,
    pub documents: SignalGroup,
    pub high_risk: SignalGroup,
    pub requires_escalation: bool,
    pub processing_time: f64,
}

const TERRORISM_BLOCK: f32 = 0.8;
const TERRORISM_REVIEW: f32 = 0.5;
const FULL_SEARCH_HIGH: f32 = 0.7;
const FULL_SEARCH_MEDIUM: f32 = 0.5;
const MANUAL_REVIEW: f32 = 0.3;

const WEIGHT_NAMES: f32 = 0.7;
const WEIGHT_COMPANIES: f32 = 0.6;
const WEIGHT_DOCUMENTS: f32 = 0.8;

/// Texts excluded from screening outright: digits only, punctuation only,
/// or a bare generic payment word.
static EXCLUSIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d+$").expect("valid regex"),
        Regex::new(r"^[^\w\s]+$").expect("valid regex"),
        Regex::new(r"^(?i:оплата|платеж|платіж|перевод|переказ)$").expect("valid regex"),
    ]
});

pub struct SmartFilter {
    names: names::NameDetector,
    companies: companies::CompanyDetector,
    documents: documents::DocumentDetector,
    terrorism: terrorism::TerrorismDetector,
}

impl SmartFilter {
    pub fn new(dict: Arc<Dictionary>) -> Self {
        SmartFilter {
            names: names::NameDetector::new(dict),
            companies: companies::CompanyDetector::new(),
            documents: documents::DocumentDetector::new(),
            terrorism: terrorism::TerrorismDetector::new(),
        }
    }

    /// Classify `text`. Never fails; an empty or excluded text is allowed.
    pub fn decide(&self, text: &str) -> DecisionResult {
        let start = Instant::now();
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return self.allow("empty text", start);
        }
        if EXCLUSIONS.iter().any(|re| re.is_match(trimmed)) {
            return self.allow("excluded by pattern", start);
        }

        let names = self.names.detect(trimmed);
        let companies = self.companies.detect(trimmed);
        let documents = self.documents.detect(trimmed);
        let (high_risk, _terror_risk) = self.terrorism.detect(trimmed);

        // High-risk short circuit: advisory scores own only these two exits.
        if high_risk.confidence >= TERRORISM_BLOCK {
            return DecisionResult {
                decision: Decision::Block,
                confidence: high_risk.confidence,
                risk_level: RiskLevel::Critical,
                reasoning: format!(
                    "critical high-risk indicators (confidence {:.2})",
                    high_risk.confidence
                ),
                names,
                companies,
                documents,
                high_risk,
                requires_escalation: true,
                processing_time: start.elapsed().as_secs_f64(),
            };
        }
        if high_risk.confidence >= TERRORISM_REVIEW {
            return DecisionResult {
                decision: Decision::Review,
                confidence: high_risk.confidence,
                risk_level: RiskLevel::High,
                reasoning: format!(
                    "suspicious high-risk indicators (confidence {:.2})",
                    high_risk.confidence
                ),
                names,
                companies,
                documents,
                high_risk,
                requires_escalation: true,
                processing_time: start.elapsed().as_secs_f64(),
            };
        }

        // Document identifiers alone name no screenable party.
        if documents.confidence > 0.0
            && names.confidence == 0.0
            && companies.confidence == 0.0
            && high_risk.confidence == 0.0
        {
            let mut result = self.allow("document identifiers only", start);
            result.documents = documents;
            return result;
        }

        let weighted = WEIGHT_NAMES * names.confidence
            + WEIGHT_COMPANIES * companies.confidence
            + WEIGHT_DOCUMENTS * documents.confidence;
        let confidence = weighted / (WEIGHT_NAMES + WEIGHT_COMPANIES + WEIGHT_DOCUMENTS);

        let (decision, reasoning) = if confidence >= FULL_SEARCH_HIGH {
            (
                Decision::FullSearch,
                format!("high signal confidence {confidence:.2}"),
            )
        } else if confidence >= FULL_SEARCH_MEDIUM {
            (
                Decision::FullSearch,
                format!("medium signal confidence {confidence:.2}"),
            )
        } else if confidence >= MANUAL_REVIEW {
            (
                Decision::Review,
                format!("low but present signals, confidence {confidence:.2}"),
            )
        } else {
            (
                Decision::Allow,
                format!("very low signal confidence {confidence:.2}"),
            )
        };

        let risk_level = match confidence {
            c if c >= 0.8 => RiskLevel::High,
            c if c >= 0.6 => RiskLevel::Medium,
            c if c >= 0.3 => RiskLevel::Low,
            _ => RiskLevel::VeryLow,
        };

        let requires_escalation = decision == Decision::Review;
        tracing::debug!(?decision, confidence, "smart filter decision");

        DecisionResult {
            decision,
            confidence,
            risk_level,
            reasoning,
            names,
            companies,
            documents,
            high_risk,
            requires_escalation,
            processing_time: start.elapsed().as_secs_f64(),
        }
    }

    fn allow(&self, reason: &str, start: Instant) -> DecisionResult {
        DecisionResult {
            decision: Decision::Allow,
            confidence: 0.0,
            risk_level: RiskLevel::VeryLow,
            reasoning: reason.to_string(),
            names: SignalGroup::default(),
            companies: SignalGroup::default(),
            documents: SignalGroup::default(),
            high_risk: SignalGroup::default(),
            requires_escalation: false,
            processing_time: start.elapsed().as_secs_f64(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> SmartFilter {
        SmartFilter::new(Arc::new(Dictionary::new()))
    }

    #[test]
    fn test_empty_text_allowed() {
        let r = filter().decide("");
        assert_eq!(r.decision, Decision::Allow);
        assert_eq!(r.confidence, 0.0);
    }

    #[test]
    fn test_digits_only_excluded() {
        let r = filter().decide("1234567890");
        assert_eq!(r.decision, Decision::Allow);
        assert_eq!(r.reasoning, "excluded by pattern");
    }

    #[test]
    fn test_bare_payment_word_excluded() {
        for word in ["оплата", "платеж", "перевод"] {
            let r = filter().decide(word);
            assert_eq!(r.decision, Decision::Allow, "word {word}");
        }
    }

    #[test]
    fn test_full_name_triggers_full_search() {
        let r = filter().decide("Оплата от Петро Порошенко по договору №123");
        assert_eq!(r.decision, Decision::FullSearch);
        assert!(r.confidence >= FULL_SEARCH_MEDIUM);
    }

    #[test]
    fn test_company_signals_detected() {
        let r = filter().decide("Платеж для ООО \"Ромашка\" по счету 5");
        assert!(r.companies.confidence >= 0.5);
        // single-group signals divide by the full weight sum; a lone company
        // marker stays below the review line
        assert_ne!(r.decision, Decision::Block);
    }

    #[test]
    fn test_document_only_text_allowed() {
        let r = filter().decide("ИНН 1234567890 от 01.02.2020");
        assert_eq!(r.decision, Decision::Allow);
        assert_eq!(r.reasoning, "document identifiers only");
        assert!(r.documents.confidence > 0.0);
    }

    #[test]
    fn test_high_risk_blocks() {
        let r = filter().decide("финансирование терроризма сбор средств");
        assert_eq!(r.decision, Decision::Block);
        assert!(r.requires_escalation);
        assert_eq!(r.risk_level, RiskLevel::Critical);
    }

    #[test]
    fn test_weighted_confidence_in_unit_range() {
        for text in [
            "Оплата від Петра Порошенка",
            "ТОВ «Світанок» ІНН 12345678",
            "перевод 500 грн",
        ] {
            let r = filter().decide(text);
            assert!((0.0..=1.0).contains(&r.confidence), "text {text}");
        }
    }
}
