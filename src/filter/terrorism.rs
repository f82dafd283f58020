//! High-risk term detection.
//!
//! Broad, language-mixed lexical heuristics over financing-of-terrorism
//! vocabulary. Scores are advisory inputs to the decision logic only: they
//! can trigger BLOCK/REVIEW thresholds but never contribute to the weighted
//! full-search score, and there is no calibration data behind them.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::filter::SignalGroup;

static HIGH_RISK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:терроризм|тероризм|террорист|терорист|теракт|джихад|jihad|боевик|бойовик|экстремизм|екстремізм|extremis[mt]|terroris[mt]|взрывчатк|вибухівк|explosive|оружие|зброя|weapon|боеприпас|munition)",
    )
    .expect("valid regex")
});

static FINANCING_CONTEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:финансирование|фінансування|financing|funding|сбор средств|збір коштів|donation)\b")
        .expect("valid regex")
});

/// Risk tiers reported alongside the confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrorRisk {
    VeryLow,
    Low,
    Medium,
    High,
    Critical,
}

pub struct TerrorismDetector;

impl TerrorismDetector {
    pub fn new() -> Self {
        TerrorismDetector
    }

    pub fn detect(&self, text: &str) -> (SignalGroup, TerrorRisk) {
        let mut group = SignalGroup::default();

        let terms = HIGH_RISK.find_iter(text).count();
        group.add(terms, 0.4, 1.0, "high_risk_term");

        // Financing context on top of a risk term escalates sharply.
        if terms > 0 && FINANCING_CONTEXT.is_match(text) {
            group.add(1, 0.4, 1.0, "financing_context");
        }

        let group = group.finish();
        let risk = match group.confidence {
            c if c >= 0.8 => TerrorRisk::Critical,
            c if c >= 0.5 => TerrorRisk::High,
            c if c >= 0.3 => TerrorRisk::Medium,
            c if c > 0.0 => TerrorRisk::Low,
            _ => TerrorRisk::VeryLow,
        };
        (group, risk)
    }
}

impl Default for TerrorismDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_payment_no_signal() {
        let (g, risk) = TerrorismDetector::new().detect("Оплата від Петра Порошенка");
        assert_eq!(g.confidence, 0.0);
        assert_eq!(risk, TerrorRisk::VeryLow);
    }

    #[test]
    fn test_single_term_is_low() {
        let (g, _) = TerrorismDetector::new().detect("книга про тероризм");
        assert!(g.confidence > 0.0 && g.confidence < 0.8);
    }

    #[test]
    fn test_financing_context_escalates() {
        let (g, risk) =
            TerrorismDetector::new().detect("финансирование терроризма сбор средств");
        assert!(g.confidence >= 0.8);
        assert_eq!(risk, TerrorRisk::Critical);
    }
}
