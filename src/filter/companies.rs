//! Company signal detection: legal-entity markers, quoted names, and
//! organizational context words.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::filter::SignalGroup;

static LEGAL_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:ООО|ЗАО|ПАО|ОАО|АО|ИП|ТОВ|ПП|АТ|ПрАТ|ПАТ|ФОП|КП|ДП|LLC|Ltd|Inc|Corp|GmbH|PLC|LLP)\b")
        .expect("valid regex")
});
static QUOTED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"\n]{2,60}"|«[^»\n]{2,60}»"#).expect("valid regex"));
static ORG_CONTEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:товариство|общество|компан[ия]я|підприємство|предприятие|корпорац[ії]я|company|corporation|enterprise|bank|банк)\b")
        .expect("valid regex")
});

#[derive(Default)]
pub struct CompanyDetector;

impl CompanyDetector {
    pub fn new() -> Self {
        CompanyDetector
    }

    pub fn detect(&self, text: &str) -> SignalGroup {
        let mut group = SignalGroup::default();

        let markers = LEGAL_MARKER.find_iter(text).count();
        group.add(markers, 0.5, 0.9, "legal_entity_marker");

        let quoted = QUOTED_NAME.find_iter(text).count();
        group.add(quoted, 0.4, 0.8, "quoted_name");

        let context = ORG_CONTEXT.find_iter(text).count();
        group.add(context, 0.3, 0.6, "org_context");

        group.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_marker_and_quotes() {
        let g = CompanyDetector::new().detect("Платеж для ООО \"Ромашка\"");
        assert!(g.confidence >= 0.5);
        assert!(g.signals.iter().any(|s| *s == "legal_entity_marker"));
        assert!(g.signals.iter().any(|s| *s == "quoted_name"));
    }

    #[test]
    fn test_ukrainian_marker() {
        let g = CompanyDetector::new().detect("переказ ТОВ «Світанок»");
        assert!(g.confidence >= 0.5);
    }

    #[test]
    fn test_plain_person_no_company() {
        let g = CompanyDetector::new().detect("Оплата від Петра Порошенка");
        assert_eq!(g.confidence, 0.0);
    }
}
