//! Processing pipeline orchestration
//!
//! Sequences the full text-processing chain: cache probe → language
//! detection → reverse transliteration → Unicode normalization →
//! morphological normalization → pattern extraction → canonicalization →
//! person/company routing → variant expansion → embedding. Every stage
//! recovers locally; a request always yields a structured
//! [`ProcessingResult`]. Results are cached by fingerprint with a TTL and
//! evicted LRU-style.
//!
//! The pipeline is reentrant: one instance is shared across request tasks,
//! with the cache and statistics behind their own locks. CPU stages never
//! suspend; the only suspension point here is the embedding call, guarded by
//! the per-request deadline.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::cache::{CacheStats, TtlCache};
use crate::canonical::Canonicalizer;
use crate::config::{Config, ServiceConfig};
use crate::dicts::{self, Dictionary};
use crate::embedder::Embedder;
use crate::filter::{Decision, DecisionResult, SmartFilter};
use crate::language::{self, Lang};
use crate::morphology;
use crate::patterns::{NamePattern, PatternExtractor, PatternKind};
use crate::translit;
use crate::unicode;
use crate::variants::{VariantGenerator, WeightedVariant, MAX_VARIANTS};

/// What kind of party the normalized name denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Person,
    Company,
    Unknown,
}

/// Per-request options.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub generate_variants: bool,
    pub generate_embeddings: bool,
    pub force_reprocess: bool,
    /// Absolute deadline; defaults to start + configured request budget.
    pub deadline: Option<Instant>,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        ProcessOptions {
            generate_variants: true,
            generate_embeddings: false,
            force_reprocess: false,
            deadline: None,
        }
    }
}

/// Pipeline output. `success == false` implies empty `variants`.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingResult {
    pub original: String,
    pub normalized: String,
    pub language: Lang,
    pub language_confidence: f32,
    pub entity_kind: EntityKind,
    pub variants: Vec<String>,
    pub embeddings: Option<Vec<Vec<f32>>>,
    pub processing_time: f64,
    pub success: bool,
    pub errors: Vec<String>,
}

impl ProcessingResult {
    fn failed(original: &str, errors: Vec<String>, started: Instant) -> Self {
        ProcessingResult {
            original: original.to_string(),
            normalized: String::new(),
            language: Lang::Other,
            language_confidence: 0.0,
            entity_kind: EntityKind::Unknown,
            variants: Vec::new(),
            embeddings: None,
            processing_time: started.elapsed().as_secs_f64(),
            success: false,
            errors,
        }
    }
}

/// Running counters, snapshot by copy.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineStats {
    pub total_processed: u64,
    pub successful: u64,
    pub failed: u64,
    pub total_time: f64,
    pub average_time: f64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

/// Stats plus the cache's own counters.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    #[serde(flatten)]
    pub pipeline: PipelineStats,
    pub cache: CacheStats,
}

static FOP_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:фоп|ип|fop|ip)\b\s*(.+)$").expect("valid regex"));

/// Contract/date tails cut off normalized company names.
static DOC_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:по\s+договор[ау]|догов[оі]р[ауі]?|контракт[ауі]?|по\s+счет[уа]|по\s+рахунк[уа]|від\s+\d|от\s+\d)|[№#]")
        .expect("valid regex")
});

pub struct Pipeline {
    dict: Arc<Dictionary>,
    extractor: PatternExtractor,
    canonicalizer: Canonicalizer,
    variants: VariantGenerator,
    filter: SmartFilter,
    embedder: Option<Arc<Embedder>>,
    cache: TtlCache<ProcessingResult>,
    stats: Mutex<PipelineStats>,
    service: ServiceConfig,
    budget: Duration,
    max_concurrent: usize,
}

impl Pipeline {
    /// Build the full pipeline. The dictionary store is constructed once
    /// here and shared read-only with every component.
    pub fn new(config: &Config) -> Self {
        let dict = Arc::new(Dictionary::new());
        let pipeline = Pipeline {
            extractor: PatternExtractor::new(dict.clone()),
            canonicalizer: Canonicalizer::new(dict.clone()),
            variants: VariantGenerator::new(dict.clone()),
            filter: SmartFilter::new(dict.clone()),
            dict,
            embedder: None,
            cache: TtlCache::new(config.performance.cache_size, config.cache_ttl()),
            stats: Mutex::new(PipelineStats::default()),
            service: config.service.clone(),
            budget: config.request_budget(),
            max_concurrent: config.performance.max_concurrent.max(1),
        };
        tracing::info!("Pipeline initialized");
        pipeline
    }

    /// Attach an embedding model. Without one, embedding requests degrade to
    /// `embeddings: None` with a recorded error.
    pub fn with_embedder(mut self, embedder: Arc<Embedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dict
    }

    pub fn has_embedder(&self) -> bool {
        self.embedder.is_some()
    }

    /// Smart-filter classification without running the full pipeline.
    pub fn screen(&self, text: &str) -> DecisionResult {
        self.filter.decide(text)
    }

    /// Process one text through the whole chain.
    pub fn process(&self, text: &str, opts: &ProcessOptions) -> ProcessingResult {
        let started = Instant::now();
        let deadline = opts.deadline.unwrap_or(started + self.budget);

        if text.trim().is_empty() {
            let result =
                ProcessingResult::failed(text, vec!["empty input".to_string()], started);
            self.record(&result);
            return result;
        }

        let cache_key = fingerprint(text, opts.generate_variants, opts.generate_embeddings);
        if !opts.force_reprocess {
            if let Some(mut hit) = self.cache.get(&cache_key) {
                self.stats_mut(|s| s.cache_hits += 1);
                hit.processing_time = started.elapsed().as_secs_f64();
                tracing::debug!(text = %truncate(text, 50), "cache hit");
                return hit;
            }
        }
        self.stats_mut(|s| s.cache_misses += 1);

        // Language detection runs before any rewriting so Cyrillic survives.
        let mut detection = language::detect(text);

        // Romanized Slavic payment text comes back to Cyrillic first.
        let text_for_processing = translit::reverse_transliterate(text);
        if text_for_processing != text {
            detection = language::detect(&text_for_processing);
            tracing::debug!(language = %detection.language, "re-detected after reverse transliteration");
        }
        let mut lang = detection.language;

        let unicode_result = unicode::normalize(&text_for_processing, false);
        let mut errors: Vec<String> = Vec::new();

        let morph = morphology::normalize(&self.dict, &unicode_result.normalized, lang, false);
        errors.extend(morph.errors);
        let mut normalized = morph.normalized.clone();
        let mut entity_kind = EntityKind::Unknown;

        // Person span from payment context, retried once with stop words
        // stripped from the boundaries, then from bare name patterns.
        let person_span = self
            .best_payment_span(&text_for_processing, lang)
            .or_else(|| {
                let stripped = self.extractor.trim_boundaries(&text_for_processing, lang);
                (stripped != text_for_processing)
                    .then(|| self.best_payment_span(&stripped, lang))
                    .flatten()
            })
            .or_else(|| self.best_bare_name_span(&text_for_processing, lang));

        if let Some(span) = &person_span {
            if let Some((canonical, effective_lang)) = self.canonicalize_with_uk_force(span, lang) {
                tracing::debug!(span = %span, canonical = %canonical, "canonicalized person");
                normalized = canonical;
                entity_kind = EntityKind::Person;
                lang = effective_lang;
            }
        }

        // FOP/IP marks a sole proprietor: the tail is a person, never a company.
        if let Some(caps) = FOP_MARKER.captures(&text_for_processing) {
            if let Some(tail) = caps.get(1) {
                if let Some((person, effective_lang)) =
                    self.canonicalize_with_uk_force(tail.as_str(), lang)
                {
                    tracing::debug!(person = %person, "canonicalized FOP/IP person");
                    normalized = person;
                    entity_kind = EntityKind::Person;
                    lang = effective_lang;
                }
            }
        } else if let Some(company_span) = self.best_company_span(&text_for_processing, lang) {
            let company = self.normalize_company_name(&company_span);
            if company.chars().count() > 1 {
                let routed_to_company = if entity_kind == EntityKind::Person
                    && self.service.smart_filter_routing
                {
                    self.service.prefer_company_when_both
                } else {
                    true
                };
                if routed_to_company {
                    tracing::debug!(company = %company, "routed to company");
                    normalized = company;
                    entity_kind = EntityKind::Company;
                }
            }
        }

        if normalized.trim().is_empty() {
            let result = ProcessingResult::failed(
                text,
                push_error(errors, "normalization produced empty text"),
                started,
            );
            self.record(&result);
            return result;
        }

        // Nothing extractable and the pre-filter sees nothing screenable:
        // the request carries no party worth canonicalizing.
        if entity_kind == EntityKind::Unknown
            && self.filter.decide(&text_for_processing).decision == Decision::Allow
        {
            let result = ProcessingResult::failed(
                text,
                push_error(errors, "no screenable entity found"),
                started,
            );
            self.record(&result);
            return result;
        }

        let variants = if opts.generate_variants {
            let mut vs = if normalized.trim().chars().count() > 2 {
                self.variants.generate(&normalized, lang, MAX_VARIANTS)
            } else {
                Vec::new()
            };
            if vs.is_empty() {
                vs.push(normalized.clone());
            }
            vs
        } else {
            Vec::new()
        };

        // Embedding is the one suspension point; respect the deadline and
        // never fail the request over it.
        let mut embeddings = None;
        if opts.generate_embeddings {
            if Instant::now() >= deadline {
                let result = ProcessingResult::failed(
                    text,
                    push_error(errors, "request budget exhausted before embedding"),
                    started,
                );
                self.record(&result);
                // Cancelled work is never cached.
                return result;
            }
            match &self.embedder {
                Some(embedder) => match embedder.embed_one(&normalized) {
                    Ok(embedding) => embeddings = Some(vec![embedding.into_inner()]),
                    Err(e) => {
                        tracing::warn!(error = %e, "embedding generation skipped");
                        errors.push(format!("embedding failed: {e}"));
                    }
                },
                None => errors.push("embedding model not available".to_string()),
            }
        }

        let result = ProcessingResult {
            original: text.to_string(),
            normalized,
            language: lang,
            language_confidence: detection.confidence,
            entity_kind,
            variants,
            embeddings,
            processing_time: started.elapsed().as_secs_f64(),
            success: true,
            errors,
        };

        self.cache.set(cache_key, result.clone());
        self.record(&result);
        result
    }

    /// Process with default options (variants on, embeddings off).
    pub fn process_simple(&self, text: &str) -> ProcessingResult {
        self.process(text, &ProcessOptions::default())
    }

    /// Batch processing with bounded concurrency.
    pub fn process_batch(&self, texts: &[String], opts: &ProcessOptions) -> Vec<ProcessingResult> {
        let mut results = Vec::with_capacity(texts.len());
        for chunk in texts.chunks(self.max_concurrent) {
            let chunk_results: Vec<ProcessingResult> = std::thread::scope(|scope| {
                let handles: Vec<_> = chunk
                    .iter()
                    .map(|text| scope.spawn(move || self.process(text, opts)))
                    .collect();
                handles
                    .into_iter()
                    .map(|h| {
                        h.join().unwrap_or_else(|_| {
                            ProcessingResult::failed(
                                "",
                                vec!["worker panicked".to_string()],
                                Instant::now(),
                            )
                        })
                    })
                    .collect()
            });
            results.extend(chunk_results);
        }
        results
    }

    /// Batch-embed texts; `None` when no model is attached or inference
    /// fails (callers continue without vectors).
    pub fn embed_texts(&self, texts: &[&str]) -> Option<Vec<crate::embedder::Embedding>> {
        let embedder = self.embedder.as_ref()?;
        match embedder.embed_texts(texts) {
            Ok(embeddings) => Some(embeddings),
            Err(e) => {
                tracing::warn!(error = %e, "batch embedding failed");
                None
            }
        }
    }

    /// Weighted index-time variant records for a normalized name.
    pub fn weighted_variants(
        &self,
        normalized: &str,
        variants: &[String],
        lang: Lang,
    ) -> Vec<WeightedVariant> {
        self.variants.weighted_records(normalized, variants, lang)
    }

    pub fn stats(&self) -> StatsSnapshot {
        let pipeline = self
            .stats
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone();
        StatsSnapshot {
            pipeline,
            cache: self.cache.stats(),
        }
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        tracing::info!("cache cleared");
    }

    pub fn reset_stats(&self) {
        *self.stats.lock().unwrap_or_else(|p| p.into_inner()) = PipelineStats::default();
    }

    // ===== internals =====

    fn stats_mut(&self, f: impl FnOnce(&mut PipelineStats)) {
        let mut guard = self.stats.lock().unwrap_or_else(|p| p.into_inner());
        f(&mut guard);
    }

    fn record(&self, result: &ProcessingResult) {
        self.stats_mut(|s| {
            s.total_processed += 1;
            s.total_time += result.processing_time;
            if result.success {
                s.successful += 1;
            } else {
                s.failed += 1;
            }
            if s.total_processed > 0 {
                s.average_time = s.total_time / s.total_processed as f64;
            }
        });
    }

    /// Longest payment-context span, ties broken by confidence. Falls back
    /// to the other Slavic language, as mixed texts often trigger in one
    /// vocabulary and name in the other.
    fn best_payment_span(&self, text: &str, lang: Lang) -> Option<String> {
        let pick = |patterns: Vec<NamePattern>| {
            patterns
                .into_iter()
                .filter(|p| p.kind == PatternKind::PaymentContext)
                .max_by(|a, b| {
                    (a.span.chars().count(), a.confidence)
                        .partial_cmp(&(b.span.chars().count(), b.confidence))
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|p| p.span)
        };
        pick(self.extractor.extract(text, lang)).or_else(|| {
            lang.other_slavic()
                .and_then(|alt| pick(self.extractor.extract(text, alt)))
        })
    }

    /// Bare name-pattern fallback for inputs without payment triggers
    /// (`П. Порошенко`, a raw `Петро Порошенко` query). Accepted only when
    /// the span shows real person evidence: a known given name, an initial
    /// form, or a Ukrainian surname suffix.
    fn best_bare_name_span(&self, text: &str, lang: Lang) -> Option<String> {
        const BARE_KINDS: &[PatternKind] = &[
            PatternKind::SingleInitialSurname,
            PatternKind::InitialsSurname,
            PatternKind::SurnameInitials,
            PatternKind::FullName,
            PatternKind::DictionaryName,
        ];
        self.extractor
            .extract(text, lang)
            .into_iter()
            .filter(|p| BARE_KINDS.contains(&p.kind))
            .filter(|p| self.person_evidence(&p.span))
            .max_by_key(|p| p.span.chars().count())
            .map(|p| p.span)
    }

    fn person_evidence(&self, span: &str) -> bool {
        let mut tokens = span.split_whitespace().peekable();
        let has_initial = tokens
            .peek()
            .is_some_and(|t| t.chars().count() <= 2 && t.ends_with('.'));
        if has_initial {
            return true;
        }
        let mut last = "";
        for token in span.split_whitespace() {
            if self.dict.is_known_given_name(token) {
                return true;
            }
            last = token;
        }
        let last_lower = last.to_lowercase();
        dicts::uk_surname_suffixes()
            .iter()
            .any(|suf| last_lower.ends_with(suf))
    }

    fn best_company_span(&self, text: &str, lang: Lang) -> Option<String> {
        let pick = |patterns: Vec<NamePattern>| {
            patterns
                .into_iter()
                .filter(|p| p.kind == PatternKind::CompanyContext)
                .max_by(|a, b| {
                    (a.span.chars().count(), a.confidence)
                        .partial_cmp(&(b.span.chars().count(), b.confidence))
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|p| p.span)
        };
        pick(self.extractor.extract(text, lang)).or_else(|| {
            lang.other_slavic()
                .and_then(|alt| pick(self.extractor.extract(text, alt)))
        })
    }

    /// Canonicalize, forcing Ukrainian when the surname suffix demands it
    /// even though detection said otherwise. Returns the canonical form and
    /// the effective name language.
    fn canonicalize_with_uk_force(&self, span: &str, lang: Lang) -> Option<(String, Lang)> {
        let last_token = span
            .split_whitespace()
            .last()
            .map(|t| t.to_lowercase())
            .unwrap_or_default();
        let uk_force = dicts::uk_surname_suffixes()
            .iter()
            .any(|suf| last_token.ends_with(suf));
        if uk_force {
            if let Some(canonical) = self.canonicalizer.canonicalize(span, Lang::Uk) {
                return Some((canonical, Lang::Uk));
            }
        }
        self.canonicalizer
            .canonicalize(span, lang)
            .map(|canonical| (canonical, lang))
    }

    /// Drop contract/number tails, enclosing quotes, and (by default) the
    /// legal-entity prefix from a company span.
    fn normalize_company_name(&self, span: &str) -> String {
        let head = match DOC_TAIL.find(span) {
            Some(m) => &span[..m.start()],
            None => span,
        };
        let mut s = head.split_whitespace().collect::<Vec<_>>().join(" ");
        s = s
            .trim_matches(|c| c == '"' || c == '«' || c == '»' || c == '\'')
            .to_string();

        if !self.service.keep_legal_entity_prefix {
            let legal = dicts::all_legal_entities_lower();
            let mut tokens: Vec<&str> = s.split_whitespace().collect();
            while tokens
                .first()
                .is_some_and(|t| legal.contains(&t.trim_matches('.').trim_matches('"').to_lowercase()))
            {
                tokens.remove(0);
            }
            s = tokens.join(" ");
        }

        let lower = s.to_lowercase();
        if let Some(m) = dicts::long_phrase_matcher().find(&lower) {
            if m.start() == 0 {
                s = s[m.end()..].trim_start().to_string();
            }
        }
        s.trim_matches(|c| c == '"' || c == '«' || c == '»' || c == '\'')
            .trim()
            .to_string()
    }
}

/// Cache fingerprint over the inputs that shape the result.
fn fingerprint(text: &str, generate_variants: bool, generate_embeddings: bool) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(text.as_bytes());
    hasher.update(&[generate_variants as u8, generate_embeddings as u8]);
    hasher.finalize().to_hex().to_string()
}

fn push_error(mut errors: Vec<String>, msg: &str) -> Vec<String> {
    errors.push(msg.to_string());
    errors
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> Pipeline {
        Pipeline::new(&Config::default())
    }

    #[test]
    fn test_fingerprint_varies_with_options() {
        let a = fingerprint("text", true, false);
        let b = fingerprint("text", true, true);
        let c = fingerprint("text", true, false);
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_empty_input_fails_without_variants() {
        let p = pipeline();
        let r = p.process_simple("");
        assert!(!r.success);
        assert!(r.variants.is_empty());
        let r = p.process_simple("   \t");
        assert!(!r.success);
    }

    #[test]
    fn test_cache_hit_on_second_call() {
        let p = pipeline();
        let first = p.process_simple("Оплата від Петра Порошенка");
        let second = p.process_simple("Оплата від Петра Порошенка");
        assert_eq!(first.normalized, second.normalized);
        assert_eq!(first.variants, second.variants);
        let stats = p.stats();
        assert_eq!(stats.pipeline.cache_hits, 1);
    }

    #[test]
    fn test_force_reprocess_bypasses_cache() {
        let p = pipeline();
        let _ = p.process_simple("Оплата від Петра");
        let opts = ProcessOptions {
            force_reprocess: true,
            ..Default::default()
        };
        let _ = p.process("Оплата від Петра", &opts);
        assert_eq!(p.stats().pipeline.cache_hits, 0);
    }

    #[test]
    fn test_company_name_normalization() {
        let p = pipeline();
        assert_eq!(
            p.normalize_company_name("ООО \"Ромашка\" по счету 5"),
            "Ромашка"
        );
        assert_eq!(p.normalize_company_name("ТОВ Світанок №7"), "Світанок");
    }

    #[test]
    fn test_company_prefix_kept_when_configured() {
        let mut config = Config::default();
        config.service.keep_legal_entity_prefix = true;
        let p = Pipeline::new(&config);
        assert!(p
            .normalize_company_name("ООО \"Ромашка\"")
            .contains("ООО"));
    }

    #[test]
    fn test_stats_accumulate() {
        let p = pipeline();
        let _ = p.process_simple("Оплата від Петра");
        let _ = p.process_simple("");
        let s = p.stats();
        assert_eq!(s.pipeline.total_processed, 2);
        assert_eq!(s.pipeline.successful, 1);
        assert_eq!(s.pipeline.failed, 1);
        assert!(s.pipeline.average_time >= 0.0);
    }

    #[test]
    fn test_batch_matches_single() {
        let p = pipeline();
        let texts = vec![
            "Оплата від Петра Порошенка".to_string(),
            "Платеж для ООО \"Ромашка\"".to_string(),
        ];
        let batch = p.process_batch(&texts, &ProcessOptions::default());
        assert_eq!(batch.len(), 2);
        assert!(batch.iter().all(|r| r.success));
    }
}
