//! Hybrid retrieval coordination
//!
//! Composes four retrieval legs over Elasticsearch — entity-vector kNN,
//! per-variant kNN resolved to parents, parent-child kNN with routing, and a
//! lexical multi-match with phrase boosts — then fuses scores per parent id:
//! `0.7 · max(vector) + 0.3 · max(text)` when both sides scored, otherwise
//! the max. One failed leg never fails the request; results degrade to
//! whatever the remaining legs returned.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::elastic::{ElasticClient, SANCTIONS_INDEX, PC_INDEX, VARIANTS_INDEX};
use crate::language::Lang;
use crate::pipeline::{Pipeline, ProcessOptions};

/// Which corpus to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IndexType {
    Payments,
    Sanctions,
    #[default]
    Both,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    #[serde(default)]
    pub index_type: IndexType,
}

fn default_limit() -> usize {
    10
}

fn default_threshold() -> f32 {
    0.7
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        SearchRequest {
            query: query.into(),
            limit: default_limit(),
            threshold: default_threshold(),
            index_type: IndexType::Both,
        }
    }
}

/// One fused result.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub score: f32,
    pub source: Value,
    pub index: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub elasticsearch_available: bool,
    pub ai_processing_available: bool,
    pub search_type: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub normalized_query: String,
    pub language: Lang,
    pub embeddings_length: usize,
    pub results: Vec<SearchHit>,
    pub total: usize,
    pub processing_time: f64,
    pub server_info: ServerInfo,
}

/// How a raw hit scored, for fusion purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScoreKind {
    Vector,
    Text,
}

#[derive(Debug, Clone)]
pub(crate) struct RawHit {
    pub id: String,
    pub score: f32,
    pub source: Value,
    pub index: String,
    pub kind: ScoreKind,
}

pub struct HybridSearcher {
    es: Arc<ElasticClient>,
    pipeline: Arc<Pipeline>,
    payments_index: String,
}

impl HybridSearcher {
    pub fn new(es: Arc<ElasticClient>, pipeline: Arc<Pipeline>, payments_index: String) -> Self {
        HybridSearcher {
            es,
            pipeline,
            payments_index,
        }
    }

    /// Run the full hybrid search for one query.
    pub async fn search(&self, request: &SearchRequest) -> SearchResponse {
        let started = Instant::now();
        let limit = request.limit.clamp(1, 100);

        // Pipeline first: normalized form + query vector.
        let processed = self.pipeline.process(
            &request.query,
            &ProcessOptions {
                generate_variants: true,
                generate_embeddings: true,
                ..Default::default()
            },
        );
        let normalized_query = if processed.success && !processed.normalized.is_empty() {
            processed.normalized.clone()
        } else {
            request.query.clone()
        };
        let query_vector: Option<Vec<f32>> = processed
            .embeddings
            .as_ref()
            .and_then(|e| e.first())
            .cloned();

        let mut raw: Vec<RawHit> = Vec::new();
        let sanctions_wanted =
            matches!(request.index_type, IndexType::Sanctions | IndexType::Both);
        let payments_wanted =
            matches!(request.index_type, IndexType::Payments | IndexType::Both);

        if let Some(vector) = &query_vector {
            if sanctions_wanted {
                self.knn_entities(vector, limit, request.threshold, &mut raw)
                    .await;
                self.knn_variants(vector, limit, &mut raw).await;
                self.knn_parent_child(vector, limit, &mut raw).await;
            }
            if payments_wanted {
                self.knn_payments(vector, limit, request.threshold, &mut raw)
                    .await;
            }
        }

        // Lexical leg always runs; it catches entities whose variants never
        // made it into a vector.
        let text_body = lexical_query(&normalized_query);
        if sanctions_wanted {
            self.lexical(SANCTIONS_INDEX, &text_body, limit, &mut raw).await;
            self.lexical_variants(&text_body, limit, &mut raw).await;
        }
        if payments_wanted {
            self.lexical(&self.payments_index, &text_body, limit, &mut raw)
                .await;
        }

        let results = fuse(raw, limit);

        SearchResponse {
            success: true,
            query: request.query.clone(),
            normalized_query,
            language: processed.language,
            embeddings_length: query_vector.as_ref().map(Vec::len).unwrap_or(0),
            total: results.len(),
            results,
            processing_time: started.elapsed().as_secs_f64(),
            server_info: ServerInfo {
                elasticsearch_available: true,
                ai_processing_available: self.pipeline.has_embedder(),
                search_type: if query_vector.is_some() {
                    "vector+text"
                } else {
                    "text_only"
                },
            },
        }
    }

    async fn knn_entities(
        &self,
        vector: &[f32],
        limit: usize,
        threshold: f32,
        raw: &mut Vec<RawHit>,
    ) {
        let body = json!({
            "knn": {
                "field": "vector",
                "query_vector": vector,
                "k": limit,
                "num_candidates": num_candidates(limit)
            },
            "min_score": threshold
        });
        match self.es.search(SANCTIONS_INDEX, &body, limit).await {
            Ok(value) => {
                for hit in hits_of(&value) {
                    raw.push(RawHit {
                        id: hit_id(hit),
                        score: hit_score(hit),
                        source: hit["_source"].clone(),
                        index: SANCTIONS_INDEX.to_string(),
                        kind: ScoreKind::Vector,
                    });
                }
            }
            Err(e) => tracing::warn!(error = %e, "entity kNN failed"),
        }
    }

    async fn knn_payments(
        &self,
        vector: &[f32],
        limit: usize,
        threshold: f32,
        raw: &mut Vec<RawHit>,
    ) {
        let body = json!({
            "knn": {
                "field": "vector",
                "query_vector": vector,
                "k": limit,
                "num_candidates": num_candidates(limit)
            },
            "min_score": threshold
        });
        match self.es.search(&self.payments_index, &body, limit).await {
            Ok(value) => {
                for hit in hits_of(&value) {
                    raw.push(RawHit {
                        id: hit_id(hit),
                        score: hit_score(hit),
                        source: hit["_source"].clone(),
                        index: self.payments_index.clone(),
                        kind: ScoreKind::Vector,
                    });
                }
            }
            Err(e) => tracing::info!(error = %e, "payments kNN skipped"),
        }
    }

    /// kNN over the flat variant index; every hit resolves to its parent
    /// entity, included once.
    async fn knn_variants(&self, vector: &[f32], limit: usize, raw: &mut Vec<RawHit>) {
        let body = json!({
            "knn": {
                "field": "vector",
                "query_vector": vector,
                "k": limit,
                "num_candidates": num_candidates(limit)
            }
        });
        let value = match self.es.search(VARIANTS_INDEX, &body, limit).await {
            Ok(v) => v,
            Err(e) => {
                tracing::info!(error = %e, "variant kNN skipped");
                return;
            }
        };
        for hit in hits_of(&value) {
            let Some(parent_id) = hit["_source"]["parent_id"].as_str() else {
                continue;
            };
            match self.es.get_document(SANCTIONS_INDEX, parent_id, None).await {
                Ok(Some(parent)) => raw.push(RawHit {
                    id: parent_id.to_string(),
                    score: hit_score(hit),
                    source: parent["_source"].clone(),
                    index: SANCTIONS_INDEX.to_string(),
                    kind: ScoreKind::Vector,
                }),
                Ok(None) => {}
                Err(e) => tracing::info!(parent_id, error = %e, "failed to fetch parent"),
            }
        }
    }

    /// kNN over the parent-child index restricted to child documents;
    /// routing equals the parent id, which is how children resolve back.
    async fn knn_parent_child(&self, vector: &[f32], limit: usize, raw: &mut Vec<RawHit>) {
        let body = json!({
            "knn": {
                "field": "vector",
                "query_vector": vector,
                "k": limit,
                "num_candidates": num_candidates(limit)
            },
            "query": {"term": {"doc_rel": "variant"}}
        });
        let value = match self.es.search(PC_INDEX, &body, limit).await {
            Ok(v) => v,
            Err(e) => {
                tracing::info!(error = %e, "parent-child kNN skipped");
                return;
            }
        };
        for hit in hits_of(&value) {
            let Some(parent_id) = hit["_routing"].as_str() else {
                continue;
            };
            match self
                .es
                .get_document(PC_INDEX, parent_id, Some(parent_id))
                .await
            {
                Ok(Some(parent)) => raw.push(RawHit {
                    id: parent_id.to_string(),
                    score: hit_score(hit),
                    source: parent["_source"].clone(),
                    index: PC_INDEX.to_string(),
                    kind: ScoreKind::Vector,
                }),
                Ok(None) => {}
                Err(e) => tracing::info!(parent_id, error = %e, "failed to fetch pc parent"),
            }
        }
    }

    async fn lexical(&self, index: &str, body: &Value, limit: usize, raw: &mut Vec<RawHit>) {
        match self.es.search(index, body, limit).await {
            Ok(value) => {
                for hit in hits_of(&value) {
                    raw.push(RawHit {
                        id: hit_id(hit),
                        score: hit_score(hit),
                        source: hit["_source"].clone(),
                        index: index.to_string(),
                        kind: ScoreKind::Text,
                    });
                }
            }
            Err(e) => tracing::warn!(index, error = %e, "lexical search failed"),
        }
    }

    async fn lexical_variants(&self, body: &Value, limit: usize, raw: &mut Vec<RawHit>) {
        let value = match self.es.search(VARIANTS_INDEX, body, limit).await {
            Ok(v) => v,
            Err(e) => {
                tracing::info!(error = %e, "lexical variant search skipped");
                return;
            }
        };
        for hit in hits_of(&value) {
            let Some(parent_id) = hit["_source"]["parent_id"].as_str() else {
                continue;
            };
            match self.es.get_document(SANCTIONS_INDEX, parent_id, None).await {
                Ok(Some(parent)) => raw.push(RawHit {
                    id: parent_id.to_string(),
                    score: hit_score(hit),
                    source: parent["_source"].clone(),
                    index: SANCTIONS_INDEX.to_string(),
                    kind: ScoreKind::Text,
                }),
                Ok(None) => {}
                Err(e) => tracing::info!(parent_id, error = %e, "failed to fetch parent"),
            }
        }
    }
}

pub(crate) fn num_candidates(limit: usize) -> usize {
    (limit * 10).max(50)
}

/// Lexical leg: fuzzy multi-match over the top-level name fields, nested
/// match over variant texts, phrase boosts, and a dynamic minimum score
/// that cuts false positives on short queries.
pub(crate) fn lexical_query(normalized_query: &str) -> Value {
    let mut body = json!({
        "query": {
            "bool": {
                "should": [
                    {"multi_match": {
                        "query": normalized_query,
                        "fields": ["name", "name_en", "name_ru", "entity_type", "source"],
                        "fuzziness": "AUTO"
                    }},
                    {"nested": {
                        "path": "variants",
                        "query": {"match": {"variants.text": {"query": normalized_query, "fuzziness": "AUTO"}}},
                        "score_mode": "max",
                        "ignore_unmapped": true
                    }},
                    {"match_phrase": {"name": {"query": normalized_query, "boost": 2.0}}},
                    {"match_phrase": {"name_ru": {"query": normalized_query, "boost": 1.5}}},
                    {"match_phrase": {"name_en": {"query": normalized_query, "boost": 1.5}}},
                    {"nested": {
                        "path": "variants",
                        "query": {"match_phrase": {"variants.text": {"query": normalized_query, "boost": 1.8}}},
                        "score_mode": "max",
                        "ignore_unmapped": true
                    }}
                ]
            }
        }
    });
    if let Some(min_score) = dynamic_min_score(normalized_query) {
        body["min_score"] = json!(min_score);
    }
    body
}

/// Query length ≤ 8 → 1.0; ≤ 12 → 0.5; longer queries run unfiltered.
pub(crate) fn dynamic_min_score(query: &str) -> Option<f32> {
    let len = query.trim().chars().count();
    if len <= 8 {
        Some(1.0)
    } else if len <= 12 {
        Some(0.5)
    } else {
        None
    }
}

/// Fuse raw hits per id: max per score kind, weighted 0.7/0.3 when both
/// sides are present, sorted descending and truncated to `limit`.
pub(crate) fn fuse(raw: Vec<RawHit>, limit: usize) -> Vec<SearchHit> {
    use std::collections::HashMap;

    struct Fused {
        source: Value,
        index: String,
        vector_score: f32,
        text_score: f32,
        order: usize,
    }

    let mut by_id: HashMap<String, Fused> = HashMap::new();
    for (order, hit) in raw.into_iter().enumerate() {
        let entry = by_id.entry(hit.id.clone()).or_insert(Fused {
            source: hit.source,
            index: hit.index,
            vector_score: 0.0,
            text_score: 0.0,
            order,
        });
        match hit.kind {
            ScoreKind::Vector => entry.vector_score = entry.vector_score.max(hit.score),
            ScoreKind::Text => entry.text_score = entry.text_score.max(hit.score),
        }
    }

    let mut fused: Vec<(String, Fused)> = by_id.into_iter().collect();
    // Stable output for equal scores: first-seen order.
    fused.sort_by(|a, b| a.1.order.cmp(&b.1.order));

    let mut results: Vec<SearchHit> = fused
        .into_iter()
        .map(|(id, f)| {
            let score = if f.vector_score > 0.0 && f.text_score > 0.0 {
                0.7 * f.vector_score + 0.3 * f.text_score
            } else {
                f.vector_score.max(f.text_score)
            };
            SearchHit {
                id,
                score,
                source: f.source,
                index: f.index,
            }
        })
        .collect();
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    results.truncate(limit);
    results
}

fn hits_of(value: &Value) -> Vec<&Value> {
    value["hits"]["hits"]
        .as_array()
        .map(|a| a.iter().collect())
        .unwrap_or_default()
}

fn hit_id(hit: &Value) -> String {
    hit["_id"].as_str().unwrap_or_default().to_string()
}

fn hit_score(hit: &Value) -> f32 {
    hit["_score"].as_f64().unwrap_or(0.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, score: f32, kind: ScoreKind) -> RawHit {
        RawHit {
            id: id.to_string(),
            score,
            source: json!({"name": id}),
            index: "sanctions".to_string(),
            kind,
        }
    }

    #[test]
    fn test_fuse_weights_when_both_present() {
        let hits = vec![raw("a", 0.9, ScoreKind::Vector), raw("a", 0.5, ScoreKind::Text)];
        let fused = fuse(hits, 10);
        assert_eq!(fused.len(), 1);
        let expected = 0.7 * 0.9 + 0.3 * 0.5;
        assert!((fused[0].score - expected).abs() < 1e-6);
    }

    #[test]
    fn test_fuse_max_when_single_side() {
        let fused = fuse(vec![raw("a", 0.8, ScoreKind::Vector)], 10);
        assert!((fused[0].score - 0.8).abs() < 1e-6);
        let fused = fuse(vec![raw("b", 0.4, ScoreKind::Text)], 10);
        assert!((fused[0].score - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_fuse_dedups_by_id() {
        let hits = vec![
            raw("a", 0.9, ScoreKind::Vector),
            raw("a", 0.7, ScoreKind::Vector),
            raw("b", 0.6, ScoreKind::Text),
            raw("a", 0.5, ScoreKind::Text),
        ];
        let fused = fuse(hits, 10);
        assert_eq!(fused.len(), 2);
        let ids: Vec<&str> = fused.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(
            ids.iter().collect::<std::collections::HashSet<_>>().len(),
            2
        );
    }

    #[test]
    fn test_fuse_sorted_and_truncated() {
        let hits = vec![
            raw("low", 0.2, ScoreKind::Text),
            raw("high", 0.9, ScoreKind::Vector),
            raw("mid", 0.5, ScoreKind::Vector),
        ];
        let fused = fuse(hits, 2);
        assert_eq!(fused.len(), 2);
        assert_eq!(fused[0].id, "high");
        assert_eq!(fused[1].id, "mid");
    }

    #[test]
    fn test_fusion_bound_property() {
        // final ∈ [0,1] and final ≥ 0.7·max(v,t) for unit-interval scores
        for (v, t) in [(0.3, 0.9), (0.9, 0.3), (1.0, 1.0), (0.01, 0.99)] {
            let fused = fuse(
                vec![raw("x", v, ScoreKind::Vector), raw("x", t, ScoreKind::Text)],
                1,
            );
            let s = fused[0].score;
            assert!((0.0..=1.0).contains(&s));
            assert!(s >= 0.7 * v.max(t) - 1e-6);
        }
    }

    #[test]
    fn test_dynamic_min_score_ladder() {
        assert_eq!(dynamic_min_score("Петро"), Some(1.0)); // 5 chars
        assert_eq!(dynamic_min_score("Порошенко123"), Some(0.5)); // 12 chars
        assert_eq!(dynamic_min_score("Петро Порошенко"), None); // 15 chars
    }

    #[test]
    fn test_num_candidates_floor() {
        assert_eq!(num_candidates(1), 50);
        assert_eq!(num_candidates(10), 100);
    }

    #[test]
    fn test_lexical_query_shape() {
        let q = lexical_query("Петро Порошенко");
        let should = q["query"]["bool"]["should"].as_array().unwrap();
        assert_eq!(should.len(), 6);
        assert!(q.get("min_score").is_none());
        let q = lexical_query("Петро");
        assert_eq!(q["min_score"], json!(1.0));
    }

    #[test]
    fn test_search_request_defaults() {
        let req: SearchRequest = serde_json::from_str(r#"{"query": "test"}"#).unwrap();
        assert_eq!(req.limit, 10);
        assert!((req.threshold - 0.7).abs() < f32::EPSILON);
        assert_eq!(req.index_type, IndexType::Both);
    }
}
