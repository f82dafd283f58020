//! Health check — service liveness snapshot
//!
//! Composes the individual probes (Elasticsearch liveness, embedding model
//! availability, per-index existence) into a single report. Only the
//! cluster ping gates the overall status; every other probe degrades into a
//! warning.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::elastic::{ElasticClient, SANCTIONS_INDEX, PC_INDEX, VARIANTS_INDEX};
use crate::pipeline::Pipeline;

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub elasticsearch: bool,
    pub embedder: bool,
    /// Existence flag per screening index.
    pub indices: BTreeMap<String, bool>,
    /// Non-fatal warnings from degraded probes.
    pub warnings: Vec<String>,
}

/// Probe everything the screening path depends on.
pub async fn health_check(
    es: &ElasticClient,
    pipeline: &Pipeline,
    payments_index: &str,
) -> HealthReport {
    let elasticsearch = es.ping().await;
    let embedder = pipeline.has_embedder();
    let mut warnings = Vec::new();
    let mut indices = BTreeMap::new();

    if elasticsearch {
        for name in [SANCTIONS_INDEX, VARIANTS_INDEX, PC_INDEX, payments_index] {
            match es.index_exists(name).await {
                Ok(exists) => {
                    indices.insert(name.to_string(), exists);
                }
                Err(e) => {
                    tracing::warn!(index = name, error = %e, "index existence probe failed");
                    warnings.push(format!("index probe failed for {name}: {e}"));
                    indices.insert(name.to_string(), false);
                }
            }
        }
    } else {
        warnings.push("elasticsearch unreachable".to_string());
    }

    if !embedder {
        warnings.push("embedding model not loaded; vector search disabled".to_string());
    }

    let status = match (elasticsearch, embedder) {
        (true, true) => "healthy",
        (true, false) => "degraded",
        (false, _) => "unhealthy",
    };

    HealthReport {
        status,
        elasticsearch,
        embedder,
        indices,
        warnings,
    }
}
