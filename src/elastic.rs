//! Elasticsearch client
//!
//! Thin JSON-over-HTTP wrapper: index management for the three sanctions
//! schemas, document and bulk indexing, kNN/lexical search, and liveness.
//! Errors carry the response body; callers decide whether a failed call is
//! fatal (it rarely is — retrieval degrades to partial results).

use reqwest::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::ElasticConfig;
use crate::VECTOR_DIM;

/// Primary entity index.
pub const SANCTIONS_INDEX: &str = "sanctions";
/// Companion per-variant index.
pub const VARIANTS_INDEX: &str = "sanctions_variants";
/// Parent-child join index (entity → variant, routing = parent id).
pub const PC_INDEX: &str = "sanctions_pc";

#[derive(Error, Debug)]
pub enum ElasticError {
    #[error("Elasticsearch request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Elasticsearch returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Bulk indexing reported errors: {0}")]
    BulkErrors(String),
}

/// One document in a `_bulk` request.
#[derive(Debug, Clone)]
pub struct BulkItem {
    pub id: Option<String>,
    pub routing: Option<String>,
    pub doc: Value,
}

impl BulkItem {
    pub fn new(doc: Value) -> Self {
        BulkItem {
            id: None,
            routing: None,
            doc,
        }
    }

    pub fn with_id(id: impl Into<String>, doc: Value) -> Self {
        BulkItem {
            id: Some(id.into()),
            routing: None,
            doc,
        }
    }

    pub fn with_routing(id: impl Into<String>, routing: impl Into<String>, doc: Value) -> Self {
        BulkItem {
            id: Some(id.into()),
            routing: Some(routing.into()),
            doc,
        }
    }
}

pub struct ElasticClient {
    base_url: String,
    http: reqwest::Client,
    auth: Option<(String, String)>,
}

impl ElasticClient {
    pub fn new(config: &ElasticConfig, timeout: std::time::Duration) -> Result<Self, ElasticError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let auth = match (&config.username, &config.password) {
            (Some(u), Some(p)) => Some((u.clone(), p.clone())),
            _ => None,
        };
        Ok(ElasticClient {
            base_url: config.url(),
            http,
            auth,
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, format!("{}{path}", self.base_url));
        if let Some((user, pass)) = &self.auth {
            req = req.basic_auth(user, Some(pass));
        }
        req
    }

    async fn check(response: reqwest::Response) -> Result<Value, ElasticError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ElasticError::Status { status, body })
        }
    }

    /// Cluster reachable at all.
    pub async fn ping(&self) -> bool {
        match self.request(reqwest::Method::GET, "/").send().await {
            Ok(r) => r.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "Elasticsearch ping failed");
                false
            }
        }
    }

    pub async fn index_exists(&self, name: &str) -> Result<bool, ElasticError> {
        let r = self
            .request(reqwest::Method::HEAD, &format!("/{name}"))
            .send()
            .await?;
        Ok(r.status().is_success())
    }

    pub async fn create_index(&self, name: &str, mapping: &Value) -> Result<(), ElasticError> {
        let r = self
            .request(reqwest::Method::PUT, &format!("/{name}"))
            .json(mapping)
            .send()
            .await?;
        Self::check(r).await?;
        tracing::info!(index = name, "Created index");
        Ok(())
    }

    /// Delete an index; `Ok(false)` when it did not exist.
    pub async fn delete_index(&self, name: &str) -> Result<bool, ElasticError> {
        let r = self
            .request(reqwest::Method::DELETE, &format!("/{name}"))
            .send()
            .await?;
        if r.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        Self::check(r).await?;
        Ok(true)
    }

    pub async fn list_indices(&self) -> Result<Vec<String>, ElasticError> {
        let r = self
            .request(reqwest::Method::GET, "/_cat/indices?format=json")
            .send()
            .await?;
        let value = Self::check(r).await?;
        Ok(value
            .as_array()
            .map(|arr| {
                arr.iter()
                    .filter_map(|i| i.get("index").and_then(Value::as_str))
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default())
    }

    pub async fn index_document(
        &self,
        index: &str,
        document: &Value,
        doc_id: Option<&str>,
        routing: Option<&str>,
    ) -> Result<Value, ElasticError> {
        let mut path = match doc_id {
            Some(id) => format!("/{index}/_doc/{id}"),
            None => format!("/{index}/_doc"),
        };
        if let Some(routing) = routing {
            path.push_str(&format!("?routing={routing}"));
        }
        let method = if doc_id.is_some() {
            reqwest::Method::PUT
        } else {
            reqwest::Method::POST
        };
        let r = self.request(method, &path).json(document).send().await?;
        Self::check(r).await
    }

    /// Bulk-index documents; returns the number accepted.
    pub async fn bulk(&self, index: &str, items: &[BulkItem]) -> Result<usize, ElasticError> {
        if items.is_empty() {
            return Ok(0);
        }
        let mut body = String::new();
        for item in items {
            let mut action = json!({"_index": index});
            if let Some(id) = &item.id {
                action["_id"] = json!(id);
            }
            if let Some(routing) = &item.routing {
                action["routing"] = json!(routing);
            }
            body.push_str(&json!({"index": action}).to_string());
            body.push('\n');
            body.push_str(&item.doc.to_string());
            body.push('\n');
        }
        let r = self
            .request(reqwest::Method::POST, "/_bulk")
            .header("Content-Type", "application/x-ndjson")
            .body(body)
            .send()
            .await?;
        let value = Self::check(r).await?;
        if value.get("errors").and_then(Value::as_bool).unwrap_or(false) {
            return Err(ElasticError::BulkErrors(
                value
                    .get("items")
                    .map(|i| i.to_string())
                    .unwrap_or_default(),
            ));
        }
        Ok(items.len())
    }

    pub async fn get_document(
        &self,
        index: &str,
        id: &str,
        routing: Option<&str>,
    ) -> Result<Option<Value>, ElasticError> {
        let mut path = format!("/{index}/_doc/{id}");
        if let Some(routing) = routing {
            path.push_str(&format!("?routing={routing}"));
        }
        let r = self.request(reqwest::Method::GET, &path).send().await?;
        if r.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::check(r).await?))
    }

    /// Run a search body against an index.
    pub async fn search(
        &self,
        index: &str,
        body: &Value,
        size: usize,
    ) -> Result<Value, ElasticError> {
        let r = self
            .request(
                reqwest::Method::POST,
                &format!("/{index}/_search?size={size}"),
            )
            .json(body)
            .send()
            .await?;
        Self::check(r).await
    }

    pub async fn refresh(&self, index: &str) -> Result<(), ElasticError> {
        let r = self
            .request(reqwest::Method::POST, &format!("/{index}/_refresh"))
            .send()
            .await?;
        Self::check(r).await?;
        Ok(())
    }
}

/// Mapping for the primary `sanctions` index: entity fields, a cosine
/// dense-vector, and nested per-variant vectors.
pub fn sanctions_mapping() -> Value {
    json!({
        "mappings": {
            "properties": {
                "id": {"type": "keyword"},
                "name": {"type": "text", "analyzer": "standard"},
                "name_en": {"type": "text", "analyzer": "standard"},
                "name_ru": {"type": "text", "analyzer": "standard"},
                "entity_type": {"type": "keyword"},
                "birthdate": {"type": "date"},
                "itn": {"type": "keyword"},
                "status": {"type": "keyword"},
                "source": {"type": "keyword"},
                "vector": {
                    "type": "dense_vector",
                    "dims": VECTOR_DIM,
                    "index": true,
                    "similarity": "cosine"
                },
                "variants": {
                    "type": "nested",
                    "properties": {
                        "text": {"type": "text", "analyzer": "standard"},
                        "lang": {"type": "keyword"},
                        "weight": {"type": "float"},
                        "vector": {
                            "type": "dense_vector",
                            "dims": VECTOR_DIM,
                            "index": true,
                            "similarity": "cosine"
                        }
                    }
                }
            }
        },
        "settings": {"number_of_shards": 1, "number_of_replicas": 0}
    })
}

/// Mapping for the flat per-variant companion index.
pub fn variants_mapping() -> Value {
    json!({
        "mappings": {
            "properties": {
                "parent_id": {"type": "keyword"},
                "text": {"type": "text", "analyzer": "standard"},
                "lang": {"type": "keyword"},
                "weight": {"type": "float"},
                "vector": {
                    "type": "dense_vector",
                    "dims": VECTOR_DIM,
                    "index": true,
                    "similarity": "cosine"
                }
            }
        },
        "settings": {"number_of_shards": 1, "number_of_replicas": 0}
    })
}

/// Mapping for the parent-child join index (`entity` → `variant`).
pub fn parent_child_mapping() -> Value {
    json!({
        "mappings": {
            "properties": {
                "doc_rel": {"type": "join", "relations": {"entity": "variant"}},
                "name": {"type": "text", "analyzer": "standard"},
                "name_en": {"type": "text", "analyzer": "standard"},
                "name_ru": {"type": "text", "analyzer": "standard"},
                "entity_type": {"type": "keyword"},
                "source": {"type": "keyword"},
                "vector": {
                    "type": "dense_vector",
                    "dims": VECTOR_DIM,
                    "index": true,
                    "similarity": "cosine"
                },
                "text": {"type": "text", "analyzer": "standard"},
                "lang": {"type": "keyword"},
                "weight": {"type": "float"}
            }
        },
        "settings": {"number_of_shards": 1, "number_of_replicas": 0}
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mappings_carry_vector_dim() {
        for mapping in [sanctions_mapping(), variants_mapping(), parent_child_mapping()] {
            let s = mapping.to_string();
            assert!(s.contains(&format!("\"dims\":{VECTOR_DIM}")));
            assert!(s.contains("cosine"));
        }
    }

    #[test]
    fn test_parent_child_join_relation() {
        let m = parent_child_mapping();
        assert_eq!(
            m["mappings"]["properties"]["doc_rel"]["relations"]["entity"],
            json!("variant")
        );
    }
}
