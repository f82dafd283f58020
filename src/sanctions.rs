//! Sanctions entity model and bulk loader
//!
//! Reads raw entities from a JSON file (array or one-object-per-line),
//! expands each entity's base names through the pipeline into weighted
//! variant records, embeds the variant texts, and bulk-indexes into the
//! three sanctions schemas. The entity vector is always the first variant's
//! vector. Interruptible: Ctrl-C finishes the current batch and stops.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::elastic::{BulkItem, ElasticClient, SANCTIONS_INDEX, PC_INDEX, VARIANTS_INDEX};
use crate::pipeline::{Pipeline, ProcessOptions};
use crate::variants::WeightedVariant;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {1}: {0}")]
    Parse(#[source] serde_json::Error, String),
    #[error(transparent)]
    Elastic(#[from] crate::elastic::ElasticError),
}

/// Raw entity as it appears in source data files.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntity {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_ru: Option<String>,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub itn: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Variant record as indexed (nested under the entity and flat in the
/// companion index).
#[derive(Debug, Clone, Serialize)]
pub struct VariantDoc {
    pub text: String,
    pub lang: String,
    pub weight: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f32>>,
}

/// Fully processed entity ready for indexing.
#[derive(Debug, Clone, Serialize)]
pub struct EntityDocument {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ru: Option<String>,
    pub entity_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f32>>,
    pub variants: Vec<VariantDoc>,
}

/// Outcome of one loader run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadSummary {
    pub total: usize,
    pub indexed: usize,
    pub failed: usize,
    pub interrupted: bool,
}

pub struct SanctionsLoader {
    pipeline: Arc<Pipeline>,
    es: Arc<ElasticClient>,
    batch_size: usize,
    interrupted: Arc<AtomicBool>,
}

impl SanctionsLoader {
    pub fn new(pipeline: Arc<Pipeline>, es: Arc<ElasticClient>) -> Self {
        SanctionsLoader {
            pipeline,
            es,
            batch_size: 100,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag polled between batches; wire it to the Ctrl-C handler.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    /// Read a JSON array or JSON-lines file of raw entities.
    pub fn read_entities(path: &Path) -> Result<Vec<RawEntity>, LoaderError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoaderError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let trimmed = content.trim_start();
        if trimmed.starts_with('[') {
            serde_json::from_str(&content)
                .map_err(|e| LoaderError::Parse(e, path.display().to_string()))
        } else {
            content
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(|l| {
                    serde_json::from_str(l)
                        .map_err(|e| LoaderError::Parse(e, path.display().to_string()))
                })
                .collect()
        }
    }

    /// Expand one raw entity into an indexable document: base names through
    /// the pipeline, weighted variants, embeddings, entity vector = first
    /// variant's vector.
    pub fn process_entity(&self, raw: &RawEntity) -> EntityDocument {
        let mut base_names: Vec<&str> = Vec::new();
        for name in [Some(raw.name.as_str()), raw.name_en.as_deref(), raw.name_ru.as_deref()]
            .into_iter()
            .flatten()
        {
            if !name.trim().is_empty() {
                base_names.push(name);
            }
        }
        base_names.extend(raw.aliases.iter().map(String::as_str).filter(|a| !a.trim().is_empty()));

        let opts = ProcessOptions {
            generate_variants: true,
            generate_embeddings: false,
            ..Default::default()
        };

        let mut weighted: Vec<WeightedVariant> = Vec::new();
        let mut seen = std::collections::HashSet::new();
        for base in &base_names {
            let processed = self.pipeline.process(base, &opts);
            let (normalized, lang) = if processed.success {
                (processed.normalized.clone(), processed.language)
            } else {
                (base.to_string(), processed.language)
            };
            for record in
                self.pipeline
                    .weighted_variants(&normalized, &processed.variants, lang)
            {
                if seen.insert(record.text.to_lowercase()) {
                    weighted.push(record);
                }
            }
        }
        if weighted.is_empty() {
            weighted.push(WeightedVariant {
                text: raw.name.clone(),
                lang: "other".to_string(),
                weight: 1.0,
            });
        }

        let mut variants: Vec<VariantDoc> = weighted
            .into_iter()
            .map(|w| VariantDoc {
                text: w.text,
                lang: w.lang,
                weight: w.weight,
                vector: None,
            })
            .collect();

        // One embedding batch per entity; a failure leaves vectors absent
        // and the entity still indexable for lexical search.
        if self.pipeline.has_embedder() {
            let texts: Vec<String> = variants.iter().map(|v| v.text.clone()).collect();
            match self.embed_all(&texts) {
                Some(vectors) if vectors.len() == variants.len() => {
                    for (variant, vector) in variants.iter_mut().zip(vectors) {
                        variant.vector = Some(vector);
                    }
                }
                _ => tracing::warn!(name = %raw.name, "variant embedding failed, indexing without vectors"),
            }
        }

        let vector = variants.first().and_then(|v| v.vector.clone());
        let id = raw
            .id
            .clone()
            .unwrap_or_else(|| fingerprint_id(&raw.name, raw.source.as_deref()));

        EntityDocument {
            id,
            name: raw.name.clone(),
            name_en: raw.name_en.clone(),
            name_ru: raw.name_ru.clone(),
            entity_type: raw
                .entity_type
                .clone()
                .unwrap_or_else(|| "person".to_string()),
            birthdate: raw.birthdate.clone(),
            itn: raw.itn.clone(),
            status: raw.status.clone(),
            source: raw.source.clone(),
            vector,
            variants,
        }
    }

    fn embed_all(&self, texts: &[String]) -> Option<Vec<Vec<f32>>> {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        self.pipeline
            .embed_texts(&refs)
            .map(|embeddings| embeddings.into_iter().map(|e| e.into_inner()).collect())
    }

    /// Create the three indexes when missing.
    pub async fn ensure_indices(&self) -> Result<(), LoaderError> {
        for (name, mapping) in [
            (SANCTIONS_INDEX, crate::elastic::sanctions_mapping()),
            (VARIANTS_INDEX, crate::elastic::variants_mapping()),
            (PC_INDEX, crate::elastic::parent_child_mapping()),
        ] {
            if !self.es.index_exists(name).await? {
                self.es.create_index(name, &mapping).await?;
            }
        }
        Ok(())
    }

    /// Load a file of entities end to end.
    pub async fn run(&self, path: &Path) -> Result<LoadSummary, LoaderError> {
        let entities = Self::read_entities(path)?;
        self.ensure_indices().await?;

        let mut summary = LoadSummary {
            total: entities.len(),
            ..Default::default()
        };

        let bar = ProgressBar::new(entities.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .expect("valid progress template"),
        );

        for batch in entities.chunks(self.batch_size) {
            if self.interrupted.load(Ordering::SeqCst) {
                summary.interrupted = true;
                break;
            }

            let mut entity_items = Vec::new();
            let mut variant_items = Vec::new();
            let mut pc_items = Vec::new();
            for raw in batch {
                let doc = self.process_entity(raw);
                collect_bulk_items(&doc, &mut entity_items, &mut variant_items, &mut pc_items);
            }

            match self.index_batch(&entity_items, &variant_items, &pc_items).await {
                Ok(()) => summary.indexed += batch.len(),
                Err(e) => {
                    tracing::error!(error = %e, "batch indexing failed");
                    summary.failed += batch.len();
                }
            }
            bar.inc(batch.len() as u64);
        }
        bar.finish_and_clear();

        if summary.interrupted {
            println!("{}", "Interrupted; partial load indexed.".yellow());
        } else {
            println!(
                "{} {} entities indexed, {} failed",
                "Done:".green(),
                summary.indexed,
                summary.failed
            );
        }
        Ok(summary)
    }

    async fn index_batch(
        &self,
        entities: &[BulkItem],
        variants: &[BulkItem],
        pc: &[BulkItem],
    ) -> Result<(), LoaderError> {
        self.es.bulk(SANCTIONS_INDEX, entities).await?;
        // Companion indexes are best-effort: lexical screening works off the
        // primary index alone.
        if let Err(e) = self.es.bulk(VARIANTS_INDEX, variants).await {
            tracing::warn!(error = %e, "variants companion indexing failed");
        }
        if let Err(e) = self.es.bulk(PC_INDEX, pc).await {
            tracing::warn!(error = %e, "parent-child indexing failed");
        }
        Ok(())
    }
}

/// Deterministic id for entities that arrive without one.
fn fingerprint_id(name: &str, source: Option<&str>) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(name.as_bytes());
    if let Some(source) = source {
        hasher.update(source.as_bytes());
    }
    hasher.finalize().to_hex()[..16].to_string()
}

/// Expand one document into bulk items for all three indexes.
fn collect_bulk_items(
    doc: &EntityDocument,
    entities: &mut Vec<BulkItem>,
    variants: &mut Vec<BulkItem>,
    pc: &mut Vec<BulkItem>,
) {
    let value = serde_json::to_value(doc).unwrap_or_else(|_| json!({}));
    entities.push(BulkItem::with_id(doc.id.clone(), value));

    for (i, variant) in doc.variants.iter().enumerate() {
        let mut flat = json!({
            "parent_id": doc.id,
            "text": variant.text,
            "lang": variant.lang,
            "weight": variant.weight,
        });
        if let Some(vector) = &variant.vector {
            flat["vector"] = json!(vector);
        }
        variants.push(BulkItem::with_id(format!("{}_v{}", doc.id, i), flat));
    }

    let mut parent = json!({
        "doc_rel": "entity",
        "name": doc.name,
        "name_en": doc.name_en,
        "name_ru": doc.name_ru,
        "entity_type": doc.entity_type,
        "source": doc.source,
    });
    if let Some(vector) = &doc.vector {
        parent["vector"] = json!(vector);
    }
    pc.push(BulkItem::with_routing(doc.id.clone(), doc.id.clone(), parent));

    for (i, variant) in doc.variants.iter().enumerate() {
        let mut child = json!({
            "doc_rel": {"name": "variant", "parent": doc.id},
            "text": variant.text,
            "lang": variant.lang,
            "weight": variant.weight,
        });
        if let Some(vector) = &variant.vector {
            child["vector"] = json!(vector);
        }
        pc.push(BulkItem::with_routing(
            format!("{}_c{}", doc.id, i),
            doc.id.clone(),
            child,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn loader() -> SanctionsLoader {
        let config = Config::default();
        let pipeline = Arc::new(Pipeline::new(&config));
        let es = Arc::new(
            ElasticClient::new(&config.elasticsearch, std::time::Duration::from_secs(5)).unwrap(),
        );
        SanctionsLoader::new(pipeline, es)
    }

    fn entity(name: &str) -> RawEntity {
        RawEntity {
            id: Some("e1".to_string()),
            name: name.to_string(),
            name_en: None,
            name_ru: None,
            entity_type: Some("person".to_string()),
            birthdate: None,
            itn: None,
            status: None,
            source: Some("test".to_string()),
            aliases: Vec::new(),
        }
    }

    #[test]
    fn test_process_entity_primary_variant_first() {
        let l = loader();
        let doc = l.process_entity(&entity("Петро Порошенко"));
        assert!(!doc.variants.is_empty());
        assert!((doc.variants[0].weight - 1.0).abs() < f32::EPSILON);
        assert_eq!(doc.variants[0].text, "Петро Порошенко");
        assert_eq!(doc.entity_type, "person");
    }

    #[test]
    fn test_process_entity_includes_latin_variant() {
        let l = loader();
        let doc = l.process_entity(&entity("Петро Порошенко"));
        assert!(
            doc.variants.iter().any(|v| v.lang.ends_with("-Latn")),
            "variants: {:?}",
            doc.variants.iter().map(|v| &v.text).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_missing_id_is_deterministic() {
        let mut raw = entity("Петро Порошенко");
        raw.id = None;
        let l = loader();
        let a = l.process_entity(&raw);
        let b = l.process_entity(&raw);
        assert_eq!(a.id, b.id);
        assert_eq!(a.id.len(), 16);
    }

    #[test]
    fn test_read_entities_json_array() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("entities.json");
        std::fs::write(
            &path,
            r#"[{"id": "1", "name": "Петро Порошенко"}, {"name": "Ромашка", "entity_type": "company"}]"#,
        )
        .unwrap();
        let entities = SanctionsLoader::read_entities(&path).unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name, "Петро Порошенко");
    }

    #[test]
    fn test_read_entities_jsonl() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("entities.jsonl");
        std::fs::write(
            &path,
            "{\"name\": \"Петро Порошенко\"}\n\n{\"name\": \"Іван Франко\"}\n",
        )
        .unwrap();
        let entities = SanctionsLoader::read_entities(&path).unwrap();
        assert_eq!(entities.len(), 2);
    }

    #[test]
    fn test_collect_bulk_items_routing() {
        let l = loader();
        let doc = l.process_entity(&entity("Петро Порошенко"));
        let mut entities = Vec::new();
        let mut variants = Vec::new();
        let mut pc = Vec::new();
        collect_bulk_items(&doc, &mut entities, &mut variants, &mut pc);

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].id.as_deref(), Some("e1"));
        assert_eq!(variants.len(), doc.variants.len());
        assert!(variants.iter().all(|v| v.doc["parent_id"] == json!("e1")));
        // parent + one child per variant, all routed to the parent
        assert_eq!(pc.len(), 1 + doc.variants.len());
        assert!(pc.iter().all(|item| item.routing.as_deref() == Some("e1")));
    }
}
