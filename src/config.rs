//! Configuration file + environment support
//!
//! Config files are loaded in order (later overrides earlier):
//! 1. `~/.config/payscreen/config.toml` (user defaults)
//! 2. `payscreen.toml` in the working directory (project overrides)
//!
//! Environment variables override both; CLI flags override everything.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// Elasticsearch connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ElasticConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub use_ssl: bool,
}

impl Default for ElasticConfig {
    fn default() -> Self {
        ElasticConfig {
            host: "localhost".to_string(),
            port: 9200,
            username: None,
            password: None,
            use_ssl: false,
        }
    }
}

impl ElasticConfig {
    pub fn url(&self) -> String {
        let protocol = if self.use_ssl { "https" } else { "http" };
        format!("{protocol}://{}:{}", self.host, self.port)
    }
}

/// Embedding model settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VectorConfig {
    pub model_name: String,
    pub dimension: usize,
    pub index_name: String,
}

impl Default for VectorConfig {
    fn default() -> Self {
        VectorConfig {
            model_name: "sentence-transformers/all-MiniLM-L6-v2".to_string(),
            dimension: crate::VECTOR_DIM,
            index_name: "payment_vectors".to_string(),
        }
    }
}

/// Pipeline policy flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Keep the legal-entity abbreviation on normalized company names.
    pub keep_legal_entity_prefix: bool,
    /// Route to the company name when both a person and a company are found.
    pub prefer_company_when_both: bool,
    /// Apply smart-filter routing at all; off means person always wins.
    pub smart_filter_routing: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            keep_legal_entity_prefix: false,
            prefer_company_when_both: true,
            smart_filter_routing: true,
        }
    }
}

/// Caching, concurrency, and timeout knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub cache_size: usize,
    pub cache_ttl_secs: u64,
    /// Bounded concurrency for batch processing.
    pub max_concurrent: usize,
    pub embed_timeout_secs: u64,
    pub search_timeout_secs: u64,
    /// Total per-request budget.
    pub request_budget_secs: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        PerformanceConfig {
            cache_size: 1000,
            cache_ttl_secs: 3600,
            max_concurrent: 10,
            embed_timeout_secs: 5,
            search_timeout_secs: 5,
            request_budget_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub elasticsearch: ElasticConfig,
    pub vector: VectorConfig,
    pub service: ServiceConfig,
    pub performance: PerformanceConfig,
}

impl Config {
    /// Load configuration from user and project config files, then apply
    /// environment overrides.
    pub fn load(project_root: &Path) -> Self {
        let user_config = dirs::config_dir()
            .map(|d| d.join("payscreen/config.toml"))
            .and_then(|p| Self::load_file(&p));

        let project_config = Self::load_file(&project_root.join("payscreen.toml"));

        let mut config = project_config.or(user_config).unwrap_or_default();
        config.apply_env();
        tracing::debug!(
            es = %config.elasticsearch.url(),
            model = %config.vector.model_name,
            dim = config.vector.dimension,
            "Effective config"
        );
        config
    }

    fn load_file(path: &Path) -> Option<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Failed to read config {}: {}", path.display(), e);
                return None;
            }
        };
        match toml::from_str::<Self>(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!("Failed to parse config {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Environment variables win over file values.
    fn apply_env(&mut self) {
        let env = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        if let Some(host) = env("ELASTICSEARCH_HOST") {
            self.elasticsearch.host = host;
        }
        if let Some(port) = env("ELASTICSEARCH_PORT").and_then(|v| v.parse().ok()) {
            self.elasticsearch.port = port;
        }
        if let Some(user) = env("ELASTICSEARCH_USERNAME") {
            self.elasticsearch.username = Some(user);
        }
        if let Some(pass) = env("ELASTICSEARCH_PASSWORD") {
            self.elasticsearch.password = Some(pass);
        }
        if let Some(ssl) = env("ELASTICSEARCH_USE_SSL") {
            self.elasticsearch.use_ssl = matches!(ssl.as_str(), "1" | "true" | "yes");
        }
        if let Some(model) = env("VECTOR_MODEL_NAME") {
            self.vector.model_name = model;
        }
        if let Some(dim) = env("VECTOR_DIMENSION").and_then(|v| v.parse().ok()) {
            self.vector.dimension = dim;
        }
        if let Some(index) = env("VECTOR_INDEX_NAME") {
            self.vector.index_name = index;
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.performance.cache_ttl_secs)
    }

    pub fn embed_timeout(&self) -> Duration {
        Duration::from_secs(self.performance.embed_timeout_secs)
    }

    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.performance.search_timeout_secs)
    }

    pub fn request_budget(&self) -> Duration {
        Duration::from_secs(self.performance.request_budget_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.elasticsearch.url(), "http://localhost:9200");
        assert_eq!(c.vector.dimension, 384);
        assert_eq!(c.performance.max_concurrent, 10);
        assert!(c.service.prefer_company_when_both);
    }

    #[test]
    fn test_load_project_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("payscreen.toml"),
            r#"
[elasticsearch]
host = "es.internal"
port = 9201
use_ssl = true

[performance]
cache_size = 50
"#,
        )
        .unwrap();

        let c = Config::load_file(&dir.path().join("payscreen.toml")).unwrap();
        assert_eq!(c.elasticsearch.url(), "https://es.internal:9201");
        assert_eq!(c.performance.cache_size, 50);
        // untouched sections keep defaults
        assert_eq!(c.vector.dimension, 384);
    }

    #[test]
    fn test_malformed_file_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("payscreen.toml"), "not valid [[[").unwrap();
        assert!(Config::load_file(&dir.path().join("payscreen.toml")).is_none());
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_file(&dir.path().join("nope.toml")).is_none());
    }
}
