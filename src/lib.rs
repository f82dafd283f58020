//! # payscreen - Payment Sanctions Screening
//!
//! Screens free-form payment descriptions against sanctions lists of
//! persons and organizations. Noisy, multi-script, morphologically rich
//! input is reduced to a stable canonical name plus a set of cross-lingual
//! variants, each paired with a dense embedding; retrieval fuses vector kNN
//! over entity and per-variant indexes with lexical scoring.
//!
//! ## Pipeline
//!
//! language detection → reverse transliteration → Unicode normalization →
//! morphological normalization → pattern extraction → canonicalization →
//! person/company routing → variant expansion → embedding
//!
//! ## Quick Start
//!
//! ```no_run
//! use payscreen::config::Config;
//! use payscreen::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new(&Config::default());
//! let result = pipeline.process_simple("Оплата від Петра Порошенка");
//! assert_eq!(result.normalized, "Петро Порошенко");
//! ```
//!
// Public library API modules
pub mod cache;
pub mod canonical;
pub mod config;
pub mod dicts;
pub mod elastic;
pub mod embedder;
pub mod filter;
pub mod health;
pub mod language;
pub mod morphology;
pub mod patterns;
pub mod pipeline;
pub mod sanctions;
pub mod search;
pub mod translit;
pub mod unicode;
pub mod variants;

#[cfg(feature = "serve")]
pub mod serve;

pub use dicts::{Dictionary, Gender};
pub use embedder::{Embedder, Embedding};
pub use filter::{Decision, SmartFilter};
pub use language::Lang;
pub use pipeline::{Pipeline, ProcessOptions, ProcessingResult};
pub use search::{HybridSearcher, SearchRequest, SearchResponse};

/// Embedding dimension of the reference model (all-MiniLM-L6-v2).
/// Single source of truth — all modules and index mappings import this.
pub const VECTOR_DIM: usize = 384;
