//! Embedding generation with ort + tokenizers
//!
//! Wraps a sentence-transformer ONNX export as a `text → unit vector`
//! function: tokenize, run the encoder, mean-pool over the attention mask,
//! L2-normalize. Vectors are 384-dimensional and deterministic for a given
//! model snapshot. Single-text lookups go through an LRU cache.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use lru::LruCache;
use ndarray::Array2;
use once_cell::sync::OnceCell;
use ort::ep::ExecutionProvider as OrtExecutionProvider;
use ort::session::Session;
use thiserror::Error;

use crate::VECTOR_DIM;

/// Default model repo; overridable via `VECTOR_MODEL_NAME`.
const MODEL_REPO: &str = "sentence-transformers/all-MiniLM-L6-v2";
const MODEL_FILE: &str = "onnx/model.onnx";
const TOKENIZER_FILE: &str = "tokenizer.json";

// blake3 checksums for model verification (empty = skip validation)
const MODEL_BLAKE3: &str = "";
const TOKENIZER_BLAKE3: &str = "";

#[derive(Error, Debug)]
pub enum EmbedderError {
    #[error("Model not found: {0}")]
    ModelNotFound(String),
    #[error("Tokenizer error: {0}")]
    TokenizerError(String),
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
    #[error("Checksum mismatch for {path}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        path: String,
        expected: String,
        actual: String,
    },
    #[error("Text cannot be empty")]
    EmptyText,
    #[error("HuggingFace Hub error: {0}")]
    HfHubError(String),
}

impl From<ort::Error> for EmbedderError {
    fn from(e: ort::Error) -> Self {
        EmbedderError::InferenceFailed(e.to_string())
    }
}

/// A 384-dimensional L2-normalized embedding vector.
///
/// Cosine similarity reduces to a dot product over these.
#[derive(Debug, Clone)]
pub struct Embedding(Vec<f32>);

impl Embedding {
    pub fn new(data: Vec<f32>) -> Self {
        Self(data)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Hardware execution provider for inference
#[derive(Debug, Clone, Copy)]
pub enum ExecutionProvider {
    /// NVIDIA CUDA (requires CUDA toolkit)
    Cuda { device_id: i32 },
    /// CPU fallback (always available)
    Cpu,
}

impl std::fmt::Display for ExecutionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionProvider::Cuda { device_id } => write!(f, "CUDA (device {})", device_id),
            ExecutionProvider::Cpu => write!(f, "CPU"),
        }
    }
}

/// Name embedder over a sentence-transformer ONNX model.
///
/// Downloads the model from HuggingFace Hub on first use; detects GPU
/// availability and falls back to CPU. The ONNX session is lazy-loaded on
/// the first embedding request.
pub struct Embedder {
    session: OnceCell<Mutex<Session>>,
    tokenizer: OnceCell<tokenizers::Tokenizer>,
    model_path: PathBuf,
    tokenizer_path: PathBuf,
    provider: ExecutionProvider,
    max_length: usize,
    /// LRU cache for single-text embeddings (screening queries repeat).
    query_cache: Mutex<LruCache<String, Embedding>>,
}

impl Embedder {
    /// Create an embedder for the default model, downloading if necessary.
    pub fn new() -> Result<Self, EmbedderError> {
        Self::with_model(MODEL_REPO)
    }

    /// Create an embedder for a specific HuggingFace model repo.
    pub fn with_model(repo: &str) -> Result<Self, EmbedderError> {
        let (model_path, tokenizer_path) = ensure_model(repo)?;
        let provider = select_provider();
        tracing::info!(model = repo, %provider, "Embedder initialized");

        Ok(Self {
            session: OnceCell::new(),
            tokenizer: OnceCell::new(),
            model_path,
            tokenizer_path,
            provider,
            max_length: 256,
            query_cache: Mutex::new(LruCache::new(
                NonZeroUsize::new(256).expect("256 is non-zero"),
            )),
        })
    }

    fn session(&self) -> Result<std::sync::MutexGuard<'_, Session>, EmbedderError> {
        let session = self
            .session
            .get_or_try_init(|| create_session(&self.model_path, self.provider).map(Mutex::new))?;
        Ok(session.lock().unwrap_or_else(|p| p.into_inner()))
    }

    fn tokenizer(&self) -> Result<&tokenizers::Tokenizer, EmbedderError> {
        self.tokenizer.get_or_try_init(|| {
            tokenizers::Tokenizer::from_file(&self.tokenizer_path)
                .map_err(|e| EmbedderError::TokenizerError(e.to_string()))
        })
    }

    pub fn provider(&self) -> ExecutionProvider {
        self.provider
    }

    /// Embed a batch of texts. Empty batch returns an empty vec.
    pub fn embed_texts(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        let owned: Vec<String> = texts.iter().map(|t| t.to_string()).collect();
        self.embed_batch(&owned)
    }

    /// Embed one text with LRU caching.
    pub fn embed_one(&self, text: &str) -> Result<Embedding, EmbedderError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EmbedderError::EmptyText);
        }

        {
            let mut cache = self.query_cache.lock().unwrap_or_else(|p| {
                tracing::debug!("query cache lock poisoned, recovering");
                p.into_inner()
            });
            if let Some(cached) = cache.get(text) {
                return Ok(cached.clone());
            }
        }

        let results = self.embed_batch(&[text.to_string()])?;
        let embedding = results
            .into_iter()
            .next()
            .ok_or_else(|| EmbedderError::InferenceFailed("empty batch result".to_string()))?;

        {
            let mut cache = self.query_cache.lock().unwrap_or_else(|p| p.into_inner());
            cache.put(text.to_string(), embedding.clone());
        }

        Ok(embedding)
    }

    /// Warm up the model with a dummy inference
    pub fn warm(&self) -> Result<(), EmbedderError> {
        let _ = self.embed_one("warmup")?;
        Ok(())
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>, EmbedderError> {
        use ort::value::Tensor;

        let _span = tracing::info_span!("embed_batch", count = texts.len()).entered();

        if texts.is_empty() {
            return Ok(vec![]);
        }

        let encodings = self
            .tokenizer()?
            .encode_batch(texts.to_vec(), true)
            .map_err(|e| EmbedderError::TokenizerError(e.to_string()))?;

        // INT64 inputs for the ONNX graph
        let input_ids: Vec<Vec<i64>> = encodings
            .iter()
            .map(|e| e.get_ids().iter().map(|&id| id as i64).collect())
            .collect();
        let attention_mask: Vec<Vec<i64>> = encodings
            .iter()
            .map(|e| e.get_attention_mask().iter().map(|&m| m as i64).collect())
            .collect();

        let max_len = input_ids
            .iter()
            .map(|v| v.len())
            .max()
            .unwrap_or(0)
            .min(self.max_length);

        let input_ids_arr = pad_2d_i64(&input_ids, max_len, 0);
        let attention_mask_arr = pad_2d_i64(&attention_mask, max_len, 0);
        let token_type_ids_arr = Array2::<i64>::zeros((texts.len(), max_len));

        let input_ids_tensor = Tensor::from_array(input_ids_arr)?;
        let attention_mask_tensor = Tensor::from_array(attention_mask_arr)?;
        let token_type_ids_tensor = Tensor::from_array(token_type_ids_arr)?;

        let mut session = self.session()?;
        let outputs = session.run(ort::inputs![
            "input_ids" => input_ids_tensor,
            "attention_mask" => attention_mask_tensor,
            "token_type_ids" => token_type_ids_tensor,
        ])?;

        // last_hidden_state: [batch, seq_len, VECTOR_DIM]
        let (_shape, data) = outputs["last_hidden_state"].try_extract_tensor::<f32>()?;

        // Mean pooling over the sequence dimension, weighted by the mask
        let seq_len = max_len;
        let mut results = Vec::with_capacity(texts.len());
        for (i, mask_vec) in attention_mask.iter().enumerate().take(texts.len()) {
            let mut sum = vec![0.0f32; VECTOR_DIM];
            let mut count = 0.0f32;
            for j in 0..seq_len {
                let mask = mask_vec.get(j).copied().unwrap_or(0) as f32;
                if mask > 0.0 {
                    count += mask;
                    let offset = i * seq_len * VECTOR_DIM + j * VECTOR_DIM;
                    for (k, sum_val) in sum.iter_mut().enumerate() {
                        *sum_val += data[offset + k] * mask;
                    }
                }
            }
            if count > 0.0 {
                for sum_val in &mut sum {
                    *sum_val /= count;
                }
            }
            results.push(Embedding::new(normalize_l2(sum)));
        }

        Ok(results)
    }
}

/// Download model and tokenizer from HuggingFace Hub
fn ensure_model(repo: &str) -> Result<(PathBuf, PathBuf), EmbedderError> {
    use hf_hub::api::sync::Api;

    let api = Api::new().map_err(|e| EmbedderError::HfHubError(e.to_string()))?;
    let repo = api.model(repo.to_string());

    let model_path = repo
        .get(MODEL_FILE)
        .map_err(|e| EmbedderError::HfHubError(e.to_string()))?;
    let tokenizer_path = repo
        .get(TOKENIZER_FILE)
        .map_err(|e| EmbedderError::HfHubError(e.to_string()))?;

    if !MODEL_BLAKE3.is_empty() {
        verify_checksum(&model_path, MODEL_BLAKE3)?;
    }
    if !TOKENIZER_BLAKE3.is_empty() {
        verify_checksum(&tokenizer_path, TOKENIZER_BLAKE3)?;
    }

    Ok((model_path, tokenizer_path))
}

/// Verify file checksum using blake3
fn verify_checksum(path: &Path, expected: &str) -> Result<(), EmbedderError> {
    let mut file =
        std::fs::File::open(path).map_err(|e| EmbedderError::ModelNotFound(e.to_string()))?;
    let mut hasher = blake3::Hasher::new();
    std::io::copy(&mut file, &mut hasher)
        .map_err(|e| EmbedderError::ModelNotFound(e.to_string()))?;
    let actual = hasher.finalize().to_hex().to_string();

    if actual != expected {
        return Err(EmbedderError::ChecksumMismatch {
            path: path.display().to_string(),
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}

/// Select the best available execution provider
fn select_provider() -> ExecutionProvider {
    use ort::ep::CUDA;

    let cuda = CUDA::default();
    if cuda.is_available().unwrap_or(false) {
        return ExecutionProvider::Cuda { device_id: 0 };
    }
    ExecutionProvider::Cpu
}

/// Create an ort session with the specified provider
fn create_session(
    model_path: &Path,
    provider: ExecutionProvider,
) -> Result<Session, EmbedderError> {
    use ort::ep::CUDA;

    let mut builder = Session::builder()?;
    let session = match provider {
        ExecutionProvider::Cuda { device_id } => builder
            .with_execution_providers([CUDA::default().with_device_id(device_id).build()])
            .map_err(ort::Error::<()>::from)?
            .commit_from_file(model_path)?,
        ExecutionProvider::Cpu => builder.commit_from_file(model_path)?,
    };
    Ok(session)
}

/// Pad 2D sequences to a fixed length
fn pad_2d_i64(inputs: &[Vec<i64>], max_len: usize, pad_value: i64) -> Array2<i64> {
    let batch_size = inputs.len();
    let mut arr = Array2::from_elem((batch_size, max_len), pad_value);
    for (i, seq) in inputs.iter().enumerate() {
        for (j, &val) in seq.iter().take(max_len).enumerate() {
            arr[[i, j]] = val;
        }
    }
    arr
}

/// L2 normalize a vector (single-pass, in-place)
fn normalize_l2(mut v: Vec<f32>) -> Vec<f32> {
    let norm_sq: f32 = v.iter().fold(0.0, |acc, &x| acc + x * x);
    if norm_sq > 0.0 {
        let inv_norm = 1.0 / norm_sq.sqrt();
        v.iter_mut().for_each(|x| *x *= inv_norm);
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_l2_unit_norm() {
        let v = normalize_l2(vec![3.0, 4.0]);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_l2_zero_vector() {
        let v = normalize_l2(vec![0.0, 0.0]);
        assert_eq!(v, vec![0.0, 0.0]);
    }

    #[test]
    fn test_pad_2d() {
        let arr = pad_2d_i64(&[vec![1, 2], vec![3]], 3, 0);
        assert_eq!(arr[[0, 0]], 1);
        assert_eq!(arr[[0, 2]], 0);
        assert_eq!(arr[[1, 0]], 3);
        assert_eq!(arr[[1, 1]], 0);
    }

    #[test]
    fn test_pad_2d_truncates() {
        let arr = pad_2d_i64(&[vec![1, 2, 3, 4]], 2, 0);
        assert_eq!(arr.shape(), &[1, 2]);
        assert_eq!(arr[[0, 1]], 2);
    }
}
