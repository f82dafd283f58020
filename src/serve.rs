//! HTTP screening API (`serve` feature)
//!
//! Thin axum layer over the pipeline and the hybrid searcher:
//! `POST /search`, `POST /index`, `POST /normalize`, `GET /health`,
//! `GET /indices`, `GET /stats`, `DELETE /index/{name}`. Requests always
//! get a structured JSON body; pipeline degradation is reported inside it,
//! not as a transport error.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::elastic::ElasticClient;
use crate::health::health_check;
use crate::pipeline::Pipeline;
use crate::search::{HybridSearcher, SearchRequest};

pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub es: Arc<ElasticClient>,
    pub searcher: HybridSearcher,
    pub payments_index: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/search", post(search))
        .route("/index", post(index_document))
        .route("/normalize", post(normalize))
        .route("/health", get(health))
        .route("/indices", get(indices))
        .route("/stats", get(stats))
        .route("/index/{name}", delete(delete_index))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::limit::RequestBodyLimitLayer::new(1024 * 1024))
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "screening API listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn search(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Json<Value> {
    let response = state.searcher.search(&request).await;
    Json(serde_json::to_value(&response).unwrap_or_else(|_| json!({"success": false})))
}

#[derive(Deserialize)]
struct IndexRequest {
    index: String,
    document: Value,
    doc_id: Option<String>,
    routing: Option<String>,
}

async fn index_document(
    State(state): State<Arc<AppState>>,
    Json(request): Json<IndexRequest>,
) -> (StatusCode, Json<Value>) {
    match state
        .es
        .index_document(
            &request.index,
            &request.document,
            request.doc_id.as_deref(),
            request.routing.as_deref(),
        )
        .await
    {
        Ok(result) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "result": result.get("result").cloned().unwrap_or(Value::Null),
                "message": format!("indexed into {}", request.index),
            })),
        ),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({"success": false, "message": e.to_string()})),
        ),
    }
}

#[derive(Deserialize)]
struct NormalizeRequest {
    text: String,
}

async fn normalize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NormalizeRequest>,
) -> Json<Value> {
    let result = state.pipeline.process_simple(&request.text);
    Json(json!({
        "success": result.success,
        "original_text": result.original,
        "normalized_text": result.normalized,
        "language": result.language,
        "variants": result.variants,
        "processing_info": {
            "language_confidence": result.language_confidence,
            "entity_kind": result.entity_kind,
            "processing_time": result.processing_time,
            "errors": result.errors,
        }
    }))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let report = health_check(&state.es, &state.pipeline, &state.payments_index).await;
    Json(serde_json::to_value(&report).unwrap_or_else(|_| json!({"status": "unknown"})))
}

async fn indices(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    match state.es.list_indices().await {
        Ok(list) => (StatusCode::OK, Json(json!({"indices": list}))),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": e.to_string()})),
        ),
    }
}

async fn stats(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(serde_json::to_value(state.pipeline.stats()).unwrap_or_default())
}

async fn delete_index(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> (StatusCode, Json<Value>) {
    match state.es.delete_index(&name).await {
        Ok(true) => (StatusCode::OK, Json(json!({"success": true}))),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "message": "index not found"})),
        ),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({"success": false, "message": e.to_string()})),
        ),
    }
}
