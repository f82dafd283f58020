//! Hybrid search and Elasticsearch client tests against a mock cluster.

use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use payscreen::config::{Config, ElasticConfig};
use payscreen::elastic::{BulkItem, ElasticClient};
use payscreen::pipeline::Pipeline;
use payscreen::search::{HybridSearcher, IndexType, SearchRequest};

fn client_for(server: &MockServer) -> ElasticClient {
    let config = ElasticConfig {
        host: server.host(),
        port: server.port(),
        username: None,
        password: None,
        use_ssl: false,
    };
    ElasticClient::new(&config, Duration::from_secs(5)).unwrap()
}

fn searcher_for(server: &MockServer) -> HybridSearcher {
    let pipeline = Arc::new(Pipeline::new(&Config::default()));
    HybridSearcher::new(
        Arc::new(client_for(server)),
        pipeline,
        "payment_vectors".to_string(),
    )
}

fn hit(id: &str, score: f32, name: &str) -> serde_json::Value {
    json!({"_id": id, "_score": score, "_source": {"name": name, "entity_type": "person"}})
}

#[tokio::test]
async fn test_ping() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .json_body(json!({"tagline": "You Know, for Search"}));
        })
        .await;
    assert!(client_for(&server).ping().await);
}

#[tokio::test]
async fn test_ping_unreachable() {
    let config = ElasticConfig {
        host: "127.0.0.1".to_string(),
        port: 1, // nothing listens here
        ..Default::default()
    };
    let client = ElasticClient::new(&config, Duration::from_millis(200)).unwrap();
    assert!(!client.ping().await);
}

#[tokio::test]
async fn test_index_exists_and_create() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("HEAD").path("/sanctions");
            then.status(404);
        })
        .await;
    let create = server
        .mock_async(|when, then| {
            when.method(PUT).path("/sanctions");
            then.status(200).json_body(json!({"acknowledged": true}));
        })
        .await;

    let client = client_for(&server);
    assert!(!client.index_exists("sanctions").await.unwrap());
    client
        .create_index("sanctions", &payscreen::elastic::sanctions_mapping())
        .await
        .unwrap();
    create.assert_async().await;
}

#[tokio::test]
async fn test_bulk_with_ids_and_routing() {
    let server = MockServer::start_async().await;
    let bulk = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/_bulk")
                .header("Content-Type", "application/x-ndjson")
                .body_includes("\"_id\":\"e1\"")
                .body_includes("\"routing\":\"e1\"");
            then.status(200)
                .json_body(json!({"errors": false, "items": []}));
        })
        .await;

    let client = client_for(&server);
    let items = vec![
        BulkItem::with_id("e1", json!({"name": "Петро Порошенко"})),
        BulkItem::with_routing("e1_c0", "e1", json!({"text": "Petro Poroshenko"})),
    ];
    let count = client.bulk("sanctions", &items).await.unwrap();
    assert_eq!(count, 2);
    bulk.assert_async().await;
}

#[tokio::test]
async fn test_bulk_errors_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/_bulk");
            then.status(200)
                .json_body(json!({"errors": true, "items": [{"index": {"error": "boom"}}]}));
        })
        .await;

    let client = client_for(&server);
    let result = client
        .bulk("sanctions", &[BulkItem::new(json!({"name": "x"}))])
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_get_document_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/sanctions/_doc/missing");
            then.status(404).json_body(json!({"found": false}));
        })
        .await;

    let client = client_for(&server);
    let doc = client
        .get_document("sanctions", "missing", None)
        .await
        .unwrap();
    assert!(doc.is_none());
}

#[tokio::test]
async fn test_text_only_search_fuses_and_sorts() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/sanctions/_search");
            then.status(200).json_body(json!({
                "hits": {"hits": [hit("e1", 3.2, "Петро Порошенко"), hit("e2", 1.1, "Петр Петров")]}
            }));
        })
        .await;
    // variant hit resolving to a new parent
    server
        .mock_async(|when, then| {
            when.method(POST).path("/sanctions_variants/_search");
            then.status(200).json_body(json!({
                "hits": {"hits": [
                    {"_id": "v1", "_score": 2.5, "_source": {"parent_id": "e3", "text": "Petro Poroshenko"}}
                ]}
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/sanctions/_doc/e3");
            then.status(200).json_body(json!({
                "_id": "e3", "_source": {"name": "Порошенко Петро Олексійович"}
            }));
        })
        .await;

    let searcher = searcher_for(&server);
    let response = searcher
        .search(&SearchRequest {
            query: "Оплата від Петра Порошенка".to_string(),
            limit: 10,
            threshold: 0.7,
            index_type: IndexType::Sanctions,
        })
        .await;

    assert!(response.success);
    assert_eq!(response.normalized_query, "Петро Порошенко");
    assert_eq!(response.embeddings_length, 0);
    assert_eq!(response.server_info.search_type, "text_only");
    // three distinct parents, sorted by score
    assert_eq!(response.total, 3);
    assert_eq!(response.results[0].id, "e1");
    assert_eq!(response.results[1].id, "e3");
    assert_eq!(response.results[2].id, "e2");
}

#[tokio::test]
async fn test_variant_parent_deduplicated() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/sanctions/_search");
            then.status(200).json_body(json!({
                "hits": {"hits": [hit("e1", 3.0, "Петро Порошенко")]}
            }));
        })
        .await;
    // variant search resolves to the same parent already found
    server
        .mock_async(|when, then| {
            when.method(POST).path("/sanctions_variants/_search");
            then.status(200).json_body(json!({
                "hits": {"hits": [
                    {"_id": "v1", "_score": 2.0, "_source": {"parent_id": "e1"}},
                    {"_id": "v2", "_score": 1.5, "_source": {"parent_id": "e1"}}
                ]}
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/sanctions/_doc/e1");
            then.status(200)
                .json_body(json!({"_id": "e1", "_source": {"name": "Петро Порошенко"}}));
        })
        .await;

    let searcher = searcher_for(&server);
    let response = searcher
        .search(&SearchRequest {
            query: "Петро Порошенко".to_string(),
            limit: 10,
            threshold: 0.7,
            index_type: IndexType::Sanctions,
        })
        .await;

    // at most one entry per parent id
    assert_eq!(response.total, 1);
    assert_eq!(response.results[0].id, "e1");
}

#[tokio::test]
async fn test_failed_leg_degrades_to_partial() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/sanctions/_search");
            then.status(500).body("cluster on fire");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/sanctions_variants/_search");
            then.status(200).json_body(json!({
                "hits": {"hits": [
                    {"_id": "v1", "_score": 1.2, "_source": {"parent_id": "e9"}}
                ]}
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/sanctions/_doc/e9");
            then.status(200)
                .json_body(json!({"_id": "e9", "_source": {"name": "Fallback Entity"}}));
        })
        .await;

    let searcher = searcher_for(&server);
    let response = searcher
        .search(&SearchRequest {
            query: "Петро Порошенко".to_string(),
            limit: 5,
            threshold: 0.7,
            index_type: IndexType::Sanctions,
        })
        .await;

    // one leg failed, the other still delivered
    assert!(response.success);
    assert_eq!(response.total, 1);
    assert_eq!(response.results[0].id, "e9");
}

#[tokio::test]
async fn test_payments_index_searched_for_both() {
    let server = MockServer::start_async().await;
    for path in ["/sanctions/_search", "/sanctions_variants/_search"] {
        server
            .mock_async(move |when, then| {
                when.method(POST).path(path);
                then.status(200).json_body(json!({"hits": {"hits": []}}));
            })
            .await;
    }
    let payments = server
        .mock_async(|when, then| {
            when.method(POST).path("/payment_vectors/_search");
            then.status(200).json_body(json!({
                "hits": {"hits": [hit("p1", 0.9, "Petro Poroshenko payment")]}
            }));
        })
        .await;

    let searcher = searcher_for(&server);
    let response = searcher
        .search(&SearchRequest {
            query: "Петро Порошенко".to_string(),
            limit: 5,
            threshold: 0.7,
            index_type: IndexType::Both,
        })
        .await;

    payments.assert_async().await;
    assert_eq!(response.total, 1);
    assert_eq!(response.results[0].index, "payment_vectors");
}

#[tokio::test]
async fn test_health_check_report() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).json_body(json!({}));
        })
        .await;
    for (index, status) in [
        ("sanctions", 200u16),
        ("sanctions_variants", 200),
        ("sanctions_pc", 404),
        ("payment_vectors", 200),
    ] {
        server
            .mock_async(move |when, then| {
                when.method("HEAD").path(format!("/{index}"));
                then.status(status);
            })
            .await;
    }

    let pipeline = Pipeline::new(&Config::default());
    let client = client_for(&server);
    let report = payscreen::health::health_check(&client, &pipeline, "payment_vectors").await;

    assert!(report.elasticsearch);
    // no embedder attached in tests
    assert!(!report.embedder);
    assert_eq!(report.status, "degraded");
    assert_eq!(report.indices.get("sanctions"), Some(&true));
    assert_eq!(report.indices.get("sanctions_pc"), Some(&false));
}
