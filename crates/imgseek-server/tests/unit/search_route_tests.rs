//! `POST /search` tests

use crate::test_utils::{QueryEmbedder, client, embedder, sample_index, state_reading, state_with_index};
use imgseek_domain::entities::IndexBuilder;
use imgseek_domain::ports::providers::IndexStore;
use imgseek_infrastructure::config::SearchConfig;
use imgseek_providers::index_store::BinaryIndexStore;
use imgseek_server::SearchState;
use rocket::http::{ContentType, Status};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;

async fn post_search(client: &rocket::local::asynchronous::Client, body: Value) -> (Status, Value) {
    let response = client
        .post("/search")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch()
        .await;
    let status = response.status();
    let body = response.into_string().await.expect("response body");
    let json: Value = serde_json::from_str(&body).expect("JSON body");
    (status, json)
}

#[rocket::async_test]
async fn test_search_returns_ranked_results() {
    let state = state_with_index(embedder(), sample_index(["A.jpg", "B.png", "C.jpg"]));
    let client = client(state).await;

    let (status, json) = post_search(&client, json!({"query": "red car", "top_k": 3})).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(json["query"], "red car");
    let results = json["results"].as_array().expect("results array");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["path"], "A.jpg");
    assert_eq!(results[0]["filename"], "A.jpg");
    assert_eq!(results[1]["path"], "C.jpg");
    assert_eq!(results[2]["path"], "B.png");
    let top = results[0]["score"].as_f64().expect("numeric score");
    assert!((top - 1.0).abs() < 1e-5);
}

#[rocket::async_test]
async fn test_search_uses_default_top_k() {
    let state = state_with_index(embedder(), sample_index(["a.jpg", "b.jpg", "c.jpg"]));
    let limits = SearchConfig {
        default_top_k: 2,
        ..SearchConfig::default()
    };
    let state = SearchState::new(state.search, limits);
    let client = client(state).await;

    let (status, json) = post_search(&client, json!({"query": "blue sky"})).await;

    assert_eq!(status, Status::Ok);
    let results = json["results"].as_array().expect("results array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["path"], "b.jpg");
}

#[rocket::async_test]
async fn test_search_clamps_top_k_to_max() {
    let state = state_with_index(embedder(), sample_index(["a.jpg", "b.jpg", "c.jpg"]));
    let limits = SearchConfig {
        default_top_k: 1,
        max_top_k: 1,
        ..SearchConfig::default()
    };
    let client = client(SearchState::new(state.search, limits)).await;

    let (status, json) = post_search(&client, json!({"query": "red car", "top_k": 500})).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(json["results"].as_array().map(Vec::len), Some(1));
}

#[rocket::async_test]
async fn test_empty_query_is_bad_request() {
    let state = state_with_index(embedder(), sample_index(["a.jpg", "b.jpg", "c.jpg"]));
    let client = client(state).await;

    for query in ["", "   \t"] {
        let (status, json) = post_search(&client, json!({"query": query})).await;
        assert_eq!(status, Status::BadRequest);
        assert!(json["error"].is_string());
    }
}

#[rocket::async_test]
async fn test_missing_query_field_is_bad_request() {
    let state = state_with_index(embedder(), sample_index(["a.jpg", "b.jpg", "c.jpg"]));
    let client = client(state).await;

    let (status, json) = post_search(&client, json!({"top_k": 3})).await;

    assert_eq!(status, Status::BadRequest);
    assert!(json["error"].is_string());
}

#[rocket::async_test]
async fn test_zero_top_k_is_bad_request() {
    let state = state_with_index(embedder(), sample_index(["a.jpg", "b.jpg", "c.jpg"]));
    let client = client(state).await;

    let (status, json) = post_search(&client, json!({"query": "red car", "top_k": 0})).await;

    assert_eq!(status, Status::BadRequest);
    assert!(json["error"].as_str().unwrap_or_default().contains("top_k"));
}

#[rocket::async_test]
async fn test_malformed_body_is_bad_request() {
    let state = state_with_index(embedder(), sample_index(["a.jpg", "b.jpg", "c.jpg"]));
    let client = client(state).await;

    let response = client
        .post("/search")
        .header(ContentType::JSON)
        .body("{not json")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn test_search_without_index_is_not_found() {
    let dir = TempDir::new().expect("temp dir");
    let client = client(state_reading(&dir.path().join("image_index.pkl"))).await;

    let (status, json) = post_search(&client, json!({"query": "red car"})).await;

    assert_eq!(status, Status::NotFound);
    assert!(
        json["error"]
            .as_str()
            .unwrap_or_default()
            .contains("imgseek build")
    );
}

#[rocket::async_test]
async fn test_empty_query_wins_over_missing_index() {
    let dir = TempDir::new().expect("temp dir");
    let client = client(state_reading(&dir.path().join("image_index.pkl"))).await;

    let (status, _) = post_search(&client, json!({"query": " "})).await;

    assert_eq!(status, Status::BadRequest);
}

#[rocket::async_test]
async fn test_search_with_empty_index_is_not_found() {
    let dir = TempDir::new().expect("temp dir");
    let index_path = dir.path().join("image_index.pkl");
    BinaryIndexStore::new()
        .save(&IndexBuilder::new("mock-clip").finish(), &index_path)
        .await
        .expect("save empty index");
    let client = client(state_reading(&index_path)).await;

    let (status, json) = post_search(&client, json!({"query": "red car"})).await;

    assert_eq!(status, Status::NotFound);
    assert!(json["error"].as_str().unwrap_or_default().contains("empty"));
}

#[rocket::async_test]
async fn test_search_loads_index_written_after_startup() {
    let dir = TempDir::new().expect("temp dir");
    let index_path = dir.path().join("image_index.pkl");
    let client = client(state_reading(&index_path)).await;

    let (status, _) = post_search(&client, json!({"query": "red car"})).await;
    assert_eq!(status, Status::NotFound);

    BinaryIndexStore::new()
        .save(&sample_index(["a.jpg", "b.jpg", "c.jpg"]), &index_path)
        .await
        .expect("save index");

    let (status, json) = post_search(&client, json!({"query": "red car"})).await;
    assert_eq!(status, Status::Ok);
    assert_eq!(json["results"][0]["path"], "a.jpg");
}

#[rocket::async_test]
async fn test_embedding_failure_is_internal_error() {
    let state = state_with_index(
        Arc::new(QueryEmbedder::failing()),
        sample_index(["a.jpg", "b.jpg", "c.jpg"]),
    );
    let client = client(state).await;

    let (status, json) = post_search(&client, json!({"query": "red car"})).await;

    assert_eq!(status, Status::InternalServerError);
    assert!(json["error"].as_str().unwrap_or_default().contains("model crashed"));

    let health = client.get("/health").dispatch().await;
    assert_eq!(health.status(), Status::Ok);
}
