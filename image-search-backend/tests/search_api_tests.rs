//! Integration tests for the search endpoint.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tokio::sync::Mutex;
use tower::ServiceExt;

use image_search_backend::create_app;
use image_search_repository::{SearchError, VectorSearchProvider};
use image_search_shared::SearchResultItem;

/// Mock provider that records queries and serves canned hits.
struct MockSearchProvider {
    hits: Vec<SearchResultItem>,
    queries: Mutex<Vec<(String, usize)>>,
    fail: bool,
}

impl MockSearchProvider {
    fn with_hits(hits: Vec<SearchResultItem>) -> Self {
        Self {
            hits,
            queries: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            hits: Vec::new(),
            queries: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

#[async_trait]
impl VectorSearchProvider for MockSearchProvider {
    async fn vector_search(
        &self,
        text: &str,
        size: usize,
    ) -> Result<Vec<SearchResultItem>, SearchError> {
        self.queries.lock().await.push((text.to_string(), size));

        if self.fail {
            return Err(SearchError::api(503, "throttled".to_string()));
        }

        Ok(self.hits.iter().take(size).cloned().collect())
    }
}

fn sample_hits(count: usize) -> Vec<SearchResultItem> {
    (0..count)
        .map(|i| SearchResultItem {
            score: 1.0 - (i as f64) / 10.0,
            url: format!("https://acct.blob.core.windows.net/images/{}.jpg", i),
        })
        .collect()
}

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_search_returns_ranked_hits_in_order() {
    let provider = Arc::new(MockSearchProvider::with_hits(sample_hits(3)));
    let app = create_app(provider, Path::new("static"));

    let response = app
        .oneshot(json_request(r#"{"search": "waterfall", "size": 3}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["score"], 1.0);
    assert_eq!(
        results[0]["url"],
        "https://acct.blob.core.windows.net/images/0.jpg"
    );
    assert_eq!(results[2]["score"], 0.8);
}

#[tokio::test]
async fn test_response_never_exceeds_requested_size() {
    let provider = Arc::new(MockSearchProvider::with_hits(sample_hits(10)));
    let app = create_app(provider, Path::new("static"));

    let response = app
        .oneshot(json_request(r#"{"search": "forest", "size": 4}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body.as_array().unwrap().len() <= 4);
}

#[tokio::test]
async fn test_empty_body_uses_wildcard_and_default_size() {
    let provider = Arc::new(MockSearchProvider::with_hits(sample_hits(2)));
    let app = create_app(provider.clone(), Path::new("static"));

    let response = app.oneshot(json_request("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let queries = provider.queries.lock().await;
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0], ("*".to_string(), 10));
}

#[tokio::test]
async fn test_non_json_body_is_unsupported_media_type() {
    let provider = Arc::new(MockSearchProvider::with_hits(sample_hits(1)));
    let app = create_app(provider.clone(), Path::new("static"));

    let request = Request::builder()
        .method("POST")
        .uri("/search")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("find me a waterfall"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body = response_json(response).await;
    assert_eq!(body["error"], "request must be json");

    // The provider must not be consulted for rejected requests.
    assert!(provider.queries.lock().await.is_empty());
}

#[tokio::test]
async fn test_undecodable_json_body_is_unsupported_media_type() {
    let provider = Arc::new(MockSearchProvider::with_hits(sample_hits(1)));
    let app = create_app(provider, Path::new("static"));

    let response = app.oneshot(json_request("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body = response_json(response).await;
    assert_eq!(body["error"], "request must be json");
}

#[tokio::test]
async fn test_remote_failure_maps_to_bad_gateway() {
    let provider = Arc::new(MockSearchProvider::failing());
    let app = create_app(provider, Path::new("static"));

    let response = app
        .oneshot(json_request(r#"{"search": "dunes"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = response_json(response).await;
    assert_eq!(body["error"], "search request failed");
}
