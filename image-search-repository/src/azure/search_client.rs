//! Search data plane client.
//!
//! Executes vector queries against one index. Vectorization of the query
//! text happens on the service side through the index's vectorizer, so
//! the client only ships raw text.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::azure::{search_endpoint, TokenCache, SEARCH_API_VERSION, SEARCH_SCOPE};
use crate::errors::SearchError;
use crate::interfaces::{TokenCredential, VectorSearchProvider};
use async_trait::async_trait;
use image_search_shared::SearchResultItem;

/// Client for the search data plane of one index.
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
    index_name: String,
    tokens: TokenCache,
}

impl SearchClient {
    /// Create a client for the given search service and index.
    pub fn new(
        service_name: &str,
        index_name: &str,
        credential: Arc<dyn TokenCredential>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: search_endpoint(service_name),
            index_name: index_name.to_string(),
            tokens: TokenCache::new(credential, SEARCH_SCOPE),
        }
    }
}

/// Build the body of a vector query request.
///
/// `search` stays null: ranking comes entirely from the vector query, and
/// `select` narrows the payload to the `url` field.
fn build_vector_query_body(text: &str, size: usize) -> Value {
    json!({
        "search": null,
        "top": size,
        "vectorQueries": [
            {
                "kind": "text",
                "text": text,
                "k": size,
                "fields": "vector"
            }
        ],
        "select": "url"
    })
}

/// Response envelope for a search request.
#[derive(Debug, Deserialize)]
struct SearchResponseBody {
    #[serde(default)]
    value: Vec<SearchHit>,
}

/// One hit of a search response, narrowed to the selected fields.
#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "@search.score")]
    score: f64,
    url: String,
}

#[async_trait]
impl VectorSearchProvider for SearchClient {
    async fn vector_search(
        &self,
        text: &str,
        size: usize,
    ) -> Result<Vec<SearchResultItem>, SearchError> {
        let token = self.tokens.token().await?;
        let url = format!("{}/indexes/{}/docs/search", self.endpoint, self.index_name);

        let response = self
            .http
            .post(&url)
            .query(&[("api-version", SEARCH_API_VERSION)])
            .bearer_auth(token)
            .json(&build_vector_query_body(text, size))
            .send()
            .await
            .map_err(|e| SearchError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Vector search request failed");
            return Err(SearchError::api(status.as_u16(), body));
        }

        let body: SearchResponseBody = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        debug!(
            index = %self.index_name,
            hits = body.value.len(),
            "Vector search completed"
        );

        Ok(body
            .value
            .into_iter()
            .map(|hit| SearchResultItem {
                score: hit.score,
                url: hit.url,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_query_body_shape() {
        let body = build_vector_query_body("sunset", 5);

        assert!(body["search"].is_null());
        assert_eq!(body["top"], 5);
        assert_eq!(body["select"], "url");

        let vector_query = &body["vectorQueries"][0];
        assert_eq!(vector_query["kind"], "text");
        assert_eq!(vector_query["text"], "sunset");
        assert_eq!(vector_query["k"], 5);
        assert_eq!(vector_query["fields"], "vector");
    }

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "value": [
                {"@search.score": 0.91, "url": "https://acct.blob.core.windows.net/c/a.jpg"},
                {"@search.score": 0.44, "url": "https://acct.blob.core.windows.net/c/b.jpg"}
            ]
        }"#;

        let parsed: SearchResponseBody = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.value.len(), 2);
        assert_eq!(parsed.value[0].score, 0.91);
        assert_eq!(parsed.value[0].url, "https://acct.blob.core.windows.net/c/a.jpg");
    }

    #[test]
    fn test_parse_empty_search_response() {
        let parsed: SearchResponseBody = serde_json::from_str("{}").unwrap();

        assert!(parsed.value.is_empty());
    }
}
