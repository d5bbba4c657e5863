//! Search index management client.
//!
//! Creates or updates index definitions through the management plane's
//! PUT upsert, applying the vectorizer parameter rename the service
//! expects.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, error};

use crate::azure::{search_endpoint, TokenCache, SEARCH_API_VERSION, SEARCH_SCOPE};
use crate::definitions::SearchIndexDefinition;
use crate::errors::ResourceError;
use crate::interfaces::TokenCredential;

/// Client for index definitions on one search service.
pub struct SearchIndexClient {
    http: reqwest::Client,
    endpoint: String,
    tokens: TokenCache,
}

impl SearchIndexClient {
    /// Create a client for the given search service.
    pub fn new(service_name: &str, credential: Arc<dyn TokenCredential>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: search_endpoint(service_name),
            tokens: TokenCache::new(credential, SEARCH_SCOPE),
        }
    }

    /// Create the index if absent, or update it to match the definition.
    ///
    /// Safe to repeat: a rerun with an identical definition leaves the
    /// remote index unchanged.
    pub async fn create_or_update_index(
        &self,
        index: &SearchIndexDefinition,
    ) -> Result<(), ResourceError> {
        let body = serde_json::to_string(index)
            .map_err(|e| ResourceError::serialization(e.to_string()))?;
        let body = rewrite_vectorizer_parameters(&body);

        let token = self.tokens.token().await?;
        let url = format!("{}/indexes/{}", self.endpoint, index.name);

        let response = self
            .http
            .put(&url)
            .query(&[("api-version", SEARCH_API_VERSION)])
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ResourceError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, index = %index.name, "Index upsert failed");
            return Err(ResourceError::api(status.as_u16(), body));
        }

        debug!(index = %index.name, "Index created or updated");
        Ok(())
    }
}

/// Compatibility shim: the client model predates the service-side rename
/// of the custom vectorizer parameter bag, so the serialized body still
/// says `customVectorizerParameters` where the service expects
/// `customWebApiParameters`. Applied only to index upserts; delete once
/// the definitions serialize the new name directly.
fn rewrite_vectorizer_parameters(body: &str) -> String {
    body.replace("customVectorizerParameters", "customWebApiParameters")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::image_index;

    #[test]
    fn test_rewrite_renames_parameter_bag() {
        let body = r#"{"vectorizers":[{"name":"v","customVectorizerParameters":{"uri":"u"}}]}"#;

        let rewritten = rewrite_vectorizer_parameters(body);

        assert_eq!(
            rewritten,
            r#"{"vectorizers":[{"name":"v","customWebApiParameters":{"uri":"u"}}]}"#
        );
    }

    #[test]
    fn test_rewrite_leaves_other_content_untouched() {
        let body = r#"{"name":"images","fields":[{"name":"id","type":"Edm.String"}]}"#;

        assert_eq!(rewrite_vectorizer_parameters(body), body);
    }

    #[test]
    fn test_rewrite_changes_nothing_but_the_token() {
        let body = serde_json::to_string(&image_index("images", "https://fn/api")).unwrap();

        let rewritten = rewrite_vectorizer_parameters(&body);

        // The only difference between the two bodies is the renamed key.
        assert_eq!(
            rewritten.replace("customWebApiParameters", "customVectorizerParameters"),
            body
        );
        assert!(!rewritten.contains("customVectorizerParameters"));
        assert!(rewritten.contains("customWebApiParameters"));
    }
}
