//! Blob storage client.
//!
//! Minimal operations on one container: create it with public blob read
//! access, check blob existence, and upload block blobs.

use std::sync::Arc;

use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::StatusCode;
use tracing::{debug, error};
use url::Url;

use crate::azure::{TokenCache, STORAGE_SCOPE};
use crate::errors::ResourceError;
use crate::interfaces::{BlobStore, TokenCredential};
use async_trait::async_trait;

const BLOB_API_VERSION: &str = "2023-11-03";

/// Client for one blob container.
pub struct BlobContainerClient {
    http: reqwest::Client,
    container_url: Url,
    tokens: TokenCache,
}

impl BlobContainerClient {
    /// Create a client for a container under the given account blob URL.
    ///
    /// # Arguments
    ///
    /// * `account_url` - The account blob endpoint, e.g.
    ///   `https://myaccount.blob.core.windows.net`
    /// * `container` - The container name
    pub fn new(
        account_url: &str,
        container: &str,
        credential: Arc<dyn TokenCredential>,
    ) -> Result<Self, ResourceError> {
        let mut container_url = Url::parse(account_url)
            .map_err(|e| ResourceError::invalid_url(format!("{}: {}", account_url, e)))?;
        container_url
            .path_segments_mut()
            .map_err(|_| ResourceError::invalid_url(account_url.to_string()))?
            .pop_if_empty()
            .push(container);

        Ok(Self {
            http: reqwest::Client::new(),
            container_url,
            tokens: TokenCache::new(credential, STORAGE_SCOPE),
        })
    }

    /// URL of a blob inside the container, with the name percent-encoded.
    fn blob_url(&self, name: &str) -> Url {
        let mut url = self.container_url.clone();
        // The container URL is always a valid base, so segments can't fail.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(name);
        }
        url
    }
}

#[async_trait]
impl BlobStore for BlobContainerClient {
    async fn ensure_container(&self) -> Result<(), ResourceError> {
        let token = self.tokens.token().await?;

        let response = self
            .http
            .head(self.container_url.clone())
            .query(&[("restype", "container")])
            .bearer_auth(&token)
            .header("x-ms-version", BLOB_API_VERSION)
            .send()
            .await
            .map_err(|e| ResourceError::request(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {
                debug!(container = %self.container_url, "Container already exists");
                return Ok(());
            }
            StatusCode::NOT_FOUND => {}
            status => {
                return Err(ResourceError::api(status.as_u16(), String::new()));
            }
        }

        let response = self
            .http
            .put(self.container_url.clone())
            .query(&[("restype", "container")])
            .bearer_auth(&token)
            .header("x-ms-version", BLOB_API_VERSION)
            .header("x-ms-blob-public-access", "blob")
            .send()
            .await
            .map_err(|e| ResourceError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Container creation failed");
            return Err(ResourceError::api(status.as_u16(), body));
        }

        debug!(container = %self.container_url, "Container created");
        Ok(())
    }

    async fn blob_exists(&self, name: &str) -> Result<bool, ResourceError> {
        let token = self.tokens.token().await?;

        let response = self
            .http
            .head(self.blob_url(name))
            .bearer_auth(token)
            .header("x-ms-version", BLOB_API_VERSION)
            .send()
            .await
            .map_err(|e| ResourceError::request(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(ResourceError::api(status.as_u16(), String::new())),
        }
    }

    async fn upload_blob(&self, name: &str, data: Vec<u8>) -> Result<(), ResourceError> {
        let token = self.tokens.token().await?;

        let response = self
            .http
            .put(self.blob_url(name))
            .bearer_auth(token)
            .header("x-ms-version", BLOB_API_VERSION)
            .header("x-ms-blob-type", "BlockBlob")
            .header(CONTENT_TYPE, "application/octet-stream")
            .header(CONTENT_LENGTH, data.len())
            .body(data)
            .send()
            .await
            .map_err(|e| ResourceError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, blob = %name, "Blob upload failed");
            return Err(ResourceError::api(status.as_u16(), body));
        }

        debug!(blob = %name, "Blob uploaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};

    use crate::errors::CredentialError;
    use crate::interfaces::AccessToken;

    struct StaticCredential;

    #[async_trait]
    impl TokenCredential for StaticCredential {
        async fn get_token(&self, _scope: &str) -> Result<AccessToken, CredentialError> {
            Ok(AccessToken::new("t", Utc::now() + Duration::seconds(3600)))
        }
    }

    fn client() -> BlobContainerClient {
        BlobContainerClient::new(
            "https://acct.blob.core.windows.net",
            "image-embedding-sample-data",
            Arc::new(StaticCredential),
        )
        .unwrap()
    }

    #[test]
    fn test_container_url_includes_container() {
        let client = client();

        assert_eq!(
            client.container_url.as_str(),
            "https://acct.blob.core.windows.net/image-embedding-sample-data"
        );
    }

    #[test]
    fn test_blob_url_percent_encodes_names() {
        let client = client();

        let url = client.blob_url("forest path.jpg");

        assert_eq!(
            url.as_str(),
            "https://acct.blob.core.windows.net/image-embedding-sample-data/forest%20path.jpg"
        );
    }

    #[test]
    fn test_invalid_account_url_rejected() {
        let result = BlobContainerClient::new("not a url", "c", Arc::new(StaticCredential));

        assert!(matches!(result, Err(ResourceError::InvalidUrl(_))));
    }
}
