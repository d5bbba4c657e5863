//! Search indexer management client.
//!
//! Creates or updates data sources, skillsets, and indexers, and triggers
//! indexer runs. All upserts use the management plane's PUT semantics and
//! are safe to repeat.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error};

use crate::azure::{search_endpoint, TokenCache, SEARCH_API_VERSION, SEARCH_SCOPE};
use crate::definitions::{DataSourceDefinition, IndexerDefinition, SkillsetDefinition};
use crate::errors::ResourceError;
use crate::interfaces::TokenCredential;

/// Client for indexer-plane resources on one search service.
pub struct SearchIndexerClient {
    http: reqwest::Client,
    endpoint: String,
    tokens: TokenCache,
}

impl SearchIndexerClient {
    /// Create a client for the given search service.
    pub fn new(service_name: &str, credential: Arc<dyn TokenCredential>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: search_endpoint(service_name),
            tokens: TokenCache::new(credential, SEARCH_SCOPE),
        }
    }

    /// Create or update the data source connection.
    pub async fn create_or_update_data_source(
        &self,
        data_source: &DataSourceDefinition,
    ) -> Result<(), ResourceError> {
        self.put_resource("datasources", &data_source.name, data_source)
            .await
    }

    /// Create or update the skillset.
    pub async fn create_or_update_skillset(
        &self,
        skillset: &SkillsetDefinition,
    ) -> Result<(), ResourceError> {
        self.put_resource("skillsets", &skillset.name, skillset)
            .await
    }

    /// Create or update the indexer.
    pub async fn create_or_update_indexer(
        &self,
        indexer: &IndexerDefinition,
    ) -> Result<(), ResourceError> {
        self.put_resource("indexers", &indexer.name, indexer).await
    }

    /// Trigger a run of the named indexer.
    ///
    /// The run itself is asynchronous on the service side; this call
    /// returns as soon as the service has accepted it.
    pub async fn run_indexer(&self, name: &str) -> Result<(), ResourceError> {
        let token = self.tokens.token().await?;
        let url = format!("{}/indexers/{}/run", self.endpoint, name);

        let response = self
            .http
            .post(&url)
            .query(&[("api-version", SEARCH_API_VERSION)])
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ResourceError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, indexer = %name, "Indexer run request failed");
            return Err(ResourceError::api(status.as_u16(), body));
        }

        debug!(indexer = %name, "Indexer run accepted");
        Ok(())
    }

    /// PUT one named resource into a management-plane collection.
    async fn put_resource<T: Serialize>(
        &self,
        collection: &str,
        name: &str,
        definition: &T,
    ) -> Result<(), ResourceError> {
        let token = self.tokens.token().await?;
        let url = format!("{}/{}/{}", self.endpoint, collection, name);

        let response = self
            .http
            .put(&url)
            .query(&[("api-version", SEARCH_API_VERSION)])
            .bearer_auth(token)
            .json(definition)
            .send()
            .await
            .map_err(|e| ResourceError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = %status,
                body = %body,
                collection = %collection,
                name = %name,
                "Resource upsert failed"
            );
            return Err(ResourceError::api(status.as_u16(), body));
        }

        debug!(collection = %collection, name = %name, "Resource created or updated");
        Ok(())
    }
}
