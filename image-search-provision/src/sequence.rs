//! Ordered provisioning sequence.
//!
//! Each step depends on a name or URL produced by an earlier one, so the
//! sequence runs strictly in order and aborts on the first failure. Every
//! step is an idempotent upsert, which is what makes a rerun safe.

use std::sync::Arc;

use tracing::info;

use crate::assets::upload_sample_assets;
use crate::{ProvisionConfig, ProvisionError};
use image_search_repository::definitions::{
    blob_data_source, embedding_indexer, embedding_skillset, image_index,
    EMBEDDING_FUNCTION_NAME, SAMPLE_CONTAINER_NAME, SAMPLE_DATASOURCE_NAME, SAMPLE_INDEXER_NAME,
    SAMPLE_SKILLSET_NAME,
};
use image_search_repository::{
    create_credential, BlobContainerClient, BlobStore, CredentialKind, FunctionAppClient,
    SearchIndexClient, SearchIndexerClient, StorageManagementClient,
};

/// Owns the remote clients and runs the provisioning steps in order.
pub struct Provisioner {
    config: ProvisionConfig,
    blobs: Arc<dyn BlobStore>,
    functions: FunctionAppClient,
    storage: StorageManagementClient,
    index_client: SearchIndexClient,
    indexer_client: SearchIndexerClient,
}

impl Provisioner {
    /// Wire up all clients from the configuration.
    ///
    /// Provisioning always runs from a developer machine, so the
    /// developer CLI credential is used unconditionally.
    pub fn new(config: ProvisionConfig) -> Result<Self, ProvisionError> {
        let credential = create_credential(
            CredentialKind::DeveloperCli,
            Some(config.tenant_id.clone()),
        );

        let blobs = BlobContainerClient::new(
            &config.storage_blob_url,
            SAMPLE_CONTAINER_NAME,
            credential.clone(),
        )?;

        Ok(Self {
            blobs: Arc::new(blobs),
            functions: FunctionAppClient::new(&config.subscription_id, credential.clone()),
            storage: StorageManagementClient::new(&config.subscription_id, credential.clone()),
            index_client: SearchIndexClient::new(&config.search_service, credential.clone()),
            indexer_client: SearchIndexerClient::new(&config.search_service, credential),
            config,
        })
    }

    /// Run the full provisioning sequence.
    ///
    /// Steps: upload sample data, resolve the embedding function URL,
    /// upsert index, data source, skillset, and indexer, then trigger an
    /// indexer run. The run completes asynchronously on the service side;
    /// this method does not wait for it.
    pub async fn run(&self) -> Result<(), ProvisionError> {
        info!(container = SAMPLE_CONTAINER_NAME, "Uploading sample data");
        let uploaded =
            upload_sample_assets(self.blobs.as_ref(), &self.config.sample_data_dir).await?;
        info!(uploaded = uploaded, "Sample data upload complete");

        info!(function = EMBEDDING_FUNCTION_NAME, "Resolving embedding function URL");
        let function_url = self
            .functions
            .resolve_function_url(
                &self.config.api_service_resource_group,
                &self.config.api_service,
                EMBEDDING_FUNCTION_NAME,
            )
            .await?;

        info!(index = %self.config.search_index, "Creating or updating search index");
        let index = image_index(&self.config.search_index, &function_url);
        self.index_client.create_or_update_index(&index).await?;

        info!(data_source = SAMPLE_DATASOURCE_NAME, "Creating or updating data source");
        let connection_string = self
            .storage
            .account_connection_string(
                &self.config.storage_account_resource_group,
                &self.config.storage_account,
            )
            .await?;
        let data_source = blob_data_source(&connection_string);
        self.indexer_client
            .create_or_update_data_source(&data_source)
            .await?;

        info!(skillset = SAMPLE_SKILLSET_NAME, "Creating or updating skillset");
        let skillset = embedding_skillset(&function_url);
        self.indexer_client
            .create_or_update_skillset(&skillset)
            .await?;

        info!(indexer = SAMPLE_INDEXER_NAME, "Creating or updating indexer");
        let indexer = embedding_indexer(&self.config.search_index);
        self.indexer_client
            .create_or_update_indexer(&indexer)
            .await?;

        info!(indexer = SAMPLE_INDEXER_NAME, "Starting indexer run");
        self.indexer_client.run_indexer(SAMPLE_INDEXER_NAME).await?;

        info!("Provisioning complete; the indexer run continues on the service side");
        Ok(())
    }
}
