//! Provisioning configuration from the environment.

use std::env;
use std::path::PathBuf;

use crate::ProvisionError;

/// Directory holding the sample images, relative to the working directory.
const SAMPLE_DATA_DIR: &str = "pictures/nature";

/// Everything the provisioning run needs, resolved up front so a missing
/// variable fails before any remote call is made.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    pub search_service: String,
    pub search_index: String,
    pub tenant_id: String,
    pub subscription_id: String,
    pub api_service_resource_group: String,
    pub api_service: String,
    pub storage_account_resource_group: String,
    pub storage_account: String,
    pub storage_blob_url: String,
    pub sample_data_dir: PathBuf,
}

impl ProvisionConfig {
    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `AZURE_SEARCH_SERVICE`: search service name
    /// - `AZURE_SEARCH_INDEX`: target index name
    /// - `AZURE_TENANT_ID`: tenant for the developer credential
    /// - `AZURE_SUBSCRIPTION_ID`: subscription for ARM lookups
    /// - `AZURE_API_SERVICE_RESOURCE_GROUP`: resource group of the
    ///   embedding function app
    /// - `AZURE_API_SERVICE`: embedding function app name
    /// - `AZURE_STORAGE_ACCOUNT_RESOURCE_GROUP`: resource group of the
    ///   storage account
    /// - `AZURE_STORAGE_ACCOUNT`: storage account name
    /// - `AZURE_STORAGE_ACCOUNT_BLOB_URL`: account blob endpoint
    ///
    /// All variables are required.
    pub fn from_env() -> Result<Self, ProvisionError> {
        Ok(Self {
            search_service: required_var("AZURE_SEARCH_SERVICE")?,
            search_index: required_var("AZURE_SEARCH_INDEX")?,
            tenant_id: required_var("AZURE_TENANT_ID")?,
            subscription_id: required_var("AZURE_SUBSCRIPTION_ID")?,
            api_service_resource_group: required_var("AZURE_API_SERVICE_RESOURCE_GROUP")?,
            api_service: required_var("AZURE_API_SERVICE")?,
            storage_account_resource_group: required_var("AZURE_STORAGE_ACCOUNT_RESOURCE_GROUP")?,
            storage_account: required_var("AZURE_STORAGE_ACCOUNT")?,
            storage_blob_url: required_var("AZURE_STORAGE_ACCOUNT_BLOB_URL")?,
            sample_data_dir: PathBuf::from(SAMPLE_DATA_DIR),
        })
    }
}

fn required_var(name: &str) -> Result<String, ProvisionError> {
    env::var(name).map_err(|_| {
        ProvisionError::config(format!("Missing required environment variable {}", name))
    })
}
