//! # Image Search Provision
//!
//! One-shot provisioning for the image search sample: uploads the sample
//! images, then creates or updates the index, data source, skillset, and
//! indexer before triggering an indexer run.

pub mod assets;
pub mod config;
pub mod sequence;

pub use config::ProvisionConfig;
pub use sequence::Provisioner;

use thiserror::Error;

use image_search_repository::{AzdEnvError, CredentialError, ResourceError};

/// Errors that can occur during provisioning.
///
/// Any error aborts the run; a rerun is safe because every step is
/// individually idempotent.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Sample asset error.
    #[error("Asset error: {0}")]
    AssetError(String),

    /// The azd environment could not be loaded.
    #[error("Environment error: {0}")]
    AzdEnvError(#[from] AzdEnvError),

    /// Token acquisition failed.
    #[error("Credential error: {0}")]
    CredentialError(#[from] CredentialError),

    /// A remote resource operation failed.
    #[error("Resource error: {0}")]
    ResourceError(#[from] ResourceError),
}

impl ProvisionError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create an asset error.
    pub fn assets(msg: impl Into<String>) -> Self {
        Self::AssetError(msg.into())
    }
}
