//! # Image Search Repository
//!
//! This crate provides the remote-service layer for the image search
//! system: credential acquisition, declarative definitions for the search
//! resources, and REST clients for the Azure search data plane, the search
//! management plane, ARM metadata lookups, and blob storage.

pub mod azd;
pub mod azure;
pub mod credentials;
pub mod definitions;
pub mod errors;
pub mod interfaces;

pub use azure::{
    BlobContainerClient, FunctionAppClient, SearchClient, SearchIndexClient, SearchIndexerClient,
    StorageManagementClient,
};
pub use credentials::{
    create_credential, AzureDeveloperCliCredential, CredentialKind, ManagedIdentityCredential,
};
pub use errors::{AzdEnvError, CredentialError, ResourceError, SearchError};
pub use interfaces::{AccessToken, BlobStore, TokenCredential, VectorSearchProvider};
