//! Blob store trait definition.

use async_trait::async_trait;

use crate::errors::ResourceError;

/// Abstract interface over one blob container.
///
/// The provisioning tool uploads sample assets through this trait so the
/// skip-if-exists behavior can be exercised against an in-memory mock.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Ensure the container exists, creating it with public blob read
    /// access if it does not.
    async fn ensure_container(&self) -> Result<(), ResourceError>;

    /// Whether a blob with the given name already exists in the container.
    async fn blob_exists(&self, name: &str) -> Result<bool, ResourceError>;

    /// Upload a block blob with the given name and content.
    ///
    /// Callers are expected to check [`BlobStore::blob_exists`] first;
    /// uploading over an existing blob replaces it.
    async fn upload_blob(&self, name: &str, data: Vec<u8>) -> Result<(), ResourceError>;
}
