//! Sample asset upload.
//!
//! Pushes the sample images into the blob container, skipping any blob
//! whose name is already present. Blobs are addressed by filename, so a
//! rerun with the same directory uploads nothing.

use std::path::Path;

use tokio::fs;
use tracing::{debug, info};

use crate::ProvisionError;
use image_search_repository::BlobStore;

/// Upload every file in `dir` to the blob container, skipping blobs that
/// already exist. Returns the number of blobs uploaded.
pub async fn upload_sample_assets(
    store: &dyn BlobStore,
    dir: &Path,
) -> Result<usize, ProvisionError> {
    store.ensure_container().await?;

    let mut entries = fs::read_dir(dir).await.map_err(|e| {
        ProvisionError::assets(format!(
            "Failed to read sample directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let mut uploaded = 0;
    while let Some(entry) = entries.next_entry().await.map_err(|e| {
        ProvisionError::assets(format!("Failed to list {}: {}", dir.display(), e))
    })? {
        let file_type = entry.file_type().await.map_err(|e| {
            ProvisionError::assets(format!("Failed to stat {:?}: {}", entry.path(), e))
        })?;
        if !file_type.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };

        if store.blob_exists(name).await? {
            debug!(blob = %name, "Blob already exists, skipping");
            continue;
        }

        let data = fs::read(entry.path()).await.map_err(|e| {
            ProvisionError::assets(format!("Failed to read {:?}: {}", entry.path(), e))
        })?;
        info!(blob = %name, bytes = data.len(), "Uploading sample asset");
        store.upload_blob(name, data).await?;
        uploaded += 1;
    }

    Ok(uploaded)
}
