//! Azure REST clients.
//!
//! Thin clients over the service REST APIs: the search data plane, the
//! search management plane, ARM metadata lookups, and blob storage. Each
//! client holds its own cached bearer token for the scope it talks to.

pub mod blob_client;
pub mod index_client;
pub mod indexer_client;
pub mod management;
pub mod search_client;

mod token_cache;

pub use blob_client::BlobContainerClient;
pub use index_client::SearchIndexClient;
pub use indexer_client::SearchIndexerClient;
pub use management::{FunctionAppClient, StorageManagementClient};
pub use search_client::SearchClient;

pub(crate) use token_cache::TokenCache;

/// OAuth scope for the search service planes.
pub const SEARCH_SCOPE: &str = "https://search.azure.com/.default";

/// OAuth scope for ARM management operations.
pub const MANAGEMENT_SCOPE: &str = "https://management.azure.com/.default";

/// OAuth scope for blob storage data operations.
pub const STORAGE_SCOPE: &str = "https://storage.azure.com/.default";

/// API version for the search data and management planes.
///
/// Pinned to the preview generation whose client models still carry the
/// `customVectorizerParameters` name; see `SearchIndexClient`.
pub(crate) const SEARCH_API_VERSION: &str = "2023-10-01-Preview";

/// Endpoint URL for a search service by name.
pub fn search_endpoint(service_name: &str) -> String {
    format!("https://{}.search.windows.net", service_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_endpoint() {
        assert_eq!(
            search_endpoint("my-service"),
            "https://my-service.search.windows.net"
        );
    }
}
