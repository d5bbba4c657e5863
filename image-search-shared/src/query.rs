//! Request and response types for the search endpoint.

use serde::{Deserialize, Serialize};

/// Number of results returned when the caller does not ask for a count.
pub const DEFAULT_RESULT_COUNT: usize = 10;

/// Search text used when the caller omits a query: match everything and
/// let the vector ranking decide the order.
pub const WILDCARD_QUERY: &str = "*";

/// Body of a `POST /search` request.
///
/// Both fields are optional on the wire; omitted fields fall back to the
/// wildcard query and the default result count.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// Free text to search for. Vectorized on the service side.
    #[serde(default = "default_search_text")]
    pub search: String,
    /// Maximum number of results to return.
    #[serde(default = "default_result_count")]
    pub size: usize,
}

fn default_search_text() -> String {
    WILDCARD_QUERY.to_string()
}

fn default_result_count() -> usize {
    DEFAULT_RESULT_COUNT
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            search: default_search_text(),
            size: default_result_count(),
        }
    }
}

/// A single ranked search hit, in the order returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// Similarity score assigned by the search service.
    pub score: f64,
    /// Public URL of the matching image blob.
    pub url: String,
}
