//! Vector search provider trait definition.
//!
//! This module defines the abstract interface the web backend queries
//! through. The concrete implementation talks to the Azure search data
//! plane; tests inject mocks.

use async_trait::async_trait;

use crate::errors::SearchError;
use image_search_shared::SearchResultItem;

/// Abstracts the vector search backend the query handler talks to.
///
/// The handler performs no local scoring, filtering, or pagination; all
/// ranking is delegated to the implementation.
#[async_trait]
pub trait VectorSearchProvider: Send + Sync {
    /// Execute a vector query for the given text.
    ///
    /// The text is vectorized on the service side. Results are returned in
    /// the service's ranking order, at most `size` of them, with only the
    /// score and URL populated.
    ///
    /// # Arguments
    ///
    /// * `text` - The query text (may be the wildcard `*`)
    /// * `size` - Maximum number of results to return
    async fn vector_search(
        &self,
        text: &str,
        size: usize,
    ) -> Result<Vec<SearchResultItem>, SearchError>;
}
