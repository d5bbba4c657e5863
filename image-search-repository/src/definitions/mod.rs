//! Declarative definitions for the remote search resources.
//!
//! Each definition is a static configuration record: constructed locally,
//! pushed to the service with an idempotent upsert, and discarded. Names
//! are fixed constants so dependent definitions always reference each
//! other consistently.

pub mod data_source;
pub mod index;
pub mod indexer;
pub mod skillset;

pub use data_source::{blob_data_source, DataSourceDefinition};
pub use index::{image_index, SearchIndexDefinition, VECTOR_DIMENSIONS};
pub use indexer::{embedding_indexer, FieldMapping, IndexerDefinition};
pub use skillset::{embedding_skillset, SkillsetDefinition};

/// Blob container holding the sample images.
pub const SAMPLE_CONTAINER_NAME: &str = "image-embedding-sample-data";

/// Data source connection pointing at the sample container.
pub const SAMPLE_DATASOURCE_NAME: &str = "image-embedding-datasource";

/// Skillset that runs the embedding function over ingested blobs.
pub const SAMPLE_SKILLSET_NAME: &str = "image-embedding-skillset";

/// Indexer that ties the data source, skillset, and index together.
pub const SAMPLE_INDEXER_NAME: &str = "image-embedding-indexer";

/// Name of the Azure Function that produces image embeddings.
pub const EMBEDDING_FUNCTION_NAME: &str = "GetImageEmbedding";
