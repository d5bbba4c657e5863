//! Indexer definition.
//!
//! The indexer reads from the blob data source, runs the embedding
//! skillset, and writes the enriched documents into the index. Field
//! mappings make the blob path both the `url` field (verbatim) and the
//! `id` key (base64-encoded, since raw paths contain characters the
//! service does not allow in keys).

use serde::Serialize;

use crate::definitions::{SAMPLE_DATASOURCE_NAME, SAMPLE_INDEXER_NAME, SAMPLE_SKILLSET_NAME};

/// An indexer tying a data source, skillset, and target index together.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexerDefinition {
    pub name: String,
    pub description: String,
    pub data_source_name: String,
    pub skillset_name: String,
    pub target_index_name: String,
    pub field_mappings: Vec<FieldMapping>,
    pub output_field_mappings: Vec<FieldMapping>,
}

/// A mapping from a source field to a target index field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    pub source_field_name: String,
    pub target_field_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping_function: Option<FieldMappingFunction>,
}

/// A named transform applied by the service while mapping a field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldMappingFunction {
    pub name: String,
}

/// Build the embedding indexer for the given target index.
pub fn embedding_indexer(index_name: &str) -> IndexerDefinition {
    IndexerDefinition {
        name: SAMPLE_INDEXER_NAME.to_string(),
        description: "Indexer to index documents and generate embeddings".to_string(),
        data_source_name: SAMPLE_DATASOURCE_NAME.to_string(),
        skillset_name: SAMPLE_SKILLSET_NAME.to_string(),
        target_index_name: index_name.to_string(),
        field_mappings: vec![
            FieldMapping {
                source_field_name: "metadata_storage_path".to_string(),
                target_field_name: "url".to_string(),
                mapping_function: None,
            },
            FieldMapping {
                source_field_name: "metadata_storage_path".to_string(),
                target_field_name: "id".to_string(),
                mapping_function: Some(FieldMappingFunction {
                    name: "base64Encode".to_string(),
                }),
            },
        ],
        output_field_mappings: vec![FieldMapping {
            source_field_name: "/document/vector".to_string(),
            target_field_name: "vector".to_string(),
            mapping_function: None,
        }],
    }
}
