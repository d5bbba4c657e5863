//! Search index definition.
//!
//! The image index has three fields: a base64-encoded key, the source
//! blob URL, and the embedding vector searched through an HNSW profile
//! whose vectorizer calls the external embedding function.

use serde::Serialize;

/// Number of dimensions produced by the image embedding function.
pub const VECTOR_DIMENSIONS: u32 = 1024;

const HNSW_ALGORITHM_NAME: &str = "hnsw";
const HNSW_PROFILE_NAME: &str = "hnswProfile";
const CUSTOM_VECTORIZER_NAME: &str = "customVectorizer";

/// A search index schema with vector search configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexDefinition {
    pub name: String,
    pub fields: Vec<SearchFieldDefinition>,
    pub vector_search: VectorSearchConfiguration,
}

/// One field of the index schema.
#[derive(Debug, Clone, Serialize)]
pub struct SearchFieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub key: bool,
    pub searchable: bool,
    pub filterable: bool,
    pub sortable: bool,
    pub facetable: bool,
    pub retrievable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<u32>,
    #[serde(rename = "vectorSearchProfile", skip_serializing_if = "Option::is_none")]
    pub vector_search_profile: Option<String>,
}

/// Vector search configuration: algorithms, profiles, and vectorizers.
#[derive(Debug, Clone, Serialize)]
pub struct VectorSearchConfiguration {
    pub algorithms: Vec<HnswAlgorithmConfiguration>,
    pub profiles: Vec<VectorSearchProfile>,
    pub vectorizers: Vec<CustomVectorizer>,
}

/// One approximate-nearest-neighbor algorithm entry.
#[derive(Debug, Clone, Serialize)]
pub struct HnswAlgorithmConfiguration {
    pub name: String,
    pub kind: String,
}

/// Profile binding a vector field to an algorithm and vectorizer.
#[derive(Debug, Clone, Serialize)]
pub struct VectorSearchProfile {
    pub name: String,
    pub algorithm: String,
    pub vectorizer: String,
}

/// Vectorizer that calls an external web API to embed query text.
#[derive(Debug, Clone, Serialize)]
pub struct CustomVectorizer {
    pub name: String,
    pub kind: String,
    // The field name matches the client model generation this code was
    // written against; the service expects `customWebApiParameters`. See
    // the rewrite in `SearchIndexClient::create_or_update_index`.
    #[serde(rename = "customVectorizerParameters")]
    pub parameters: CustomVectorizerParameters,
}

/// Parameters for a custom vectorizer.
#[derive(Debug, Clone, Serialize)]
pub struct CustomVectorizerParameters {
    pub uri: String,
}

/// Build the image index definition.
///
/// `vectorizer_url` is the embedding function's invoke URL including its
/// access key; the same URL is used by the skillset at ingestion time.
pub fn image_index(name: &str, vectorizer_url: &str) -> SearchIndexDefinition {
    let fields = vec![
        SearchFieldDefinition {
            name: "id".to_string(),
            field_type: "Edm.String".to_string(),
            key: true,
            searchable: false,
            filterable: true,
            sortable: true,
            facetable: false,
            retrievable: true,
            dimensions: None,
            vector_search_profile: None,
        },
        SearchFieldDefinition {
            name: "url".to_string(),
            field_type: "Edm.String".to_string(),
            key: false,
            searchable: false,
            filterable: false,
            sortable: false,
            facetable: false,
            retrievable: true,
            dimensions: None,
            vector_search_profile: None,
        },
        SearchFieldDefinition {
            name: "vector".to_string(),
            field_type: "Collection(Edm.Single)".to_string(),
            key: false,
            searchable: true,
            filterable: false,
            sortable: false,
            facetable: false,
            retrievable: true,
            dimensions: Some(VECTOR_DIMENSIONS),
            vector_search_profile: Some(HNSW_PROFILE_NAME.to_string()),
        },
    ];

    let vector_search = VectorSearchConfiguration {
        algorithms: vec![HnswAlgorithmConfiguration {
            name: HNSW_ALGORITHM_NAME.to_string(),
            kind: "hnsw".to_string(),
        }],
        profiles: vec![VectorSearchProfile {
            name: HNSW_PROFILE_NAME.to_string(),
            algorithm: HNSW_ALGORITHM_NAME.to_string(),
            vectorizer: CUSTOM_VECTORIZER_NAME.to_string(),
        }],
        vectorizers: vec![CustomVectorizer {
            name: CUSTOM_VECTORIZER_NAME.to_string(),
            kind: "customWebApi".to_string(),
            parameters: CustomVectorizerParameters {
                uri: vectorizer_url.to_string(),
            },
        }],
    };

    SearchIndexDefinition {
        name: name.to_string(),
        fields,
        vector_search,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_field_wiring() {
        let index = image_index("images", "https://fn.example.com/api/embed?code=key");
        let value = serde_json::to_value(&index).unwrap();

        let fields = value["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 3);

        assert_eq!(fields[0]["name"], "id");
        assert_eq!(fields[0]["type"], "Edm.String");
        assert_eq!(fields[0]["key"], true);
        assert_eq!(fields[0]["sortable"], true);
        assert_eq!(fields[0]["filterable"], true);

        assert_eq!(fields[1]["name"], "url");
        assert_eq!(fields[1]["retrievable"], true);

        assert_eq!(fields[2]["name"], "vector");
        assert_eq!(fields[2]["type"], "Collection(Edm.Single)");
        assert_eq!(fields[2]["searchable"], true);
        assert_eq!(fields[2]["dimensions"], VECTOR_DIMENSIONS);
        assert_eq!(fields[2]["vectorSearchProfile"], "hnswProfile");
    }

    #[test]
    fn test_profile_references_algorithm_and_vectorizer() {
        let index = image_index("images", "https://fn.example.com/api/embed?code=key");
        let value = serde_json::to_value(&index).unwrap();

        let vector_search = &value["vectorSearch"];
        assert_eq!(vector_search["algorithms"][0]["name"], "hnsw");
        assert_eq!(vector_search["algorithms"][0]["kind"], "hnsw");
        assert_eq!(vector_search["profiles"][0]["algorithm"], "hnsw");
        assert_eq!(vector_search["profiles"][0]["vectorizer"], "customVectorizer");
        assert_eq!(vector_search["vectorizers"][0]["name"], "customVectorizer");
        assert_eq!(
            vector_search["vectorizers"][0]["customVectorizerParameters"]["uri"],
            "https://fn.example.com/api/embed?code=key"
        );
    }

    #[test]
    fn test_definition_is_deterministic() {
        let first = serde_json::to_value(image_index("images", "https://fn/api")).unwrap();
        let second = serde_json::to_value(image_index("images", "https://fn/api")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_scalar_fields_omit_vector_attributes() {
        let index = image_index("images", "https://fn/api");
        let value = serde_json::to_value(&index).unwrap();

        assert!(value["fields"][0].get("dimensions").is_none());
        assert!(value["fields"][1].get("vectorSearchProfile").is_none());
    }
}
