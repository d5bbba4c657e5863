//! Skillset definition.
//!
//! One web API skill posts batches of blob URLs to the embedding function
//! and maps the returned vectors into the enriched document tree.

use serde::Serialize;

use crate::definitions::SAMPLE_SKILLSET_NAME;

/// How many images are sent to the embedding function per request.
const EMBEDDING_BATCH_SIZE: u32 = 10;

/// A skillset: the enrichment pipeline applied to each ingested document.
#[derive(Debug, Clone, Serialize)]
pub struct SkillsetDefinition {
    pub name: String,
    pub description: String,
    pub skills: Vec<WebApiSkill>,
}

/// A skill that calls an external web API for enrichment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApiSkill {
    #[serde(rename = "@odata.type")]
    pub odata_type: String,
    pub description: String,
    pub context: String,
    pub uri: String,
    pub http_method: String,
    pub batch_size: u32,
    pub inputs: Vec<InputFieldMapping>,
    pub outputs: Vec<OutputFieldMapping>,
}

/// Input binding from the document tree into a skill parameter.
#[derive(Debug, Clone, Serialize)]
pub struct InputFieldMapping {
    pub name: String,
    pub source: String,
}

/// Output binding from a skill result into the document tree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFieldMapping {
    pub name: String,
    pub target_name: String,
}

/// Build the embedding skillset.
///
/// `function_url` is the embedding function's invoke URL including its
/// access key, the same value wired into the index vectorizer.
pub fn embedding_skillset(function_url: &str) -> SkillsetDefinition {
    let embedding_skill = WebApiSkill {
        odata_type: "#Microsoft.Skills.Custom.WebApiSkill".to_string(),
        description: "Skill to generate image embeddings via a custom endpoint".to_string(),
        context: "/document".to_string(),
        uri: function_url.to_string(),
        http_method: "POST".to_string(),
        batch_size: EMBEDDING_BATCH_SIZE,
        inputs: vec![
            InputFieldMapping {
                name: "imageUrl".to_string(),
                source: "/document/metadata_storage_path".to_string(),
            },
            InputFieldMapping {
                name: "sasToken".to_string(),
                source: "/document/metadata_storage_sas_token".to_string(),
            },
        ],
        outputs: vec![OutputFieldMapping {
            name: "vector".to_string(),
            target_name: "vector".to_string(),
        }],
    };

    SkillsetDefinition {
        name: SAMPLE_SKILLSET_NAME.to_string(),
        description: "Skillset to generate embeddings for input images".to_string(),
        skills: vec![embedding_skill],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skillset_wire_shape() {
        let skillset = embedding_skillset("https://fn.example.com/api/embed?code=key");
        let value = serde_json::to_value(&skillset).unwrap();

        assert_eq!(value["name"], SAMPLE_SKILLSET_NAME);
        let skill = &value["skills"][0];
        assert_eq!(skill["@odata.type"], "#Microsoft.Skills.Custom.WebApiSkill");
        assert_eq!(skill["context"], "/document");
        assert_eq!(skill["httpMethod"], "POST");
        assert_eq!(skill["batchSize"], EMBEDDING_BATCH_SIZE);
        assert_eq!(skill["uri"], "https://fn.example.com/api/embed?code=key");
    }

    #[test]
    fn test_skill_bindings() {
        let skillset = embedding_skillset("https://fn/api");
        let value = serde_json::to_value(&skillset).unwrap();

        let inputs = value["skills"][0]["inputs"].as_array().unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0]["name"], "imageUrl");
        assert_eq!(inputs[0]["source"], "/document/metadata_storage_path");
        assert_eq!(inputs[1]["name"], "sasToken");
        assert_eq!(inputs[1]["source"], "/document/metadata_storage_sas_token");

        let outputs = value["skills"][0]["outputs"].as_array().unwrap();
        assert_eq!(outputs[0]["name"], "vector");
        assert_eq!(outputs[0]["targetName"], "vector");
    }
}
