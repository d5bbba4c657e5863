//! Data source definition.

use serde::Serialize;

use crate::definitions::{SAMPLE_CONTAINER_NAME, SAMPLE_DATASOURCE_NAME};

/// A data source connection binding the indexer to a blob container.
#[derive(Debug, Clone, Serialize)]
pub struct DataSourceDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: String,
    pub credentials: DataSourceCredentials,
    pub container: DataContainer,
}

/// Connection credentials for the data source.
#[derive(Debug, Clone, Serialize)]
pub struct DataSourceCredentials {
    #[serde(rename = "connectionString")]
    pub connection_string: String,
}

/// The container the data source reads from.
#[derive(Debug, Clone, Serialize)]
pub struct DataContainer {
    pub name: String,
}

/// Build the blob data source for the sample container.
///
/// The connection string carries an account key, so definitions built
/// from it must not be logged.
pub fn blob_data_source(connection_string: &str) -> DataSourceDefinition {
    DataSourceDefinition {
        name: SAMPLE_DATASOURCE_NAME.to_string(),
        source_type: "azureblob".to_string(),
        credentials: DataSourceCredentials {
            connection_string: connection_string.to_string(),
        },
        container: DataContainer {
            name: SAMPLE_CONTAINER_NAME.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_source_wire_shape() {
        let data_source = blob_data_source("DefaultEndpointsProtocol=https;AccountName=acct");
        let value = serde_json::to_value(&data_source).unwrap();

        assert_eq!(value["name"], SAMPLE_DATASOURCE_NAME);
        assert_eq!(value["type"], "azureblob");
        assert_eq!(
            value["credentials"]["connectionString"],
            "DefaultEndpointsProtocol=https;AccountName=acct"
        );
        assert_eq!(value["container"]["name"], SAMPLE_CONTAINER_NAME);
    }
}
