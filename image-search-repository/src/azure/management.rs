//! ARM management-plane lookups.
//!
//! Two narrow clients: one resolves the embedding function's invoke URL
//! and access key, the other turns a storage account's key listing into a
//! blob connection string. Both navigate the raw response JSON rather
//! than modeling the full ARM envelopes.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error};

use crate::azure::{TokenCache, MANAGEMENT_SCOPE};
use crate::errors::ResourceError;
use crate::interfaces::TokenCredential;

const ARM_ENDPOINT: &str = "https://management.azure.com";
const WEB_API_VERSION: &str = "2022-03-01";
const STORAGE_API_VERSION: &str = "2023-01-01";

/// Client for function app metadata on one subscription.
pub struct FunctionAppClient {
    http: reqwest::Client,
    subscription_id: String,
    tokens: TokenCache,
}

impl FunctionAppClient {
    /// Create a client scoped to the given subscription.
    pub fn new(subscription_id: &str, credential: Arc<dyn TokenCredential>) -> Self {
        Self {
            http: reqwest::Client::new(),
            subscription_id: subscription_id.to_string(),
            tokens: TokenCache::new(credential, MANAGEMENT_SCOPE),
        }
    }

    /// Resolve a function's full invoke URL, including its default key.
    ///
    /// The result has the form `{invoke_url_template}?code={key}` and is
    /// resolved once per provisioning run; both the index vectorizer and
    /// the skillset reuse the same value.
    pub async fn resolve_function_url(
        &self,
        resource_group: &str,
        function_app: &str,
        function_name: &str,
    ) -> Result<String, ResourceError> {
        let function_resource = format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Web/sites/{}/functions/{}",
            ARM_ENDPOINT, self.subscription_id, resource_group, function_app, function_name
        );

        let token = self.tokens.token().await?;

        let function: Value = self
            .request_json(
                self.http
                    .get(&function_resource)
                    .query(&[("api-version", WEB_API_VERSION)])
                    .bearer_auth(&token),
            )
            .await?;

        // The function envelope uses snake_case property names.
        let template = function["properties"]["invoke_url_template"]
            .as_str()
            .ok_or_else(|| ResourceError::missing_property("invoke_url_template"))?
            .to_string();

        let keys: Value = self
            .request_json(
                self.http
                    .post(format!("{}/listkeys", function_resource))
                    .query(&[("api-version", WEB_API_VERSION)])
                    .bearer_auth(&token),
            )
            .await?;
        let key = default_function_key(&keys)
            .ok_or_else(|| ResourceError::missing_property("default function key"))?;

        debug!(function = %function_name, "Resolved function invoke URL");
        Ok(format!("{}?code={}", template, key))
    }

    async fn request_json(&self, request: reqwest::RequestBuilder) -> Result<Value, ResourceError> {
        let response = request
            .send()
            .await
            .map_err(|e| ResourceError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "ARM request failed");
            return Err(ResourceError::api(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| ResourceError::parse(e.to_string()))
    }
}

/// Extract the default function key from a `listkeys` response.
///
/// Depending on the API generation the key appears at the top level or
/// under `properties`; accept either.
fn default_function_key(keys: &Value) -> Option<&str> {
    keys["default"]
        .as_str()
        .or_else(|| keys["properties"]["default"].as_str())
}

/// Client for storage account metadata on one subscription.
pub struct StorageManagementClient {
    http: reqwest::Client,
    subscription_id: String,
    tokens: TokenCache,
}

impl StorageManagementClient {
    /// Create a client scoped to the given subscription.
    pub fn new(subscription_id: &str, credential: Arc<dyn TokenCredential>) -> Self {
        Self {
            http: reqwest::Client::new(),
            subscription_id: subscription_id.to_string(),
            tokens: TokenCache::new(credential, MANAGEMENT_SCOPE),
        }
    }

    /// Build a blob connection string from the account's current keys.
    ///
    /// Keys are listed fresh on every call so the connection string
    /// always carries a currently valid account key.
    pub async fn account_connection_string(
        &self,
        resource_group: &str,
        account_name: &str,
    ) -> Result<String, ResourceError> {
        let url = format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Storage/storageAccounts/{}/listKeys",
            ARM_ENDPOINT, self.subscription_id, resource_group, account_name
        );

        let token = self.tokens.token().await?;

        let response = self
            .http
            .post(&url)
            .query(&[("api-version", STORAGE_API_VERSION)])
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ResourceError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, account = %account_name, "Storage listKeys failed");
            return Err(ResourceError::api(status.as_u16(), body));
        }

        let keys: Value = response
            .json()
            .await
            .map_err(|e| ResourceError::parse(e.to_string()))?;

        let key = keys["keys"][0]["value"]
            .as_str()
            .ok_or_else(|| ResourceError::missing_property("storage account key"))?;

        debug!(account = %account_name, "Resolved storage connection string");
        Ok(build_connection_string(account_name, key))
    }
}

/// Assemble a blob storage connection string for an account key.
fn build_connection_string(account_name: &str, key: &str) -> String {
    format!(
        "DefaultEndpointsProtocol=https;AccountName={};AccountKey={};EndpointSuffix=core.windows.net",
        account_name, key
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_function_key_at_top_level() {
        let keys = json!({"default": "abc"});

        assert_eq!(default_function_key(&keys), Some("abc"));
    }

    #[test]
    fn test_default_function_key_under_properties() {
        let keys = json!({"name": "keys", "properties": {"default": "xyz"}});

        assert_eq!(default_function_key(&keys), Some("xyz"));
    }

    #[test]
    fn test_default_function_key_missing() {
        let keys = json!({"properties": {}});

        assert_eq!(default_function_key(&keys), None);
    }

    #[test]
    fn test_build_connection_string() {
        let connection = build_connection_string("acct", "key==");

        assert_eq!(
            connection,
            "DefaultEndpointsProtocol=https;AccountName=acct;AccountKey=key==;EndpointSuffix=core.windows.net"
        );
    }
}
