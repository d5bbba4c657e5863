//! Managed identity credential.
//!
//! Acquires tokens from the instance metadata service available to
//! hosted deployments.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::errors::CredentialError;
use crate::interfaces::{AccessToken, TokenCredential};
use async_trait::async_trait;

const IMDS_TOKEN_ENDPOINT: &str = "http://169.254.169.254/metadata/identity/oauth2/token";
const IMDS_API_VERSION: &str = "2018-02-01";

/// Token envelope returned by the instance metadata service.
#[derive(Debug, Deserialize)]
struct ImdsTokenEnvelope {
    access_token: String,
    /// Unix timestamp in seconds, transmitted as a string.
    expires_on: String,
}

/// Credential backed by the hosting platform's managed identity endpoint.
pub struct ManagedIdentityCredential {
    http: reqwest::Client,
    endpoint: String,
}

impl ManagedIdentityCredential {
    /// Create a new managed identity credential.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: IMDS_TOKEN_ENDPOINT.to_string(),
        }
    }
}

impl Default for ManagedIdentityCredential {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenCredential for ManagedIdentityCredential {
    async fn get_token(&self, scope: &str) -> Result<AccessToken, CredentialError> {
        let resource = scope_to_resource(scope);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("api-version", IMDS_API_VERSION), ("resource", &resource)])
            .header("Metadata", "true")
            .send()
            .await
            .map_err(|e| CredentialError::request(format!("IMDS request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CredentialError::token(format!(
                "IMDS returned status {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CredentialError::request(format!("Failed to read IMDS response: {}", e)))?;
        let token = parse_imds_envelope(&body)?;
        debug!(resource = %resource, expires_on = %token.expires_on, "Acquired token via managed identity");
        Ok(token)
    }
}

/// Turn an OAuth scope into the resource identifier IMDS expects.
fn scope_to_resource(scope: &str) -> String {
    scope.trim_end_matches("/.default").to_string()
}

/// Parse the JSON envelope returned by the metadata service.
fn parse_imds_envelope(body: &str) -> Result<AccessToken, CredentialError> {
    let envelope: ImdsTokenEnvelope = serde_json::from_str(body)
        .map_err(|e| CredentialError::parse(format!("Invalid IMDS response: {}", e)))?;

    let expires_on: i64 = envelope.expires_on.parse().map_err(|_| {
        CredentialError::parse(format!("Invalid expires_on '{}'", envelope.expires_on))
    })?;
    let expires_on = DateTime::<Utc>::from_timestamp(expires_on, 0).ok_or_else(|| {
        CredentialError::parse(format!("expires_on out of range: {}", envelope.expires_on))
    })?;

    Ok(AccessToken::new(envelope.access_token, expires_on))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_to_resource_strips_default_suffix() {
        assert_eq!(
            scope_to_resource("https://search.azure.com/.default"),
            "https://search.azure.com"
        );
        assert_eq!(
            scope_to_resource("https://management.azure.com/.default"),
            "https://management.azure.com"
        );
    }

    #[test]
    fn test_parse_imds_envelope() {
        let body = r#"{"access_token": "tok", "expires_on": "1893456000", "token_type": "Bearer"}"#;

        let token = parse_imds_envelope(body).unwrap();

        assert_eq!(token.token, "tok");
        assert_eq!(token.expires_on.timestamp(), 1893456000);
    }

    #[test]
    fn test_parse_imds_envelope_rejects_bad_timestamp() {
        let body = r#"{"access_token": "tok", "expires_on": "soon"}"#;

        assert!(matches!(
            parse_imds_envelope(body),
            Err(CredentialError::ParseError(_))
        ));
    }
}
