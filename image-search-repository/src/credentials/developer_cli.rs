//! Azure Developer CLI credential.
//!
//! Delegates token acquisition to the `azd` CLI the developer is already
//! logged in with. Each request shells out to `azd auth token` and parses
//! its JSON envelope.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use crate::errors::CredentialError;
use crate::interfaces::{AccessToken, TokenCredential};
use async_trait::async_trait;

/// Token envelope printed by `azd auth token --output json`.
#[derive(Debug, Deserialize)]
struct AzdTokenEnvelope {
    token: String,
    #[serde(rename = "expiresOn")]
    expires_on: String,
}

/// Credential backed by the logged-in Azure Developer CLI.
pub struct AzureDeveloperCliCredential {
    tenant_id: Option<String>,
}

impl AzureDeveloperCliCredential {
    /// Create a new developer CLI credential.
    ///
    /// When `tenant_id` is set, tokens are requested for that tenant.
    pub fn new(tenant_id: Option<String>) -> Self {
        Self { tenant_id }
    }
}

#[async_trait]
impl TokenCredential for AzureDeveloperCliCredential {
    async fn get_token(&self, scope: &str) -> Result<AccessToken, CredentialError> {
        let mut command = Command::new("azd");
        command.args(["auth", "token", "--output", "json", "--scope", scope]);
        if let Some(tenant_id) = &self.tenant_id {
            command.args(["--tenant-id", tenant_id]);
        }

        let output = command
            .output()
            .await
            .map_err(|e| CredentialError::process(format!("Failed to run azd auth token: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CredentialError::token(format!(
                "azd auth token exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let token = parse_token_envelope(&output.stdout)?;
        debug!(scope = %scope, expires_on = %token.expires_on, "Acquired token via azd");
        Ok(token)
    }
}

/// Parse the JSON envelope `azd auth token` writes to stdout.
fn parse_token_envelope(stdout: &[u8]) -> Result<AccessToken, CredentialError> {
    let envelope: AzdTokenEnvelope = serde_json::from_slice(stdout)
        .map_err(|e| CredentialError::parse(format!("Invalid azd token output: {}", e)))?;

    let expires_on = DateTime::parse_from_rfc3339(&envelope.expires_on)
        .map_err(|e| {
            CredentialError::parse(format!(
                "Invalid expiresOn '{}': {}",
                envelope.expires_on, e
            ))
        })?
        .with_timezone(&Utc);

    Ok(AccessToken::new(envelope.token, expires_on))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_envelope() {
        let stdout = br#"{"token": "abc123", "expiresOn": "2030-01-02T03:04:05Z"}"#;

        let token = parse_token_envelope(stdout).unwrap();

        assert_eq!(token.token, "abc123");
        assert_eq!(token.expires_on.to_rfc3339(), "2030-01-02T03:04:05+00:00");
    }

    #[test]
    fn test_parse_token_envelope_rejects_garbage() {
        let result = parse_token_envelope(b"not json");

        assert!(matches!(result, Err(CredentialError::ParseError(_))));
    }

    #[test]
    fn test_parse_token_envelope_rejects_bad_timestamp() {
        let stdout = br#"{"token": "abc123", "expiresOn": "tomorrow"}"#;

        let result = parse_token_envelope(stdout);

        assert!(matches!(result, Err(CredentialError::ParseError(_))));
    }
}
