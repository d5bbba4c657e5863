//! Backend configuration from the environment.

use std::env;

use image_search_repository::CredentialKind;

use crate::BackendError;

/// Port the server binds when `PORT` is not set.
const DEFAULT_PORT: u16 = 50505;

/// Startup configuration for the backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Name of the search service (not the full endpoint).
    pub search_service: String,
    /// Name of the index to query.
    pub search_index: String,
    /// Credential strategy, decided once here.
    pub credential_kind: CredentialKind,
    /// Tenant for the developer CLI credential.
    pub tenant_id: Option<String>,
    /// Whether we are running on the hosting platform.
    pub hosted: bool,
    /// Port to listen on.
    pub port: u16,
}

impl BackendConfig {
    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `AZURE_SEARCH_SERVICE`: search service name (required)
    /// - `AZURE_SEARCH_INDEX`: index name (required)
    /// - `AZURE_TENANT_ID`: tenant for the developer credential (required
    ///   when not hosted)
    /// - `WEBSITE_HOSTNAME`: hosting marker; presence selects the managed
    ///   identity credential
    /// - `PORT`: listen port (default 50505)
    pub fn from_env() -> Result<Self, BackendError> {
        let hosted = env::var("WEBSITE_HOSTNAME").is_ok();
        let credential_kind = CredentialKind::for_hosting(hosted);

        let search_service = required_var("AZURE_SEARCH_SERVICE")?;
        let search_index = required_var("AZURE_SEARCH_INDEX")?;

        let tenant_id = match credential_kind {
            CredentialKind::DeveloperCli => Some(required_var("AZURE_TENANT_ID")?),
            CredentialKind::ManagedIdentity => None,
        };

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            search_service,
            search_index,
            credential_kind,
            tenant_id,
            hosted,
            port,
        })
    }

    /// Default tracing filter: verbose locally, quiet when hosted.
    pub fn default_log_filter(&self) -> &'static str {
        if self.hosted {
            "warn"
        } else {
            "info"
        }
    }
}

fn required_var(name: &str) -> Result<String, BackendError> {
    env::var(name)
        .map_err(|_| BackendError::config(format!("Missing required environment variable {}", name)))
}
