//! Cached bearer token shared by a client's requests.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::errors::CredentialError;
use crate::interfaces::{AccessToken, TokenCredential};

/// Refresh the token when it is this close to expiry.
const REFRESH_WINDOW_SECONDS: i64 = 120;

/// A per-scope token cache in front of a credential.
///
/// The underlying credential may shell out to a CLI or call a metadata
/// endpoint, so tokens are reused until shortly before they expire.
pub(crate) struct TokenCache {
    credential: Arc<dyn TokenCredential>,
    scope: String,
    cached: Mutex<Option<AccessToken>>,
}

impl TokenCache {
    /// Create a cache for the given credential and scope.
    pub(crate) fn new(credential: Arc<dyn TokenCredential>, scope: impl Into<String>) -> Self {
        Self {
            credential,
            scope: scope.into(),
            cached: Mutex::new(None),
        }
    }

    /// Return a valid bearer token, refreshing it if needed.
    pub(crate) async fn token(&self) -> Result<String, CredentialError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if !token.expires_within(REFRESH_WINDOW_SECONDS) {
                return Ok(token.token.clone());
            }
        }

        let fresh = self.credential.get_token(&self.scope).await?;
        let value = fresh.token.clone();
        *cached = Some(fresh);
        Ok(value)
    }
}
