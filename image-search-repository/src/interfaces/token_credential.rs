//! Token credential trait definition.
//!
//! This module defines the abstract interface for acquiring bearer tokens,
//! allowing the hosting-dependent credential variants to be swapped behind
//! one seam.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::errors::CredentialError;

/// A bearer token scoped to one Azure resource.
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// The raw bearer token value.
    pub token: String,
    /// When the token stops being valid.
    pub expires_on: DateTime<Utc>,
}

impl AccessToken {
    /// Create a new access token.
    pub fn new(token: impl Into<String>, expires_on: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_on,
        }
    }

    /// Whether the token expires within the given number of seconds.
    pub fn expires_within(&self, seconds: i64) -> bool {
        Utc::now() + Duration::seconds(seconds) >= self.expires_on
    }
}

/// Abstract interface for acquiring access tokens.
///
/// Implementations must be `Send + Sync` so a single credential can be
/// shared across clients and async tasks.
#[async_trait]
pub trait TokenCredential: Send + Sync {
    /// Acquire a bearer token for the given scope.
    ///
    /// # Arguments
    ///
    /// * `scope` - The OAuth scope, e.g. `https://search.azure.com/.default`
    ///
    /// # Returns
    ///
    /// * `Ok(AccessToken)` - A valid token for the scope
    /// * `Err(CredentialError)` - If acquisition fails
    async fn get_token(&self, scope: &str) -> Result<AccessToken, CredentialError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_within() {
        let soon = AccessToken::new("t", Utc::now() + Duration::seconds(30));
        let later = AccessToken::new("t", Utc::now() + Duration::seconds(3600));

        assert!(soon.expires_within(120));
        assert!(!later.expires_within(120));
    }
}
