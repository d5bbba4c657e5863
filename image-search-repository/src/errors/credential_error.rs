//! Credential error types.
//!
//! This module defines the error types that can occur while acquiring
//! access tokens.

use thiserror::Error;

/// Errors that can occur during token acquisition.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    /// The credential tool or endpoint could not be invoked.
    #[error("Credential process error: {0}")]
    ProcessError(String),

    /// The token request was rejected.
    #[error("Token error: {0}")]
    TokenError(String),

    /// The token response could not be parsed.
    #[error("Token parse error: {0}")]
    ParseError(String),

    /// The token endpoint could not be reached.
    #[error("Token request error: {0}")]
    RequestError(String),
}

impl CredentialError {
    /// Create a process error.
    pub fn process(msg: impl Into<String>) -> Self {
        Self::ProcessError(msg.into())
    }

    /// Create a token error.
    pub fn token(msg: impl Into<String>) -> Self {
        Self::TokenError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a request error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::RequestError(msg.into())
    }
}
