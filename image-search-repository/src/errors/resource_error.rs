//! Resource error types.
//!
//! This module defines the error types that can occur while provisioning
//! remote resources (index, data source, skillset, indexer, blobs) or
//! resolving their supporting metadata.

use thiserror::Error;

use crate::errors::CredentialError;

/// Errors that can occur during remote resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A remote request could not be sent.
    #[error("Resource request error: {0}")]
    RequestError(String),

    /// The remote service rejected the request.
    #[error("Resource operation returned status {status}: {body}")]
    ApiError { status: u16, body: String },

    /// A response could not be parsed.
    #[error("Resource response parse error: {0}")]
    ParseError(String),

    /// A definition could not be serialized for transmission.
    #[error("Resource serialization error: {0}")]
    SerializationError(String),

    /// An expected property was absent from a response.
    #[error("Missing property in response: {0}")]
    MissingProperty(String),

    /// A configured URL is not valid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Token acquisition failed.
    #[error("Resource credential error: {0}")]
    CredentialError(#[from] CredentialError),
}

impl ResourceError {
    /// Create a request error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::RequestError(msg.into())
    }

    /// Create an API error from a response status and body.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            body: body.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a missing property error.
    pub fn missing_property(msg: impl Into<String>) -> Self {
        Self::MissingProperty(msg.into())
    }

    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }
}
