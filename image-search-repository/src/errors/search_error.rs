//! Search error types.
//!
//! This module defines the error types that can occur during search
//! query execution.

use thiserror::Error;

use crate::errors::CredentialError;

/// Errors that can occur while querying the search service.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The search request could not be sent.
    #[error("Search request error: {0}")]
    RequestError(String),

    /// The search service rejected the request.
    #[error("Search service returned status {status}: {body}")]
    ApiError { status: u16, body: String },

    /// The search response could not be parsed.
    #[error("Search response parse error: {0}")]
    ParseError(String),

    /// Token acquisition for the search scope failed.
    #[error("Search credential error: {0}")]
    CredentialError(#[from] CredentialError),
}

impl SearchError {
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
}
