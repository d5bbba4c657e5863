//! Azure Developer CLI environment error types.

use thiserror::Error;

/// Errors that can occur while resolving and loading the default azd
/// environment.
#[derive(Debug, Error)]
pub enum AzdEnvError {
    /// The `azd` CLI could not be executed or exited with a failure.
    #[error("Error running azd: {0}")]
    ProcessError(String),

    /// The environment listing could not be parsed.
    #[error("Error parsing azd environment list: {0}")]
    ParseError(String),

    /// No environment is marked as the default.
    #[error("No default azd environment found")]
    NoDefaultEnvironment,

    /// The environment's .env file could not be loaded.
    #[error("Error loading azd env file {path}: {message}")]
    EnvFileError { path: String, message: String },
}

impl AzdEnvError {
    /// Create a process error.
    pub fn process(msg: impl Into<String>) -> Self {
        Self::ProcessError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create an env file error.
    pub fn env_file(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::EnvFileError {
            path: path.into(),
            message: message.into(),
        }
    }
}
