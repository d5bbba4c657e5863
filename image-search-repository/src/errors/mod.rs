//! Error types for the repository crate.

pub mod azd_env_error;
pub mod credential_error;
pub mod resource_error;
pub mod search_error;

pub use azd_env_error::AzdEnvError;
pub use credential_error::CredentialError;
pub use resource_error::ResourceError;
pub use search_error::SearchError;
