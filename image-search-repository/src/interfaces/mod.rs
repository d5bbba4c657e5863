//! Trait definitions for the repository crate.
//!
//! These traits form the seams between the application crates and the
//! concrete Azure clients, allowing mock implementations in tests.

pub mod blob_store;
pub mod token_credential;
pub mod vector_search;

pub use blob_store::BlobStore;
pub use token_credential::{AccessToken, TokenCredential};
pub use vector_search::VectorSearchProvider;
