//! # Image Search Shared
//!
//! Shared types for the image search system: the search request/response
//! shapes exchanged with the web backend, and the document key transform
//! applied to blob paths before they become index keys.

pub mod document_key;
pub mod query;

pub use document_key::{decode_document_key, encode_document_key};
pub use query::{SearchRequest, SearchResultItem, DEFAULT_RESULT_COUNT, WILDCARD_QUERY};
