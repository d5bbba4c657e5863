//! Index key encoding for blob-backed documents.
//!
//! The indexer maps each blob's storage path into the index key through a
//! base64 transform, because raw URLs contain characters the service does
//! not allow in keys. This module mirrors that transform so callers can
//! compute the key for a known blob URL locally.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Encode a blob path as an index document key.
///
/// Uses URL-safe base64 without padding, keeping the result inside the
/// key alphabet accepted by the search service (letters, digits, `-`, `_`).
pub fn encode_document_key(blob_path: &str) -> String {
    URL_SAFE_NO_PAD.encode(blob_path.as_bytes())
}

/// Decode a document key back into the blob path it was derived from.
///
/// Returns `None` if the key is not valid URL-safe base64 or does not
/// decode to UTF-8.
pub fn decode_document_key(key: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(key.as_bytes()).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_uses_only_allowed_characters() {
        let key = encode_document_key(
            "https://example.blob.core.windows.net/image-embedding-sample-data/forest path.jpg",
        );

        assert!(!key.is_empty());
        assert!(key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert!(!key.contains('+'));
        assert!(!key.contains('/'));
        assert!(!key.contains('='));
    }

    #[test]
    fn test_key_round_trips_to_blob_path() {
        let path = "https://example.blob.core.windows.net/images/waterfall.png";

        let key = encode_document_key(path);

        assert_eq!(decode_document_key(&key).as_deref(), Some(path));
    }

    #[test]
    fn test_key_is_deterministic() {
        let path = "https://example.blob.core.windows.net/images/dunes.jpg";

        assert_eq!(encode_document_key(path), encode_document_key(path));
    }

    #[test]
    fn test_invalid_key_decodes_to_none() {
        assert!(decode_document_key("not*valid*base64").is_none());
    }
}
