//! Content fingerprints used as entity tags.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Generates a strong ETag (quoted, truncated SHA-256) from raw bytes.
pub fn generate_etag(body: &[u8]) -> String {
    let digest = Sha256::digest(body);
    format!("\"{}\"", hex::encode(&digest[..16]))
}

/// Fingerprints the JSON serialization of `value`.
///
/// Deterministic for a given value: struct fields serialize in declaration order.
pub fn fingerprint<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(value)?;
    Ok(generate_etag(&bytes))
}

/// Weak comparison: a `W/` prefix on either side is ignored.
pub fn etags_match(a: &str, b: &str) -> bool {
    fn opaque(tag: &str) -> &str {
        let tag = tag.trim();
        tag.strip_prefix("W/").unwrap_or(tag)
    }
    opaque(a) == opaque(b)
}

/// Evaluates an `If-None-Match` header value (possibly a comma separated
/// list, or `*`) against the current tag.
pub fn if_none_match_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    let Some(header) = if_none_match else {
        return false;
    };

    header
        .split(',')
        .map(str::trim)
        .any(|tag| tag == "*" || etags_match(tag, etag))
}
