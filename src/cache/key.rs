//! Cache key derivation.

use sha2::{Digest, Sha256};

use crate::options::ScopedOptions;

/// Derive the cache key for one stylesheet.
///
/// Hex SHA-256 over the crate version, the active template id, and the
/// canonical JSON of every scope. Any option change in any scope yields a
/// new key, so stale entries are never served even without invalidation.
pub fn cache_key(template_id: &str, options: &ScopedOptions) -> String {
    let mut hasher = Sha256::new();
    hasher.update(env!("CARGO_PKG_VERSION").as_bytes());
    hasher.update(b"\n");
    hasher.update(template_id.as_bytes());
    hasher.update(b"\n");
    hasher.update(options.canonical_json().as_bytes());
    hex::encode(hasher.finalize())
}
