//! Cache entry and metadata types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One compiled stylesheet held by a cache.
///
/// Serialized as the `.meta.json` sidecar of disk entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Hex digest of the inputs the CSS was composed from.
    pub key: String,
    /// Where the CSS lives, for disk entries.
    pub content_path: Option<PathBuf>,
    pub metadata: CacheMetadata,
}

/// Timestamps and size of an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetadata {
    pub cached_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub size_bytes: u64,
}

impl CacheEntry {
    /// Entry cached now, living for `ttl_seconds`.
    pub fn new(key: impl Into<String>, ttl_seconds: u64) -> Self {
        let cached_at = Utc::now();
        let ttl = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);
        let expires_at = cached_at
            .checked_add_signed(Duration::seconds(ttl.min(i64::MAX / 1000)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            key: key.into(),
            content_path: None,
            metadata: CacheMetadata {
                cached_at,
                expires_at,
                size_bytes: 0,
            },
        }
    }

    /// An entry is dead from its expiry instant on; a zero TTL never hits.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.metadata.expires_at
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_path = Some(path.into());
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.metadata.size_bytes = size;
        self
    }
}

impl CacheMetadata {
    /// Seconds until expiry, never negative.
    pub fn remaining_ttl(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds().max(0)
    }
}
