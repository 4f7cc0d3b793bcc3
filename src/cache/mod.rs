//! Compiled stylesheet caching.
//!
//! Composing CSS on every page view is wasted work, so the engine keeps the
//! output keyed by a digest of its inputs. Two backends:
//! - [`MemoryCache`] for one process
//! - [`DiskCache`] backed by the content-addressed [`CacheStore`]
//!
//! A cache can only make things faster: every backend failure is logged
//! and reported as a miss.

pub mod entry;
pub mod key;
pub mod store;

pub use entry::{CacheEntry, CacheMetadata};
pub use key::cache_key;
pub use store::CacheStore;

use chrono::Duration;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Default entry lifetime.
pub const DEFAULT_TTL_SECONDS: u64 = 3600;

/// Storage for compiled CSS.
pub trait CssCache: Send + Sync {
    /// Cached CSS for a key, if present and unexpired.
    fn get(&self, key: &str) -> Option<String>;

    /// Store CSS under a key.
    fn set(&self, key: &str, css: &str, ttl_seconds: u64);

    /// Drop every entry. Returns how many were removed.
    fn invalidate_all(&self) -> usize;

    /// Entry count and total size.
    fn stats(&self) -> CacheStats;
}

/// Summary of a cache's contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub total_bytes: u64,
    /// Time until the newest entry expires, in seconds.
    pub newest_remaining_ttl: Option<i64>,
}

/// Per-process cache.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (CacheEntry, String)>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, (CacheEntry, String)>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CssCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some((entry, css)) if !entry.is_expired() => return Some(css.clone()),
            Some(_) => {}
            None => return None,
        }
        entries.remove(key);
        None
    }

    fn set(&self, key: &str, css: &str, ttl_seconds: u64) {
        let entry = CacheEntry::new(key, ttl_seconds).with_size(css.len() as u64);
        self.lock().insert(key.to_string(), (entry, css.to_string()));
    }

    fn invalidate_all(&self) -> usize {
        let mut entries = self.lock();
        let count = entries.len();
        entries.clear();
        count
    }

    fn stats(&self) -> CacheStats {
        let entries = self.lock();
        CacheStats {
            entries: entries.len(),
            total_bytes: entries.values().map(|(e, _)| e.metadata.size_bytes).sum(),
            newest_remaining_ttl: entries
                .values()
                .max_by_key(|(e, _)| e.metadata.cached_at)
                .map(|(e, _)| e.metadata.remaining_ttl()),
        }
    }
}

/// Cache persisted under a directory, shared between processes.
pub struct DiskCache {
    store: CacheStore,
}

impl DiskCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            store: CacheStore::new(root),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &CacheStore {
        &self.store
    }
}

impl CssCache for DiskCache {
    fn get(&self, key: &str) -> Option<String> {
        let entry = match self.store.load(key) {
            Ok(Some(entry)) => entry,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Ignoring unreadable cache entry: {:#}", e);
                return None;
            }
        };

        if entry.is_expired() {
            tracing::debug!("Cache entry {} expired", key);
            if let Err(e) = self.store.remove(key) {
                tracing::warn!("Failed to remove expired cache entry: {:#}", e);
            }
            return None;
        }

        match self.store.read_content(&entry) {
            Ok(css) => Some(css),
            Err(e) => {
                tracing::warn!("Ignoring unreadable cache entry: {:#}", e);
                None
            }
        }
    }

    fn set(&self, key: &str, css: &str, ttl_seconds: u64) {
        if let Err(e) = self.store.store(key, css, ttl_seconds) {
            tracing::warn!("Failed to write CSS cache: {:#}", e);
        }
    }

    fn invalidate_all(&self) -> usize {
        match self.store.clear() {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!("Failed to clear CSS cache: {:#}", e);
                0
            }
        }
    }

    fn stats(&self) -> CacheStats {
        let entries = match self.store.list() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Failed to list CSS cache: {:#}", e);
                Vec::new()
            }
        };
        CacheStats {
            entries: entries.len(),
            total_bytes: entries.iter().map(|e| e.metadata.size_bytes).sum(),
            // list() is newest first
            newest_remaining_ttl: entries.first().map(|e| e.metadata.remaining_ttl()),
        }
    }
}

/// Format a duration for display.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.num_seconds();

    if secs >= 86400 {
        format!("{}d", secs / 86400)
    } else if secs >= 3600 {
        format!("{}h", secs / 3600)
    } else if secs >= 60 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}

/// Format a byte count for display.
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
