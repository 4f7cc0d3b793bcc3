//! Content-addressed disk storage for compiled stylesheets.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use super::entry::CacheEntry;

/// Storage for cached CSS under one directory.
///
/// Each entry is a `<hash>.css` file with a `<hash>.meta.json` sidecar.
pub struct CacheStore {
    /// Root directory for cache.
    root: PathBuf,
}

impl CacheStore {
    /// Create a new cache store.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create cache directory {:?}", self.root))
    }

    /// Get the path for storing an entry's content.
    pub fn content_path(&self, key: &str) -> PathBuf {
        let hash = Sha256::digest(key.as_bytes());
        let hash_str = hex::encode(&hash[..16]);
        self.root.join(format!("{}.css", hash_str))
    }

    fn metadata_path(&self, key: &str) -> PathBuf {
        self.content_path(key).with_extension("meta.json")
    }

    /// Store content and return a cache entry.
    pub fn store(&self, key: &str, content: &str, ttl_seconds: u64) -> Result<CacheEntry> {
        self.ensure_dir()?;

        let content_path = self.content_path(key);
        let temp_path = content_path.with_extension("css.tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &content_path)?;

        let entry = CacheEntry::new(key, ttl_seconds)
            .with_path(&content_path)
            .with_size(content.len() as u64);

        self.save_metadata(&entry)?;

        Ok(entry)
    }

    /// Load a cached entry's metadata.
    pub fn load(&self, key: &str) -> Result<Option<CacheEntry>> {
        let meta_path = self.metadata_path(key);

        if !meta_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&meta_path)?;
        let entry: CacheEntry = serde_json::from_str(&json)
            .with_context(|| format!("Malformed cache metadata {:?}", meta_path))?;

        Ok(Some(entry))
    }

    /// Read the cached content.
    pub fn read_content(&self, entry: &CacheEntry) -> Result<String> {
        let path = entry
            .content_path
            .clone()
            .unwrap_or_else(|| self.content_path(&entry.key));
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cached content from {:?}", path))
    }

    fn save_metadata(&self, entry: &CacheEntry) -> Result<()> {
        let meta_path = self.metadata_path(&entry.key);
        let json = serde_json::to_string_pretty(entry)?;
        fs::write(&meta_path, json)?;
        Ok(())
    }

    /// Remove an entry's CSS and sidecar. Returns whether anything existed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let mut removed = false;
        for path in [self.content_path(key), self.metadata_path(key)] {
            match fs::remove_file(&path) {
                Ok(()) => removed = true,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e).with_context(|| format!("Failed to remove {:?}", path)),
            }
        }
        Ok(removed)
    }

    /// Every readable entry, newest first.
    ///
    /// Sidecars that fail to parse are skipped; they read as misses anyway.
    pub fn list(&self) -> Result<Vec<CacheEntry>> {
        let dir = match fs::read_dir(&self.root) {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to list cache {:?}", self.root))
            }
        };

        let mut entries: Vec<CacheEntry> = dir
            .filter_map(|item| item.ok().map(|item| item.path()))
            .filter(|path| path.to_string_lossy().ends_with(".meta.json"))
            .filter_map(|path| fs::read_to_string(path).ok())
            .filter_map(|json| serde_json::from_str(&json).ok())
            .collect();

        entries.sort_by(|a, b| b.metadata.cached_at.cmp(&a.metadata.cached_at));
        Ok(entries)
    }

    /// Remove every entry. Returns how many there were.
    pub fn clear(&self) -> Result<usize> {
        let entries = self.list()?;
        for entry in &entries {
            if let Err(e) = self.remove(&entry.key) {
                tracing::debug!("Could not remove cache entry {}: {:#}", entry.key, e);
            }
        }
        Ok(entries.len())
    }
}
