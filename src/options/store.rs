//! Option persistence.
//!
//! [`OptionStore`] is the injected key-value repository the resolver and
//! composer read from. Writes replace a whole scope at once.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::scope::Scope;
use super::set::{coerce_option_set, OptionSet, ScopedOptions};
use crate::error::{Result, RossError};

/// Persistent storage for per-scope option sets.
pub trait OptionStore {
    /// Read the option set for a scope. Missing scopes read as empty.
    fn get_options(&self, scope: Scope) -> Result<OptionSet>;

    /// Replace the option set for a scope wholesale.
    fn set_options(&mut self, scope: Scope, options: OptionSet) -> Result<()>;

    /// Remove the stored option set for a scope.
    fn delete_options(&mut self, scope: Scope) -> Result<()>;

    /// Read every scope.
    fn load_all(&self) -> Result<ScopedOptions> {
        Ok(ScopedOptions {
            header: self.get_options(Scope::Header)?,
            footer: self.get_options(Scope::Footer)?,
            general: self.get_options(Scope::General)?,
        })
    }
}

/// In-memory store, used in tests and when embedding.
///
/// Payloads are held as raw JSON so malformed data can be injected.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    scopes: HashMap<Scope, Value>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw payload without any checks.
    pub fn insert_raw(&mut self, scope: Scope, payload: Value) {
        self.scopes.insert(scope, payload);
    }
}

impl OptionStore for MemoryStore {
    fn get_options(&self, scope: Scope) -> Result<OptionSet> {
        Ok(self
            .scopes
            .get(&scope)
            .cloned()
            .map(|v| coerce_option_set(scope, v))
            .unwrap_or_default())
    }

    fn set_options(&mut self, scope: Scope, options: OptionSet) -> Result<()> {
        self.scopes.insert(scope, Value::Object(options));
        Ok(())
    }

    fn delete_options(&mut self, scope: Scope) -> Result<()> {
        self.scopes.remove(&scope);
        Ok(())
    }
}

/// File-backed store: one JSON document per scope.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document for a scope.
    pub fn scope_path(&self, scope: Scope) -> PathBuf {
        self.root.join(format!("{}.json", scope.as_str()))
    }
}

impl OptionStore for FileStore {
    fn get_options(&self, scope: Scope) -> Result<OptionSet> {
        let path = self.scope_path(scope);

        if !path.exists() {
            return Ok(OptionSet::new());
        }

        let content = fs::read_to_string(&path)?;
        let value = match serde_json::from_str::<Value>(&content) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("Could not parse {}: {}, treating as empty", path.display(), e);
                Value::Null
            }
        };

        Ok(coerce_option_set(scope, value))
    }

    fn set_options(&mut self, scope: Scope, options: OptionSet) -> Result<()> {
        fs::create_dir_all(&self.root)?;

        let path = self.scope_path(scope);
        let content =
            serde_json::to_string_pretty(&options).map_err(|e| RossError::StoreError {
                scope: scope.to_string(),
                message: e.to_string(),
            })?;

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Wrote {} {} options", options.len(), scope);
        Ok(())
    }

    fn delete_options(&mut self, scope: Scope) -> Result<()> {
        let path = self.scope_path(scope);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample() -> OptionSet {
        let mut set = OptionSet::new();
        set.insert("header_bg_color".into(), json!("#ffffff"));
        set.insert("sticky_header".into(), json!(false));
        set
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        store.set_options(Scope::Header, sample()).unwrap();

        let loaded = store.get_options(Scope::Header).unwrap();
        assert_eq!(loaded["sticky_header"], json!(false));
        assert!(store.get_options(Scope::Footer).unwrap().is_empty());
    }

    #[test]
    fn memory_store_coerces_malformed_payload() {
        let mut store = MemoryStore::new();
        store.insert_raw(Scope::General, json!("serialized-garbage"));
        assert!(store.get_options(Scope::General).unwrap().is_empty());
    }

    #[test]
    fn memory_store_set_replaces_whole_scope() {
        let mut store = MemoryStore::new();
        store.set_options(Scope::Header, sample()).unwrap();

        let mut next = OptionSet::new();
        next.insert("header_height".into(), json!(90));
        store.set_options(Scope::Header, next).unwrap();

        let loaded = store.get_options(Scope::Header).unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.get("header_bg_color").is_none());
    }

    #[test]
    fn file_store_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("options"));

        store.set_options(Scope::Header, sample()).unwrap();
        let loaded = store.get_options(Scope::Header).unwrap();

        assert_eq!(loaded, sample());
        assert!(store.scope_path(Scope::Header).exists());
    }

    #[test]
    fn file_store_missing_scope_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());
        assert!(store.get_options(Scope::Footer).unwrap().is_empty());
    }

    #[test]
    fn file_store_malformed_json_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());
        fs::write(store.scope_path(Scope::Header), "{not json").unwrap();
        assert!(store.get_options(Scope::Header).unwrap().is_empty());
    }

    #[test]
    fn file_store_non_object_json_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());
        fs::write(store.scope_path(Scope::Header), "[1,2,3]").unwrap();
        assert!(store.get_options(Scope::Header).unwrap().is_empty());
    }

    #[test]
    fn file_store_delete() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());
        store.set_options(Scope::Footer, sample()).unwrap();
        store.delete_options(Scope::Footer).unwrap();
        assert!(!store.scope_path(Scope::Footer).exists());
        // deleting again is fine
        store.delete_options(Scope::Footer).unwrap();
    }

    #[test]
    fn load_all_reads_every_scope() {
        let mut store = MemoryStore::new();
        store.set_options(Scope::Footer, sample()).unwrap();
        let all = store.load_all().unwrap();
        assert!(all.header.is_empty());
        assert_eq!(all.footer.len(), 2);
    }
}
