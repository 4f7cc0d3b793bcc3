//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `.ross/config.yml` file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cache::DEFAULT_TTL_SECONDS;

/// Root configuration structure for `.ross/config.yml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RossConfig {
    /// Template used when no `header_template` option is stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template: Option<String>,

    /// Directory holding option sets and the disk cache, relative to the
    /// project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Stylesheet cache settings.
    pub cache: CacheConfig,

    /// Stylesheet output settings.
    pub css: CssConfig,

    /// Action token settings.
    pub security: SecurityConfig,
}

/// Stylesheet cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache compiled CSS at all.
    pub enabled: bool,

    /// Entry lifetime in seconds.
    pub ttl_seconds: u64,

    /// Persist entries on disk instead of per process.
    pub disk: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_seconds: DEFAULT_TTL_SECONDS,
            disk: true,
        }
    }
}

/// Stylesheet output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CssConfig {
    /// `id` attribute of the injected `<style>` element.
    pub style_id: String,

    /// Emit compact CSS.
    #[serde(default, skip_serializing_if = "is_false")]
    pub minify: bool,
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            style_id: default_style_id(),
            minify: false,
        }
    }
}

fn default_style_id() -> String {
    "ross-dynamic-css".to_string()
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Action token settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Secret mixed into every action token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl RossConfig {
    /// Directory for option sets and cache, relative to `project_root`.
    pub fn data_dir(&self, project_root: &std::path::Path) -> PathBuf {
        match &self.data_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => project_root.join(dir),
            None => project_root.join(".ross").join("data"),
        }
    }

    /// Directory for option set documents.
    pub fn options_dir(&self, project_root: &std::path::Path) -> PathBuf {
        self.data_dir(project_root).join("options")
    }

    /// Directory for cached stylesheets.
    pub fn cache_dir(&self, project_root: &std::path::Path) -> PathBuf {
        self.data_dir(project_root).join("cache")
    }
}
