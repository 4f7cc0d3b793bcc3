//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! the project's `.ross` directory in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::RossConfig;
use crate::error::{Result, RossError};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `security.secret`.
pub const SECRET_ENV: &str = "ROSS_SECRET";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.ross/config.yml`)
/// 2. Local overrides (`.ross/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .ross/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .ross/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(".ross").join("config.yml")),
            project_local: existing(project_root.join(".ross").join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if any project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.ross` directory (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(".ross").is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Parse YAML content into RossConfig.
pub fn parse_config(content: &str, source_path: &Path) -> Result<RossConfig> {
    serde_yaml::from_str(content).map_err(|e| RossError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as raw YAML Value (for merging).
///
/// An empty file is treated as an empty mapping.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path)?;

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| RossError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if value.is_null() {
        Ok(serde_yaml::Value::Mapping(Default::default()))
    } else {
        Ok(value)
    }
}

/// Load and merge all config files for a project.
///
/// Missing files are not an error; defaults apply. The `ROSS_SECRET`
/// environment variable overrides `security.secret`.
///
/// # Errors
///
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<RossConfig> {
    let paths = ConfigPaths::discover(project_root);

    let mut configs = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config {}", path.display());
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);

    let mut config: RossConfig =
        serde_yaml::from_value(merged).map_err(|e| RossError::ConfigParseError {
            path: project_root.join(".ross").join("config.yml"),
            message: format!("Failed to parse merged config: {}", e),
        })?;

    apply_env_overrides(&mut config, |name| std::env::var(name).ok());

    Ok(config)
}

/// Apply environment overrides through a lookup function.
pub fn apply_env_overrides(config: &mut RossConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(secret) = lookup(SECRET_ENV).filter(|s| !s.is_empty()) {
        tracing::debug!("Using action secret from {}", SECRET_ENV);
        config.security.secret = Some(secret);
    }
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<RossConfig> {
    match config_override {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let mut config = parse_config(&content, path)?;
            apply_env_overrides(&mut config, |name| std::env::var(name).ok());
            Ok(config)
        }
        None => load_merged_config(project_root),
    }
}
