//! Configuration loading, parsing, and validation.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use ross_styles::config::{load_merged_config, validate};
//! use ross_styles::registry::Registry;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let ross_dir = temp.path().join(".ross");
//! fs::create_dir_all(&ross_dir).unwrap();
//! fs::write(ross_dir.join("config.yml"), "default_template: minimal-modern").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config, &Registry::builtin().unwrap()).unwrap();
//! assert_eq!(config.default_template, Some("minimal-modern".to_string()));
//! ```
//!
//! # Configuration File Locations
//!
//! Configuration is discovered and merged in this order:
//! 1. Project config (`.ross/config.yml`)
//! 2. Local overrides (`.ross/config.local.yml`)
//! 3. The `ROSS_SECRET` environment variable (for `security.secret`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    apply_env_overrides, find_project_root, load_config, load_config_value, load_merged_config,
    parse_config, ConfigPaths, SECRET_ENV,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{CacheConfig, CssConfig, RossConfig, SecurityConfig};
pub use validator::{validate, validate_config, ValidationError};
