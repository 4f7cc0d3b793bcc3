//! ross-styles - option resolution and dynamic CSS for the Ross theme.
//!
//! Site owners customize the header, footer and general look through
//! stored options. Header options fall back to the defaults of a named
//! template; the merged result is turned into a deterministic stylesheet
//! that is cached until the next save.
//!
//! # Modules
//!
//! - [`cache`] - Compiled stylesheet caching (memory and disk)
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`css`] - Concern-based CSS composition
//! - [`engine`] - The read and write request pipeline
//! - [`error`] - Error types and result aliases
//! - [`options`] - Option scopes, storage, form decoding, and resets
//! - [`registry`] - Built-in header templates
//! - [`resolve`] - Three-tier option resolution
//! - [`security`] - Per-action security tokens
//! - [`ui`] - Terminal output and confirmation prompts
//!
//! # Example
//!
//! ```
//! use ross_styles::engine::{EngineSettings, StyleEngine};
//! use ross_styles::options::MemoryStore;
//! use ross_styles::registry::Registry;
//! use ross_styles::security::TokenSigner;
//!
//! let mut engine = StyleEngine::new(
//!     MemoryStore::new(),
//!     Registry::builtin().unwrap(),
//!     TokenSigner::new("site-secret"),
//!     EngineSettings::default(),
//! );
//!
//! let token = engine.token("ross_save_header");
//! engine
//!     .save_form(&format!("header[header_bg_color]=%23101010&_wpnonce={}", token))
//!     .unwrap();
//!
//! assert!(engine.render_css().unwrap().contains("#101010"));
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod css;
pub mod engine;
pub mod error;
pub mod options;
pub mod registry;
pub mod resolve;
pub mod security;
pub mod ui;

pub use error::{Result, RossError};
