//! Error types for ross-styles operations.
//!
//! This module defines [`RossError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Malformed stored options are never errors; they are coerced and logged
//! - State-changing actions fail closed on a missing or invalid token
//! - Use `anyhow::Error` (via `RossError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ross-styles operations.
#[derive(Debug, Error)]
pub enum RossError {
    /// Failed to parse a configuration or template file.
    #[error("Failed to parse {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Referenced template does not exist.
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    /// Option scope name is not one of header, footer, general.
    #[error("Unknown option scope: {name}")]
    UnknownScope { name: String },

    /// Reset section is not defined for the scope.
    #[error("Unknown section '{section}' for scope {scope}")]
    UnknownSection { scope: String, section: String },

    /// A state-changing request arrived without a security token.
    #[error("Missing security token for action '{action}'")]
    MissingToken { action: String },

    /// The security token did not match the action.
    #[error("Invalid security token for action '{action}'")]
    InvalidToken { action: String },

    /// Submitted form could not be interpreted.
    #[error("Invalid form submission: {message}")]
    InvalidForm { message: String },

    /// Option store read or write failed.
    #[error("Option store error for {scope}: {message}")]
    StoreError { scope: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ross-styles operations.
pub type Result<T> = std::result::Result<T, RossError>;
