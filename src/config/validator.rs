//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - `default_template` must name a known template
//! - an enabled cache needs a positive TTL
//! - `css.style_id` must be usable as an HTML id

use regex::Regex;
use std::sync::LazyLock;

use crate::config::schema::RossConfig;
use crate::error::{Result, RossError};
use crate::registry::Registry;

static STYLE_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("STYLE_ID_REGEX must compile")
});

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &RossConfig, registry: &Registry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(name) = &config.default_template {
        if registry.get(name).is_none() {
            errors.push(ValidationError::new(
                "unknown-template",
                format!(
                    "default_template '{}' is not a known template (available: {})",
                    name,
                    registry
                        .list()
                        .iter()
                        .map(|t| t.id.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ));
        }
    }

    if config.cache.enabled && config.cache.ttl_seconds == 0 {
        errors.push(ValidationError::new(
            "zero-ttl",
            "cache.ttl_seconds must be greater than 0 when the cache is enabled",
        ));
    }

    if !STYLE_ID_REGEX.is_match(&config.css.style_id) {
        errors.push(ValidationError::new(
            "invalid-style-id",
            format!("css.style_id '{}' is not a valid HTML id", config.css.style_id),
        ));
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &RossConfig, registry: &Registry) -> Result<()> {
    let errors = validate_config(config, registry);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(RossError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::builtin().unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&RossConfig::default(), &registry()).is_ok());
    }

    #[test]
    fn unknown_default_template() {
        let config = RossConfig {
            default_template: Some("neon-club".into()),
            ..Default::default()
        };
        let errors = validate_config(&config, &registry());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "unknown-template");
        assert!(errors[0].message.contains("business-classic"));
    }

    #[test]
    fn zero_ttl_only_matters_when_enabled() {
        let mut config = RossConfig::default();
        config.cache.ttl_seconds = 0;
        assert!(validate_config(&config, &registry())
            .iter()
            .any(|e| e.rule == "zero-ttl"));

        config.cache.enabled = false;
        assert!(validate_config(&config, &registry()).is_empty());
    }

    #[test]
    fn style_id_must_be_html_id() {
        let mut config = RossConfig::default();
        config.css.style_id = "9 bad id".into();
        let err = validate(&config, &registry()).unwrap_err();
        assert!(matches!(err, RossError::ConfigValidationError { .. }));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = RossConfig {
            default_template: Some("nope".into()),
            ..Default::default()
        };
        config.cache.ttl_seconds = 0;
        config.css.style_id = String::new();
        assert_eq!(validate_config(&config, &registry()).len(), 3);
    }
}
