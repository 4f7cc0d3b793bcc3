//! The per-request resolved style set.

use serde::Serialize;
use serde_json::Value;

use super::value::{as_bool, as_f64, as_text};
use crate::css::color::sanitize_color;
use crate::options::{OptionSet, Scope};

/// Template defaults merged with explicit options, for every scope.
///
/// Computed per request and never persisted. Fields that neither the
/// options nor the template provide are absent; concerns apply their own
/// literal fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedStyleSet {
    /// Id of the template that supplied header defaults.
    pub template_id: Option<String>,
    pub header: OptionSet,
    pub footer: OptionSet,
    pub general: OptionSet,
}

impl ResolvedStyleSet {
    /// Typed read access to one scope.
    pub fn scope(&self, scope: Scope) -> ScopeView<'_> {
        ScopeView(match scope {
            Scope::Header => &self.header,
            Scope::Footer => &self.footer,
            Scope::General => &self.general,
        })
    }

    /// Shorthand for the header scope.
    pub fn header(&self) -> ScopeView<'_> {
        self.scope(Scope::Header)
    }

    /// Shorthand for the footer scope.
    pub fn footer(&self) -> ScopeView<'_> {
        self.scope(Scope::Footer)
    }

    /// Shorthand for the general scope.
    pub fn general(&self) -> ScopeView<'_> {
        self.scope(Scope::General)
    }
}

/// Typed accessors over one resolved scope.
#[derive(Debug, Clone, Copy)]
pub struct ScopeView<'a>(&'a OptionSet);

impl<'a> ScopeView<'a> {
    /// Wrap a bare option set.
    pub fn new(set: &'a OptionSet) -> Self {
        Self(set)
    }

    /// Raw value.
    pub fn raw(&self, field: &str) -> Option<&'a Value> {
        self.0.get(field)
    }

    /// Text value.
    pub fn text(&self, field: &str) -> Option<String> {
        self.0.get(field).and_then(as_text)
    }

    /// Text value with a literal fallback.
    pub fn text_or(&self, field: &str, fallback: &str) -> String {
        self.text(field).unwrap_or_else(|| fallback.to_string())
    }

    /// Numeric value.
    pub fn num(&self, field: &str) -> Option<f64> {
        self.0.get(field).and_then(as_f64)
    }

    /// Numeric value with a literal fallback.
    pub fn num_or(&self, field: &str, fallback: f64) -> f64 {
        self.num(field).unwrap_or(fallback)
    }

    /// Flag value.
    pub fn flag(&self, field: &str) -> Option<bool> {
        self.0.get(field).and_then(as_bool)
    }

    /// Flag value with a literal fallback.
    pub fn flag_or(&self, field: &str, fallback: bool) -> bool {
        self.flag(field).unwrap_or(fallback)
    }

    /// Color value that passed sanitization.
    ///
    /// A present but malformed color reads as `None`, so the rule using
    /// it is skipped.
    pub fn color(&self, field: &str) -> Option<String> {
        let raw = self.text(field)?;
        let clean = sanitize_color(&raw);
        if clean.is_none() {
            tracing::debug!("Skipping malformed color {}={:?}", field, raw);
        }
        clean
    }

    /// Whether the field is present at all.
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}
