//! Three-tier option resolution.
//!
//! Precedence for a field:
//! 1. an explicit, non-empty value in the scope's stored options
//! 2. the active template's default (header scope only)
//! 3. a literal fallback supplied by the caller
//!
//! Presence decides tier 1, not truthiness: a stored `false` or `0` wins
//! over the template default. Only `null` and `""` count as unset.

use serde_json::Value;

use super::styles::{ResolvedStyleSet, ScopeView};
use super::value::{as_bool, as_f64, as_text};
use crate::options::{is_unset, OptionSet, Scope, ScopedOptions};
use crate::registry::Template;

/// Resolves fields against stored options and a template.
#[derive(Debug, Clone)]
pub struct OptionResolver<'a> {
    template: Option<&'a Template>,
    template_defaults: OptionSet,
    options: &'a ScopedOptions,
}

impl<'a> OptionResolver<'a> {
    /// Create a resolver for one request.
    pub fn new(template: Option<&'a Template>, options: &'a ScopedOptions) -> Self {
        Self {
            template,
            template_defaults: template.map(Template::defaults).unwrap_or_default(),
            options,
        }
    }

    /// Look up a field by scope name, applying tiers 1 and 2.
    ///
    /// An unknown scope name yields `None`, leaving only the caller's
    /// fallback.
    pub fn lookup(&self, scope: &str, field: &str) -> Option<&Value> {
        match Scope::parse(scope) {
            Some(scope) => self.get(scope, field),
            None => {
                tracing::debug!("Unknown option scope '{}' for field '{}'", scope, field);
                None
            }
        }
    }

    /// Look up a field in a known scope, applying tiers 1 and 2.
    pub fn get(&self, scope: Scope, field: &str) -> Option<&Value> {
        if let Some(value) = self.options.get(scope).get(field) {
            if !is_unset(value) {
                return Some(value);
            }
        }

        match scope {
            Scope::Header => self.template_defaults.get(field),
            Scope::Footer | Scope::General => None,
        }
    }

    /// Text value, if tiers 1 or 2 supply one.
    pub fn str(&self, scope: &str, field: &str) -> Option<String> {
        self.lookup(scope, field).and_then(as_text)
    }

    /// Flag value, if tiers 1 or 2 supply one.
    pub fn bool(&self, scope: &str, field: &str) -> Option<bool> {
        self.lookup(scope, field).and_then(as_bool)
    }

    /// Numeric value, if tiers 1 or 2 supply one.
    pub fn f64(&self, scope: &str, field: &str) -> Option<f64> {
        self.lookup(scope, field).and_then(as_f64)
    }

    /// Text value with a literal fallback.
    pub fn str_or(&self, scope: &str, field: &str, fallback: &str) -> String {
        self.lookup(scope, field)
            .and_then(as_text)
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Flag value with a literal fallback.
    pub fn bool_or(&self, scope: &str, field: &str, fallback: bool) -> bool {
        self.lookup(scope, field).and_then(as_bool).unwrap_or(fallback)
    }

    /// Numeric value with a literal fallback.
    pub fn f64_or(&self, scope: &str, field: &str, fallback: f64) -> f64 {
        self.lookup(scope, field).and_then(as_f64).unwrap_or(fallback)
    }

    /// Integer value with a literal fallback. Fractions round to nearest.
    pub fn i64_or(&self, scope: &str, field: &str, fallback: i64) -> i64 {
        self.lookup(scope, field)
            .and_then(as_f64)
            .map(|f| f.round() as i64)
            .unwrap_or(fallback)
    }

    /// Id of the template supplying defaults.
    pub fn template_id(&self) -> Option<&str> {
        self.template.map(|t| t.id.as_str())
    }

    /// Merge every scope into a resolved style set.
    ///
    /// Pure: the same template and options always produce the same set.
    pub fn resolve(&self) -> ResolvedStyleSet {
        ResolvedStyleSet {
            template_id: self.template.map(|t| t.id.clone()),
            header: merge(&self.template_defaults, self.options.get(Scope::Header)),
            footer: merge(&OptionSet::new(), self.options.get(Scope::Footer)),
            general: merge(&OptionSet::new(), self.options.get(Scope::General)),
        }
    }

    /// Typed view over a scope's explicit options only.
    pub fn explicit(&self, scope: Scope) -> ScopeView<'_> {
        ScopeView::new(self.options.get(scope))
    }
}

fn merge(defaults: &OptionSet, explicit: &OptionSet) -> OptionSet {
    let mut out = defaults.clone();
    for (key, value) in explicit {
        if !is_unset(value) {
            out.insert(key.clone(), value.clone());
        }
    }
    out
}
