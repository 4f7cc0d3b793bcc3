//! Option sets and their defensive coercion.
//!
//! An [`OptionSet`] is the flat key/value record stored for one scope.
//! Values are JSON so nested arrays survive a round trip through the
//! store. The underlying map is ordered, which keeps serialization (and
//! therefore cache keys) stable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::scope::Scope;

/// The persisted, user-editable values for one scope.
pub type OptionSet = Map<String, Value>;

/// Whether a stored value counts as "not set".
///
/// Only `null` and the empty string are unset. `false` and `0` are
/// meaningful explicit values.
pub fn is_unset(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Coerce an arbitrary stored payload into an option set.
///
/// Anything that is not a JSON object becomes an empty set. The `scope`
/// is only used for the log line.
pub fn coerce_option_set(scope: Scope, value: Value) -> OptionSet {
    match value {
        Value::Object(map) => map,
        Value::Null => OptionSet::new(),
        other => {
            tracing::warn!(
                "Stored {} options are not a mapping (found {}), treating as empty",
                scope,
                kind_name(&other)
            );
            OptionSet::new()
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Option sets for every scope, as read for a single request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopedOptions {
    #[serde(default)]
    pub header: OptionSet,
    #[serde(default)]
    pub footer: OptionSet,
    #[serde(default)]
    pub general: OptionSet,
}

impl ScopedOptions {
    /// Create an empty set for every scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the option set for a scope.
    pub fn get(&self, scope: Scope) -> &OptionSet {
        match scope {
            Scope::Header => &self.header,
            Scope::Footer => &self.footer,
            Scope::General => &self.general,
        }
    }

    /// Get a mutable option set for a scope.
    pub fn get_mut(&mut self, scope: Scope) -> &mut OptionSet {
        match scope {
            Scope::Header => &mut self.header,
            Scope::Footer => &mut self.footer,
            Scope::General => &mut self.general,
        }
    }

    /// Builder-style setter used heavily in tests.
    pub fn with(mut self, scope: Scope, key: &str, value: impl Into<Value>) -> Self {
        self.get_mut(scope).insert(key.to_string(), value.into());
        self
    }

    /// Canonical JSON encoding of all scopes.
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_string_and_null_are_unset() {
        assert!(is_unset(&json!("")));
        assert!(is_unset(&Value::Null));
    }

    #[test]
    fn falsy_values_are_set() {
        assert!(!is_unset(&json!(false)));
        assert!(!is_unset(&json!(0)));
        assert!(!is_unset(&json!("0")));
        assert!(!is_unset(&json!(" ")));
    }

    #[test]
    fn object_payload_is_kept() {
        let set = coerce_option_set(Scope::Header, json!({"header_height": 80}));
        assert_eq!(set["header_height"], 80);
    }

    #[test]
    fn non_object_payloads_become_empty() {
        assert!(coerce_option_set(Scope::Header, json!("a:1:{}")).is_empty());
        assert!(coerce_option_set(Scope::Footer, json!([1, 2, 3])).is_empty());
        assert!(coerce_option_set(Scope::General, json!(42)).is_empty());
        assert!(coerce_option_set(Scope::General, Value::Null).is_empty());
    }

    #[test]
    fn canonical_json_is_key_ordered() {
        let a = ScopedOptions::new()
            .with(Scope::Header, "b", 1)
            .with(Scope::Header, "a", 2);
        let b = ScopedOptions::new()
            .with(Scope::Header, "a", 2)
            .with(Scope::Header, "b", 1);
        assert_eq!(a.canonical_json(), b.canonical_json());
    }

    #[test]
    fn scoped_get_mut_targets_scope() {
        let mut opts = ScopedOptions::new();
        opts.get_mut(Scope::Footer)
            .insert("footer_bg_color".into(), json!("#222"));
        assert!(opts.get(Scope::Header).is_empty());
        assert_eq!(opts.get(Scope::Footer)["footer_bg_color"], "#222");
    }
}
