//! Admin form submissions.
//!
//! The settings page posts `application/x-www-form-urlencoded` bodies with
//! scope-prefixed field names:
//!
//! ```text
//! header[header_bg_color]=%23ffffff&header[sticky_header]=0&header[sticky_header]=1&_wpnonce=...
//! ```
//!
//! A submission is processed as one whole-scope replace. Repeated names
//! keep the last value, which lets a hidden `0` input precede a checkbox
//! so that an unchecked box still submits an explicit `false`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::schema::{field_def, typed_value};
use super::scope::Scope;
use super::set::OptionSet;
use crate::error::{Result, RossError};

/// Name of the token field.
pub const TOKEN_FIELD: &str = "_wpnonce";

/// Regex for `scope[field]` and `scope[field][sub]` names.
static FIELD_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(header|footer|general)\[([A-Za-z0-9_-]+)\](?:\[([A-Za-z0-9_-]*)\])?$")
        .expect("FIELD_NAME_REGEX must compile")
});

/// A decoded settings form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission {
    /// The scope being replaced.
    pub scope: Scope,
    /// The new option set for the scope.
    pub options: OptionSet,
    /// Submitted security token, if any.
    pub token: Option<String>,
}

impl FormSubmission {
    /// Decode a urlencoded form body.
    ///
    /// The scope comes from the field names, or from a plain `scope` field
    /// when the form carries no scoped fields at all. Mixing scopes in one
    /// submission is rejected.
    pub fn parse(body: &str) -> Result<Self> {
        let mut scope: Option<Scope> = None;
        let mut declared_scope: Option<Scope> = None;
        let mut token = None;
        let mut options = OptionSet::new();

        for (name, value) in url::form_urlencoded::parse(body.trim().as_bytes()) {
            if name == TOKEN_FIELD {
                token = Some(value.into_owned());
                continue;
            }
            if name == "scope" {
                declared_scope = Some(value.parse::<Scope>()?);
                continue;
            }

            let Some(caps) = FIELD_NAME_REGEX.captures(&name) else {
                tracing::debug!("Ignoring unscoped form field '{}'", name);
                continue;
            };

            let field_scope = Scope::parse(&caps[1]).ok_or_else(|| RossError::InvalidForm {
                message: format!("unknown scope in '{}'", name),
            })?;
            match scope {
                Some(existing) if existing != field_scope => {
                    return Err(RossError::InvalidForm {
                        message: format!(
                            "fields for both {} and {} in one submission",
                            existing, field_scope
                        ),
                    });
                }
                _ => scope = Some(field_scope),
            }

            let field = &caps[2];
            match caps.get(3) {
                None => {
                    let value = typed_value(field_def(field_scope, field), &value);
                    options.insert(field.to_string(), value);
                }
                Some(sub) => insert_nested(&mut options, field, sub.as_str(), &value),
            }
        }

        let scope = match (scope, declared_scope) {
            (Some(s), Some(d)) if s != d => {
                return Err(RossError::InvalidForm {
                    message: format!("scope field says {} but fields are for {}", d, s),
                })
            }
            (Some(s), _) | (None, Some(s)) => s,
            (None, None) => {
                return Err(RossError::InvalidForm {
                    message: "no scoped fields and no scope given".to_string(),
                })
            }
        };

        Ok(Self {
            scope,
            options,
            token,
        })
    }
}

/// Insert `field[sub]=value`. An empty `sub` appends to a list.
fn insert_nested(options: &mut OptionSet, field: &str, sub: &str, raw: &str) {
    let entry = options.entry(field.to_string()).or_insert_with(|| {
        if sub.is_empty() {
            Value::Array(Vec::new())
        } else {
            Value::Object(Default::default())
        }
    });

    let value = Value::String(raw.to_string());
    match (entry, sub.is_empty()) {
        (Value::Array(items), true) => items.push(value),
        (Value::Object(map), false) => {
            map.insert(sub.to_string(), value);
        }
        (slot, _) => {
            // Shape changed mid-form: the later shape wins.
            *slot = if sub.is_empty() {
                Value::Array(vec![value])
            } else {
                let mut map = serde_json::Map::new();
                map.insert(sub.to_string(), value);
                Value::Object(map)
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_scoped_fields_and_token() {
        let form = FormSubmission::parse(
            "header%5Bheader_bg_color%5D=%23ffffff&header%5Bheader_height%5D=80&_wpnonce=abc123",
        )
        .unwrap();

        assert_eq!(form.scope, Scope::Header);
        assert_eq!(form.token.as_deref(), Some("abc123"));
        assert_eq!(form.options["header_bg_color"], json!("#ffffff"));
        assert_eq!(form.options["header_height"], json!(80));
    }

    #[test]
    fn unencoded_brackets_also_parse() {
        let form = FormSubmission::parse("footer[footer_bg_color]=%23111").unwrap();
        assert_eq!(form.scope, Scope::Footer);
        assert_eq!(form.options["footer_bg_color"], json!("#111"));
    }

    #[test]
    fn hidden_zero_then_checkbox_keeps_last_value() {
        let checked =
            FormSubmission::parse("header[sticky_header]=0&header[sticky_header]=1").unwrap();
        assert_eq!(checked.options["sticky_header"], json!(true));

        let unchecked = FormSubmission::parse("header[sticky_header]=0").unwrap();
        assert_eq!(unchecked.options["sticky_header"], json!(false));
    }

    #[test]
    fn empty_values_are_kept_as_empty_strings() {
        let form = FormSubmission::parse("header[header_accent_color]=").unwrap();
        assert_eq!(form.options["header_accent_color"], json!(""));
    }

    #[test]
    fn nested_fields_build_objects_and_lists() {
        let form = FormSubmission::parse(
            "footer[social_links][facebook]=https%3A%2F%2Ffb.com%2Fross&footer[social_order][]=facebook&footer[social_order][]=x",
        )
        .unwrap();

        assert_eq!(
            form.options["social_links"],
            json!({"facebook": "https://fb.com/ross"})
        );
        assert_eq!(form.options["social_order"], json!(["facebook", "x"]));
    }

    #[test]
    fn mixed_scopes_are_rejected() {
        let err = FormSubmission::parse("header[a]=1&footer[b]=2").unwrap_err();
        assert!(matches!(err, RossError::InvalidForm { .. }));
    }

    #[test]
    fn scope_field_allows_empty_save() {
        let form = FormSubmission::parse("scope=general&_wpnonce=t").unwrap();
        assert_eq!(form.scope, Scope::General);
        assert!(form.options.is_empty());
    }

    #[test]
    fn missing_scope_is_rejected() {
        let err = FormSubmission::parse("_wpnonce=t&action=save").unwrap_err();
        assert!(matches!(err, RossError::InvalidForm { .. }));
    }

    #[test]
    fn unknown_scope_field_value_is_rejected() {
        let err = FormSubmission::parse("scope=sidebar").unwrap_err();
        assert!(matches!(err, RossError::UnknownScope { .. }));
    }

    #[test]
    fn unknown_fields_are_kept_as_strings() {
        let form = FormSubmission::parse("general[custom_thing]=42").unwrap();
        assert_eq!(form.options["custom_thing"], json!("42"));
    }
}
