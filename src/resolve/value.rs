//! Loose coercions from stored JSON values.
//!
//! Stored options arrive as whatever the form or an older release wrote:
//! numbers may be strings, flags may be `"1"`. These helpers read them
//! without ever failing; `None` means "not usable as that type".

use serde_json::Value;

use crate::options::schema::parse_flag;

/// Read a value as text. Numbers and booleans are stringified.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read a value as a number. Numeric strings (with an optional `px`
/// suffix) are accepted.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            let trimmed = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
            trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Read a value as a flag. Numbers are true when non-zero.
pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => parse_flag(s),
        _ => None,
    }
}

/// Format a number for CSS output: integers without a decimal point,
/// everything else trimmed to at most three decimals.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        let s = format!("{:.3}", n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_from_scalars() {
        assert_eq!(as_text(&json!("left")), Some("left".to_string()));
        assert_eq!(as_text(&json!(12)), Some("12".to_string()));
        assert_eq!(as_text(&json!(false)), Some("false".to_string()));
        assert_eq!(as_text(&json!("")), None);
        assert_eq!(as_text(&json!([1])), None);
    }

    #[test]
    fn numbers_from_strings() {
        assert_eq!(as_f64(&json!(20)), Some(20.0));
        assert_eq!(as_f64(&json!("20")), Some(20.0));
        assert_eq!(as_f64(&json!("20px")), Some(20.0));
        assert_eq!(as_f64(&json!("0.6")), Some(0.6));
        assert_eq!(as_f64(&json!("tall")), None);
        assert_eq!(as_f64(&json!(true)), None);
    }

    #[test]
    fn zero_is_a_number() {
        assert_eq!(as_f64(&json!(0)), Some(0.0));
        assert_eq!(as_f64(&json!("0")), Some(0.0));
    }

    #[test]
    fn flags() {
        assert_eq!(as_bool(&json!(false)), Some(false));
        assert_eq!(as_bool(&json!(0)), Some(false));
        assert_eq!(as_bool(&json!(1)), Some(true));
        assert_eq!(as_bool(&json!("on")), Some(true));
        assert_eq!(as_bool(&json!("0")), Some(false));
        assert_eq!(as_bool(&json!("perhaps")), None);
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1.25), "1.25");
        assert_eq!(format_number(0.3333333), "0.333");
        assert_eq!(format_number(-2.0), "-2");
    }
}
