//! Layering of config files.
//!
//! `.ross/config.local.yml` sits on top of `.ross/config.yml`. Layers are
//! combined as raw YAML before deserializing, so a local file only needs
//! the keys it changes:
//!
//! - mappings combine key by key, recursively
//! - sequences and scalars from the upper layer replace the lower value
//! - `null` in the upper layer drops the key entirely

use serde_yaml::{Mapping, Value};

/// Layer `overlay` on top of `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let (Value::Mapping(lower), Value::Mapping(upper)) = (base, overlay) else {
        return overlay.clone();
    };

    let mut merged = lower.clone();
    for (key, value) in upper {
        match (value, lower.get(key)) {
            (Value::Null, _) => {
                merged.remove(key);
            }
            (value, Some(existing)) => {
                merged.insert(key.clone(), deep_merge(existing, value));
            }
            (value, None) => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    Value::Mapping(merged)
}

/// Fold layers lowest-priority first.
pub fn merge_configs(layers: &[Value]) -> Value {
    layers
        .iter()
        .fold(Value::Mapping(Mapping::new()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}
