//! Deep merge of configuration trees.
//!
//! [`merge`] overlays one configuration onto another without touching either
//! input:
//!
//! - tables present on both sides are merged recursively,
//! - every other value (strings, numbers, booleans, arrays, `null`) in the
//!   overlay replaces the base value wholesale,
//! - keys in [`RESERVED_KEYS`] are never written, at any depth.
//!
//! Imported themes are untrusted text, so the reserved-key rule also applies
//! inside tables and arrays that are copied over wholesale.
//!
//! ```rust
//! use serde_json::json;
//! use shipwright_config::{merge, Config};
//!
//! let base = Config::from_value(json!({"directory": {"style": "cyan", "truncation_length": 3}})).unwrap();
//! let overlay = Config::from_value(json!({"directory": {"style": "bold blue"}})).unwrap();
//!
//! let merged = merge(&base, &overlay);
//! assert_eq!(merged.module_str("directory", "style"), Some("bold blue"));
//! assert_eq!(merged.get_path(&["directory", "truncation_length"]), Some(&json!(3)));
//! ```

use serde_json::{Map, Value};

use crate::config::Config;

/// Keys that are ignored wherever they appear in an overlay.
pub const RESERVED_KEYS: [&str; 3] = ["__proto__", "prototype", "constructor"];

/// Returns true if `key` must never be written by a merge.
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Overlays `overlay` onto `base`, returning the merged configuration.
///
/// An empty overlay returns `base` itself (same handle). An empty base
/// returns the overlay with reserved keys removed; the overlay handle is
/// reused when there was nothing to remove. In every other case the result
/// is a new handle.
pub fn merge(base: &Config, overlay: &Config) -> Config {
    if overlay.is_empty() {
        return base.clone();
    }
    if base.is_empty() {
        return sanitize(overlay);
    }
    Config::from_table(merge_tables(base.as_table(), overlay.as_table()))
}

/// Returns `config` with every reserved key removed, at any depth.
pub fn sanitize(config: &Config) -> Config {
    if table_has_reserved(config.as_table()) {
        Config::from_table(strip_table(config.as_table()))
    } else {
        config.clone()
    }
}

/// Recursive merge of two raw tables. Neither input is modified.
pub fn merge_tables(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut result = base.clone();
    for (key, incoming) in overlay {
        if is_reserved_key(key) {
            tracing::warn!(key = key.as_str(), "skipping reserved key in config overlay");
            continue;
        }
        let merged = match (result.get(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                Value::Object(merge_tables(existing, incoming))
            }
            _ => strip_value(incoming),
        };
        result.insert(key.clone(), merged);
    }
    result
}

fn strip_value(value: &Value) -> Value {
    match value {
        Value::Object(table) => Value::Object(strip_table(table)),
        Value::Array(items) => Value::Array(items.iter().map(strip_value).collect()),
        other => other.clone(),
    }
}

fn strip_table(table: &Map<String, Value>) -> Map<String, Value> {
    table
        .iter()
        .filter(|(key, _)| {
            let reserved = is_reserved_key(key);
            if reserved {
                tracing::warn!(key = key.as_str(), "skipping reserved key in config overlay");
            }
            !reserved
        })
        .map(|(key, value)| (key.clone(), strip_value(value)))
        .collect()
}

fn table_has_reserved(table: &Map<String, Value>) -> bool {
    table
        .iter()
        .any(|(key, value)| is_reserved_key(key) || value_has_reserved(value))
}

fn value_has_reserved(value: &Value) -> bool {
    match value {
        Value::Object(table) => table_has_reserved(table),
        Value::Array(items) => items.iter().any(value_has_reserved),
        _ => false,
    }
}
