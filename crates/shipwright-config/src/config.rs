//! The configuration tree of a prompt theme.
//!
//! A [`Config`] is an immutable, cheaply clonable handle over a JSON-style
//! table. Every edit produces a new handle; untouched revisions can be
//! compared by identity with [`Config::ptr_eq`] as well as by content.
//!
//! # Reading and writing
//!
//! Themes are stored as Starship TOML. JSON is accepted as well, since the
//! two formats describe the same tree:
//!
//! ```rust
//! use shipwright_config::Config;
//!
//! let config = Config::from_toml(r#"
//! format = "$directory$character"
//!
//! [directory]
//! style = "bold cyan"
//! "#).unwrap();
//!
//! assert_eq!(config.format(), Some("$directory$character"));
//! assert_eq!(config.module_str("directory", "style"), Some("bold cyan"));
//!
//! let round_trip = Config::from_toml(&config.to_toml().unwrap()).unwrap();
//! assert_eq!(round_trip, config);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use shipwright_style::Palette;

use crate::error::{ConfigError, Result};

/// Name of the palette used when a theme does not select one.
pub const DEFAULT_PALETTE: &str = "global";

/// A nested theme configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    root: Arc<Map<String, Value>>,
}

impl Config {
    /// Wraps an already-built table.
    pub fn from_table(table: Map<String, Value>) -> Self {
        Self {
            root: Arc::new(table),
        }
    }

    /// Builds a config from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(table) => Ok(Self::from_table(table)),
            other => Err(ConfigError::NotATable {
                found: value_kind(&other),
            }),
        }
    }

    /// Parses JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Parses Starship TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Self::from_value(toml::from_str(text)?)
    }

    /// Writes the configuration as TOML.
    ///
    /// TOML has no null, so `null` entries are left out.
    pub fn to_toml(&self) -> Result<String> {
        let pruned = prune_nulls(&self.root);
        Ok(toml::to_string(&pruned)?)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&*self.root)?)
    }

    /// Returns a copy of the tree as a JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object((*self.root).clone())
    }

    pub fn as_table(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    /// Returns true if both handles share the same tree.
    pub fn ptr_eq(&self, other: &Config) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }

    /// Top-level lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Nested lookup through tables.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.root.get(*first)?;
        for key in rest {
            current = current.as_object()?.get(*key)?;
        }
        Some(current)
    }

    /// The top-level `format` string, if present.
    pub fn format(&self) -> Option<&str> {
        self.get("format").and_then(Value::as_str)
    }

    /// The configuration table of a module, if it is a table.
    pub fn module(&self, name: &str) -> Option<&Map<String, Value>> {
        self.get(name).and_then(Value::as_object)
    }

    /// A string setting inside a module table.
    pub fn module_str(&self, module: &str, key: &str) -> Option<&str> {
        self.module(module)?.get(key)?.as_str()
    }

    /// Returns true if the module table sets `disabled = true`.
    pub fn is_disabled(&self, module: &str) -> bool {
        self.module(module)
            .and_then(|table| table.get("disabled"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// The definition of a user-defined module under `[custom.<name>]`.
    pub fn custom_module(&self, name: &str) -> Option<&Map<String, Value>> {
        self.module("custom")?.get(name)?.as_object()
    }

    /// Name of the active palette (`palette` key, default `global`).
    pub fn palette_name(&self) -> &str {
        self.get("palette")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PALETTE)
    }

    /// The active palette. Non-string entries are ignored.
    pub fn active_palette(&self) -> Palette {
        self.get_path(&["palettes", self.palette_name()])
            .and_then(Value::as_object)
            .map(|table| {
                table
                    .iter()
                    .filter_map(|(name, value)| value.as_str().map(|v| (name.as_str(), v)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns a new revision with `key` set at the top level.
    pub fn with(&self, key: impl Into<String>, value: Value) -> Config {
        let mut table = (*self.root).clone();
        table.insert(key.into(), value);
        Self::from_table(table)
    }

    /// Returns a new revision without `key`, or this handle if it is absent.
    pub fn without(&self, key: &str) -> Config {
        if !self.root.contains_key(key) {
            return self.clone();
        }
        let mut table = (*self.root).clone();
        table.remove(key);
        Self::from_table(table)
    }

    /// Overlays `overlay` onto this configuration. See [`crate::merge`].
    pub fn merge(&self, overlay: &Config) -> Config {
        crate::merge::merge(self, overlay)
    }
}

impl From<Map<String, Value>> for Config {
    fn from(table: Map<String, Value>) -> Self {
        Self::from_table(table)
    }
}

impl Serialize for Config {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(Self::from_table)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}

fn prune_nulls(table: &Map<String, Value>) -> Map<String, Value> {
    table
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), prune_value(value)))
        .collect()
}

fn prune_value(value: &Value) -> Value {
    match value {
        Value::Object(table) => Value::Object(prune_nulls(table)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .filter(|item| !item.is_null())
                .map(prune_value)
                .collect(),
        ),
        other => other.clone(),
    }
}
