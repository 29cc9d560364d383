//! Theme-defined named colors.
//!
//! A prompt theme may declare its own color names (for example
//! `primary = "#88c0d0"`) and use them anywhere a color is expected in a
//! style spec. A [`Palette`] holds one such set of definitions; the codec
//! consults it for any token that is not already a builtin color.
//!
//! Definitions resolve a single level: a palette entry may point at a hex
//! literal or a builtin name, but not at another palette entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A set of named color definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: BTreeMap<String, String>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a color definition, returning `self` for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a color definition.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.colors.insert(name.into(), value.into());
    }

    /// Returns the raw definition for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Resolves a color token: builtin colors first, then palette entries.
    pub fn resolve(&self, token: &str) -> Option<Color> {
        Color::parse(token).or_else(|| self.get(token).and_then(Color::parse))
    }
}

impl<K, V> FromIterator<(K, V)> for Palette
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            colors: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
