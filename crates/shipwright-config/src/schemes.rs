//! Named color schemes.
//!
//! A scheme assigns a hex color to each semantic [role](ColorScheme::roles).
//! Applying a scheme to a theme writes those roles into `palettes.global`,
//! after which style specs may say `primary` or `bg:background` instead of a
//! literal color.

use serde::Serialize;
use serde_json::{Map, Value};
use shipwright_style::Palette;

use crate::config::{Config, DEFAULT_PALETTE};

/// A set of colors keyed by semantic role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
}

impl ColorScheme {
    /// `(role, color)` pairs in a fixed order.
    pub fn roles(&self) -> [(&'static str, &'static str); 8] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("background", self.background),
            ("foreground", self.foreground),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
        ]
    }

    /// The scheme as a palette of role names.
    pub fn palette(&self) -> Palette {
        self.roles().into_iter().collect()
    }

    /// A config overlay that installs the scheme as `palettes.global`.
    pub fn to_palette_patch(&self) -> Config {
        let colors: Map<String, Value> = self
            .roles()
            .into_iter()
            .map(|(role, color)| (role.to_string(), Value::String(color.to_string())))
            .collect();

        let mut palettes = Map::new();
        palettes.insert(DEFAULT_PALETTE.to_string(), Value::Object(colors));

        let mut root = Map::new();
        root.insert("palettes".to_string(), Value::Object(palettes));
        Config::from_table(root)
    }
}

/// The builtin schemes.
pub static COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        name: "Nord",
        primary: "#88C0D0",
        secondary: "#81A1C1",
        accent: "#5E81AC",
        background: "#2E3440",
        foreground: "#D8DEE9",
        success: "#A3BE8C",
        warning: "#EBCB8B",
        error: "#BF616A",
    },
    ColorScheme {
        name: "Dracula",
        primary: "#BD93F9",
        secondary: "#6272A4",
        accent: "#FF79C6",
        background: "#282A36",
        foreground: "#F8F8F2",
        success: "#50FA7B",
        warning: "#F1FA8C",
        error: "#FF5555",
    },
    ColorScheme {
        name: "Gruvbox",
        primary: "#d79921",
        secondary: "#458588",
        accent: "#b16286",
        background: "#282828",
        foreground: "#ebdbb2",
        success: "#98971a",
        warning: "#fabd2f",
        error: "#cc241d",
    },
    ColorScheme {
        name: "Catppuccin",
        primary: "#cba6f7",
        secondary: "#89b4fa",
        accent: "#f5c2e7",
        background: "#1e1e2e",
        foreground: "#cdd6f4",
        success: "#a6e3a1",
        warning: "#f9e2af",
        error: "#f38ba8",
    },
    ColorScheme {
        name: "TokyoNight",
        primary: "#7aa2f7",
        secondary: "#7dcfff",
        accent: "#bb9af7",
        background: "#1a1b26",
        foreground: "#c0caf5",
        success: "#9ece6a",
        warning: "#e0af68",
        error: "#f7768e",
    },
    ColorScheme {
        name: "OneDark",
        primary: "#61afef",
        secondary: "#c678dd",
        accent: "#98c379",
        background: "#282c34",
        foreground: "#abb2bf",
        success: "#98c379",
        warning: "#e5c07b",
        error: "#e06c75",
    },
    ColorScheme {
        name: "Monokai",
        primary: "#fd971f",
        secondary: "#66d9ef",
        accent: "#ae81ff",
        background: "#272822",
        foreground: "#f8f8f2",
        success: "#a6e22e",
        warning: "#f4bf75",
        error: "#f92672",
    },
    ColorScheme {
        name: "Solarized",
        primary: "#268bd2",
        secondary: "#2aa198",
        accent: "#d33682",
        background: "#002b36",
        foreground: "#839496",
        success: "#859900",
        warning: "#b58900",
        error: "#dc322f",
    },
];

/// Looks up a scheme by name, ignoring ASCII case.
pub fn find_scheme(name: &str) -> Option<&'static ColorScheme> {
    COLOR_SCHEMES
        .iter()
        .find(|scheme| scheme.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipwright_style::Color;

    #[test]
    fn test_all_scheme_colors_parse() {
        for scheme in COLOR_SCHEMES {
            for (role, color) in scheme.roles() {
                assert!(
                    Color::parse(color).is_some(),
                    "{} {} = {}",
                    scheme.name,
                    role,
                    color
                );
            }
        }
    }

    #[test]
    fn test_find_scheme_case_insensitive() {
        assert_eq!(find_scheme("nord").unwrap().primary, "#88C0D0");
        assert_eq!(find_scheme("TOKYONIGHT").unwrap().name, "TokyoNight");
        assert!(find_scheme("Zenburn").is_none());
    }

    #[test]
    fn test_palette_patch_shape() {
        let patch = find_scheme("Dracula").unwrap().to_palette_patch();
        assert_eq!(
            patch.get_path(&["palettes", "global", "accent"]),
            Some(&Value::String("#FF79C6".into()))
        );
        assert_eq!(patch.active_palette().len(), 8);
    }

    #[test]
    fn test_patch_merges_over_existing_palette() {
        let base = Config::from_json(
            r##"{"palettes": {"global": {"primary": "#000000", "custom": "#123456"}}}"##,
        )
        .unwrap();
        let merged = base.merge(&find_scheme("Nord").unwrap().to_palette_patch());
        let palette = merged.active_palette();
        assert_eq!(palette.get("primary"), Some("#88C0D0"));
        assert_eq!(palette.get("custom"), Some("#123456"));
    }
}
