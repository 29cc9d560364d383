//! Builtin themes offered in the gallery.
//!
//! Three hand-written presets come first, followed by one preset per
//! [color scheme](shipwright_config::COLOR_SCHEMES) that paints the default
//! prompt in the scheme's colors. Every preset carries a stable id such as
//! `preset-nord` and `is_preset = true`.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};
use shipwright_config::{find_scheme, ColorScheme, Config};

use crate::theme::{Theme, ThemeMetadata};

/// 2024-01-01T00:00:00Z, the date every preset claims.
const PRESET_EPOCH_SECS: i64 = 1_704_067_200;

struct SchemePreset {
    scheme: &'static str,
    id: &'static str,
    name: &'static str,
    description: &'static str,
    author: &'static str,
    tags: &'static [&'static str],
    glyph: &'static str,
}

const SCHEME_PRESETS: &[SchemePreset] = &[
    SchemePreset {
        scheme: "Nord",
        id: "preset-nord",
        name: "Nord",
        description: "Nord color scheme based theme",
        author: "Arctic Ice Studio",
        tags: &["aesthetic", "dark"],
        glyph: "➜",
    },
    SchemePreset {
        scheme: "Dracula",
        id: "preset-dracula",
        name: "Dracula",
        description: "Dracula color scheme",
        author: "Dracula Theme",
        tags: &["aesthetic", "dark", "vampire"],
        glyph: "⚡",
    },
    SchemePreset {
        scheme: "Gruvbox",
        id: "preset-gruvbox",
        name: "Gruvbox",
        description: "Retro groove color scheme",
        author: "morhetz",
        tags: &["retro", "warm", "dark"],
        glyph: "➜",
    },
    SchemePreset {
        scheme: "Catppuccin",
        id: "preset-catppuccin",
        name: "Catppuccin",
        description: "Soothing pastel theme",
        author: "Catppuccin",
        tags: &["pastel", "aesthetic"],
        glyph: "➜",
    },
    SchemePreset {
        scheme: "TokyoNight",
        id: "preset-tokyonight",
        name: "Tokyo Night",
        description: "A clean, dark Visual Studio Code theme",
        author: "enkia",
        tags: &["night", "dark", "vscode"],
        glyph: "➜",
    },
    SchemePreset {
        scheme: "OneDark",
        id: "preset-onedark",
        name: "One Dark",
        description: "Atom One Dark theme",
        author: "Atom",
        tags: &["dark", "atom"],
        glyph: "➜",
    },
    SchemePreset {
        scheme: "Monokai",
        id: "preset-monokai",
        name: "Monokai",
        description: "The classic Monokai theme",
        author: "Monokai",
        tags: &["classic", "high-contrast"],
        glyph: "➜",
    },
    SchemePreset {
        scheme: "Solarized",
        id: "preset-solarized",
        name: "Solarized Dark",
        description: "Precision colors for machines and people",
        author: "Ethan Schoonover",
        tags: &["classic", "solarized"],
        glyph: "➜",
    },
];

static PRESETS: Lazy<Vec<Theme>> = Lazy::new(|| {
    let mut presets = vec![
        preset(
            "preset-clean",
            "Clean",
            "Minimalist theme with just the essentials",
            "Starship Team",
            &["minimal", "clean"],
            config(json!({
                "format": "$directory$git_branch$character",
                "directory": {"truncation_length": 3, "style": "bold cyan"},
                "git_branch": {"style": "bold purple", "symbol": "🌱 "},
                "character": {
                    "success_symbol": "[❯](bold green)",
                    "error_symbol": "[❯](bold red)"
                }
            })),
        ),
        preset(
            "preset-oneline",
            "One Line",
            "Compact single-line prompt",
            "Starship Team",
            &["minimal", "compact"],
            config(json!({
                "add_newline": false,
                "format": "$username@$hostname $directory $git_branch $character",
                "username": {"style_user": "white bold", "show_always": true},
                "hostname": {"ssh_only": false, "style": "white dimmed"},
                "directory": {"style": "blue"}
            })),
        ),
        preset(
            "preset-dev",
            "Full Stack",
            "Shows all language versions",
            "Dev Community",
            &["developer", "languages"],
            Config::starship_default().merge(&config(json!({
                "nodejs": {"disabled": false},
                "rust": {"disabled": false},
                "python": {"disabled": false},
                "golang": {"disabled": false},
                "java": {"disabled": false},
                "php": {"disabled": false},
                "docker_context": {"disabled": false}
            }))),
        ),
    ];

    presets.extend(SCHEME_PRESETS.iter().filter_map(|entry| {
        let scheme = find_scheme(entry.scheme)?;
        Some(preset(
            entry.id,
            entry.name,
            entry.description,
            entry.author,
            entry.tags,
            scheme_config(scheme, entry.glyph),
        ))
    }));
    presets
});

fn config(value: Value) -> Config {
    match value {
        Value::Object(table) => Config::from_table(table),
        _ => Config::from_table(Map::new()),
    }
}

fn scheme_config(scheme: &ColorScheme, glyph: &str) -> Config {
    Config::starship_default().merge(&config(json!({
        "directory": {"style": scheme.primary},
        "git_branch": {"style": scheme.secondary},
        "character": {
            "success_symbol": format!("[{glyph}]({})", scheme.success),
            "error_symbol": format!("[{glyph}]({})", scheme.error)
        },
        "nodejs": {"format": format!("via [⬢ $version]({}) ", scheme.primary)}
    })))
}

fn preset(
    id: &str,
    name: &str,
    description: &str,
    author: &str,
    tags: &[&str],
    config: Config,
) -> Theme {
    let date = DateTime::<Utc>::from_timestamp(PRESET_EPOCH_SECS, 0).unwrap_or_default();
    let metadata = ThemeMetadata {
        id: id.to_string(),
        name: name.to_string(),
        author: Some(author.to_string()),
        description: Some(description.to_string()),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        created: date,
        updated: date,
        is_preset: true,
    };
    Theme::new(metadata, config)
}

/// All builtin presets, in gallery order.
pub fn preset_themes() -> &'static [Theme] {
    &PRESETS
}

/// Looks up a preset by id.
pub fn find_preset(id: &str) -> Option<&'static Theme> {
    PRESETS.iter().find(|theme| theme.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipwright_config::{validate, COLOR_SCHEMES};

    #[test]
    fn test_gallery_order_and_count() {
        let ids: Vec<_> = preset_themes().iter().map(Theme::id).collect();
        assert_eq!(&ids[..3], ["preset-clean", "preset-oneline", "preset-dev"]);
        assert_eq!(ids.len(), 3 + COLOR_SCHEMES.len());
    }

    #[test]
    fn test_every_preset_is_marked_and_dated() {
        for theme in preset_themes() {
            assert!(theme.metadata.is_preset, "{}", theme.id());
            assert_eq!(theme.metadata.created.to_rfc3339(), "2024-01-01T00:00:00+00:00");
            assert!(theme.config.format().is_some(), "{}", theme.id());
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = preset_themes().iter().map(Theme::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), preset_themes().len());
    }

    #[test]
    fn test_scheme_preset_uses_scheme_colors() {
        let nord = find_preset("preset-nord").unwrap();
        assert_eq!(nord.config.module_str("directory", "style"), Some("#88C0D0"));
        assert_eq!(
            nord.config.module_str("character", "success_symbol"),
            Some("[➜](#A3BE8C)")
        );
        // Keys of the default theme survive the overlay.
        assert_eq!(
            nord.config.get_path(&["directory", "truncation_length"]),
            Some(&json!(3))
        );
    }

    #[test]
    fn test_dracula_uses_lightning_glyph() {
        let dracula = find_preset("preset-dracula").unwrap();
        assert_eq!(
            dracula.config.module_str("character", "error_symbol"),
            Some("[⚡](#FF5555)")
        );
    }

    #[test]
    fn test_presets_have_no_validation_errors() {
        for theme in preset_themes() {
            let report = validate(&theme.config);
            assert!(report.errors.is_empty(), "{}: {:?}", theme.id(), report.errors);
        }
    }

    #[test]
    fn test_unknown_preset() {
        assert!(find_preset("preset-missing").is_none());
    }
}
