//! The configuration a new theme starts from.

use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

use crate::config::Config;

static STARSHIP_DEFAULT: Lazy<Config> = Lazy::new(|| {
    Config::from_table(table(json!({
        "add_newline": true,
        "format": "$username$hostname$directory$git_branch$git_state$git_status$cmd_duration$line_break$character",
        "character": {
            "success_symbol": "[➜](bold green)",
            "error_symbol": "[➜](bold red)"
        },
        "directory": {
            "truncation_length": 3,
            "truncate_to_repo": false
        },
        "git_branch": {
            "symbol": "🌱 ",
            "format": "[$symbol$branch]($style) ",
            "truncation_length": 24
        },
        "git_status": {
            "format": "([$all_status$ahead_behind]($style) )",
            "conflicted": "🏳",
            "ahead": "🏎💨",
            "behind": "😰",
            "diverged": "😵",
            "up_to_date": "✓",
            "untracked": "🤷",
            "stashed": "📦",
            "modified": "📝",
            "staged": "[++()](green)",
            "renamed": "👅",
            "deleted": "🗑"
        },
        "nodejs": {
            "format": "via [⬢ $version](bold green) "
        }
    })))
});

fn table(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(table) => table,
        _ => Map::new(),
    }
}

impl Config {
    /// The editor's default theme configuration.
    ///
    /// All calls share one tree, so the result is cheap to clone and compare.
    pub fn starship_default() -> Config {
        STARSHIP_DEFAULT.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_character_and_format() {
        let config = Config::starship_default();
        assert!(config.format().unwrap().ends_with("$character"));
        assert_eq!(
            config.module_str("character", "success_symbol"),
            Some("[➜](bold green)")
        );
        assert_eq!(config.get("add_newline"), Some(&json!(true)));
    }

    #[test]
    fn test_default_is_shared() {
        assert!(Config::starship_default().ptr_eq(&Config::starship_default()));
    }

    #[test]
    fn test_default_exports_as_toml() {
        let text = Config::starship_default().to_toml().unwrap();
        assert!(text.contains("[git_status]"));
        assert_eq!(Config::from_toml(&text).unwrap(), Config::starship_default());
    }
}
