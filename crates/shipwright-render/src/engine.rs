//! The format-string interpreter.
//!
//! Rendering happens in three passes over the text:
//!
//! 1. Every `$name` is replaced, left to right, by the module's rendered
//!    fragment. Fragments are not scanned for further `$name` references.
//! 2. Styled groups `[inner](style)` are replaced by the style's escape
//!    sequence, `inner`, and a reset. `inner` may not contain `]` and
//!    `style` may not contain `)`, so a nested group only closes one level
//!    per pass. Passes repeat until nothing changes, at most
//!    [`MAX_STYLE_PASSES`] times; deeper nesting is left partly unresolved.
//! 3. The two-character sequence `\n` becomes a newline.
//!
//! Rendering never fails. Unknown modules and unknown style tokens simply
//! produce nothing.
//!
//! ```rust
//! use shipwright_config::Config;
//! use shipwright_render::{render, Scenario};
//!
//! let out = render("[text](red)", &Config::default(), &Scenario::default());
//! assert_eq!(out, "\x1b[31mtext\x1b[0m");
//! ```

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use shipwright_config::Config;
use shipwright_style::{EscapeMode, StyleCodec, RESET};

use crate::modules::{CustomModule, ModuleContext, ModuleRegistry, ModuleRenderer, VARIABLE};
use crate::scenario::Scenario;

/// Upper bound on styled-group passes.
pub const MAX_STYLE_PASSES: usize = 5;

static STYLED_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid styled group regex"));

static DEFAULT_ENGINE: Lazy<FormatEngine> = Lazy::new(FormatEngine::new);

/// Renders format strings against a configuration and a scenario.
///
/// `FormatEngine` is `Send + Sync`; one engine can serve every preview.
#[derive(Debug, Default)]
pub struct FormatEngine {
    registry: ModuleRegistry,
    escape_mode: EscapeMode,
}

impl FormatEngine {
    /// An engine with the builtin module renderers and joined escapes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: ModuleRegistry) -> Self {
        Self {
            registry,
            escape_mode: EscapeMode::default(),
        }
    }

    /// Selects how styled groups are encoded.
    pub fn with_escape_mode(mut self, mode: EscapeMode) -> Self {
        self.escape_mode = mode;
        self
    }

    pub fn escape_mode(&self) -> EscapeMode {
        self.escape_mode
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ModuleRegistry {
        &mut self.registry
    }

    /// Renders `format` into terminal text.
    pub fn render(&self, format: &str, config: &Config, scenario: &Scenario) -> String {
        if format.is_empty() {
            return String::new();
        }

        let mut text = VARIABLE
            .replace_all(format, |caps: &Captures<'_>| {
                self.resolve_module(&caps[1], config, scenario)
            })
            .into_owned();

        let codec = StyleCodec::with_palette(config.active_palette());
        for _ in 0..MAX_STYLE_PASSES {
            let next = STYLED_GROUP
                .replace_all(&text, |caps: &Captures<'_>| {
                    format!(
                        "{}{}{}",
                        codec.encode_with(&caps[2], self.escape_mode),
                        &caps[1],
                        RESET
                    )
                })
                .into_owned();
            if next == text {
                break;
            }
            text = next;
        }

        text.replace("\\n", "\n")
    }

    /// Resolves one module reference to a fragment of format syntax.
    ///
    /// Returns an empty string when the scenario has no value for `name` or
    /// the module is disabled.
    pub fn resolve_module(&self, name: &str, config: &Config, scenario: &Scenario) -> String {
        let Some(value) = scenario.value(name) else {
            tracing::trace!(module = name, "module not triggered");
            return String::new();
        };
        if config.is_disabled(name) {
            tracing::trace!(module = name, "module disabled");
            return String::new();
        }

        let ctx = ModuleContext {
            name,
            value,
            config,
            scenario,
        };
        let output = if config.custom_module(name).is_some() {
            CustomModule.render(&ctx)
        } else {
            self.registry.get(name).render(&ctx)
        };

        tracing::trace!(module = name, output = output.as_str(), "resolved module");
        output
    }

    /// Renders the configuration's own `format`.
    pub fn render_prompt(&self, config: &Config, scenario: &Scenario) -> String {
        self.render(config.format().unwrap_or_default(), config, scenario)
    }

    /// Renders `format` with all escape sequences removed.
    pub fn render_plain(&self, format: &str, config: &Config, scenario: &Scenario) -> String {
        console::strip_ansi_codes(&self.render(format, config, scenario)).into_owned()
    }

    /// Display width of the rendered `format`, in terminal columns.
    pub fn visible_width(&self, format: &str, config: &Config, scenario: &Scenario) -> usize {
        console::measure_text_width(&self.render(format, config, scenario))
    }
}

/// [`FormatEngine::render`] on a shared default engine.
pub fn render(format: &str, config: &Config, scenario: &Scenario) -> String {
    DEFAULT_ENGINE.render(format, config, scenario)
}

/// [`FormatEngine::resolve_module`] on a shared default engine.
pub fn resolve_module(name: &str, config: &Config, scenario: &Scenario) -> String {
    DEFAULT_ENGINE.resolve_module(name, config, scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn config(value: Value) -> Config {
        Config::from_value(value).unwrap()
    }

    fn scenario(values: &[(&str, &str)]) -> Scenario {
        Scenario::from_values(values.iter().copied())
    }

    // =========================================================================
    // Basic rendering
    // =========================================================================

    #[test]
    fn test_empty_format() {
        assert_eq!(render("", &Config::default(), &Scenario::default()), "");
    }

    #[test]
    fn test_literal_text_passes_through() {
        assert_eq!(
            render("hello world", &Config::default(), &Scenario::default()),
            "hello world"
        );
    }

    #[test]
    fn test_styled_group_red() {
        let out = render("[text](red)", &Config::default(), &Scenario::default());
        let red = out.find("\x1b[31m").unwrap();
        let text = out.find("text").unwrap();
        let reset = out.find(RESET).unwrap();
        assert!(red < text && text < reset);
    }

    #[test]
    fn test_unknown_style_leaves_text_with_reset() {
        let out = render("[text](sparkly)", &Config::default(), &Scenario::default());
        assert_eq!(out, "text\x1b[0m");
    }

    #[test]
    fn test_escaped_newline() {
        let out = render("a\\nb", &Config::default(), &Scenario::default());
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn test_per_token_mode() {
        let engine = FormatEngine::new().with_escape_mode(EscapeMode::PerToken);
        let out = engine.render("[x](bold red)", &Config::default(), &Scenario::default());
        assert_eq!(out, "\x1b[1m\x1b[31mx\x1b[0m");

        let joined = FormatEngine::new().render("[x](bold red)", &Config::default(), &Scenario::default());
        assert_eq!(joined, "\x1b[1;31mx\x1b[0m");
    }

    // =========================================================================
    // Module references
    // =========================================================================

    #[test]
    fn test_character_glyph_present() {
        let out = render(
            "$character",
            &Config::starship_default(),
            &scenario(&[("character", "❯")]),
        );
        assert!(out.contains('❯'));
    }

    #[test]
    fn test_missing_and_empty_modules_render_nothing() {
        let scenario = scenario(&[("directory", "")]);
        assert_eq!(render("$directory$nodejs", &Config::default(), &scenario), "");
    }

    #[test]
    fn test_disabled_module_renders_nothing() {
        let config = config(json!({"directory": {"disabled": true}}));
        let scenario = scenario(&[("directory", "~/x")]);
        assert_eq!(resolve_module("directory", &config, &scenario), "");
    }

    #[test]
    fn test_module_output_is_styled() {
        let scenario = scenario(&[("directory", "~/x")]);
        let out = render("$directory", &Config::default(), &scenario);
        assert_eq!(out, "\x1b[1;36m~/x\x1b[0m ");
    }

    #[test]
    fn test_module_values_are_not_rescanned_for_references() {
        let scenario = scenario(&[("directory", "$HOME"), ("HOME", "nope")]);
        let plain = FormatEngine::new().render_plain("$directory", &Config::default(), &scenario);
        assert_eq!(plain, "$HOME ");
    }

    #[test]
    fn test_custom_module_takes_precedence() {
        let config = config(json!({
            "custom": {"directory": {"format": "<$output>"}}
        }));
        let scenario = scenario(&[("directory", "~/x")]);
        assert_eq!(resolve_module("directory", &config, &scenario), "<~/x>");
    }

    #[test]
    fn test_top_level_disabled_beats_custom() {
        let config = config(json!({
            "docker": {"disabled": true},
            "custom": {"docker": {"format": "<$output>"}}
        }));
        let scenario = scenario(&[("docker", "24")]);
        assert_eq!(resolve_module("docker", &config, &scenario), "");
    }

    // =========================================================================
    // Nesting
    // =========================================================================

    #[test]
    fn test_sibling_groups_resolve_in_one_pass() {
        let out = render("[a](red) [b](blue)", &Config::default(), &Scenario::default());
        assert_eq!(out, "\x1b[31ma\x1b[0m \x1b[34mb\x1b[0m");
    }

    #[test]
    fn test_each_pass_closes_one_nesting_level() {
        let depth = MAX_STYLE_PASSES + 2;
        let format = format!("{}x{}", "[".repeat(depth), "](red)".repeat(depth));
        let out = render(&format, &Config::default(), &Scenario::default());
        assert_eq!(out.matches("](red)").count(), depth - MAX_STYLE_PASSES);
    }

    #[test]
    fn test_shallow_nesting_fully_consumed() {
        let format = "[[[x](red)](red)](red)";
        let out = render(format, &Config::default(), &Scenario::default());
        assert!(!out.contains("](red)"));
    }

    // =========================================================================
    // Palettes and helpers
    // =========================================================================

    #[test]
    fn test_palette_colors_from_config() {
        let config = config(json!({"palettes": {"global": {"primary": "#010203"}}}));
        let out = render("[x](bg:primary)", &config, &Scenario::default());
        assert_eq!(out, "\x1b[48;2;1;2;3mx\x1b[0m");
    }

    #[test]
    fn test_render_prompt_uses_config_format() {
        let config = config(json!({"format": "$directory$character"}));
        let scenario = scenario(&[("directory", "~"), ("character", "❯")]);
        let engine = FormatEngine::new();
        assert_eq!(
            engine.render_plain(config.format().unwrap(), &config, &scenario),
            "~ ❯ "
        );
        assert_eq!(
            engine.render_prompt(&config, &scenario),
            engine.render("$directory$character", &config, &scenario)
        );
        assert_eq!(engine.render_prompt(&Config::default(), &scenario), "");
    }

    #[test]
    fn test_visible_width_ignores_escapes() {
        let engine = FormatEngine::new();
        let width = engine.visible_width("[abc](bold red) d", &Config::default(), &Scenario::default());
        assert_eq!(width, 5);
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FormatEngine>();
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn plain_text_passes_through(text in "[a-zA-Z0-9 .,:;!?-]{0,40}") {
            prop_assert_eq!(render(&text, &Config::default(), &Scenario::default()), text);
        }

        #[test]
        fn arbitrary_input_never_panics(text in "\\PC{0,60}") {
            let _ = render(&text, &Config::starship_default(), &crate::find_scenario("dev").cloned().unwrap_or_default());
        }
    }
}
