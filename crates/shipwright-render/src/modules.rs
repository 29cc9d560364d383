//! Per-module rendering rules.
//!
//! When the engine meets `$name` in a format string it asks a
//! [`ModuleRenderer`] to turn the module's scenario value into a fragment of
//! format syntax. Fragments may contain styled groups (`[text](style)`); the
//! engine styles them together with the literal groups of the format string.
//!
//! # Builtin renderers
//!
//! | Module | Output |
//! |--------|--------|
//! | `directory` | `[<value>](<style>) `, style defaults to `cyan bold` |
//! | `git_branch` | `[<symbol><value>](<style>) `, symbol `🌱 `, style `purple bold` |
//! | `git_status` | status symbols found in the value, through `format` (default `($displayValue) `) |
//! | `character` | the value, styled like the success or error symbol template |
//! | anything else | `format` (default `via [$symbol$version]($style) `) |
//!
//! User-defined modules under `[custom.<name>]` are rendered by
//! [`CustomModule`] and take precedence over any registered renderer.
//!
//! # Extending
//!
//! Any `Fn(&ModuleContext) -> String` is a renderer:
//!
//! ```rust
//! use shipwright_render::{FormatEngine, ModuleContext, Scenario};
//! use shipwright_config::Config;
//!
//! let mut engine = FormatEngine::new();
//! engine
//!     .registry_mut()
//!     .register("time", |ctx: &ModuleContext<'_>| format!("at [{}](yellow) ", ctx.value));
//!
//! let scenario = Scenario::from_values([("time", "12:00")]);
//! let plain = engine.render_plain("$time", &Config::default(), &scenario);
//! assert_eq!(plain, "at 12:00 ");
//! ```

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::{Map, Value};
use shipwright_config::Config;

use crate::scenario::Scenario;

/// `$name` references, shared with the engine.
pub(crate) static VARIABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([a-zA-Z0-9_]+)").expect("valid variable regex"));

/// Everything a renderer may look at.
#[derive(Debug, Clone, Copy)]
pub struct ModuleContext<'a> {
    /// Module name as written after `$`.
    pub name: &'a str,
    /// The scenario value. Never empty.
    pub value: &'a str,
    pub config: &'a Config,
    pub scenario: &'a Scenario,
}

impl<'a> ModuleContext<'a> {
    /// The module's own configuration table.
    pub fn settings(&self) -> Option<&'a Map<String, Value>> {
        self.config.module(self.name)
    }

    /// A non-empty string setting of this module.
    pub fn setting(&self, key: &str) -> Option<&'a str> {
        self.config
            .module_str(self.name, key)
            .filter(|s| !s.is_empty())
    }

    /// A string setting, or `default` when unset or empty.
    pub fn setting_or(&self, key: &str, default: &'a str) -> &'a str {
        self.setting(key).unwrap_or(default)
    }
}

/// Turns a module value into format syntax.
pub trait ModuleRenderer: Send + Sync {
    fn render(&self, ctx: &ModuleContext<'_>) -> String;
}

impl<F> ModuleRenderer for F
where
    F: Fn(&ModuleContext<'_>) -> String + Send + Sync,
{
    fn render(&self, ctx: &ModuleContext<'_>) -> String {
        self(ctx)
    }
}

/// Replaces `$name` placeholders in one pass.
///
/// Every occurrence is replaced. Placeholders not listed in `vars` are left
/// as written, and substituted values are not scanned again.
pub fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    VARIABLE
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            match vars.iter().find(|(var, _)| *var == name) {
                Some((_, value)) => (*value).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// `[<value>](<style>) `
#[derive(Debug, Clone, Copy, Default)]
pub struct Directory;

impl ModuleRenderer for Directory {
    fn render(&self, ctx: &ModuleContext<'_>) -> String {
        let style = ctx.setting_or("style", "cyan bold");
        format!("[{}]({}) ", ctx.value, style)
    }
}

/// `[<symbol><value>](<style>) `
#[derive(Debug, Clone, Copy, Default)]
pub struct GitBranch;

impl ModuleRenderer for GitBranch {
    fn render(&self, ctx: &ModuleContext<'_>) -> String {
        let symbol = ctx.setting_or("symbol", "🌱 ");
        let style = ctx.setting_or("style", "purple bold");
        format!("[{}{}]({}) ", symbol, ctx.value, style)
    }
}

/// Status kinds in display order, with their default symbols.
pub const GIT_STATUS_SYMBOLS: &[(&str, &str)] = &[
    ("conflicted", "🏳"),
    ("ahead", "🏎💨"),
    ("behind", "😰"),
    ("diverged", "😵"),
    ("untracked", "🤷"),
    ("stashed", "📦"),
    ("modified", "📝"),
    ("staged", "[++()](green)"),
    ("renamed", "👅"),
    ("deleted", "🗑"),
];

/// Shows the configured status symbols that occur in the value.
///
/// When none occur, the raw value is shown instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitStatus;

impl ModuleRenderer for GitStatus {
    fn render(&self, ctx: &ModuleContext<'_>) -> String {
        let active: Vec<&str> = GIT_STATUS_SYMBOLS
            .iter()
            .map(|&(kind, default)| ctx.setting_or(kind, default))
            .filter(|symbol| ctx.value.contains(*symbol))
            .collect();

        let display = if active.is_empty() {
            ctx.value.to_string()
        } else {
            active.join(" ")
        };

        let format = ctx.setting_or("format", "($displayValue) ");
        let style = ctx.setting_or("style", "white");
        substitute(
            format,
            &[
                ("all_status", display.as_str()),
                ("displayValue", display.as_str()),
                ("ahead_behind", ""),
                ("style", style),
            ],
        )
    }
}

/// The prompt character, styled like the configured success or error
/// symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct Character;

impl Character {
    const DEFAULT_STYLE: &'static str = "bold green";

    /// The style inside the first `](...)` of a symbol template.
    fn template_style(template: &str) -> Option<&str> {
        let start = template.find("](")? + 2;
        let len = template[start..].find(')')?;
        Some(&template[start..start + len])
    }
}

impl ModuleRenderer for Character {
    fn render(&self, ctx: &ModuleContext<'_>) -> String {
        let template = if ctx.scenario.is_error() {
            ctx.setting_or("error_symbol", "[❯](bold red)")
        } else {
            ctx.setting_or("success_symbol", "[❯](bold green)")
        };
        let style = Self::template_style(template).unwrap_or(Self::DEFAULT_STYLE);
        format!("[{}]({}) ", ctx.value, style)
    }
}

/// Fallback for modules without bespoke rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generic;

impl ModuleRenderer for Generic {
    fn render(&self, ctx: &ModuleContext<'_>) -> String {
        let format = ctx.setting_or("format", "via [$symbol$version]($style) ");
        substitute(
            format,
            &[
                ("symbol", ctx.setting_or("symbol", "")),
                ("version", ctx.value),
                ("style", ctx.setting_or("style", "white")),
            ],
        )
    }
}

/// Renders `[custom.<name>]` modules.
///
/// The command itself is never run; the scenario value stands in for its
/// output.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomModule;

impl ModuleRenderer for CustomModule {
    fn render(&self, ctx: &ModuleContext<'_>) -> String {
        let Some(definition) = ctx.config.custom_module(ctx.name) else {
            return String::new();
        };
        if definition.get("disabled").and_then(Value::as_bool) == Some(true) {
            return String::new();
        }

        let setting = |key: &str, default: &'static str| -> String {
            definition
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        let format = setting("format", "[$symbol $output]($style) ");
        let symbol = setting("symbol", "");
        let style = setting("style", "white");
        substitute(
            &format,
            &[
                ("symbol", symbol.as_str()),
                ("output", ctx.value),
                ("style", style.as_str()),
            ],
        )
    }
}

/// Maps module names to renderers, with a fallback for everything else.
pub struct ModuleRegistry {
    renderers: HashMap<String, Box<dyn ModuleRenderer>>,
    fallback: Box<dyn ModuleRenderer>,
}

impl ModuleRegistry {
    /// A registry with no bespoke renderers; every module uses [`Generic`].
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
            fallback: Box::new(Generic),
        }
    }

    /// A registry with the builtin renderers.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry
            .register("directory", Directory)
            .register("git_branch", GitBranch)
            .register("git_status", GitStatus)
            .register("character", Character);
        registry
    }

    /// Registers or replaces the renderer for `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        renderer: impl ModuleRenderer + 'static,
    ) -> &mut Self {
        self.renderers.insert(name.into(), Box::new(renderer));
        self
    }

    /// Removes a bespoke renderer, so `name` falls back again.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.renderers.remove(name).is_some()
    }

    /// Replaces the renderer used for modules without a bespoke one.
    pub fn set_fallback(&mut self, renderer: impl ModuleRenderer + 'static) -> &mut Self {
        self.fallback = Box::new(renderer);
        self
    }

    /// The renderer for `name`, or the fallback.
    pub fn get(&self, name: &str) -> &dyn ModuleRenderer {
        self.renderers
            .get(name)
            .map(|renderer| renderer.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// Names with a bespoke renderer, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("renderers", &self.names())
            .finish_non_exhaustive()
    }
}
