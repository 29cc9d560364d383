//! Live preview rendering for Starship prompt themes.
//!
//! The [`FormatEngine`] interprets Starship's compact format syntax against
//! a theme [`Config`](shipwright_config::Config) and a [`Scenario`] of module
//! values, producing terminal text:
//!
//! ```text
//! format:   "$directory$git_branch$character"
//! scenario: directory = "~/work/api", git_branch = "main", character = "❯"
//! output:   ESC[1;36m~/work/api ESC[0m ESC[1;35m🌱 main ESC[0m ESC[1;32m❯ ESC[0m
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use shipwright_config::Config;
//! use shipwright_render::{find_scenario, FormatEngine};
//!
//! let engine = FormatEngine::new();
//! let config = Config::starship_default();
//! let scenario = find_scenario("clean").unwrap();
//!
//! let plain = engine.render_plain("$directory$character", &config, scenario);
//! assert_eq!(plain, "~/projects/starship-theme-creator ❯ ");
//! ```
//!
//! # Modules
//!
//! Each `$name` is resolved by a [`ModuleRenderer`] looked up in the engine's
//! [`ModuleRegistry`]. A module whose scenario value is missing or empty, or
//! whose table sets `disabled = true`, renders nothing.
//!
//! # Styling
//!
//! Style specs inside `[text](style)` are encoded by
//! [`shipwright_style::StyleCodec`], with the theme's active palette so that
//! names like `primary` resolve to the colors the theme defines.

mod engine;
mod modules;
mod scenario;

pub use engine::{render, resolve_module, FormatEngine, MAX_STYLE_PASSES};
pub use modules::{
    substitute, Character, CustomModule, Directory, Generic, GitBranch, GitStatus, ModuleContext,
    ModuleRegistry, ModuleRenderer, GIT_STATUS_SYMBOLS,
};
pub use scenario::{find_scenario, mock_scenarios, Scenario};
pub use shipwright_style::EscapeMode;
