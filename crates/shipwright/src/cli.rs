//! Command-line arguments for `shipwright`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "shipwright",
    version,
    about = "Preview, merge and check Starship prompt themes",
    long_about = "Preview, merge and check Starship prompt themes.\n\n\
                  Theme files may be Starship TOML or JSON (by extension).\n\
                  Without a theme file the editor's default theme is used."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// When to emit ANSI colors.
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, global = true)]
    pub color: ColorArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a prompt preview.
    Render(RenderArgs),

    /// Show the escape sequence for a style spec.
    Style(StyleArgs),

    /// Deep-merge theme files and print the result as TOML.
    Merge(MergeArgs),

    /// Check a theme for problems.
    Validate(ValidateArgs),

    /// List the builtin preview scenarios.
    Scenarios,

    /// List the builtin preset themes, or print one.
    Presets(PresetsArgs),

    /// List the builtin color schemes.
    Schemes,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Theme file (TOML or JSON).
    #[arg(value_name = "THEME")]
    pub theme: Option<PathBuf>,

    /// Start from a preset instead of a file.
    #[arg(long, value_name = "ID", conflicts_with = "theme")]
    pub preset: Option<String>,

    /// Builtin scenario id.
    #[arg(long, short, default_value = "clean")]
    pub scenario: String,

    /// Scenario JSON file; overrides --scenario.
    #[arg(long, value_name = "PATH")]
    pub scenario_file: Option<PathBuf>,

    /// Format string to render instead of the theme's own `format`.
    #[arg(long, short)]
    pub format: Option<String>,

    /// Apply a color scheme before rendering.
    #[arg(long, value_name = "NAME")]
    pub scheme: Option<String>,

    /// How styled groups are encoded.
    #[arg(long, value_enum, default_value_t = EscapeArg::Joined)]
    pub escape: EscapeArg,

    /// Render every builtin scenario.
    #[arg(long, conflicts_with_all = ["scenario_file"])]
    pub all: bool,
}

#[derive(Args)]
pub struct StyleArgs {
    /// Style spec, e.g. "bold fg:#ff8800 bg:blue".
    #[arg(value_name = "SPEC")]
    pub spec: String,

    /// Text shown in the style.
    #[arg(long, default_value = "sample")]
    pub sample: String,

    /// Emit one escape sequence per token.
    #[arg(long)]
    pub per_token: bool,

    /// Print the decoded style record as JSON.
    #[arg(long)]
    pub decode: bool,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Base theme file.
    #[arg(value_name = "BASE")]
    pub base: PathBuf,

    /// Overlay files, applied left to right.
    #[arg(value_name = "OVERLAY", required = true)]
    pub overlays: Vec<PathBuf>,

    /// Write the merged theme here instead of stdout.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print JSON instead of TOML.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Theme file (TOML or JSON); the default theme when omitted.
    #[arg(value_name = "THEME")]
    pub theme: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct PresetsArgs {
    /// Print this preset's configuration as TOML.
    #[arg(value_name = "ID")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EscapeArg {
    /// One combined sequence per group.
    Joined,
    /// One sequence per style token.
    PerToken,
}
