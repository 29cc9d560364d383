//! Subcommand implementations.
//!
//! Each command writes to the given writer and returns whether it
//! succeeded, so `main` only maps the outcome to an exit code.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use console::style;
use shipwright::config::{merge, validate, Config, Issue, COLOR_SCHEMES};
use shipwright::render::{find_scenario, mock_scenarios, FormatEngine, Scenario};
use shipwright::style::{decode, EscapeMode, StyleCodec, RESET};
use shipwright::{find_preset, preset_themes, EditorSession, Theme, ThemeMetadata};

use crate::cli::{EscapeArg, MergeArgs, PresetsArgs, RenderArgs, StyleArgs, ValidateArgs};

/// Loads a theme configuration, choosing JSON or TOML by extension.
pub fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        Config::from_json(&text)
    } else {
        Config::from_toml(&text)
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), keys = config.len(), "loaded theme file");
    Ok(config)
}

fn load_theme(path: Option<&Path>, preset: Option<&str>) -> Result<Theme> {
    if let Some(id) = preset {
        return match find_preset(id) {
            Some(theme) => Ok(theme.clone()),
            None => bail!("unknown preset '{id}' (see `shipwright presets`)"),
        };
    }
    match path {
        Some(path) => {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(Theme::new(ThemeMetadata::new(name), load_config(path)?))
        }
        None => Ok(Theme::untitled()),
    }
}

fn load_scenarios(args: &RenderArgs) -> Result<Vec<Scenario>> {
    if args.all {
        return Ok(mock_scenarios().to_vec());
    }
    if let Some(path) = &args.scenario_file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let scenario = Scenario::from_json(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        return Ok(vec![scenario]);
    }
    match find_scenario(&args.scenario) {
        Some(scenario) => Ok(vec![scenario.clone()]),
        None => bail!(
            "unknown scenario '{}' (see `shipwright scenarios`)",
            args.scenario
        ),
    }
}

fn escape_mode(arg: EscapeArg) -> EscapeMode {
    match arg {
        EscapeArg::Joined => EscapeMode::Joined,
        EscapeArg::PerToken => EscapeMode::PerToken,
    }
}

pub fn run_render(args: &RenderArgs, color: bool, out: &mut dyn Write) -> Result<bool> {
    let theme = load_theme(args.theme.as_deref(), args.preset.as_deref())?;
    let engine = FormatEngine::new().with_escape_mode(escape_mode(args.escape));
    let mut session = EditorSession::with_theme(theme).with_engine(engine);
    if let Some(name) = &args.scheme {
        session.apply_color_scheme(name)?;
    }

    let scenarios = load_scenarios(args)?;
    for scenario in &scenarios {
        let rendered = match &args.format {
            Some(format) => session.engine().render(format, session.config(), scenario),
            None => session.preview(scenario),
        };
        let rendered = if color {
            rendered
        } else {
            console::strip_ansi_codes(&rendered).into_owned()
        };
        if args.all {
            writeln!(out, "{}", style(&scenario.name).bold())?;
        }
        writeln!(out, "{rendered}")?;
    }
    Ok(true)
}

pub fn run_style(args: &StyleArgs, color: bool, out: &mut dyn Write) -> Result<bool> {
    if args.decode {
        let record = decode(&args.spec);
        writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
        return Ok(true);
    }

    let mode = if args.per_token {
        EscapeMode::PerToken
    } else {
        EscapeMode::Joined
    };
    let escape = StyleCodec::new().encode_with(&args.spec, mode);
    writeln!(out, "{}", escape.escape_debug())?;
    if color {
        writeln!(out, "{escape}{}{RESET}", args.sample)?;
    }
    Ok(true)
}

pub fn run_merge(args: &MergeArgs, out: &mut dyn Write) -> Result<bool> {
    let mut merged = load_config(&args.base)?;
    for path in &args.overlays {
        merged = merge(&merged, &load_config(path)?);
    }

    let text = if args.json {
        merged.to_json_pretty()?
    } else {
        merged.to_toml()?
    };
    match &args.output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => write!(out, "{text}")?,
    }
    Ok(true)
}

pub fn run_validate(args: &ValidateArgs, out: &mut dyn Write) -> Result<bool> {
    let config = match &args.theme {
        Some(path) => load_config(path)?,
        None => Config::starship_default(),
    };
    let report = validate(&config);

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(report.is_valid());
    }

    for issue in &report.errors {
        write_issue(out, &style("error").red().bold().to_string(), issue)?;
    }
    for issue in &report.warnings {
        write_issue(out, &style("warning").yellow().bold().to_string(), issue)?;
    }
    for suggestion in &report.suggestions {
        writeln!(out, "{}: {suggestion}", style("hint").cyan())?;
    }
    writeln!(
        out,
        "estimated render time: {}ms",
        report.estimated_render_ms
    )?;
    if report.is_valid() {
        writeln!(out, "{}", style("ok").green())?;
    }
    Ok(report.is_valid())
}

fn write_issue(out: &mut dyn Write, label: &str, issue: &Issue) -> Result<()> {
    match &issue.module {
        Some(module) => writeln!(out, "{label} [{module}]: {}", issue.message)?,
        None => writeln!(out, "{label}: {}", issue.message)?,
    }
    if let Some(fix) = &issue.fix {
        writeln!(out, "  fix: {fix}")?;
    }
    Ok(())
}

pub fn run_scenarios(out: &mut dyn Write) -> Result<bool> {
    for scenario in mock_scenarios() {
        writeln!(
            out,
            "{:<10} {:<18} {}",
            scenario.id, scenario.name, scenario.description
        )?;
    }
    Ok(true)
}

pub fn run_presets(args: &PresetsArgs, out: &mut dyn Write) -> Result<bool> {
    if let Some(id) = &args.id {
        let Some(theme) = find_preset(id) else {
            bail!("unknown preset '{id}'");
        };
        write!(out, "{}", theme.config.to_toml()?)?;
        return Ok(true);
    }

    for theme in preset_themes() {
        let description = theme.metadata.description.as_deref().unwrap_or_default();
        writeln!(out, "{:<18} {:<15} {description}", theme.id(), theme.name())?;
    }
    Ok(true)
}

pub fn run_schemes(color: bool, out: &mut dyn Write) -> Result<bool> {
    let codec = StyleCodec::new();
    for scheme in COLOR_SCHEMES {
        write!(out, "{:<12}", scheme.name)?;
        for (role, hex) in scheme.roles() {
            if color {
                write!(out, " {}  {RESET}", codec.encode_joined(&format!("bg:{hex}")))?;
            } else {
                write!(out, " {role}={hex}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<bool>) -> (bool, String) {
        let mut buf = Vec::new();
        let ok = run(&mut buf).unwrap();
        (ok, String::from_utf8(buf).unwrap())
    }

    fn render_args() -> RenderArgs {
        RenderArgs {
            theme: None,
            preset: None,
            scenario: "clean".into(),
            scenario_file: None,
            format: None,
            scheme: None,
            escape: EscapeArg::Joined,
            all: false,
        }
    }

    // =========================================================================
    // File loading
    // =========================================================================

    #[test]
    fn test_load_config_by_extension() {
        let dir = TempDir::new().unwrap();
        let toml = write_file(&dir, "theme.toml", "format = \"$character\"\n");
        let json = write_file(&dir, "theme.JSON", r#"{"format": "$directory"}"#);

        assert_eq!(load_config(&toml).unwrap().format(), Some("$character"));
        assert_eq!(load_config(&json).unwrap().format(), Some("$directory"));
    }

    #[test]
    fn test_load_config_reports_path() {
        let dir = TempDir::new().unwrap();
        let broken = write_file(&dir, "broken.toml", "[directory\n");
        let err = load_config(&broken).unwrap_err();
        assert!(format!("{err:#}").contains("broken.toml"));

        let missing = dir.path().join("missing.toml");
        assert!(load_config(&missing).is_err());
    }

    // =========================================================================
    // Commands
    // =========================================================================

    #[test]
    fn test_render_without_color_is_plain() {
        let args = render_args();
        let (ok, text) = output(|out| run_render(&args, false, out));
        assert!(ok);
        assert!(!text.contains('\x1b'));
        assert!(text.contains("~/projects/starship-theme-creator"));
    }

    #[test]
    fn test_render_theme_file_with_format_override() {
        let dir = TempDir::new().unwrap();
        let theme = write_file(&dir, "t.toml", "[directory]\nstyle = \"red\"\n");
        let args = RenderArgs {
            theme: Some(theme),
            format: Some("$directory".into()),
            ..render_args()
        };
        let (_, text) = output(|out| run_render(&args, true, out));
        assert_eq!(text, "\x1b[31m~/projects/starship-theme-creator\x1b[0m \n");
    }

    #[test]
    fn test_render_all_scenarios() {
        let args = RenderArgs {
            all: true,
            ..render_args()
        };
        let (_, text) = output(|out| run_render(&args, false, out));
        for scenario in mock_scenarios() {
            assert!(text.contains(&scenario.name), "{}", scenario.id);
        }
    }

    #[test]
    fn test_render_unknown_scenario_fails() {
        let args = RenderArgs {
            scenario: "nowhere".into(),
            ..render_args()
        };
        let mut buf = Vec::new();
        assert!(run_render(&args, false, &mut buf).is_err());
    }

    #[test]
    fn test_style_prints_escaped_sequence() {
        let args = StyleArgs {
            spec: "bold red".into(),
            sample: "x".into(),
            per_token: false,
            decode: false,
        };
        let (_, text) = output(|out| run_style(&args, false, out));
        assert_eq!(text, "\\u{1b}[1;31m\n");
    }

    #[test]
    fn test_style_decode_json() {
        let args = StyleArgs {
            spec: "bg:blue bold white".into(),
            sample: String::new(),
            per_token: false,
            decode: true,
        };
        let (_, text) = output(|out| run_style(&args, false, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["background"], "blue");
        assert_eq!(value["foreground"], "white");
        assert_eq!(value["modifiers"][0], "bold");
    }

    #[test]
    fn test_merge_files_to_output() {
        let dir = TempDir::new().unwrap();
        let base = write_file(&dir, "base.toml", "[directory]\nstyle = \"blue\"\ntruncation_length = 3\n");
        let overlay = write_file(&dir, "overlay.json", r#"{"directory": {"style": "red"}, "constructor": 1}"#);
        let target = dir.path().join("out.toml");
        let args = MergeArgs {
            base,
            overlays: vec![overlay],
            output: Some(target.clone()),
            json: false,
        };

        let (ok, printed) = output(|out| run_merge(&args, out));
        assert!(ok);
        assert!(printed.is_empty());

        let merged = load_config(&target).unwrap();
        assert_eq!(merged.module_str("directory", "style"), Some("red"));
        assert!(merged.get_path(&["directory", "truncation_length"]).is_some());
        assert!(merged.get("constructor").is_none());
    }

    #[test]
    fn test_validate_reports_errors() {
        let dir = TempDir::new().unwrap();
        let theme = write_file(&dir, "bad.toml", "add_newline = \"yes\"\nformat = \"$directory\"\n");
        let args = ValidateArgs {
            theme: Some(theme),
            json: false,
        };
        let (ok, text) = output(|out| run_validate(&args, out));
        assert!(!ok);
        assert!(text.contains("add_newline must be a boolean"));
        assert!(text.contains("missing the character module"));
    }

    #[test]
    fn test_validate_default_theme_is_ok() {
        let args = ValidateArgs {
            theme: None,
            json: true,
        };
        let (ok, text) = output(|out| run_validate(&args, out));
        assert!(ok);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value["errors"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_listings() {
        let (_, scenarios) = output(|out| run_scenarios(out));
        assert_eq!(scenarios.lines().count(), mock_scenarios().len());

        let (_, presets) = output(|out| run_presets(&PresetsArgs { id: None }, out));
        assert!(presets.lines().next().unwrap().starts_with("preset-clean"));

        let (_, nord) = output(|out| {
            run_presets(
                &PresetsArgs {
                    id: Some("preset-nord".into()),
                },
                out,
            )
        });
        assert!(nord.contains("#88C0D0"));

        let (_, schemes) = output(|out| run_schemes(false, out));
        assert!(schemes.contains("primary=#88C0D0"));
    }
}
