//! Sanity checks for theme configurations.
//!
//! Validation never rejects a configuration outright: the editor keeps
//! working on whatever the user typed, and the report is shown alongside.
//! Errors mark settings Starship itself would refuse; warnings and
//! suggestions are advisory.
//!
//! Checks performed:
//!
//! - types of the global settings (`format`, `add_newline`, timeouts),
//! - module entries must be tables, and `disabled` must be a boolean,
//! - unknown top-level keys,
//! - a `format` without `$character`,
//! - low-contrast hex colors in the directory and branch styles, assuming
//!   a black terminal background,
//! - a rough estimate of prompt render time,
//! - a Nerd Font reminder when the theme configures symbols.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use shipwright_style::{check_contrast, Rgb};

use crate::catalog::{is_known_module, GLOBAL_KEYS};
use crate::config::Config;

/// Estimated render times above this many milliseconds produce a warning.
pub const RENDER_TIME_WARNING_MS: u32 = 200;

const BASE_RENDER_MS: u32 = 10;
const PER_MODULE_REFERENCE_MS: u32 = 2;

/// Extra render cost of modules that shell out on every prompt.
const MODULE_COSTS: &[(&str, u32)] = &[
    ("git_status", 50),
    ("kubernetes", 40),
    ("docker_context", 20),
    ("gcloud", 30),
    ("aws", 30),
    ("nodejs", 10),
    ("python", 10),
    ("rust", 10),
];

/// Styles checked for contrast, with the label used in messages.
const CONTRAST_CHECKED: &[(&str, &str)] = &[
    ("directory", "directory module"),
    ("git_branch", "git_branch module"),
];

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[0-9a-fA-F]{6}").expect("valid hex color regex"));

const DARK_BACKGROUND: Rgb = Rgb(0, 0, 0);

/// What area a validation issue concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Config,
    Visual,
    Performance,
    Compatibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
}

impl Issue {
    pub fn error(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            message: message.into(),
            fix: None,
            module: None,
        }
    }

    pub fn warning(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            message: message.into(),
            fix: None,
            module: None,
        }
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }
}

/// The outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub suggestions: Vec<String>,
    pub estimated_render_ms: u32,
}

impl ValidationReport {
    /// True when there are no errors. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Files an issue under errors or warnings by its severity.
    pub fn push(&mut self, issue: Issue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
    }
}

/// Runs every check against `config`.
pub fn validate(config: &Config) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_global_types(config, &mut report);
    check_keys(config, &mut report);

    for issue in check_color_contrast(config) {
        report.push(issue);
    }

    let estimate = estimate_render_time(config);
    report.estimated_render_ms = estimate;
    if estimate > RENDER_TIME_WARNING_MS {
        report.push(
            Issue::warning(
                IssueKind::Performance,
                format!("Estimated render time is high ({}ms)", estimate),
            )
            .with_fix("Disable expensive modules like git_status or kubernetes"),
        );
    }

    if config.as_table().iter().any(|(k, v)| mentions_symbol(k, v)) {
        report.suggestions.push(
            "Make sure you have a Nerd Font installed to see all symbols correctly".to_string(),
        );
    }

    if let Some(format) = config.format() {
        if !format.is_empty() && !format.contains("$character") {
            report.push(
                Issue::warning(
                    IssueKind::Config,
                    "Format string is missing the character module",
                )
                .with_fix("Add $character to the end of your format string")
                .with_module("character"),
            );
        }
    }

    tracing::debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        estimated_render_ms = report.estimated_render_ms,
        "validated config"
    );
    report
}

fn check_global_types(config: &Config, report: &mut ValidationReport) {
    let expectations: [(&str, fn(&Value) -> bool, &str); 4] = [
        ("format", Value::is_string, "Format must be a string"),
        ("add_newline", Value::is_boolean, "add_newline must be a boolean"),
        ("scan_timeout", Value::is_number, "scan_timeout must be a number"),
        ("command_timeout", Value::is_number, "command_timeout must be a number"),
    ];

    for (key, check, message) in expectations {
        if let Some(value) = config.get(key) {
            if !check(value) {
                report.push(Issue::error(IssueKind::Config, message));
            }
        }
    }
}

fn check_keys(config: &Config, report: &mut ValidationReport) {
    for (key, value) in config.as_table() {
        if GLOBAL_KEYS.contains(&key.as_str()) {
            continue;
        }

        if !is_known_module(key) {
            report.push(
                Issue::warning(
                    IssueKind::Config,
                    format!(
                        "Unknown module or setting: '{}'. It may be supported by Starship but not yet by this editor.",
                        key
                    ),
                )
                .with_module(key.as_str()),
            );
            continue;
        }

        match value {
            Value::Object(table) => {
                if table.get("disabled").is_some_and(|d| !d.is_boolean()) {
                    report.push(
                        Issue::error(
                            IssueKind::Config,
                            format!("Module '{}': 'disabled' must be a boolean", key),
                        )
                        .with_module(key.as_str()),
                    );
                }
            }
            _ => report.push(
                Issue::error(
                    IssueKind::Config,
                    format!("Module '{}' must be a table", key),
                )
                .with_module(key.as_str()),
            ),
        }
    }
}

/// Flags hex colors in module styles that are hard to read on a dark
/// terminal background.
pub fn check_color_contrast(config: &Config) -> Vec<Issue> {
    CONTRAST_CHECKED
        .iter()
        .filter_map(|(module, label)| {
            let style = config.module_str(module, "style")?;
            let hex = HEX_COLOR.find(style)?.as_str();
            let rgb = Rgb::from_hex(hex)?;
            if check_contrast(rgb, DARK_BACKGROUND).aa {
                return None;
            }
            Some(
                Issue::warning(
                    IssueKind::Visual,
                    format!("Low contrast color {} in {}", hex, label),
                )
                .with_fix("Choose a lighter color for better readability on dark backgrounds")
                .with_module(*module),
            )
        })
        .collect()
}

/// Rough prompt render time in milliseconds.
pub fn estimate_render_time(config: &Config) -> u32 {
    let modules: u32 = MODULE_COSTS
        .iter()
        .filter(|(id, _)| {
            config.get(id).is_some_and(|v| !v.is_null()) && !config.is_disabled(id)
        })
        .map(|(_, cost)| cost)
        .sum();

    let references = config
        .format()
        .map_or(0, |format| format.matches('$').count() as u32);

    BASE_RENDER_MS + modules + references * PER_MODULE_REFERENCE_MS
}

fn mentions_symbol(key: &str, value: &Value) -> bool {
    if key.contains("symbol") {
        return true;
    }
    match value {
        Value::String(s) => s.contains("symbol"),
        Value::Object(table) => table.iter().any(|(k, v)| mentions_symbol(k, v)),
        Value::Array(items) => items.iter().any(|v| mentions_symbol("", v)),
        _ => false,
    }
}
