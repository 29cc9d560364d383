//! Diagnostic logging for the `shipwright` binary.
//!
//! Library crates only emit `tracing` events; this module installs the
//! subscriber that prints them to stderr. `RUST_LOG` wins unless the user
//! passed `-v` or `-q`.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Crates whose events are shown at the configured level.
const OWN_CRATES: &[&str] = &[
    "shipwright",
    "shipwright_config",
    "shipwright_render",
    "shipwright_style",
];

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Honor `RUST_LOG` when it is set.
    pub use_env_filter: bool,
    pub with_ansi: bool,
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_ansi: false,
            with_target: false,
        }
    }
}

/// Installs the global subscriber. Call once, before any work.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target)
        .without_time();

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(layer)
        .try_init()?;
    Ok(())
}

fn build_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

/// Other crates stay at `warn` unless the level is quieter.
fn default_directives(level: LevelFilter) -> String {
    let external = directive_level(level.min(LevelFilter::WARN));
    let own = directive_level(level);
    std::iter::once(external)
        .chain(OWN_CRATES.iter().map(|krate| format!("{krate}={own}")))
        .collect::<Vec<_>>()
        .join(",")
}

fn directive_level(level: LevelFilter) -> String {
    level.to_string().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_cover_workspace() {
        let directives = default_directives(LevelFilter::DEBUG);
        assert_eq!(
            directives,
            "warn,shipwright=debug,shipwright_config=debug,shipwright_render=debug,shipwright_style=debug"
        );
    }

    #[test]
    fn test_quiet_levels_apply_everywhere() {
        let directives = default_directives(LevelFilter::ERROR);
        assert!(directives.starts_with("error,"));
        assert!(directives.ends_with("shipwright_style=error"));
    }
}
