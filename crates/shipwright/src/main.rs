//! `shipwright`: preview, merge and check Starship prompt themes.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, ColorArg, Command};
use crate::logging::{init_logging, LogConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let color = use_color(cli.color);
    console::set_colors_enabled(color);

    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match &cli.command {
        Command::Render(args) => commands::run_render(args, color, &mut out),
        Command::Style(args) => commands::run_style(args, color, &mut out),
        Command::Merge(args) => commands::run_merge(args, &mut out),
        Command::Validate(args) => commands::run_validate(args, &mut out),
        Command::Scenarios => commands::run_scenarios(&mut out),
        Command::Presets(args) => commands::run_presets(args, &mut out),
        Command::Schemes => commands::run_schemes(color, &mut out),
    };
    let _ = out.flush();

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn use_color(choice: ColorArg) -> bool {
    match choice {
        ColorArg::Always => true,
        ColorArg::Never => false,
        ColorArg::Auto => console::Term::stdout().features().colors_supported(),
    }
}

/// `-v`/`-q` take precedence over `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        with_ansi: cli.color != ColorArg::Never && io::stderr().is_terminal(),
        ..LogConfig::default()
    }
}
