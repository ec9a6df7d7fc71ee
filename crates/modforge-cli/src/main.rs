//! `modforge`: generate an Express module inside the enclosing project.
//!
//! Parse flags, install logging, load config, then dispatch. Running with no
//! subcommand asks for a module name interactively. Errors are rendered once
//! in [`handle_error`] and mapped to exit codes:
//!
//! | Code | Meaning                          |
//! |------|----------------------------------|
//! |  0   | Success                          |
//! |  1   | Filesystem or other internal     |
//! |  2   | Invalid name, subfolder or input |
//! |  3   | No project root / no directory   |
//! |  4   | Configuration                    |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument, warn};

use crate::{
    cli::{Cli, Commands, ConfigCommands, GlobalArgs, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // A missing .env is not an error.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(command = ?cli.command, "modforge starting");

    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        // A broken file must not block `config init --force`.
        Err(e) if is_config_init(&cli) => {
            warn!("Ignoring unreadable configuration: {e}");
            AppConfig::default()
        }
        Err(e) => return handle_error(e, &cli.global),
    };

    let output = OutputManager::new(&cli.global, &config);
    let global = cli.global.clone();

    match run(cli, config, output) {
        Ok(()) => {
            info!("done");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, &global),
    }
}

fn is_config_init(cli: &Cli) -> bool {
    matches!(
        cli.command,
        Some(Commands::Config(ConfigCommands::Init { .. }))
    )
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        None => commands::new::execute(NewArgs::default(), config, output),
        Some(Commands::New(args)) => commands::new::execute(args, config, output),
        Some(Commands::Completions(args)) => commands::completions::execute(args),
        Some(Commands::Config(cmd)) => {
            commands::config::execute(cmd, cli.global.config.as_deref(), config, output)
        }
    }
}

/// The only place a `CliError` reaches the user.
fn handle_error(err: CliError, global: &GlobalArgs) -> ExitCode {
    err.log();

    let color = !global.no_color && std::io::stderr().is_terminal();
    eprint!("{}", err.render(global.verbose > 0, color));

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
