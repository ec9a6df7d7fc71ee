//! Diagnostics go to stderr through `tracing`; stdout is reserved for results.
//!
//! `-q` keeps errors only, each `-v` lowers the threshold one step from
//! `warn`. A set `RUST_LOG` replaces the computed filter entirely.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::GlobalArgs;

/// Crates whose events are shown.
const TARGETS: [&str; 3] = ["modforge", "modforge_core", "modforge_adapters"];

/// Install the global subscriber. Called once from `main`.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(raw) if !raw.is_empty() => EnvFilter::try_new(raw)?,
        _ => EnvFilter::try_new(directives(level_for(args)))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn directives(level: LevelFilter) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
