//! Argument grammar of the `modforge` binary. Parsing only; handlers live in
//! `crate::commands`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "modforge",
    version,
    author,
    about = "\u{26a1} Express module scaffolding",
    long_about = "Modforge generates a controller / middleware / route / service / \
                  repository module inside the enclosing Node.js project. \
                  Run without arguments for the interactive prompt.",
    after_help = "Examples:\n\
        \x20 modforge                      # prompt for a module name\n\
        \x20 modforge new blog_post\n\
        \x20 modforge new user --dry-run\n\
        \x20 modforge completions bash > /usr/share/bash-completion/completions/modforge",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. None runs the interactive prompt.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a module (`n` for short).
    #[command(
        visible_alias = "n",
        after_help = "Examples:\n\
            \x20 modforge new user\n\
            \x20 modforge new blog_post --dir ./api\n\
            \x20 modforge new order --subfolders controllers,routes,services"
    )]
    New(NewArgs),

    /// Print a completion script for SHELL.
    #[command(
        after_help = "Examples:\n\
            \x20 modforge completions bash > ~/.local/share/bash-completion/completions/modforge\n\
            \x20 modforge completions zsh  > ~/.zfunc/_modforge\n\
            \x20 modforge completions fish > ~/.config/fish/completions/modforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or create the configuration file.
    #[command(
        subcommand,
        after_help = "Examples:\n\
            \x20 modforge config get generator.modules_dir\n\
            \x20 modforge config list\n\
            \x20 modforge config init"
    )]
    Config(ConfigCommands),
}

/// Arguments for `modforge new`.
#[derive(Debug, Default, Args)]
pub struct NewArgs {
    /// Letters, digits, `_` and `-`. Asked for when omitted.
    pub name: Option<String>,

    /// Search for package.json upwards from DIR instead of the current directory.
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Comma-separated folders, replacing `generator.subfolders`.
    #[arg(short, long, value_name = "LIST", value_delimiter = ',')]
    pub subfolders: Option<Vec<String>>,

    /// List the files that would be written and stop.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `modforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Subcommands for `modforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value; lists print as JSON.
    Get {
        /// Dotted key path, e.g. `generator.modules_dir`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    List,
    /// Print where the configuration file is read from.
    Path,
    /// Write the built-in defaults to the configuration file.
    Init {
        /// Replace an existing file.
        #[arg(short, long)]
        force: bool,
    },
}
