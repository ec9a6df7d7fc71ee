//! Reading the module name from the user.
//!
//! On a terminal (and with the `interactive` feature) this is a `dialoguer`
//! input that re-asks until the name validates.  Otherwise a single line is
//! read from stdin and validated later by the core.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::{CliError, CliResult};

const PROMPT: &str = "Enter the module name";

/// Ask for a module name.
pub fn ask_module_name() -> CliResult<String> {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;

        if io::stdin().is_terminal() {
            return ask_interactive();
        }
    }

    eprint!("{PROMPT}: ");
    io::stderr().flush()?;
    read_name(io::stdin().lock())
}

#[cfg(feature = "interactive")]
fn ask_interactive() -> CliResult<String> {
    use dialoguer::{Input, theme::ColorfulTheme};
    use modforge_core::domain::ModuleName;

    debug!("Prompting on terminal");
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(PROMPT)
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            ModuleName::validate(input).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| match e {
            dialoguer::Error::IO(io) if io.kind() == io::ErrorKind::Interrupted => {
                CliError::Cancelled
            }
            dialoguer::Error::IO(io) => CliError::from(io),
        })
}

/// Read one line; only the line terminator is stripped.
fn read_name<R: BufRead>(mut reader: R) -> CliResult<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        debug!("stdin closed before a name was entered");
        return Err(CliError::Cancelled);
    }

    let name = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(&line);
    Ok(name.to_string())
}
