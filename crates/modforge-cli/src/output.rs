//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::{Term, measure_text_width};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

const BANNER_PADDING: usize = 3;

/// Draw `title` inside a rounded box.
///
/// The error banner is red, every other title green.
pub fn render_banner(title: &str, color: bool) -> String {
    let inner = measure_text_width(title) + BANNER_PADDING * 2;
    let rule = "\u{2500}".repeat(inner);
    let pad = " ".repeat(BANNER_PADDING);

    let top = format!("\u{256d}{rule}\u{256e}");
    let middle = if color {
        let styled = if title == "Error" {
            title.red().bold().to_string()
        } else {
            title.green().bold().to_string()
        };
        format!("\u{2502}{pad}{styled}{pad}\u{2502}")
    } else {
        format!("\u{2502}{pad}{title}{pad}\u{2502}")
    };
    let bottom = format!("\u{2570}{rule}\u{256f}");

    format!("{top}\n{middle}\n{bottom}\n")
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Skipped,
    Info,
}

impl Tone {
    fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Skipped => "\u{00b7}",
            Self::Info => "\u{2139}",
        }
    }

    fn line(self, msg: &str, color: bool) -> String {
        let symbol = self.symbol();
        if !color {
            return format!("{symbol} {msg}");
        }
        match self {
            Self::Success => format!("{} {}", symbol.green().bold(), msg.green()),
            Self::Skipped => format!("{} {}", symbol.dimmed(), msg.dimmed()),
            Self::Info => format!("{} {}", symbol.blue().bold(), msg.blue()),
        }
    }
}

/// Writes results to stdout according to the resolved format and flags.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Colour needs a human format and neither `--no-color` nor
    /// `output.no_color`.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Unadorned line; dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Raw data (completions, config values, JSON). Never suppressed.
    pub fn data(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Pretty-printed JSON of `value`.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.data(&text)
    }

    /// Boxed title such as "Module Created".
    pub fn banner(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_str(&render_banner(title, !self.no_color))
    }

    /// `✓ <msg>` for a file that was written.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Success, msg)
    }

    /// `· <msg>` for a file that already existed.
    pub fn skipped(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Skipped, msg)
    }

    /// `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    fn status(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&tone.line(msg, !self.no_color))
    }

    /// Never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn plain_banner_is_boxed_title() {
        let banner = render_banner("Module Created", false);
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "\u{2502}   Module Created   \u{2502}");
        assert!(lines[0].starts_with('\u{256d}'));
        assert!(lines[2].ends_with('\u{256f}'));
        assert_eq!(
            measure_text_width(lines[0]),
            measure_text_width(lines[1])
        );
    }

    #[test]
    fn coloured_banner_keeps_width() {
        let plain = render_banner("Error", false);
        let colored = render_banner("Error", true);
        assert_ne!(plain, colored);
        let widths: Vec<usize> = colored.lines().map(measure_text_width).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn human_format_honours_no_color_flag() {
        assert!(!make_manager(false, false, OutputFormat::Human).no_color);
        assert!(make_manager(false, true, OutputFormat::Human).no_color);
    }

    #[test]
    fn plain_format_never_colours() {
        assert!(make_manager(false, false, OutputFormat::Plain).no_color);
    }

    #[test]
    fn config_can_disable_colour() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(OutputManager::new(&args, &config).no_color);
    }

    #[test]
    fn format_accessor_returns_resolved() {
        let out = make_manager(false, false, OutputFormat::Json);
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn status_lines_without_colour() {
        assert_eq!(Tone::Success.line("index.ts", false), "\u{2713} index.ts");
        assert_eq!(Tone::Skipped.line("index.ts", false), "\u{00b7} index.ts");
        assert!(Tone::Info.line("x", true).contains('\u{1b}'));
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
        assert!(out.banner("Module Created").is_ok());
    }
}
