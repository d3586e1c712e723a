//! Output management and formatting.
//!
//! [`OutputManager`] is the CLI's implementation of the core `Reporter`
//! port. Colour conventions: green = success, yellow = warning, red =
//! error, magenta = detail/diagnostic.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use specgen_core::report::Reporter;

use crate::cli::GlobalArgs;

/// Manages CLI output based on parsed flags.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    stdout: Term,
    stderr: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags.
    pub fn new(args: &GlobalArgs) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || !io::stdout().is_terminal(),
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }

    /// Points the user at the generated artifacts: yellow text with the
    /// directory itself in magenta, to stdout. Suppressed in quiet mode.
    pub fn generated_at(&self, dir: &std::path::Path) {
        if self.quiet {
            return;
        }
        let _ = self.stdout.write_line(&location_line(self.no_color, dir));
    }
}

impl Reporter for OutputManager {
    /// Success line: `✓ <msg>` in green, to stdout.
    fn success(&self, msg: &str) {
        if self.quiet {
            return;
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        let _ = self.stdout.write_line(&line);
    }

    /// Warning line: `⚠ <msg>` in yellow, to stderr.
    fn warning(&self, msg: &str) {
        if self.quiet {
            return;
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        let _ = self.stderr.write_line(&line);
    }

    /// Error line: `✗ <msg>` in red, to stderr. *Not* suppressed in quiet
    /// mode — errors must always be visible.
    fn error(&self, msg: &str) {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        let _ = self.stderr.write_line(&line);
    }

    /// Diagnostic detail in magenta, to stderr.
    fn detail(&self, msg: &str) {
        if self.quiet {
            return;
        }
        let line = if self.no_color {
            format!("  {msg}")
        } else {
            format!("  {}", msg.magenta())
        };
        let _ = self.stderr.write_line(&line);
    }
}

/// Build the "check out your files" line, with the directory in magenta
/// when colour is on.
fn location_line(no_color: bool, dir: &std::path::Path) -> String {
    if no_color {
        format!("Check out your shiny new generated files at {}.", dir.display())
    } else {
        format!(
            "{}{}{}",
            "Check out your shiny new generated files at ".yellow(),
            dir.display().to_string().magenta(),
            ".".yellow()
        )
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
