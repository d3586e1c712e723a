//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text and defaults. No business logic lives here; the raw `--params`
//! string is deserialized later so its warning can go through the reporter.

use std::path::PathBuf;

use clap::{Args, Parser};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// specgen is single-purpose — one generation run per invocation — so the
/// arguments live directly on the top-level parser, no subcommands.
#[derive(Debug, Parser)]
#[command(
    name    = "specgen",
    bin_name = "specgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Generate output artifacts from a specification document",
    long_about = "specgen renders a named template against a specification \
                  document, writing the generated artifacts into the output \
                  directory.",
    after_help = "EXAMPLES:\n\
        \x20 specgen api.yaml html\n\
        \x20 specgen api.yaml html -o ./docs\n\
        \x20 specgen api.yaml markdown -t ./my-templates --params '{\"title\":\"My API\"}'",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Path to the specification document.
    #[arg(value_name = "DOCUMENT", help = "Specification document to generate from")]
    pub document: PathBuf,

    /// Name of the template to render.
    #[arg(value_name = "TEMPLATE", help = "Name of the template to use")]
    pub template: String,

    /// Directory where generated files are written.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Directory where to put the generated files (defaults to current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Directory where templates are located.
    #[arg(
        short = 't',
        long = "templates",
        value_name = "DIR",
        help = "Directory where templates are located (defaults to internal templates directory)"
    )]
    pub templates: Option<PathBuf>,

    /// Additional parameters passed to the template, as a JSON object.
    ///
    /// Kept as a raw string here: deserialization is best-effort and its
    /// warning path needs the reporter, which does not exist at parse time.
    #[arg(
        long = "params",
        value_name = "JSON",
        help = "JSON object with additional params to pass to the template"
    )]
    pub params: Option<String>,

    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── Global flags ──────────────────────────────────────────────────────────────

/// Global arguments for all invocations.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
