//! # Specgen CLI
//!
//! One-shot artifact generation from a specification document.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments — usage errors are an explicit early-exit branch
//!    (`--help` / `--version` exit 0, missing positionals exit 2).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Build the [`OutputManager`].
//! 4. Run the generation inside a spawned task — the join boundary converts
//!    any out-of-band task failure into the same error funnel as an
//!    ordinary generation failure, so failure reporting happens exactly
//!    once no matter how the run died.
//! 5. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                          |
//! |------|--------------------------------------------------|
//! |  0   | Success                                          |
//! |  1   | Generation / directory-creation / internal error |
//! |  2   | Usage error (missing arguments, bad flags)       |
//! |  3   | Document or template not found                   |

use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use crate::{cli::Cli, error::CliError, logging::init_logging, output::OutputManager};

mod cli;
mod error;
mod logging;
mod output;
mod run;

#[tokio::main]
async fn main() -> ExitCode {
    // ── 1. Parse arguments ────────────────────────────────────────────────
    // Modeled as an explicit branch rather than letting clap exit from
    // inside parsing: help/version go to stdout with exit 0, usage errors
    // (e.g. a missing template name) print help to stderr with exit 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Requested help/version is a success; everything else (missing
            // positionals included) is a usage error. This mirrors clap's
            // own `Error::exit` codes while keeping the branch explicit.
            let code = match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 2,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    // ── 3. Build output manager ───────────────────────────────────────────
    let no_color = cli.global.no_color;
    let output = Arc::new(OutputManager::new(&cli.global));

    // ── 4. Run with a top-level failure boundary ──────────────────────────
    // The spawned task means a panicking generator surfaces as a JoinError
    // here instead of tearing the process down with a raw runtime abort.
    let outcome = match tokio::task::spawn(run::execute(cli, Arc::clone(&output))).await {
        Ok(result) => result,
        Err(join_err) => Err(CliError::TaskFailed {
            message: join_err.to_string(),
        }),
    };

    // ── 5. Single reporting funnel ────────────────────────────────────────
    match outcome {
        Ok(()) => {
            info!("specgen completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, no_color),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes — directory-creation failures, generation
/// rejections and task panics all arrive here, once.
fn handle_error(err: CliError, no_color: bool) -> ExitCode {
    // 1. Emit a structured log event at the right severity.
    err.log();

    // 2. Print the fixed header + diagnostic to stderr, so the message
    //    appears even when stdout is redirected.
    let msg = if !no_color && std::io::stderr().is_terminal() {
        err.format_colored()
    } else {
        err.format_plain()
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
