//! Error handling for the specgen CLI.
//!
//! Every fatal path in the process — directory creation, generation,
//! out-of-band task failure — becomes a [`CliError`] and funnels through
//! one reporting/exit routine in `main`. The fixed "Something went wrong:"
//! header is printed in red, the diagnostic detail in magenta.

use std::error::Error as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use specgen_core::error::{ErrorCategory as CoreCategory, SpecgenError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `specgen-core` (directory creation,
    /// document reading, generation).
    #[error("{0}")]
    Core(#[from] SpecgenError),

    /// The generation task died outside the normal error path (panic).
    ///
    /// This is the top-level failure boundary: any asynchronous fault not
    /// surfaced as a `SpecgenError` still reaches the same funnel.
    #[error("generation task failed unexpectedly: {message}")]
    TaskFailed { message: String },
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),
            Self::TaskFailed { .. } => vec![
                "This appears to be a bug in specgen".into(),
                "Please report this issue at: https://github.com/cosecruz/specgen/issues".into(),
            ],
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Condition                       | Code |
    /// |---------------------------------|------|
    /// | Document / template not found   |  3   |
    /// | Everything else fatal           |  1   |
    ///
    /// Usage errors exit 2 via clap before a `CliError` ever exists.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::NotFound => 3,
                CoreCategory::Io | CoreCategory::Generation => 1,
            },
            Self::TaskFailed { .. } => 1,
        }
    }

    /// Format the error for display with colors: fixed red header, red
    /// message, magenta cause chain, yellow suggestions.
    pub fn format_colored(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Something went wrong:".red().bold()));
        output.push_str(&format!("{}\n", self.to_string().red()));

        let mut source = self.source();
        while let Some(err) = source {
            output.push_str(&format!("  {}\n", err.to_string().magenta()));
            source = err.source();
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self) -> String {
        let mut out = String::new();
        out.push_str("Something went wrong:\n");
        out.push_str(&format!("{self}\n"));

        let mut source = self.source();
        while let Some(err) = source {
            out.push_str(&format!("  Caused by: {err}\n"));
            source = err.source();
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::NotFound => tracing::warn!("Not found: {}", self),
                _ => tracing::error!("Generation failed: {}", self),
            },
            Self::TaskFailed { .. } => tracing::error!("Task failure: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    fn dir_error() -> CliError {
        CliError::Core(SpecgenError::OutputDirCreation {
            path: PathBuf::from("/tmp/x"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        })
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_dir_creation_is_one() {
        assert_eq!(dir_error().exit_code(), 1);
    }

    #[test]
    fn exit_code_not_found_is_three() {
        let err = CliError::Core(SpecgenError::TemplateNotFound {
            name: "html".into(),
            templates_dir: PathBuf::from("/opt/templates"),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_task_failure_is_one() {
        let err = CliError::TaskFailed {
            message: "panicked".into(),
        };
        assert_eq!(err.exit_code(), 1);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_fixed_header() {
        let s = dir_error().format_plain();
        assert!(s.contains("Something went wrong:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_walks_source_chain() {
        let s = dir_error().format_plain();
        assert!(s.contains("Caused by: denied"));
    }

    #[test]
    fn format_colored_contains_fixed_header() {
        assert!(dir_error().format_colored().contains("Something went wrong:"));
    }
}
