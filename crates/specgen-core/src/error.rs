//! Unified error handling for Specgen Core.
//!
//! One error type covers every fatal condition the orchestrator can hit:
//! output-directory creation, generator construction, and generation itself.
//! Parameter-parse problems are deliberately *not* represented here — they
//! are downgraded to warnings by [`crate::params::parse_params`] and never
//! become an error value.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for Specgen Core operations.
#[derive(Debug, Error)]
pub enum SpecgenError {
    /// The output directory could not be created.
    ///
    /// Fatal: generation must never start against a non-existent output
    /// directory, so this short-circuits the whole run.
    #[error("Could not create output directory {path}")]
    OutputDirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The specification document could not be read.
    ///
    /// Raised by the Generator — the orchestrator never pre-validates the
    /// document, existence checking is the Generator's job.
    #[error("Could not read specification document {path}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The named template does not exist in the templates directory.
    #[error("Template '{name}' not found in {templates_dir}")]
    TemplateNotFound {
        name: String,
        templates_dir: PathBuf,
    },

    /// The Generator failed while producing output artifacts.
    #[error("Generation failed: {message}")]
    Generation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SpecgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::OutputDirCreation { path, .. } => vec![
                format!("Could not create '{}'", path.display()),
                "Check that the path does not collide with an existing file".into(),
                "Check directory permissions".into(),
            ],
            Self::DocumentRead { path, .. } => vec![
                format!("Could not read '{}'", path.display()),
                "Check that the specification document exists".into(),
                "Check file permissions".into(),
            ],
            Self::TemplateNotFound {
                name,
                templates_dir,
            } => vec![
                format!(
                    "No template named '{}' under {}",
                    name,
                    templates_dir.display()
                ),
                "Use -t/--templates to point at your template directory".into(),
            ],
            Self::Generation { message, .. } => vec![
                format!("Generation failed: {}", message),
                "Re-run with -v for more detail".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::OutputDirCreation { .. } => ErrorCategory::Io,
            Self::DocumentRead { .. } => ErrorCategory::NotFound,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::Generation { .. } => ErrorCategory::Generation,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Filesystem setup failed (output directory).
    Io,
    /// A named resource (document, template) was missing.
    NotFound,
    /// The Generator rejected the run.
    Generation,
}

/// Convenient result type alias.
pub type SpecgenResult<T> = Result<T, SpecgenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn output_dir_errors_categorize_as_io() {
        let err = SpecgenError::OutputDirCreation {
            path: PathBuf::from("/tmp/x"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn template_not_found_categorizes_as_not_found() {
        let err = SpecgenError::TemplateNotFound {
            name: "html".into(),
            templates_dir: PathBuf::from("/opt/templates"),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn template_not_found_suggests_templates_flag() {
        let err = SpecgenError::TemplateNotFound {
            name: "html".into(),
            templates_dir: PathBuf::from("/opt/templates"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--templates")));
    }

    #[test]
    fn generation_errors_categorize_as_generation() {
        let err = SpecgenError::Generation {
            message: "boom".into(),
            source: None,
        };
        assert_eq!(err.category(), ErrorCategory::Generation);
    }

    #[test]
    fn generation_error_carries_message() {
        let err = SpecgenError::Generation {
            message: "bad document".into(),
            source: None,
        };
        assert!(err.to_string().contains("bad document"));
    }
}
