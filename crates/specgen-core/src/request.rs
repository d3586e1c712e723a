//! The invocation model.
//!
//! An [`InvocationRequest`] is built once by the CLI layer from parsed
//! arguments and threaded by value through the pipeline — no module-level
//! state holds the document path or template name.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// Everything one generation run needs, fully resolved.
///
/// Both `document_path` and `template` are required; clap enforces their
/// presence before a request is ever constructed.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    /// Absolute path to the specification document.
    pub document_path: PathBuf,
    /// Name of the template to render.
    pub template: String,
    /// Absolute path to the directory artifacts are written into.
    pub output_dir: PathBuf,
    /// Absolute path to the directory templates are looked up in.
    pub templates_dir: PathBuf,
    /// Extra parameters made available to the template.
    pub params: Map<String, Value>,
}

impl InvocationRequest {
    /// Build a request with defaults: output dir = CWD, templates dir =
    /// `templates/` next to the executable, empty params.
    ///
    /// Relative paths are resolved against the current working directory.
    pub fn new(document_path: impl AsRef<Path>, template: impl Into<String>) -> Self {
        Self {
            document_path: resolve_path(document_path),
            template: template.into(),
            output_dir: resolve_path("."),
            templates_dir: default_templates_dir(),
            params: Map::new(),
        }
    }

    /// Override the output directory (resolved to absolute).
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = resolve_path(dir);
        self
    }

    /// Override the templates directory (resolved to absolute).
    pub fn with_templates_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.templates_dir = resolve_path(dir);
        self
    }

    /// Attach extra template parameters.
    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = params;
        self
    }
}

/// Resolve a path to absolute, relative to the current working directory.
///
/// Pure in the sense required here: no existence check is performed, and an
/// already-absolute path is returned unchanged. Document existence is
/// validated later by the Generator, not by the resolver.
pub fn resolve_path(raw: impl AsRef<Path>) -> PathBuf {
    let raw = raw.as_ref();
    if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        // `current_dir` only fails if the CWD was deleted out from under the
        // process; fall back to the relative path rather than panicking.
        std::env::current_dir()
            .map(|cwd| cwd.join(raw))
            .unwrap_or_else(|_| raw.to_path_buf())
    }
}

/// The fixed internal templates location: `templates/` beside the running
/// executable, falling back to `./templates` when the executable path is
/// unavailable (e.g. some containerized environments).
pub fn default_templates_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|d| d.join("templates")))
        .unwrap_or_else(|| resolve_path("templates"))
}
