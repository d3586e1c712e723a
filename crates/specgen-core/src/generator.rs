//! Generator port - the external rendering collaborator.
//!
//! The core never looks inside a generator; it only constructs a
//! [`GeneratorConfig`], hands it to the composition root, and awaits one
//! `generate_from_file` call through this trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::SpecgenResult;
use crate::request::InvocationRequest;

/// Everything a generator needs to be constructed.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Name of the template to render.
    pub template: String,
    /// Absolute directory artifacts are written into.
    pub output_dir: PathBuf,
    /// Absolute directory templates are looked up in.
    pub templates_dir: PathBuf,
    /// Extra parameters available during rendering.
    pub params: Map<String, Value>,
}

impl From<&InvocationRequest> for GeneratorConfig {
    fn from(request: &InvocationRequest) -> Self {
        Self {
            template: request.template.clone(),
            output_dir: request.output_dir.clone(),
            templates_dir: request.templates_dir.clone(),
            params: request.params.clone(),
        }
    }
}

/// Port for artifact generation.
///
/// Implemented by:
/// - `specgen_adapters::TemplateGenerator` (production)
/// - `MockGenerator` (mockall, orchestrator tests)
///
/// Document existence is validated by implementations, not by callers: the
/// orchestrator passes the path through untouched and interprets rejection.
// mockall requires automock to appear before async_trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Generator: Send + Sync {
    /// Render the configured template against `document` into the output
    /// directory. Resolves once: fulfilled on success, rejected with a
    /// [`crate::error::SpecgenError`] on any failure.
    async fn generate_from_file(&self, document: &Path) -> SpecgenResult<()>;
}
