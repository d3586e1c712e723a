//! File-walking template generator.
//!
//! The concrete [`Generator`] implementation: renders every file under
//! `templates_dir/<template>/` into the output directory, substituting
//! `{{ key }}` placeholders from the invocation's extra parameters.
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── html/
//! │   ├── index.html           ← rendered with {{ key }} substitution
//! │   └── css/
//! │       └── main.css
//! └── markdown/
//!     └── README.md
//! ```
//!
//! Deliberately minimal: no template language beyond flat variable
//! substitution. Binary files (non-UTF-8) are copied through untouched.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use specgen_core::{
    error::{SpecgenError, SpecgenResult},
    generator::{Generator, GeneratorConfig},
};

/// Generator that expands a named on-disk template directory.
pub struct TemplateGenerator {
    config: GeneratorConfig,
}

impl TemplateGenerator {
    /// Bind a generator to a template name, output directory and templates
    /// directory. No I/O happens until [`Generator::generate_from_file`].
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    fn template_root(&self) -> PathBuf {
        self.config.templates_dir.join(&self.config.template)
    }
}

#[async_trait]
impl Generator for TemplateGenerator {
    #[instrument(skip_all, fields(template = %self.config.template))]
    async fn generate_from_file(&self, document: &Path) -> SpecgenResult<()> {
        // The document must be readable — existence validation lives here,
        // not in the CLI or the orchestrator.
        let document_text = tokio::fs::read_to_string(document).await.map_err(|source| {
            SpecgenError::DocumentRead {
                path: document.to_path_buf(),
                source,
            }
        })?;

        let root = self.template_root();
        if !root.is_dir() {
            return Err(SpecgenError::TemplateNotFound {
                name: self.config.template.clone(),
                templates_dir: self.config.templates_dir.clone(),
            });
        }

        info!(root = %root.display(), "Rendering template");

        let mut rendered = 0usize;
        for entry in WalkDir::new(&root) {
            let entry = entry.map_err(|e| SpecgenError::Generation {
                message: format!("could not walk template '{}'", self.config.template),
                source: Some(Box::new(e)),
            })?;

            // Safe: every entry sits under `root`.
            let relative = entry
                .path()
                .strip_prefix(&root)
                .expect("walkdir entry outside template root");
            let target = self.config.output_dir.join(relative);

            if entry.file_type().is_dir() {
                tokio::fs::create_dir_all(&target)
                    .await
                    .map_err(|e| write_error(&target, e))?;
                continue;
            }

            let raw = tokio::fs::read(entry.path())
                .await
                .map_err(|e| write_error(entry.path(), e))?;

            let output = match String::from_utf8(raw) {
                Ok(text) => render(&text, &self.config, &document_text).into_bytes(),
                // Non-UTF-8 assets (images etc.) pass through verbatim.
                Err(e) => e.into_bytes(),
            };

            if let Some(parent) = target.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| write_error(parent, e))?;
            }
            tokio::fs::write(&target, output)
                .await
                .map_err(|e| write_error(&target, e))?;

            debug!(file = %relative.display(), "Rendered");
            rendered += 1;
        }

        info!(files = rendered, "Template rendered");
        Ok(())
    }
}

/// Substitute `{{ key }}` placeholders from the extra parameters.
///
/// `{{ document }}` expands to the full specification document text; JSON
/// string values substitute bare, everything else substitutes as JSON.
fn render(text: &str, config: &GeneratorConfig, document_text: &str) -> String {
    let mut out = text.replace("{{ document }}", document_text);
    for (key, value) in &config.params {
        let replacement = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        for pattern in [format!("{{{{ {key} }}}}"), format!("{{{{{key}}}}}")] {
            out = out.replace(&pattern, &replacement);
        }
    }
    out
}

fn write_error(path: &Path, source: std::io::Error) -> SpecgenError {
    SpecgenError::Generation {
        message: format!("could not write artifact at {}", path.display()),
        source: Some(Box::new(source)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value, json};
    use std::fs;

    fn config(tmp: &Path, params: Map<String, Value>) -> GeneratorConfig {
        GeneratorConfig {
            template: "html".into(),
            output_dir: tmp.join("out"),
            templates_dir: tmp.join("templates"),
            params,
        }
    }

    fn seed_template(tmp: &Path) {
        let root = tmp.join("templates/html");
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join("index.html"), "<h1>{{ title }}</h1>").unwrap();
        fs::write(root.join("assets/style.css"), "body {}").unwrap();
    }

    fn params_with_title() -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("title".into(), json!("My API"));
        params
    }

    #[tokio::test]
    async fn renders_tree_with_substitution() {
        let tmp = tempfile::tempdir().unwrap();
        seed_template(tmp.path());
        fs::create_dir_all(tmp.path().join("out")).unwrap();
        fs::write(tmp.path().join("api.yaml"), "asyncapi: 2.0").unwrap();

        let generator = TemplateGenerator::new(config(tmp.path(), params_with_title()));
        generator
            .generate_from_file(&tmp.path().join("api.yaml"))
            .await
            .unwrap();

        let index = fs::read_to_string(tmp.path().join("out/index.html")).unwrap();
        assert_eq!(index, "<h1>My API</h1>");
        assert!(tmp.path().join("out/assets/style.css").is_file());
    }

    #[tokio::test]
    async fn missing_document_rejects_with_document_read() {
        let tmp = tempfile::tempdir().unwrap();
        seed_template(tmp.path());

        let generator = TemplateGenerator::new(config(tmp.path(), Map::new()));
        let err = generator
            .generate_from_file(&tmp.path().join("nope.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, SpecgenError::DocumentRead { .. }));
    }

    #[tokio::test]
    async fn unknown_template_rejects_with_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("templates")).unwrap();
        fs::write(tmp.path().join("api.yaml"), "asyncapi: 2.0").unwrap();

        let generator = TemplateGenerator::new(config(tmp.path(), Map::new()));
        let err = generator
            .generate_from_file(&tmp.path().join("api.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, SpecgenError::TemplateNotFound { .. }));
    }

    #[test]
    fn render_substitutes_both_spacings() {
        let cfg = config(Path::new("/tmp"), params_with_title());
        assert_eq!(render("{{ title }}/{{title}}", &cfg, ""), "My API/My API");
    }

    #[test]
    fn render_serializes_non_string_values_as_json() {
        let mut params = Map::new();
        params.insert("count".into(), json!(3));
        params.insert("tags".into(), json!(["a", "b"]));
        let cfg = config(Path::new("/tmp"), params);
        assert_eq!(
            render("{{ count }} {{ tags }}", &cfg, ""),
            "3 [\"a\",\"b\"]"
        );
    }

    #[test]
    fn render_exposes_document_text() {
        let cfg = config(Path::new("/tmp"), Map::new());
        assert_eq!(render("spec: {{ document }}", &cfg, "X"), "spec: X");
    }
}
