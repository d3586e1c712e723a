//! Generation orchestrator - the main use case.
//!
//! One invocation request, one generation attempt:
//! 1. Ensure the output directory exists (create missing ancestors)
//! 2. Invoke the Generator on the specification document
//!
//! No retries and no partial recovery — any failure propagates as a
//! [`SpecgenError`] for the caller's single reporting funnel.

use tracing::{info, instrument};

use crate::{
    error::{SpecgenError, SpecgenResult},
    generator::Generator,
    request::InvocationRequest,
};

/// Execute generation for a fully resolved request.
///
/// The output directory is created before the generator runs; if that
/// fails the generator is never invoked. The generator itself is handed in
/// by the composition root, already bound to the request's template,
/// output and templates directories.
#[instrument(
    skip_all,
    fields(
        document = %request.document_path.display(),
        template = %request.template,
        output = %request.output_dir.display(),
    )
)]
pub async fn generate(
    request: &InvocationRequest,
    generator: &dyn Generator,
) -> SpecgenResult<()> {
    // 1. Output directory must exist before generation starts.
    tokio::fs::create_dir_all(&request.output_dir)
        .await
        .map_err(|source| SpecgenError::OutputDirCreation {
            path: request.output_dir.clone(),
            source,
        })?;

    info!("Output directory ready");

    // 2. Exactly one generation attempt.
    generator.generate_from_file(&request.document_path).await?;

    info!("Generation completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::MockGenerator;
    use std::path::PathBuf;

    fn request_in(dir: &std::path::Path) -> InvocationRequest {
        InvocationRequest::new(dir.join("api.yaml"), "html")
            .with_output_dir(dir.join("out"))
            .with_templates_dir(dir.join("templates"))
    }

    #[tokio::test]
    async fn creates_output_dir_then_invokes_generator() {
        let tmp = tempfile::tempdir().unwrap();
        let request = request_in(tmp.path());
        let expected_doc = request.document_path.clone();

        let mut generator = MockGenerator::new();
        generator
            .expect_generate_from_file()
            .withf(move |doc| doc == expected_doc)
            .times(1)
            .returning(|_| Ok(()));

        generate(&request, &generator).await.unwrap();
        assert!(request.output_dir.is_dir());
    }

    #[tokio::test]
    async fn nested_output_dir_ancestors_are_created() {
        let tmp = tempfile::tempdir().unwrap();
        let request = InvocationRequest::new(tmp.path().join("api.yaml"), "html")
            .with_output_dir(tmp.path().join("a/b/c"));

        let mut generator = MockGenerator::new();
        generator
            .expect_generate_from_file()
            .times(1)
            .returning(|_| Ok(()));

        generate(&request, &generator).await.unwrap();
        assert!(tmp.path().join("a/b/c").is_dir());
    }

    #[tokio::test]
    async fn dir_creation_failure_never_invokes_generator() {
        let tmp = tempfile::tempdir().unwrap();
        // Collide the output dir with an existing file so create_dir_all fails.
        let collision = tmp.path().join("occupied");
        std::fs::write(&collision, "not a directory").unwrap();

        let request =
            InvocationRequest::new(tmp.path().join("api.yaml"), "html").with_output_dir(&collision);

        let mut generator = MockGenerator::new();
        generator.expect_generate_from_file().times(0);

        let err = generate(&request, &generator).await.unwrap_err();
        assert!(matches!(err, SpecgenError::OutputDirCreation { .. }));
    }

    #[tokio::test]
    async fn generator_rejection_propagates() {
        let tmp = tempfile::tempdir().unwrap();
        let request = request_in(tmp.path());

        let mut generator = MockGenerator::new();
        generator
            .expect_generate_from_file()
            .times(1)
            .returning(|_| {
                Err(SpecgenError::Generation {
                    message: "template exploded".into(),
                    source: None,
                })
            });

        let err = generate(&request, &generator).await.unwrap_err();
        assert!(err.to_string().contains("template exploded"));
    }

    #[tokio::test]
    async fn existing_output_dir_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        std::fs::create_dir(&out).unwrap();

        let request = InvocationRequest::new(PathBuf::from("api.yaml"), "html")
            .with_output_dir(&out);

        let mut generator = MockGenerator::new();
        generator
            .expect_generate_from_file()
            .times(1)
            .returning(|_| Ok(()));

        generate(&request, &generator).await.unwrap();
    }
}
