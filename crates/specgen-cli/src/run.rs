//! The one generation run.
//!
//! Responsibility: translate CLI arguments into an `InvocationRequest`,
//! construct the concrete generator, call the core orchestrator, and print
//! the success lines. No business logic lives here.

use std::sync::Arc;

use tracing::{debug, instrument};

use specgen_adapters::TemplateGenerator;
use specgen_core::{
    generator::GeneratorConfig,
    orchestrator,
    params::parse_params,
    report::Reporter,
    request::InvocationRequest,
};

use crate::{cli::Cli, error::CliResult, output::OutputManager};

/// Execute a generation run end to end.
///
/// Dispatch sequence:
/// 1. Build the `InvocationRequest` (paths resolved to absolute)
/// 2. Best-effort parse of `--params` (malformed input warns, never fails)
/// 3. Construct the `TemplateGenerator` bound to the request
/// 4. Run the core orchestrator (mkdir + single generation attempt)
/// 5. Print the success confirmation with the resolved output location
#[instrument(skip_all, fields(template = %cli.template))]
pub async fn execute(cli: Cli, output: Arc<OutputManager>) -> CliResult<()> {
    // 1–2. Resolve the request; params warnings go through the reporter.
    let mut request = InvocationRequest::new(&cli.document, &cli.template);
    if let Some(dir) = &cli.output {
        request = request.with_output_dir(dir);
    }
    if let Some(dir) = &cli.templates {
        request = request.with_templates_dir(dir);
    }
    if let Some(raw) = &cli.params {
        request = request.with_params(parse_params(raw, output.as_ref()));
    }

    debug!(
        document = %request.document_path.display(),
        output = %request.output_dir.display(),
        templates = %request.templates_dir.display(),
        params = request.params.len(),
        "Invocation resolved"
    );

    // 3. Composition root: bind the concrete generator to the request.
    let generator = TemplateGenerator::new(GeneratorConfig::from(&request));

    // 4. One attempt; every failure funnels out as a CliError.
    orchestrator::generate(&request, &generator).await?;

    // 5. Confirmation names the resolved output directory.
    output.success("Done! \u{2728}");
    output.generated_at(&request.output_dir);

    Ok(())
}
