//! Specgen Core - Ports and Orchestration
//!
//! This crate provides the invocation model and orchestration layer for the
//! specgen artifact-generation tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          specgen-cli (CLI)              │
//! │    (composition root, Reporter impl)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Generation Orchestrator          │
//! │  (ensure output dir, invoke Generator)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Ports (Generator, Reporter)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    specgen-adapters (Infrastructure)    │
//! │          (TemplateGenerator)            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use specgen_core::prelude::*;
//!
//! # async fn demo(generator: Box<dyn Generator>) -> SpecgenResult<()> {
//! let request = InvocationRequest::new("./api.yaml", "html")
//!     .with_output_dir("./out");
//!
//! orchestrator::generate(&request, generator.as_ref()).await
//! # }
//! ```

// Invocation model (request, path resolution)
pub mod request;

// Best-effort --params deserialization
pub mod params;

// Driven ports
pub mod generator;
pub mod report;

// Orchestration logic
pub mod orchestrator;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::error::{SpecgenError, SpecgenResult};
    pub use crate::generator::{Generator, GeneratorConfig};
    pub use crate::orchestrator;
    pub use crate::params::parse_params;
    pub use crate::report::{NullReporter, Reporter};
    pub use crate::request::{InvocationRequest, resolve_path};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
