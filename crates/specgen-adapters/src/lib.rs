//! Infrastructure adapters for specgen.
//!
//! This crate implements the ports defined in `specgen_core`. It contains
//! all external dependencies and I/O operations.

pub mod generator;

// Re-export commonly used adapters
pub use generator::TemplateGenerator;
