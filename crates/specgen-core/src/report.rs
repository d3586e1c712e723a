//! Reporter port - how the core talks to the user.
//!
//! Terminal styling is a presentation concern; the core only knows the
//! severity of what it has to say. The CLI crate implements this with a
//! colorized `OutputManager`.

/// Port for user-facing messages.
///
/// Implemented by:
/// - `specgen_cli::output::OutputManager` (production, colorized)
/// - [`NullReporter`] (tests)
pub trait Reporter: Send + Sync {
    /// Confirmation of a completed run.
    fn success(&self, msg: &str);

    /// Non-fatal problem; the run continues.
    fn warning(&self, msg: &str);

    /// Fatal problem; reporting only — exiting is the caller's job.
    fn error(&self, msg: &str);

    /// Secondary diagnostic line accompanying a warning or error.
    fn detail(&self, msg: &str);
}

/// Reporter that swallows everything. Useful in tests and as a default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn success(&self, _msg: &str) {}
    fn warning(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
    fn detail(&self, _msg: &str) {}
}
