//! Best-effort `--params` deserialization.
//!
//! Malformed input is a warning, never an error: the run proceeds with an
//! empty parameter set so a typo in `--params` cannot kill a generation.

use serde_json::{Map, Value};
use tracing::debug;

use crate::report::Reporter;

/// Parse a raw `--params` JSON string into a parameter mapping.
///
/// On success the parsed object is returned unchanged. On malformed JSON —
/// or valid JSON that is not an object — a warning naming the offending
/// input is emitted through the [`Reporter`], a detail line carries the
/// parser's own message, and an empty mapping is returned. This function
/// never fails past its own boundary.
pub fn parse_params(raw: &str, reporter: &dyn Reporter) -> Map<String, Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => {
            debug!(keys = map.len(), "parsed --params");
            map
        }
        Ok(other) => {
            warn_unusable(raw, reporter, &format!("expected a JSON object, got {other}"));
            Map::new()
        }
        Err(e) => {
            warn_unusable(raw, reporter, &e.to_string());
            Map::new()
        }
    }
}

fn warn_unusable(raw: &str, reporter: &dyn Reporter, detail: &str) {
    reporter.warning(&format!(
        "Warning: values of --params will not be available in the templates, \
         there was a error parsing: {raw}"
    ));
    reporter.detail(detail);
}
