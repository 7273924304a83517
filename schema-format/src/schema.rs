//! Entry point for a schema engine walking its own tree.

use serde_json::Value;

use crate::config::NonTextPolicy;
use crate::dispatch::validate_format_with;
use crate::fragment::build_fragment;
use crate::sink::ErrorSink;

/// The `format` keyword of a schema node, if it has a string one.
#[must_use]
pub fn format_keyword(schema: &Value) -> Option<&str> {
    schema.get("format").and_then(Value::as_str)
}

/// Validate `data` against the `format` keyword of `schema`.
///
/// Nodes without a string `format` keyword are a no-op. `fragments` is the
/// path of `data` within the instance document.
pub fn validate_schema_node<S: AsRef<str>>(
    schema: &Value,
    data: &Value,
    fragments: &[S],
    policy: NonTextPolicy,
    sink: &mut dyn ErrorSink,
) {
    let Some(format) = format_keyword(schema) else {
        return;
    };
    validate_format_with(policy, format, data, &build_fragment(fragments), sink);
}
