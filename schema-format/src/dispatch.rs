//! Maps a format name to its rule and feeds violations to the sink.

use serde_json::Value;

use crate::config::NonTextPolicy;
use crate::format::FormatName;
use crate::rules;
use crate::sink::{ErrorSink, Reporter};

/// Whether a value counts as missing: `null`, `false`, whitespace-only text,
/// an empty array or an empty object.
///
/// Presence is validated elsewhere, so blank values never violate a format.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(true) | Value::Number(_) => false,
    }
}

/// Validate `value` against the format called `format`, with the legacy
/// non-text policy.
///
/// Blank values and unknown format names are ignored. Violations go to `sink`
/// in check order; evaluation stops as soon as the sink answers
/// [`Flow::Stop`](crate::Flow::Stop).
pub fn validate_format(format: &str, value: &Value, fragment: &str, sink: &mut dyn ErrorSink) {
    validate_format_with(NonTextPolicy::Legacy, format, value, fragment, sink);
}

/// [`validate_format`] with an explicit non-text policy.
pub fn validate_format_with(
    policy: NonTextPolicy,
    format: &str,
    value: &Value,
    fragment: &str,
    sink: &mut dyn ErrorSink,
) {
    if is_blank(value) {
        tracing::trace!(format, fragment, "blank value, format not checked");
        return;
    }
    let Some(name) = FormatName::lookup(format) else {
        tracing::trace!(format, fragment, "unknown format ignored");
        return;
    };
    validate_known(policy, name, value, fragment, sink);
}

/// Validate against an already-resolved format.
pub fn validate_known(
    policy: NonTextPolicy,
    format: FormatName,
    value: &Value,
    fragment: &str,
    sink: &mut dyn ErrorSink,
) {
    if is_blank(value) {
        return;
    }
    let mut reporter = Reporter::new(format, fragment, sink);
    if rules::check(format, value, policy, &mut reporter).is_break() {
        tracing::trace!(
            format = %format,
            fragment,
            reported = reporter.reported(),
            "validation stopped by sink"
        );
    }
}
