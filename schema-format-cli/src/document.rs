//! Checks an instance document against the `format` keywords of a schema.
//!
//! Only `properties` and `items` are followed; everything else a schema
//! engine would do (`$ref`, combinators, required) is out of scope here.

use serde_json::Value;

use schema_format::{
    ErrorSink, Flow, ValidationOptions, Violation, format_keyword, validate_schema_node,
};

use crate::report::CheckReport;

/// Collects violations across a whole document and, in fail-fast mode,
/// halts the walk after the first one.
struct DocumentSink {
    violations: Vec<Violation>,
    fail_fast: bool,
}

impl DocumentSink {
    fn halted(&self) -> bool {
        self.fail_fast && !self.violations.is_empty()
    }
}

impl ErrorSink for DocumentSink {
    fn report(&mut self, violation: Violation) -> Flow {
        self.violations.push(violation);
        if self.fail_fast {
            Flow::Stop
        } else {
            Flow::Continue
        }
    }
}

struct Walk {
    options: ValidationOptions,
    sink: DocumentSink,
    fragments: Vec<String>,
    checked: usize,
}

impl Walk {
    fn node(&mut self, schema: &Value, instance: &Value) {
        if format_keyword(schema).is_some() {
            self.checked += 1;
            validate_schema_node(
                schema,
                instance,
                self.fragments.as_slice(),
                self.options.non_text_policy,
                &mut self.sink,
            );
        }

        if let Some(properties) = schema.get("properties").and_then(Value::as_object)
            && let Some(object) = instance.as_object()
        {
            for (key, sub_schema) in properties {
                if self.sink.halted() {
                    return;
                }
                // Absent properties are a `required` concern, not a format one.
                if let Some(child) = object.get(key) {
                    self.fragments.push(key.clone());
                    self.node(sub_schema, child);
                    self.fragments.pop();
                }
            }
        }

        if let Some(items) = schema.get("items")
            && let Some(array) = instance.as_array()
        {
            for (i, child) in array.iter().enumerate() {
                if self.sink.halted() {
                    return;
                }
                self.fragments.push(i.to_string());
                self.node(items, child);
                self.fragments.pop();
            }
        }
    }
}

/// Walk `instance` alongside `schema` and check every value whose schema node
/// carries a `format` keyword.
///
/// With `record_errors` off, the walk stops at the first violation.
#[must_use]
pub fn check_document(schema: &Value, instance: &Value, options: ValidationOptions) -> CheckReport {
    let mut walk = Walk {
        options,
        sink: DocumentSink {
            violations: Vec::new(),
            fail_fast: !options.record_errors,
        },
        fragments: Vec::new(),
        checked: 0,
    };
    walk.node(schema, instance);
    tracing::info!(
        checked = walk.checked,
        violations = walk.sink.violations.len(),
        "document checked"
    );
    CheckReport::new(walk.checked, walk.sink.violations)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use schema_format::{NonTextPolicy, ViolationKind};
    use serde_json::json;

    fn schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "created": {"type": "string", "format": "date-time"},
                "contact": {
                    "type": "object",
                    "properties": {
                        "email": {"format": "email"},
                        "phone": {"format": "phone"}
                    }
                },
                "hosts": {"type": "array", "items": {"format": "ipv4"}},
                "note": {"format": "markdown"}
            }
        })
    }

    fn collect() -> ValidationOptions {
        ValidationOptions::default().with_record_errors(true)
    }

    #[test]
    fn test_valid_document() {
        let instance = json!({
            "created": "2024-02-29T08:30:00Z",
            "contact": {"email": "ops@example.com", "phone": "(555) 010-9999"},
            "hosts": ["10.0.0.1", "10.0.0.2"],
            "note": "*anything*"
        });
        let report = check_document(&schema(), &instance, collect());
        assert!(report.ok, "{:?}", report.violations);
        assert_eq!(report.checked, 6);
    }

    #[test]
    fn test_fragments_follow_properties_and_items() {
        let instance = json!({
            "contact": {"email": "nope"},
            "hosts": ["10.0.0.1", "10.0.0.300"]
        });
        let report = check_document(&schema(), &instance, collect());
        let fragments: Vec<_> = report
            .violations
            .iter()
            .map(|v| v.fragment.as_str())
            .collect();
        assert_eq!(fragments, vec!["#/contact/email", "#/hosts/1"]);
        assert_eq!(report.errors_count(), 2);
    }

    #[test]
    fn test_fail_fast_stops_walk() {
        let instance = json!({
            "contact": {"email": "nope", "phone": "12"},
            "hosts": ["300.0.0.1"]
        });
        let report = check_document(&schema(), &instance, ValidationOptions::default());
        assert_eq!(report.errors_count(), 1);
        assert!(!report.ok);
    }

    #[test]
    fn test_missing_properties_are_skipped() {
        let report = check_document(&schema(), &json!({}), collect());
        assert!(report.ok);
        assert_eq!(report.checked, 0);
    }

    #[test]
    fn test_strict_policy_applies_to_nodes() {
        let instance = json!({"created": 1_700_000_000});
        let options = collect().with_non_text_policy(NonTextPolicy::Strict);
        let report = check_document(&schema(), &instance, options);
        assert_eq!(report.violations[0].kind, ViolationKind::TypeMismatch);
    }
}
