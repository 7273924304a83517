//! Engine-facing adapter that turns [`ValidationOptions`] into a sink policy.

use serde_json::Value;

use crate::config::ValidationOptions;
use crate::dispatch::validate_format_with;
use crate::error::FormatError;
use crate::fragment::build_fragment;
use crate::schema::validate_schema_node;
use crate::sink::{CollectSink, ErrorSink, FailFastSink, Violation};

/// Format validation with a fixed set of options.
///
/// With `record_errors` every violation is returned; otherwise the first
/// violation aborts with [`FormatError::Violation`].
#[derive(Debug, Clone, Default)]
pub struct FormatValidator {
    options: ValidationOptions,
}

impl FormatValidator {
    #[must_use]
    pub const fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> ValidationOptions {
        self.options
    }

    /// Validate `value`, located at `fragments`, against the format called `format`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Violation`] with the first violation when
    /// `record_errors` is off.
    pub fn validate<S: AsRef<str>>(
        &self,
        format: &str,
        value: &Value,
        fragments: &[S],
    ) -> Result<Vec<Violation>, FormatError> {
        let fragment = build_fragment(fragments);
        let policy = self.options.non_text_policy;
        self.run(|sink| validate_format_with(policy, format, value, &fragment, sink))
    }

    /// Validate `value` against the `format` keyword of `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Violation`] with the first violation when
    /// `record_errors` is off.
    pub fn validate_node<S: AsRef<str>>(
        &self,
        schema: &Value,
        value: &Value,
        fragments: &[S],
    ) -> Result<Vec<Violation>, FormatError> {
        let policy = self.options.non_text_policy;
        self.run(|sink| validate_schema_node(schema, value, fragments, policy, sink))
    }

    fn run(&self, check: impl FnOnce(&mut dyn ErrorSink)) -> Result<Vec<Violation>, FormatError> {
        if self.options.record_errors {
            let mut sink = CollectSink::new();
            check(&mut sink);
            return Ok(sink.into_violations());
        }

        let mut sink = FailFastSink::new();
        check(&mut sink);
        match sink.into_first() {
            Some(violation) => Err(FormatError::Violation(violation)),
            None => Ok(Vec::new()),
        }
    }
}
