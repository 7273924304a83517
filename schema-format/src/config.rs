//! Options a host engine passes along with each validation.

use serde::{Deserialize, Serialize};

use crate::format::FormatName;

/// How non-text values (numbers, booleans, arrays, objects) are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum NonTextPolicy {
    /// `date-time`, `date`, `time`, `ipv4`, `ipv6` and `us-date` let non-text
    /// values pass; `email`, `phone`, `zip` and `postal` report a type mismatch.
    #[default]
    Legacy,
    /// Every format reports a type mismatch for non-text values.
    Strict,
}

impl NonTextPolicy {
    /// Whether a non-text value checked against `format` is a violation.
    #[must_use]
    pub const fn rejects_non_text(self, format: FormatName) -> bool {
        match self {
            Self::Legacy => format.requires_text(),
            Self::Strict => true,
        }
    }
}

/// Validation options.
///
/// The default is fail-fast with the legacy non-text policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ValidationOptions {
    /// Collect every violation instead of aborting on the first one.
    pub record_errors: bool,
    /// Treatment of non-text values.
    pub non_text_policy: NonTextPolicy,
}

impl ValidationOptions {
    #[must_use]
    pub const fn with_record_errors(mut self, record_errors: bool) -> Self {
        self.record_errors = record_errors;
        self
    }

    #[must_use]
    pub const fn with_non_text_policy(mut self, policy: NonTextPolicy) -> Self {
        self.non_text_policy = policy;
        self
    }
}
