//! Check report types.

use serde::Serialize;

use schema_format::Violation;

/// Result of a check run.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct CheckReport {
    /// Number of values checked against a known or unknown format.
    pub checked: usize,
    /// Whether no value violated its format.
    pub ok: bool,
    /// Every violation found, in discovery order.
    pub violations: Vec<Violation>,
}

impl CheckReport {
    #[must_use]
    pub fn new(checked: usize, violations: Vec<Violation>) -> Self {
        Self {
            checked,
            ok: violations.is_empty(),
            violations,
        }
    }

    /// Number of violations found.
    #[must_use]
    pub fn errors_count(&self) -> usize {
        self.violations.len()
    }
}
