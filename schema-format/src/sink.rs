//! Violations and the sinks that receive them.
//!
//! A rule never decides on its own whether to keep going after a violation:
//! it hands the violation to an [`ErrorSink`] and obeys the returned [`Flow`].
//! Collecting every problem and aborting on the first one are both sink
//! policies, not rule behaviour.

use std::fmt;
use std::ops::ControlFlow;

use serde::Serialize;

use crate::format::FormatName;

/// A sink's answer after receiving a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep evaluating the value; further violations may follow.
    Continue,
    /// Stop evaluating the value now.
    Stop,
}

impl Flow {
    #[must_use]
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}

impl From<Flow> for ControlFlow<()> {
    fn from(flow: Flow) -> Self {
        match flow {
            Flow::Continue => Self::Continue(()),
            Flow::Stop => Self::Break(()),
        }
    }
}

/// Why a value failed its format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ViolationKind {
    /// The text does not have the shape of the format.
    SyntaxMismatch,
    /// A numeric component is out of bounds (hour 24, octet 256).
    RangeViolation,
    /// Well-shaped, but the date does not exist.
    CalendarInvalid,
    /// Group count or elision rules (IPv6).
    StructuralViolation,
    /// A non-text value where text is required.
    TypeMismatch,
}

impl ViolationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SyntaxMismatch => "syntax_mismatch",
            Self::RangeViolation => "range_violation",
            Self::CalendarInvalid => "calendar_invalid",
            Self::StructuralViolation => "structural_violation",
            Self::TypeMismatch => "type_mismatch",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected failure of a value against its format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct Violation {
    /// Format the value was checked against.
    pub format: FormatName,
    /// Which check failed.
    pub kind: ViolationKind,
    /// Location of the value (e.g. `#/billing/zip`).
    pub fragment: String,
    /// Human-readable message, specific to the format.
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(format: FormatName, kind: ViolationKind, fragment: &str) -> Self {
        Self {
            format,
            kind,
            fragment: fragment.to_owned(),
            message: format.message(fragment),
        }
    }

    /// Format the violation for human-readable output: `{fragment}: {message} [{format}/{kind}]`.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!(
            "{}: {} [{}/{}]",
            self.fragment, self.message, self.format, self.kind
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Receives violations and decides whether evaluation continues.
pub trait ErrorSink {
    /// Accept one violation. Returning [`Flow::Stop`] ends evaluation of the
    /// current value; violations already reported stay valid.
    fn report(&mut self, violation: Violation) -> Flow;
}

impl<F> ErrorSink for F
where
    F: FnMut(Violation) -> Flow,
{
    fn report(&mut self, violation: Violation) -> Flow {
        self(violation)
    }
}

/// Keeps every violation and always asks for more.
#[derive(Debug, Clone, Default)]
pub struct CollectSink {
    violations: Vec<Violation>,
}

impl CollectSink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }
}

impl ErrorSink for CollectSink {
    fn report(&mut self, violation: Violation) -> Flow {
        self.violations.push(violation);
        Flow::Continue
    }
}

/// Keeps the first violation and stops.
///
/// Rules never report again after a stop, so `first` is also the only
/// violation this sink sees.
#[derive(Debug, Clone, Default)]
pub struct FailFastSink {
    first: Option<Violation>,
}

impl FailFastSink {
    #[must_use]
    pub const fn new() -> Self {
        Self { first: None }
    }

    #[must_use]
    pub const fn first(&self) -> Option<&Violation> {
        self.first.as_ref()
    }

    #[must_use]
    pub fn into_first(self) -> Option<Violation> {
        self.first
    }
}

impl ErrorSink for FailFastSink {
    fn report(&mut self, violation: Violation) -> Flow {
        if self.first.is_none() {
            self.first = Some(violation);
        }
        Flow::Stop
    }
}

/// Binds a sink to the format and fragment currently being checked, so rules
/// only name the kind of failure.
pub struct Reporter<'a> {
    format: FormatName,
    fragment: &'a str,
    sink: &'a mut dyn ErrorSink,
    reported: usize,
}

impl<'a> Reporter<'a> {
    pub fn new(format: FormatName, fragment: &'a str, sink: &'a mut dyn ErrorSink) -> Self {
        Self {
            format,
            fragment,
            sink,
            reported: 0,
        }
    }

    /// Report a violation of `kind`; `Break` means the sink asked to stop.
    pub fn flag(&mut self, kind: ViolationKind) -> ControlFlow<()> {
        tracing::debug!(
            format = %self.format,
            kind = %kind,
            fragment = self.fragment,
            "format violation"
        );
        self.reported += 1;
        self.sink
            .report(Violation::new(self.format, kind, self.fragment))
            .into()
    }

    #[must_use]
    pub const fn reported(&self) -> usize {
        self.reported
    }
}
