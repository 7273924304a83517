//! Error types for format validation.

use thiserror::Error;

use crate::sink::Violation;

/// Errors surfaced to callers of the engine-facing API.
///
/// Violations are normally delivered through an [`ErrorSink`](crate::ErrorSink);
/// this type only carries them out-of-band when the caller asked for fail-fast
/// validation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FormatError {
    /// A format name outside the supported set was requested where one is required.
    #[error("Unknown format '{name}'")]
    UnknownFormat {
        /// The name as given.
        name: String,
    },

    /// The first violation of a fail-fast validation.
    #[error("{0}")]
    Violation(Violation),
}

impl FormatError {
    /// The violation that aborted validation, if this error carries one.
    #[must_use]
    pub const fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Violation(violation) => Some(violation),
            Self::UnknownFormat { .. } => None,
        }
    }
}
