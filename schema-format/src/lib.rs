//! # schema-format
//!
//! Format-constraint validation for JSON Schema string formats.
//!
//! Given a value and a `format` name (`date-time`, `ipv4`, `email`, ...),
//! decides whether the value satisfies that format's syntax and range rules.
//! Type, shape and reference validation belong to the surrounding schema
//! engine; this crate only answers the `format` keyword.
//!
//! Violations are delivered to an [`ErrorSink`], which answers
//! [`Flow::Continue`] to keep collecting or [`Flow::Stop`] to abort.
//!
//! ## Quick Start
//!
//! ```rust
//! use schema_format::{CollectSink, ViolationKind, validate_format};
//! use serde_json::json;
//!
//! let mut sink = CollectSink::new();
//! validate_format("ipv4", &json!("192.168.1.256"), "#/host", &mut sink);
//!
//! assert_eq!(sink.len(), 1);
//! assert_eq!(sink.violations()[0].kind, ViolationKind::RangeViolation);
//! ```
//!
//! With options, as a host engine would call it:
//!
//! ```rust
//! use schema_format::{FormatValidator, ValidationOptions};
//! use serde_json::json;
//!
//! let validator = FormatValidator::new(ValidationOptions::default());
//! let err = validator
//!     .validate("date", &json!("2023-02-29"), &["birthday"])
//!     .unwrap_err();
//! assert!(err.to_string().contains("#/birthday"));
//! ```

mod calendar;
mod config;
mod dispatch;
mod error;
mod format;
mod fragment;
mod patterns;
mod rules;
mod schema;
mod sink;
mod validator;

pub use config::{NonTextPolicy, ValidationOptions};
pub use dispatch::{is_blank, validate_format, validate_format_with, validate_known};
pub use error::FormatError;
pub use format::FormatName;
pub use fragment::build_fragment;
pub use schema::{format_keyword, validate_schema_node};
pub use sink::{CollectSink, ErrorSink, FailFastSink, Flow, Violation, ViolationKind};
pub use validator::FormatValidator;
