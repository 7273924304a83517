//! Library half of the `schema-format` command: document loading, the
//! schema/instance walk, reports and their output.

pub mod document;
pub mod load;
pub mod output;
pub mod report;

pub use document::check_document;
pub use load::{DocumentSyntax, load_document, parse_document};
pub use report::CheckReport;
