//! Reading schema and instance documents from disk.

use std::path::Path;

use anyhow::{Context, anyhow};
use serde_json::Value;

/// Syntax of a document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSyntax {
    Json,
    Yaml,
}

impl DocumentSyntax {
    /// `.yaml`/`.yml` (any case) is YAML; everything else is read as JSON.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(std::ffi::OsStr::to_str) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Parse document text in the given syntax.
///
/// # Errors
///
/// Returns an error if the content is not valid JSON/YAML.
pub fn parse_document(content: &str, syntax: DocumentSyntax) -> anyhow::Result<Value> {
    match syntax {
        DocumentSyntax::Json => {
            serde_json::from_str(content).map_err(|e| anyhow!("JSON parse error: {e}"))
        }
        DocumentSyntax::Yaml => {
            serde_saphyr::from_str(content).map_err(|e| anyhow!("YAML parse error: {e}"))
        }
    }
}

/// Read and parse a JSON or YAML document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_document(path: &Path) -> anyhow::Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded document");
    parse_document(&content, DocumentSyntax::for_path(path))
        .with_context(|| format!("Failed to parse {}", path.display()))
}
