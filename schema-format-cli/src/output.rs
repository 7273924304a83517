//! Output formatting for check reports.
//!
//! Provides JSON and human-readable formatters for `CheckReport` and for the
//! format listing.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use schema_format::FormatName;

use crate::report::CheckReport;

/// Format a `CheckReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `CheckReport` as human-readable text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  FORMAT CHECK")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  Values checked: {}", report.checked)?;
    writeln!(writer, "  Violations:     {}", report.errors_count())?;
    writeln!(writer)?;

    if !report.violations.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        for violation in &report.violations {
            writeln!(writer, "{}", violation.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok {
        writeln!(
            writer,
            "{} All {} value(s) passed format validation",
            "\u{2713}".green(),
            report.checked
        )?;
    } else {
        writeln!(
            writer,
            "{} {} format violation(s) found",
            "\u{2717}".red(),
            report.errors_count()
        )?;
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}

#[derive(Serialize)]
struct FormatEntry {
    name: &'static str,
    aliases: &'static [&'static str],
    requires_text: bool,
}

/// List the supported formats, as JSON when `json` is set.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_formats(json: bool, writer: &mut dyn Write) -> anyhow::Result<()> {
    let entries: Vec<FormatEntry> = FormatName::ALL
        .into_iter()
        .map(|format| FormatEntry {
            name: format.as_str(),
            aliases: format.aliases(),
            requires_text: format.requires_text(),
        })
        .collect();

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }

    for entry in &entries {
        if entry.aliases.is_empty() {
            writeln!(writer, "{}", entry.name)?;
        } else {
            writeln!(
                writer,
                "{} (alias: {})",
                entry.name,
                entry.aliases.join(", ")
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use schema_format::{CollectSink, validate_format};
    use serde_json::json;

    fn failing_report() -> CheckReport {
        let mut sink = CollectSink::new();
        validate_format("zip", &json!("ABCDE"), "#/zip", &mut sink);
        CheckReport::new(1, sink.into_violations())
    }

    #[test]
    fn test_write_json() {
        let mut buf = Vec::new();
        write_json(&failing_report(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["checked"], 1);
        assert_eq!(value["violations"][0]["kind"], "syntax_mismatch");
        assert_eq!(value["violations"][0]["format"], "zip");
    }

    #[test]
    fn test_write_human() {
        let mut buf = Vec::new();
        write_human(&failing_report(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Violations:     1"));
        assert!(text.contains("#/zip: The zip code '#/zip' is not formatted correctly"));
        assert!(text.contains("1 format violation(s) found"));
    }

    #[test]
    fn test_write_human_ok() {
        let mut buf = Vec::new();
        write_human(&CheckReport::new(3, Vec::new()), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("All 3 value(s) passed"));
    }

    #[test]
    fn test_write_formats() {
        let mut buf = Vec::new();
        write_formats(false, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("ipv4 (alias: ip-address)"));
        assert_eq!(text.lines().count(), FormatName::ALL.len());

        let mut buf = Vec::new();
        write_formats(true, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value.as_array().unwrap().len(), FormatName::ALL.len());
    }
}
