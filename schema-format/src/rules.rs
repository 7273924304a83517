//! One rule per format.
//!
//! Every rule checks the pattern first and then the semantic constraints in a
//! fixed order, handing each failure to the [`Reporter`]. A `Break` from the
//! reporter ends the rule immediately (`?`); otherwise the remaining checks
//! still run so a collecting sink sees every independent problem.

use std::ops::ControlFlow;

use serde_json::Value;

use crate::calendar;
use crate::config::NonTextPolicy;
use crate::format::FormatName;
use crate::patterns;
use crate::sink::{Reporter, ViolationKind};

const MAX_HOUR: u32 = 23;
const MAX_MINUTE: u32 = 59;
const MAX_SECOND: u32 = 59;
const MAX_OCTET: u32 = 255;
const MAX_IPV6_GROUPS: usize = 8;
const MAX_IPV6_GROUP_DIGITS: usize = 4;

/// Run the rule for `format` against a non-blank value.
pub fn check(
    format: FormatName,
    value: &Value,
    policy: NonTextPolicy,
    reporter: &mut Reporter<'_>,
) -> ControlFlow<()> {
    let Some(text) = value.as_str() else {
        if policy.rejects_non_text(format) {
            reporter.flag(ViolationKind::TypeMismatch)?;
        }
        return ControlFlow::Continue(());
    };

    match format {
        FormatName::DateTime => date_time(text, reporter),
        FormatName::Date => date(text, reporter),
        FormatName::Time => time(text, reporter),
        FormatName::Ipv4 => ipv4(text, reporter),
        FormatName::Ipv6 => ipv6(text, reporter),
        FormatName::UsDate => us_date(text, reporter),
        FormatName::Email => matches_pattern(&patterns::EMAIL, text, reporter),
        FormatName::Phone => matches_pattern(&patterns::PHONE, text, reporter),
        FormatName::Zip => matches_pattern(&patterns::ZIP, text, reporter),
        FormatName::Postal => matches_pattern(&patterns::POSTAL, text, reporter),
    }
}

fn matches_pattern(
    pattern: &regex::Regex,
    text: &str,
    reporter: &mut Reporter<'_>,
) -> ControlFlow<()> {
    if pattern.is_match(text) {
        ControlFlow::Continue(())
    } else {
        reporter.flag(ViolationKind::SyntaxMismatch)
    }
}

/// True when `field` is not a number no greater than `max`.
fn exceeds(field: &str, max: u32) -> bool {
    !field.parse::<u32>().is_ok_and(|n| n <= max)
}

fn clock(hour: &str, minute: &str, second: &str, reporter: &mut Reporter<'_>) -> ControlFlow<()> {
    for (field, max) in [(hour, MAX_HOUR), (minute, MAX_MINUTE), (second, MAX_SECOND)] {
        if exceeds(field, max) {
            reporter.flag(ViolationKind::RangeViolation)?;
        }
    }
    ControlFlow::Continue(())
}

fn date_time(text: &str, reporter: &mut Reporter<'_>) -> ControlFlow<()> {
    let Some(caps) = patterns::DATE_TIME.captures(text) else {
        return reporter.flag(ViolationKind::SyntaxMismatch);
    };
    if calendar::from_parts(&caps[1], &caps[2], &caps[3]).is_none() {
        reporter.flag(ViolationKind::CalendarInvalid)?;
    }
    clock(&caps[4], &caps[5], &caps[6], reporter)
}

fn date(text: &str, reporter: &mut Reporter<'_>) -> ControlFlow<()> {
    let Some(caps) = patterns::DATE.captures(text) else {
        return reporter.flag(ViolationKind::SyntaxMismatch);
    };
    if calendar::from_parts(&caps[1], &caps[2], &caps[3]).is_none() {
        reporter.flag(ViolationKind::CalendarInvalid)?;
    }
    ControlFlow::Continue(())
}

fn time(text: &str, reporter: &mut Reporter<'_>) -> ControlFlow<()> {
    let Some(caps) = patterns::TIME.captures(text) else {
        return reporter.flag(ViolationKind::SyntaxMismatch);
    };
    clock(&caps[1], &caps[2], &caps[3], reporter)
}

fn ipv4(text: &str, reporter: &mut Reporter<'_>) -> ControlFlow<()> {
    let Some(caps) = patterns::IPV4.captures(text) else {
        return reporter.flag(ViolationKind::SyntaxMismatch);
    };
    for octet in caps.iter().skip(1).flatten() {
        if exceeds(octet.as_str(), MAX_OCTET) {
            reporter.flag(ViolationKind::RangeViolation)?;
        }
    }
    ControlFlow::Continue(())
}

/// Split on `:`, folding the doubled empty group a leading or trailing `::`
/// produces into one, so `::1`, `fe80::` and `::` each carry a single elision.
fn ipv6_groups(text: &str) -> Vec<&str> {
    let mut groups: Vec<&str> = text.split(':').collect();
    if text.starts_with("::") {
        groups.remove(0);
    }
    if text.ends_with("::") && groups.len() > 1 {
        groups.pop();
    }
    groups
}

fn ipv6(text: &str, reporter: &mut Reporter<'_>) -> ControlFlow<()> {
    if !patterns::IPV6_CHARSET.is_match(text) {
        return reporter.flag(ViolationKind::SyntaxMismatch);
    }

    let groups = ipv6_groups(text);
    if groups.len() > MAX_IPV6_GROUPS {
        reporter.flag(ViolationKind::StructuralViolation)?;
    }

    // A single ':' at either edge is not an elision.
    let dangling_start = text.starts_with(':') && !text.starts_with("::");
    let dangling_end = text.ends_with(':') && !text.ends_with("::");
    if dangling_start || dangling_end {
        reporter.flag(ViolationKind::StructuralViolation)?;
    }

    let mut elided = false;
    for group in groups {
        if group.is_empty() {
            if elided {
                reporter.flag(ViolationKind::StructuralViolation)?;
            }
            elided = true;
        } else if group.len() > MAX_IPV6_GROUP_DIGITS {
            reporter.flag(ViolationKind::StructuralViolation)?;
        }
    }
    ControlFlow::Continue(())
}

fn us_date(text: &str, reporter: &mut Reporter<'_>) -> ControlFlow<()> {
    let Some(caps) = patterns::US_DATE.captures(text) else {
        return reporter.flag(ViolationKind::SyntaxMismatch);
    };
    if caps[2] != caps[4] {
        return reporter.flag(ViolationKind::SyntaxMismatch);
    }
    if calendar::from_us_parts(&caps[1], &caps[3], &caps[5]).is_none() {
        reporter.flag(ViolationKind::CalendarInvalid)?;
    }
    ControlFlow::Continue(())
}
