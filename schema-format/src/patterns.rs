//! Anchored patterns for every format, compiled once on first use.
//!
//! All classes are spelled out as ASCII (`[0-9]`, `[A-Za-z0-9_]`) because
//! `\d` and `\w` in the `regex` crate match Unicode digits and letters.
//! `^`/`$` anchor the whole text, so a trailing newline never matches.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid format regex {pattern}: {err}"),
    }
}

/// `YYYY-MM-DDThh:mm:ss[.,fraction]Z`; groups: year, month, day, hour, minute, second.
pub static DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})", // calendar date
        r"T([0-9]{2}):([0-9]{2}):([0-9]{2})", // wall-clock time
        r"(?:[.,][0-9]+)?",                   // optional fraction of the second
        r"Z$",                                // UTC designator only
    ))
});

/// `YYYY-MM-DD`; groups: year, month, day.
pub static DATE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$"));

/// `hh:mm:ss`; groups: hour, minute, second.
pub static TIME: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})$"));

/// Four dot-separated decimal groups; one group per octet.
pub static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
});

/// Character set only; group structure is checked in code.
pub static IPV6_CHARSET: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-f0-9:]+$"));

/// `MM?DD?YY[YY]`; groups: month, separator, day, separator, year.
pub static US_DATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^([0-9]{2})([./-])([0-9]{2})([./-])([0-9]{2}(?:[0-9]{2})?)$")
});

pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^[A-Za-z0-9_]+[A-Za-z0-9_\-.+']*", // local part
        r"@",
        r"(?:[A-Za-z0-9_\-]+\.)*", // leading domain labels
        r"[A-Za-z0-9_\-]+$",       // final label
    ))
});

pub static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(?:\([0-9]{3}\)|[0-9]{3})", // area code, parentheses balanced
        r"[[:space:].\-]?[0-9]{3}",     // exchange
        r"[[:space:].\-]?[0-9]{4}",     // line number
        r"(?:[[:space:]]*[x#\-][0-9]+)?$", // extension
    ))
});

pub static ZIP: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{5}(?:-[0-9]{4})?$"));

/// US ZIP or Canadian `A1A 1A1`, as one anchored alternation.
pub static POSTAL: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(?:",
        r"[0-9]{5}(?:-[0-9]{4})?",
        r"|",
        r"[ABCEGHJKLMNPRSTVXY][0-9][A-Z] *[0-9][A-Z][0-9]",
        r")$",
    ))
});
