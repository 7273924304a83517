//! The closed set of supported format names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// A format identifier the validator knows how to check.
///
/// Names outside this set are not errors: the dispatcher treats them as a
/// no-op so that schemas using formats from other vocabularies still pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatName {
    /// `YYYY-MM-DDThh:mm:ss[.fraction]Z`
    DateTime,
    /// `YYYY-MM-DD`
    Date,
    /// `hh:mm:ss`
    Time,
    /// Dotted-quad IPv4, also accepted under the legacy name `ip-address`.
    #[serde(alias = "ip-address")]
    Ipv4,
    /// Lowercase hex IPv6 with at most one `::` elision.
    Ipv6,
    /// `MM.DD.YY` or `MM.DD.YYYY`
    UsDate,
    /// Address with a local part, `@` and dot-separated domain labels.
    Email,
    /// North American phone number with area code.
    Phone,
    /// US ZIP or ZIP+4.
    Zip,
    /// US ZIP or Canadian postal code.
    Postal,
}

impl FormatName {
    /// Every supported format, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::DateTime,
        Self::Date,
        Self::Time,
        Self::Ipv4,
        Self::Ipv6,
        Self::UsDate,
        Self::Email,
        Self::Phone,
        Self::Zip,
        Self::Postal,
    ];

    /// Resolve a format name (or alias) as it appears in a schema.
    ///
    /// Matching is exact: `"Date-Time"` is not `"date-time"`.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        let format = match name {
            "date-time" => Self::DateTime,
            "date" => Self::Date,
            "time" => Self::Time,
            "ipv4" | "ip-address" => Self::Ipv4,
            "ipv6" => Self::Ipv6,
            "us-date" => Self::UsDate,
            "email" => Self::Email,
            "phone" => Self::Phone,
            "zip" => Self::Zip,
            "postal" => Self::Postal,
            _ => return None,
        };
        Some(format)
    }

    /// Canonical schema name of this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateTime => "date-time",
            Self::Date => "date",
            Self::Time => "time",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::UsDate => "us-date",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Zip => "zip",
            Self::Postal => "postal",
        }
    }

    /// Alternative names accepted by [`FormatName::lookup`].
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Ipv4 => &["ip-address"],
            _ => &[],
        }
    }

    /// Whether a non-text value is reported as a type mismatch under the
    /// legacy policy. The date/time and address formats let non-text through.
    #[must_use]
    pub const fn requires_text(self) -> bool {
        matches!(self, Self::Email | Self::Phone | Self::Zip | Self::Postal)
    }

    /// The violation message for this format, naming the offending property.
    #[must_use]
    pub fn message(self, fragment: &str) -> String {
        match self {
            Self::DateTime => format!(
                "The property '{fragment}' must be a date/time in the ISO-8601 format of \
                 YYYY-MM-DDThh:mm:ssZ or YYYY-MM-DDThh:mm:ss.ssZ"
            ),
            Self::Date => {
                format!("The property '{fragment}' must be a date in the format of YYYY-MM-DD")
            }
            Self::Time => {
                format!("The property '{fragment}' must be a time in the format of hh:mm:ss")
            }
            Self::Ipv4 => format!("The property '{fragment}' must be a valid IPv4 address"),
            Self::Ipv6 => format!("The property '{fragment}' must be a valid IPv6 address"),
            Self::UsDate => format!(
                "The property '{fragment}' must be a date in the format of MM.DD.YY or MM.DD.YYYY"
            ),
            Self::Email => format!("The email address '{fragment}' is not formatted correctly"),
            Self::Phone => format!(
                "The phone number '{fragment}' is not formatted correctly. \
                 It must include area code (like: 999-999-9999)"
            ),
            Self::Zip => format!("The zip code '{fragment}' is not formatted correctly"),
            Self::Postal => format!("The postal code '{fragment}' is not formatted correctly"),
        }
    }
}

impl fmt::Display for FormatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatName {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| FormatError::UnknownFormat { name: s.to_owned() })
    }
}
