//! # String Formats
//!
//! The `format` values the faker can satisfy. Each variant maps to a
//! generator in `jsf-random::format` whose output validates under the
//! matching JSON Schema format assertion.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FakerError;

/// A supported `format` keyword value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StringFormat {
    /// RFC 3339 section 5.6 `date-time`.
    #[serde(rename = "date-time")]
    DateTime,
    /// RFC 3339 `full-date`.
    #[serde(rename = "date")]
    Date,
    /// RFC 3339 `full-time`.
    #[serde(rename = "time")]
    Time,
    /// RFC 5322 section 3.4.1 addr-spec.
    #[serde(rename = "email")]
    Email,
    /// RFC 1034 section 3.1 host name.
    #[serde(rename = "hostname")]
    Hostname,
    /// Dotted-quad IPv4 address.
    #[serde(rename = "ipv4")]
    Ipv4,
    /// RFC 4291 IPv6 address.
    #[serde(rename = "ipv6")]
    Ipv6,
    /// RFC 3986 URI.
    #[serde(rename = "uri")]
    Uri,
    /// RFC 4122 UUID.
    #[serde(rename = "uuid")]
    Uuid,
}

impl StringFormat {
    /// Returns every supported format.
    pub fn all() -> &'static [StringFormat] {
        &[
            Self::DateTime,
            Self::Date,
            Self::Time,
            Self::Email,
            Self::Hostname,
            Self::Ipv4,
            Self::Ipv6,
            Self::Uri,
            Self::Uuid,
        ]
    }

    /// Returns the `format` keyword spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateTime => "date-time",
            Self::Date => "date",
            Self::Time => "time",
            Self::Email => "email",
            Self::Hostname => "hostname",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Uri => "uri",
            Self::Uuid => "uuid",
        }
    }
}

impl std::fmt::Display for StringFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StringFormat {
    type Err = FakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| FakerError::UnsupportedType {
                keyword: "format",
                value: s.to_string(),
            })
    }
}
