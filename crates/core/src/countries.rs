//! Country codes

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// Errors raised when parsing a [`CountryCode`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("\"{0}\" is not a two-letter country code")]
pub struct CountryCodeError(pub String);

/// An ISO 3166-1 alpha-2 country code, stored upper case.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Parse a country code, accepting either case and surrounding whitespace.
    ///
    /// Returns `None` for anything that is not exactly two ASCII letters.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().as_bytes() {
            [first, second] if first.is_ascii_alphabetic() && second.is_ascii_alphabetic() => {
                Some(Self([
                    first.to_ascii_uppercase(),
                    second.to_ascii_uppercase(),
                ]))
            }
            _ => None,
        }
    }

    /// The upper-case two-letter code.
    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII letters, so this is always valid UTF-8.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CountryCode").field(&self.as_str()).finish()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = CountryCodeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| CountryCodeError(value.to_string()))
    }
}

impl Serialize for CountryCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;

        value.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalises_case_and_whitespace() {
        let code = CountryCode::parse(" eg ");

        assert_eq!(code.map(|c| c.to_string()), Some("EG".to_string()));
    }

    #[test]
    fn parse_rejects_non_alpha_two_codes() {
        for value in ["", "E", "EGY", "E1", "??", "ÉG"] {
            assert_eq!(CountryCode::parse(value), None, "{value:?} should not parse");
        }
    }

    #[test]
    fn from_str_reports_input() {
        assert_eq!(
            "xyz".parse::<CountryCode>(),
            Err(CountryCodeError("xyz".to_string()))
        );
    }
}
