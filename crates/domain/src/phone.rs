//! Customer phone numbers in the Nepali mobile numbering plan.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A validated 10-digit mobile number.
///
/// Accepted numbers start with `9`, have `6`, `7`, or `8` as the second
/// digit, and are followed by exactly 8 more digits (e.g. `9812345678`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Validates and wraps a phone number.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let bytes = raw.as_bytes();
        let valid = bytes.len() == 10
            && bytes.iter().all(u8::is_ascii_digit)
            && bytes[0] == b'9'
            && matches!(bytes[1], b'6' | b'7' | b'8');

        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(DomainError::InvalidPhone {
                phone: raw.to_string(),
            })
        }
    }

    /// Returns the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phone::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_mobile_numbers() {
        assert!(Phone::parse("9812345678").is_ok());
        assert!(Phone::parse("9712345678").is_ok());
        assert!(Phone::parse("9612345678").is_ok());
    }

    #[test]
    fn rejects_wrong_leading_digits() {
        assert!(Phone::parse("8812345678").is_err());
        assert!(Phone::parse("9912345678").is_err());
        assert!(Phone::parse("1234567890").is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Phone::parse("98123456").is_err());
        assert!(Phone::parse("98123456789").is_err());
        assert!(Phone::parse("").is_err());
    }

    #[test]
    fn rejects_non_digits() {
        assert!(Phone::parse("98123456ab").is_err());
        assert!(Phone::parse("98 1234567").is_err());
    }

    #[test]
    fn serde_roundtrip_validates() {
        let phone: Phone = serde_json::from_str("\"9812345678\"").unwrap();
        assert_eq!(phone.as_str(), "9812345678");

        let bad: Result<Phone, _> = serde_json::from_str("\"8812345678\"");
        assert!(bad.is_err());
    }
}
