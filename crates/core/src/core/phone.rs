//! Safaricom mobile number validation and normalization.
//!
//! Accepted input: an optional `254`, `+254` or `0` prefix followed by a
//! 9-digit subscriber number whose first digit is `7` or `1`. The normalized
//! form is always `254` + subscriber number (12 digits, no `+`).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::FlowError;

/// Country code prepended to every normalized number.
pub const COUNTRY_CODE: &str = "254";

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:254|\+254|0)?([71][0-9]{8})$").unwrap());

/// `true` when `phone` matches the accepted pattern exactly (no trimming).
pub fn validate_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// `"254" + <subscriber number>`, or `None` when `phone` does not validate.
pub fn normalize_phone(phone: &str) -> Option<String> {
    let caps = PHONE_REGEX.captures(phone)?;
    let subscriber = caps.get(1)?.as_str();
    Some(format!("{COUNTRY_CODE}{subscriber}"))
}

/// A validated, normalized number. Serializes as the bare 12-digit string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SafaricomNumber(String);

impl SafaricomNumber {
    /// Parses raw user input. Surrounding whitespace is ignored, anything else
    /// outside the pattern is rejected.
    pub fn parse(raw: &str) -> Result<Self, FlowError> {
        normalize_phone(raw.trim())
            .map(Self)
            .ok_or(FlowError::InvalidPhone)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 9 digits after the country code.
    pub fn subscriber(&self) -> &str {
        &self.0[COUNTRY_CODE.len()..]
    }
}

impl TryFrom<String> for SafaricomNumber {
    type Error = FlowError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SafaricomNumber> for String {
    fn from(n: SafaricomNumber) -> Self {
        n.0
    }
}

impl fmt::Display for SafaricomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_prefix_form() {
        assert_eq!(normalize_phone("0712345678").as_deref(), Some("254712345678"));
        assert_eq!(normalize_phone("+254112345678").as_deref(), Some("254112345678"));
        assert_eq!(normalize_phone("254712345678").as_deref(), Some("254712345678"));
        assert_eq!(normalize_phone("712345678").as_deref(), Some("254712345678"));
        assert_eq!(normalize_phone("0112345678").as_deref(), Some("254112345678"));
    }

    #[test]
    fn rejects_out_of_pattern_numbers() {
        for bad in [
            "",
            "12345",
            "254812345678",
            "0812345678",
            "07123456789",
            "071234567",
            "+0712345678",
            "2540712345678",
            "0712 345 678",
            "0712345678x",
        ] {
            assert!(!validate_phone(bad), "{bad:?} should be rejected");
            assert_eq!(normalize_phone(bad), None);
        }
    }

    #[test]
    fn validate_does_not_trim() {
        assert!(!validate_phone(" 0712345678"));
        assert!(!validate_phone("0712345678\n"));
    }

    #[test]
    fn validate_and_normalize_agree() {
        for s in ["0712345678", "254112345678", "12345", "+254712345678", "0612345678"] {
            assert_eq!(validate_phone(s), normalize_phone(s).is_some());
        }
    }

    #[test]
    fn parse_trims_and_exposes_subscriber() {
        let n = SafaricomNumber::parse("  +254712345678 ").unwrap();
        assert_eq!(n.as_str(), "254712345678");
        assert_eq!(n.subscriber(), "712345678");
        assert_eq!(n.to_string(), "254712345678");
    }

    #[test]
    fn parse_reports_invalid_phone() {
        assert_eq!(SafaricomNumber::parse("12345"), Err(FlowError::InvalidPhone));
    }

    #[test]
    fn serde_uses_normalized_string() {
        let n: SafaricomNumber = serde_json::from_str("\"0712345678\"").unwrap();
        assert_eq!(serde_json::to_string(&n).unwrap(), "\"254712345678\"");
        assert!(serde_json::from_str::<SafaricomNumber>("\"999\"").is_err());
    }
}
