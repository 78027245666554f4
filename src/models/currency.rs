//! Three-letter currency codes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FintrackError;

/// Currencies the new-transfer form offers
pub const SUPPORTED_CURRENCIES: [&str; 4] = ["USD", "EUR", "GBP", "JPY"];

/// An uppercase three-letter currency code such as `USD`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parse a code, accepting lowercase input
    pub fn parse(s: &str) -> Result<Self, FintrackError> {
        let code = s.trim().to_ascii_uppercase();
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()) {
            Ok(Self(code))
        } else {
            Err(FintrackError::Validation(format!(
                "Invalid currency code '{}'",
                s
            )))
        }
    }

    pub fn usd() -> Self {
        Self::known("USD")
    }

    pub fn eur() -> Self {
        Self::known("EUR")
    }

    pub fn gbp() -> Self {
        Self::known("GBP")
    }

    pub fn jpy() -> Self {
        Self::known("JPY")
    }

    /// Wrap one of `SUPPORTED_CURRENCIES` without re-validating it
    fn known(code: &'static str) -> Self {
        Self(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code is offered by the transfer form
    pub fn is_supported(&self) -> bool {
        SUPPORTED_CURRENCIES.contains(&self.0.as_str())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = FintrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = FintrackError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case() {
        assert_eq!(CurrencyCode::parse("eur").unwrap().as_str(), "EUR");
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        assert!(CurrencyCode::parse("EURO").is_err());
        assert!(CurrencyCode::parse("U$D").is_err());
        assert!(CurrencyCode::parse("").is_err());
    }

    #[test]
    fn test_known_constructors_are_supported() {
        for code in [
            CurrencyCode::usd(),
            CurrencyCode::eur(),
            CurrencyCode::gbp(),
            CurrencyCode::jpy(),
        ] {
            assert!(code.is_supported());
            assert_eq!(CurrencyCode::parse(code.as_str()).unwrap(), code);
        }
    }

    #[test]
    fn test_supported() {
        assert!(CurrencyCode::parse("JPY").unwrap().is_supported());
        assert!(!CurrencyCode::parse("CHF").unwrap().is_supported());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: CurrencyCode = serde_json::from_str("\"gbp\"").unwrap();
        assert_eq!(ok.as_str(), "GBP");
        assert!(serde_json::from_str::<CurrencyCode>("\"pounds\"").is_err());
    }
}
