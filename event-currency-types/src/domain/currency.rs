//! Validated currency codes.
//!
//! The host platform ships an open-ended currency list, so the code is a
//! validated newtype rather than a closed enum. Symbol and display-name
//! lookups go through the [`CurrencyProvider`](crate::ports::CurrencyProvider)
//! port.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// An ISO 4217 style currency code: exactly three ASCII uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses and validates a currency code.
    pub fn new(code: &str) -> Result<Self, DomainError> {
        if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(Self(code.to_string()))
        } else {
            Err(DomainError::InvalidCurrencyCode(code.to_string()))
        }
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

/// One entry from the host's currency list: code, display symbol, name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub code: CurrencyCode,
    pub symbol: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_codes_parse() {
        for code in ["USD", "GBP", "EUR", "JPY"] {
            assert_eq!(CurrencyCode::new(code).unwrap().as_str(), code);
        }
    }

    #[test]
    fn test_invalid_codes_rejected() {
        for code in ["", "usd", "US", "USDX", "U$D", "12A"] {
            assert!(matches!(
                CurrencyCode::new(code),
                Err(DomainError::InvalidCurrencyCode(_))
            ));
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let code = CurrencyCode::new("GBP").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"GBP\"");
        let back: CurrencyCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        assert!(serde_json::from_str::<CurrencyCode>("\"gbp\"").is_err());
    }
}
