//! Validated cargo code newtype
//!
//! The code is the business identity of a cargo: unique at creation time and
//! never changed afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A validated cargo code (non-blank, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CargoCode(String);

impl CargoCode {
    /// Create a new validated cargo code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the code is empty after trimming.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Cargo code cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CargoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CargoCode {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CargoCode> for String {
    fn from(code: CargoCode) -> String {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_trimmed() {
        let code = CargoCode::new("  CARGO_1 ").unwrap();
        assert_eq!(code.as_str(), "CARGO_1");
    }

    #[test]
    fn test_blank_code_rejected() {
        assert!(CargoCode::new("").is_err());
        assert!(CargoCode::new("   \t").is_err());
    }

    #[test]
    fn test_long_code_accepted() {
        let long = "X".repeat(500);
        assert_eq!(CargoCode::new(long.clone()).unwrap().as_str(), long);
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        let parsed: Result<CargoCode, _> = serde_json::from_str("\"  \"");
        assert!(parsed.is_err());

        let parsed: CargoCode = serde_json::from_str("\"HEAVY\"").unwrap();
        assert_eq!(parsed.to_string(), "HEAVY");
    }
}
