//! Cargo weight value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Upper bound for a single cargo weight. Keeps sums over any realistic
/// number of cargo finite.
pub const MAX_CARGO_WEIGHT: f64 = 1.0e9;

/// Weight of a cargo. Always finite, strictly positive and at most
/// [`MAX_CARGO_WEIGHT`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CargoWeight(f64);

impl CargoWeight {
    /// Create a new weight.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for NaN, infinite, non-positive values
    /// and values above [`MAX_CARGO_WEIGHT`].
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::validation("Cargo weight must be a finite number"));
        }
        if value <= 0.0 {
            return Err(DomainError::validation(format!(
                "Cargo weight must be positive, got {}",
                value
            )));
        }
        if value > MAX_CARGO_WEIGHT {
            return Err(DomainError::validation(format!(
                "Cargo weight cannot exceed {}, got {}",
                MAX_CARGO_WEIGHT, value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for CargoWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for CargoWeight {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CargoWeight> for f64 {
    fn from(weight: CargoWeight) -> f64 {
        weight.0
    }
}
