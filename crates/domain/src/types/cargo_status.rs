//! Cargo lifecycle status.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of a cargo.
///
/// `Created` is assigned at construction, `Delivered` is terminal and only
/// reachable through [`crate::Cargo::arrive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CargoStatus {
    Created,
    Delivered,
}

impl CargoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CargoStatus::Created => "CREATED",
            CargoStatus::Delivered => "DELIVERED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CargoStatus::Delivered)
    }
}

impl fmt::Display for CargoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CargoStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CREATED" => Ok(CargoStatus::Created),
            "DELIVERED" => Ok(CargoStatus::Delivered),
            _ => Err(DomainError::parse(format!("Unknown cargo status: {}", s))),
        }
    }
}
