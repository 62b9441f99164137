//! Named sites in the transport network.
//!
//! Locations serve both as route endpoints of a cargo and as filter keys in
//! statistics. The set is closed: adding a site means adding a variant.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named site a cargo can leave from or arrive at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Location {
    WarehouseA,
    WarehouseB,
    AirportX,
    AirportY,
    CityA,
    CityB,
}

impl Location {
    /// Get all locations in declaration order
    pub fn all() -> &'static [Location] {
        &[
            Location::WarehouseA,
            Location::WarehouseB,
            Location::AirportX,
            Location::AirportY,
            Location::CityA,
            Location::CityB,
        ]
    }

    /// Wire name, as used in JSON bodies and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::WarehouseA => "WAREHOUSE_A",
            Location::WarehouseB => "WAREHOUSE_B",
            Location::AirportX => "AIRPORT_X",
            Location::AirportY => "AIRPORT_Y",
            Location::CityA => "CITY_A",
            Location::CityB => "CITY_B",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Location {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Location::all()
            .iter()
            .copied()
            .find(|location| location.as_str() == normalized)
            .ok_or_else(|| DomainError::parse(format!("Unknown location: {}", s)))
    }
}
