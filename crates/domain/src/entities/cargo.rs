//! Cargo entity - A shipment tracked from origin to destination
//!
//! A cargo is a plain data holder plus one transition. Input rules that only
//! apply at creation time (such as the minimum weight) belong to the request
//! layer, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{CargoCode, CargoWeight};
use crate::{CargoId, CargoStatus, Location};

/// A shipment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cargo {
    id: CargoId,
    code: CargoCode,
    weight: CargoWeight,
    origin: Location,
    destination: Location,
    status: CargoStatus,
    /// Starts at `origin`; set to the arrival point by `arrive`
    current_location: Location,
    created_at: DateTime<Utc>,
    delivered_at: Option<DateTime<Utc>>,
}

impl Cargo {
    /// Create a new cargo in `Created` status, located at its origin.
    pub fn new(
        code: CargoCode,
        weight: CargoWeight,
        origin: Location,
        destination: Location,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CargoId::new(),
            code,
            weight,
            origin,
            destination,
            status: CargoStatus::Created,
            current_location: origin,
            created_at: now,
            delivered_at: None,
        }
    }

    /// Rebuild a cargo from stored fields.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: CargoId,
        code: CargoCode,
        weight: CargoWeight,
        origin: Location,
        destination: Location,
        status: CargoStatus,
        current_location: Location,
        created_at: DateTime<Utc>,
        delivered_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            code,
            weight,
            origin,
            destination,
            status,
            current_location,
            created_at,
            delivered_at,
        }
    }

    /// Mark the cargo as delivered at `location`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` if the cargo is already
    /// delivered. The entity is left unchanged in that case.
    pub fn arrive(&mut self, location: Location, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::invalid_state_transition(format!(
                "Cargo {} was already delivered at {}",
                self.code, self.current_location
            )));
        }

        self.status = CargoStatus::Delivered;
        self.current_location = location;
        self.delivered_at = Some(now);
        Ok(())
    }

    pub fn id(&self) -> CargoId {
        self.id
    }

    pub fn code(&self) -> &CargoCode {
        &self.code
    }

    pub fn weight(&self) -> CargoWeight {
        self.weight
    }

    pub fn origin(&self) -> Location {
        self.origin
    }

    pub fn destination(&self) -> Location {
        self.destination
    }

    pub fn status(&self) -> CargoStatus {
        self.status
    }

    pub fn current_location(&self) -> Location {
        self.current_location
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn delivered_at(&self) -> Option<DateTime<Utc>> {
        self.delivered_at
    }
}
