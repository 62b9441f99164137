//! Create cargo use case.
//!
//! Registers a new cargo after checking its code is not taken.

use std::sync::Arc;

use cargotrack_domain::Cargo;

use crate::infrastructure::ports::{CargoRepo, ClockPort, RepoError};

use super::error::CargoError;
use super::types::CreateCargoRequest;

/// Create cargo use case.
///
/// Orchestrates: request validation, code uniqueness check, construction in
/// `Created` status, single repository write.
pub struct CreateCargo {
    cargo_repo: Arc<dyn CargoRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CreateCargo {
    pub fn new(cargo_repo: Arc<dyn CargoRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { cargo_repo, clock }
    }

    /// Execute the create cargo use case.
    ///
    /// # Returns
    /// * `Ok(Cargo)` - The stored cargo
    /// * `Err(CargoError::Validation)` - Request broke a creation rule; nothing was read or written
    /// * `Err(CargoError::NonUniqueCode)` - Code already in use; nothing was written
    pub async fn execute(&self, request: CreateCargoRequest) -> Result<Cargo, CargoError> {
        let input = request.validate()?;

        if self.cargo_repo.find_by_code(&input.code).await?.is_some() {
            tracing::warn!(code = %input.code, "Rejected cargo with duplicate code");
            return Err(CargoError::NonUniqueCode(input.code.to_string()));
        }

        let cargo = Cargo::new(
            input.code,
            input.weight,
            input.origin,
            input.destination,
            self.clock.now(),
        );

        match self.cargo_repo.save(&cargo).await {
            Ok(()) => {}
            // Lost a race against a concurrent create with the same code
            Err(RepoError::ConstraintViolation(reason)) => {
                tracing::warn!(code = %cargo.code(), reason = %reason, "Store refused duplicate cargo code");
                return Err(CargoError::NonUniqueCode(cargo.code().to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(
            id = %cargo.id(),
            code = %cargo.code(),
            weight = %cargo.weight(),
            origin = %cargo.origin(),
            destination = %cargo.destination(),
            "Cargo created"
        );
        Ok(cargo)
    }
}
