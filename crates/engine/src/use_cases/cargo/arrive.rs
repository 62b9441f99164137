//! Arrive cargo use case.
//!
//! Marks a cargo as delivered at the location it reached.

use std::sync::Arc;

use cargotrack_domain::{Cargo, CargoCode, DomainError, Location};

use crate::infrastructure::ports::{CargoRepo, ClockPort, RepoError};

use super::error::CargoError;

pub struct ArriveCargo {
    cargo_repo: Arc<dyn CargoRepo>,
    clock: Arc<dyn ClockPort>,
}

impl ArriveCargo {
    pub fn new(cargo_repo: Arc<dyn CargoRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { cargo_repo, clock }
    }

    /// Deliver the cargo identified by `code` at `location`.
    ///
    /// Fails with `CargoError::Domain` when the cargo was already delivered,
    /// including by a concurrent arrive that saved first; nothing is written
    /// in that case.
    pub async fn execute(&self, code: &str, location: Location) -> Result<Cargo, CargoError> {
        let code =
            CargoCode::new(code).map_err(|_| CargoError::NotFound(code.trim().to_string()))?;

        let mut cargo = self
            .cargo_repo
            .find_by_code(&code)
            .await?
            .ok_or_else(|| CargoError::NotFound(code.to_string()))?;

        cargo.arrive(location, self.clock.now())?;

        match self.cargo_repo.save(&cargo).await {
            Ok(()) => {}
            Err(RepoError::ConstraintViolation(reason)) => {
                tracing::warn!(code = %cargo.code(), reason = %reason, "Store refused arrival");
                return Err(DomainError::invalid_state_transition(format!(
                    "Cargo {} was already delivered",
                    cargo.code()
                ))
                .into());
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(code = %cargo.code(), location = %location, "Cargo delivered");
        Ok(cargo)
    }
}
