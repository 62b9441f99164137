//! Cargo statistics use case.

use std::sync::Arc;

use cargotrack_domain::CargoStatistics;

use crate::infrastructure::ports::CargoRepo;

use super::error::CargoError;

/// Reads a snapshot of all cargo and summarizes it. Never writes.
pub struct GetCargoStatistics {
    cargo_repo: Arc<dyn CargoRepo>,
}

impl GetCargoStatistics {
    pub fn new(cargo_repo: Arc<dyn CargoRepo>) -> Self {
        Self { cargo_repo }
    }

    pub async fn execute(&self) -> Result<CargoStatistics, CargoError> {
        let cargos = self.cargo_repo.find_all().await?;
        let stats = CargoStatistics::compute(&cargos);
        tracing::debug!(cargo_count = cargos.len(), "Computed cargo statistics");
        Ok(stats)
    }
}
