//! Cargo use cases.
//!
//! Creation with code uniqueness, delivery, statistics, and read queries.

use std::sync::Arc;

use cargotrack_domain::{Cargo, CargoCode};

use crate::infrastructure::ports::CargoRepo;

mod arrive;
mod create;
mod error;
mod statistics;
mod types;

pub use arrive::ArriveCargo;
pub use create::CreateCargo;
pub use error::CargoError;
pub use statistics::GetCargoStatistics;
pub use types::{ArriveCargoRequest, CreateCargoRequest, NewCargo, MIN_CARGO_WEIGHT};

/// Container for cargo use cases.
pub struct CargoUseCases {
    pub create: Arc<CreateCargo>,
    pub arrive: Arc<ArriveCargo>,
    pub statistics: Arc<GetCargoStatistics>,
    pub queries: Arc<CargoQueries>,
}

impl CargoUseCases {
    pub fn new(
        create: Arc<CreateCargo>,
        arrive: Arc<ArriveCargo>,
        statistics: Arc<GetCargoStatistics>,
        queries: Arc<CargoQueries>,
    ) -> Self {
        Self {
            create,
            arrive,
            statistics,
            queries,
        }
    }
}

/// Read-only cargo lookups.
pub struct CargoQueries {
    cargo_repo: Arc<dyn CargoRepo>,
}

impl CargoQueries {
    pub fn new(cargo_repo: Arc<dyn CargoRepo>) -> Self {
        Self { cargo_repo }
    }

    pub async fn list(&self) -> Result<Vec<Cargo>, CargoError> {
        Ok(self.cargo_repo.find_all().await?)
    }

    pub async fn get(&self, code: &str) -> Result<Option<Cargo>, CargoError> {
        let Ok(code) = CargoCode::new(code) else {
            return Ok(None);
        };
        Ok(self.cargo_repo.find_by_code(&code).await?)
    }
}
