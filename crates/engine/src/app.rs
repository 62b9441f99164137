//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{CargoRepo, ClockPort};
use crate::use_cases;

/// Main application state.
///
/// Holds all repository ports and use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for repository ports.
pub struct Repositories {
    pub cargo: Arc<dyn CargoRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub cargo: use_cases::CargoUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(cargo_repo: Arc<dyn CargoRepo>, clock: Arc<dyn ClockPort>) -> Self {
        let cargo = use_cases::CargoUseCases::new(
            Arc::new(use_cases::cargo::CreateCargo::new(
                cargo_repo.clone(),
                clock.clone(),
            )),
            Arc::new(use_cases::cargo::ArriveCargo::new(
                cargo_repo.clone(),
                clock.clone(),
            )),
            Arc::new(use_cases::cargo::GetCargoStatistics::new(
                cargo_repo.clone(),
            )),
            Arc::new(use_cases::cargo::CargoQueries::new(cargo_repo.clone())),
        );

        Self {
            repositories: Repositories { cargo: cargo_repo },
            use_cases: UseCases { cargo },
        }
    }
}
