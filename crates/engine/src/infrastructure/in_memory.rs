//! In-memory cargo storage.

use async_trait::async_trait;
use tokio::sync::RwLock;

use cargotrack_domain::{Cargo, CargoCode};

use crate::infrastructure::ports::{CargoRepo, RepoError};

/// Process-local cargo store. Contents are lost on restart.
pub struct InMemoryCargoRepo {
    cargos: RwLock<Vec<Cargo>>,
}

impl InMemoryCargoRepo {
    pub fn new() -> Self {
        Self {
            cargos: RwLock::new(Vec::new()),
        }
    }

    /// Pre-populate the store, keeping the given order.
    pub fn with_cargos(cargos: Vec<Cargo>) -> Self {
        Self {
            cargos: RwLock::new(cargos),
        }
    }
}

impl Default for InMemoryCargoRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CargoRepo for InMemoryCargoRepo {
    async fn find_by_code(&self, code: &CargoCode) -> Result<Option<Cargo>, RepoError> {
        Ok(self
            .cargos
            .read()
            .await
            .iter()
            .find(|c| c.code() == code)
            .cloned())
    }

    async fn save(&self, cargo: &Cargo) -> Result<(), RepoError> {
        let mut cargos = self.cargos.write().await;

        if let Some(existing) = cargos.iter_mut().find(|c| c.id() == cargo.id()) {
            if existing.status().is_terminal() {
                return Err(RepoError::constraint(format!(
                    "cargo {} is already delivered",
                    existing.code()
                )));
            }
            *existing = cargo.clone();
            return Ok(());
        }

        // Check and insert under the same write lock
        if cargos.iter().any(|c| c.code() == cargo.code()) {
            return Err(RepoError::constraint(format!(
                "cargo code {} already exists",
                cargo.code()
            )));
        }

        cargos.push(cargo.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Cargo>, RepoError> {
        Ok(self.cargos.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{cargo, fixed_now};
    use cargotrack_domain::{CargoStatus, Location};

    #[tokio::test]
    async fn test_save_then_find_by_code() {
        let repo = InMemoryCargoRepo::new();
        let cargo = cargo("C1", 200.0, Location::AirportX, Location::CityB);

        repo.save(&cargo).await.unwrap();

        let found = repo.find_by_code(cargo.code()).await.unwrap();
        assert_eq!(found, Some(cargo));
        let missing = repo
            .find_by_code(&CargoCode::new("C2").unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_save_updates_existing_cargo() {
        let repo = InMemoryCargoRepo::new();
        let mut cargo = cargo("C1", 200.0, Location::AirportX, Location::CityB);
        repo.save(&cargo).await.unwrap();

        cargo.arrive(Location::CityB, fixed_now()).unwrap();
        repo.save(&cargo).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status(), CargoStatus::Delivered);
    }

    #[tokio::test]
    async fn test_delivered_cargo_is_not_overwritten() {
        let repo = InMemoryCargoRepo::new();
        let created = cargo("C1", 200.0, Location::WarehouseA, Location::CityB);
        repo.save(&created).await.unwrap();

        // Two arrivals computed from the same stored snapshot
        let mut first = created.clone();
        first.arrive(Location::CityB, fixed_now()).unwrap();
        let mut second = created;
        second.arrive(Location::AirportY, fixed_now()).unwrap();

        repo.save(&first).await.unwrap();
        let result = repo.save(&second).await;

        assert!(matches!(result, Err(RepoError::ConstraintViolation(_))));
        let stored = repo.find_all().await.unwrap();
        assert_eq!(stored[0].current_location(), Location::CityB);
    }

    #[tokio::test]
    async fn test_duplicate_code_is_constraint_violation() {
        let repo = InMemoryCargoRepo::new();
        repo.save(&cargo("C1", 200.0, Location::AirportX, Location::CityB))
            .await
            .unwrap();

        let result = repo
            .save(&cargo("C1", 500.0, Location::CityA, Location::CityB))
            .await;

        assert!(matches!(result, Err(RepoError::ConstraintViolation(_))));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryCargoRepo::new();
        for code in ["B", "A", "C"] {
            repo.save(&cargo(code, 150.0, Location::WarehouseA, Location::CityA))
                .await
                .unwrap();
        }

        let codes: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|c| c.code().to_string())
            .collect();
        assert_eq!(codes, vec!["B", "A", "C"]);
    }
}
