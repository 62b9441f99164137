//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

use std::sync::Arc;

pub mod clock;
pub mod config;
pub mod in_memory;
pub mod ports;
pub mod sqlite;

use config::StoreConfig;
use ports::{CargoRepo, RepoError};

/// Build the cargo store selected by configuration.
pub async fn connect_cargo_repo(store: &StoreConfig) -> Result<Arc<dyn CargoRepo>, RepoError> {
    match store {
        StoreConfig::Memory => {
            tracing::info!("Using in-memory cargo store");
            Ok(Arc::new(in_memory::InMemoryCargoRepo::new()))
        }
        StoreConfig::Sqlite { path } => {
            tracing::info!(path = %path, "Using SQLite cargo store");
            Ok(Arc::new(sqlite::SqliteCargoRepo::new(path).await?))
        }
    }
}
