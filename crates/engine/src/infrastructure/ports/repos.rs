//! Repository port traits for database access.

use async_trait::async_trait;
use cargotrack_domain::{Cargo, CargoCode};

use super::error::RepoError;

// =============================================================================
// Cargo Storage
// =============================================================================

/// Persistence boundary for cargo.
///
/// `save` inserts a new cargo or updates the one with the same id. Both of
/// these are a `RepoError::ConstraintViolation`:
/// - a second cargo with an already stored code
/// - an update to a cargo whose stored status is already `Delivered`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CargoRepo: Send + Sync {
    async fn find_by_code(&self, code: &CargoCode) -> Result<Option<Cargo>, RepoError>;
    async fn save(&self, cargo: &Cargo) -> Result<(), RepoError>;
    /// All cargo in insertion order.
    async fn find_all(&self) -> Result<Vec<Cargo>, RepoError>;
}
