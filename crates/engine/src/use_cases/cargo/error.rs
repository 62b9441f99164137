//! Cargo operation errors.

use crate::infrastructure::ports::RepoError;
use crate::use_cases::validation::ValidationError;
use cargotrack_domain::DomainError;

/// Errors that can occur during cargo operations.
#[derive(Debug, thiserror::Error)]
pub enum CargoError {
    /// Request rejected before any repository interaction
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("Cargo code is not unique: {0}")]
    NonUniqueCode(String),
    #[error("Cargo not found: {0}")]
    NotFound(String),
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
