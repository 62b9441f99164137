//! Cargotrack domain: cargo entity, closed vocabularies, and statistics.
//!
//! This crate has no I/O. Persistence and HTTP live in the engine crate.

pub mod entities;
pub mod error;
pub mod ids;
pub mod statistics;
pub mod types;
pub mod value_objects;

pub use entities::Cargo;
pub use error::DomainError;
pub use ids::CargoId;
pub use statistics::CargoStatistics;
pub use types::{CargoStatus, Location};
pub use value_objects::{CargoCode, CargoWeight, MAX_CARGO_WEIGHT};
