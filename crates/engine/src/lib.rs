//! Cargotrack Engine library.
//!
//! This crate contains all server-side code for the cargo tracking service.
//!
//! ## Structure
//!
//! - `use_cases/` - Cargo creation, delivery, statistics, and queries
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures shared by unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
