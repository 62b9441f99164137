//! Use cases - user story orchestration on top of repository ports.

pub mod cargo;
pub mod validation;

pub use cargo::CargoUseCases;
