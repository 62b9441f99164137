//! Domain entities

mod cargo;

pub use cargo::Cargo;
