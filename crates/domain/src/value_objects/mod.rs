//! Value objects - validated by construction.

mod cargo_code;
mod weight;

pub use cargo_code::CargoCode;
pub use weight::{CargoWeight, MAX_CARGO_WEIGHT};
