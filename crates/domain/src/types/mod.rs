//! Closed vocabulary types shared by entities, statistics, and the wire format.

mod cargo_status;
mod location;

pub use cargo_status::CargoStatus;
pub use location::Location;
