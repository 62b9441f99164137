//! Shared builders for engine tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use cargotrack_domain::{Cargo, CargoCode, CargoWeight, Location};

use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::ports::ClockPort;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 14, 9, 30, 0).unwrap()
}

pub fn fixed_clock() -> Arc<dyn ClockPort> {
    Arc::new(FixedClock(fixed_now()))
}

/// A cargo in `Created` status.
pub fn cargo(code: &str, weight: f64, origin: Location, destination: Location) -> Cargo {
    Cargo::new(
        CargoCode::new(code).unwrap(),
        CargoWeight::new(weight).unwrap(),
        origin,
        destination,
        fixed_now(),
    )
}

/// A cargo that has arrived at its destination.
pub fn delivered_cargo(code: &str, weight: f64, origin: Location, destination: Location) -> Cargo {
    let mut cargo = cargo(code, weight, origin, destination);
    cargo.arrive(destination, fixed_now()).unwrap();
    cargo
}
