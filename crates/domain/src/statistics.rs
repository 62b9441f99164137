//! Aggregate statistics over the full cargo collection.
//!
//! Computed on demand, never persisted. The result depends only on the
//! contents of the input, except for the `heaviest_cargo` tie-break, which
//! picks the first maximum in input order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Cargo, CargoStatus, Location};

/// Origin counted by `count_cargos_at_warehouse_a`
pub const WAREHOUSE_LOCATION: Location = Location::WarehouseA;

/// Destination summed by `total_weight_delivered_at_city_b`
pub const CITY_LOCATION: Location = Location::CityB;

/// Read-only summary of all cargo.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoStatistics {
    /// Only statuses that occur are present
    pub status_count: BTreeMap<CargoStatus, u64>,
    /// `None` when there is no cargo at all
    pub heaviest_cargo: Option<String>,
    /// `0.0` when there is no cargo at all
    pub average_cargo_weight: f64,
    pub count_cargos_at_warehouse_a: u64,
    pub total_weight_delivered_at_city_b: f64,
}

impl CargoStatistics {
    /// Summarize `cargos`.
    ///
    /// Empty input yields the default value: no status entries, no heaviest
    /// cargo, and zero for every number.
    pub fn compute(cargos: &[Cargo]) -> Self {
        let mut stats = Self::default();
        let mut heaviest: Option<&Cargo> = None;
        let mut seen: u64 = 0;

        for cargo in cargos {
            let weight = cargo.weight().value();

            // Running mean stays within the range of the inputs
            seen += 1;
            stats.average_cargo_weight += (weight - stats.average_cargo_weight) / seen as f64;

            *stats.status_count.entry(cargo.status()).or_insert(0) += 1;

            // Strict comparison keeps the first maximum on ties
            if heaviest.map_or(true, |h| weight > h.weight().value()) {
                heaviest = Some(cargo);
            }

            if cargo.origin() == WAREHOUSE_LOCATION {
                stats.count_cargos_at_warehouse_a += 1;
            }

            match cargo.status() {
                CargoStatus::Delivered if cargo.destination() == CITY_LOCATION => {
                    stats.total_weight_delivered_at_city_b += weight;
                }
                CargoStatus::Delivered | CargoStatus::Created => {}
            }
        }

        stats.heaviest_cargo = heaviest.map(|c| c.code().to_string());

        stats
    }
}
