//! Tunable constants for itinerary estimates and query limits.

use serde::{Deserialize, Serialize};

/// Approximate distance between two adjacent stations, in kilometres.
pub const KM_PER_EDGE: f64 = 1.1;

/// Travel time between two adjacent stations, in minutes.
pub const MINUTES_PER_EDGE: u32 = 2;

/// Extra minutes budgeted for every interchange station on a route.
pub const INTERCHANGE_MINUTES: u32 = 3;

/// Upper bound on alternate routes proposed for a query.
pub const MAX_ALTERNATES: usize = 3;

/// Upper bound on autocomplete results.
pub const AUTOCOMPLETE_LIMIT: usize = 20;

/// Upper bound on "did you mean" suggestions for an unknown station.
pub const SUGGESTION_LIMIT: usize = 3;

/// One step of the distance-based fare function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareSlab {
    /// Inclusive upper distance bound for this slab.
    pub up_to_km: f64,
    /// Fare charged for trips within this slab, in rupees.
    pub fare: u32,
}

/// Step function from trip distance to fare.
///
/// Slabs are checked in order; the first slab whose bound covers the distance
/// wins. Distances beyond the last slab pay `max_fare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareTable {
    pub slabs: Vec<FareSlab>,
    pub max_fare: u32,
}

impl FareTable {
    /// Fare for a trip of `distance_km`.
    pub fn fare_for(&self, distance_km: f64) -> u32 {
        self.slabs
            .iter()
            .find(|slab| distance_km <= slab.up_to_km)
            .map(|slab| slab.fare)
            .unwrap_or(self.max_fare)
    }
}

impl Default for FareTable {
    fn default() -> Self {
        let slabs = [
            (2.0, 10),
            (4.0, 20),
            (6.0, 30),
            (8.0, 40),
            (10.0, 50),
            (15.0, 60),
            (20.0, 70),
            (25.0, 80),
        ]
        .into_iter()
        .map(|(up_to_km, fare)| FareSlab { up_to_km, fare })
        .collect();

        Self {
            slabs,
            max_fare: 90,
        }
    }
}

/// Configuration shared by route planning and itinerary estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetroConfig {
    pub km_per_edge: f64,
    pub minutes_per_edge: u32,
    pub interchange_minutes: u32,
    pub max_alternates: usize,
    pub autocomplete_limit: usize,
    pub suggestion_limit: usize,
    pub fares: FareTable,
}

impl Default for MetroConfig {
    fn default() -> Self {
        Self {
            km_per_edge: KM_PER_EDGE,
            minutes_per_edge: MINUTES_PER_EDGE,
            interchange_minutes: INTERCHANGE_MINUTES,
            max_alternates: MAX_ALTERNATES,
            autocomplete_limit: AUTOCOMPLETE_LIMIT,
            suggestion_limit: SUGGESTION_LIMIT,
            fares: FareTable::default(),
        }
    }
}
