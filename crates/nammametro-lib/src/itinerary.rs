//! Trip breakdown for a station sequence: line per edge, line segments,
//! interchanges and the distance, time and fare estimates.

use serde::Serialize;
use tracing::warn;

use crate::config::MetroConfig;
use crate::network::Network;
use crate::registry::StationId;

/// Label used for an edge whose endpoints share no line.
pub const UNKNOWN_LINE: &str = "unknown";

/// Maximal run of consecutive edges travelled on one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub line: String,
    pub start: StationId,
    pub end: StationId,
    /// Number of edges in the run.
    pub stops: usize,
}

/// One edge of a trip with its share of the estimates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: StationId,
    pub to: StationId,
    pub line: String,
    pub distance_km: f64,
    pub minutes: u32,
    /// Fare slab for this edge travelled on its own.
    pub fare: u32,
}

/// Derived breakdown of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub stations: Vec<StationId>,
    pub edge_lines: Vec<String>,
    pub segments: Vec<Segment>,
    /// Stations on the route that belong to more than one line.
    pub interchanges: Vec<StationId>,
    pub legs: Vec<Leg>,
    pub stops: usize,
    pub distance_km: f64,
    /// Time spent moving between stations.
    pub travel_minutes: u32,
    /// Buffer added for interchanges.
    pub interchange_minutes: u32,
    pub total_minutes: u32,
    pub fare: u32,
}

/// Label each consecutive pair of `route` with a line serving both stations.
///
/// The first of the origin's lines that the next station also serves wins;
/// pairs without a common line get [`UNKNOWN_LINE`].
pub fn edge_lines(network: &Network, route: &[StationId]) -> Vec<String> {
    route
        .windows(2)
        .map(|pair| {
            let (Some(a), Some(b)) = (network.station(pair[0]), network.station(pair[1])) else {
                return UNKNOWN_LINE.to_string();
            };
            match a.lines.iter().find(|line| b.serves(line)) {
                Some(line) => line.clone(),
                None => {
                    warn!(from = %a.name(), to = %b.name(), "stations share no line");
                    UNKNOWN_LINE.to_string()
                }
            }
        })
        .collect()
}

/// Group consecutive edges with the same label into segments.
///
/// `edge_lines` must hold one label per edge of `route`.
pub fn segment_route(route: &[StationId], edge_lines: &[String]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    for (index, line) in edge_lines.iter().enumerate() {
        let (Some(&from), Some(&to)) = (route.get(index), route.get(index + 1)) else {
            break;
        };
        match segments.last_mut() {
            Some(segment) if segment.line == *line => {
                segment.end = to;
                segment.stops += 1;
            }
            _ => segments.push(Segment {
                line: line.clone(),
                start: from,
                end: to,
                stops: 1,
            }),
        }
    }
    segments
}

/// Stations on `route` that belong to more than one line, in route order.
///
/// The count is data driven: the first and last stations are included when
/// they are multi-line, whether or not the trip changes line there.
pub fn interchange_stations(network: &Network, route: &[StationId]) -> Vec<StationId> {
    route
        .iter()
        .copied()
        .filter(|&id| {
            network
                .station(id)
                .map(|station| station.is_interchange())
                .unwrap_or(false)
        })
        .collect()
}

/// Derive the full breakdown for `route`.
pub fn summarize(network: &Network, route: &[StationId], config: &MetroConfig) -> Itinerary {
    let edge_lines = edge_lines(network, route);
    let segments = segment_route(route, &edge_lines);
    let interchanges = interchange_stations(network, route);

    let legs: Vec<Leg> = route
        .windows(2)
        .zip(&edge_lines)
        .map(|(pair, line)| Leg {
            from: pair[0],
            to: pair[1],
            line: line.clone(),
            distance_km: config.km_per_edge,
            minutes: config.minutes_per_edge,
            fare: config.fares.fare_for(config.km_per_edge),
        })
        .collect();

    let stops = edge_lines.len();
    let edge_count = u32::try_from(stops).unwrap_or(u32::MAX);
    let interchange_count = u32::try_from(interchanges.len()).unwrap_or(u32::MAX);
    let distance_km = stops as f64 * config.km_per_edge;
    let travel_minutes = edge_count.saturating_mul(config.minutes_per_edge);
    let interchange_minutes = interchange_count.saturating_mul(config.interchange_minutes);

    Itinerary {
        stations: route.to_vec(),
        edge_lines,
        segments,
        interchanges,
        legs,
        stops,
        distance_km,
        travel_minutes,
        interchange_minutes,
        total_minutes: travel_minutes.saturating_add(interchange_minutes),
        fare: config.fares.fare_for(distance_km),
    }
}
