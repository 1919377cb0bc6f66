//! Namma Metro library entry points.
//!
//! This crate normalizes station names, builds the metro network from line
//! definitions, finds fewest-stop routes with alternates, and derives the
//! segment, interchange, time and fare breakdown of a trip. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod config;
pub mod error;
pub mod graph;
pub mod itinerary;
pub mod lines;
pub mod network;
pub mod normalize;
pub mod output;
pub mod path;
pub mod registry;
pub mod routing;

pub use config::{FareSlab, FareTable, MetroConfig};
pub use error::{Error, Result};
pub use graph::Graph;
pub use itinerary::{summarize, Itinerary, Leg, Segment};
pub use lines::{
    default_lines, load_lines, parse_lines, resolve_lines, validate_lines, LineDefinition,
    LineStop, LINES_ENV_VAR,
};
pub use network::{build_network, Network};
pub use normalize::normalize_name;
pub use output::{
    AlternateRoute, InterchangeSummary, LegSummary, LineSummary, RouteRenderMode, RouteReport,
    SegmentSummary, StationListing,
};
pub use path::{find_route, find_route_bfs, hop_distances, BlockedEdges};
pub use registry::{Station, StationId, StationRegistry};
pub use routing::{find_alternates, Metro, RouteOutcome};
