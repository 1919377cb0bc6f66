//! Route planning over a built metro network.
//!
//! This module provides:
//! - [`Metro`] - owns the built network and answers queries against it
//! - [`RouteOutcome`] - result of a route query, including resolution failures
//! - [`find_alternates`] - alternate routes that avoid one primary edge each
//!
//! # Example
//!
//! ```
//! use nammametro_lib::{Metro, RouteOutcome};
//!
//! let metro = Metro::with_default_lines();
//! match metro.find_route("Majestic", "M.G. Road") {
//!     RouteOutcome::Found(report) => println!("{} stops", report.total_stops),
//!     other => println!("{other:?}"),
//! }
//! ```

mod alternates;

pub use alternates::find_alternates;

use std::sync::Arc;

use tracing::debug;

use crate::config::MetroConfig;
use crate::error::{Error, Result};
use crate::itinerary::summarize;
use crate::lines::{default_lines, LineDefinition};
use crate::network::{build_network, Network};
use crate::normalize::normalize_name;
use crate::output::{LineSummary, RouteReport, StationListing};
use crate::path::find_route;
use crate::registry::{Station, StationId};

/// Minimum Jaro-Winkler similarity for a station to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Result of a route query.
///
/// Resolution failures carry the caller's original text so it can be echoed
/// back or fed into [`Metro::autocomplete`].
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    BothNotFound { from: String, to: String },
    SourceNotFound { from: String },
    DestinationNotFound { to: String },
    NoPath { from: String, to: String },
    Found(Box<RouteReport>),
}

impl RouteOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}

/// A built network plus the settings queries run under.
///
/// The network is built once and shared behind an [`Arc`]; a rebuild creates
/// a fresh network and swaps it in. Rebuilding needs `&mut self`, so it can
/// never interleave with a query on the same value.
#[derive(Debug, Clone)]
pub struct Metro {
    lines: Arc<Vec<LineDefinition>>,
    network: Arc<Network>,
    include_planned: bool,
    config: MetroConfig,
}

impl Metro {
    /// Build a network from `lines`.
    pub fn new(lines: Vec<LineDefinition>, include_planned: bool, config: MetroConfig) -> Self {
        let network = Arc::new(build_network(&lines));
        Self {
            lines: Arc::new(lines),
            network,
            include_planned,
            config,
        }
    }

    /// The built-in Namma Metro network with default configuration.
    pub fn with_default_lines() -> Self {
        Self::new(default_lines(), true, MetroConfig::default())
    }

    /// Rebuild the network from the stored line definitions.
    pub fn build_network(&mut self, include_planned: bool) {
        self.network = Arc::new(build_network(&self.lines));
        self.include_planned = include_planned;
    }

    /// Replace the line definitions and rebuild.
    pub fn replace_lines(&mut self, lines: Vec<LineDefinition>) {
        self.lines = Arc::new(lines);
        self.build_network(self.include_planned);
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Shared handle to the current network.
    pub fn shared_network(&self) -> Arc<Network> {
        Arc::clone(&self.network)
    }

    pub fn config(&self) -> &MetroConfig {
        &self.config
    }

    pub fn include_planned(&self) -> bool {
        self.include_planned
    }

    fn is_visible(&self, station: &Station) -> bool {
        self.include_planned || !station.planned
    }

    /// Resolve free text to a station, hiding planned stations when they are
    /// excluded.
    pub fn resolve(&self, raw: &str) -> Option<StationId> {
        let id = self.network.lookup(raw)?;
        let station = self.network.station(id)?;
        self.is_visible(station).then_some(id)
    }

    /// Plan a route between two free-text station names.
    pub fn find_route(&self, from: &str, to: &str) -> RouteOutcome {
        let (start, goal) = match (self.resolve(from), self.resolve(to)) {
            (Some(start), Some(goal)) => (start, goal),
            (None, None) => {
                return RouteOutcome::BothNotFound {
                    from: from.to_string(),
                    to: to.to_string(),
                }
            }
            (None, Some(_)) => {
                return RouteOutcome::SourceNotFound {
                    from: from.to_string(),
                }
            }
            (Some(_), None) => {
                return RouteOutcome::DestinationNotFound { to: to.to_string() }
            }
        };

        let graph = self.network.graph();
        let Some(primary) = find_route(graph, start, goal) else {
            debug!(from, to, "no route between resolved stations");
            return RouteOutcome::NoPath {
                from: from.to_string(),
                to: to.to_string(),
            };
        };

        let alternates = find_alternates(graph, &primary, self.config.max_alternates);
        let itinerary = summarize(&self.network, &primary, &self.config);
        debug!(
            from,
            to,
            hops = itinerary.stops,
            alternates = alternates.len(),
            "planned route"
        );

        RouteOutcome::Found(Box::new(RouteReport::with_endpoints(
            &self.network,
            start,
            goal,
            &itinerary,
            &alternates,
        )))
    }

    /// Like [`Metro::find_route`], but failures become errors with "did you
    /// mean" suggestions attached.
    pub fn plan_route(&self, from: &str, to: &str) -> Result<RouteReport> {
        let limit = self.config.suggestion_limit;
        match self.find_route(from, to) {
            RouteOutcome::Found(report) => Ok(*report),
            RouteOutcome::BothNotFound { from, to } => Err(Error::UnknownStations { from, to }),
            RouteOutcome::SourceNotFound { from } => Err(Error::UnknownStation {
                suggestions: self.suggest(&from, limit),
                name: from,
            }),
            RouteOutcome::DestinationNotFound { to } => Err(Error::UnknownStation {
                suggestions: self.suggest(&to, limit),
                name: to,
            }),
            RouteOutcome::NoPath { from, to } => Err(Error::RouteNotFound {
                start: from,
                goal: to,
            }),
        }
    }

    /// Display names whose keys start with the normalized `prefix`, in id
    /// order, capped at the configured limit.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        let key = normalize_name(prefix);
        self.network
            .stations()
            .filter(|station| self.is_visible(station))
            .filter(|station| station.key.starts_with(&key))
            .take(self.config.autocomplete_limit)
            .map(|station| station.name().to_string())
            .collect()
    }

    /// Station names most similar to `raw`, best match first.
    pub fn suggest(&self, raw: &str, limit: usize) -> Vec<String> {
        let key = normalize_name(raw);
        if key.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &Station)> = self
            .network
            .stations()
            .filter(|station| self.is_visible(station))
            .map(|station| (strsim::jaro_winkler(&key, &station.key), station))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|(a_score, a), (b_score, b)| {
            b_score.total_cmp(a_score).then_with(|| a.id.cmp(&b.id))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, station)| station.name().to_string())
            .collect()
    }

    /// Full station inventory in id order.
    pub fn list_stations(&self, include_planned: bool) -> Vec<StationListing> {
        self.network
            .stations()
            .filter(|station| include_planned || !station.planned)
            .map(StationListing::from)
            .collect()
    }

    /// Line labels in definition order with their station counts.
    pub fn line_summaries(&self) -> Vec<LineSummary> {
        self.network
            .line_labels()
            .iter()
            .map(|label| LineSummary {
                label: label.clone(),
                stations: self
                    .network
                    .stations()
                    .filter(|station| station.serves(label))
                    .count(),
            })
            .collect()
    }
}

impl Default for Metro {
    fn default() -> Self {
        Self::with_default_lines()
    }
}
