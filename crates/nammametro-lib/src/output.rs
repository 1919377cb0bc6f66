use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::itinerary::Itinerary;
use crate::network::Network;
use crate::registry::{Station, StationId};

/// Presentation style for turning a [`RouteReport`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    Basic,
}

/// Run of a route travelled on a single line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SegmentSummary {
    pub line: String,
    pub start: String,
    pub end: String,
    pub stops: usize,
}

/// Multi-line station passed on a route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InterchangeSummary {
    pub name: String,
    pub lines: Vec<String>,
}

/// Single edge of a route with its estimates.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LegSummary {
    pub from: String,
    pub to: String,
    pub line: String,
    pub distance_km: f64,
    pub minutes: u32,
    pub fare: u32,
}

/// Alternate route proposed next to the primary one.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AlternateRoute {
    pub stations: Vec<String>,
    pub stops: usize,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteReport {
    pub from: String,
    pub to: String,
    pub stations: Vec<String>,
    pub segments: Vec<SegmentSummary>,
    pub interchanges: Vec<InterchangeSummary>,
    pub legs: Vec<LegSummary>,
    pub total_stops: usize,
    pub distance_km: f64,
    pub travel_minutes: u32,
    pub interchange_minutes: u32,
    pub total_minutes: u32,
    pub fare: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternates: Vec<AlternateRoute>,
}

impl RouteReport {
    /// Convert an [`Itinerary`] and its alternates into a report with resolved station names.
    pub fn from_itinerary(
        network: &Network,
        itinerary: &Itinerary,
        alternates: &[Vec<StationId>],
    ) -> Result<Self> {
        let (Some(&first), Some(&last)) = (itinerary.stations.first(), itinerary.stations.last())
        else {
            return Err(Error::EmptyRoutePlan);
        };
        Ok(Self::with_endpoints(network, first, last, itinerary, alternates))
    }

    /// Build a report for a route already known to run from `first` to `last`.
    pub(crate) fn with_endpoints(
        network: &Network,
        first: StationId,
        last: StationId,
        itinerary: &Itinerary,
        alternates: &[Vec<StationId>],
    ) -> Self {
        let name = |id: StationId| network.station_name(id).to_string();

        let segments = itinerary
            .segments
            .iter()
            .map(|segment| SegmentSummary {
                line: segment.line.clone(),
                start: name(segment.start),
                end: name(segment.end),
                stops: segment.stops,
            })
            .collect();

        let interchanges = itinerary
            .interchanges
            .iter()
            .filter_map(|&id| network.station(id))
            .map(|station| InterchangeSummary {
                name: station.name().to_string(),
                lines: station.lines.clone(),
            })
            .collect();

        let legs = itinerary
            .legs
            .iter()
            .map(|leg| LegSummary {
                from: name(leg.from),
                to: name(leg.to),
                line: leg.line.clone(),
                distance_km: leg.distance_km,
                minutes: leg.minutes,
                fare: leg.fare,
            })
            .collect();

        let alternates = alternates
            .iter()
            .map(|route| AlternateRoute {
                stations: route.iter().map(|&id| name(id)).collect(),
                stops: route.len().saturating_sub(1),
            })
            .collect();

        Self {
            from: name(first),
            to: name(last),
            stations: itinerary.stations.iter().map(|&id| name(id)).collect(),
            segments,
            interchanges,
            legs,
            total_stops: itinerary.stops,
            distance_km: itinerary.distance_km,
            travel_minutes: itinerary.travel_minutes,
            interchange_minutes: itinerary.interchange_minutes,
            total_minutes: itinerary.total_minutes,
            fare: itinerary.fare,
            alternates,
        }
    }

    /// Render the report using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Basic => self.render_basic(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "From: {}", self.from);
        let _ = writeln!(buffer, "To:   {}", self.to);
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "Route:");
        let _ = writeln!(buffer, "{}", self.stations.join(" -> "));

        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "Segments by line:");
        for segment in &self.segments {
            let _ = writeln!(
                buffer,
                " - Line {}: {} -> {} ({} stops)",
                segment.line, segment.start, segment.end, segment.stops
            );
        }

        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "Interchanges:");
        if self.interchanges.is_empty() {
            let _ = writeln!(buffer, " - None");
        }
        for interchange in &self.interchanges {
            let _ = writeln!(
                buffer,
                " - {} ({})",
                interchange.name,
                interchange.lines.join(", ")
            );
        }

        if !self.legs.is_empty() {
            let _ = writeln!(buffer);
            let _ = writeln!(buffer, "Per-stop breakdown:");
            for leg in &self.legs {
                let _ = writeln!(
                    buffer,
                    " - {} -> {} [{}]: {:.2} km, {} min, slab Rs {}",
                    leg.from, leg.to, leg.line, leg.distance_km, leg.minutes, leg.fare
                );
            }
        }

        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "Summary:");
        let _ = writeln!(buffer, " - Total stops: {}", self.total_stops);
        let _ = writeln!(buffer, " - Distance   : {:.2} km", self.distance_km);
        let _ = writeln!(
            buffer,
            " - Time       : {} min (incl. {} min interchange buffer)",
            self.total_minutes, self.interchange_minutes
        );
        let _ = writeln!(buffer, " - Fare est.  : Rs {}", self.fare);

        if !self.alternates.is_empty() {
            let _ = writeln!(buffer);
            let _ = writeln!(buffer, "Alternate routes:");
            for (index, alternate) in self.alternates.iter().enumerate() {
                let _ = writeln!(
                    buffer,
                    " {}. {} ({} stops)",
                    index + 1,
                    alternate.stations.join(" -> "),
                    alternate.stops
                );
            }
        }

        buffer
    }

    fn render_basic(&self) -> String {
        let mut buffer = String::new();
        let len = self.stations.len();
        for (i, name) in self.stations.iter().enumerate() {
            let prefix = if i == 0 {
                '+'
            } else if i + 1 == len {
                '-'
            } else {
                '|'
            };
            let _ = writeln!(buffer, "{} {}", prefix, name);
        }
        let _ = writeln!(
            buffer,
            "{} stops / {:.2} km / {} min / Rs {}",
            self.total_stops, self.distance_km, self.total_minutes, self.fare
        );
        buffer
    }
}

/// Station inventory entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StationListing {
    pub name: String,
    pub lines: Vec<String>,
    pub planned: bool,
}

impl From<&Station> for StationListing {
    fn from(station: &Station) -> Self {
        Self {
            name: station.name().to_string(),
            lines: station.lines.clone(),
            planned: station.planned,
        }
    }
}

/// Line label with the number of stations it serves.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LineSummary {
    pub label: String,
    pub stations: usize,
}
