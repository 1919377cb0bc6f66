use tracing::debug;

use crate::graph::Graph;
use crate::lines::LineDefinition;
use crate::normalize::normalize_name;
use crate::registry::{Station, StationId, StationRegistry};

/// Stations plus their connectivity, built in one pass from line definitions.
///
/// A network is immutable once built; rebuilding means constructing a new
/// value and replacing the old one.
#[derive(Debug, Clone, Default)]
pub struct Network {
    registry: StationRegistry,
    graph: Graph,
    line_labels: Vec<String>,
}

impl Network {
    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.registry.get(id)
    }

    /// Stations in ascending id order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.registry.iter()
    }

    pub fn station_count(&self) -> usize {
        self.registry.len()
    }

    /// Line labels in definition order, without duplicates.
    pub fn line_labels(&self) -> &[String] {
        &self.line_labels
    }

    /// Resolve free text to a station id by canonical key.
    ///
    /// Text that normalizes to an empty key never resolves.
    pub fn lookup(&self, raw: &str) -> Option<StationId> {
        let key = normalize_name(raw);
        if key.is_empty() {
            return None;
        }
        self.registry.lookup(&key)
    }

    /// Display name for `id`, or `<unknown>` for ids outside the network.
    pub fn station_name(&self, id: StationId) -> &str {
        self.station(id).map(Station::name).unwrap_or("<unknown>")
    }
}

/// Build a network from line definitions.
///
/// Every stop is normalized to a key, deduplicated through the registry and
/// tagged with its line; consecutive stops on a line become edges. Stations
/// shared between lines accumulate every line's label.
pub fn build_network(lines: &[LineDefinition]) -> Network {
    let mut registry = StationRegistry::new();
    let mut graph = Graph::default();
    let mut line_labels: Vec<String> = Vec::new();

    for line in lines {
        let ids: Vec<StationId> = line
            .stations
            .iter()
            .map(|stop| {
                let key = normalize_name(&stop.name);
                let id = registry.resolve(&key, &stop.name, stop.planned);
                registry.tag_line(id, &line.label);
                id
            })
            .collect();

        for pair in ids.windows(2) {
            graph.connect(pair[0], pair[1]);
        }

        if !line_labels.contains(&line.label) {
            line_labels.push(line.label.clone());
        }
    }

    debug!(
        stations = registry.len(),
        edges = graph.edge_count(),
        lines = line_labels.len(),
        "built metro network"
    );

    Network {
        registry,
        graph,
        line_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::LineStop;

    #[test]
    fn shared_stations_merge_and_collect_lines() {
        let lines = vec![
            LineDefinition::open("purple", ["Magadi Road", "Majestic", "M.G. Road"]),
            LineDefinition::open("pink", ["Trinity", "mg road", "Shivajinagar"]),
        ];
        let network = build_network(&lines);

        assert_eq!(network.station_count(), 5);
        let mg = network.lookup("M G ROAD").expect("mg road resolves");
        let station = network.station(mg).expect("station exists");
        assert_eq!(station.display_name, "M.G. Road");
        assert_eq!(station.lines, vec!["purple", "pink"]);
        assert_eq!(network.graph().neighbours(mg), &[1, 3, 4]);
    }

    #[test]
    fn lines_are_open_paths() {
        let lines = vec![LineDefinition::open("loop", ["A", "B", "C"])];
        let network = build_network(&lines);
        let a = network.lookup("a").expect("a");
        let c = network.lookup("c").expect("c");
        assert!(!network.graph().has_edge(a, c));
    }

    #[test]
    fn repeated_builds_are_identical() {
        let lines = crate::lines::default_lines();
        let first = build_network(&lines);
        let second = build_network(&lines);

        let names = |network: &Network| {
            network
                .stations()
                .map(|station| (station.id, station.key.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(names(&first), names(&second));
        assert_eq!(
            first.graph().edges().collect::<Vec<_>>(),
            second.graph().edges().collect::<Vec<_>>()
        );
    }

    #[test]
    fn planned_flag_is_recorded() {
        let lines = vec![LineDefinition {
            label: "blue".to_string(),
            stations: vec![LineStop::open("Silk Board"), LineStop::planned("Airport")],
        }];
        let network = build_network(&lines);
        let airport = network.lookup("airport").expect("airport");
        assert!(network.station(airport).map(|s| s.planned).unwrap_or(false));
    }

    #[test]
    fn blank_text_never_resolves() {
        // Unvalidated data can still produce a station with an empty key.
        let network = build_network(&[LineDefinition::open("x", ["Alpha", "..."])]);
        assert_eq!(network.station_count(), 2);
        assert_eq!(network.lookup("   "), None);
        assert_eq!(network.lookup("!!!"), None);
        assert_eq!(network.lookup("alpha"), Some(0));
    }

    #[test]
    fn empty_input_builds_empty_network() {
        let network = build_network(&[]);
        assert_eq!(network.station_count(), 0);
        assert_eq!(network.graph().edge_count(), 0);
    }
}
