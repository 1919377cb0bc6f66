use crate::registry::StationId;

/// Undirected, unweighted connectivity between stations.
///
/// Neighbour lists are kept sorted by station id so traversal order follows
/// creation order regardless of how edges were inserted.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<StationId>>,
}

impl Graph {
    /// Graph with `stations` isolated nodes.
    pub fn with_stations(stations: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); stations],
        }
    }

    /// Connect `a` and `b` in both directions.
    ///
    /// Self-edges are ignored and repeated edges are stored once. Nodes are
    /// added on demand.
    pub fn connect(&mut self, a: StationId, b: StationId) {
        if a == b {
            return;
        }
        let needed = a.max(b) + 1;
        if self.adjacency.len() < needed {
            self.adjacency.resize_with(needed, Vec::new);
        }
        insert_sorted(&mut self.adjacency[a], b);
        insert_sorted(&mut self.adjacency[b], a);
    }

    /// Return the neighbours of `station` in ascending id order.
    pub fn neighbours(&self, station: StationId) -> &[StationId] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_edge(&self, a: StationId, b: StationId) -> bool {
        self.neighbours(a).binary_search(&b).is_ok()
    }

    /// Number of nodes tracked by the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Each undirected edge once, as `(lower, higher)`.
    pub fn edges(&self) -> impl Iterator<Item = (StationId, StationId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| {
                targets
                    .iter()
                    .copied()
                    .filter(move |&to| from < to)
                    .map(move |to| (from, to))
            })
    }
}

fn insert_sorted(targets: &mut Vec<StationId>, station: StationId) {
    if let Err(position) = targets.binary_search(&station) {
        targets.insert(position, station);
    }
}
