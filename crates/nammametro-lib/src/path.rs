use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::Graph;
use crate::registry::StationId;

/// Edges treated as absent for a single search, compared as unordered pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockedEdges {
    edges: HashSet<(StationId, StationId)>,
}

impl BlockedEdges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block exactly one edge.
    pub fn single(a: StationId, b: StationId) -> Self {
        let mut blocked = Self::new();
        blocked.insert(a, b);
        blocked
    }

    pub fn insert(&mut self, a: StationId, b: StationId) {
        self.edges.insert(ordered(a, b));
    }

    pub fn contains(&self, a: StationId, b: StationId) -> bool {
        self.edges.contains(&ordered(a, b))
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }
}

fn ordered(a: StationId, b: StationId) -> (StationId, StationId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Find a route between `start` and `goal` using breadth-first search without
/// blocked edges.
pub fn find_route(graph: &Graph, start: StationId, goal: StationId) -> Option<Vec<StationId>> {
    find_route_bfs(graph, start, goal, &BlockedEdges::default())
}

/// Run breadth-first search, skipping any edge in `blocked`.
///
/// Neighbours are explored in ascending id order and each station is reached
/// at most once, so the result has the fewest hops and is fully determined by
/// the graph and the blocked set. The graph itself is never modified.
pub fn find_route_bfs(
    graph: &Graph,
    start: StationId,
    goal: StationId,
    blocked: &BlockedEdges,
) -> Option<Vec<StationId>> {
    if start == goal {
        return Some(vec![start]);
    }

    let mut parents: HashMap<StationId, Option<StationId>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &next in graph.neighbours(current) {
            if parents.contains_key(&next) {
                continue;
            }
            if blocked.contains(current, next) {
                continue;
            }

            parents.insert(next, Some(current));
            if next == goal {
                return Some(reconstruct_path(&parents, start, goal));
            }
            queue.push_back(next);
        }
    }

    None
}

/// Hop distance from `start` to every reachable station.
pub fn hop_distances(graph: &Graph, start: StationId) -> HashMap<StationId, usize> {
    let mut distances = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let next_distance = distances[&current] + 1;
        for &next in graph.neighbours(current) {
            if !distances.contains_key(&next) {
                distances.insert(next, next_distance);
                queue.push_back(next);
            }
        }
    }

    distances
}

fn reconstruct_path(
    parents: &HashMap<StationId, Option<StationId>>,
    start: StationId,
    goal: StationId,
) -> Vec<StationId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}
