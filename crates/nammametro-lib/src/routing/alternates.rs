//! Alternate routes that each avoid one edge of a primary route.

use tracing::trace;

use crate::graph::Graph;
use crate::path::{find_route_bfs, BlockedEdges};
use crate::registry::StationId;

/// Propose up to `max_count` alternates to `primary`.
///
/// Edges of the primary route are blocked one at a time, first edge first,
/// and the endpoints are searched again. A found route is kept unless it
/// equals the primary route or an alternate already collected. Blocked sets
/// are never combined across attempts, so every alternate avoids exactly one
/// specific segment of the primary route.
pub fn find_alternates(
    graph: &Graph,
    primary: &[StationId],
    max_count: usize,
) -> Vec<Vec<StationId>> {
    let mut alternates: Vec<Vec<StationId>> = Vec::new();
    let (Some(&start), Some(&goal)) = (primary.first(), primary.last()) else {
        return alternates;
    };

    for pair in primary.windows(2) {
        if alternates.len() >= max_count {
            break;
        }

        let blocked = BlockedEdges::single(pair[0], pair[1]);
        let Some(candidate) = find_route_bfs(graph, start, goal, &blocked) else {
            trace!(from = pair[0], to = pair[1], "no alternate with edge blocked");
            continue;
        };

        if candidate.as_slice() == primary || alternates.contains(&candidate) {
            trace!(from = pair[0], to = pair[1], "alternate duplicates a known route");
            continue;
        }

        trace!(
            from = pair[0],
            to = pair[1],
            hops = candidate.len() - 1,
            "accepted alternate"
        );
        alternates.push(candidate);
    }

    alternates
}
