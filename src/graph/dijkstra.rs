//! Dijkstra-style single-source shortest paths for non-negative weights.
//!
//! No priority queue: after settling a vertex the next one is found by
//! [`min_open_vertex`]'s linear scan, keeping the loop O(n^2 + E). An
//! indexed heap would change the asymptotics and is out of scope.

use log::debug;

use crate::error::Result;
use crate::graph::directed::DiGraph;
use crate::graph::helpers::{min_open_vertex, validate_non_negative, validate_vertex};
use crate::graph::types::ShortestPathTree;

/// Dijkstra shortest-path tree rooted at `source`.
///
/// Time: O(V^2 + E). Negative edge weights are rejected up front with
/// [`crate::Error::NegativeWeight`].
pub(crate) fn dijkstra_impl(graph: &DiGraph, source: usize) -> Result<ShortestPathTree> {
    validate_vertex(source, graph.num_vertices(), "source")?;
    validate_non_negative(graph.edges())?;

    let n = graph.num_vertices();
    let mut tree = ShortestPathTree::new(n, source);
    let mut settled = vec![false; n + 1];

    tree.dist[source] = 0;
    settled[source] = true;
    let mut num_settled = 1;

    let mut v = source;
    loop {
        for e in graph.adjacent(v) {
            if !settled[e.to] && tree.dist[v] + e.weight < tree.dist[e.to] {
                tree.dist[e.to] = tree.dist[v] + e.weight;
                tree.parent[e.to] = v;
            }
        }
        v = min_open_vertex(&tree.dist, &settled);
        if v == 0 {
            break;
        }
        settled[v] = true;
        num_settled += 1;
    }

    debug!("dijkstra from {source}: settled {num_settled} of {n} vertices");
    Ok(tree)
}
