//! Prim's minimum spanning tree, grown from vertex 1.

use crate::error::Result;
use crate::graph::edge::Edge;
use crate::graph::helpers::{min_open_vertex, validate_non_negative};
use crate::graph::types::{SpanningTree, UNREACHED};
use crate::graph::undirected::UnGraph;

/// Prim MST via repeated linear scans.
///
/// Time: O(V^2 + E). `dist[u]` tracks the lightest edge connecting `u`
/// to the growing tree. Vertices that vertex 1 cannot reach are left
/// out silently, so a disconnected graph yields a partial tree.
/// Negative edge weights are rejected up front.
pub(crate) fn prim_impl(graph: &UnGraph) -> Result<SpanningTree> {
    validate_non_negative(graph.edges())?;

    let n = graph.num_vertices();
    let mut dist = vec![UNREACHED; n + 1];
    let mut parent = vec![0usize; n + 1];
    let mut done = vec![false; n + 1];

    let mut v = 1;
    dist[v] = 0;
    done[v] = true;

    let mut tree = SpanningTree::default();
    loop {
        for e in graph.adjacent(v) {
            if !done[e.to] && e.weight < dist[e.to] {
                dist[e.to] = e.weight;
                parent[e.to] = v;
            }
        }
        v = min_open_vertex(&dist, &done);
        if v == 0 {
            break;
        }
        done[v] = true;
        // v was relaxed through some tree vertex, so parent[v] != 0
        // and dist[v] is the weight of the connecting edge.
        tree.edges.push(Edge::new(parent[v], v, dist[v]));
        tree.total_weight += dist[v];
    }

    Ok(tree)
}
