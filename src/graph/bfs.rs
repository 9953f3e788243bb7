//! Unweighted single-source shortest paths via breadth-first search.
//!
//! Distances count edges; weights are ignored. FIFO discipline plus the
//! adjacency-list insertion order make the tree deterministic.

use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::directed::DiGraph;
use crate::graph::helpers::validate_vertex;
use crate::graph::types::{ShortestPathTree, UNREACHED};

/// BFS shortest-path tree rooted at `source`.
///
/// Time: O(V + E).
pub(crate) fn bfs_impl(graph: &DiGraph, source: usize) -> Result<ShortestPathTree> {
    validate_vertex(source, graph.num_vertices(), "source")?;

    let mut tree = ShortestPathTree::new(graph.num_vertices(), source);
    tree.dist[source] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        for e in graph.adjacent(v) {
            if tree.dist[e.to] == UNREACHED {
                tree.dist[e.to] = tree.dist[v] + 1;
                tree.parent[e.to] = v;
                queue.push_back(e.to);
            }
        }
    }

    Ok(tree)
}
