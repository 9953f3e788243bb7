//! Kruskal's minimum spanning tree over a weight-ordered edge heap.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::debug;

use crate::error::Result;
use crate::graph::edge::Edge;
use crate::graph::helpers::validate_non_negative;
use crate::graph::types::SpanningTree;
use crate::graph::undirected::UnGraph;
use crate::union_find::UnionFind;

/// Heap adapter keyed on weight alone. Endpoints never influence the
/// order, so equal-weight edges surface in unspecified order.
#[derive(Debug, Clone, Copy)]
struct ByWeight(Edge);

impl PartialEq for ByWeight {
    fn eq(&self, other: &Self) -> bool {
        self.0.weight == other.0.weight
    }
}

impl Eq for ByWeight {}

impl PartialOrd for ByWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.weight_cmp(&other.0)
    }
}

/// Kruskal MST, O(E log E).
///
/// Extracts edges lightest-first and accepts those whose endpoints lie
/// in different components of a fresh [`UnionFind`]. Stops after
/// `n - 1` accepted edges or when the supply runs out, so a
/// disconnected graph yields a forest rather than an error. Negative
/// edge weights are rejected up front.
pub(crate) fn kruskal_impl(graph: &UnGraph) -> Result<SpanningTree> {
    validate_non_negative(graph.edges())?;

    let n = graph.num_vertices();

    // Undirected edges are stored in both directions; the from < to
    // copy puts each edge on the heap exactly once.
    let mut heap: BinaryHeap<Reverse<ByWeight>> = graph
        .edges()
        .filter(|e| e.from < e.to)
        .map(|&e| Reverse(ByWeight(e)))
        .collect();

    let mut sets = UnionFind::new(n);
    let mut tree = SpanningTree::default();

    while tree.edges.len() < n - 1 {
        let Some(Reverse(ByWeight(e))) = heap.pop() else {
            break;
        };
        let root_from = sets.find(e.from);
        let root_to = sets.find(e.to);
        if root_from != root_to {
            sets.join(root_from, root_to);
            tree.edges.push(e);
            tree.total_weight += e.weight;
        }
    }

    debug!(
        "kruskal: accepted {} of {} edges, total weight {}",
        tree.edges.len(),
        graph.num_edges(),
        tree.total_weight
    );
    Ok(tree)
}
