//! Boundary validation and scan helpers shared by the graph algorithms.

use crate::error::{Error, Result};
use crate::graph::edge::Edge;
use crate::graph::types::UNREACHED;

/// Validate that a vertex id lies in `[1, n]`.
pub(crate) fn validate_vertex(v: usize, n: usize, name: &'static str) -> Result<()> {
    if v < 1 || v > n {
        return Err(Error::InvalidArgument {
            arg: name,
            reason: format!("vertex {v} outside [1, {n}]"),
        });
    }
    Ok(())
}

/// Validate both endpoints of an edge against `[1, n]`.
pub(crate) fn validate_endpoints(e: &Edge, n: usize) -> Result<()> {
    validate_vertex(e.from, n, "edge.from")?;
    validate_vertex(e.to, n, "edge.to")
}

/// Reject any negative weight ahead of an algorithm that requires
/// non-negative weights.
pub(crate) fn validate_non_negative<'a, I>(edges: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Edge>,
{
    for e in edges {
        if e.weight < 0 {
            return Err(Error::NegativeWeight {
                from: e.from,
                to: e.to,
                weight: e.weight,
            });
        }
    }
    Ok(())
}

/// The open (unsettled) vertex with the smallest finite distance, or 0
/// when every remaining vertex is unreachable.
///
/// Linear scan over `1..=n`; ties resolve to the lowest vertex id. Both
/// Dijkstra's and Prim's settle loop use this instead of an indexed
/// priority queue, keeping them O(n^2 + E).
pub(crate) fn min_open_vertex(dist: &[i64], closed: &[bool]) -> usize {
    let mut best = 0;
    let mut best_dist = UNREACHED;
    for v in 1..dist.len() {
        if !closed[v] && dist[v] < best_dist {
            best_dist = dist[v];
            best = v;
        }
    }
    best
}
