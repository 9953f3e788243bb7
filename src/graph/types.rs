//! Result values returned by the tree-construction algorithms.
//!
//! Each algorithm call returns a fresh snapshot; results stay valid
//! across later graph mutation and unrelated calls.

use std::fmt;

use crate::graph::edge::Edge;

/// Distance sentinel for vertices the source cannot reach.
pub const UNREACHED: i64 = i64::MAX;

/// Single-source shortest-path tree.
///
/// Both arrays are `n + 1` long with slot 0 unused so vertex ids index
/// directly. `dist[v]` is [`UNREACHED`] and `parent[v]` is 0 for
/// vertices the source cannot reach; `parent[source]` is 0 as the root
/// marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    pub source: usize,
    pub dist: Vec<i64>,
    pub parent: Vec<usize>,
}

impl ShortestPathTree {
    pub(crate) fn new(n: usize, source: usize) -> Self {
        Self {
            source,
            dist: vec![UNREACHED; n + 1],
            parent: vec![0; n + 1],
        }
    }

    /// Number of vertices in the graph the tree was built from.
    pub fn num_vertices(&self) -> usize {
        self.dist.len() - 1
    }

    /// Distance from the source, or `None` when `v` is unreached.
    ///
    /// Indexing with `v` outside `[1, n]` panics.
    pub fn distance(&self, v: usize) -> Option<i64> {
        let d = self.dist[v];
        if d == UNREACHED {
            None
        } else {
            Some(d)
        }
    }

    /// Predecessor of `v` in the tree; `None` for the root and for
    /// unreached vertices.
    pub fn parent_of(&self, v: usize) -> Option<usize> {
        match self.parent[v] {
            0 => None,
            p => Some(p),
        }
    }

    pub fn is_reached(&self, v: usize) -> bool {
        self.dist[v] != UNREACHED
    }

    /// Vertex sequence from the source to `v`, reconstructed by walking
    /// the parent pointers backward until the root marker. `None` when
    /// `v` is unreached.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.is_reached(v) {
            return None;
        }
        let mut path = vec![v];
        let mut u = v;
        while self.parent[u] != 0 {
            u = self.parent[u];
            path.push(u);
        }
        path.reverse();
        Some(path)
    }
}

impl fmt::Display for ShortestPathTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertex    dist    path")?;
        for v in 1..self.dist.len() {
            let shown = if self.dist[v] == UNREACHED {
                -1
            } else {
                self.dist[v]
            };
            writeln!(f, "{:4} : {:6} {:6}", v, shown, self.parent[v])?;
        }
        Ok(())
    }
}

/// Spanning tree — or forest, when the graph is disconnected — produced
/// by Prim's or Kruskal's algorithm. Edges appear in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
    pub total_weight: i64,
}

impl SpanningTree {
    /// Number of accepted tree edges (`n - 1` for a connected graph).
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl fmt::Display for SpanningTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.edges {
            writeln!(f, "{e}")?;
        }
        writeln!(f, "Total weight = {}", self.total_weight)
    }
}
