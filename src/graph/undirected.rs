//! Adjacency-list undirected graph.

use std::fmt;

use crate::error::{Error, Result};
use crate::graph::edge::Edge;
use crate::graph::helpers::{validate_endpoints, validate_vertex};
use crate::graph::kruskal::kruskal_impl;
use crate::graph::prim::prim_impl;
use crate::graph::types::SpanningTree;

/// Undirected graph over vertices `1..=n`.
///
/// Every undirected edge (u, v, w) is stored as the two directed
/// entries (u -> v, w) and (v -> u, w), kept in sync by insertion and
/// removal. The edge counter moves once per undirected edge, not per
/// direction. The vertex count is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnGraph {
    adjacency: Vec<Vec<Edge>>,
    num_vertices: usize,
    num_edges: usize,
}

impl UnGraph {
    /// An edgeless graph with `n` vertices, `n >= 1`.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidArgument {
                arg: "n",
                reason: "graph needs at least one vertex".to_string(),
            });
        }
        Ok(Self {
            adjacency: vec![Vec::new(); n + 1],
            num_vertices: n,
            num_edges: 0,
        })
    }

    /// A graph with `n` vertices and the given edges, inserted in order.
    pub fn from_edges(n: usize, edges: &[Edge]) -> Result<Self> {
        let mut graph = Self::new(n)?;
        for &e in edges {
            graph.insert_edge(e)?;
        }
        Ok(graph)
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Edges incident to `v`, oriented outward, in insertion order.
    pub fn edges_from(&self, v: usize) -> Result<&[Edge]> {
        validate_vertex(v, self.num_vertices, "v")?;
        Ok(&self.adjacency[v])
    }

    /// Every stored directed entry — each undirected edge appears in
    /// both orientations.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.iter().flatten()
    }

    pub(crate) fn adjacent(&self, v: usize) -> &[Edge] {
        &self.adjacency[v]
    }

    /// Insert the undirected edge `e`, overwriting the weight in both
    /// directions if its endpoints are already linked.
    pub fn insert_edge(&mut self, e: Edge) -> Result<()> {
        validate_endpoints(&e, self.num_vertices)?;
        let added = self.insert_directed(e);
        if e.from != e.to {
            self.insert_directed(e.reversed());
        }
        if added {
            self.num_edges += 1;
        }
        Ok(())
    }

    /// Remove the undirected edge matching `e`'s endpoints, in both
    /// directions.
    pub fn remove_edge(&mut self, e: Edge) -> Result<()> {
        validate_endpoints(&e, self.num_vertices)?;
        self.remove_directed(&e)?;
        if e.from != e.to {
            // the mirror entry is present by construction
            self.remove_directed(&e.reversed())?;
        }
        self.num_edges -= 1;
        Ok(())
    }

    fn insert_directed(&mut self, e: Edge) -> bool {
        let list = &mut self.adjacency[e.from];
        match list.iter_mut().find(|stored| stored.links_same_nodes(&e)) {
            Some(stored) => {
                stored.weight = e.weight;
                false
            }
            None => {
                list.push(e);
                true
            }
        }
    }

    fn remove_directed(&mut self, e: &Edge) -> Result<()> {
        let list = &mut self.adjacency[e.from];
        match list.iter().position(|stored| stored.links_same_nodes(e)) {
            Some(i) => {
                list.remove(i);
                Ok(())
            }
            None => Err(Error::EdgeNotFound {
                from: e.from,
                to: e.to,
            }),
        }
    }

    /// Minimum spanning tree via Prim's algorithm, grown from vertex 1.
    /// All edge weights must be non-negative.
    pub fn prim(&self) -> Result<SpanningTree> {
        prim_impl(self)
    }

    /// Minimum spanning tree via Kruskal's algorithm (union-find over a
    /// weight-ordered edge heap). All edge weights must be
    /// non-negative.
    pub fn kruskal(&self) -> Result<SpanningTree> {
        kruskal_impl(self)
    }
}

impl fmt::Display for UnGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertex  adjacency lists")?;
        for v in 1..=self.num_vertices {
            write!(f, "{v:4} : ")?;
            for e in &self.adjacency[v] {
                write!(f, "({:2}, {:2}) ", e.to, e.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
