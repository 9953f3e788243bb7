//! Adjacency-list directed graph.

use std::fmt;

use crate::error::{Error, Result};
use crate::graph::bfs::bfs_impl;
use crate::graph::dijkstra::dijkstra_impl;
use crate::graph::edge::Edge;
use crate::graph::helpers::{validate_endpoints, validate_vertex};
use crate::graph::types::ShortestPathTree;

/// Directed graph over vertices `1..=n` with adjacency-list storage.
///
/// Slot 0 of the adjacency table is unused so vertex ids index
/// directly. At most one edge exists per ordered `(from, to)` pair;
/// inserting a duplicate overwrites the stored weight. The vertex
/// count is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiGraph {
    adjacency: Vec<Vec<Edge>>,
    num_vertices: usize,
    num_edges: usize,
}

impl DiGraph {
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

    /// Number of directed edges.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Outgoing edges of `v`, in insertion order.
    pub fn edges_from(&self, v: usize) -> Result<&[Edge]> {
        validate_vertex(v, self.num_vertices, "v")?;
        Ok(&self.adjacency[v])
    }

    /// Every edge in the graph, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.iter().flatten()
    }

    pub(crate) fn adjacent(&self, v: usize) -> &[Edge] {
        &self.adjacency[v]
    }

    /// Insert `e`, overwriting the weight if `(from, to)` is already
    /// present.
    pub fn insert_edge(&mut self, e: Edge) -> Result<()> {
        validate_endpoints(&e, self.num_vertices)?;
        let list = &mut self.adjacency[e.from];
        match list.iter_mut().find(|stored| stored.links_same_nodes(&e)) {
            Some(stored) => stored.weight = e.weight,
            None => {
                list.push(e);
                self.num_edges += 1;
            }
        }
        Ok(())
    }

    /// Remove the `(from, to)` edge matching `e`.
    pub fn remove_edge(&mut self, e: Edge) -> Result<()> {
        validate_endpoints(&e, self.num_vertices)?;
        let list = &mut self.adjacency[e.from];
        match list.iter().position(|stored| stored.links_same_nodes(&e)) {
            Some(i) => {
                list.remove(i);
                self.num_edges -= 1;
                Ok(())
            }
            None => Err(Error::EdgeNotFound {
                from: e.from,
                to: e.to,
            }),
        }
    }

    /// Shortest-path tree by edge count from `source` (breadth-first
    /// search). Weights are ignored.
    pub fn bfs_shortest_paths(&self, source: usize) -> Result<ShortestPathTree> {
        bfs_impl(self, source)
    }

    /// Shortest-path tree by total weight from `source` (Dijkstra with
    /// a linear-scan settle step). All edge weights must be
    /// non-negative.
    pub fn dijkstra(&self, source: usize) -> Result<ShortestPathTree> {
        dijkstra_impl(self, source)
    }
}

impl fmt::Display for DiGraph {
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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::types::UNREACHED;

    fn diamond_with_tail() -> DiGraph {
        // 1 -> 2 -> 4 -> 5, 1 -> 3 -> 4
        DiGraph::from_edges(
            5,
            &[
                Edge::new(1, 2, 1),
                Edge::new(1, 3, 1),
                Edge::new(2, 4, 1),
                Edge::new(3, 4, 1),
                Edge::new(4, 5, 1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn bfs_tree_on_the_diamond_graph() {
        let tree = diamond_with_tail().bfs_shortest_paths(1).unwrap();
        assert_eq!(tree.dist[1..], [0, 1, 1, 2, 3]);
        assert_eq!(tree.parent[1..], [0, 1, 1, 2, 4]);
    }

    #[test]
    fn bfs_counts_edges_not_weights() {
        // direct hop is heavy but still one edge
        let graph = DiGraph::from_edges(
            3,
            &[
                Edge::new(1, 3, 100),
                Edge::new(1, 2, 1),
                Edge::new(2, 3, 1),
            ],
        )
        .unwrap();
        let tree = graph.bfs_shortest_paths(1).unwrap();
        assert_eq!(tree.distance(3), Some(1));
        assert_eq!(tree.parent_of(3), Some(1));
    }

    #[test]
    fn bfs_leaves_unreached_vertices_at_the_sentinel() {
        let graph = DiGraph::from_edges(4, &[Edge::new(1, 2, 1)]).unwrap();
        let tree = graph.bfs_shortest_paths(1).unwrap();
        assert_eq!(tree.dist[3], UNREACHED);
        assert_eq!(tree.parent[3], 0);
        assert_eq!(tree.distance(4), None);
    }

    #[test]
    fn dijkstra_prefers_the_lighter_detour() {
        let graph = DiGraph::from_edges(
            4,
            &[
                Edge::new(1, 2, 1),
                Edge::new(1, 3, 10),
                Edge::new(2, 3, 2),
                Edge::new(3, 4, 1),
            ],
        )
        .unwrap();
        let tree = graph.dijkstra(1).unwrap();
        assert_eq!(tree.dist[1..], [0, 1, 3, 4]);
        assert_eq!(tree.parent[1..], [0, 1, 2, 3]);
        assert_eq!(tree.path_to(4), Some(vec![1, 2, 3, 4]));
    }

    #[test]
    fn dijkstra_tree_edges_are_tight() {
        // dist[v] == dist[parent[v]] + weight(parent[v], v) for every
        // reached non-source vertex
        let graph = diamond_with_tail();
        let tree = graph.dijkstra(1).unwrap();
        for v in 2..=5 {
            let p = tree.parent[v];
            let w = graph
                .edges_from(p)
                .unwrap()
                .iter()
                .find(|e| e.to == v)
                .unwrap()
                .weight;
            assert_eq!(tree.dist[v], tree.dist[p] + w);
        }
    }

    #[test]
    fn dijkstra_rejects_negative_weights() {
        let graph = DiGraph::from_edges(2, &[Edge::new(1, 2, -3)]).unwrap();
        assert_eq!(
            graph.dijkstra(1),
            Err(Error::NegativeWeight {
                from: 1,
                to: 2,
                weight: -3
            })
        );
    }

    #[test]
    fn source_out_of_range_is_rejected() {
        let graph = DiGraph::new(3).unwrap();
        assert!(matches!(
            graph.bfs_shortest_paths(0),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            graph.dijkstra(4),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn zero_vertices_is_rejected() {
        assert!(matches!(
            DiGraph::new(0),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn duplicate_insert_overwrites_the_weight() {
        let mut graph = DiGraph::new(3).unwrap();
        graph.insert_edge(Edge::new(1, 2, 5)).unwrap();
        graph.insert_edge(Edge::new(1, 2, 9)).unwrap();
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.edges_from(1).unwrap(), &[Edge::new(1, 2, 9)]);
    }

    #[test]
    fn insert_then_remove_restores_the_graph() {
        let mut graph = diamond_with_tail();
        let snapshot = graph.clone();
        graph.insert_edge(Edge::new(5, 1, 7)).unwrap();
        assert_eq!(graph.num_edges(), snapshot.num_edges() + 1);
        graph.remove_edge(Edge::new(5, 1, 7)).unwrap();
        assert_eq!(graph, snapshot);
    }

    #[test]
    fn removing_an_absent_edge_fails() {
        let mut graph = DiGraph::new(3).unwrap();
        assert_eq!(
            graph.remove_edge(Edge::new(1, 2, 0)),
            Err(Error::EdgeNotFound { from: 1, to: 2 })
        );
        assert!(matches!(
            graph.remove_edge(Edge::new(1, 9, 0)),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn display_lists_one_row_per_vertex() {
        let graph = DiGraph::from_edges(2, &[Edge::new(1, 2, 3)]).unwrap();
        let shown = graph.to_string();
        assert!(shown.contains("   1 : ( 2,  3)"));
        assert!(shown.contains("   2 :"));
    }
}
