//! spanr - Shortest-path trees and minimum spanning trees on compact
//! adjacency-list graphs.
//!
//! Vertices are integer ids in `[1, n]` with the vertex count fixed at
//! construction. Graphs are built from [`Edge`] triples; each algorithm
//! call returns a fresh result value to read distances, predecessors,
//! and accepted tree edges from.
//!
//! # Modules
//!
//! - [`graph`] - [`DiGraph`] (BFS and Dijkstra shortest-path trees) and
//!   [`UnGraph`] (Prim and Kruskal minimum spanning trees)
//! - [`union_find`] - disjoint sets with path compression and union by
//!   size, the structure behind Kruskal's algorithm
//! - [`error`] - boundary validation errors
//!
//! # Examples
//!
//! ```
//! use spanr::{DiGraph, Edge, UnGraph};
//!
//! # fn main() -> spanr::Result<()> {
//! let roads = DiGraph::from_edges(
//!     4,
//!     &[Edge::new(1, 2, 3), Edge::new(2, 3, 1), Edge::new(1, 3, 7)],
//! )?;
//! let tree = roads.dijkstra(1)?;
//! assert_eq!(tree.distance(3), Some(4));
//! assert_eq!(tree.path_to(3), Some(vec![1, 2, 3]));
//!
//! let grid = UnGraph::from_edges(
//!     4,
//!     &[
//!         Edge::new(1, 2, 1),
//!         Edge::new(2, 3, 2),
//!         Edge::new(3, 4, 1),
//!         Edge::new(1, 4, 4),
//!     ],
//! )?;
//! assert_eq!(grid.kruskal()?.total_weight, 4);
//! assert_eq!(grid.prim()?.total_weight, 4);
//! # Ok(())
//! # }
//! ```
//!
//! # Scope
//!
//! Single-threaded and fully in-memory: no persistence, no dynamic
//! vertex insertion, no negative-weight support (the weighted
//! algorithms reject negative weights at their boundary). Instances
//! are exclusively owned by the caller.

pub mod error;
pub mod graph;
pub mod union_find;

pub use error::{Error, Result};
pub use graph::{DiGraph, Edge, ShortestPathTree, SpanningTree, UnGraph, UNREACHED};
pub use union_find::UnionFind;
