//! Graph construction and tree-building algorithms.
//!
//! Two adjacency-list graph types over vertices `1..=n` (slot 0 is a
//! reserved sentinel):
//!
//! - [`DiGraph`] — directed; single-source shortest-path trees via
//!   [`DiGraph::bfs_shortest_paths`] (edge count) and
//!   [`DiGraph::dijkstra`] (non-negative weights, linear-scan settle
//!   step).
//! - [`UnGraph`] — undirected; minimum spanning trees via
//!   [`UnGraph::prim`] and [`UnGraph::kruskal`].
//!
//! Algorithms return value snapshots ([`ShortestPathTree`],
//! [`SpanningTree`]) instead of mutating graph state, so results stay
//! valid across later mutation. Equal-weight alternatives make the
//! emitted tree topology structural rather than canonical; only total
//! weight and the spanning property are guaranteed.

mod bfs;
mod dijkstra;
mod directed;
mod edge;
mod helpers;
mod kruskal;
mod prim;
mod types;
mod undirected;

pub use directed::DiGraph;
pub use edge::Edge;
pub use types::{ShortestPathTree, SpanningTree, UNREACHED};
pub use undirected::UnGraph;
