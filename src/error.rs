//! Error types reported at the public API boundary.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by graph construction, mutation, and the tree
/// algorithms.
///
/// Structural misuse of [`crate::union_find::UnionFind`] (joining
/// non-roots, out-of-range elements) is a programmer error and panics
/// instead of returning one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument failed boundary validation.
    #[error("invalid argument `{arg}`: {reason}")]
    InvalidArgument { arg: &'static str, reason: String },

    /// Removal targeted an edge the graph does not contain.
    #[error("no edge ({from}, {to}) in the graph")]
    EdgeNotFound { from: usize, to: usize },

    /// A negative weight reached an algorithm that requires
    /// non-negative weights.
    #[error("edge ({from}, {to}) has negative weight {weight}")]
    NegativeWeight { from: usize, to: usize, weight: i64 },
}
