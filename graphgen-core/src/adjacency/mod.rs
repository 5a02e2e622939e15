//! Rank-indexed adjacency storage.
//!
//! An adjacency is a directed `(from, to)` vertex pair; an undirected edge is
//! stored as the pair and its mirror. The [`AdjacencyTree`] keeps the set
//! ordered with order-statistic augmentation, and the [`AdjacencyManager`]
//! layers a per-first-endpoint range index on top.

mod cursor;
mod manager;
mod tree;

#[cfg(test)]
mod tests;

pub use self::{
    cursor::Cursor,
    manager::{AdjacencyManager, Neighbors},
    tree::{AdjacencyTree, Iter},
};

use crate::VertexId;

/// A directed vertex pair, ordered lexicographically on `(from, to)`.
///
/// # Examples
/// ```
/// use graphgen_core::Adjacency;
///
/// let edge = Adjacency::new(2, 7);
/// assert_eq!(edge.reversed(), Adjacency::new(7, 2));
/// assert!(Adjacency::new(1, 9) < Adjacency::new(2, 0));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Adjacency {
    /// First endpoint; the out-vertex in a directed graph.
    pub from: VertexId,
    /// Second endpoint.
    pub to: VertexId,
}

impl Adjacency {
    /// Construct an adjacency from its endpoints.
    #[must_use]
    pub const fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }

    /// The mirror adjacency `(to, from)`.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Whether both endpoints coincide.
    #[must_use]
    pub const fn is_loop(self) -> bool {
        self.from == self.to
    }
}

impl std::fmt::Display for Adjacency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.from, self.to)
    }
}
