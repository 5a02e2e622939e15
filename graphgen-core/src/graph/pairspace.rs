//! Bijections between canonical edges and dense ranks.
//!
//! Uniform edge sampling works on ranks: every valid edge of a universe maps
//! to a distinct integer in `[0, size)`, existing edges become an exclusion
//! set, and sampled ranks map back to edges. Undirected and DAG universes
//! use the triangular space of pairs with `from > to`; the directed universe
//! uses the off-diagonal square space.

use crate::adjacency::Adjacency;

/// Triangular number `u * (u - 1) / 2` without intermediate overflow.
const fn triangle(u: u64) -> u64 {
    if u == 0 {
        0
    } else {
        ((u as u128) * ((u as u128) - 1) / 2) as u64
    }
}

/// The space of valid edges for one graph flavour, with a rank bijection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeUniverse {
    /// Unordered pairs, canonicalized as `from > to`.
    Undirected {
        /// Number of vertices.
        order: u64,
    },
    /// Ordered pairs off the diagonal.
    Directed {
        /// Number of vertices.
        order: u64,
    },
    /// Strictly-lower-triangular pairs oriented `from > to`.
    Dag {
        /// Number of vertices.
        order: u64,
    },
}

impl EdgeUniverse {
    /// Number of distinct edges in the universe.
    #[must_use]
    pub const fn size(self) -> u64 {
        match self {
            Self::Undirected { order } | Self::Dag { order } => triangle(order),
            Self::Directed { order } => {
                if order == 0 {
                    0
                } else {
                    order * (order - 1)
                }
            }
        }
    }

    /// Whether the adjacency is the canonical representative for this
    /// universe.
    #[must_use]
    pub const fn is_canonical(self, adjacency: Adjacency) -> bool {
        match self {
            Self::Undirected { .. } | Self::Dag { .. } => adjacency.from > adjacency.to,
            Self::Directed { .. } => adjacency.from != adjacency.to,
        }
    }

    /// Rank of a canonical edge.
    ///
    /// The adjacency must be canonical for this universe and inside it.
    #[must_use]
    pub fn edge_to_rank(self, adjacency: Adjacency) -> u64 {
        debug_assert!(self.is_canonical(adjacency));
        match self {
            Self::Undirected { .. } | Self::Dag { .. } => {
                triangle(adjacency.from) + adjacency.to
            }
            Self::Directed { order } => {
                let skip_diagonal = u64::from(adjacency.to > adjacency.from);
                adjacency.from * (order - 1) + adjacency.to - skip_diagonal
            }
        }
    }

    /// Canonical edge with the given rank.
    ///
    /// The rank must lie in `[0, size)`.
    #[must_use]
    pub fn rank_to_edge(self, rank: u64) -> Adjacency {
        debug_assert!(rank < self.size());
        match self {
            Self::Undirected { .. } | Self::Dag { .. } => {
                // Float estimate of the triangular root, corrected to exact
                // integer bounds.
                let mut from = (2.0 * (rank + 1) as f64).sqrt().round() as u64;
                from = from.max(1);
                while triangle(from) > rank {
                    from -= 1;
                }
                while triangle(from + 1) <= rank {
                    from += 1;
                }
                Adjacency::new(from, rank - triangle(from))
            }
            Self::Directed { order } => {
                let from = rank / (order - 1);
                let rem = rank % (order - 1);
                let to = rem + u64::from(rem >= from);
                Adjacency::new(from, to)
            }
        }
    }
}
