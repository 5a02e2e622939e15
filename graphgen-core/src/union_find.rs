//! Disjoint-set forest used to track connectivity while assembling graphs.
//!
//! `connect()` merges one set per undirected edge and then links component
//! representatives, so the structure keeps a live component count alongside
//! the usual parent and rank tables.

use crate::{
    VertexId,
    error::{GraphError, Result},
};

/// Union-find with full path compression and union by rank.
///
/// # Examples
/// ```
/// use graphgen_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(5);
/// assert!(sets.merge(0, 1).expect("indices are in range"));
/// assert!(!sets.merge(1, 0).expect("indices are in range"));
/// assert_eq!(sets.components(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Allocate `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of elements across all sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the structure holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently alive.
    #[must_use]
    pub const fn components(&self) -> usize {
        self.components
    }

    /// Return the representative of `node`'s set, compressing the path.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `node` is not a valid
    /// element index.
    pub fn find(&mut self, node: usize) -> Result<usize> {
        self.check(node)?;

        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != current {
            let parent = self.parent[current];
            self.parent[current] = root;
            current = parent;
        }

        Ok(root)
    }

    /// Unite the sets holding `left` and `right`.
    ///
    /// Returns `true` when the two were distinct before the call and `false`
    /// when they already shared a representative.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either index is out of
    /// range.
    pub fn merge(&mut self, left: usize, right: usize) -> Result<bool> {
        let mut left = self.find(left)?;
        let mut right = self.find(right)?;
        if left == right {
            return Ok(false);
        }

        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        Ok(true)
    }

    fn check(&self, node: usize) -> Result<()> {
        if node < self.parent.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: node as VertexId,
                order: self.parent.len() as u64,
            })
        }
    }
}
