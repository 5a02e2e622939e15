//! Adjacency manager: the splay tree plus a per-vertex range index.
//!
//! For every vertex `u` that appears as a first endpoint, the manager tracks
//! the node ids of the lexicographically smallest and largest adjacencies
//! with that prefix. Out-neighbour scans therefore start and stop in
//! constant time per vertex, with the in-order successor walk supplying the
//! interior.

use crate::VertexId;

use super::{
    Adjacency,
    cursor::Cursor,
    tree::{AdjacencyTree, NIL},
};

/// Rank-indexed adjacency store with per-first-endpoint extremal handles.
#[derive(Clone, Debug)]
pub struct AdjacencyManager {
    tree: AdjacencyTree,
    first_adj: Vec<u32>,
    last_adj: Vec<u32>,
}

impl AdjacencyManager {
    /// Create a manager for vertices `0..order`.
    #[must_use]
    pub fn new(order: u64) -> Self {
        let slots = order as usize;
        Self {
            tree: AdjacencyTree::new(),
            first_adj: vec![NIL; slots],
            last_adj: vec![NIL; slots],
        }
    }

    /// Number of adjacencies stored.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.tree.len()
    }

    /// Whether no adjacency is stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Number of vertices the index covers.
    #[must_use]
    pub fn order(&self) -> u64 {
        self.first_adj.len() as u64
    }

    /// Insert an adjacency; duplicates are an idempotent no-op.
    ///
    /// Returns whether the adjacency was newly inserted. Both endpoints must
    /// be below the manager's order; the graph layer validates user input.
    pub fn insert(&mut self, adjacency: Adjacency) -> bool {
        debug_assert!(adjacency.from < self.order() && adjacency.to < self.order());
        let (id, inserted) = self.tree.insert(adjacency);
        if !inserted {
            return false;
        }
        let slot = adjacency.from as usize;
        let first = self.first_adj[slot];
        if first == NIL || adjacency < *self.tree.adjacency(first) {
            self.first_adj[slot] = id;
        }
        let last = self.last_adj[slot];
        if last == NIL || adjacency > *self.tree.adjacency(last) {
            self.last_adj[slot] = id;
        }
        true
    }

    /// Erase an adjacency; absence is a no-op.
    ///
    /// Returns whether the adjacency was present.
    pub fn erase(&mut self, adjacency: Adjacency) -> bool {
        let id = self.tree.find_id(adjacency);
        if id == NIL {
            return false;
        }
        let slot = adjacency.from as usize;
        if self.first_adj[slot] == id && self.last_adj[slot] == id {
            self.first_adj[slot] = NIL;
            self.last_adj[slot] = NIL;
        } else if self.first_adj[slot] == id {
            self.first_adj[slot] = self.tree.successor(id);
        } else if self.last_adj[slot] == id {
            self.last_adj[slot] = self.tree.predecessor(id);
        }
        self.tree.erase(id);
        true
    }

    /// Whether the adjacency is stored.
    #[must_use]
    pub fn contains(&self, adjacency: Adjacency) -> bool {
        self.tree.find_id(adjacency) != NIL
    }

    /// Cursor at the smallest adjacency.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_> {
        Cursor::new(&self.tree, self.tree.min_id())
    }

    /// Past-the-end cursor.
    #[must_use]
    pub fn end(&self) -> Cursor<'_> {
        Cursor::new(&self.tree, NIL)
    }

    /// Cursor at the smallest adjacency with key `>= adjacency`.
    #[must_use]
    pub fn lower_bound(&self, adjacency: Adjacency) -> Cursor<'_> {
        Cursor::new(&self.tree, self.tree.lower_bound_id(adjacency))
    }

    /// Cursor at the smallest adjacency with key `> adjacency`.
    #[must_use]
    pub fn upper_bound(&self, adjacency: Adjacency) -> Cursor<'_> {
        Cursor::new(&self.tree, self.tree.upper_bound_id(adjacency))
    }

    /// Cursor at the adjacency with 1-based in-order rank `k`; past the end
    /// when `k` is outside `[1, len]`.
    #[must_use]
    pub fn select(&self, k: u64) -> Cursor<'_> {
        Cursor::new(&self.tree, self.tree.select_id(k))
    }

    /// The smallest adjacency leaving `vertex`, if any.
    #[must_use]
    pub fn first_of(&self, vertex: VertexId) -> Option<&Adjacency> {
        let id = *self.first_adj.get(vertex as usize)?;
        if id == NIL {
            None
        } else {
            Some(self.tree.adjacency(id))
        }
    }

    /// The largest adjacency leaving `vertex`, if any.
    #[must_use]
    pub fn last_of(&self, vertex: VertexId) -> Option<&Adjacency> {
        let id = *self.last_adj.get(vertex as usize)?;
        if id == NIL {
            None
        } else {
            Some(self.tree.adjacency(id))
        }
    }

    /// Iterate the adjacencies leaving `vertex` in ascending target order.
    #[must_use]
    pub fn neighbors(&self, vertex: VertexId) -> Neighbors<'_> {
        let (start, stop) = match self.first_adj.get(vertex as usize) {
            Some(&first) if first != NIL => (first, self.last_adj[vertex as usize]),
            _ => (NIL, NIL),
        };
        Neighbors {
            tree: &self.tree,
            current: start,
            stop,
        }
    }

    /// Iterate every stored adjacency in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &Adjacency> {
        self.tree.iter()
    }

    #[cfg(test)]
    pub(crate) fn audit(&self) {
        self.tree.audit();
        for slot in 0..self.first_adj.len() {
            let vertex = slot as VertexId;
            let expected_first = self.iter().find(|a| a.from == vertex);
            let expected_last = self.iter().filter(|a| a.from == vertex).last();
            assert_eq!(
                self.first_of(vertex),
                expected_first,
                "first_adj[{vertex}] must be the in-order minimum for the prefix"
            );
            assert_eq!(
                self.last_of(vertex),
                expected_last,
                "last_adj[{vertex}] must be the in-order maximum for the prefix"
            );
        }
    }
}

/// Ascending out-neighbour iterator produced by
/// [`AdjacencyManager::neighbors`].
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    tree: &'a AdjacencyTree,
    current: u32,
    stop: u32,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a Adjacency;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NIL {
            return None;
        }
        let adjacency = self.tree.adjacency(self.current);
        self.current = if self.current == self.stop {
            NIL
        } else {
            self.tree.successor(self.current)
        };
        Some(adjacency)
    }
}
