//! Random-access cursor over an [`AdjacencyTree`].
//!
//! A cursor pairs a shared tree borrow with a node id; every navigation call
//! resolves through the tree, so a cursor survives splays performed before it
//! was taken and dies only with the node it designates. The past-the-end
//! cursor carries the sentinel id.

use std::ops::Sub;

use super::{
    Adjacency,
    tree::{AdjacencyTree, NIL},
};

/// Bidirectional, random-access cursor into an [`AdjacencyTree`].
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    tree: &'a AdjacencyTree,
    id: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(tree: &'a AdjacencyTree, id: u32) -> Self {
        Self { tree, id }
    }

    /// The adjacency under the cursor, or `None` past the end.
    #[must_use]
    pub fn get(&self) -> Option<&'a Adjacency> {
        if self.id == NIL {
            None
        } else {
            Some(self.tree.adjacency(self.id))
        }
    }

    /// Whether the cursor sits past the last adjacency.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.id == NIL
    }

    /// 1-based in-order position; the past-the-end cursor reports
    /// `len + 1`.
    #[must_use]
    pub fn rank(&self) -> u64 {
        if self.id == NIL {
            self.tree.len() + 1
        } else {
            self.tree.rank_of(self.id)
        }
    }

    /// Step to the next adjacency. Stepping past the end parks the cursor
    /// there.
    pub fn step_forward(&mut self) {
        debug_assert!(self.id != NIL, "cannot step a past-the-end cursor forward");
        if self.id != NIL {
            self.id = self.tree.successor(self.id);
        }
    }

    /// Step to the previous adjacency; from past-the-end this lands on the
    /// maximum.
    pub fn step_back(&mut self) {
        if self.id == NIL {
            self.id = self.tree.max_id();
        } else {
            self.id = self.tree.predecessor(self.id);
        }
    }

    /// Move `delta` positions in in-order; targets outside the tree park the
    /// cursor past the end.
    pub fn advance(&mut self, delta: i64) {
        if self.id == NIL {
            let target = self.tree.len() as i64 + 1 + delta;
            self.id = if target < 1 {
                NIL
            } else {
                self.tree.select_id(target as u64)
            };
        } else {
            self.id = self.tree.advance_id(self.id, delta);
        }
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            std::ptr::eq(self.tree, other.tree),
            "cursors from different trees are not comparable"
        );
        self.id == other.id
    }
}

impl Eq for Cursor<'_> {}

impl Sub for Cursor<'_> {
    type Output = i64;

    /// Signed difference of ranks, counting past-the-end as `len + 1`.
    fn sub(self, other: Self) -> i64 {
        debug_assert!(
            std::ptr::eq(self.tree, other.tree),
            "cursors from different trees are not comparable"
        );
        self.rank() as i64 - other.rank() as i64
    }
}
