// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Vertex Separator
//!
//! The value the solver produces: a tri-partition of the vertex set into a
//! left shore, a right shore, and the separating set, such that no edge
//! joins the two shores. Membership is stored in dense bitsets with cached
//! cardinalities, so size queries are `O(1)` and membership tests are a
//! single bit probe.
//!
//! ## Highlights
//!
//! - `is_valid(graph, max_shore_size)` checks the full contract: the three
//!   sets partition `V(G)`, no left–right edge exists, both shores are
//!   nonempty, and neither shore exceeds the capacity.
//! - Cheap to clone (three bitsets), which the concurrent bound holder
//!   relies on for snapshots.

use crate::graph::Graph;
use crate::index::VertexIndex;
use fixedbitset::FixedBitSet;

/// A tri-partition of a graph's vertices into two shores and a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexSeparator {
    left: FixedBitSet,
    right: FixedBitSet,
    separator: FixedBitSet,
    left_len: usize,
    right_len: usize,
    separator_len: usize,
}

impl VertexSeparator {
    /// Creates an empty partition over `num_vertices` vertices.
    #[inline]
    pub fn new(num_vertices: usize) -> Self {
        VertexSeparator {
            left: FixedBitSet::with_capacity(num_vertices),
            right: FixedBitSet::with_capacity(num_vertices),
            separator: FixedBitSet::with_capacity(num_vertices),
            left_len: 0,
            right_len: 0,
            separator_len: 0,
        }
    }

    /// Assembles a partition from pre-built membership sets.
    ///
    /// # Panics (debug)
    ///
    /// Debug-asserts that all three sets cover the same vertex range.
    pub fn from_parts(left: FixedBitSet, right: FixedBitSet, separator: FixedBitSet) -> Self {
        debug_assert_eq!(left.len(), right.len());
        debug_assert_eq!(left.len(), separator.len());
        let left_len = left.count_ones(..);
        let right_len = right.count_ones(..);
        let separator_len = separator.count_ones(..);
        VertexSeparator {
            left,
            right,
            separator,
            left_len,
            right_len,
            separator_len,
        }
    }

    /// Returns the number of vertices of the underlying graph.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.left.len()
    }

    /// Returns the number of vertices placed so far.
    #[inline]
    pub fn num_assigned(&self) -> usize {
        self.left_len + self.right_len + self.separator_len
    }

    /// Returns the size of the left shore.
    #[inline]
    pub fn left_size(&self) -> usize {
        self.left_len
    }

    /// Returns the size of the right shore.
    #[inline]
    pub fn right_size(&self) -> usize {
        self.right_len
    }

    /// Returns the size of the separator, the minimized objective.
    #[inline]
    pub fn separator_size(&self) -> usize {
        self.separator_len
    }

    /// Returns whether `vertex` is in the left shore.
    #[inline]
    pub fn in_left(&self, vertex: VertexIndex) -> bool {
        self.left.contains(vertex.get())
    }

    /// Returns whether `vertex` is in the right shore.
    #[inline]
    pub fn in_right(&self, vertex: VertexIndex) -> bool {
        self.right.contains(vertex.get())
    }

    /// Returns whether `vertex` is in the separator.
    #[inline]
    pub fn in_separator(&self, vertex: VertexIndex) -> bool {
        self.separator.contains(vertex.get())
    }

    /// Places `vertex` into the left shore.
    ///
    /// # Panics (debug)
    ///
    /// Debug-asserts that `vertex` is unassigned.
    #[inline]
    pub fn insert_left(&mut self, vertex: VertexIndex) {
        debug_assert!(!self.is_assigned(vertex), "vertex already placed");
        self.left.insert(vertex.get());
        self.left_len += 1;
    }

    /// Places `vertex` into the right shore.
    #[inline]
    pub fn insert_right(&mut self, vertex: VertexIndex) {
        debug_assert!(!self.is_assigned(vertex), "vertex already placed");
        self.right.insert(vertex.get());
        self.right_len += 1;
    }

    /// Places `vertex` into the separator.
    #[inline]
    pub fn insert_separator(&mut self, vertex: VertexIndex) {
        debug_assert!(!self.is_assigned(vertex), "vertex already placed");
        self.separator.insert(vertex.get());
        self.separator_len += 1;
    }

    /// Returns whether `vertex` has been placed into any of the three sets.
    #[inline]
    pub fn is_assigned(&self, vertex: VertexIndex) -> bool {
        let i = vertex.get();
        self.left.contains(i) || self.right.contains(i) || self.separator.contains(i)
    }

    /// Iterates over the left shore in index order.
    #[inline]
    pub fn left_vertices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.left.ones().map(VertexIndex::new)
    }

    /// Iterates over the right shore in index order.
    #[inline]
    pub fn right_vertices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.right.ones().map(VertexIndex::new)
    }

    /// Iterates over the separator in index order.
    #[inline]
    pub fn separator_vertices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.separator.ones().map(VertexIndex::new)
    }

    /// Checks the full separator contract against `graph`:
    ///
    /// - the three sets are pairwise disjoint and cover every vertex,
    /// - no edge joins the left and right shores,
    /// - both shores are nonempty,
    /// - neither shore exceeds `max_shore_size`.
    pub fn is_valid(&self, graph: &Graph, max_shore_size: usize) -> bool {
        let n = graph.num_vertices();
        if self.num_vertices() != n {
            return false;
        }
        if self.left_len == 0 || self.right_len == 0 {
            return false;
        }
        if self.left_len > max_shore_size || self.right_len > max_shore_size {
            return false;
        }
        for v in 0..n {
            let memberships = self.left.contains(v) as usize
                + self.right.contains(v) as usize
                + self.separator.contains(v) as usize;
            if memberships != 1 {
                return false;
            }
        }
        for v in self.left_vertices() {
            for &u in graph.neighbors(v) {
                if self.right.contains(u.get()) {
                    return false;
                }
            }
        }
        true
    }
}

impl std::fmt::Display for VertexSeparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VertexSeparator(left: {}, right: {}, separator: {})",
            self.left_len, self.right_len, self.separator_len
        )
    }
}
