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

//! # Partition State
//!
//! The committed placements of one search node: which vertices already sit
//! on the left shore, the right shore, or in the separator. Placement
//! enforces the two hard resource limits of the search, shore capacity and
//! the strict improvement requirement against the incumbent separator
//! size. Branching clones the state wholesale (three bitsets), which is
//! cheap at the graph sizes exact search can handle.

use crate::domain::Shore;
use fixedbitset::FixedBitSet;
use strait_graph::{VertexIndex, VertexSeparator};

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The target shore already holds `max_shore_size` vertices.
    ShoreFull(Shore),
    /// Growing the separator would make it at least as large as the
    /// incumbent, so the node cannot improve on it.
    SeparatorBound,
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::ShoreFull(shore) => write!(f, "shore {} is full", shore),
            PlacementError::SeparatorBound => {
                write!(f, "separator would reach the incumbent bound")
            }
        }
    }
}

/// The committed tri-partition of one search node.
#[derive(Debug, Clone)]
pub struct PartitionState {
    left: FixedBitSet,
    right: FixedBitSet,
    separator: FixedBitSet,
    left_len: usize,
    right_len: usize,
    separator_len: usize,
    max_shore_size: usize,
}

impl PartitionState {
    /// Creates an empty partition over `num_vertices` vertices with the
    /// given shore capacity.
    pub fn new(num_vertices: usize, max_shore_size: usize) -> Self {
        PartitionState {
            left: FixedBitSet::with_capacity(num_vertices),
            right: FixedBitSet::with_capacity(num_vertices),
            separator: FixedBitSet::with_capacity(num_vertices),
            left_len: 0,
            right_len: 0,
            separator_len: 0,
            max_shore_size,
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

    /// Returns the shore capacity.
    #[inline]
    pub fn max_shore_size(&self) -> usize {
        self.max_shore_size
    }

    /// Returns the current separator size.
    #[inline]
    pub fn separator_len(&self) -> usize {
        self.separator_len
    }

    /// Returns the number of vertices currently placed into `shore`.
    #[inline]
    pub fn shore_len(&self, shore: Shore) -> usize {
        match shore {
            Shore::Left => self.left_len,
            Shore::Right => self.right_len,
            Shore::Separator => self.separator_len,
        }
    }

    /// Returns the committed placement of `vertex`, if any.
    #[inline]
    pub fn assignment(&self, vertex: VertexIndex) -> Option<Shore> {
        let i = vertex.get();
        if self.left.contains(i) {
            Some(Shore::Left)
        } else if self.right.contains(i) {
            Some(Shore::Right)
        } else if self.separator.contains(i) {
            Some(Shore::Separator)
        } else {
            None
        }
    }

    /// Returns whether `vertex` has been placed.
    #[inline]
    pub fn is_assigned(&self, vertex: VertexIndex) -> bool {
        let i = vertex.get();
        self.left.contains(i) || self.right.contains(i) || self.separator.contains(i)
    }

    /// Returns whether `shore` is a shore at capacity. The separator has
    /// no capacity, only the bound check in [`try_place`].
    ///
    /// [`try_place`]: PartitionState::try_place
    #[inline]
    pub fn is_shore_saturated(&self, shore: Shore) -> bool {
        match shore {
            Shore::Left | Shore::Right => self.shore_len(shore) == self.max_shore_size,
            Shore::Separator => false,
        }
    }

    /// Commits `vertex` to `shore`, enforcing shore capacity and the
    /// strict improvement requirement: a partial separator that reaches
    /// `upper_bound` can no longer beat the incumbent.
    ///
    /// # Panics (debug)
    ///
    /// Debug-asserts that `vertex` is unassigned.
    pub fn try_place(
        &mut self,
        vertex: VertexIndex,
        shore: Shore,
        upper_bound: usize,
    ) -> Result<(), PlacementError> {
        debug_assert!(!self.is_assigned(vertex), "vertex already placed");
        match shore {
            Shore::Left => {
                if self.left_len == self.max_shore_size {
                    return Err(PlacementError::ShoreFull(Shore::Left));
                }
                self.left.insert(vertex.get());
                self.left_len += 1;
            }
            Shore::Right => {
                if self.right_len == self.max_shore_size {
                    return Err(PlacementError::ShoreFull(Shore::Right));
                }
                self.right.insert(vertex.get());
                self.right_len += 1;
            }
            Shore::Separator => {
                if self.separator_len + 1 >= upper_bound {
                    return Err(PlacementError::SeparatorBound);
                }
                self.separator.insert(vertex.get());
                self.separator_len += 1;
            }
        }
        Ok(())
    }

    /// Converts a fully assigned partition into the result value.
    ///
    /// # Panics (debug)
    ///
    /// Debug-asserts that every vertex has been placed.
    pub fn into_separator(self) -> VertexSeparator {
        debug_assert_eq!(self.num_assigned(), self.num_vertices());
        VertexSeparator::from_parts(self.left, self.right, self.separator)
    }
}

impl std::fmt::Display for PartitionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PartitionState(left: {}/{cap}, right: {}/{cap}, separator: {})",
            self.left_len,
            self.right_len,
            self.separator_len,
            cap = self.max_shore_size
        )
    }
}
