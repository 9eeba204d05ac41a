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

//! # Vertex Index
//!
//! A zero-cost newtype over `usize` identifying a vertex of a [`Graph`].
//! Using a dedicated index type instead of a bare `usize` prevents mixing
//! vertex identifiers with ordinary counters or array offsets at compile
//! time, at no runtime cost (`#[repr(transparent)]`).
//!
//! [`Graph`]: crate::graph::Graph

/// Identifies a vertex of a graph by position.
///
/// Vertices of a graph with `n` vertices are indexed `0..n`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexIndex(usize);

impl VertexIndex {
    /// Creates a new vertex index from a raw position.
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexIndex(index)
    }

    /// Returns the raw position of this vertex.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexIndex {
    #[inline]
    fn from(index: usize) -> Self {
        VertexIndex::new(index)
    }
}

impl From<VertexIndex> for usize {
    #[inline]
    fn from(index: VertexIndex) -> Self {
        index.get()
    }
}

impl std::fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VertexIndex({})", self.0)
    }
}
