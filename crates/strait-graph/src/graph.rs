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

//! # Host Graph
//!
//! An undirected simple graph stored as sorted adjacency lists. This is the
//! immutable input the separator search partitions; it is built once through
//! [`GraphBuilder`] and then only read, so the representation favors cheap
//! neighbor iteration (a slice per vertex) and `O(log deg)` edge tests
//! (binary search in the sorted list).
//!
//! ## Highlights
//!
//! - `GraphBuilder` de-duplicates edges and drops self-loops, so `Graph`
//!   is always simple.
//! - `neighbors(v)` returns a sorted slice, `has_edge` binary-searches it.
//! - `min_degree_vertex` feeds both the greedy heuristic seed and the
//!   root symmetry breaking of the search.

use crate::index::VertexIndex;
use rustc_hash::FxHashSet;

/// An undirected simple graph over vertices `0..n`.
///
/// Construct via [`GraphBuilder`]; instances are immutable afterwards.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Sorted neighbor list per vertex.
    adjacency: Vec<Vec<VertexIndex>>,
    /// Number of distinct undirected edges.
    num_edges: usize,
}

impl Graph {
    /// Returns the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of distinct undirected edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns the sorted neighbors of `vertex`.
    ///
    /// # Panics (debug)
    ///
    /// Debug-asserts that `vertex` is in bounds.
    #[inline]
    pub fn neighbors(&self, vertex: VertexIndex) -> &[VertexIndex] {
        debug_assert!(vertex.get() < self.num_vertices(), "vertex out of bounds");
        &self.adjacency[vertex.get()]
    }

    /// Returns the degree of `vertex`.
    #[inline]
    pub fn degree(&self, vertex: VertexIndex) -> usize {
        self.neighbors(vertex).len()
    }

    /// Returns whether `a` and `b` are adjacent.
    #[inline]
    pub fn has_edge(&self, a: VertexIndex, b: VertexIndex) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Iterates over all vertices in index order.
    #[inline]
    pub fn vertices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        (0..self.num_vertices()).map(VertexIndex::new)
    }

    /// Returns a vertex of minimum degree, or `None` for the empty graph.
    /// Ties resolve to the smallest index.
    pub fn min_degree_vertex(&self) -> Option<VertexIndex> {
        self.vertices().min_by_key(|&v| self.degree(v))
    }

    /// Returns whether every pair of distinct vertices is adjacent.
    #[inline]
    pub fn is_complete(&self) -> bool {
        let n = self.num_vertices();
        self.num_edges == n * n.saturating_sub(1) / 2
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph(vertices: {}, edges: {})",
            self.num_vertices(),
            self.num_edges()
        )
    }
}

/// Incremental builder for [`Graph`].
///
/// Duplicate edges are stored once, self-loops are ignored. Endpoints are
/// validated eagerly so errors surface at the insertion site.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    num_vertices: usize,
    edges: FxHashSet<(usize, usize)>,
}

impl GraphBuilder {
    /// Creates a builder for a graph with `num_vertices` vertices and no edges.
    #[inline]
    pub fn new(num_vertices: usize) -> Self {
        GraphBuilder {
            num_vertices,
            edges: FxHashSet::default(),
        }
    }

    /// Adds the undirected edge `{a, b}`. Self-loops are ignored, duplicates
    /// are stored once.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is out of bounds.
    pub fn add_edge(&mut self, a: VertexIndex, b: VertexIndex) -> &mut Self {
        assert!(
            a.get() < self.num_vertices && b.get() < self.num_vertices,
            "edge endpoint out of bounds: ({}, {}) with {} vertices",
            a,
            b,
            self.num_vertices
        );
        if a != b {
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            self.edges.insert((lo.get(), hi.get()));
        }
        self
    }

    /// Returns the number of distinct edges added so far.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Finalizes the builder into an immutable [`Graph`] with sorted
    /// adjacency lists.
    pub fn build(self) -> Graph {
        let mut adjacency: Vec<Vec<VertexIndex>> = vec![Vec::new(); self.num_vertices];
        let num_edges = self.edges.len();
        for (a, b) in self.edges {
            adjacency[a].push(VertexIndex::new(b));
            adjacency[b].push(VertexIndex::new(a));
        }
        for list in &mut adjacency {
            list.sort_unstable();
        }
        Graph {
            adjacency,
            num_edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vi(i: usize) -> VertexIndex {
        VertexIndex::new(i)
    }

    /// 0 - 1 - 2 - 3, plus the chord 0 - 2.
    fn small_graph() -> Graph {
        let mut builder = GraphBuilder::new(4);
        builder
            .add_edge(vi(0), vi(1))
            .add_edge(vi(1), vi(2))
            .add_edge(vi(2), vi(3))
            .add_edge(vi(0), vi(2));
        builder.build()
    }

    #[test]
    fn test_counts_and_degrees() {
        let g = small_graph();
        assert_eq!(g.num_vertices(), 4);
        assert_eq!(g.num_edges(), 4);
        assert_eq!(g.degree(vi(0)), 2);
        assert_eq!(g.degree(vi(1)), 2);
        assert_eq!(g.degree(vi(2)), 3);
        assert_eq!(g.degree(vi(3)), 1);
    }

    #[test]
    fn test_neighbors_are_sorted() {
        let g = small_graph();
        assert_eq!(g.neighbors(vi(2)), &[vi(0), vi(1), vi(3)]);
    }

    #[test]
    fn test_has_edge_is_symmetric() {
        let g = small_graph();
        assert!(g.has_edge(vi(0), vi(2)));
        assert!(g.has_edge(vi(2), vi(0)));
        assert!(!g.has_edge(vi(0), vi(3)));
        assert!(!g.has_edge(vi(3), vi(0)));
    }

    #[test]
    fn test_duplicates_and_self_loops_are_dropped() {
        let mut builder = GraphBuilder::new(3);
        builder
            .add_edge(vi(0), vi(1))
            .add_edge(vi(1), vi(0))
            .add_edge(vi(0), vi(1))
            .add_edge(vi(2), vi(2));
        let g = builder.build();
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.degree(vi(2)), 0);
    }

    #[test]
    fn test_min_degree_vertex_prefers_smallest_index() {
        let g = small_graph();
        // Vertex 3 has degree 1, the unique minimum.
        assert_eq!(g.min_degree_vertex(), Some(vi(3)));

        let empty = GraphBuilder::new(0).build();
        assert_eq!(empty.min_degree_vertex(), None);

        // All degrees zero: ties resolve to vertex 0.
        let isolated = GraphBuilder::new(3).build();
        assert_eq!(isolated.min_degree_vertex(), Some(vi(0)));
    }

    #[test]
    fn test_is_complete() {
        let mut builder = GraphBuilder::new(3);
        builder
            .add_edge(vi(0), vi(1))
            .add_edge(vi(1), vi(2))
            .add_edge(vi(0), vi(2));
        assert!(builder.build().is_complete());

        assert!(!small_graph().is_complete());
        // Degenerate cases: the empty and single-vertex graphs are complete.
        assert!(GraphBuilder::new(0).build().is_complete());
        assert!(GraphBuilder::new(1).build().is_complete());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_add_edge_rejects_out_of_bounds_endpoint() {
        let mut builder = GraphBuilder::new(2);
        builder.add_edge(vi(0), vi(2));
    }

    #[test]
    fn test_display() {
        let g = small_graph();
        assert_eq!(format!("{}", g), "Graph(vertices: 4, edges: 4)");
    }
}
