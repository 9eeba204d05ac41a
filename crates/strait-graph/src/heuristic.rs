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

//! # Greedy Separator Heuristic
//!
//! A fast constructive heuristic that seeds the exact search with an
//! initial upper bound. It grows the left shore from a minimum-degree
//! vertex, always absorbing the boundary vertex whose absorption enlarges
//! the boundary the least. At every step the current boundary is a valid
//! separator candidate whenever both prospective shores are nonempty and
//! within capacity; the smallest candidate seen wins.
//!
//! The heuristic is allowed to fail (return `None`), e.g. on complete
//! graphs where no valid tri-partition exists at all. The exact search
//! then starts from the sentinel bound instead.

use crate::graph::Graph;
use crate::index::VertexIndex;
use crate::separator::VertexSeparator;
use fixedbitset::FixedBitSet;

/// Runs the growth heuristic and returns the best separator candidate
/// found, or `None` if no prefix of the growth yields a valid partition.
pub fn greedy_separator(graph: &Graph, max_shore_size: usize) -> Option<VertexSeparator> {
    let n = graph.num_vertices();
    if n < 2 || max_shore_size == 0 {
        return None;
    }
    let seed = graph.min_degree_vertex()?;

    let mut left = FixedBitSet::with_capacity(n);
    let mut boundary = FixedBitSet::with_capacity(n);
    let mut left_len = 1;
    let mut boundary_len = 0;
    left.insert(seed.get());
    for &u in graph.neighbors(seed) {
        boundary.insert(u.get());
        boundary_len += 1;
    }

    let mut best: Option<(usize, FixedBitSet, FixedBitSet)> = None;
    loop {
        let right_len = n - left_len - boundary_len;
        if right_len >= 1
            && right_len <= max_shore_size
            && left_len <= max_shore_size
            && best.as_ref().map_or(true, |(size, _, _)| boundary_len < *size)
        {
            best = Some((boundary_len, left.clone(), boundary.clone()));
        }
        if left_len >= max_shore_size {
            break;
        }
        let next = match pick_absorption(graph, &left, &boundary, boundary_len) {
            Some(v) => v,
            None => break,
        };

        // Absorb: the vertex joins the left shore; its frontier joins the boundary.
        if boundary.contains(next.get()) {
            boundary.set(next.get(), false);
            boundary_len -= 1;
        }
        left.insert(next.get());
        left_len += 1;
        for &u in graph.neighbors(next) {
            if !left.contains(u.get()) && !boundary.contains(u.get()) {
                boundary.insert(u.get());
                boundary_len += 1;
            }
        }
    }

    best.map(|(_, left, boundary)| {
        let mut right = FixedBitSet::with_capacity(n);
        for v in 0..n {
            if !left.contains(v) && !boundary.contains(v) {
                right.insert(v);
            }
        }
        VertexSeparator::from_parts(left, right, boundary)
    })
}

/// Chooses the next vertex to absorb into the left shore: the boundary
/// vertex bringing the fewest new vertices into the boundary, or, when the
/// boundary is empty (remainder disconnected from the shore), the first
/// unabsorbed vertex.
fn pick_absorption(
    graph: &Graph,
    left: &FixedBitSet,
    boundary: &FixedBitSet,
    boundary_len: usize,
) -> Option<VertexIndex> {
    if boundary_len == 0 {
        return (0..graph.num_vertices())
            .find(|&v| !left.contains(v))
            .map(VertexIndex::new);
    }
    let mut best: Option<(usize, VertexIndex)> = None;
    for v in boundary.ones().map(VertexIndex::new) {
        let growth = graph
            .neighbors(v)
            .iter()
            .filter(|u| !left.contains(u.get()) && !boundary.contains(u.get()))
            .count();
        if best.map_or(true, |(g, _)| growth < g) {
            best = Some((growth, v));
        }
    }
    best.map(|(_, v)| v)
}
