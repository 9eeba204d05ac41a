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

//! # Vertex Connectivity
//!
//! Computes the vertex connectivity `κ(G)`: the minimum number of vertices
//! whose removal disconnects the graph (with `κ(K_n) = n − 1` by
//! convention). The search uses `κ` as a proven lower bound on the
//! separator size, which turns a matching incumbent into an optimality
//! certificate.
//!
//! ## Approach
//!
//! By Menger's theorem, for a non-complete graph `κ` equals the minimum
//! over non-adjacent pairs `(s, t)` of the number of internally
//! vertex-disjoint `s`–`t` paths. Each pair is evaluated by unit-capacity
//! max-flow on the split graph (every vertex becomes an `in`/`out` arc of
//! capacity one), with augmentation stopping as soon as the running
//! minimum cannot improve.

use crate::graph::Graph;
use crate::index::VertexIndex;
use fixedbitset::FixedBitSet;
use std::collections::VecDeque;

/// Returns the vertex connectivity `κ` of `graph`.
///
/// Conventions: graphs with fewer than two vertices and disconnected
/// graphs have connectivity 0; the complete graph `K_n` has `n − 1`.
pub fn vertex_connectivity(graph: &Graph) -> usize {
    let n = graph.num_vertices();
    if n < 2 {
        return 0;
    }
    if graph.is_complete() {
        return n - 1;
    }
    if !is_connected(graph) {
        return 0;
    }

    // κ never exceeds the minimum degree, which bounds the flow work below.
    let mut best = graph
        .vertices()
        .map(|v| graph.degree(v))
        .min()
        .unwrap_or(0);

    for s in 0..n {
        for t in (s + 1)..n {
            let (s, t) = (VertexIndex::new(s), VertexIndex::new(t));
            if graph.has_edge(s, t) {
                continue;
            }
            let paths = max_disjoint_paths(graph, s, t, best);
            best = best.min(paths);
            if best <= 1 {
                // Connected and non-complete: 1 is the floor.
                return best;
            }
        }
    }
    best
}

/// Returns whether `graph` is connected (vacuously true below two vertices).
pub fn is_connected(graph: &Graph) -> bool {
    let n = graph.num_vertices();
    if n < 2 {
        return true;
    }
    let mut visited = FixedBitSet::with_capacity(n);
    let mut queue = VecDeque::new();
    visited.insert(0);
    queue.push_back(VertexIndex::new(0));
    let mut seen = 1;
    while let Some(v) = queue.pop_front() {
        for &u in graph.neighbors(v) {
            if !visited.contains(u.get()) {
                visited.insert(u.get());
                seen += 1;
                queue.push_back(u);
            }
        }
    }
    seen == n
}

/// A directed arc of the residual flow network. The reverse arc of the
/// arc stored at index `i` lives at index `i ^ 1`.
#[derive(Debug, Clone, Copy)]
struct ResidualArc {
    to: usize,
    capacity: u32,
}

/// Maximum number of internally vertex-disjoint paths between the
/// non-adjacent vertices `s` and `t`, computed by repeated augmentation on
/// the split graph. Stops early once `stop_at` paths are found, since the
/// caller only tracks a running minimum.
fn max_disjoint_paths(graph: &Graph, s: VertexIndex, t: VertexIndex, stop_at: usize) -> usize {
    debug_assert!(!graph.has_edge(s, t));
    let n = graph.num_vertices();

    // Split every vertex v into v_in (2v) and v_out (2v + 1). The internal
    // arc v_in -> v_out has capacity one; endpoint internals are unbounded
    // because the flow enters at s_out and leaves at t_in.
    let node_in = |v: VertexIndex| 2 * v.get();
    let node_out = |v: VertexIndex| 2 * v.get() + 1;
    let unbounded = n as u32;

    let mut arcs: Vec<ResidualArc> = Vec::with_capacity(2 * (n + 4 * graph.num_edges()));
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); 2 * n];
    let mut add_arc = |arcs: &mut Vec<ResidualArc>,
                       adjacency: &mut Vec<Vec<usize>>,
                       from: usize,
                       to: usize,
                       capacity: u32| {
        adjacency[from].push(arcs.len());
        arcs.push(ResidualArc { to, capacity });
        adjacency[to].push(arcs.len());
        arcs.push(ResidualArc {
            to: from,
            capacity: 0,
        });
    };

    for v in graph.vertices() {
        let capacity = if v == s || v == t { unbounded } else { 1 };
        add_arc(&mut arcs, &mut adjacency, node_in(v), node_out(v), capacity);
    }
    for v in graph.vertices() {
        for &u in graph.neighbors(v) {
            if v < u {
                add_arc(&mut arcs, &mut adjacency, node_out(v), node_in(u), 1);
                add_arc(&mut arcs, &mut adjacency, node_out(u), node_in(v), 1);
            }
        }
    }

    let source = node_out(s);
    let sink = node_in(t);
    let mut flow = 0;
    let mut parent_arc: Vec<Option<usize>> = vec![None; 2 * n];
    let mut visited = FixedBitSet::with_capacity(2 * n);
    while flow < stop_at {
        // BFS for an augmenting path over arcs with residual capacity.
        parent_arc.iter_mut().for_each(|p| *p = None);
        visited.clear();
        visited.insert(source);
        let mut queue = VecDeque::new();
        queue.push_back(source);
        'bfs: while let Some(node) = queue.pop_front() {
            for &arc_index in &adjacency[node] {
                let arc = arcs[arc_index];
                if arc.capacity > 0 && !visited.contains(arc.to) {
                    visited.insert(arc.to);
                    parent_arc[arc.to] = Some(arc_index);
                    if arc.to == sink {
                        break 'bfs;
                    }
                    queue.push_back(arc.to);
                }
            }
        }
        if parent_arc[sink].is_none() {
            break;
        }

        // All arcs carry unit flow, so each augmentation adds exactly one path.
        let mut node = sink;
        while node != source {
            let arc_index = match parent_arc[node] {
                Some(index) => index,
                None => break,
            };
            arcs[arc_index].capacity -= 1;
            arcs[arc_index ^ 1].capacity += 1;
            node = arcs[arc_index ^ 1].to;
        }
        flow += 1;
    }
    flow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn vi(i: usize) -> VertexIndex {
        VertexIndex::new(i)
    }

    fn path(n: usize) -> Graph {
        let mut builder = GraphBuilder::new(n);
        for i in 0..n.saturating_sub(1) {
            builder.add_edge(vi(i), vi(i + 1));
        }
        builder.build()
    }

    fn cycle(n: usize) -> Graph {
        let mut builder = GraphBuilder::new(n);
        for i in 0..n {
            builder.add_edge(vi(i), vi((i + 1) % n));
        }
        builder.build()
    }

    fn complete(n: usize) -> Graph {
        let mut builder = GraphBuilder::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                builder.add_edge(vi(i), vi(j));
            }
        }
        builder.build()
    }

    #[test]
    fn test_trivial_and_disconnected_graphs() {
        assert_eq!(vertex_connectivity(&GraphBuilder::new(0).build()), 0);
        assert_eq!(vertex_connectivity(&GraphBuilder::new(1).build()), 0);
        // Two isolated vertices.
        assert_eq!(vertex_connectivity(&GraphBuilder::new(2).build()), 0);
        // A path plus an isolated vertex.
        let mut builder = GraphBuilder::new(4);
        builder.add_edge(vi(0), vi(1)).add_edge(vi(1), vi(2));
        assert_eq!(vertex_connectivity(&builder.build()), 0);
    }

    #[test]
    fn test_complete_graphs() {
        assert_eq!(vertex_connectivity(&complete(2)), 1);
        assert_eq!(vertex_connectivity(&complete(4)), 3);
        assert_eq!(vertex_connectivity(&complete(5)), 4);
    }

    #[test]
    fn test_paths_have_connectivity_one() {
        assert_eq!(vertex_connectivity(&path(2)), 1);
        assert_eq!(vertex_connectivity(&path(7)), 1);
    }

    #[test]
    fn test_cycles_have_connectivity_two() {
        assert_eq!(vertex_connectivity(&cycle(4)), 2);
        assert_eq!(vertex_connectivity(&cycle(7)), 2);
    }

    #[test]
    fn test_cut_vertex_graph() {
        // Two triangles joined at a single shared vertex (vertex 2).
        let mut builder = GraphBuilder::new(5);
        builder
            .add_edge(vi(0), vi(1))
            .add_edge(vi(1), vi(2))
            .add_edge(vi(0), vi(2))
            .add_edge(vi(2), vi(3))
            .add_edge(vi(3), vi(4))
            .add_edge(vi(2), vi(4));
        assert_eq!(vertex_connectivity(&builder.build()), 1);
    }

    #[test]
    fn test_complete_bipartite_k23() {
        // κ(K_{2,3}) = 2: removing the two-vertex side disconnects it.
        let mut builder = GraphBuilder::new(5);
        for a in 0..2 {
            for b in 2..5 {
                builder.add_edge(vi(a), vi(b));
            }
        }
        assert_eq!(vertex_connectivity(&builder.build()), 2);
    }

    #[test]
    fn test_is_connected() {
        assert!(is_connected(&path(5)));
        assert!(is_connected(&GraphBuilder::new(1).build()));
        assert!(!is_connected(&GraphBuilder::new(3).build()));
    }
}
