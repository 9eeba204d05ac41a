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

//! # Branching
//!
//! Most-constrained-first branch selection: among unassigned vertices,
//! pick one with the fewest remaining candidate placements, breaking ties
//! towards larger degree (a high-degree vertex placed early propagates
//! further). Values are tried separator first, then right, then left, so
//! depth-first descent reaches cheap separators before committing shores.
//!
//! The root additionally breaks the left/right mirror symmetry: every
//! partition has a mirrored twin with the shores swapped, so one fixed
//! vertex may simply never go right.

use crate::domain::{DomainStore, Shore};
use crate::partition::PartitionState;
use smallvec::SmallVec;
use strait_graph::{Graph, VertexIndex};

/// Selects the next vertex to branch on: minimum domain cardinality,
/// ties broken by larger degree, then by smaller index. Returns `None`
/// when every vertex is assigned.
pub fn select_branch_vertex(
    graph: &Graph,
    domains: &DomainStore,
    partition: &PartitionState,
) -> Option<VertexIndex> {
    let mut best: Option<(usize, usize, VertexIndex)> = None;
    for vertex in graph.vertices() {
        if partition.is_assigned(vertex) {
            continue;
        }
        let cardinality = domains.values(vertex).len();
        debug_assert!(cardinality > 0, "unassigned vertex with empty domain");
        let degree = graph.degree(vertex);
        let better = match best {
            None => true,
            Some((best_cardinality, best_degree, _)) => {
                cardinality < best_cardinality
                    || (cardinality == best_cardinality && degree > best_degree)
            }
        };
        if better {
            best = Some((cardinality, degree, vertex));
        }
    }
    best.map(|(_, _, vertex)| vertex)
}

/// The candidate values of `vertex` in branching preference order.
pub fn branch_values(domains: &DomainStore, vertex: VertexIndex) -> SmallVec<[Shore; 3]> {
    domains.values(vertex).iter().collect()
}

/// Breaks the left/right mirror symmetry at the root: a minimum-degree
/// vertex loses the right shore, halving the tree without losing any
/// separator size.
pub fn break_root_symmetry(graph: &Graph, domains: &mut DomainStore) {
    if let Some(vertex) = graph.min_degree_vertex() {
        domains.remove(vertex, Shore::Right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShoreSet;
    use strait_graph::GraphBuilder;

    fn vi(i: usize) -> VertexIndex {
        VertexIndex::new(i)
    }

    /// Star centered on 0 with leaves 1..4.
    fn star() -> Graph {
        let mut builder = GraphBuilder::new(5);
        for i in 1..5 {
            builder.add_edge(vi(0), vi(i));
        }
        builder.build()
    }

    #[test]
    fn test_smallest_domain_wins() {
        let graph = star();
        let mut domains = DomainStore::root(5);
        let partition = PartitionState::new(5, 3);
        domains.remove(vi(3), Shore::Left);

        assert_eq!(
            select_branch_vertex(&graph, &domains, &partition),
            Some(vi(3))
        );
    }

    #[test]
    fn test_degree_breaks_ties() {
        let graph = star();
        let domains = DomainStore::root(5);
        let partition = PartitionState::new(5, 3);
        // All domains are full; the hub has the largest degree.
        assert_eq!(
            select_branch_vertex(&graph, &domains, &partition),
            Some(vi(0))
        );
    }

    #[test]
    fn test_assigned_vertices_are_skipped() {
        let graph = star();
        let mut domains = DomainStore::root(5);
        let mut partition = PartitionState::new(5, 3);
        domains.fix(vi(0), Shore::Separator);
        partition.try_place(vi(0), Shore::Separator, 5).unwrap();

        let selected = select_branch_vertex(&graph, &domains, &partition);
        assert!(selected.is_some());
        assert_ne!(selected, Some(vi(0)));
    }

    #[test]
    fn test_none_when_all_assigned() {
        let mut builder = GraphBuilder::new(2);
        builder.add_edge(vi(0), vi(1));
        let graph = builder.build();
        let mut domains = DomainStore::root(2);
        let mut partition = PartitionState::new(2, 2);
        for (i, shore) in [(0, Shore::Left), (1, Shore::Separator)] {
            domains.fix(vi(i), shore);
            partition.try_place(vi(i), shore, 3).unwrap();
        }
        assert_eq!(select_branch_vertex(&graph, &domains, &partition), None);
    }

    #[test]
    fn test_branch_values_follow_preference_order() {
        let mut domains = DomainStore::root(2);
        assert_eq!(
            branch_values(&domains, vi(0)).as_slice(),
            &[Shore::Separator, Shore::Right, Shore::Left]
        );
        domains.remove(vi(0), Shore::Separator);
        assert_eq!(
            branch_values(&domains, vi(0)).as_slice(),
            &[Shore::Right, Shore::Left]
        );
    }

    #[test]
    fn test_root_symmetry_breaking_removes_right_from_min_degree() {
        let graph = star();
        let mut domains = DomainStore::root(5);
        break_root_symmetry(&graph, &mut domains);
        // Leaf 1 is the first minimum-degree vertex.
        assert_eq!(domains.values(vi(1)), {
            let mut set = ShoreSet::full();
            set.remove(Shore::Right);
            set
        });
        assert_eq!(domains.values(vi(0)), ShoreSet::full());
    }
}
