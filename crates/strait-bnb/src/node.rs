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

//! # Search Nodes and Branches
//!
//! A [`SearchNode`] is an expanded, immutable point of the search tree:
//! the decision that created it, the propagated domains and partition,
//! and an atomic `failed` flag siblings consult before doing work. A
//! [`Branch`] is a pending decision hanging off a node; branches are the
//! unit of scheduling, and exploring one transfers its ownership, so no
//! decision is ever explored twice even under work stealing.

use crate::domain::{DomainStore, Shore};
use crate::partition::PartitionState;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use strait_graph::VertexIndex;

/// An expanded node of the search tree. Immutable after construction
/// except for the `failed` flag.
#[derive(Debug)]
pub struct SearchNode {
    /// The decision that created this node; `None` for the root.
    decision: Option<(VertexIndex, Shore)>,
    /// Per-vertex domains after propagation, shared copy-on-write with
    /// the parent.
    domains: DomainStore,
    /// Committed placements after propagation.
    partition: PartitionState,
    /// Whether propagation shrank any other vertex's domain at this node.
    /// A child that fails on an empty domain despite no shrink here
    /// proves this whole node refuted.
    propagator: bool,
    /// Set when a child proves this node cannot lead to a solution.
    /// Siblings check the flag before exploring.
    failed: AtomicBool,
    /// Parent link keeping the ancestor chain alive for fault marking.
    parent: Option<Arc<SearchNode>>,
}

impl SearchNode {
    /// Creates the root node from the initial domains and empty partition.
    pub fn root(domains: DomainStore, partition: PartitionState) -> Self {
        SearchNode {
            decision: None,
            domains,
            partition,
            propagator: false,
            failed: AtomicBool::new(false),
            parent: None,
        }
    }

    /// Creates a child node from its parent and the propagated state of
    /// the decision `(vertex, shore)`.
    pub fn child(
        parent: &Arc<SearchNode>,
        decision: (VertexIndex, Shore),
        domains: DomainStore,
        partition: PartitionState,
        propagator: bool,
    ) -> Self {
        SearchNode {
            decision: Some(decision),
            domains,
            partition,
            propagator,
            failed: AtomicBool::new(false),
            parent: Some(Arc::clone(parent)),
        }
    }

    /// The decision that created this node; `None` for the root.
    #[inline]
    pub fn decision(&self) -> Option<(VertexIndex, Shore)> {
        self.decision
    }

    /// The propagated domains of this node.
    #[inline]
    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    /// The committed placements of this node.
    #[inline]
    pub fn partition(&self) -> &PartitionState {
        &self.partition
    }

    /// Whether propagation at this node shrank any other vertex's domain.
    #[inline]
    pub fn is_propagator(&self) -> bool {
        self.propagator
    }

    /// Whether a child has proven this node refuted.
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.failed.load(Ordering::Relaxed)
    }

    /// Marks this node refuted. Racing markers are harmless; the flag
    /// only ever goes from `false` to `true`.
    #[inline]
    pub fn mark_failed(&self) {
        self.failed.store(true, Ordering::Relaxed);
    }

    /// The parent of this node, if any.
    #[inline]
    pub fn parent(&self) -> Option<&Arc<SearchNode>> {
        self.parent.as_ref()
    }
}

impl std::fmt::Display for SearchNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.decision {
            Some((vertex, shore)) => write!(
                f,
                "SearchNode({} -> {}, assigned: {})",
                vertex,
                shore,
                self.partition.num_assigned()
            ),
            None => write!(
                f,
                "SearchNode(root, assigned: {})",
                self.partition.num_assigned()
            ),
        }
    }
}

/// A pending decision scheduled for exploration: assign `value` to
/// `vertex` below `parent`. Whichever worker pops (or steals) a branch
/// owns it exclusively; branches are deliberately not `Clone`, so a
/// decision can never re-enter the frontier.
#[derive(Debug)]
pub struct Branch {
    pub parent: Arc<SearchNode>,
    pub vertex: VertexIndex,
    pub value: Shore,
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Branch({} -> {})", self.vertex, self.value)
    }
}
