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

//! # Constraint Propagation
//!
//! The fixed-point engine run on every explored branch. Seeded with one
//! decision, it drains a worklist of committed placements and applies the
//! separator rules until nothing changes or the node is refuted:
//!
//! - A vertex placed on one shore excludes the opposite shore from all of
//!   its neighbors (separator placements impose nothing).
//! - A domain collapsing to a singleton commits that placement and joins
//!   the worklist; a domain emptying refutes the node.
//! - A shore reaching capacity excludes that shore from every unassigned
//!   vertex; the separator reaching one below the incumbent bound
//!   excludes the separator likewise. Both cascade through the same
//!   singleton machinery.
//! - After the drain, a node where one shore can no longer receive any
//!   vertex is refuted: valid partitions keep both shores nonempty.
//!
//! The engine also reports whether it shrank any domain other than the
//! decision's own. A child refuted by an *empty domain* under a parent
//! that shrank nothing proves the parent itself refuted; bound and
//! capacity refutations never do, because a concurrently tightened
//! incumbent can refute one sibling without invalidating the others.

use crate::domain::{DomainRemoval, DomainStore, Shore};
use crate::partition::{PartitionState, PlacementError};
use smallvec::SmallVec;
use strait_graph::{Graph, VertexIndex};

/// The verdict of one propagation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropagationStatus {
    /// The node survived with unassigned vertices left; branch further.
    Unknown,
    /// The node is refuted; abandon it.
    Failure(FailureKind),
    /// Every vertex is assigned and both shores are nonempty. The
    /// partition is a solution candidate pending full validation.
    PotentialSolution,
}

/// Why propagation refuted the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Some vertex ran out of candidate placements.
    EmptyDomain,
    /// A forced placement hit a full shore.
    ShoreFull,
    /// A forced placement would grow the separator to the incumbent size.
    SeparatorBound,
    /// One shore can no longer receive any vertex.
    ShoreStarved,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::EmptyDomain => write!(f, "empty domain"),
            FailureKind::ShoreFull => write!(f, "shore full"),
            FailureKind::SeparatorBound => write!(f, "separator bound"),
            FailureKind::ShoreStarved => write!(f, "shore starved"),
        }
    }
}

/// A bulk exclusion queued by a resource trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BulkRule {
    /// A shore reached capacity: remove it from every unassigned domain.
    ShoreSaturated(Shore),
    /// The separator reached one below the incumbent: remove it from
    /// every unassigned domain.
    SeparatorTight,
}

/// Commits a placement and queues any bulk rule it triggers.
fn commit(
    partition: &mut PartitionState,
    vertex: VertexIndex,
    shore: Shore,
    upper_bound: usize,
    pending: &mut SmallVec<[BulkRule; 4]>,
) -> Result<(), FailureKind> {
    partition
        .try_place(vertex, shore, upper_bound)
        .map_err(|error| match error {
            PlacementError::ShoreFull(_) => FailureKind::ShoreFull,
            PlacementError::SeparatorBound => FailureKind::SeparatorBound,
        })?;
    if partition.is_shore_saturated(shore) {
        pending.push(BulkRule::ShoreSaturated(shore));
    }
    if shore == Shore::Separator && partition.separator_len() + 1 == upper_bound {
        pending.push(BulkRule::SeparatorTight);
    }
    Ok(())
}

/// The reusable fixed-point engine. One instance lives per worker; the
/// worklist allocation is recycled across propagation runs.
#[derive(Debug, Default)]
pub struct Propagator {
    worklist: SmallVec<[(VertexIndex, Shore); 32]>,
    shrank: bool,
}

impl Propagator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the most recent [`propagate`] call shrank any domain other
    /// than collapsing the decision's own.
    ///
    /// [`propagate`]: Propagator::propagate
    #[inline]
    pub fn shrank_domains(&self) -> bool {
        self.shrank
    }

    /// Applies `decision` to the node state and runs propagation to a
    /// fixed point. `upper_bound` is the incumbent separator size sampled
    /// once by the caller; the final separator must stay strictly below
    /// it.
    pub fn propagate(
        &mut self,
        graph: &Graph,
        domains: &mut DomainStore,
        partition: &mut PartitionState,
        decision: (VertexIndex, Shore),
        upper_bound: usize,
    ) -> PropagationStatus {
        self.worklist.clear();
        self.shrank = false;
        let mut pending: SmallVec<[BulkRule; 4]> = SmallVec::new();

        // A partial separator at or above the incumbent can never improve it.
        if partition.separator_len() >= upper_bound {
            return PropagationStatus::Failure(FailureKind::SeparatorBound);
        }
        // The incumbent may have tightened since the parent propagated;
        // re-arm the bulk rules that depend on it or on inherited state.
        if partition.separator_len() + 1 == upper_bound {
            pending.push(BulkRule::SeparatorTight);
        }
        for shore in [Shore::Left, Shore::Right] {
            if partition.is_shore_saturated(shore) {
                pending.push(BulkRule::ShoreSaturated(shore));
            }
        }

        let (vertex, shore) = decision;
        debug_assert!(!partition.is_assigned(vertex), "decision vertex placed");
        debug_assert!(
            domains.values(vertex).contains(shore),
            "decision value already removed"
        );
        domains.fix(vertex, shore);
        if let Err(kind) = commit(partition, vertex, shore, upper_bound, &mut pending) {
            return PropagationStatus::Failure(kind);
        }
        self.worklist.push((vertex, shore));

        loop {
            if let Some((placed, placement)) = self.worklist.pop() {
                let excluded = match placement.opposite() {
                    Some(excluded) => excluded,
                    None => continue,
                };
                for &neighbor in graph.neighbors(placed) {
                    if partition.is_assigned(neighbor) {
                        debug_assert!(
                            partition.assignment(neighbor) != Some(excluded),
                            "committed cross edge"
                        );
                        continue;
                    }
                    match domains.remove(neighbor, excluded) {
                        DomainRemoval::Unchanged => {}
                        DomainRemoval::Shrunk => self.shrank = true,
                        DomainRemoval::Singleton(forced) => {
                            self.shrank = true;
                            if let Err(kind) =
                                commit(partition, neighbor, forced, upper_bound, &mut pending)
                            {
                                return PropagationStatus::Failure(kind);
                            }
                            self.worklist.push((neighbor, forced));
                        }
                        DomainRemoval::Emptied => {
                            return PropagationStatus::Failure(FailureKind::EmptyDomain);
                        }
                    }
                }
            } else if let Some(rule) = pending.pop() {
                if let Err(kind) =
                    self.apply_bulk(domains, partition, rule, upper_bound, &mut pending)
                {
                    return PropagationStatus::Failure(kind);
                }
            } else {
                break;
            }
        }

        self.feasibility_verdict(domains, partition)
    }

    /// Removes the excluded value of a triggered bulk rule from every
    /// unassigned domain, feeding forced placements back into the
    /// worklist.
    fn apply_bulk(
        &mut self,
        domains: &mut DomainStore,
        partition: &mut PartitionState,
        rule: BulkRule,
        upper_bound: usize,
        pending: &mut SmallVec<[BulkRule; 4]>,
    ) -> Result<(), FailureKind> {
        let excluded = match rule {
            BulkRule::ShoreSaturated(shore) => shore,
            BulkRule::SeparatorTight => Shore::Separator,
        };
        for index in 0..domains.len() {
            let vertex = VertexIndex::new(index);
            if partition.is_assigned(vertex) {
                continue;
            }
            match domains.remove(vertex, excluded) {
                DomainRemoval::Unchanged => {}
                DomainRemoval::Shrunk => self.shrank = true,
                DomainRemoval::Singleton(forced) => {
                    self.shrank = true;
                    commit(partition, vertex, forced, upper_bound, pending)?;
                    self.worklist.push((vertex, forced));
                }
                DomainRemoval::Emptied => return Err(FailureKind::EmptyDomain),
            }
        }
        Ok(())
    }

    /// Post-drain verdict: a node where one shore can no longer receive
    /// any vertex is refuted, a full assignment is a solution candidate,
    /// anything else branches further.
    fn feasibility_verdict(
        &self,
        domains: &DomainStore,
        partition: &PartitionState,
    ) -> PropagationStatus {
        let mut open_left = partition.shore_len(Shore::Left);
        let mut open_right = partition.shore_len(Shore::Right);
        for index in 0..domains.len() {
            let vertex = VertexIndex::new(index);
            if partition.is_assigned(vertex) {
                continue;
            }
            let values = domains.values(vertex);
            if values.contains(Shore::Left) {
                open_left += 1;
            }
            if values.contains(Shore::Right) {
                open_right += 1;
            }
        }
        if open_left == 0 || open_right == 0 {
            return PropagationStatus::Failure(FailureKind::ShoreStarved);
        }
        if partition.num_assigned() == partition.num_vertices() {
            PropagationStatus::PotentialSolution
        } else {
            PropagationStatus::Unknown
        }
    }
}
