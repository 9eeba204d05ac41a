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

//! # Search Worker
//!
//! The depth-first loop each worker thread runs: acquire a branch from
//! the frontier, derive the child state from the parent node, propagate,
//! and release the resulting child branches back. Pruning happens twice
//! per branch: against the sibling failure flag and against a fresh read
//! of the shared upper bound, both before the expensive clone.
//!
//! When a refutation proves the whole parent node dead (an empty domain
//! under a parent whose own propagation shrank nothing), the worker marks
//! the parent so siblings in other deques skip it. Improving solutions
//! are installed into the shared bound, and a worker that closes the
//! optimality gap aborts the frontier for everyone.

use crate::branching::{branch_values, select_branch_vertex};
use crate::frontier::{Acquired, Frontier};
use crate::node::{Branch, SearchNode};
use crate::propagate::{FailureKind, PropagationStatus, Propagator};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use strait_graph::Graph;
use strait_search::monitor::{SearchCommand, SearchMonitor};
use strait_search::{SearchStatistics, SharedBound};

/// One worker of an engine run. Consumed by [`Worker::run`].
#[derive(Debug)]
pub struct Worker<'a> {
    id: usize,
    graph: &'a Graph,
    frontier: &'a Frontier,
    bound: &'a SharedBound,
    stop: &'a AtomicBool,
    propagator: Propagator,
    statistics: SearchStatistics,
}

impl<'a> Worker<'a> {
    pub fn new(
        id: usize,
        graph: &'a Graph,
        frontier: &'a Frontier,
        bound: &'a SharedBound,
        stop: &'a AtomicBool,
    ) -> Self {
        Worker {
            id,
            graph,
            frontier,
            bound,
            stop,
            propagator: Propagator::new(),
            statistics: SearchStatistics::new(),
        }
    }

    /// Runs the worker until the frontier is exhausted or the monitor
    /// terminates the search. Returns the worker's private statistics and
    /// the termination reason if this worker initiated the abort.
    pub fn run(mut self, monitor: &mut dyn SearchMonitor) -> (SearchStatistics, Option<String>) {
        let mut abort_reason = None;
        loop {
            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                self.frontier.abort();
                abort_reason = Some(reason);
                break;
            }
            monitor.on_step();
            let branch = match self.frontier.acquire(self.id) {
                Acquired::Owned(branch) => branch,
                Acquired::Stolen(branch) => {
                    self.statistics.on_steal();
                    branch
                }
                Acquired::Exhausted => break,
            };
            let children = self.explore(branch, monitor);
            self.frontier.release(self.id, children);
        }
        (self.statistics, abort_reason)
    }

    /// Explores one branch and returns the child branches it spawns.
    fn explore(&mut self, branch: Branch, monitor: &mut dyn SearchMonitor) -> Vec<Branch> {
        // A sibling may have refuted the parent after this branch was
        // queued.
        if branch.parent.is_failed() {
            self.statistics.on_failure();
            return Vec::new();
        }
        let upper_bound = self.bound.upper_bound();
        if branch.parent.partition().separator_len() >= upper_bound {
            self.statistics.on_bound_pruning();
            return Vec::new();
        }

        let mut domains = branch.parent.domains().clone();
        let mut partition = branch.parent.partition().clone();
        let status = self.propagator.propagate(
            self.graph,
            &mut domains,
            &mut partition,
            (branch.vertex, branch.value),
            upper_bound,
        );
        self.statistics.on_node_explored();
        self.statistics
            .on_depth_reached(partition.num_assigned() as u64);

        match status {
            PropagationStatus::Failure(kind) => {
                self.statistics.on_failure();
                // An empty domain under a parent whose propagation shrank
                // nothing means the parent state itself is contradictory;
                // bound and capacity refutations depend on the incumbent
                // and must not condemn siblings.
                if kind == FailureKind::EmptyDomain && !self.propagator.shrank_domains() {
                    branch.parent.mark_failed();
                }
                Vec::new()
            }
            PropagationStatus::PotentialSolution => {
                let max_shore_size = partition.max_shore_size();
                let separator = partition.into_separator();
                debug_assert!(separator.is_valid(self.graph, max_shore_size));
                if self.bound.try_install(&separator) {
                    self.statistics.on_solution_found();
                    monitor.on_solution_found(&separator);
                    if self.bound.optimality_proven() {
                        self.stop.store(true, Ordering::Relaxed);
                        self.frontier.abort();
                    }
                }
                Vec::new()
            }
            PropagationStatus::Unknown => {
                let child = Arc::new(SearchNode::child(
                    &branch.parent,
                    (branch.vertex, branch.value),
                    domains,
                    partition,
                    self.propagator.shrank_domains(),
                ));
                let vertex = match select_branch_vertex(self.graph, child.domains(), child.partition())
                {
                    Some(vertex) => vertex,
                    // Unreachable: an Unknown verdict leaves vertices
                    // unassigned.
                    None => return Vec::new(),
                };
                // Reversed so the most preferred value sits at the back of
                // the deque, where the owner pops first.
                let children: Vec<Branch> = branch_values(child.domains(), vertex)
                    .iter()
                    .rev()
                    .map(|&value| Branch {
                        parent: Arc::clone(&child),
                        vertex,
                        value,
                    })
                    .collect();
                self.statistics.on_branches_generated(children.len() as u64);
                children
            }
        }
    }
}
