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

//! # Branch-and-Bound Engine
//!
//! The orchestrator of one search run: it builds the root node and its
//! branches, seeds the work-stealing frontier, and fans the search out
//! over scoped worker threads. Each worker carries its own monitor stack
//! (interrupt flag, optional time limit, optional progress log on worker
//! zero) and its own statistics; the engine merges everything when the
//! threads join and classifies the outcome.
//!
//! Outcome classification is a strict precedence:
//!
//! 1. The gap closed: the incumbent is optimal, even if workers were
//!    subsequently interrupted by the stop flag.
//! 2. A monitor aborted the search: the incumbent (if any) is merely
//!    feasible, and without one the instance stays undecided.
//! 3. The frontier was exhausted: the incumbent is optimal, and without
//!    one the instance is proven infeasible.

use crate::branching::{branch_values, break_root_symmetry, select_branch_vertex};
use crate::config::{InvalidInput, SearchConfig};
use crate::domain::DomainStore;
use crate::frontier::Frontier;
use crate::node::{Branch, SearchNode};
use crate::partition::PartitionState;
use crate::worker::Worker;
use std::sync::{Arc, atomic::AtomicBool};
use std::time::Instant;
use strait_graph::Graph;
use strait_search::monitor::{
    CompositeMonitor, InterruptMonitor, LogSearchMonitor, SearchMonitor, TimeLimitMonitor,
};
use strait_search::{SearchStatistics, SharedBound, SolverOutcome, SolverResult, TerminationReason};

/// The parallel branch-and-bound engine.
///
/// The caller owns the [`SharedBound`]: seeding it with a heuristic
/// incumbent and a proven lower bound happens before `solve`, and the
/// engine improves on whatever it is handed.
#[derive(Debug, Clone, Default)]
pub struct BnbEngine {
    config: SearchConfig,
}

impl BnbEngine {
    #[inline]
    pub fn new(config: SearchConfig) -> Self {
        BnbEngine { config }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the search on `graph` against the shared `bound` and
    /// classifies the result.
    pub fn solve(&self, graph: &Graph, bound: &SharedBound) -> Result<SolverOutcome, InvalidInput> {
        let start = Instant::now();
        let max_shore_size = self.config.resolved_max_shore_size(graph.num_vertices())?;

        // Two nonempty shores need at least two vertices.
        if graph.num_vertices() < 2 {
            let mut statistics = SearchStatistics::new();
            statistics.solve_duration = start.elapsed();
            return Ok(SolverOutcome::new(
                SolverResult::Infeasible,
                TerminationReason::InfeasibilityProven,
                statistics,
            ));
        }

        let num_threads = self.config.resolved_num_threads();
        let frontier = Frontier::new(num_threads, self.root_branches(graph, max_shore_size));
        let stop = AtomicBool::new(false);

        let mut statistics = SearchStatistics::new();
        let mut abort_reason: Option<String> = None;
        std::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(num_threads);
            for id in 0..num_threads {
                let frontier = &frontier;
                let stop = &stop;
                handles.push(scope.spawn(move || {
                    let mut monitor = self.worker_monitor(id, stop);
                    monitor.on_enter_search(graph);
                    let worker = Worker::new(id, graph, frontier, bound, stop);
                    let outcome = worker.run(&mut monitor);
                    monitor.on_exit_search();
                    outcome
                }));
            }
            for handle in handles {
                let (worker_statistics, worker_reason) =
                    handle.join().expect("worker thread panicked");
                statistics.merge(&worker_statistics);
                if abort_reason.is_none() {
                    abort_reason = worker_reason;
                }
            }
        });
        statistics.used_threads = num_threads;
        statistics.solve_duration = start.elapsed();

        let (result, reason) = Self::classify(bound, abort_reason);
        Ok(SolverOutcome::new(result, reason, statistics))
    }

    /// Builds the propagated root and its first generation of branches.
    fn root_branches(&self, graph: &Graph, max_shore_size: usize) -> Vec<Branch> {
        let n = graph.num_vertices();
        let mut domains = DomainStore::root(n);
        break_root_symmetry(graph, &mut domains);
        let partition = PartitionState::new(n, max_shore_size);
        let root = Arc::new(SearchNode::root(domains, partition));

        let vertex = match select_branch_vertex(graph, root.domains(), root.partition()) {
            Some(vertex) => vertex,
            // Unreachable for n >= 2: the root assigns nothing.
            None => return Vec::new(),
        };
        // Reversed so the most preferred value is popped first.
        branch_values(root.domains(), vertex)
            .iter()
            .rev()
            .map(|&value| Branch {
                parent: Arc::clone(&root),
                vertex,
                value,
            })
            .collect()
    }

    /// The monitor stack of one worker: interrupt flag always, time limit
    /// when configured, progress log on worker zero when requested.
    fn worker_monitor<'a>(&self, id: usize, stop: &'a AtomicBool) -> CompositeMonitor<'a> {
        let mut monitor = CompositeMonitor::new();
        monitor.add_monitor(InterruptMonitor::new(stop));
        if let Some(time_limit) = self.config.time_limit() {
            monitor.add_monitor(TimeLimitMonitor::new(time_limit));
        }
        if id == 0 && self.config.log_progress() {
            monitor.add_monitor(LogSearchMonitor::default());
        }
        monitor
    }

    /// Classifies the final state of the bound into a result and a
    /// termination reason.
    fn classify(
        bound: &SharedBound,
        abort_reason: Option<String>,
    ) -> (SolverResult, TerminationReason) {
        if bound.optimality_proven() {
            if let Some(best) = bound.snapshot() {
                return (
                    SolverResult::Optimal(best),
                    TerminationReason::OptimalityProven,
                );
            }
        }
        match abort_reason {
            Some(reason) => match bound.snapshot() {
                Some(best) => (
                    SolverResult::Feasible(best),
                    TerminationReason::Aborted(reason),
                ),
                None => (SolverResult::Unknown, TerminationReason::Aborted(reason)),
            },
            None => match bound.snapshot() {
                Some(best) => (
                    SolverResult::Optimal(best),
                    TerminationReason::OptimalityProven,
                ),
                None => (
                    SolverResult::Infeasible,
                    TerminationReason::InfeasibilityProven,
                ),
            },
        }
    }
}

impl std::fmt::Display for BnbEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BnbEngine({})", self.config)
    }
}
