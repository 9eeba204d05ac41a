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

//! # Separator Solver Facade
//!
//! The complete solving pipeline behind one call:
//!
//! 1. Resolve the configuration against the instance and reject
//!    degenerate ones outright.
//! 2. Prove a lower bound: any separator of a connected graph is a
//!    vertex cut, so the vertex connectivity bounds the objective from
//!    below.
//! 3. Seed an incumbent with the greedy shore-growing heuristic. When
//!    the incumbent already meets the lower bound the search is skipped
//!    entirely.
//! 4. Otherwise hand the bracketed bound to the parallel
//!    branch-and-bound engine and return its classified outcome.

use std::time::Instant;
use strait_bnb::{BnbEngine, InvalidInput, SearchConfig};
use strait_graph::{Graph, greedy_separator, vertex_connectivity};
use strait_search::{
    SearchStatistics, SharedBound, SolverOutcome, SolverResult, TerminationReason,
};

/// The high-level vertex separator solver.
///
/// A thin configuration holder; all heavy state lives inside a single
/// [`solve`] call, so one solver may be reused across instances.
///
/// [`solve`]: SeparatorSolver::solve
#[derive(Debug, Clone, Default)]
pub struct SeparatorSolver {
    config: SearchConfig,
}

impl SeparatorSolver {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_config(config: SearchConfig) -> Self {
        SeparatorSolver { config }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Caps both shores at `max_shore_size` vertices.
    #[inline]
    pub fn with_max_shore_size(mut self, max_shore_size: usize) -> Self {
        self.config = self.config.with_max_shore_size(max_shore_size);
        self
    }

    /// Bounds the wall-clock search time.
    #[inline]
    pub fn with_time_limit(mut self, time_limit: std::time::Duration) -> Self {
        self.config = self.config.with_time_limit(time_limit);
        self
    }

    /// Fixes the number of worker threads.
    #[inline]
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.config = self.config.with_num_threads(num_threads);
        self
    }

    /// Enables periodic progress logging.
    #[inline]
    pub fn with_progress_log(mut self, log_progress: bool) -> Self {
        self.config = self.config.with_progress_log(log_progress);
        self
    }

    /// Solves the minimum vertex separator problem on `graph`.
    pub fn solve(&self, graph: &Graph) -> Result<SolverOutcome, InvalidInput> {
        let start = Instant::now();
        let max_shore_size = self.config.resolved_max_shore_size(graph.num_vertices())?;

        let n = graph.num_vertices();
        if n < 2 {
            let mut statistics = SearchStatistics::new();
            statistics.solve_duration = start.elapsed();
            return Ok(SolverOutcome::new(
                SolverResult::Infeasible,
                TerminationReason::InfeasibilityProven,
                statistics,
            ));
        }

        // The sentinel exceeds every genuine separator: valid partitions
        // keep both shores nonempty.
        let lower_bound = vertex_connectivity(graph);
        let bound = SharedBound::new(n, lower_bound);

        if let Some(incumbent) = greedy_separator(graph, max_shore_size) {
            debug_assert!(incumbent.is_valid(graph, max_shore_size));
            if bound.try_install(&incumbent) && bound.optimality_proven() {
                // The heuristic met the proven lower bound; no search
                // needed.
                let best = bound
                    .snapshot()
                    .expect("optimality was proven by an installed incumbent");
                let mut statistics = SearchStatistics::new();
                statistics.solutions_found = 1;
                statistics.solve_duration = start.elapsed();
                return Ok(SolverOutcome::new(
                    SolverResult::Optimal(best),
                    TerminationReason::OptimalityProven,
                    statistics,
                ));
            }
        }

        BnbEngine::new(self.config.clone()).solve(graph, &bound)
    }
}

impl std::fmt::Display for SeparatorSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SeparatorSolver({})", self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strait_graph::{GraphBuilder, VertexIndex};

    fn vi(i: usize) -> VertexIndex {
        VertexIndex::new(i)
    }

    fn path(n: usize) -> Graph {
        let mut builder = GraphBuilder::new(n);
        for i in 0..n - 1 {
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
    fn test_path_cut_at_one_vertex() {
        let graph = path(7);
        let outcome = SeparatorSolver::new()
            .with_num_threads(1)
            .solve(&graph)
            .unwrap();
        assert!(outcome.is_optimal());
        let best = outcome.separator().expect("optimal outcome");
        assert_eq!(best.separator_size(), 1);
        assert!(best.is_valid(&graph, 4));
    }

    #[test]
    fn test_heuristic_meeting_lower_bound_skips_search() {
        // Connectivity of a path is 1 and the greedy heuristic finds a
        // single cut vertex, so the engine never runs.
        let graph = path(7);
        let outcome = SeparatorSolver::new()
            .with_num_threads(1)
            .solve(&graph)
            .unwrap();
        assert!(outcome.is_optimal());
        assert_eq!(outcome.statistics.nodes_explored, 0);
        assert_eq!(outcome.statistics.solutions_found, 1);
    }

    #[test]
    fn test_cycle_needs_two_cut_vertices() {
        let graph = cycle(9);
        let outcome = SeparatorSolver::new()
            .with_num_threads(1)
            .solve(&graph)
            .unwrap();
        assert!(outcome.is_optimal());
        let best = outcome.separator().expect("optimal outcome");
        assert_eq!(best.separator_size(), 2);
        assert!(best.is_valid(&graph, 6));
    }

    #[test]
    fn test_complete_graph_is_infeasible() {
        let outcome = SeparatorSolver::new()
            .with_num_threads(1)
            .solve(&complete(5))
            .unwrap();
        assert!(outcome.is_infeasible());
        assert_eq!(outcome.reason, TerminationReason::InfeasibilityProven);
    }

    #[test]
    fn test_disconnected_graph_splits_for_free() {
        // Two triangles with no connection: component split, empty
        // separator.
        let mut builder = GraphBuilder::new(6);
        builder
            .add_edge(vi(0), vi(1))
            .add_edge(vi(1), vi(2))
            .add_edge(vi(0), vi(2))
            .add_edge(vi(3), vi(4))
            .add_edge(vi(4), vi(5))
            .add_edge(vi(3), vi(5));
        let graph = builder.build();

        let outcome = SeparatorSolver::new()
            .with_num_threads(1)
            .solve(&graph)
            .unwrap();
        assert!(outcome.is_optimal());
        assert_eq!(outcome.separator().unwrap().separator_size(), 0);
    }

    #[test]
    fn test_tight_capacity_forces_engine_search() {
        // Path of 6 with capacity 2: the greedy heuristic finds nothing
        // (no single cut leaves both shores small enough), and the
        // optimum needs two separator vertices.
        let graph = path(6);
        let outcome = SeparatorSolver::new()
            .with_num_threads(1)
            .with_max_shore_size(2)
            .solve(&graph)
            .unwrap();
        assert!(outcome.is_optimal());
        let best = outcome.separator().expect("optimal outcome");
        assert_eq!(best.separator_size(), 2);
        assert!(best.is_valid(&graph, 2));
        assert!(outcome.statistics.nodes_explored > 0);
    }

    #[test]
    fn test_degenerate_instances_are_infeasible() {
        let outcome = SeparatorSolver::new()
            .solve(&GraphBuilder::new(1).build())
            .unwrap();
        assert!(outcome.is_infeasible());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let result = SeparatorSolver::new()
            .with_max_shore_size(0)
            .solve(&path(4));
        assert_eq!(result.unwrap_err(), InvalidInput::ZeroShoreCapacity);
    }

    #[test]
    fn test_parallel_run_matches_sequential() {
        let graph = cycle(10);
        let single = SeparatorSolver::new()
            .with_num_threads(1)
            .solve(&graph)
            .unwrap();
        let multi = SeparatorSolver::new()
            .with_num_threads(4)
            .solve(&graph)
            .unwrap();
        assert!(single.is_optimal());
        assert!(multi.is_optimal());
        assert_eq!(
            single.separator().map(|s| s.separator_size()),
            multi.separator().map(|s| s.separator_size())
        );
    }
}
