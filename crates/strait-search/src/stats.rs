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

//! # Search Statistics
//!
//! Counters collected by each worker during search and merged into one
//! report at the end. Counting uses cheap `on_*` hooks on the hot path;
//! workers keep private instances, so no synchronization is needed until
//! the final merge.

/// Statistics collected during the solving process.
///
/// Per-worker counters are merged via [`SearchStatistics::merge`];
/// `used_threads` and `solve_duration` are set once by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of search nodes on which propagation ran.
    pub nodes_explored: u64,
    /// Number of child branches generated.
    pub branches_generated: u64,
    /// Number of nodes refuted by propagation.
    pub failures: u64,
    /// Number of branches pruned against the shared upper bound before
    /// propagation ran.
    pub bound_prunings: u64,
    /// Number of branches acquired from another worker's deque.
    pub steals: u64,
    /// Number of improving separators installed.
    pub solutions_found: u64,
    /// Deepest assignment count reached.
    pub max_depth: u64,
    /// Number of worker threads used.
    pub used_threads: usize,
    /// Total duration of the solving process.
    pub solve_duration: std::time::Duration,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self {
            nodes_explored: 0,
            branches_generated: 0,
            failures: 0,
            bound_prunings: 0,
            steals: 0,
            solutions_found: 0,
            max_depth: 0,
            used_threads: 1,
            solve_duration: std::time::Duration::ZERO,
        }
    }
}

impl SearchStatistics {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored += 1;
    }

    #[inline(always)]
    pub fn on_branches_generated(&mut self, count: u64) {
        self.branches_generated += count;
    }

    #[inline(always)]
    pub fn on_failure(&mut self) {
        self.failures += 1;
    }

    #[inline(always)]
    pub fn on_bound_pruning(&mut self) {
        self.bound_prunings += 1;
    }

    #[inline(always)]
    pub fn on_steal(&mut self) {
        self.steals += 1;
    }

    #[inline(always)]
    pub fn on_solution_found(&mut self) {
        self.solutions_found += 1;
    }

    #[inline(always)]
    pub fn on_depth_reached(&mut self, depth: u64) {
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }

    /// Folds another worker's counters into this instance. `used_threads`
    /// and `solve_duration` are orchestrator-owned and left untouched.
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.nodes_explored += other.nodes_explored;
        self.branches_generated += other.branches_generated;
        self.failures += other.failures;
        self.bound_prunings += other.bound_prunings;
        self.steals += other.steals;
        self.solutions_found += other.solutions_found;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Nodes Explored: {}", self.nodes_explored)?;
        writeln!(f, "  Branches Generated: {}", self.branches_generated)?;
        writeln!(f, "  Failures: {}", self.failures)?;
        writeln!(f, "  Bound Prunings: {}", self.bound_prunings)?;
        writeln!(f, "  Steals: {}", self.steals)?;
        writeln!(f, "  Solutions Found: {}", self.solutions_found)?;
        writeln!(f, "  Max Depth: {}", self.max_depth)?;
        writeln!(f, "  Used Threads: {}", self.used_threads)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SearchStatistics;
    use std::time::Duration;

    #[test]
    fn test_counters_accumulate() {
        let mut stats = SearchStatistics::new();
        stats.on_node_explored();
        stats.on_node_explored();
        stats.on_branches_generated(3);
        stats.on_failure();
        stats.on_bound_pruning();
        stats.on_steal();
        stats.on_solution_found();
        stats.on_depth_reached(5);
        stats.on_depth_reached(3);

        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.branches_generated, 3);
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.bound_prunings, 1);
        assert_eq!(stats.steals, 1);
        assert_eq!(stats.solutions_found, 1);
        assert_eq!(stats.max_depth, 5);
    }

    #[test]
    fn test_merge_sums_counters_and_maxes_depth() {
        let mut a = SearchStatistics::new();
        a.on_node_explored();
        a.on_depth_reached(4);
        a.used_threads = 4;
        a.solve_duration = Duration::from_millis(500);

        let mut b = SearchStatistics::new();
        b.on_node_explored();
        b.on_failure();
        b.on_depth_reached(7);

        a.merge(&b);
        assert_eq!(a.nodes_explored, 2);
        assert_eq!(a.failures, 1);
        assert_eq!(a.max_depth, 7);
        // Orchestrator-owned fields survive the merge untouched.
        assert_eq!(a.used_threads, 4);
        assert_eq!(a.solve_duration, Duration::from_millis(500));
    }

    #[test]
    fn test_display_formats_all_fields() {
        let mut stats = SearchStatistics::new();
        stats.on_node_explored();
        stats.used_threads = 2;
        stats.solve_duration = Duration::from_millis(1234);

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Search Statistics:"));
        assert!(rendered.contains("Nodes Explored: 1"));
        assert!(rendered.contains("Used Threads: 2"));
        assert!(rendered.contains("Solve Duration (secs): 1.234"));
    }
}
