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

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use std::time::{Duration, Instant};
use strait_graph::{Graph, VertexSeparator};

/// A monitor that prints periodic progress lines and announces improving
/// separators. Clock checks are filtered by a step bitmask so the hot
/// path stays cheap.
#[derive(Debug, Clone)]
pub struct LogSearchMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    steps: u64,
    best_size: Option<usize>,
}

impl LogSearchMonitor {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            steps: 0,
            best_size: None,
        }
    }

    #[inline(always)]
    fn print_header(&self, graph: &Graph) {
        println!(
            "Searching {} for a minimum vertex separator",
            graph
        );
        println!("{:<9} | {:<14} | {:<14}", "Elapsed", "Steps", "Best Size");
        println!("{}", "-".repeat(44));
    }

    #[inline(always)]
    fn log_line(&mut self) {
        let now = Instant::now();
        let elapsed_field = format!("{:.1}s", now.duration_since(self.start_time).as_secs_f32());
        let best_field = match self.best_size {
            Some(size) => format!("{}", size),
            None => "Inf".to_string(),
        };
        println!(
            "{:<9} | {:<14} | {:<14}",
            elapsed_field, self.steps, best_field
        );
        self.last_log_time = now;
    }
}

impl Default for LogSearchMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl std::fmt::Display for LogSearchMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogSearchMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl SearchMonitor for LogSearchMonitor {
    fn name(&self) -> &str {
        "LogSearchMonitor"
    }

    fn on_enter_search(&mut self, graph: &Graph) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.steps = 0;
        self.best_size = None; // Reset
        self.print_header(graph);
    }

    fn on_exit_search(&mut self) {
        println!("{}", "-".repeat(44));
        println!("Search finished.");
    }

    fn on_solution_found(&mut self, separator: &VertexSeparator) {
        let size = separator.separator_size();
        if self.best_size.map_or(true, |best| size < best) {
            self.best_size = Some(size);
            let elapsed = self.start_time.elapsed().as_secs_f32();
            println!("[{:.1}s] new incumbent separator of size {}", elapsed, size);
        }
    }

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
        if (self.steps & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line();
        }
    }

    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strait_graph::{GraphBuilder, VertexIndex};

    fn make_separator(size: usize) -> VertexSeparator {
        let mut sep = VertexSeparator::new(size + 2);
        sep.insert_left(VertexIndex::new(0));
        for i in 1..=size {
            sep.insert_separator(VertexIndex::new(i));
        }
        sep.insert_right(VertexIndex::new(size + 1));
        sep
    }

    #[test]
    fn test_tracks_best_size_monotonically() {
        let mut monitor = LogSearchMonitor::default();
        let graph = GraphBuilder::new(5).build();
        monitor.on_enter_search(&graph);

        monitor.on_solution_found(&make_separator(4));
        assert_eq!(monitor.best_size, Some(4));
        monitor.on_solution_found(&make_separator(2));
        assert_eq!(monitor.best_size, Some(2));
        // A worse separator never regresses the tracked best.
        monitor.on_solution_found(&make_separator(3));
        assert_eq!(monitor.best_size, Some(2));
    }

    #[test]
    fn test_never_terminates() {
        let monitor = LogSearchMonitor::default();
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_enter_search_resets_state() {
        let mut monitor = LogSearchMonitor::default();
        monitor.steps = 99;
        monitor.best_size = Some(3);
        let graph = GraphBuilder::new(3).build();
        monitor.on_enter_search(&graph);
        assert_eq!(monitor.steps, 0);
        assert_eq!(monitor.best_size, None);
    }
}
