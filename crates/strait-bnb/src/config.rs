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

use std::time::Duration;

/// Rejected search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// A shore capacity of zero admits no valid partition: both shores
    /// must be nonempty.
    ZeroShoreCapacity,
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInput::ZeroShoreCapacity => {
                write!(f, "max shore size must be at least 1")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}

/// Builder-style configuration of one engine run.
///
/// Unset fields resolve to defaults at solve time: the shore capacity
/// defaults to `⌊2n/3⌋` of the instance, the thread count to the
/// available parallelism, and the time limit to none.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchConfig {
    max_shore_size: Option<usize>,
    time_limit: Option<Duration>,
    num_threads: Option<usize>,
    log_progress: bool,
}

impl SearchConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps both shores at `max_shore_size` vertices.
    #[inline]
    pub fn with_max_shore_size(mut self, max_shore_size: usize) -> Self {
        self.max_shore_size = Some(max_shore_size);
        self
    }

    /// Bounds the wall-clock search time.
    #[inline]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// Fixes the number of worker threads.
    #[inline]
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Enables periodic progress logging on one worker.
    #[inline]
    pub fn with_progress_log(mut self, log_progress: bool) -> Self {
        self.log_progress = log_progress;
        self
    }

    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    #[inline]
    pub fn log_progress(&self) -> bool {
        self.log_progress
    }

    /// Resolves the shore capacity for an instance with `num_vertices`
    /// vertices, rejecting an explicit capacity of zero.
    pub fn resolved_max_shore_size(&self, num_vertices: usize) -> Result<usize, InvalidInput> {
        match self.max_shore_size {
            Some(0) => Err(InvalidInput::ZeroShoreCapacity),
            Some(capacity) => Ok(capacity),
            None => Ok((2 * num_vertices / 3).max(1)),
        }
    }

    /// Resolves the worker thread count, falling back to the available
    /// parallelism of the host.
    pub fn resolved_num_threads(&self) -> usize {
        self.num_threads
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|parallelism| parallelism.get())
                    .unwrap_or(1)
            })
            .max(1)
    }
}

impl std::fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchConfig(max_shore_size: {:?}, time_limit: {:?}, num_threads: {:?})",
            self.max_shore_size, self.time_limit, self.num_threads
        )
    }
}
