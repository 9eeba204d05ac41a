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

//! # Shared Bound (Best Separator Holder)
//!
//! A concurrent container bracketing the separator objective during search.
//! It exposes a fast upper bound via an atomic, stores the best separator
//! found so far behind a `Mutex` as the source of truth, and carries an
//! immutable lower bound proven before the search started (the vertex
//! connectivity of the host graph).
//!
//! ## Motivation
//!
//! - Fast heuristic checks: a cheap atomic upper bound short-circuits
//!   attempts to install obviously worse candidates without locking, and
//!   lets propagation prune against a recent bound without contention.
//! - Correctness by locking: the authoritative incumbent is protected by a
//!   `Mutex`, ensuring consistent updates even under contention.
//! - Optimality certificate: once the upper bound meets the lower bound no
//!   better separator can exist and the search may stop.
//!
//! ## Highlights
//!
//! - `try_install(&VertexSeparator) -> bool` installs strictly smaller
//!   separators, updating both the snapshot and the atomic upper bound.
//! - `upper_bound()` is a relaxed atomic read; stale values only cost a
//!   little extra work, never correctness.
//! - The sentinel upper bound is the vertex count: every genuine separator
//!   is smaller, since valid partitions keep both shores nonempty.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};
use strait_graph::VertexSeparator;

/// A concurrent holder for the best separator found during search, plus
/// the fixed lower bound the search was started with.
///
/// The upper bound is loaded/stored with `Ordering::Relaxed`. This is
/// sufficient because it only serves as a hint to short-circuit work; all
/// correctness-sensitive state (the separator itself) is synchronized via
/// the `Mutex`.
#[derive(Debug)]
pub struct SharedBound {
    /// Size of the incumbent separator, or the sentinel if none is installed.
    upper_bound: AtomicUsize,
    /// Proven lower bound on any separator size. Never changes.
    lower_bound: usize,
    /// The incumbent separator, the source of truth.
    best: Mutex<Option<VertexSeparator>>,
}

impl SharedBound {
    /// Creates a bound holder with no incumbent installed.
    ///
    /// `sentinel_upper` should be an exclusive upper bound on any valid
    /// separator size; the vertex count works, since valid partitions keep
    /// both shores nonempty.
    #[inline]
    pub fn new(sentinel_upper: usize, lower_bound: usize) -> Self {
        SharedBound {
            upper_bound: AtomicUsize::new(sentinel_upper),
            lower_bound,
            best: Mutex::new(None),
        }
    }

    /// Returns the current upper bound (separator size of the incumbent,
    /// or the sentinel). A relaxed read; may be momentarily stale.
    #[inline]
    pub fn upper_bound(&self) -> usize {
        self.upper_bound.load(Ordering::Relaxed)
    }

    /// Returns the fixed lower bound.
    #[inline]
    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    /// Returns whether the incumbent provably cannot be improved.
    #[inline]
    pub fn optimality_proven(&self) -> bool {
        self.upper_bound() <= self.lower_bound
    }

    /// Returns a snapshot of the current incumbent separator, if any.
    #[inline]
    pub fn snapshot(&self) -> Option<VertexSeparator> {
        let guard = self.best.lock().unwrap();
        guard.clone()
    }

    /// Attempts to install the given candidate as the new incumbent.
    /// Returns `true` if the candidate was installed, `false` otherwise.
    pub fn try_install(&self, candidate: &VertexSeparator) -> bool {
        let candidate_size = candidate.separator_size();

        // We are minimizing, so smaller is better.
        if candidate_size >= self.upper_bound() {
            return false;
        }

        let mut guard = self.best.lock().unwrap();
        // Another thread might have installed a separator while we were
        // waiting for the lock. Compare against the actual incumbent in the
        // mutex, not the atomic hint read earlier.
        if let Some(current) = guard.as_ref() {
            if candidate_size >= current.separator_size() {
                return false;
            }
        }

        *guard = Some(candidate.clone());
        self.upper_bound.store(candidate_size, Ordering::Relaxed);
        true
    }
}

impl std::fmt::Display for SharedBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SharedBound(lower: {}, upper: {})",
            self.lower_bound,
            self.upper_bound()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SharedBound;
    use std::sync::Arc;
    use std::thread;
    use strait_graph::{VertexIndex, VertexSeparator};

    /// A partition of `n` vertices with a separator of size `sep`, one
    /// vertex on the left shore, and the rest on the right.
    fn make_separator(n: usize, sep: usize) -> VertexSeparator {
        assert!(sep + 2 <= n);
        let mut separator = VertexSeparator::new(n);
        separator.insert_left(VertexIndex::new(0));
        for i in 1..=sep {
            separator.insert_separator(VertexIndex::new(i));
        }
        for i in (sep + 1)..n {
            separator.insert_right(VertexIndex::new(i));
        }
        separator
    }

    #[test]
    fn test_initial_state() {
        let bound = SharedBound::new(10, 2);
        assert_eq!(bound.upper_bound(), 10);
        assert_eq!(bound.lower_bound(), 2);
        assert!(!bound.optimality_proven());
        assert!(bound.snapshot().is_none());
    }

    #[test]
    fn test_install_better_updates_upper_bound_and_snapshot() {
        let bound = SharedBound::new(10, 1);
        let candidate = make_separator(10, 4);

        assert!(bound.try_install(&candidate));
        assert_eq!(bound.upper_bound(), 4);

        let snap = bound.snapshot().expect("snapshot should be Some");
        assert_eq!(snap.separator_size(), 4);
    }

    #[test]
    fn test_reject_worse_or_equal_candidates() {
        let bound = SharedBound::new(10, 0);

        assert!(bound.try_install(&make_separator(10, 3)));
        assert_eq!(bound.upper_bound(), 3);

        assert!(!bound.try_install(&make_separator(10, 5)));
        assert!(!bound.try_install(&make_separator(10, 3)));
        assert_eq!(bound.upper_bound(), 3);

        let snap = bound.snapshot().unwrap();
        assert_eq!(snap.separator_size(), 3);
    }

    #[test]
    fn test_optimality_proven_when_bound_meets_lower() {
        let bound = SharedBound::new(10, 2);
        assert!(bound.try_install(&make_separator(10, 2)));
        assert!(bound.optimality_proven());
    }

    #[test]
    fn test_concurrent_installs_minimum_wins() {
        let bound = Arc::new(SharedBound::new(20, 0));
        let sizes = vec![9, 7, 12, 3, 8, 5, 15, 4, 6];

        let mut handles = Vec::new();
        for size in sizes.iter().cloned() {
            let bound = Arc::clone(&bound);
            handles.push(thread::spawn(move || {
                bound.try_install(&make_separator(20, size))
            }));
        }

        let results = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>();
        assert!(
            results.iter().any(|&installed| installed),
            "at least one install should succeed"
        );

        let min_size = *sizes.iter().min().unwrap();
        assert_eq!(bound.upper_bound(), min_size);
        let snap = bound.snapshot().expect("snapshot after installs");
        assert_eq!(snap.separator_size(), min_size);
    }

    #[test]
    fn test_display() {
        let bound = SharedBound::new(8, 1);
        assert_eq!(format!("{}", bound), "SharedBound(lower: 1, upper: 8)");
    }
}
