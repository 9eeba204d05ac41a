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

//! # Work-Stealing Frontier
//!
//! The shared pool of pending branches: one deque per worker behind a
//! single coarse mutex with a condvar for idle workers. Owners pop from
//! the back of their own deque (depth-first descent); an idle worker
//! steals from the front of the longest peer deque, taking the branch
//! closest to the root and thereby the largest stolen subtree.
//!
//! Popping or stealing transfers ownership of the branch, so no decision
//! is ever explored twice. Global exhaustion is detected by counting
//! in-flight branches: a worker that acquired a branch is `active` until
//! it releases the branch's children back, and when every deque is empty
//! with nothing in flight the search is over.
//!
//! A coarse lock is deliberate: branch exploration (clone + propagate)
//! dwarfs the lock hold times at the vertex counts exact search can
//! handle, and a single mutex keeps the termination protocol easy to
//! reason about.

use crate::node::Branch;
use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

/// The result of asking the frontier for work.
#[derive(Debug)]
pub enum Acquired {
    /// A branch from the worker's own deque.
    Owned(Branch),
    /// A branch stolen from another worker's deque.
    Stolen(Branch),
    /// The search is over: every deque is empty and no branch is in
    /// flight, or the frontier was aborted.
    Exhausted,
}

#[derive(Debug)]
struct FrontierShared {
    deques: Vec<VecDeque<Branch>>,
    /// Number of acquired branches not yet released.
    active: usize,
    aborted: bool,
}

/// The shared branch pool of one engine run.
#[derive(Debug)]
pub struct Frontier {
    shared: Mutex<FrontierShared>,
    work_ready: Condvar,
}

impl Frontier {
    /// Creates a frontier for `num_workers` workers, seeding worker 0
    /// with the root branches. Branches are explored last-in first-out,
    /// so the most preferred branch goes in last.
    pub fn new(num_workers: usize, root_branches: Vec<Branch>) -> Self {
        debug_assert!(num_workers > 0);
        let mut deques: Vec<VecDeque<Branch>> = (0..num_workers).map(|_| VecDeque::new()).collect();
        deques[0] = root_branches.into();
        Frontier {
            shared: Mutex::new(FrontierShared {
                deques,
                active: 0,
                aborted: false,
            }),
            work_ready: Condvar::new(),
        }
    }

    /// Acquires the next branch for `worker`, blocking while the frontier
    /// is empty but other workers still hold branches that may spawn
    /// children.
    pub fn acquire(&self, worker: usize) -> Acquired {
        let mut shared = self.shared.lock().unwrap();
        loop {
            if shared.aborted {
                return Acquired::Exhausted;
            }
            if let Some(branch) = shared.deques[worker].pop_back() {
                shared.active += 1;
                return Acquired::Owned(branch);
            }
            // Steal from the richest peer; its front branch sits closest
            // to the root.
            let victim = shared
                .deques
                .iter()
                .enumerate()
                .filter(|(index, deque)| *index != worker && !deque.is_empty())
                .max_by_key(|(_, deque)| deque.len())
                .map(|(index, _)| index);
            if let Some(victim) = victim {
                if let Some(branch) = shared.deques[victim].pop_front() {
                    shared.active += 1;
                    return Acquired::Stolen(branch);
                }
            }
            if shared.active == 0 {
                return Acquired::Exhausted;
            }
            shared = self.work_ready.wait(shared).unwrap();
        }
    }

    /// Returns the children of an explored branch to `worker`'s deque and
    /// marks the branch finished. Must be called exactly once per
    /// acquired branch, with an empty iterator when the node was pruned
    /// or refuted.
    pub fn release<I>(&self, worker: usize, children: I)
    where
        I: IntoIterator<Item = Branch>,
    {
        let mut shared = self.shared.lock().unwrap();
        debug_assert!(shared.active > 0, "release without acquire");
        shared.deques[worker].extend(children);
        shared.active -= 1;
        // Wake idlers for new work or for termination detection.
        self.work_ready.notify_all();
    }

    /// Aborts the search: pending branches stay unexplored and every
    /// blocked worker wakes up exhausted.
    pub fn abort(&self) {
        let mut shared = self.shared.lock().unwrap();
        shared.aborted = true;
        self.work_ready.notify_all();
    }

    /// Whether the frontier was aborted.
    pub fn is_aborted(&self) -> bool {
        self.shared.lock().unwrap().aborted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainStore, Shore};
    use crate::node::SearchNode;
    use crate::partition::PartitionState;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;
    use strait_graph::VertexIndex;

    fn root_node(n: usize) -> Arc<SearchNode> {
        Arc::new(SearchNode::root(
            DomainStore::root(n),
            PartitionState::new(n, n),
        ))
    }

    fn branch(parent: &Arc<SearchNode>, vertex: usize, value: Shore) -> Branch {
        Branch {
            parent: Arc::clone(parent),
            vertex: VertexIndex::new(vertex),
            value,
        }
    }

    #[test]
    fn test_owner_pops_lifo() {
        let root = root_node(3);
        let frontier = Frontier::new(
            1,
            vec![
                branch(&root, 0, Shore::Left),
                branch(&root, 0, Shore::Right),
                branch(&root, 0, Shore::Separator),
            ],
        );

        match frontier.acquire(0) {
            Acquired::Owned(branch) => assert_eq!(branch.value, Shore::Separator),
            other => panic!("expected Owned, got {:?}", other),
        }
        match frontier.acquire(0) {
            Acquired::Owned(branch) => assert_eq!(branch.value, Shore::Right),
            other => panic!("expected Owned, got {:?}", other),
        }
    }

    #[test]
    fn test_thief_steals_from_front() {
        let root = root_node(3);
        let frontier = Frontier::new(
            2,
            vec![
                branch(&root, 0, Shore::Left),
                branch(&root, 0, Shore::Separator),
            ],
        );

        // Worker 1 owns nothing and steals the oldest branch of worker 0.
        match frontier.acquire(1) {
            Acquired::Stolen(branch) => assert_eq!(branch.value, Shore::Left),
            other => panic!("expected Stolen, got {:?}", other),
        }
        // Worker 0 still holds its newest branch.
        match frontier.acquire(0) {
            Acquired::Owned(branch) => assert_eq!(branch.value, Shore::Separator),
            other => panic!("expected Owned, got {:?}", other),
        }
    }

    #[test]
    fn test_exhausted_when_empty_and_idle() {
        let frontier = Frontier::new(2, Vec::new());
        assert!(matches!(frontier.acquire(0), Acquired::Exhausted));
        assert!(matches!(frontier.acquire(1), Acquired::Exhausted));
    }

    #[test]
    fn test_release_hands_work_to_blocked_thief() {
        let root = root_node(3);
        let frontier = Arc::new(Frontier::new(
            2,
            vec![branch(&root, 0, Shore::Separator)],
        ));

        // Worker 0 acquires the only branch; worker 1 must block, because
        // the in-flight branch may still spawn children.
        let owned = match frontier.acquire(0) {
            Acquired::Owned(branch) => branch,
            other => panic!("expected Owned, got {:?}", other),
        };

        let thief = {
            let frontier = Arc::clone(&frontier);
            thread::spawn(move || frontier.acquire(1))
        };
        // Give the thief time to block on the condvar.
        thread::sleep(Duration::from_millis(50));

        let child = branch(&owned.parent, 1, Shore::Left);
        frontier.release(0, vec![child]);

        match thief.join().unwrap() {
            Acquired::Stolen(branch) => assert_eq!(branch.vertex, VertexIndex::new(1)),
            other => panic!("expected Stolen, got {:?}", other),
        }
    }

    #[test]
    fn test_release_without_children_terminates_blocked_workers() {
        let root = root_node(2);
        let frontier = Arc::new(Frontier::new(
            2,
            vec![branch(&root, 0, Shore::Separator)],
        ));

        match frontier.acquire(0) {
            Acquired::Owned(_) => {}
            other => panic!("expected Owned, got {:?}", other),
        }
        let waiter = {
            let frontier = Arc::clone(&frontier);
            thread::spawn(move || frontier.acquire(1))
        };
        thread::sleep(Duration::from_millis(50));

        // The in-flight branch finished without spawning children: the
        // search is globally exhausted.
        frontier.release(0, Vec::new());
        assert!(matches!(waiter.join().unwrap(), Acquired::Exhausted));
    }

    #[test]
    fn test_abort_wakes_blocked_workers() {
        let root = root_node(2);
        let frontier = Arc::new(Frontier::new(
            2,
            vec![branch(&root, 0, Shore::Separator)],
        ));
        match frontier.acquire(0) {
            Acquired::Owned(_) => {}
            other => panic!("expected Owned, got {:?}", other),
        }

        let waiter = {
            let frontier = Arc::clone(&frontier);
            thread::spawn(move || frontier.acquire(1))
        };
        thread::sleep(Duration::from_millis(50));

        frontier.abort();
        assert!(matches!(waiter.join().unwrap(), Acquired::Exhausted));
        assert!(frontier.is_aborted());
        // Pending work is no longer handed out after an abort.
        assert!(matches!(frontier.acquire(0), Acquired::Exhausted));
    }
}
