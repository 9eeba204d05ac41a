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

//! # Strait Branch-and-Bound Engine
//!
//! An exact, parallel branch-and-bound engine for the minimum vertex
//! separator problem, formulated as a constraint satisfaction search:
//! every vertex carries a shrinking domain over `{Separator, Right,
//! Left}`, decisions seed a fixed-point propagation that forces
//! neighbors of shore vertices away from the opposite shore, and a
//! shared incumbent bound prunes the tree globally.
//!
//! ## Architecture
//!
//! - [`domain`]: the per-vertex candidate sets and the copy-on-write
//!   store children derive from their parents.
//! - [`partition`]: committed placements with capacity bookkeeping.
//! - [`propagate`]: the fixed-point worklist engine.
//! - [`node`] / [`branching`]: immutable search nodes, pending branches,
//!   and the most-constrained branch selector.
//! - [`frontier`]: per-worker deques with FIFO stealing under one mutex.
//! - [`worker`] / [`engine`]: the depth-first worker loop and the
//!   scoped-thread orchestration around it.

pub mod branching;
pub mod config;
pub mod domain;
pub mod engine;
pub mod frontier;
pub mod node;
pub mod partition;
pub mod propagate;
pub mod worker;

pub use config::{InvalidInput, SearchConfig};
pub use engine::BnbEngine;
