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

//! # Strait Solver
//!
//! The high-level entry point of the Strait vertex separator solver. It
//! wires the preprocessing stages (a vertex connectivity lower bound and
//! a greedy incumbent) around the parallel branch-and-bound engine and
//! returns a classified outcome.
//!
//! ## Usage
//!
//! ```rust
//! use strait_graph::{GraphBuilder, VertexIndex};
//! use strait_solver::SeparatorSolver;
//!
//! let mut builder = GraphBuilder::new(5);
//! for i in 0..4 {
//!     builder.add_edge(VertexIndex::new(i), VertexIndex::new(i + 1));
//! }
//! let graph = builder.build();
//!
//! let outcome = SeparatorSolver::new()
//!     .with_num_threads(1)
//!     .solve(&graph)
//!     .unwrap();
//! assert!(outcome.is_optimal());
//! assert_eq!(outcome.separator().unwrap().separator_size(), 1);
//! ```

pub mod solver;

pub use solver::SeparatorSolver;
