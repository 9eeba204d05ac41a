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

//! # Strait Graph
//!
//! The problem-domain types of the Strait workspace: the undirected host
//! graph the solver partitions, the `VertexSeparator` value it produces,
//! and the two bounding algorithms that bracket the search (a greedy
//! heuristic separator for the upper bound and vertex connectivity for
//! the lower bound).

pub mod connectivity;
pub mod graph;
pub mod heuristic;
pub mod index;
pub mod separator;

pub use connectivity::vertex_connectivity;
pub use graph::{Graph, GraphBuilder};
pub use heuristic::greedy_separator;
pub use index::VertexIndex;
pub use separator::VertexSeparator;
