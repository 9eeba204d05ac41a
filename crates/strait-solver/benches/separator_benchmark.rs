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

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::*;
use std::hint::black_box;
use strait_graph::{Graph, GraphBuilder, VertexIndex};
use strait_solver::SeparatorSolver;

fn vi(i: usize) -> VertexIndex {
    VertexIndex::new(i)
}

fn path_graph(n: usize) -> Graph {
    let mut builder = GraphBuilder::new(n);
    for i in 0..n - 1 {
        builder.add_edge(vi(i), vi(i + 1));
    }
    builder.build()
}

/// A connected sparse random graph: a spanning path plus `extra` random
/// chords, seeded for deterministic benchmark inputs.
fn random_graph(n: usize, extra: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::new(n);
    for i in 0..n - 1 {
        builder.add_edge(vi(i), vi(i + 1));
    }
    for _ in 0..extra {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            builder.add_edge(vi(a), vi(b));
        }
    }
    builder.build()
}

fn bench_path_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_graphs");
    for n in [16, 32, 64] {
        let graph = path_graph(n);
        let solver = SeparatorSolver::new().with_num_threads(1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| {
                let outcome = solver.solve(black_box(graph)).expect("valid configuration");
                black_box(outcome)
            })
        });
    }
    group.finish();
}

fn bench_sparse_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_random_graphs");
    group.sample_size(20);
    for n in [12, 16, 20] {
        let graph = random_graph(n, n / 2, 0x5eed + n as u64);
        let solver = SeparatorSolver::new().with_num_threads(1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| {
                let outcome = solver.solve(black_box(graph)).expect("valid configuration");
                black_box(outcome)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_path_graphs, bench_sparse_random_graphs);
criterion_main!(benches);
