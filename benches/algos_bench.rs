//! Criterion benchmarks for u-algos.
//!
//! Inputs are generated from a fixed seed so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_algos::search;
use u_algos::shortest_path::{
    DijkstraConfig, DijkstraRunner, DuplicateEdgePolicy, FrontierStrategy, Graph,
};
use u_algos::text;
use u_algos::tsp::{DistanceMatrix, TspConfig, TspRunner, TspStrategy};

// ===========================================================================
// Input generators
// ===========================================================================

/// Connected graph: a random spanning path plus `extra` random edges.
fn random_graph(nodes: usize, extra: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(nodes + extra);
    for v in 1..nodes {
        edges.push((rng.random_range(0..v), v, rng.random_range(1..100i64)));
    }
    for _ in 0..extra {
        let a = rng.random_range(0..nodes);
        let b = rng.random_range(0..nodes);
        edges.push((a, b, rng.random_range(1..100i64)));
    }
    // Inputs are in range with small weights, so construction cannot fail.
    match Graph::from_weighted_edges(nodes, &edges, DuplicateEdgePolicy::KeepMinimum) {
        Ok(graph) => graph,
        Err(e) => panic!("benchmark graph rejected: {e}"),
    }
}

fn random_matrix(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if i == j { 0 } else { rng.random_range(1..1000u64) })
                .collect()
        })
        .collect();
    match DistanceMatrix::new(rows) {
        Ok(matrix) => matrix,
        Err(e) => panic!("benchmark matrix rejected: {e}"),
    }
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    for &(nodes, extra) in &[(1_000usize, 4_000usize), (10_000, 40_000)] {
        let graph = random_graph(nodes, extra, 42);
        for strategy in [FrontierStrategy::LazyHeap, FrontierStrategy::OrderedSet] {
            let config = DijkstraConfig::default().with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), nodes),
                &(&graph, config),
                |b, (g, cfg)| {
                    b.iter(|| {
                        let result = DijkstraRunner::run(black_box(g), 0, black_box(cfg));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp");
    group.sample_size(10);
    for &n in &[8usize, 12] {
        let matrix = random_matrix(n, 7);
        for strategy in [TspStrategy::HeldKarp, TspStrategy::BranchAndBound] {
            let config = TspConfig::default().with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), n),
                &(&matrix, config),
                |b, (m, cfg)| {
                    b.iter(|| {
                        let result = TspRunner::run(black_box(m), black_box(cfg));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_binary_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_search");
    for &n in &[1_000usize, 1_000_000] {
        let nums: Vec<u32> = (0..n as u32).map(|x| x / 3).collect();
        let target = (n / 7) as u32;
        group.bench_with_input(BenchmarkId::new("count_occurrences", n), &nums, |b, v| {
            b.iter(|| search::count_occurrences(black_box(v), black_box(&target)))
        });
    }
    group.finish();
}

fn bench_rabin_karp(c: &mut Criterion) {
    let mut group = c.benchmark_group("rabin_karp");
    let mut rng = StdRng::seed_from_u64(3);
    for &n in &[10_000usize, 1_000_000] {
        let haystack: Vec<u8> = (0..n).map(|_| rng.random_range(b'a'..=b'd')).collect();
        let needle = haystack[n / 2..n / 2 + 16].to_vec();
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(haystack, needle),
            |b, (h, nd)| b.iter(|| text::find_all(black_box(h), black_box(nd))),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_dijkstra,
    bench_tsp,
    bench_binary_search,
    bench_rabin_karp
);
criterion_main!(benches);
