//! Criterion benchmarks for keygraph.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::Rng;

use keygraph::graph::Graph;

/// Build a graph with `node_count` nodes and `connects` random connections.
fn make_large_graph(node_count: usize, connects: usize) -> Graph {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::with_name("bench");
    for i in 0..node_count {
        graph.add(format!("node_{}", i)).unwrap();
    }
    for _ in 0..connects {
        let a = rng.gen_range(0..node_count);
        let b = rng.gen_range(0..node_count);
        graph
            .connect(format!("node_{}", a), format!("node_{}", b))
            .unwrap();
    }
    graph
}

fn bench_add_nodes(c: &mut Criterion) {
    c.bench_function("add_1k_nodes", |b| {
        b.iter(|| {
            let mut graph = Graph::with_name("bench");
            for i in 0..1_000 {
                graph.add(format!("node_{}", i)).unwrap();
            }
            graph
        })
    });
}

fn bench_connect(c: &mut Criterion) {
    let base = make_large_graph(1_000, 0);
    c.bench_function("connect_1k_pairs", |b| {
        b.iter_batched(
            || base.clone(),
            |mut graph| {
                for i in 0..1_000 {
                    graph
                        .connect(format!("node_{}", i), format!("node_{}", (i + 1) % 1_000))
                        .unwrap();
                }
                graph
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_edges(c: &mut Criterion) {
    let graph = make_large_graph(1_000, 5_000);
    c.bench_function("edges_1k_nodes_5k_connects", |b| {
        b.iter(|| black_box(&graph).edges())
    });
}

fn bench_neighbors(c: &mut Criterion) {
    let graph = make_large_graph(10_000, 50_000);
    c.bench_function("neighbors_lookup", |b| {
        b.iter(|| black_box(&graph).neighbors("node_5000").unwrap())
    });
}

fn bench_adjacent(c: &mut Criterion) {
    let graph = make_large_graph(10_000, 50_000);
    c.bench_function("is_adjacent", |b| {
        b.iter(|| {
            black_box(&graph)
                .is_adjacent("node_5000", "node_5001")
                .unwrap()
        })
    });
}

fn bench_remove(c: &mut Criterion) {
    let base = make_large_graph(1_000, 5_000);
    c.bench_function("remove_100_nodes", |b| {
        b.iter_batched(
            || base.clone(),
            |mut graph| {
                for i in 0..100 {
                    graph.remove(format!("node_{}", i)).unwrap();
                }
                graph
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_add_nodes,
    bench_connect,
    bench_edges,
    bench_neighbors,
    bench_adjacent,
    bench_remove
);
criterion_main!(benches);
