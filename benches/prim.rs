//! Criterion benchmarks for Prim and the indexed priority queue.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use rand::rngs::StdRng;

use spanning_forest::graph::generators::{generate_geometric, generate_random_connected};
use spanning_forest::{minimum_spanning_forest, IndexedPriorityQueue};

fn bench_prim(c: &mut Criterion) {
    let random = generate_random_connected(5_000, 20_000, 7);
    c.bench_function("prim_random_5k", |b| {
        b.iter(|| minimum_spanning_forest(black_box(&random)))
    });

    let geometric = generate_geometric(1_000, 10_000.0, 800.0, 7);
    c.bench_function("prim_geometric_1k", |b| {
        b.iter(|| minimum_spanning_forest(black_box(&geometric)))
    });
}

fn bench_queue(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let values: Vec<u64> = (0..10_000).map(|_| rng.gen_range(0..1_000_000)).collect();

    c.bench_function("queue_push_pop_10k", |b| {
        b.iter(|| {
            let mut queue = IndexedPriorityQueue::new(|x: &u64, y: &u64| x.cmp(y));
            for &v in &values {
                queue.push(v);
            }
            while let Ok(v) = queue.pop() {
                black_box(v);
            }
        })
    });

    c.bench_function("queue_remove_10k", |b| {
        b.iter(|| {
            let mut queue = IndexedPriorityQueue::with_capacity(|x: &u64, y: &u64| x.cmp(y), values.len());
            for &v in &values {
                queue.push(v);
            }
            for v in values.iter().rev() {
                let _ = black_box(queue.remove(v));
            }
        })
    });
}

criterion_group!(benches, bench_prim, bench_queue);
criterion_main!(benches);
