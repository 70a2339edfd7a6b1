use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ordered_bst::OrderedMap;
use std::collections::BTreeMap;
use std::hint::black_box;

const N: usize = 10_000;

// Sorted input degenerates the tree into a path, so every insert walks all earlier keys.
const DEGENERATE_N: usize = 2_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn ordered_map_from(keys: &[i64]) -> OrderedMap<i64, i64> {
    keys.iter().map(|&k| (k, k)).collect()
}

fn btree_map_from(keys: &[i64]) -> BTreeMap<i64, i64> {
    keys.iter().map(|&k| (k, k)).collect()
}

// ─── Insertion ──────────────────────────────────────────────────────────────

fn bench_put_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_ordered");
    let keys = ordered_keys(DEGENERATE_N);

    group.bench_function(BenchmarkId::new("OrderedMap", DEGENERATE_N), |b| {
        b.iter(|| ordered_map_from(&keys));
    });

    group.bench_function(BenchmarkId::new("BTreeMap", DEGENERATE_N), |b| {
        b.iter(|| btree_map_from(&keys));
    });

    group.finish();
}

fn bench_put_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_reverse");
    let keys: Vec<i64> = ordered_keys(DEGENERATE_N).into_iter().rev().collect();

    group.bench_function(BenchmarkId::new("OrderedMap", DEGENERATE_N), |b| {
        b.iter(|| ordered_map_from(&keys));
    });

    group.bench_function(BenchmarkId::new("BTreeMap", DEGENERATE_N), |b| {
        b.iter(|| btree_map_from(&keys));
    });

    group.finish();
}

fn bench_put_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_random");
    let keys = random_keys(N);

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| ordered_map_from(&keys));
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| btree_map_from(&keys));
    });

    group.finish();
}

// ─── Lookup ─────────────────────────────────────────────────────────────────

fn bench_get_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_random");
    let keys = random_keys(N);
    let ordered = ordered_map_from(&keys);
    let btree = btree_map_from(&keys);

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| {
            for k in &keys {
                black_box(ordered.get(k));
            }
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            for k in &keys {
                black_box(btree.get(k));
            }
        });
    });

    group.finish();
}

// ─── Order statistics ───────────────────────────────────────────────────────

fn bench_rank_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_random");
    let keys = random_keys(N);
    let ordered = ordered_map_from(&keys);
    let btree = btree_map_from(&keys);

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| {
            for k in &keys {
                black_box(ordered.rank(k));
            }
        });
    });

    // BTreeMap has no rank; counting the range is the linear-time equivalent.
    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            for k in keys.iter().step_by(100) {
                black_box(btree.range(..k).count());
            }
        });
    });

    group.finish();
}

fn bench_select_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_all");
    let ordered = ordered_map_from(&random_keys(N));

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| {
            for rank in 0..ordered.size() {
                black_box(ordered.select_key(rank));
            }
        });
    });

    group.finish();
}

// ─── Deletion ───────────────────────────────────────────────────────────────

fn bench_delete_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_random");
    let keys = random_keys(N);

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter_batched(
            || ordered_map_from(&keys),
            |mut map| {
                for k in &keys {
                    map.delete(k);
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || btree_map_from(&keys),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

fn bench_delete_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_min");
    let keys = random_keys(N);

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter_batched(
            || ordered_map_from(&keys),
            |mut map| {
                while map.delete_min().is_ok() {}
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || btree_map_from(&keys),
            |mut map| {
                while map.pop_first().is_some() {}
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(put_benches, bench_put_ordered, bench_put_reverse, bench_put_random);

criterion_group!(lookup_benches, bench_get_random, bench_rank_random, bench_select_all);

criterion_group!(delete_benches, bench_delete_random, bench_delete_min);

criterion_main!(put_benches, lookup_benches, delete_benches);
