use bst_map::OrderedMap;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;

const N: usize = 10_000;

/// Sorted input degenerates into a chain, so keep it small.
const SORTED_N: usize = 1_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
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

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| {
            let mut map = OrderedMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_ordered(c: &mut Criterion) {
    let keys = ordered_keys(SORTED_N);
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("OrderedMap", SORTED_N), |b| {
        b.iter(|| {
            let mut map = OrderedMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", SORTED_N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_reverse(c: &mut Criterion) {
    let keys = reverse_ordered_keys(SORTED_N);
    let mut group = c.benchmark_group("insert_reverse");

    group.bench_function(BenchmarkId::new("OrderedMap", SORTED_N), |b| {
        b.iter(|| {
            let mut map = OrderedMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", SORTED_N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

// ─── Lookup ─────────────────────────────────────────────────────────────────

fn bench_search_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut bst_map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("search_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some((_, &v)) = bst_map.search(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = bt_map.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

fn bench_upper_bound_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let probes: Vec<i64> = keys.iter().map(|&k| k.wrapping_add(1)).collect();
    let mut bst_map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("upper_bound_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for &k in &probes {
                if bst_map.upper_bound(&k).is_some() {
                    hits += 1;
                }
            }
            hits
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for &k in &probes {
                if bt_map.range(k..).next().is_some() {
                    hits += 1;
                }
            }
            hits
        });
    });

    group.finish();
}

// ─── Traversal ──────────────────────────────────────────────────────────────

fn bench_traverse_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut bst_map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("traverse_random");

    group.bench_function(BenchmarkId::new("OrderedMap/cursor", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            let mut entry = bst_map.first().map(|(_, &v)| v);
            while let Some(v) = entry {
                sum = sum.wrapping_add(v);
                entry = bst_map.next().map(|(_, &v)| v);
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("OrderedMap/iter", N), |b| {
        b.iter(|| bst_map.values().fold(0i64, |sum, &v| sum.wrapping_add(v)));
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| bt_map.values().fold(0i64, |sum, &v| sum.wrapping_add(v)));
    });

    group.finish();
}

// ─── Erase ──────────────────────────────────────────────────────────────────

fn bench_erase_random(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("erase_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<OrderedMap<i64, i64>>(),
            |mut map| {
                for &k in &keys {
                    map.erase(&k);
                }
                map
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<BTreeMap<i64, i64>>(),
            |mut map| {
                for &k in &keys {
                    map.remove(&k);
                }
                map
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_insert_random, bench_insert_ordered, bench_insert_reverse,);

criterion_group!(lookup_benches, bench_search_random, bench_upper_bound_random,);

criterion_group!(traverse_benches, bench_traverse_random,);

criterion_group!(erase_benches, bench_erase_random,);

criterion_main!(insert_benches, lookup_benches, traverse_benches, erase_benches,);
