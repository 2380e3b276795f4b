use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ordkit::RedBlackTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const SEED: u64 = 42;

fn generate_keys(size: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..size).map(|_| rng.gen_range(0..size as i32 * 2)).collect()
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");

    for size in [100, 1000, 10000].iter() {
        let keys = generate_keys(*size);

        group.bench_with_input(BenchmarkId::new("red_black_unique", size), size, |b, _| {
            b.iter(|| {
                let mut tree = RedBlackTree::new_unique();
                for key in &keys {
                    black_box(tree.insert(*key, *key));
                }
                black_box(tree)
            })
        });

        group.bench_with_input(BenchmarkId::new("red_black_multi", size), size, |b, _| {
            b.iter(|| {
                let mut tree = RedBlackTree::new_multi();
                for key in &keys {
                    black_box(tree.insert(*key, *key));
                }
                black_box(tree)
            })
        });

        group.bench_with_input(BenchmarkId::new("btreemap", size), size, |b, _| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for key in &keys {
                    black_box(map.insert(*key, *key));
                }
                black_box(map)
            })
        });
    }
    group.finish();
}

fn bench_lookup_and_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [1000, 10000].iter() {
        let keys = generate_keys(*size);
        let mut tree = RedBlackTree::new_unique();
        for key in &keys {
            tree.insert(*key, *key);
        }

        group.bench_with_input(BenchmarkId::new("get", size), size, |b, _| {
            b.iter(|| {
                for key in &keys {
                    black_box(tree.get(key));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("index", size), size, |b, _| {
            b.iter(|| {
                for i in 0..tree.count() {
                    black_box(tree.index(i));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("rank", size), size, |b, _| {
            b.iter(|| {
                for key in &keys {
                    black_box(tree.rank(key));
                }
            })
        });
    }
    group.finish();
}

fn bench_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("removal");

    for size in [1000, 10000].iter() {
        let keys = generate_keys(*size);
        let mut base = RedBlackTree::new_unique();
        for key in &keys {
            base.insert(*key, *key);
        }

        group.bench_with_input(BenchmarkId::new("remove_each", size), size, |b, _| {
            b.iter(|| {
                let mut tree = base.clone();
                for key in &keys {
                    black_box(tree.remove(key));
                }
                black_box(tree)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insertion, bench_lookup_and_index, bench_removal);
criterion_main!(benches);
