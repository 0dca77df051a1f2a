use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ordkv::{BinarySearchTree, Key, Map, SkipList, SortedList, Treap};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;

const SIZE: Key = 2_000;

fn key_sets() -> Vec<(&'static str, Vec<Key>)> {
    let ordered: Vec<Key> = (0..SIZE).collect();
    let reversed = ordered.iter().rev().copied().collect();
    let mut shuffled = ordered.clone();
    shuffled.shuffle(&mut StdRng::seed_from_u64(0xdead_beef));
    vec![
        ("ordered", ordered),
        ("reversed", reversed),
        ("shuffled", shuffled),
    ]
}

fn fill<M: Map<String>>(mut m: M, keys: &[Key]) -> M {
    for &k in keys {
        m.insert(k, k.to_string());
    }
    m
}

fn search<M: Map<String>>(m: &M, keys: &[Key]) {
    for &k in keys {
        black_box(m.find(k));
    }
}

fn fill_btree(keys: &[Key]) -> BTreeMap<Key, String> {
    keys.iter().map(|&k| (k, k.to_string())).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    group.sample_size(10);
    for (order, keys) in key_sets() {
        group.bench_with_input(BenchmarkId::new("sorted_list", order), &keys, |b, keys| {
            b.iter(|| fill(SortedList::new(), keys))
        });
        group.bench_with_input(BenchmarkId::new("skip_list", order), &keys, |b, keys| {
            b.iter(|| fill(SkipList::new(), keys))
        });
        group.bench_with_input(BenchmarkId::new("bst", order), &keys, |b, keys| {
            b.iter(|| fill(BinarySearchTree::new(), keys))
        });
        group.bench_with_input(BenchmarkId::new("treap", order), &keys, |b, keys| {
            b.iter(|| fill(Treap::new(), keys))
        });
        group.bench_with_input(BenchmarkId::new("btree_map", order), &keys, |b, keys| {
            b.iter(|| fill_btree(keys))
        });
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    group.sample_size(10);
    for (order, keys) in key_sets() {
        let list = fill(SortedList::new(), &keys);
        group.bench_with_input(BenchmarkId::new("sorted_list", order), &keys, |b, keys| {
            b.iter(|| search(&list, keys))
        });
        let skip = fill(SkipList::new(), &keys);
        group.bench_with_input(BenchmarkId::new("skip_list", order), &keys, |b, keys| {
            b.iter(|| search(&skip, keys))
        });
        let bst = fill(BinarySearchTree::new(), &keys);
        group.bench_with_input(BenchmarkId::new("bst", order), &keys, |b, keys| {
            b.iter(|| search(&bst, keys))
        });
        let treap = fill(Treap::new(), &keys);
        group.bench_with_input(BenchmarkId::new("treap", order), &keys, |b, keys| {
            b.iter(|| search(&treap, keys))
        });
        let btree = fill_btree(&keys);
        group.bench_with_input(BenchmarkId::new("btree_map", order), &keys, |b, keys| {
            b.iter(|| {
                for k in keys {
                    black_box(btree.get(k));
                }
            })
        });
    }
    group.finish();
}

fn bench_reconfigure(c: &mut Criterion) {
    let keys: Vec<Key> = (0..SIZE).collect();
    let mut skip = fill(SkipList::new(), &keys);
    skip.reconfigure();
    c.bench_function("find/skip_list_reconfigured", |b| b.iter(|| search(&skip, &keys)));
}

criterion_group!(benches, bench_insert, bench_find, bench_reconfigure);
criterion_main!(benches);
