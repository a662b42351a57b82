use avl_collections::avl_tree::{AvlMap, AvlSet};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};

const NUM_OF_OPERATIONS: usize = 1_000;

fn random_keys() -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect()
}

fn bench_avl_map_insert(c: &mut Criterion) {
    let keys = random_keys();
    c.bench_function("bench avl_map insert", move |b| {
        b.iter(|| {
            let mut map = AvlMap::new();
            for key in &keys {
                map.insert(*key, *key);
            }
            map
        })
    });
}

fn bench_btreemap_insert(c: &mut Criterion) {
    let keys = random_keys();
    c.bench_function("bench btreemap insert", move |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for key in &keys {
                map.insert(*key, *key);
            }
            map
        })
    });
}

fn bench_avl_map_get(c: &mut Criterion) {
    let keys = random_keys();
    let mut map = AvlMap::new();
    for key in &keys {
        map.insert(*key, *key);
    }

    c.bench_function("bench avl_map get", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let keys = random_keys();
    let mut map = BTreeMap::new();
    for key in &keys {
        map.insert(*key, *key);
    }

    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_avl_set_insert_remove(c: &mut Criterion) {
    let keys = random_keys();
    c.bench_function("bench avl_set insert remove", move |b| {
        b.iter(|| {
            let mut set = AvlSet::new();
            for key in &keys {
                let _ = set.insert(*key);
            }
            for key in &keys {
                black_box(set.remove(key));
            }
        })
    });
}

fn bench_btreeset_insert_remove(c: &mut Criterion) {
    let keys = random_keys();
    c.bench_function("bench btreeset insert remove", move |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for key in &keys {
                set.insert(*key);
            }
            for key in &keys {
                black_box(set.remove(key));
            }
        })
    });
}

fn bench_avl_set_in_order(c: &mut Criterion) {
    let set: AvlSet<u32> = random_keys().into_iter().collect();
    c.bench_function("bench avl_set in_order", move |b| b.iter(|| black_box(set.in_order())));
}

criterion_group!(
    benches,
    bench_avl_map_insert,
    bench_btreemap_insert,
    bench_avl_map_get,
    bench_btreemap_get,
    bench_avl_set_insert_remove,
    bench_btreeset_insert_remove,
    bench_avl_set_in_order
);
criterion_main!(benches);
