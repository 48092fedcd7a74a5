use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mola_forward_list::ForwardList;
use rand::prelude::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::LinkedList;
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn push_front_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_front");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("forward_list", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = ForwardList::new();
                for i in 0..size {
                    list.push_front(black_box(i));
                }
                list
            });
        });

        group.bench_with_input(BenchmarkId::new("std_linked_list", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..size {
                    list.push_front(black_box(i));
                }
                list
            });
        });
    }
    group.finish();
}

fn iterate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for size in SIZES {
        let forward: ForwardList<u64> = (0..size as u64).collect();
        let std_list: LinkedList<u64> = (0..size as u64).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("forward_list", size), |b| {
            b.iter(|| black_box(forward.iter().sum::<u64>()));
        });

        group.bench_function(BenchmarkId::new("std_linked_list", size), |b| {
            b.iter(|| black_box(std_list.iter().sum::<u64>()));
        });
    }
    group.finish();
}

fn clone_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    for size in SIZES {
        let forward: ForwardList<String> = (0..size).map(|i| format!("value{}", i)).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("clone", size), |b| {
            b.iter(|| black_box(forward.clone()));
        });

        group.bench_function(BenchmarkId::new("clone_from", size), |b| {
            let mut target = ForwardList::new();
            b.iter(|| {
                target.clone_from(&forward);
                black_box(target.len())
            });
        });
    }
    group.finish();
}

// Insert then erase right after randomly chosen cursors, so the list size stays fixed.
fn edit_after_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_after");

    for size in SIZES {
        let mut rng = StdRng::seed_from_u64(7);
        let mut offsets: Vec<usize> = (0..size).collect();
        offsets.shuffle(&mut rng);
        offsets.truncate(64);
        let mut list: ForwardList<usize> = (0..size).collect();

        group.throughput(Throughput::Elements(offsets.len() as u64));
        group.bench_function(BenchmarkId::new("forward_list", size), |b| {
            b.iter(|| {
                for &offset in &offsets {
                    let mut cursor = list.before_begin_mut();
                    for _ in 0..offset {
                        cursor.move_next();
                    }
                    let value = rng.random_range(0..size);
                    cursor.insert_after(value).expect("cursor is not at the end");
                    black_box(cursor.erase_after().expect("inserted element follows"));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    push_front_benchmark,
    iterate_benchmark,
    clone_benchmark,
    edit_after_benchmark
);
criterion_main!(benches);
