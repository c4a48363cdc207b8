//! Benchmarks comparing the sequential containers against each other.
//!
//! Run with: cargo bench
//!
//! Every group runs the same workload over all four kinds so the layout
//! trade-offs (contiguous buffer vs linked nodes) show up side by side.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use lineup_collections::{
    CircularLinkedList, DoublyLinkedList, DynamicArray, Sequence, SinglyLinkedList,
};

const COUNT: usize = 1024;

// ============================================================================
// Append Benchmarks
// ============================================================================

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    group.throughput(Throughput::Elements(COUNT as u64));

    let mut array = DynamicArray::new();
    group.bench_function("dynamic-array", |b| {
        b.iter(|| {
            for i in 0..COUNT as u64 {
                array.append(i).unwrap();
            }
            array.clear();
        });
    });

    let mut singly = SinglyLinkedList::new();
    group.bench_function("singly-linked-list", |b| {
        b.iter(|| {
            for i in 0..COUNT as u64 {
                singly.append(i).unwrap();
            }
            singly.clear();
        });
    });

    let mut doubly = DoublyLinkedList::new();
    group.bench_function("doubly-linked-list", |b| {
        b.iter(|| {
            for i in 0..COUNT as u64 {
                doubly.append(i).unwrap();
            }
            doubly.clear();
        });
    });

    let mut circular = CircularLinkedList::new();
    group.bench_function("circular-linked-list", |b| {
        b.iter(|| {
            for i in 0..COUNT as u64 {
                circular.append(i).unwrap();
            }
            circular.clear();
        });
    });

    group.finish();
}

// ============================================================================
// Indexed Read Benchmarks (Sequential Sweep)
// ============================================================================

fn bench_get_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_sequential");
    group.throughput(Throughput::Elements(COUNT as u64));

    let mut array = DynamicArray::new();
    let mut singly = SinglyLinkedList::new();
    let mut doubly = DoublyLinkedList::new();
    let mut circular = CircularLinkedList::new();
    for i in 0..COUNT as u64 {
        array.append(i).unwrap();
        singly.append(i).unwrap();
        doubly.append(i).unwrap();
        circular.append(i).unwrap();
    }

    group.bench_function("dynamic-array", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..COUNT as isize {
                sum += black_box(*array.get_at(i).unwrap());
            }
            sum
        });
    });

    group.bench_function("singly-linked-list", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..COUNT as isize {
                sum += black_box(*singly.get_at(i).unwrap());
            }
            sum
        });
    });

    group.bench_function("doubly-linked-list", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..COUNT as isize {
                sum += black_box(*doubly.get_at(i).unwrap());
            }
            sum
        });
    });

    group.bench_function("circular-linked-list", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..COUNT as isize {
                sum += black_box(*circular.get_at(i).unwrap());
            }
            sum
        });
    });

    group.finish();
}

// ============================================================================
// Front Insert Benchmarks
// ============================================================================

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");
    group.throughput(Throughput::Elements(COUNT as u64));

    group.bench_function("dynamic-array", |b| {
        b.iter_with_setup(
            || {
                let mut array = DynamicArray::new();
                array.append(0u64).unwrap();
                array
            },
            |mut array| {
                for i in 0..COUNT as u64 {
                    array.insert_at(0, i).unwrap();
                }
            },
        );
    });

    group.bench_function("singly-linked-list", |b| {
        b.iter_with_setup(
            || {
                let mut list = SinglyLinkedList::new();
                list.append(0u64).unwrap();
                list
            },
            |mut list| {
                for i in 0..COUNT as u64 {
                    list.insert_at(0, i).unwrap();
                }
            },
        );
    });

    group.bench_function("doubly-linked-list", |b| {
        b.iter_with_setup(
            || {
                let mut list = DoublyLinkedList::new();
                list.append(0u64).unwrap();
                list
            },
            |mut list| {
                for i in 0..COUNT as u64 {
                    list.insert_at(0, i).unwrap();
                }
            },
        );
    });

    group.bench_function("circular-linked-list", |b| {
        b.iter_with_setup(
            || {
                let mut ring = CircularLinkedList::new();
                ring.append(0u64).unwrap();
                ring
            },
            |mut ring| {
                for i in 0..COUNT as u64 {
                    ring.insert_at(0, i).unwrap();
                }
            },
        );
    });

    group.finish();
}

// ============================================================================
// Front Delete Benchmarks
// ============================================================================

fn bench_delete_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_front");
    group.throughput(Throughput::Elements(COUNT as u64));

    group.bench_function("dynamic-array", |b| {
        b.iter_with_setup(
            || {
                let mut array = DynamicArray::new();
                for i in 0..COUNT as u64 {
                    array.append(i).unwrap();
                }
                array
            },
            |mut array| {
                while !array.is_empty() {
                    black_box(array.delete_at(0).unwrap());
                }
            },
        );
    });

    group.bench_function("singly-linked-list", |b| {
        b.iter_with_setup(
            || {
                let mut list = SinglyLinkedList::new();
                for i in 0..COUNT as u64 {
                    list.append(i).unwrap();
                }
                list
            },
            |mut list| {
                while !list.is_empty() {
                    black_box(list.delete_at(0).unwrap());
                }
            },
        );
    });

    group.bench_function("doubly-linked-list", |b| {
        b.iter_with_setup(
            || {
                let mut list = DoublyLinkedList::new();
                for i in 0..COUNT as u64 {
                    list.append(i).unwrap();
                }
                list
            },
            |mut list| {
                while !list.is_empty() {
                    black_box(list.delete_at(0).unwrap());
                }
            },
        );
    });

    group.bench_function("circular-linked-list", |b| {
        b.iter_with_setup(
            || {
                let mut ring = CircularLinkedList::new();
                for i in 0..COUNT as u64 {
                    ring.append(i).unwrap();
                }
                ring
            },
            |mut ring| {
                while !ring.is_empty() {
                    black_box(ring.delete_at(0).unwrap());
                }
            },
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_append,
    bench_get_sequential,
    bench_insert_front,
    bench_delete_front,
);

criterion_main!(benches);
