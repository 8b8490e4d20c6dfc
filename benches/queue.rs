use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linked_queue::OwnedQueue;
use std::collections::VecDeque;

fn bench_queue(c: &mut Criterion) {
    let n = 16;
    {
        let mut group = c.benchmark_group("VecDeque vs OwnedQueue (Enqueue 16)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut q = VecDeque::with_capacity(n);
                for i in 0..n {
                    q.push_back(black_box(i as i32));
                }
                q
            })
        });

        group.bench_function("OwnedQueue<i32>", |b| {
            b.iter(|| {
                let mut q = OwnedQueue::new();
                for i in 0..n {
                    q.enqueue(black_box(i as i32));
                }
                q
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs OwnedQueue (Cycle 16)");
        group.bench_function("std::collections::VecDeque", |b| {
            let mut q = VecDeque::with_capacity(n);
            b.iter(|| {
                for i in 0..n {
                    q.push_back(black_box(i as i32));
                }
                while let Some(x) = q.pop_front() {
                    black_box(x);
                }
            })
        });

        group.bench_function("OwnedQueue<i32>", |b| {
            let mut q = OwnedQueue::new();
            b.iter(|| {
                for i in 0..n {
                    q.enqueue(black_box(i as i32));
                }
                while let Some(x) = q.dequeue() {
                    black_box(x);
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("OwnedQueue (Map 16)");
        let mut q = OwnedQueue::new();
        for i in 0..n {
            q.enqueue(i as i32);
        }

        group.bench_function("map(x * 2)", |b| {
            b.iter(|| q.map(|&x| black_box(x) * 2))
        });
        group.finish();
    }
}

criterion_group!(benches, bench_queue);
criterion_main!(benches);
