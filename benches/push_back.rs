use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

use dynamic_array::contiguous::{Vector, VectorOption};

const PUSHES: usize = 1024;

pub fn benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Vector push_back");

    group.bench_function(
        BenchmarkId::new("push_back", "preallocated"),
        |b| b.iter_batched_ref(
            || Vector::with_options([VectorOption::Capacity(PUSHES as isize)]),
            |vec| for i in 0..PUSHES {
                vec.push_back(black_box(i));
            },
            BatchSize::SmallInput
        )
    );

    group.bench_function(
        BenchmarkId::new("push_back", "growing"),
        |b| b.iter_batched_ref(
            Vector::new,
            |vec| for i in 0..PUSHES {
                vec.push_back(black_box(i));
            },
            BatchSize::SmallInput
        )
    );

    group.bench_function(
        BenchmarkId::new("insert", "front"),
        |b| b.iter_batched_ref(
            || Vector::from_iter(0..PUSHES),
            |vec| vec.insert(0, black_box(PUSHES)),
            BatchSize::SmallInput
        )
    );

    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
