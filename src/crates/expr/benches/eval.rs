use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

use lambda_expr::{Binary, Unary, _1, _2};

fn bench_shift(c: &mut Criterion) {
    let shift = 3 + _1 - 1;
    let closure = |a: i32| 3 + a - 1;

    c.bench_function("eval1_shift_tree", |b| {
        b.iter(|| (0..1024).map(|v| shift.eval1(black_box(v))).sum::<i32>())
    });
    c.bench_function("eval1_shift_closure", |b| {
        b.iter(|| (0..1024).map(|v| closure(black_box(v))).sum::<i32>())
    });
}

fn bench_sort(c: &mut Criterion) {
    let input: Vec<i32> = (0..4096).map(|v| (v * 7919) % 4099).collect();
    let ascending = _1.lt(_2);

    c.bench_function("sort_by_less_tree", |b| {
        b.iter_batched(
            || input.clone(),
            |mut values| {
                values.sort_by(|&x, &y| {
                    if ascending.eval2(x, y) {
                        std::cmp::Ordering::Less
                    } else if ascending.eval2(y, x) {
                        std::cmp::Ordering::Greater
                    } else {
                        std::cmp::Ordering::Equal
                    }
                });
                values
            },
            BatchSize::SmallInput,
        );
    });
    c.bench_function("sort_by_cmp", |b| {
        b.iter_batched(
            || input.clone(),
            |mut values| {
                values.sort();
                values
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_shift, bench_sort);
criterion_main!(benches);
