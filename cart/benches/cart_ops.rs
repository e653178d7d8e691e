// benches/cart_ops.rs

use cart::Cart;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn create_cart(size: usize) -> Cart<u32> {
    let mut cart = Cart::with_capacity(size).unwrap();
    for i in 0..size {
        cart.add(i as u32 % 64);
    }
    cart
}

fn bench_add(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("add");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &s| {
            b.iter(|| {
                let mut cart = Cart::with_capacity(s).unwrap();
                for i in 0..s {
                    cart.add(black_box(i as u32));
                }
                cart
            });
        });
    }
    group.finish();
}

fn bench_remove_item(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("remove_item");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &s| {
            b.iter_batched(
                || create_cart(s),
                |mut cart| {
                    // Worst case: scan the whole cart for an absent value.
                    cart.remove_item(black_box(&u32::MAX));
                    cart.remove_item(black_box(&0));
                    cart
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_frequency_of(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("frequency_of");
    for size in sizes {
        let cart = create_cart(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| cart.frequency_of(black_box(&7)));
        });
    }
    group.finish();
}

fn bench_to_vec(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("to_vec");
    for size in sizes {
        let cart = create_cart(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(cart.to_vec()));
        });
    }
    group.finish();
}

criterion_group!(
    cart_benches,
    bench_add,
    bench_remove_item,
    bench_frequency_of,
    bench_to_vec
);

criterion_main!(cart_benches);
