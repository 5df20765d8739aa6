//! Benchmarks for cart aggregation.

use common::Money;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use domain::{Cart, CartLine, Size};

fn bench_cart_add_merge(c: &mut Criterion) {
    c.bench_function("cart_add_merge_100", |b| {
        b.iter(|| {
            let mut cart = Cart::new();
            for i in 0..100u32 {
                let name = format!("Item-{}", i % 10);
                cart.add(CartLine::new(
                    name,
                    if i % 2 == 0 { Size::Half } else { Size::Full },
                    Money::from_rupees(100),
                    1,
                ));
            }
            black_box(cart)
        });
    });
}

fn bench_cart_total(c: &mut Criterion) {
    let mut cart = Cart::new();
    for i in 0..50u32 {
        cart.add(CartLine::new(
            format!("Item-{i}"),
            Size::Full,
            Money::from_rupees(100 + i as i64),
            i + 1,
        ));
    }

    c.bench_function("cart_total_50_lines", |b| {
        b.iter(|| black_box(cart.total()));
    });
}

criterion_group!(benches, bench_cart_add_merge, bench_cart_total);
criterion_main!(benches);
