//! Benchmarks for specification filtering
//!
//! Run with: cargo bench --package specification
//!
//! Compares the sequential and rayon-backed filters on a synthetic catalog.

use catalog::{Catalog, Color, Product, Size};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use specification::product::{ColorSpecification, SizeSpecification};
use specification::{BetterFilter, Filter, Specification};

fn build_catalog(len: usize) -> Catalog {
    (0..len)
        .map(|i| {
            Product::new(
                format!("Product {}", i),
                Color::ALL[i % Color::ALL.len()],
                Size::ALL[(i / 3) % Size::ALL.len()],
            )
        })
        .collect()
}

fn bench_sequential_filter(c: &mut Criterion) {
    let catalog = build_catalog(100_000);
    let spec = SizeSpecification::new(Size::Large).and(ColorSpecification::new(Color::Blue));

    c.bench_function("filter_large_blue", |b| {
        b.iter(|| {
            let selected = BetterFilter.filter(black_box(catalog.products()), &spec);
            black_box(selected)
        })
    });
}

fn bench_parallel_filter(c: &mut Criterion) {
    let catalog = build_catalog(100_000);
    let spec = SizeSpecification::new(Size::Large).and(ColorSpecification::new(Color::Blue));

    c.bench_function("par_filter_large_blue", |b| {
        b.iter(|| {
            let selected = BetterFilter.par_filter(black_box(catalog.products()), &spec);
            black_box(selected)
        })
    });
}

criterion_group!(benches, bench_sequential_filter, bench_parallel_filter);
criterion_main!(benches);
