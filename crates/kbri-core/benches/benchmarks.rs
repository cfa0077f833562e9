use criterion::{criterion_group, criterion_main, Criterion};
use kbri_core::prelude::*;
use std::hint::black_box;

fn bench_query(c: &mut Criterion) {
    let catalog = Catalog::load().expect("bundled catalog");
    let query = NearestOfficeQuery::from_catalog(catalog.clone());
    let jakarta = GeoPoint::new(-6.2088, 106.8456).expect("valid point");

    c.bench_function("resolve exact", |b| {
        b.iter(|| query.resolver().resolve(black_box("Paris")))
    });
    c.bench_function("resolve region fallback", |b| {
        b.iter(|| query.resolver().resolve(black_box("New Jersey")))
    });
    c.bench_function("resolve miss", |b| {
        b.iter(|| query.resolver().resolve(black_box("Atlantis")))
    });
    c.bench_function("rank top 3", |b| {
        b.iter(|| query.index().rank(black_box(jakarta), 3))
    });
    c.bench_function("answer end-to-end", |b| {
        b.iter(|| query.answer(black_box("Lyon"), DEFAULT_TOP_K))
    });
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
