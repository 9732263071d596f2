use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cayley_numbers::float_field;
use cayley_poly::{poly_ring, roots, Polynomial};

fn cubic_roots(c: &mut Criterion) {
    let f = Arc::new(float_field());
    let p = Polynomial::new(&f, vec![-6.0, 11.0, -6.0, 1.0]);
    c.bench_function("cubic_roots", |b| {
        b.iter(|| roots(black_box(&p)));
    });
}

fn poly_mul_16(c: &mut Criterion) {
    let f = Arc::new(float_field());
    let ring = poly_ring(&f);
    let coeffs: Vec<f64> = (0..16).map(f64::from).collect();
    let p = Polynomial::new(&f, coeffs);
    c.bench_function("poly_mul_16", |b| {
        b.iter(|| ring.mul(black_box(&p), black_box(&p)));
    });
}

criterion_group!(benches, cubic_roots, poly_mul_16);
criterion_main!(benches);
