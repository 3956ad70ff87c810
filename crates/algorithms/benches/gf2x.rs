use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hqcrypt_algorithms::expand::SeedExpander;
use hqcrypt_algorithms::gf2x::prelude::*;
use hqcrypt_algorithms::gf2x::sampling;

fn bench_multiply(c: &mut Criterion) {
    let mut ctx = SeedExpander::from_seed([1u8; 32]);
    let a1 = sampling::random_fixed_weight::<Hqc128Ring, _>(&mut ctx, Hqc128Ring::OMEGA).unwrap();
    let a2 = sampling::random_dense::<Hqc128Ring, _>(&mut ctx);

    c.bench_function("gf2x/multiply/hqc-128", |b| {
        b.iter(|| multiply(black_box(&a1), black_box(&a2), &mut ctx))
    });

    c.bench_function("gf2x/masked_multiply/hqc-128", |b| {
        b.iter(|| masked_multiply(black_box(&a1), black_box(&a2), &mut ctx).unwrap())
    });
}

fn bench_sampling(c: &mut Criterion) {
    let mut ctx = SeedExpander::from_seed([2u8; 32]);

    c.bench_function("gf2x/random_fixed_weight/hqc-128", |b| {
        b.iter(|| sampling::random_fixed_weight::<Hqc128Ring, _>(&mut ctx, Hqc128Ring::OMEGA).unwrap())
    });
}

criterion_group!(benches, bench_multiply, bench_sampling);
criterion_main!(benches);
