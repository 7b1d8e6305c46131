use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{
    generator_naf_table, generator_table, vartime_double_base_mul, Affine, FixedBaseTable, Group,
    Projective, RandomField, ScalarField,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_scalar(rng: &mut StdRng) -> ScalarField {
    ScalarField::random(rng)
}

fn bench_affine_add(c: &mut Criterion) {
    let g = Affine::generator();
    let h = Affine::generator_pedersen();
    c.bench_function("Affine point addition", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_projective_add(c: &mut Criterion) {
    let g = Projective::generator();
    let h = Projective::generator_pedersen();
    c.bench_function("Projective point addition", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_projective_double(c: &mut Criterion) {
    let g = Projective::generator();
    c.bench_function("Projective point doubling", |bencher| {
        bencher.iter(|| black_box(black_box(g).double()))
    });
}

fn bench_fixed_base_scalar_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);
    let table = generator_table();

    c.bench_function("Constant-time fixed-base scalar mul", |bencher| {
        bencher.iter(|| black_box(table.mul(black_box(&scalar))))
    });
}

fn bench_fixed_base_table_creation(c: &mut Criterion) {
    let h = Projective::generator_pedersen();
    c.bench_function("Fixed-base table creation", |bencher| {
        bencher.iter(|| black_box(FixedBaseTable::new(black_box(&h))))
    });
}

fn bench_variable_base_scalar_mul(c: &mut Criterion) {
    let h = Projective::generator_pedersen();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("Constant-time variable-base scalar mul", |bencher| {
        bencher.iter(|| black_box(black_box(h).scalar_mul(black_box(&scalar))))
    });
}

fn bench_double_base_scalar_mul(c: &mut Criterion) {
    let h = Projective::generator_pedersen();
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_scalar(&mut rng);
    let b = random_scalar(&mut rng);
    // warm the shared generator table outside the measurement
    let _ = generator_naf_table();

    c.bench_function("Variable-time double-base scalar mul", |bencher| {
        bencher.iter(|| black_box(vartime_double_base_mul(black_box(&a), &h, black_box(&b))))
    });
}

criterion_group!(
    benches,
    bench_affine_add,
    bench_projective_add,
    bench_projective_double,
    bench_fixed_base_scalar_mul,
    bench_fixed_base_table_creation,
    bench_variable_base_scalar_mul,
    bench_double_base_scalar_mul
);
criterion_main!(benches);
