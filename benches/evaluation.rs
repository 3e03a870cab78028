use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pratt_calc::{Parser, numeric::DefaultTraits};

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let parser = Parser::<DefaultTraits>::new();
    let expr = "2 + 3 * 4";
    let tree = parser.parse(expr).unwrap();

    group.bench_function("full_pipeline", |b| b.iter(|| parser.evaluate(black_box(expr)).unwrap()));

    group.bench_function("prebuilt_tree", |b| b.iter(|| black_box(&tree).evaluate()));

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0_f64) + black_box(3.0_f64) * black_box(4.0_f64))
    });

    group.finish();
}

/// Benchmark expressions using functions, constants and implicit multiplication
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let parser = Parser::<DefaultTraits>::new();
    let expr = "2pi(3 + sqrt(16)) / max(1, 2, 3)^2 - -4! + avg(1, 2, 3, 4)";
    let tree = parser.parse(expr).unwrap();

    group.bench_function("full_pipeline", |b| b.iter(|| parser.evaluate(black_box(expr)).unwrap()));

    group.bench_function("parse_only", |b| b.iter(|| parser.parse(black_box(expr)).unwrap()));

    group.bench_function("prebuilt_tree", |b| b.iter(|| black_box(&tree).evaluate()));

    group.finish();
}

/// Benchmark rejection of malformed input
fn benchmark_validation_failure(c: &mut Criterion) {
    let parser = Parser::<DefaultTraits>::new();

    c.bench_function("rejected_expression", |b| {
        b.iter(|| parser.evaluate(black_box("(1 + 2 * (3 - 4) 5")).is_err())
    });
}

criterion_group!(benches,
                 benchmark_simple_arithmetic,
                 benchmark_complex_arithmetic,
                 benchmark_validation_failure);
criterion_main!(benches);
