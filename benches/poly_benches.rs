use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use RustedPolyCalc::Examples::polynomial_examples::poly_examples;
use RustedPolyCalc::polynomial::parse_poly::parse_polynomial;
use RustedPolyCalc::polynomial::poly_algebra::Polynomial;
use RustedPolyCalc::polynomial::term::Term;

fn long_expression(n: u32) -> String {
    (0..n)
        .map(|i| format!("{}{}.5x^{}", if i % 2 == 0 { "+" } else { "-" }, i, i))
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_parse(c: &mut Criterion) {
    let input = long_expression(200);
    c.bench_function("parse 200 terms", |b| {
        b.iter(|| parse_polynomial(black_box(&input)))
    });
}

fn bench_multiply(c: &mut Criterion) {
    let first: Polynomial = (0..60).map(|i| Term::new(i as f64 + 0.5, i)).collect();
    let second: Polynomial = (0..60).map(|i| Term::new(1.0 - i as f64, i)).collect();
    c.bench_function("multiply 60x60 terms", |b| {
        b.iter(|| black_box(&first).multiply(black_box(&second)))
    });
}

fn bench_example_2(c: &mut Criterion) {
    c.bench_function("poly example 2", |b| b.iter(|| poly_examples(2)));
}

criterion_group!(benches, bench_parse, bench_multiply, bench_example_2);
criterion_main!(benches);
