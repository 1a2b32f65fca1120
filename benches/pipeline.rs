use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use simplelang::{
    interpreter::{evaluator::core::Evaluator, lexer, parser::core::parse_program},
    run_program,
};

static INPUT: &str = include_str!("../demos/factorial.sl");

fn scan_only(source: &str) {
    let tokens = lexer::scan(source).expect("demo input scans");
    black_box(tokens);
}

fn parse_only(source: &str) {
    let tokens = lexer::scan(source).expect("demo input scans");
    let program = parse_program(&tokens).expect("demo input parses");
    black_box(program);
}

fn execute(source: &str) {
    let tokens = lexer::scan(source).expect("demo input scans");
    let program = parse_program(&tokens).expect("demo input parses");

    let mut sink = Vec::new();
    let mut evaluator = Evaluator::new(&mut sink);
    evaluator.run(&program).expect("demo input runs");
    black_box(sink);
}

fn full_pipeline(source: &str) {
    let mut sink = Vec::new();
    run_program(source, &mut sink).expect("demo input runs");
    black_box(sink);
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("scan", |b| b.iter(|| scan_only(black_box(INPUT))));
    c.bench_function("parse", |b| b.iter(|| parse_only(black_box(INPUT))));
    c.bench_function("execute", |b| b.iter(|| execute(black_box(INPUT))));
    c.bench_function("pipeline", |b| b.iter(|| full_pipeline(black_box(INPUT))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
