//! Lexer Benchmarks
//!
//! Measures lexer throughput over representative KPL sources.
//! Run with: `cargo bench --package kplc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kplc_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    // Lexer implements Iterator; a fault ends the count
    Lexer::new(source).take_while(Result::is_ok).count()
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "procedure main() -> Int32 { datum x: Int32 = 42; give x + 1; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_datum", |b| {
        b.iter(|| lexer_token_count(black_box("datum x: Nat8 = 42;")))
    });

    group.bench_function("procedure_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        \\ Fibonacci over machine words
        procedure fibonacci(n: Nat64) -> Nat64 {
            datum previous: Nat64 = 0x0;
            datum current: Nat64 = 0b1;
            \* walk the sequence
               one step per iteration *\
            datum scale: Int64 = 1_000_000;
            datum ratio = 1.618_033e0;
            give (n <= 1) && (current >> 2) || previous << 1 :: scale -> ratio;
        }

        procedure main() -> Int32 {
            datum limit: Int16 = 00090;
            give fibonacci(limit) == 2_880_067_194_370_816_120;
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_comments(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_comments");

    group.bench_function("line_comment", |b| {
        b.iter(|| lexer_token_count(black_box("give 1; \\\\ returns one\n")))
    });

    group.bench_function("block_comment", |b| {
        let source = "\\* This is a longer block comment that spans\n a couple of lines *\\ give 1;";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("natural", |b| {
        b.iter(|| lexer_token_count(black_box("datum x = 123_456;")))
    });

    group.bench_function("real", |b| {
        b.iter(|| lexer_token_count(black_box("datum x = 3.14159e-2;")))
    });

    group.bench_function("hex", |b| {
        b.iter(|| lexer_token_count(black_box("datum x = 0xDEAD_BEEF;")))
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| {
        b.iter(|| lexer_token_count(black_box("datum x = 42;")))
    });

    group.bench_function("long_ident", |b| {
        b.iter(|| lexer_token_count(black_box("datum very_long_variable_name = 42;")))
    });

    group.bench_function("many_ident", |b| {
        b.iter(|| {
            lexer_token_count(black_box(
                "datum a = 1; datum b = 2; datum c = 3; datum d = 4; datum e = 5;",
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_complex,
    bench_lexer_comments,
    bench_lexer_numbers,
    bench_lexer_identifiers
);
criterion_main!(benches);
