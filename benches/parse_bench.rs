use criterion::{black_box, criterion_group, criterion_main, Criterion};

use meow::services::parser::parse;

const DEBTS: &[u8] = br#"{"type":"DebtsRequest","meowVersion":"1.0","user":"alice","password":"p","currency":"USD","offeree":"bob"}"#;
const NEW_DEBT: &[u8] = br#"{"type":"NewDebtRequest","meowVersion":"1.0","user":"alice","password":"p","lender":"alice","borrower":"bob","currency":"EUR","amount":500,"text":"dinner"}"#;
const UNKNOWN: &[u8] = br#"{"type":"Bogus","meowVersion":"1.0","user":"alice","password":"p"}"#;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("debts_request", |b| {
        b.iter(|| parse(black_box(DEBTS)).unwrap())
    });

    group.bench_function("new_debt_request", |b| {
        b.iter(|| parse(black_box(NEW_DEBT)).unwrap())
    });

    group.bench_function("unknown_variant", |b| {
        b.iter(|| parse(black_box(UNKNOWN)).unwrap_err())
    });

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
