//! Benchmarks for table construction and scanning

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pylex_fa::{compile, Scanner};
use pylex_re::parse_rules;

const RULES: &[u8] = b"def\nif\nelse\nreturn\n[A-Za-z_][A-Za-z0-9_]*\n[0-9]+\n\"[^\"\n]*\"\n#[^\n]*\n[-+*/=<>]\n[]()[{},:.;]\n\\n\n( |\\t)+";

fn source() -> String {
    "def fib(n):\n    if n < 2:\n        return n\n    return fib(n - 1) + fib(n - 2)  # slow\n"
        .repeat(100)
}

fn bench_compile(c: &mut Criterion) {
    let rules = parse_rules(RULES).unwrap();

    c.bench_function("compile_minimized", |b| {
        b.iter(|| compile(black_box(&rules), true).unwrap())
    });

    c.bench_function("compile_unminimized", |b| {
        b.iter(|| compile(black_box(&rules), false).unwrap())
    });
}

fn bench_scan(c: &mut Criterion) {
    let table = compile(&parse_rules(RULES).unwrap(), true).unwrap();
    let source = source();

    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("python_like", |b| {
        b.iter(|| {
            let scanner = Scanner::new(table.clone(), black_box(source.as_bytes()));
            scanner.map(|t| t.unwrap().lexeme.len()).sum::<usize>()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_compile, bench_scan);
criterion_main!(benches);
