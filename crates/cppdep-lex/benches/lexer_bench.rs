//! Lexer benchmarks
//!
//! Measures line splicing and directive-lexing throughput.
//! Run with: `cargo bench --package cppdep-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use cppdep_lex::{lex_line, splice};

fn total_tokens(source: &str) -> usize {
    splice(source)
        .iter()
        .map(|ll| lex_line(ll).map(|t| t.len()).unwrap_or(0))
        .sum()
}

fn bench_splice(c: &mut Criterion) {
    let mut group = c.benchmark_group("splice");

    let source = "#include <a.h>\n#include <b.h>\n#define FOO 1\n#if FOO\n#include <c.h>\n#endif\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_directives", |b| {
        b.iter(|| splice(black_box(source)))
    });

    let continued = "#define LONG_MACRO_NAME 1 + \\\n    2 + \\\n    3 + \\\n    4\n";
    group.bench_function("continuation", |b| {
        b.iter(|| splice(black_box(continued)))
    });

    group.finish();
}

fn bench_lex_directive(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex_directive");

    group.bench_function("include_angle", |b| {
        b.iter(|| total_tokens(black_box("#include <stdio.h>\n")))
    });

    group.bench_function("include_quoted", |b| {
        b.iter(|| total_tokens(black_box("#include \"local_header.h\"\n")))
    });

    let conditional = "#if defined(FOO) && !defined(BAR) && (VERSION >= 2)\n";
    group.bench_function("complex_conditional", |b| {
        b.iter(|| total_tokens(black_box(conditional)))
    });

    group.finish();
}

fn bench_lex_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex_file");

    let source = r#"
#ifndef HEADER_GUARD_H
#define HEADER_GUARD_H

#include <stdio.h>
#include <stdlib.h>
#include "local.h"

#define MAX_SIZE 128
#define FEATURE_ENABLED 1

#if FEATURE_ENABLED && (MAX_SIZE > 64)
#include <feature.h>
#endif

#undef MAX_SIZE

#endif
"#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("header_guard_file", |b| {
        b.iter(|| total_tokens(black_box(source)))
    });

    group.finish();
}

criterion_group!(benches, bench_splice, bench_lex_directive, bench_lex_file);
criterion_main!(benches);
