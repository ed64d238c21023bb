//! Criterion benchmarks for leveled_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use leveled_logger::prelude::*;
use leveled_logger::{info, DEFAULT_TEMPLATE, DEFAULT_TIME_FORMAT};
use std::io::{self, Write};

/// Discards everything; isolates dispatch cost from I/O
struct NullWriter;

impl Write for NullWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// Gating Benchmarks
// ============================================================================

fn bench_gated_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("gated_out");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .min_level(LogLevel::ERROR)
        .handler(StreamHandler::new(NullWriter))
        .build();

    group.bench_function("below_logger_level", |b| {
        b.iter(|| logger.debug(format_args!("value {}", black_box(42))));
    });

    let filtered = Logger::builder()
        .filter(|_: &Record| false)
        .handler(StreamHandler::new(NullWriter))
        .build();

    group.bench_function("logger_filter_denies", |b| {
        b.iter(|| filtered.info(format_args!("value {}", black_box(42))));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let bare = Logger::builder()
        .handler(StreamHandler::new(NullWriter))
        .build();

    group.bench_function("no_formatter", |b| {
        b.iter(|| bare.info(format_args!("value {}", black_box(42))));
    });

    let templated = Logger::builder()
        .handler(StreamHandler::new(NullWriter).with_formatter(Formatter::default()))
        .build();

    group.bench_function("default_template", |b| {
        b.iter(|| info!(templated, "value {}", black_box(42)));
    });

    let fan_out = Logger::builder()
        .handler(StreamHandler::new(NullWriter).with_formatter(Formatter::default()))
        .handler(StreamHandler::new(NullWriter).with_formatter(Formatter::plain()))
        .handler(StreamHandler::new(NullWriter).with_level(LogLevel::CRITICAL))
        .build();

    group.bench_function("three_handlers", |b| {
        b.iter(|| info!(fan_out, "value {}", black_box(42)));
    });

    group.finish();
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatter");

    group.bench_function("parse_default_template", |b| {
        b.iter(|| Formatter::new(black_box(DEFAULT_TEMPLATE), DEFAULT_TIME_FORMAT));
    });

    let formatter = Formatter::default();
    let record = Record::new(
        LogLevel::WARNING,
        CallSite::new(Some("bench::render"), "benches/logger_benchmarks.rs", 1),
        format_args!("disk usage at {}%", 91),
    );

    group.bench_function("render", |b| {
        b.iter(|| black_box(formatter.render(black_box(&record))));
    });

    group.finish();
}

criterion_group!(benches, bench_gated_out, bench_dispatch, bench_formatter);
criterion_main!(benches);
