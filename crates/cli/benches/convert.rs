// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for dialect repair and in-memory conversion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use d2b_core::xml::render;
use d2b_core::{repair, Converter, Record, SequentialIds};

fn issue_text(n: usize) -> String {
    format!(
        r#"--- !ditz.rubyforge.org,2008-03-06/issue
title: `cmd {n}` fails on Mat\xC4\x9Bj's box
desc: |-
  Line one of issue {n}.
  Line two.
type: :bugfix
component: demo
release: "0.{r}"
reporter: Jo <jo@example.com>
status: :unstarted
disposition:
creation_time: 2012-02-23 22:09:58.749813 Z
references: []

id: {n:040x}
log_events:
- - 2012-02-23 22:09:59.877432 Z
  - Jo <jo@example.com>
  - commented
  - Still broken.
"#,
        n = n,
        r = n % 4
    )
}

fn dialect_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair");
    let text = issue_text(7);
    let clean = repair(&text).unwrap_or_default();

    group.bench_with_input(BenchmarkId::new("repair", "quirky"), &text, |b, t| {
        b.iter(|| repair(t))
    });
    group.bench_with_input(BenchmarkId::new("repair", "clean"), &clean, |b, t| {
        b.iter(|| repair(t))
    });
    group.finish();
}

fn conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for count in [10usize, 100, 1000] {
        let texts: Vec<String> = (0..count).map(issue_text).collect();
        group.bench_with_input(BenchmarkId::new("issues", count), &texts, |b, texts| {
            b.iter(|| {
                let mut converter = Converter::with_ids(SequentialIds::new());
                for text in texts {
                    if let Ok(issue) = Record::from_ditz(text).and_then(Record::into_issue) {
                        let _ = converter.add_issue(&issue);
                    }
                }
                render(&converter.finish())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, dialect_repair, conversion);
criterion_main!(benches);
