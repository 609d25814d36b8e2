// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_paged_list::{IndexRange, ListConfig, NoopReporter, Page, PagedList};

/// A list with `len` items loaded and more available.
fn loaded(len: usize) -> PagedList<u32> {
    let mut list = PagedList::new(ListConfig::new(24.0, 720.0), NoopReporter).unwrap();
    let ticket = list.on_scroll(0.0).unwrap();
    list.complete_page(ticket, Page::new((0..len as u32).collect(), true));
    list
}

fn bench_scroll_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("paged_list/scroll_pass");

    // A full scroll from top to bottom with a request pending the whole way,
    // which is the common case while a page is loading.
    for len in [1_000usize, 100_000] {
        let steps = 2_000usize;
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut list = loaded(len);
                    let end = list.max_scroll_offset();
                    let pending = list.on_scroll(end);
                    (list, end, pending)
                },
                |(mut list, end, pending)| {
                    for step in 0..steps {
                        let offset = end * step as f64 / steps as f64;
                        black_box(list.on_scroll(offset));
                    }
                    black_box(pending);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("paged_list/rows");

    // Row iteration cost should depend on the viewport, not the list length.
    for len in [1_000usize, 1_000_000] {
        let list = loaded(len);
        let visible = IndexRange::new(len / 2, len / 2 + 30);
        group.bench_with_input(BenchmarkId::from_parameter(len), &list, |b, list| {
            b.iter(|| {
                let placeholders = list
                    .rows(black_box(visible))
                    .filter(|row| row.is_placeholder())
                    .count();
                black_box(placeholders)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scroll_pass, bench_rows);
criterion_main!(benches);
