// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for masonry packing and scroll visibility.
//!
//! The layout is recomputed on every scroll event, so both the packer and
//! the visibility scan sit on the interaction hot path.

use criterion::{criterion_group, criterion_main, Criterion};
use kefka::config::defaults;
use kefka::gallery::{self, masonry};
use std::hint::black_box;

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("masonry");

    let entries = gallery::entries(&defaults::gallery_links());

    for columns in [1usize, 2, 3] {
        group.bench_function(format!("pack_{columns}_columns"), |b| {
            b.iter(|| black_box(masonry::pack(black_box(&entries), columns, 320.0, 16.0)));
        });
    }

    group.finish();
}

fn bench_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("masonry");

    let entries = gallery::entries(&defaults::gallery_links());
    let layout = masonry::pack(&entries, 3, 320.0, 16.0);

    group.bench_function("visible_indices_mid_scroll", |b| {
        b.iter(|| {
            black_box(masonry::visible_indices(
                black_box(&layout),
                1500.0,
                1700.0,
                800.0,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pack, bench_visibility);
criterion_main!(benches);
