// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use parapet_sha256::digest_bytes;

fn benchmark_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");

    // From a single padded block up to many chained blocks
    for msg_len in [0usize, 64, 256, 1024, 8192, 65536].iter() {
        group.throughput(Throughput::Bytes(*msg_len as u64));
        group.bench_with_input(format!("{} byte message", msg_len), msg_len, |b, &msg_len| {
            let msg = vec![0xa5u8; msg_len];

            b.iter(|| digest_bytes(black_box(&msg)).expect("digest failed"));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_sha256);
criterion_main!(benches);
