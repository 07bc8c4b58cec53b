//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Benchmarks for telnetscan performance

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use snoopix_telnetscan::{consts, normalize_line_breaks, skip_commands};
use std::hint::black_box;

// ============================================================================
// Skipping Benchmarks
// ============================================================================

fn bench_skip_plain(c: &mut Criterion) {
    let mut group = c.benchmark_group("skip_plain");

    group.bench_function("single_char", |b| {
        b.iter(|| skip_commands(black_box(b"a")));
    });

    group.bench_function("login_prompt", |b| {
        b.iter(|| skip_commands(black_box(b"login: ")));
    });

    group.finish();
}

fn bench_skip_negotiation(c: &mut Criterion) {
    let mut group = c.benchmark_group("skip_negotiation");

    for count in [1, 8, 64].iter() {
        let mut data = Vec::new();
        for _ in 0..*count {
            data.extend([consts::IAC, consts::DO, consts::option::ECHO]);
            data.extend([
                consts::IAC,
                consts::SB,
                consts::option::NAWS,
                0x00,
                0x50,
                0x00,
                0x18,
                consts::IAC,
                consts::SE,
            ]);
        }
        data.push(b'x');
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter(|| skip_commands(black_box(data)));
        });
    }

    group.finish();
}

// ============================================================================
// Text Benchmarks
// ============================================================================

fn bench_normalize(c: &mut Criterion) {
    let banner = b"Ubuntu 22.04.3 LTS\r\nhost login: ";
    c.bench_function("normalize_banner", |b| {
        b.iter(|| normalize_line_breaks(black_box(banner)));
    });
}

criterion_group!(skip_benches, bench_skip_plain, bench_skip_negotiation);

criterion_group!(text_benches, bench_normalize);

criterion_main!(skip_benches, text_benches);
