use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

mod common;

use common::{make_flowing, make_plain};

pub fn parse_benchmarks(c: &mut Criterion) {
    let cases = vec![
        ("plain_1k", make_plain(1000)),
        ("flowing_1k", make_flowing(1000)),
        ("flowing_10k", make_flowing(10_000)),
    ];
    let mut group = c.benchmark_group("parse_scsv");
    for (name, input) in cases {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(format!("str::{name}"), |b| {
            b.iter(|| {
                let doc = scsv::parse_str(black_box(&input), &scsv::Options::default()).unwrap();
                black_box(doc)
            })
        });
        group.bench_function(format!("reader::{name}"), |b| {
            b.iter_batched(
                || input.clone().into_bytes(),
                |bytes| {
                    let doc = scsv::parse_reader(bytes.as_slice(), &scsv::Options::default()).unwrap();
                    black_box(doc)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, parse_benchmarks);
criterion_main!(benches);
