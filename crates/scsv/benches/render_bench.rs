use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn make_doc(rows: usize, cols: usize) -> scsv::ParsedDocument {
    let mut s = String::new();
    for i in 0..rows {
        s.push_str(&format!("key{}", i % 16));
        for c in 0..cols {
            s.push_str(&format!(",c{}_{}", i, c));
        }
        s.push('\n');
    }
    scsv::parse_str(&s, &scsv::Options::default()).unwrap()
}

pub fn render_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_csv");
    for (name, doc) in [("narrow_1k", make_doc(1000, 1)), ("wide_1k", make_doc(1000, 8))] {
        let size = scsv::to_csv_string(&doc).len();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("string::{name}"), |b| {
            b.iter(|| black_box(scsv::to_csv_string(black_box(&doc))))
        });
        group.bench_function(format!("writer::{name}"), |b| {
            b.iter(|| {
                let mut out = Vec::with_capacity(size);
                scsv::write_csv(&mut out, black_box(&doc)).unwrap();
                black_box(out)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, render_benchmarks);
criterion_main!(benches);
