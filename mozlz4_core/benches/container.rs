use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mozlz4_core::{decode, encode};

/// Repetitive JSON resembling a Firefox sessionstore file.
fn session_like(len: usize) -> Vec<u8> {
    let entry = br#"{"url":"https://example.org/","title":"Example Domain","charset":"UTF-8","ID":12345},"#;
    let mut out = Vec::with_capacity(len + entry.len());
    out.push(b'[');
    while out.len() < len {
        out.extend_from_slice(entry);
    }
    out.truncate(len);
    out
}

fn bench_container(c: &mut Criterion) {
    let mut group = c.benchmark_group("container");
    for size in [4 * 1024, 256 * 1024, 4 * 1024 * 1024] {
        let data = session_like(size);
        let container = encode(&data).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| encode(black_box(data)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &container, |b, container| {
            b.iter(|| decode(black_box(container)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_container);
criterion_main!(benches);
