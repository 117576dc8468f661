use criterion::{criterion_group, criterion_main, Criterion};
use huffman::HuffmanTree;

fn sample() -> Vec<u8> {
    "The quick brown fox jumps over the lazy dog. "
        .repeat(200)
        .into_bytes()
}

fn bench_build(c: &mut Criterion) {
    let input = sample();
    c.bench_function("build_tree", |b| {
        b.iter(|| {
            let mut tree = HuffmanTree::new();
            tree.build_tree(&input).unwrap();
            tree
        })
    });
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let input = sample();
    let tree = HuffmanTree::from_symbols(&input).unwrap();

    group.bench_function("encode", |b| b.iter(|| tree.encode(&input).unwrap()));

    let encoded = tree.encode(&input).unwrap();
    group.bench_function("decode", |b| b.iter(|| tree.decode(&encoded).unwrap()));
    group.finish();
}

criterion_group!(benches, bench_build, bench_codec);
criterion_main!(benches);
