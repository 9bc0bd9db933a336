use criterion::{criterion_group, criterion_main, Criterion};
use static_huffman::{decode, encode, Artifact, CodeTable, FrequencyTable, HuffmanTree};
use std::hint::black_box;

fn sample() -> Vec<u8> {
    // skewed distribution over the full byte range
    (0..64 * 1024u32)
        .map(|i| ((i * i) % 251 % (1 + i % 97)) as u8)
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let input = sample();
    let freq = FrequencyTable::from_symbols(input.iter().copied());

    c.bench_function("count_frequencies", |b| {
        b.iter(|| FrequencyTable::from_symbols(black_box(&input).iter().copied()))
    });
    c.bench_function("build_tree_and_table", |b| {
        b.iter(|| CodeTable::from_tree(&HuffmanTree::build(black_box(&freq)).unwrap()))
    });
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let input = sample();
    let table = CodeTable::from_tree(&HuffmanTree::from_symbols(input.iter().copied()).unwrap());
    let bits = encode(&input, &table).unwrap();
    let text = Artifact::new(table.clone(), bits.clone()).to_text();

    group.bench_function("encode", |b| b.iter(|| encode(black_box(&input), &table).unwrap()));
    group.bench_function("decode", |b| b.iter(|| decode(black_box(&bits), &table).unwrap()));
    group.bench_function("parse_artifact", |b| {
        b.iter(|| Artifact::<u8>::parse(black_box(&text)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_codec);
criterion_main!(benches);
