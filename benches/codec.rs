use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huffcodec::{compress, decode, FrequencyTable, HuffmanTree};
use rand::{Rng, SeedableRng};

fn criterion_benchmark(c: &mut Criterion) {
    const TEXT_SIZE: usize = 256 * 1024;

    // Skewed towards low symbols so the codes have a realistic spread of lengths
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xDEADBEEF);
    let text: String = (0..TEXT_SIZE)
        .map(|_| {
            let a: u8 = rng.gen();
            let b: u8 = rng.gen();
            char::from(a.min(b))
        })
        .collect();

    let encoded = compress(&text).unwrap();
    let tree = encoded.tree().unwrap();

    c.bench_function("build tree", |b| {
        let frequencies = FrequencyTable::from_text(&text).unwrap();
        b.iter(|| HuffmanTree::build(black_box(&frequencies)))
    });
    c.bench_function("compress", |b| b.iter(|| compress(black_box(&text))));
    c.bench_function("decode", |b| {
        b.iter(|| decode(black_box(encoded.bits()), black_box(tree)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
