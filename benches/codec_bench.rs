use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io::Cursor;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use sparseboard::board::{demo_board, random_board};
use sparseboard::sparse::{decode, encode};
use sparseboard::store::{read_records, write_records};

fn bench_encode(c: &mut Criterion) {
    let demo = demo_board(10);
    c.bench_function("encode_demo_10x10", |b| b.iter(|| encode(black_box(&demo))));

    let dense = random_board(256, 0.2, &mut SmallRng::seed_from_u64(1));
    c.bench_function("encode_random_256x256", |b| {
        b.iter(|| encode(black_box(&dense)))
    });
}

fn bench_decode(c: &mut Criterion) {
    let grid = random_board(256, 0.2, &mut SmallRng::seed_from_u64(2));
    let records = encode(&grid);
    c.bench_function("decode_random_256x256", |b| {
        b.iter(|| decode(black_box(&records)).unwrap())
    });
}

fn bench_text_format(c: &mut Criterion) {
    let grid = random_board(256, 0.2, &mut SmallRng::seed_from_u64(3));
    let records = encode(&grid);

    c.bench_function("write_records_256x256", |b| {
        let mut buf = Vec::with_capacity(1 << 20);
        b.iter(|| {
            buf.clear();
            write_records(black_box(&records), &mut buf).unwrap();
        })
    });

    let mut text = Vec::new();
    write_records(&records, &mut text).unwrap();
    c.bench_function("read_records_256x256", |b| {
        b.iter(|| read_records(Cursor::new(black_box(&text)), Path::new("<bench>")).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_text_format);
criterion_main!(benches);
