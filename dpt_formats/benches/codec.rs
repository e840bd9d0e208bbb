// benches/codec.rs

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dpt_formats::*;
use rand::Rng;

const SAMPLES: usize = 1_000;

fn random_floats() -> Vec<f32> {
    let mut rng = rand::rng();
    (0..SAMPLES)
        .map(|_| rng.random_range(Float16::MIN..=Float16::MAX))
        .collect()
}

fn bench_f16(c: &mut Criterion) {
    let values = random_floats();
    let frames: Vec<[u8; 3]> = values.iter().map(|&v| pack_f16(v)).collect();

    let mut group = c.benchmark_group("f16");
    group.bench_function("pack", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(pack_f16(black_box(v)));
            }
        });
    });
    group.bench_function("unpack", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for frame in &frames {
                sum += unpack_f16(black_box(frame)).unwrap();
            }
            sum
        });
    });
    group.finish();
}

fn bench_words(c: &mut Criterion) {
    let mut rng = rand::rng();
    let values: Vec<i32> = (0..SAMPLES).map(|_| rng.random()).collect();
    let frames: Vec<[u8; 5]> = values.iter().map(|&v| pack_v32(v)).collect();

    let mut group = c.benchmark_group("v32");
    group.bench_function("pack", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(pack_v32(black_box(v)));
            }
        });
    });
    group.bench_function("unpack", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for frame in &frames {
                sum += i64::from(unpack_v32(black_box(frame)).unwrap());
            }
            sum
        });
    });
    group.finish();
}

fn bench_u32(c: &mut Criterion) {
    let mut rng = rand::rng();
    let values: Vec<u32> = (0..SAMPLES).map(|_| rng.random()).collect();
    let frames: Vec<[u8; 5]> = values.iter().map(|&v| pack_u32(v)).collect();

    let mut group = c.benchmark_group("u32");
    group.bench_function("pack", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(pack_u32(black_box(v)));
            }
        });
    });
    group.bench_function("unpack", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for frame in &frames {
                sum += u64::from(unpack_u32(black_box(frame)).unwrap());
            }
            sum
        });
    });
    group.finish();
}

fn bench_u8(c: &mut Criterion) {
    let mut group = c.benchmark_group("u8");
    group.bench_function("pack", |b| {
        b.iter(|| {
            for value in 0..=u8::MAX {
                black_box(pack_u8(black_box(value)));
            }
        });
    });
    group.bench_function("unpack", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for value in 0..=u8::MAX {
                sum += u32::from(unpack_u8(black_box(&[0, value])).unwrap());
            }
            sum
        });
    });
    group.finish();
}

fn bench_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("b1");
    group.bench_function("roundtrip", |b| {
        b.iter(|| {
            for value in [true, false] {
                let frame = pack_b1(black_box(value));
                black_box(unpack_b1(&frame).unwrap());
            }
        });
    });
    group.finish();

    let mut group = c.benchmark_group("b1u3");
    group.bench_function("roundtrip", |b| {
        b.iter(|| {
            for value in 0..=7u8 {
                let frame = pack_b1u3(black_box(value % 2 == 0), black_box(value));
                black_box(unpack_b1u3(&frame).unwrap());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_f16, bench_words, bench_u32, bench_u8, bench_bits);
criterion_main!(benches);
