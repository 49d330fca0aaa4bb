//! Benchmarks for color profile extraction and the full identification path

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flora_identifier::chat::answer;
use flora_identifier::identify::{identify_bytes, ColorProfile};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn leafy_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        if (x / 16 + y / 16) % 3 == 0 {
            Rgb([200, 40, 60])
        } else {
            Rgb([50, 160, 60])
        }
    });
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn benchmark_profile_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_profile");
    for side in [224u32, 640, 1280] {
        let bytes = leafy_png(side, side);
        group.bench_with_input(BenchmarkId::from_parameter(side), &bytes, |b, bytes| {
            b.iter(|| ColorProfile::from_bytes(black_box(bytes)).unwrap())
        });
    }
    group.finish();
}

fn benchmark_identification(c: &mut Criterion) {
    let bytes = leafy_png(640, 480);
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("identify_bytes_640x480", |b| {
        b.iter(|| identify_bytes(black_box(&bytes), &mut rng))
    });
}

fn benchmark_chat(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("chat_answer_in_domain", |b| {
        b.iter(|| answer(black_box("How do I propagate my pothos from cuttings?"), &mut rng))
    });

    c.bench_function("chat_answer_refusal", |b| {
        b.iter(|| answer(black_box("What is the capital of France?"), &mut rng))
    });
}

criterion_group!(
    benches,
    benchmark_profile_extraction,
    benchmark_identification,
    benchmark_chat
);
criterion_main!(benches);
