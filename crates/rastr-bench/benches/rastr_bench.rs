//! Benchmarks for rastr hot paths.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rastr_bench::{sample_colors, sample_vec3, sample_vec4};
use rastr_color::{BlendMode, Color};
use rastr_math::{simd, Vec3};

/// Vector algebra on Vec3.
fn bench_vec3(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3");
    let a = sample_vec3(1024);
    let b: Vec<Vec3> = a.iter().rev().copied().collect();
    group.throughput(Throughput::Elements(a.len() as u64));

    group.bench_function("normalize", |bench| {
        bench.iter(|| a.iter().map(|v| black_box(*v).normalize()).collect::<Vec<_>>())
    });

    group.bench_function("angle", |bench| {
        bench.iter(|| {
            a.iter()
                .zip(&b)
                .map(|(x, y)| black_box(*x).angle(*y))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("slerp", |bench| {
        bench.iter(|| {
            a.iter()
                .zip(&b)
                .map(|(x, y)| black_box(*x).slerp(*y, 0.3))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("smooth_damp_60_frames", |bench| {
        bench.iter(|| {
            let mut pos = Vec3::ZERO;
            let mut vel = Vec3::ZERO;
            for _ in 0..60 {
                pos = pos.smooth_damp(black_box(Vec3::ONE), &mut vel, 0.25, None, 1.0 / 60.0);
            }
            pos
        })
    });

    group.finish();
}

/// Scalar vs SIMD batch packing.
fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");

    for size in [256, 4096, 65536].iter() {
        let values = sample_vec4(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("scalar_to_color32", size), &values, |b, v| {
            b.iter(|| v.iter().map(|x| black_box(*x).to_color32()).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("simd_to_color32", size), &values, |b, v| {
            b.iter(|| simd::batch_to_color32(black_box(v)))
        });

        group.bench_with_input(BenchmarkId::new("simd_clamp01", size), &values, |b, v| {
            b.iter(|| simd::batch_clamp01(black_box(v)))
        });
    }

    group.finish();
}

/// Color conversions and blending.
fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");
    let colors = sample_colors(1024);
    let bg = Color::from_html("#336699");
    group.throughput(Throughput::Elements(colors.len() as u64));

    group.bench_function("hsv_roundtrip", |b| {
        b.iter(|| {
            colors
                .iter()
                .map(|c| Color::from(black_box(*c).to_hsv()))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("hsl_roundtrip", |b| {
        b.iter(|| {
            colors
                .iter()
                .map(|c| Color::from(black_box(*c).to_hsl()))
                .collect::<Vec<_>>()
        })
    });

    for mode in BlendMode::ALL {
        group.bench_with_input(BenchmarkId::new("blend", mode), &mode, |b, &m| {
            b.iter(|| colors.iter().map(|c| black_box(*c).blend(bg, m)).collect::<Vec<_>>())
        });
    }

    group.bench_function("to_html_rgba", |b| {
        b.iter(|| colors.iter().map(|c| black_box(*c).to_html_rgba()).collect::<Vec<_>>())
    });

    group.finish();
}

criterion_group!(benches, bench_vec3, bench_pack, bench_color);
criterion_main!(benches);
