// ─────────────────────────────────────────────────────────────────────
// Numkern — Lane Kernel Benchmarks
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use numkern_math::limiter::FluxLimiter;
use numkern_simd::{
    exp_slice, limiter_slice, log_slice, map, math, sin_slice, AlignedBuffer, F32x8, F64x2, F64x4,
    F64x8, LaneOps, Lanes,
};
use std::hint::black_box;

const N: usize = 4096;

fn inputs(lo: f64, hi: f64) -> Vec<f64> {
    (0..N)
        .map(|i| lo + (hi - lo) * i as f64 / (N - 1) as f64)
        .collect()
}

fn bench_exp_widths(c: &mut Criterion) {
    let xs = inputs(-50.0, 50.0);
    let mut out = vec![0.0; N];
    let mut group = c.benchmark_group("exp_f64_4096");
    group.bench_function("scalar", |b| {
        b.iter(|| {
            for (o, &x) in out.iter_mut().zip(&xs) {
                *o = numkern_math::exp(black_box(x));
            }
        })
    });
    group.bench_function(BenchmarkId::new(F64x2::ISA.name(), F64x2::LANES), |b| {
        b.iter(|| exp_slice::<F64x2>(black_box(&xs), &mut out))
    });
    group.bench_function(BenchmarkId::new(F64x4::ISA.name(), F64x4::LANES), |b| {
        b.iter(|| exp_slice::<F64x4>(black_box(&xs), &mut out))
    });
    group.bench_function(BenchmarkId::new(F64x8::ISA.name(), F64x8::LANES), |b| {
        b.iter(|| exp_slice::<F64x8>(black_box(&xs), &mut out))
    });
    group.bench_function("portable_x4", |b| {
        b.iter(|| exp_slice::<Lanes<f64, 4>>(black_box(&xs), &mut out))
    });
    group.finish();
}

fn bench_kernels_f64x4(c: &mut Criterion) {
    let mut group = c.benchmark_group("f64x4_4096");
    let pos = inputs(1.0e-3, 1.0e3);
    let wide = inputs(-100.0, 100.0);
    let mut out = vec![0.0; N];
    group.bench_function("log", |b| b.iter(|| log_slice::<F64x4>(black_box(&pos), &mut out)));
    group.bench_function("sin", |b| b.iter(|| sin_slice::<F64x4>(black_box(&wide), &mut out)));
    group.bench_function("atan", |b| {
        b.iter(|| map::<F64x4, _>(math::atan::<F64x4>, black_box(&wide), &mut out))
    });
    group.bench_function("erf", |b| {
        b.iter(|| map::<F64x4, _>(math::erf::<F64x4>, black_box(&wide), &mut out))
    });
    group.finish();
}

fn bench_f32x8_aligned(c: &mut Criterion) {
    let mut src = AlignedBuffer::<f32>::for_lanes::<F32x8>(N).unwrap();
    for (s, x) in src.iter_mut().zip(inputs(-20.0, 20.0)) {
        *s = x as f32;
    }
    let mut dst = AlignedBuffer::<f32>::for_lanes::<F32x8>(N).unwrap();
    c.bench_function("sin_f32x8_aligned_4096", |b| {
        b.iter(|| sin_slice::<F32x8>(black_box(&src), &mut dst))
    });
}

fn bench_limiters(c: &mut Criterion) {
    let d1 = inputs(-2.0, 3.0);
    let d2 = inputs(1.0, -0.5);
    let mut out = vec![0.0; N];
    let mut group = c.benchmark_group("limiter_f64x4_4096");
    for kind in [FluxLimiter::Superbee, FluxLimiter::VanLeer, FluxLimiter::MonotonizedCentral] {
        group.bench_function(kind.name(), |b| {
            b.iter(|| limiter_slice::<F64x4>(kind, black_box(&d1), &d2, &mut out))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_exp_widths,
    bench_kernels_f64x4,
    bench_f32x8_aligned,
    bench_limiters
);
criterion_main!(benches);
