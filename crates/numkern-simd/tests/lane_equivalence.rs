// ─────────────────────────────────────────────────────────────────────
// Numkern — Lane/Scalar Equivalence for numkern-simd
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Every vector kernel against its scalar counterpart, for each width
//! alias compiled on this target and a few odd portable widths.
//!
//! Inputs mix seeded random samples with NaN, signed zeros, infinities,
//! subnormals and the extremes of each tier.

use numkern_math::acceptance::{minimal_multiplier, worst_pair};
use numkern_math::limiter::FluxLimiter;
use numkern_simd::{map, map2, math, LaneOps, Lanes};
use numkern_types::config::AcceptanceConfig;
use numkern_types::tier::FloatTier;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vector results must sit within this multiple of epsilon of the
/// scalar ones.
const LANE_LIMIT: u32 = 4;

struct Unary<T: FloatTier, V> {
    name: &'static str,
    vector: fn(V) -> V,
    scalar: fn(T) -> T,
    range: (f64, f64),
    log_scale: bool,
}

fn specials<T: FloatTier>() -> Vec<T> {
    vec![
        T::NAN,
        T::INFINITY,
        T::NEG_INFINITY,
        T::ZERO,
        -T::ZERO,
        T::ONE,
        -T::ONE,
        T::HALF,
        T::MIN_POSITIVE,
        T::MIN_POSITIVE * T::from_f64(0.25),
        -T::MIN_POSITIVE * T::from_f64(0.25),
        T::MAX,
        -T::MAX,
        T::EPSILON,
    ]
}

fn samples<T: FloatTier>(seed: u64, count: usize, (lo, hi): (f64, f64), log_scale: bool) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut xs = specials::<T>();
    for _ in 0..count {
        let v = rng.gen_range(lo..=hi);
        let x = if log_scale { 10f64.powf(v) } else { v };
        xs.push(T::from_f64(x));
    }
    xs
}

fn assert_close<T: FloatTier>(what: &str, isa: &str, pairs: &[(T, T)]) {
    let k = minimal_multiplier(pairs, LANE_LIMIT);
    assert!(k.is_some(), "{what} on {isa}: worst {:?}", worst_pair(pairs));
}

// ── Drivers ──────────────────────────────────────────────────────────

fn unary_cases<V: LaneOps>() -> Vec<Unary<V::Scalar, V>> {
    macro_rules! unary {
        ($f:ident, $lo:expr, $hi:expr, $log:expr) => {
            Unary {
                name: stringify!($f),
                vector: math::$f::<V>,
                scalar: numkern_math::$f::<V::Scalar>,
                range: ($lo, $hi),
                log_scale: $log,
            }
        };
    }
    vec![
        unary!(exp2, -1100.0, 1100.0, false),
        unary!(exp, -760.0, 720.0, false),
        unary!(exp10, -330.0, 320.0, false),
        unary!(expm1, -3.0, 3.0, false),
        unary!(log, -320.0, 308.0, true),
        unary!(log2, -40.0, 38.0, true),
        unary!(log10, -320.0, 308.0, true),
        unary!(log1p, -1.0, 50.0, false),
        unary!(sin, -1.0e4, 1.0e4, false),
        unary!(cos, -1.0e4, 1.0e4, false),
        unary!(tan, -10.0, 10.0, false),
        unary!(atan, -30.0, 30.0, false),
        unary!(asin, -1.2, 1.2, false),
        unary!(acos, -1.2, 1.2, false),
        unary!(sinh, -40.0, 40.0, false),
        unary!(cosh, -40.0, 40.0, false),
        unary!(tanh, -30.0, 30.0, false),
        unary!(asinh, -1.0e9, 1.0e9, false),
        unary!(acosh, 0.5, 1.0e9, false),
        unary!(atanh, -1.1, 1.1, false),
        unary!(erf, -6.0, 6.0, false),
        unary!(erfc, -6.0, 30.0, false),
    ]
}

fn check_unary<V: LaneOps>() {
    let cfg = AcceptanceConfig::default();
    let count = cfg.samples / 4;
    for case in unary_cases::<V>() {
        let xs = samples::<V::Scalar>(cfg.seed, count, case.range, case.log_scale);
        let mut out = vec![V::Scalar::ZERO; xs.len()];
        map::<V, _>(case.vector, &xs, &mut out).unwrap();
        let pairs: Vec<_> = out.iter().zip(&xs).map(|(&v, &x)| (v, (case.scalar)(x))).collect();
        assert_close(case.name, V::ISA.name(), &pairs);
    }
}

fn check_binary<V: LaneOps>() {
    let cfg = AcceptanceConfig::default();
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let edge = specials::<V::Scalar>();

    // Random bases and exponents, every pairing of special values, and
    // negative bases with integral exponents.
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for _ in 0..cfg.samples / 4 {
        xs.push(V::Scalar::from_f64(rng.gen_range(-60.0..60.0)));
        ys.push(V::Scalar::from_f64(rng.gen_range(-60.0..60.0)));
    }
    for &a in &edge {
        for &b in &edge {
            xs.push(a);
            ys.push(b);
        }
    }
    for k in -7..=7 {
        xs.push(V::Scalar::from_f64(-1.75));
        ys.push(V::Scalar::from_i32(k));
    }

    let mut out = vec![V::Scalar::ZERO; xs.len()];
    map2::<V, _>(math::pow::<V>, &xs, &ys, &mut out).unwrap();
    let pairs: Vec<_> = (0..xs.len())
        .map(|i| (out[i], numkern_math::pow(xs[i], ys[i])))
        .collect();
    assert_close("pow", V::ISA.name(), &pairs);

    map2::<V, _>(math::atan2::<V>, &ys, &xs, &mut out).unwrap();
    let pairs: Vec<_> = (0..xs.len())
        .map(|i| (out[i], numkern_math::atan2(ys[i], xs[i])))
        .collect();
    assert_close("atan2", V::ISA.name(), &pairs);

    for kind in FluxLimiter::ALL {
        map2::<V, _>(|a, b| math::flux_limiter(kind, a, b), &xs, &ys, &mut out).unwrap();
        let pairs: Vec<_> = (0..xs.len())
            .map(|i| (out[i], kind.apply(xs[i], ys[i])))
            .collect();
        assert_close(kind.name(), V::ISA.name(), &pairs);
    }
}

fn check_pown<V: LaneOps>() {
    let xs = samples::<V::Scalar>(7, 64, (-3.0, 3.0), false);
    let mut out = vec![V::Scalar::ZERO; xs.len()];
    for n in [-9, -2, -1, 0, 1, 2, 5, 31] {
        map::<V, _>(|v| math::pown(v, n), &xs, &mut out).unwrap();
        let pairs: Vec<_> = out
            .iter()
            .zip(&xs)
            .map(|(&v, &x)| (v, numkern_math::pown(x, n)))
            .collect();
        assert_close("pown", V::ISA.name(), &pairs);
    }
}

macro_rules! lane_suite {
    ($module:ident, $v:ty) => {
        mod $module {
            use super::*;

            #[test]
            fn unary_kernels_track_scalar() {
                check_unary::<$v>();
            }

            #[test]
            fn binary_kernels_track_scalar() {
                check_binary::<$v>();
            }

            #[test]
            fn pown_tracks_scalar() {
                check_pown::<$v>();
            }
        }
    };
}

// ── Width aliases (best backend for this target) ─────────────────────

lane_suite!(f32x4, numkern_simd::F32x4);
lane_suite!(f32x8, numkern_simd::F32x8);
lane_suite!(f32x16, numkern_simd::F32x16);
lane_suite!(f64x2, numkern_simd::F64x2);
lane_suite!(f64x4, numkern_simd::F64x4);
lane_suite!(f64x8, numkern_simd::F64x8);

// ── Portable widths no register matches ──────────────────────────────

lane_suite!(portable_f32x3, Lanes<f32, 3>);
lane_suite!(portable_f64x5, Lanes<f64, 5>);

#[test]
fn slice_tail_matches_full_groups() {
    let xs: Vec<f64> = (0..37).map(|i| -3.0 + 0.17 * i as f64).collect();
    let mut wide = vec![0.0; xs.len()];
    let mut narrow = vec![0.0; xs.len()];
    numkern_simd::sin_slice::<numkern_simd::F64x8>(&xs, &mut wide).unwrap();
    numkern_simd::sin_slice::<Lanes<f64, 1>>(&xs, &mut narrow).unwrap();
    assert_eq!(wide, narrow);
}
