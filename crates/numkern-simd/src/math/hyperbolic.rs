// ─────────────────────────────────────────────────────────────────────
// Numkern — Vector Hyperbolic Functions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use numkern_math::hyperbolic::COSH_SMALL;
use numkern_types::constants::{HYPERBOLIC_LARGE, INVERSE_HYPERBOLIC_LARGE, LN_2};

use super::exp::{exp, expm1};
use super::log::{log, log1p};
use super::{half, nan, one, two};
use crate::lanes::LaneOps;

#[inline]
fn half_exp_large<V: LaneOps>(a: V) -> V {
    let h = exp(a * half());
    half::<V>() * h * h
}

pub fn sinh<V: LaneOps>(x: V) -> V {
    let a = x.abs();
    let e = expm1(a);
    let small = half::<V>() * (e + e / (e + one()));
    let large = a.cmp_gt(V::from_f64(HYPERBOLIC_LARGE));
    V::select(large, half_exp_large(a), small).copysign(x)
}

pub fn cosh<V: LaneOps>(x: V) -> V {
    let a = x.abs();
    let em = expm1(a);
    let near_one = one::<V>() + (em * em) / (two::<V>() * (one::<V>() + em));
    let e = exp(a);
    let mid = half::<V>() * e + half::<V>() / e;
    let r = V::select(a.cmp_lt(V::from_f64(COSH_SMALL)), near_one, mid);
    V::select(a.cmp_gt(V::from_f64(HYPERBOLIC_LARGE)), half_exp_large(a), r)
}

pub fn tanh<V: LaneOps>(x: V) -> V {
    let a = x.abs();
    let e = expm1(two::<V>() * a);
    let r = e / (e + two());
    V::select(a.cmp_gt(V::from_f64(HYPERBOLIC_LARGE)), one(), r).copysign(x)
}

pub fn asinh<V: LaneOps>(x: V) -> V {
    let a = x.abs();
    let a2 = a * a;
    let moderate = log1p(a + a2 / (one::<V>() + (one::<V>() + a2).sqrt()));
    let far = log(a) + V::from_f64(LN_2);
    V::select(a.cmp_gt(V::from_f64(INVERSE_HYPERBOLIC_LARGE)), far, moderate).copysign(x)
}

pub fn acosh<V: LaneOps>(x: V) -> V {
    let t = x - one();
    let near = log1p(t + (two::<V>() * t + t * t).sqrt());
    let mid = log(two::<V>() * x - one::<V>() / (x + (x * x - one()).sqrt()));
    let far = log(x) + V::from_f64(LN_2);
    let r = V::select(x.cmp_gt(two()), mid, near);
    let r = V::select(x.cmp_gt(V::from_f64(INVERSE_HYPERBOLIC_LARGE)), far, r);
    let invalid = V::mask_or(x.cmp_lt(one()), x.is_nan());
    V::select(invalid, nan(), r)
}

pub fn atanh<V: LaneOps>(x: V) -> V {
    let a = x.abs();
    let r = (half::<V>() * log1p(two::<V>() * a / (one::<V>() - a))).copysign(x);
    V::select(a.cmp_gt(one()), nan(), r)
}
