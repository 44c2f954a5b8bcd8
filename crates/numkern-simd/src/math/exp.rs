// ─────────────────────────────────────────────────────────────────────
// Numkern — Vector Exponentials
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use numkern_math::exp::{overflow_limit, underflow_limit, EXPM1_SERIES_LIMIT};
use numkern_math::poly::{EXP, EXPM1};
use numkern_types::constants::{LN_10, LN_2, LN_2_LO, LOG10_2, LOG10_2_LO, LOG2_10, LOG2_E};

use super::{cody_waite_lanes, horner, infinity, one, scale_pow2, zero};
use crate::lanes::LaneOps;

/// Exponent `t` clamped into the representable range; NaN lanes become
/// the lower limit so the scaling hooks never see them.
#[inline]
fn clamp_exponent<V: LaneOps>(t: V) -> V {
    let over = V::splat(overflow_limit::<V::Scalar>());
    let under = V::splat(underflow_limit::<V::Scalar>());
    t.max(under).min(over)
}

/// Blend in the out-of-range results for exponent `t`.
#[inline]
fn range_edges<V: LaneOps>(t: V, r: V) -> V {
    let over = V::splat(overflow_limit::<V::Scalar>());
    let under = V::splat(underflow_limit::<V::Scalar>());
    let r = V::select(t.cmp_lt(under), zero(), r);
    let r = V::select(t.cmp_gt(over), infinity(), r);
    V::select(t.is_nan(), t, r)
}

pub fn exp2<V: LaneOps>(x: V) -> V {
    let n = clamp_exponent(x).round_int();
    let r = (x - n) * V::from_f64(LN_2);
    range_edges(x, scale_pow2(horner(r, &EXP), n))
}

pub fn exp<V: LaneOps>(x: V) -> V {
    let t = x * V::from_f64(LOG2_E);
    let n = clamp_exponent(t).round_int();
    let (hi, lo) = cody_waite_lanes::<V>(LN_2, LN_2_LO);
    let r = (x - n * hi) - n * lo;
    range_edges(t, scale_pow2(horner(r, &EXP), n))
}

pub fn exp10<V: LaneOps>(x: V) -> V {
    let t = x * V::from_f64(LOG2_10);
    let n = clamp_exponent(t).round_int();
    let (hi, lo) = cody_waite_lanes::<V>(LOG10_2, LOG10_2_LO);
    let r = ((x - n * hi) - n * lo) * V::from_f64(LN_10);
    range_edges(t, scale_pow2(horner(r, &EXP), n))
}

pub fn expm1<V: LaneOps>(x: V) -> V {
    let series = x * horner(x, &EXPM1);
    let direct = exp(x) - one();
    V::select(x.abs().cmp_lt(V::from_f64(EXPM1_SERIES_LIMIT)), series, direct)
}
