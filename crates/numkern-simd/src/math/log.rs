// ─────────────────────────────────────────────────────────────────────
// Numkern — Vector Logarithms
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use numkern_math::log::subnormal_shift;
use numkern_math::poly::LN;
use numkern_types::constants::{LN_2, LN_2_LO, LOG10_2, LOG10_2_LO, LOG10_E, LOG2_E, SQRT_2};
use numkern_types::tier::FloatTier;

use super::{cody_waite_lanes, half, horner, infinity, nan, one, two, zero};
use crate::lanes::LaneOps;

/// Results for NaN, negative, zero and infinite lanes over `r`.
#[inline]
fn special<V: LaneOps>(x: V, r: V) -> V {
    let r = V::select(x.cmp_eq(infinity()), x, r);
    let r = V::select(x.cmp_eq(zero()), -infinity::<V>(), r);
    V::select(V::mask_or(x.is_nan(), x.cmp_lt(zero())), nan(), r)
}

/// `(ln m, e)` with `x = m * 2^e` and `m` in `(sqrt(2)/2, sqrt(2)]`.
/// Lanes outside the positive finite range are evaluated at 1.
pub fn log_parts<V: LaneOps>(x: V) -> (V, V) {
    let valid = V::mask_and(x.cmp_gt(zero()), x.cmp_lt(infinity()));
    let xs = V::select(valid, x, one());

    let k = V::splat(V::Scalar::from_i32(subnormal_shift::<V::Scalar>()));
    let tiny = xs.cmp_lt(V::splat(V::Scalar::MIN_POSITIVE));
    let y = V::select(tiny, xs * V::pow2i(k), xs);
    let adjust = V::select(tiny, k, zero());

    let (m, e) = y.split_exponent();
    let e = e - adjust;
    let fold = m.cmp_gt(V::from_f64(SQRT_2));
    let m = V::select(fold, m * half(), m);
    let e = V::select(fold, e + one(), e);

    let s = (m - one()) / (m + one());
    let z = s * s;
    (two::<V>() * s * horner(z, &LN), e)
}

pub fn log<V: LaneOps>(x: V) -> V {
    let (ln_m, e) = log_parts(x);
    let (hi, lo) = cody_waite_lanes::<V>(LN_2, LN_2_LO);
    special(x, e * hi + (ln_m + e * lo))
}

pub fn log2<V: LaneOps>(x: V) -> V {
    let (ln_m, e) = log_parts(x);
    special(x, e + ln_m * V::from_f64(LOG2_E))
}

pub fn log10<V: LaneOps>(x: V) -> V {
    let (ln_m, e) = log_parts(x);
    let (hi, lo) = cody_waite_lanes::<V>(LOG10_2, LOG10_2_LO);
    special(x, e * hi + (ln_m * V::from_f64(LOG10_E) + e * lo))
}

pub fn log1p<V: LaneOps>(x: V) -> V {
    let u = one::<V>() + x;
    let r = log(u) * x / (u - one());
    V::select(V::mask_or(u.cmp_eq(one()), x.cmp_eq(infinity())), x, r)
}
