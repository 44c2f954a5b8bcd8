// ─────────────────────────────────────────────────────────────────────
// Numkern — Vector Error Functions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Both the series and the continued fraction run on every lane; the
//! split at `|x| = 1.5` only picks which result each lane keeps.

use numkern_math::poly::{ERFC_FRACTION_TERMS, ERF_SERIES_TERMS};
use numkern_types::constants::{ERF_SPLIT, FRAC_1_SQRT_PI, FRAC_2_SQRT_PI};
use numkern_types::tier::FloatTier;

use super::exp::exp;
use super::{half, one, two, zero};
use crate::lanes::LaneOps;

#[inline]
fn exp_neg_square<V: LaneOps>(a: V) -> V {
    let z = a.truncate_half();
    exp(-(z * z)) * exp((z - a) * (z + a))
}

#[inline]
fn erf_series<V: LaneOps>(a: V) -> V {
    let z = two::<V>() * a * a;
    let mut term = a;
    let mut sum = zero::<V>();
    for n in 0..ERF_SERIES_TERMS {
        sum = sum + term;
        term = term * z / V::splat(V::Scalar::from_i32(2 * n as i32 + 3));
    }
    V::from_f64(FRAC_2_SQRT_PI) * exp_neg_square(a) * sum
}

#[inline]
fn erfc_fraction<V: LaneOps>(a: V) -> V {
    let mut f = a;
    for k in (1..=ERFC_FRACTION_TERMS).rev() {
        f = a + (V::splat(V::Scalar::from_i32(k as i32)) * half()) / f;
    }
    V::from_f64(FRAC_1_SQRT_PI) * (exp_neg_square(a) / f)
}

pub fn erf<V: LaneOps>(x: V) -> V {
    let a = x.abs();
    let small = a.cmp_lt(V::from_f64(ERF_SPLIT));
    let r = V::select(small, erf_series(a), one::<V>() - erfc_fraction(a)).copysign(x);
    let r = V::select(a.is_infinite(), one::<V>().copysign(x), r);
    V::select(x.is_nan(), x, r)
}

pub fn erfc<V: LaneOps>(x: V) -> V {
    let a = x.abs();
    let small = a.cmp_lt(V::from_f64(ERF_SPLIT));
    let r = V::select(small, one::<V>() - erf_series(a), erfc_fraction(a));
    let r = V::select(x.cmp_lt(zero()), two::<V>() - r, r);
    let r = V::select(x.cmp_eq(V::splat(V::Scalar::INFINITY)), zero(), r);
    let r = V::select(x.cmp_eq(V::splat(V::Scalar::NEG_INFINITY)), two(), r);
    V::select(x.is_nan(), x, r)
}
