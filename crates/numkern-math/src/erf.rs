// ─────────────────────────────────────────────────────────────────────
// Numkern — Error Functions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! erf and erfc.
//!
//! Below `|x| = 1.5` a positive-term series
//! `erf(x) = 2/sqrt(pi) * e^{-x^2} * sum 2^n x^{2n+1} / (2n+1)!!`;
//! above it the continued fraction for erfc, evaluated backwards over a
//! fixed number of terms. Both use `e^{-x^2}` split as
//! `e^{-z^2} * e^{(z-x)(z+x)}` with `z` the truncated `x`, so the large
//! exponent is computed exactly.

use numkern_types::constants::{ERF_SPLIT, FRAC_1_SQRT_PI, FRAC_2_SQRT_PI};
use numkern_types::tier::FloatTier;

use crate::bits::truncate_half;
use crate::exp::exp;
use crate::poly::{ERFC_FRACTION_TERMS, ERF_SERIES_TERMS};

/// e^{-a^2} without the rounding error of forming `a^2`.
#[inline]
pub fn exp_neg_square<T: FloatTier>(a: T) -> T {
    let z = truncate_half(a);
    exp(-(z * z)) * exp((z - a) * (z + a))
}

/// `sum 2^n a^{2n+1} / (2n+1)!!` over the fixed term count.
#[inline]
pub fn erf_series_sum<T: FloatTier>(a: T) -> T {
    let z = T::TWO * a * a;
    let mut term = a;
    let mut sum = T::ZERO;
    for n in 0..ERF_SERIES_TERMS {
        sum += term;
        term = term * z / T::from_i32(2 * n as i32 + 3);
    }
    sum
}

/// erf(a) for `0 <= a < 1.5`.
#[inline]
fn erf_series<T: FloatTier>(a: T) -> T {
    T::from_f64(FRAC_2_SQRT_PI) * exp_neg_square(a) * erf_series_sum(a)
}

/// erfc(a) for finite `a >= 1.5`.
#[inline]
fn erfc_fraction<T: FloatTier>(a: T) -> T {
    let mut f = a;
    for k in (1..=ERFC_FRACTION_TERMS).rev() {
        f = a + (T::from_i32(k as i32) * T::HALF) / f;
    }
    T::from_f64(FRAC_1_SQRT_PI) * (exp_neg_square(a) / f)
}

pub fn erf<T: FloatTier>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    let a = x.abs();
    if a.is_infinite() {
        return T::ONE.copysign(x);
    }
    let r = if a < T::from_f64(ERF_SPLIT) {
        erf_series(a)
    } else {
        T::ONE - erfc_fraction(a)
    };
    r.copysign(x)
}

pub fn erfc<T: FloatTier>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    if x == T::INFINITY {
        return T::ZERO;
    }
    if x == T::NEG_INFINITY {
        return T::TWO;
    }
    let a = x.abs();
    let r = if a < T::from_f64(ERF_SPLIT) {
        T::ONE - erf_series(a)
    } else {
        erfc_fraction(a)
    };
    if x < T::ZERO {
        T::TWO - r
    } else {
        r
    }
}
