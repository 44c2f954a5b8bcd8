// ─────────────────────────────────────────────────────────────────────
// Numkern — Exponentials
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! exp2, exp, exp10 and expm1.
//!
//! The argument is written `x = n + f` in base-2 exponent units with
//! `|f| <= 1/2`; `e^r` is evaluated by a degree-13 polynomial and the
//! result rebuilt with [`scale_pow2`]. Arguments whose base-2 exponent
//! falls outside the representable range return `+inf` or `0`.

use numkern_types::constants::{LN_10, LN_2, LN_2_LO, LOG10_2, LOG10_2_LO, LOG2_10, LOG2_E};
use numkern_types::tier::FloatTier;

use crate::bits::{cody_waite, pow2i, round_int, scale_pow2};
use crate::poly::{horner, EXP, EXPM1};

/// Base-2 exponent above which every exponential overflows.
#[inline]
pub fn overflow_limit<T: FloatTier>() -> T {
    T::from_i32(T::EXPONENT_BIAS + 1)
}

/// Base-2 exponent below which every exponential rounds to zero.
#[inline]
pub fn underflow_limit<T: FloatTier>() -> T {
    T::from_i32(-(T::EXPONENT_BIAS + T::MANTISSA_BITS as i32))
}

/// Below this magnitude `expm1` uses its own series.
pub const EXPM1_SERIES_LIMIT: f64 = 0.5;

/// Range policy shared by the exponentials, applied to the base-2
/// exponent `t`.
#[inline]
fn out_of_range<T: FloatTier>(t: T) -> Option<T> {
    if t.is_nan() {
        Some(t)
    } else if t > overflow_limit::<T>() {
        Some(T::INFINITY)
    } else if t < underflow_limit::<T>() {
        Some(T::ZERO)
    } else {
        None
    }
}

pub fn exp2<T: FloatTier>(x: T) -> T {
    if let Some(edge) = out_of_range(x) {
        return edge;
    }
    let n = round_int(x);
    let r = (x - n) * T::from_f64(LN_2);
    scale_pow2(horner(r, &EXP), n.to_i32())
}

pub fn exp<T: FloatTier>(x: T) -> T {
    let t = x * T::from_f64(LOG2_E);
    if let Some(edge) = out_of_range(t) {
        return edge;
    }
    let n = round_int(t);
    let (hi, lo) = cody_waite::<T>(LN_2, LN_2_LO);
    let r = (x - n * hi) - n * lo;
    scale_pow2(horner(r, &EXP), n.to_i32())
}

pub fn exp10<T: FloatTier>(x: T) -> T {
    let t = x * T::from_f64(LOG2_10);
    if let Some(edge) = out_of_range(t) {
        return edge;
    }
    let n = round_int(t);
    let (hi, lo) = cody_waite::<T>(LOG10_2, LOG10_2_LO);
    let r = ((x - n * hi) - n * lo) * T::from_f64(LN_10);
    scale_pow2(horner(r, &EXP), n.to_i32())
}

/// e^x - 1 without cancellation near zero.
pub fn expm1<T: FloatTier>(x: T) -> T {
    if x.abs() < T::from_f64(EXPM1_SERIES_LIMIT) {
        x * horner(x, &EXPM1)
    } else {
        exp(x) - T::ONE
    }
}

/// 2^n as a float for any integer `n`; saturates like [`exp2`].
pub fn exp2i<T: FloatTier>(n: i32) -> T {
    if n > T::EXPONENT_BIAS {
        T::INFINITY
    } else if n >= 1 - T::EXPONENT_BIAS {
        pow2i(n)
    } else if n >= -(T::EXPONENT_BIAS + T::MANTISSA_BITS as i32) {
        scale_pow2(T::ONE, n)
    } else {
        T::ZERO
    }
}
