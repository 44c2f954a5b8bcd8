// ─────────────────────────────────────────────────────────────────────
// Numkern — Logarithms
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! log2, log, log10 and log1p.
//!
//! `x = m * 2^e` with `m` folded into `[sqrt(1/2), sqrt(2))`, then
//! `ln m = 2 * atanh(s)` for `s = (m - 1)/(m + 1)` from an odd series in
//! `s`. Negative arguments and NaN give NaN, zero gives `-inf`.

use numkern_types::constants::{LN_2, LN_2_LO, LOG10_2, LOG10_2_LO, LOG10_E, LOG2_E, SQRT_2};
use numkern_types::tier::FloatTier;

use crate::bits::{cody_waite, pow2i, split_exponent};
use crate::poly::{horner, LN};

/// Shift applied to subnormal inputs before the exponent is read.
#[inline]
pub fn subnormal_shift<T: FloatTier>() -> i32 {
    T::MANTISSA_BITS as i32 + 2
}

#[inline]
fn special<T: FloatTier>(x: T) -> Option<T> {
    if x.is_nan() || x < T::ZERO {
        Some(T::NAN)
    } else if x == T::ZERO {
        Some(T::NEG_INFINITY)
    } else if x == T::INFINITY {
        Some(x)
    } else {
        None
    }
}

/// `(ln m, e)` for a positive finite `x = m * 2^e`.
pub fn log_parts<T: FloatTier>(x: T) -> (T, T) {
    let (y, adjust) = if x < T::MIN_POSITIVE {
        let k = subnormal_shift::<T>();
        (x * pow2i::<T>(k), T::from_i32(k))
    } else {
        (x, T::ZERO)
    };
    let (mut m, mut e) = split_exponent(y);
    e -= adjust;
    if m > T::from_f64(SQRT_2) {
        m *= T::HALF;
        e += T::ONE;
    }
    let s = (m - T::ONE) / (m + T::ONE);
    let z = s * s;
    (T::TWO * s * horner(z, &LN), e)
}

pub fn log<T: FloatTier>(x: T) -> T {
    if let Some(edge) = special(x) {
        return edge;
    }
    let (ln_m, e) = log_parts(x);
    let (hi, lo) = cody_waite::<T>(LN_2, LN_2_LO);
    e * hi + (ln_m + e * lo)
}

pub fn log2<T: FloatTier>(x: T) -> T {
    if let Some(edge) = special(x) {
        return edge;
    }
    let (ln_m, e) = log_parts(x);
    e + ln_m * T::from_f64(LOG2_E)
}

pub fn log10<T: FloatTier>(x: T) -> T {
    if let Some(edge) = special(x) {
        return edge;
    }
    let (ln_m, e) = log_parts(x);
    let (hi, lo) = cody_waite::<T>(LOG10_2, LOG10_2_LO);
    e * hi + (ln_m * T::from_f64(LOG10_E) + e * lo)
}

/// ln(1 + x) accurate near zero.
///
/// `u = 1 + x` is rounded; `log(u) * x / (u - 1)` corrects for the
/// rounding of `u`.
pub fn log1p<T: FloatTier>(x: T) -> T {
    let u = T::ONE + x;
    if u == T::ONE || x == T::INFINITY {
        return x;
    }
    log(u) * x / (u - T::ONE)
}
