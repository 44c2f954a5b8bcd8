// ─────────────────────────────────────────────────────────────────────
// Numkern — Hyperbolic Functions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! sinh, cosh, tanh and their inverses, built on the exp and log kernels.

use numkern_types::constants::{HYPERBOLIC_LARGE, INVERSE_HYPERBOLIC_LARGE, LN_2};
use numkern_types::tier::FloatTier;

use crate::exp::{exp, expm1};
use crate::log::{log, log1p};

/// Below this `|x|`, cosh uses the expm1 form.
pub const COSH_SMALL: f64 = 0.5;

/// e^a / 2 without overflowing before the final product.
#[inline]
fn half_exp_large<T: FloatTier>(a: T) -> T {
    let h = exp(a * T::HALF);
    T::HALF * h * h
}

pub fn sinh<T: FloatTier>(x: T) -> T {
    let a = x.abs();
    let r = if a > T::from_f64(HYPERBOLIC_LARGE) {
        half_exp_large(a)
    } else {
        let e = expm1(a);
        T::HALF * (e + e / (e + T::ONE))
    };
    r.copysign(x)
}

pub fn cosh<T: FloatTier>(x: T) -> T {
    let a = x.abs();
    if a > T::from_f64(HYPERBOLIC_LARGE) {
        half_exp_large(a)
    } else if a < T::from_f64(COSH_SMALL) {
        let e = expm1(a);
        T::ONE + (e * e) / (T::TWO * (T::ONE + e))
    } else {
        let e = exp(a);
        T::HALF * e + T::HALF / e
    }
}

pub fn tanh<T: FloatTier>(x: T) -> T {
    let a = x.abs();
    let r = if a > T::from_f64(HYPERBOLIC_LARGE) {
        T::ONE
    } else {
        let e = expm1(T::TWO * a);
        e / (e + T::TWO)
    };
    r.copysign(x)
}

pub fn asinh<T: FloatTier>(x: T) -> T {
    let a = x.abs();
    let r = if a > T::from_f64(INVERSE_HYPERBOLIC_LARGE) {
        log(a) + T::from_f64(LN_2)
    } else {
        let a2 = a * a;
        log1p(a + a2 / (T::ONE + (T::ONE + a2).sqrt()))
    };
    r.copysign(x)
}

/// Defined for `x >= 1`; NaN below.
pub fn acosh<T: FloatTier>(x: T) -> T {
    if x < T::ONE || x.is_nan() {
        T::NAN
    } else if x > T::from_f64(INVERSE_HYPERBOLIC_LARGE) {
        log(x) + T::from_f64(LN_2)
    } else if x > T::TWO {
        log(T::TWO * x - T::ONE / (x + (x * x - T::ONE).sqrt()))
    } else {
        let t = x - T::ONE;
        log1p(t + (T::TWO * t + t * t).sqrt())
    }
}

/// Defined for `|x| <= 1`; `+-inf` at `+-1`.
pub fn atanh<T: FloatTier>(x: T) -> T {
    let a = x.abs();
    if a > T::ONE {
        return T::NAN;
    }
    let r = T::HALF * log1p(T::TWO * a / (T::ONE - a));
    r.copysign(x)
}
