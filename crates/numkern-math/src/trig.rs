// ─────────────────────────────────────────────────────────────────────
// Numkern — Trigonometric Functions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! sin, cos, tan with quarter-turn argument reduction.
//!
//! `q = round(x * 2/pi)` and `r = x - q * pi/2`, where pi/2 is split into
//! three tier-exact parts and `q` into two halves so each partial product
//! is exact. Subtracting the parts from high to low is the winding
//! correction: the reduced argument keeps full precision far from zero.
//!
//! Once `|x| >= 2^MANTISSA_BITS` the quadrant of `x` can no longer be
//! resolved and the result is NaN, as it is for infinities.

use numkern_types::constants::FRAC_2_PI;
use numkern_types::tier::FloatTier;

use crate::bits::{floor, integral_threshold, quarter_turn, round_int, truncate_half};
use crate::poly::{horner, COS, SIN};

/// Reduced argument in about `[-pi/4, pi/4]` and quadrant `q mod 4` as a
/// float in `{0, 1, 2, 3}`.
pub fn reduce<T: FloatTier>(x: T) -> (T, T) {
    let q = round_int(x * T::from_f64(FRAC_2_PI));
    let [t1, t2, t3] = quarter_turn::<T>();
    let qh = truncate_half(q);
    let ql = q - qh;
    let mut r = x - qh * t1;
    r -= ql * t1;
    r -= qh * t2;
    r -= ql * t2;
    r -= qh * t3;
    r -= ql * t3;
    let four = T::from_f64(4.0);
    let quadrant = q - four * floor(q * T::from_f64(0.25));
    (r, quadrant)
}

#[inline]
pub fn sin_poly<T: FloatTier>(r: T) -> T {
    r * horner(r * r, &SIN)
}

#[inline]
pub fn cos_poly<T: FloatTier>(r: T) -> T {
    horner(r * r, &COS)
}

#[inline]
fn reducible<T: FloatTier>(x: T) -> bool {
    x.abs() < integral_threshold::<T>()
}

pub fn sincos<T: FloatTier>(x: T) -> (T, T) {
    if !reducible(x) {
        return (T::NAN, T::NAN);
    }
    let (r, quadrant) = reduce(x);
    let s = sin_poly(r);
    let c = cos_poly(r);
    match quadrant.to_i32() {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

pub fn sin<T: FloatTier>(x: T) -> T {
    sincos(x).0
}

pub fn cos<T: FloatTier>(x: T) -> T {
    sincos(x).1
}

pub fn tan<T: FloatTier>(x: T) -> T {
    if !reducible(x) {
        return T::NAN;
    }
    let (r, quadrant) = reduce(x);
    let s = sin_poly(r);
    let c = cos_poly(r);
    if quadrant.to_i32() & 1 == 0 {
        s / c
    } else {
        -c / s
    }
}
