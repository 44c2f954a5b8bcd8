// ─────────────────────────────────────────────────────────────────────
// Numkern — Polynomial Tables
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed-degree polynomial tables shared by the scalar and vector kernels.
//!
//! The exp, expm1, ln, sin and cos tables are truncated Taylor series,
//! carried far enough that the first dropped term is below the f64
//! epsilon on the reduced interval. The atan tables are the fdlibm
//! minimax fit.
//!
//! Coefficients are stored lowest degree first and evaluated with
//! [`horner`]; the vector kernel evaluates the same tables in the same
//! operation order so both produce the same rounding sequence.
#![allow(clippy::excessive_precision)]

use numkern_types::tier::FloatTier;

/// Taylor series of e^r, used on |r| <= ln(2)/2, degree 13.
pub const EXP: [f64; 14] = [
    1.0,
    1.0,
    0.5,
    0.16666666666666666,
    0.041666666666666664,
    0.008333333333333333,
    0.001388888888888889,
    0.0001984126984126984,
    2.48015873015873e-05,
    2.7557319223985893e-06,
    2.755731922398589e-07,
    2.505210838544172e-08,
    2.08767569878681e-09,
    1.6059043836821613e-10,
];

/// Taylor series of (e^x - 1)/x, used on |x| < 0.5, degree 15.
pub const EXPM1: [f64; 16] = [
    1.0,
    0.5,
    0.16666666666666666,
    0.041666666666666664,
    0.008333333333333333,
    0.001388888888888889,
    0.0001984126984126984,
    2.48015873015873e-05,
    2.7557319223985893e-06,
    2.755731922398589e-07,
    2.505210838544172e-08,
    2.08767569878681e-09,
    1.6059043836821613e-10,
    1.1470745597729725e-11,
    7.647163731819816e-13,
    4.779477332387385e-14,
];

/// Taylor series of atanh(s)/s in z = s^2, for s = (m-1)/(m+1), |s| <= 0.1716.
pub const LN: [f64; 11] = [
    1.0,
    0.3333333333333333,
    0.2,
    0.14285714285714285,
    0.1111111111111111,
    0.09090909090909091,
    0.07692307692307693,
    0.06666666666666667,
    0.058823529411764705,
    0.05263157894736842,
    0.047619047619047616,
];

/// Taylor series of sin(r)/r in z = r^2, used on |r| <= pi/4.
pub const SIN: [f64; 10] = [
    1.0,
    -0.16666666666666666,
    0.008333333333333333,
    -0.0001984126984126984,
    2.7557319223985893e-06,
    -2.505210838544172e-08,
    1.6059043836821613e-10,
    -7.647163731819816e-13,
    2.8114572543455206e-15,
    -8.22063524662433e-18,
];

/// Taylor series of cos(r) in z = r^2, used on |r| <= pi/4.
pub const COS: [f64; 10] = [
    1.0,
    -0.5,
    0.041666666666666664,
    -0.001388888888888889,
    2.48015873015873e-05,
    -2.755731922398589e-07,
    2.08767569878681e-09,
    -1.1470745597729725e-11,
    4.779477332387385e-14,
    -1.5619206968586225e-16,
];

/// Minimax fit of atan(t) = t - t*(z*ATAN_ODD(w) + w*ATAN_EVEN(w)),
/// z = t^2, w = z^2, on |t| <= 7/16.
pub const ATAN_ODD: [f64; 6] = [
    3.33333333333329318027e-01,
    1.42857142725034663711e-01,
    9.09088713343650656196e-02,
    6.66107313738753120669e-02,
    4.97687799461593236017e-02,
    1.62858201153657823623e-02,
];

pub const ATAN_EVEN: [f64; 5] = [
    -1.99999999998764832476e-01,
    -1.11111104054623557880e-01,
    -7.69187620504482999495e-02,
    -5.83357013379057348645e-02,
    -3.65315727442169155270e-02,
];

/// atan at the reduction anchors 1/2, 1, 3/2, +inf, as hi + lo.
pub const ATAN_HI: [f64; 4] = [
    4.63647609000806093515e-01,
    7.85398163397448278999e-01,
    9.82793723247329054082e-01,
    1.57079632679489655800e+00,
];

pub const ATAN_LO: [f64; 4] = [
    2.26987774529616870924e-17,
    3.06161699786838301793e-17,
    1.39033110312309984516e-17,
    6.12323399573676603587e-17,
];

/// Upper bounds of the atan reduction intervals.
pub const ATAN_BREAKS: [f64; 4] = [0.4375, 0.6875, 1.1875, 2.4375];

/// Terms of the erf series and the erfc continued fraction.
pub const ERF_SERIES_TERMS: usize = 32;
pub const ERFC_FRACTION_TERMS: usize = 80;

/// Evaluate `coeffs[0] + x*(coeffs[1] + x*(...))`.
#[inline]
pub fn horner<T: FloatTier>(x: T, coeffs: &[f64]) -> T {
    let Some((&last, rest)) = coeffs.split_last() else {
        return T::ZERO;
    };
    let mut acc = T::from_f64(last);
    for &c in rest.iter().rev() {
        acc = acc * x + T::from_f64(c);
    }
    acc
}
