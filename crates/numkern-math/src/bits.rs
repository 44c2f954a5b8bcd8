// ─────────────────────────────────────────────────────────────────────
// Numkern — Bit-Level Helpers
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rounding, exponent-field manipulation and exact constant splits.
//!
//! Everything here works on the raw IEEE 754 layout described by
//! [`FloatTier`], so one implementation covers every tier.

use numkern_types::constants::FRAC_PI_2_PARTS;
use numkern_types::tier::FloatTier;

/// 2^MANTISSA_BITS: every float at or above this magnitude is integral.
#[inline]
pub fn integral_threshold<T: FloatTier>() -> T {
    pow2i::<T>(T::MANTISSA_BITS as i32)
}

/// Round to nearest, ties to even.
///
/// Adds and removes a signed 2^p so the FPU rounding does the work.
/// Values already integral (|x| >= 2^p), infinities and NaN pass through.
#[inline]
pub fn round_int<T: FloatTier>(x: T) -> T {
    let big = integral_threshold::<T>();
    if x.abs() < big {
        let shift = big.copysign(x);
        (x + shift) - shift
    } else {
        x
    }
}

#[inline]
pub fn floor<T: FloatTier>(x: T) -> T {
    let r = round_int(x);
    if r > x {
        r - T::ONE
    } else {
        r
    }
}

/// 2^n for `n` in the normal exponent range, built from the exponent field.
#[inline]
pub fn pow2i<T: FloatTier>(n: i32) -> T {
    let biased = (n + T::EXPONENT_BIAS) as u64;
    T::from_raw(biased << T::MANTISSA_BITS)
}

/// p * 2^n, applied in two halves so results from overflow down into the
/// subnormal range are reachable. `n` must lie in
/// `[-2 * (bias - 1), 2 * bias]`.
#[inline]
pub fn scale_pow2<T: FloatTier>(p: T, n: i32) -> T {
    let n1 = n >> 1;
    let n2 = n - n1;
    p * pow2i::<T>(n1) * pow2i::<T>(n2)
}

/// x * 2^n for any `n`; saturates to zero or infinity.
pub fn ldexp<T: FloatTier>(x: T, n: i32) -> T {
    let (m, e) = frexp(x);
    if e == 0 && (m == T::ZERO || !m.is_finite()) {
        return x;
    }
    let lo = -2 * (T::EXPONENT_BIAS - 1);
    let hi = 2 * T::EXPONENT_BIAS;
    let k = e.saturating_add(n).clamp(lo, hi);
    scale_pow2(m, k)
}

/// Split into mantissa in `[0.5, 1)` and exponent with `x = m * 2^e`.
///
/// Zero, infinities and NaN come back unchanged with exponent 0;
/// subnormals are normalised first.
pub fn frexp<T: FloatTier>(x: T) -> (T, i32) {
    if x == T::ZERO || !x.is_finite() {
        return (x, 0);
    }
    let (y, adjust) = if x.abs() < T::MIN_POSITIVE {
        let k = T::MANTISSA_BITS as i32 + 2;
        (x * pow2i::<T>(k), k)
    } else {
        (x, 0)
    };
    let raw = y.to_raw();
    let field = ((raw & T::exponent_mask()) >> T::MANTISSA_BITS) as i32;
    let e = field - (T::EXPONENT_BIAS - 1) - adjust;
    let half_field = ((T::EXPONENT_BIAS - 1) as u64) << T::MANTISSA_BITS;
    let m = T::from_raw((raw & !T::exponent_mask()) | half_field);
    (m, e)
}

/// Split a positive normal value into mantissa in `[1, 2)` and exponent.
#[inline]
pub fn split_exponent<T: FloatTier>(x: T) -> (T, T) {
    let raw = x.to_raw();
    let field = ((raw & T::exponent_mask()) >> T::MANTISSA_BITS) as i32;
    let one_field = (T::EXPONENT_BIAS as u64) << T::MANTISSA_BITS;
    let m = T::from_raw((raw & T::mantissa_mask()) | one_field);
    (m, T::from_i32(field - T::EXPONENT_BIAS))
}

/// Clear the low `MANTISSA_BITS / 2 + 1` mantissa bits.
///
/// The product of two truncated values, or of a truncated value and a
/// small integer, is exact.
#[inline]
pub fn truncate_half<T: FloatTier>(x: T) -> T {
    let low = (1u64 << (T::MANTISSA_BITS / 2 + 1)) - 1;
    T::from_raw(x.to_raw() & !low)
}

/// Split the constant `c + c_lo` into `(hi, lo)` with `hi` truncated so
/// `n * hi` is exact for the integer multipliers used in argument
/// reduction. `c_lo` is the part of the constant below f64 precision.
#[inline]
pub fn cody_waite<T: FloatTier>(c: f64, c_lo: f64) -> (T, T) {
    let hi = truncate_half(T::from_f64(c));
    (hi, T::from_f64((c - hi.to_f64()) + c_lo))
}

/// pi/2 as three tier-exact parts: the first two truncated, the third
/// carrying the residual.
pub fn quarter_turn<T: FloatTier>() -> [T; 3] {
    let [p1, p2, p3] = FRAC_PI_2_PARTS;
    let t1 = truncate_half(T::from_f64(p1));
    let rem = (p1 - t1.to_f64()) + p2;
    let t2 = truncate_half(T::from_f64(rem));
    let t3 = T::from_f64((rem - t2.to_f64()) + p3);
    [t1, t2, t3]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_int_ties_to_even() {
        assert_eq!(round_int(0.5f64), 0.0);
        assert_eq!(round_int(1.5f64), 2.0);
        assert_eq!(round_int(2.5f64), 2.0);
        assert_eq!(round_int(-2.5f64), -2.0);
        assert_eq!(round_int(-3.7f32), -4.0);
        assert_eq!(round_int(1.0e300f64), 1.0e300);
        assert!(round_int(f64::NAN).is_nan());
        assert_eq!(round_int(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_floor_matches_std() {
        for &x in &[-2.5f64, -2.0, -0.1, 0.0, 0.1, 2.0, 2.9, 1.0e17] {
            assert_eq!(floor(x), x.floor(), "floor({x})");
        }
        assert_eq!(floor(-0.25f32), -1.0);
    }

    #[test]
    fn test_pow2i_exact() {
        assert_eq!(pow2i::<f64>(0), 1.0);
        assert_eq!(pow2i::<f64>(-3), 0.125);
        assert_eq!(pow2i::<f64>(1023), 2f64.powi(1023));
        assert_eq!(pow2i::<f32>(10), 1024.0);
        assert_eq!(pow2i::<f32>(-126), f32::MIN_POSITIVE);
    }

    #[test]
    fn test_scale_pow2_reaches_subnormals() {
        assert_eq!(scale_pow2(1.0f64, -1074), f64::from_bits(1));
        assert_eq!(scale_pow2(1.0f32, -149), f32::from_bits(1));
        assert_eq!(scale_pow2(1.0f64, 1024), f64::INFINITY);
        assert_eq!(scale_pow2(1.5f64, 4), 24.0);
    }

    #[test]
    fn test_frexp_convention() {
        assert_eq!(frexp(8.0f64), (0.5, 4));
        assert_eq!(frexp(-3.0f64), (-0.75, 2));
        assert_eq!(frexp(0.0f64), (0.0, 0));
        let (m, e) = frexp(f64::from_bits(1));
        assert_eq!((m, e), (0.5, -1073));
        let (m, e) = frexp(f64::INFINITY);
        assert_eq!((m, e), (f64::INFINITY, 0));
    }

    #[test]
    fn test_ldexp_frexp_roundtrip() {
        for &x in &[1.0f64, -7.25, 1.0e-310, 3.0e300, f64::MIN_POSITIVE, f64::MAX] {
            let (m, e) = frexp(x);
            assert_eq!(ldexp(m, e), x, "x = {x:e}");
        }
        assert_eq!(ldexp(1.0f64, 5000), f64::INFINITY);
        assert_eq!(ldexp(1.0f64, -5000), 0.0);
        assert_eq!(ldexp(f64::from_bits(1), 2097), 2f64.powi(1023));
    }

    #[test]
    fn test_split_exponent() {
        assert_eq!(split_exponent(12.0f64), (1.5, 3.0));
        assert_eq!(split_exponent(0.75f32), (1.5, -1.0));
    }

    #[test]
    fn test_truncate_half_products_are_exact() {
        let [t1, t2, _] = quarter_turn::<f64>();
        assert_eq!(t1.to_bits() & ((1 << 27) - 1), 0);
        assert_eq!(t2.to_bits() & ((1 << 27) - 1), 0);
        let q = 123_456_789.0f64;
        let qh = truncate_half(q);
        let ql = q - qh;
        assert_eq!(qh + ql, q);
        assert_eq!(truncate_half(1.0f32), 1.0);
    }

    #[test]
    fn test_quarter_turn_sums_to_half_pi() {
        let parts = quarter_turn::<f32>();
        let sum: f64 = parts.iter().map(|&p| f64::from(p)).sum();
        assert!((sum - std::f64::consts::FRAC_PI_2).abs() < 1e-13);
        let parts = quarter_turn::<f64>();
        let sum = parts[0] + parts[1] + parts[2];
        assert!((sum - std::f64::consts::FRAC_PI_2).abs() <= f64::EPSILON);
    }

    #[test]
    fn test_cody_waite_split() {
        use numkern_types::constants::{LN_2, LN_2_LO};
        let (hi, lo) = cody_waite::<f64>(LN_2, LN_2_LO);
        assert_eq!(hi + lo, LN_2);
        assert!(lo.abs() < 1.0e-7);
        assert_eq!((hi * 1075.0) / 1075.0, hi);
    }
}
