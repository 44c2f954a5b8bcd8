// ─────────────────────────────────────────────────────────────────────
// Numkern — Powers
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use numkern_types::tier::FloatTier;

use crate::bits::floor;
use crate::exp::exp;
use crate::log::log;

/// Whether a finite `y` is an odd integer.
#[inline]
pub fn is_odd_integer<T: FloatTier>(y: T) -> bool {
    let half = y * T::HALF;
    floor(y) == y && floor(half) != half
}

/// x^y as `exp(y * log|x|)`.
///
/// Negative bases take the sign of the result from the parity of an
/// integer `y` and give NaN for non-integer `y`.
pub fn pow<T: FloatTier>(x: T, y: T) -> T {
    if y == T::ZERO || x == T::ONE {
        return T::ONE;
    }
    if x.is_nan() || y.is_nan() {
        return T::NAN;
    }
    let ax = x.abs();
    if y.is_infinite() && ax == T::ONE {
        return T::ONE;
    }
    if x < T::ZERO && y.is_finite() && floor(y) != y {
        return T::NAN;
    }
    let magnitude = exp(y * log(ax));
    if x.is_sign_negative() && y.is_finite() && is_odd_integer(y) {
        -magnitude
    } else {
        magnitude
    }
}

/// x^n by repeated squaring.
pub fn pown<T: FloatTier>(x: T, n: i32) -> T {
    let mut base = x;
    let mut k = n.unsigned_abs();
    let mut acc = T::ONE;
    while k > 0 {
        if k & 1 == 1 {
            acc *= base;
        }
        base *= base;
        k >>= 1;
    }
    if n >= 0 {
        acc
    } else if acc == T::ZERO {
        T::INFINITY.copysign(acc)
    } else {
        T::ONE / acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acceptance::within;

    #[test]
    fn test_pow_identities() {
        assert_eq!(pow(f64::NAN, 0.0), 1.0);
        assert_eq!(pow(1.0f64, f64::NAN), 1.0);
        assert!(pow(f64::NAN, 2.0).is_nan());
        assert!(pow(2.0f64, f64::NAN).is_nan());
        assert_eq!(pow(-1.0f64, f64::INFINITY), 1.0);
    }

    #[test]
    fn test_pow_against_std() {
        for &(x, y) in &[(2.0f64, 0.5), (10.0, -3.0), (0.3, 7.7), (1.0e-3, 2.5), (5.0, 20.0)] {
            assert!(within(pow(x, y), x.powf(y), 512), "pow({x}, {y})");
        }
        assert!(within(pow(1.5f32, 3.25), 1.5f32.powf(3.25), 64));
    }

    #[test]
    fn test_pow_negative_base() {
        assert!(within(pow(-2.0f64, 3.0), -8.0, 16));
        assert!(within(pow(-2.0f64, 4.0), 16.0, 16));
        assert!(pow(-2.0f64, 0.5).is_nan());
        assert_eq!(pow(-0.0f64, 3.0), -0.0);
        assert!(pow(-0.0f64, 3.0).is_sign_negative());
        assert_eq!(pow(-0.0f64, -1.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_pow_zero_and_infinite_base() {
        assert_eq!(pow(0.0f64, 2.0), 0.0);
        assert_eq!(pow(0.0f64, -2.0), f64::INFINITY);
        assert_eq!(pow(f64::INFINITY, 2.0), f64::INFINITY);
        assert_eq!(pow(f64::INFINITY, -2.0), 0.0);
        assert_eq!(pow(0.5f64, f64::INFINITY), 0.0);
        assert_eq!(pow(2.0f64, f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_pown_exact_sign() {
        assert_eq!(pown(2.0f64, 10), 1024.0);
        assert_eq!(pown(-2.0f64, 3), -8.0);
        assert_eq!(pown(-2.0f32, 4), 16.0);
        assert_eq!(pown(2.0f64, -2), 0.25);
        assert_eq!(pown(7.0f64, 0), 1.0);
        assert_eq!(pown(0.0f64, -1), f64::INFINITY);
        assert_eq!(pown(-0.0f64, -3), f64::NEG_INFINITY);
        assert_eq!(pown(10.0f64, 400), f64::INFINITY);
        assert_eq!(pown(2.0f64, i32::MIN), 0.0);
    }
}
