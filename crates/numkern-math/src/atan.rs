// ─────────────────────────────────────────────────────────────────────
// Numkern — Inverse Trigonometric Functions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! atan, atan2, asin, acos.
//!
//! `atan` maps `|x|` onto `|t| <= 7/16` around one of the anchors
//! 1/2, 1, 3/2 or infinity and adds the anchor value back in two parts.
//! `asin` and `acos` are expressed through `atan2` and `atan`.

use numkern_types::constants::{FRAC_3PI_4, FRAC_PI_2_HI, FRAC_PI_4, PI_HI, PI_LO};
use numkern_types::tier::FloatTier;

use crate::poly::{horner, ATAN_BREAKS, ATAN_EVEN, ATAN_HI, ATAN_LO, ATAN_ODD};

/// pi as `(hi, lo)` for the tier, `lo` carrying what `hi` rounds away.
#[inline]
pub fn half_turn<T: FloatTier>() -> (T, T) {
    let hi = T::from_f64(PI_HI);
    (hi, T::from_f64((PI_HI - hi.to_f64()) + PI_LO))
}

/// Reduced argument and anchor index for `a = |x|`; `None` means no
/// anchor (the polynomial applies to `a` directly).
#[inline]
fn reduce<T: FloatTier>(a: T) -> (T, Option<usize>) {
    let one = T::ONE;
    let three_halves = T::from_f64(1.5);
    if a < T::from_f64(ATAN_BREAKS[0]) {
        (a, None)
    } else if a < T::from_f64(ATAN_BREAKS[1]) {
        ((T::TWO * a - one) / (T::TWO + a), Some(0))
    } else if a < T::from_f64(ATAN_BREAKS[2]) {
        ((a - one) / (a + one), Some(1))
    } else if a < T::from_f64(ATAN_BREAKS[3]) {
        ((a - three_halves) / (one + three_halves * a), Some(2))
    } else {
        (-one / a, Some(3))
    }
}

/// `t * (s1 + s2)`: the odd tail of atan(t) beyond the linear term.
#[inline]
pub fn atan_tail<T: FloatTier>(t: T) -> T {
    let z = t * t;
    let w = z * z;
    let s1 = z * horner(w, &ATAN_ODD);
    let s2 = w * horner(w, &ATAN_EVEN);
    t * (s1 + s2)
}

pub fn atan<T: FloatTier>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    let (t, anchor) = reduce(x.abs());
    let tail = atan_tail(t);
    let r = match anchor {
        None => t - tail,
        Some(i) => {
            let hi = T::from_f64(ATAN_HI[i]);
            let lo = T::from_f64(ATAN_LO[i]);
            hi - ((tail - lo) - t)
        }
    };
    r.copysign(x)
}

/// Angle of the point `(x, y)`, in `[-pi, pi]`.
pub fn atan2<T: FloatTier>(y: T, x: T) -> T {
    if x.is_nan() || y.is_nan() {
        return T::NAN;
    }
    let (pi_hi, pi_lo) = half_turn::<T>();
    let half_pi = T::from_f64(FRAC_PI_2_HI);
    if y == T::ZERO {
        return if x > T::ZERO || (x == T::ZERO && !x.is_sign_negative()) {
            y
        } else {
            pi_hi.copysign(y)
        };
    }
    if x == T::ZERO {
        return half_pi.copysign(y);
    }
    if x.is_infinite() {
        let angle = match (y.is_infinite(), x > T::ZERO) {
            (true, true) => T::from_f64(FRAC_PI_4),
            (true, false) => T::from_f64(FRAC_3PI_4),
            (false, true) => T::ZERO,
            (false, false) => pi_hi,
        };
        return angle.copysign(y);
    }
    if y.is_infinite() {
        return half_pi.copysign(y);
    }
    let a = atan((y / x).abs());
    if x > T::ZERO {
        a.copysign(y)
    } else {
        (pi_hi - (a - pi_lo)).copysign(y)
    }
}

pub fn asin<T: FloatTier>(x: T) -> T {
    atan2(x, ((T::ONE - x) * (T::ONE + x)).sqrt())
}

pub fn acos<T: FloatTier>(x: T) -> T {
    if x == -T::ONE {
        return half_turn::<T>().0;
    }
    T::TWO * atan(((T::ONE - x) / (T::ONE + x)).sqrt())
}
