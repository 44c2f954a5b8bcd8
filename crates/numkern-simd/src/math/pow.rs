// ─────────────────────────────────────────────────────────────────────
// Numkern — Vector Powers
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use super::exp::exp;
use super::log::log;
use super::{half, infinity, nan, one, zero};
use crate::lanes::LaneOps;

#[inline]
fn is_integer<V: LaneOps>(y: V) -> V::Mask {
    y.floor().cmp_eq(y)
}

/// Lanes holding a finite odd integer.
#[inline]
pub fn is_odd_integer<V: LaneOps>(y: V) -> V::Mask {
    let h = y * half();
    V::mask_and(is_integer(y), h.floor().cmp_ne(h))
}

/// Lane-wise x^y with the scalar kernel's sign and special-value rules.
pub fn pow<V: LaneOps>(x: V, y: V) -> V {
    let ax = x.abs();
    let magnitude = exp(y * log(ax));
    let y_finite = y.is_finite();

    let odd = V::mask_and(
        V::mask_and(x.is_sign_negative(), y_finite),
        is_odd_integer(y),
    );
    let neg_frac = V::mask_and(
        V::mask_and(x.cmp_lt(zero()), y_finite),
        V::mask_not(is_integer(y)),
    );
    let unit_inf = V::mask_and(y.is_infinite(), ax.cmp_eq(one()));
    let either_nan = V::mask_or(x.is_nan(), y.is_nan());
    let trivial = V::mask_or(y.cmp_eq(zero()), x.cmp_eq(one()));

    let r = V::select(odd, -magnitude, magnitude);
    let r = V::select(neg_frac, nan(), r);
    let r = V::select(unit_inf, one(), r);
    let r = V::select(either_nan, nan(), r);
    V::select(trivial, one(), r)
}

/// Lane-wise x^n by repeated squaring.
pub fn pown<V: LaneOps>(x: V, n: i32) -> V {
    let mut base = x;
    let mut k = n.unsigned_abs();
    let mut acc = one::<V>();
    while k > 0 {
        if k & 1 == 1 {
            acc = acc * base;
        }
        base = base * base;
        k >>= 1;
    }
    if n >= 0 {
        return acc;
    }
    V::select(acc.cmp_eq(zero()), infinity::<V>().copysign(acc), one::<V>() / acc)
}
