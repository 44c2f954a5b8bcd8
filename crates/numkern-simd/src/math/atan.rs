// ─────────────────────────────────────────────────────────────────────
// Numkern — Vector Inverse Trigonometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use numkern_math::atan::half_turn;
use numkern_math::poly::{ATAN_BREAKS, ATAN_EVEN, ATAN_HI, ATAN_LO, ATAN_ODD};
use numkern_types::constants::{FRAC_3PI_4, FRAC_PI_2_HI, FRAC_PI_4};

use super::{horner, nan, one, two, zero};
use crate::lanes::LaneOps;

#[inline]
fn atan_tail<V: LaneOps>(t: V) -> V {
    let z = t * t;
    let w = z * z;
    let s1 = z * horner(w, &ATAN_ODD);
    let s2 = w * horner(w, &ATAN_EVEN);
    t * (s1 + s2)
}

pub fn atan<V: LaneOps>(x: V) -> V {
    let a = x.abs();
    let three_halves = V::from_f64(1.5);
    let below = ATAN_BREAKS.map(|b| a.cmp_lt(V::from_f64(b)));

    // Widest interval first so narrower ones overwrite it.
    let mut t = -one::<V>() / a;
    let mut hi = V::from_f64(ATAN_HI[3]);
    let mut lo = V::from_f64(ATAN_LO[3]);
    let reduced = [
        (two::<V>() * a - one()) / (two::<V>() + a),
        (a - one()) / (a + one()),
        (a - three_halves) / (one::<V>() + three_halves * a),
    ];
    for i in (0..3).rev() {
        t = V::select(below[i + 1], reduced[i], t);
        hi = V::select(below[i + 1], V::from_f64(ATAN_HI[i]), hi);
        lo = V::select(below[i + 1], V::from_f64(ATAN_LO[i]), lo);
    }
    t = V::select(below[0], a, t);

    let tail = atan_tail(t);
    let anchored = hi - ((tail - lo) - t);
    let r = V::select(below[0], t - tail, anchored).copysign(x);
    V::select(x.is_nan(), x, r)
}

pub fn atan2<V: LaneOps>(y: V, x: V) -> V {
    let (pi_hi, pi_lo) = half_turn::<V::Scalar>();
    let (pi_hi, pi_lo) = (V::splat(pi_hi), V::splat(pi_lo));
    let half_pi = V::from_f64(FRAC_PI_2_HI);
    let x_pos = x.cmp_gt(zero());

    let a = atan((y / x).abs());
    let general = V::select(x_pos, a, pi_hi - (a - pi_lo)).copysign(y);

    let x_inf_angle = V::select(
        y.is_infinite(),
        V::select(x_pos, V::from_f64(FRAC_PI_4), V::from_f64(FRAC_3PI_4)),
        V::select(x_pos, zero(), pi_hi),
    )
    .copysign(y);

    let x_zero = x.cmp_eq(zero());
    let y_zero_keeps = V::mask_or(
        x_pos,
        V::mask_and(x_zero, V::mask_not(x.is_sign_negative())),
    );
    let y_zero_angle = V::select(y_zero_keeps, y, pi_hi.copysign(y));

    let r = V::select(y.is_infinite(), half_pi.copysign(y), general);
    let r = V::select(x.is_infinite(), x_inf_angle, r);
    let r = V::select(x_zero, half_pi.copysign(y), r);
    let r = V::select(y.cmp_eq(zero()), y_zero_angle, r);
    V::select(V::mask_or(x.is_nan(), y.is_nan()), nan(), r)
}

pub fn asin<V: LaneOps>(x: V) -> V {
    atan2(x, ((one::<V>() - x) * (one::<V>() + x)).sqrt())
}

pub fn acos<V: LaneOps>(x: V) -> V {
    let r = two::<V>() * atan(((one::<V>() - x) / (one::<V>() + x)).sqrt());
    V::select(x.cmp_eq(-one::<V>()), V::splat(half_turn::<V::Scalar>().0), r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portable::Lanes;

    #[test]
    fn test_atan_intervals_match_scalar() {
        let xs = [0.1, -0.5, 0.9, 1.3, -2.0, 10.0, f64::INFINITY, -0.0];
        let v = atan(Lanes::<f64, 8>::load(&xs)).0;
        for (i, &x) in xs.iter().enumerate() {
            assert_eq!(v[i], numkern_math::atan::atan(x), "atan({x})");
        }
        assert!(v[7].is_sign_negative());
    }

    #[test]
    fn test_atan2_axes() {
        let y = Lanes::<f64, 6>::load(&[0.0, 0.0, -0.0, 1.0, f64::INFINITY, 1.0]);
        let x = Lanes::<f64, 6>::load(&[1.0, -1.0, -0.0, 0.0, f64::NEG_INFINITY, f64::NAN]);
        let r = atan2(y, x).0;
        assert_eq!(r[0], 0.0);
        assert_eq!(r[1], std::f64::consts::PI);
        assert_eq!(r[2], -std::f64::consts::PI);
        assert_eq!(r[3], std::f64::consts::FRAC_PI_2);
        assert_eq!(r[4], 3.0 * std::f64::consts::FRAC_PI_4);
        assert!(r[5].is_nan());
    }

    #[test]
    fn test_acos_at_minus_one() {
        let r = acos(Lanes::<f32, 2>::load(&[-1.0, 1.0])).0;
        assert_eq!(r, [std::f32::consts::PI, 0.0]);
    }
}
