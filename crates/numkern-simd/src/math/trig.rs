// ─────────────────────────────────────────────────────────────────────
// Numkern — Vector Trigonometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Quadrant selection is a blend over the four rotations of `(s, c)`.

use numkern_math::bits::{integral_threshold, quarter_turn};
use numkern_math::poly::{COS, SIN};
use numkern_types::constants::FRAC_2_PI;

use super::{horner, nan};
use crate::lanes::LaneOps;

/// Reduced argument and quadrant in `{0, 1, 2, 3}` per lane.
pub fn reduce<V: LaneOps>(x: V) -> (V, V) {
    let q = (x * V::from_f64(FRAC_2_PI)).round_int();
    let [t1, t2, t3] = quarter_turn::<V::Scalar>().map(V::splat);
    let qh = q.truncate_half();
    let ql = q - qh;
    let mut r = x - qh * t1;
    r = r - ql * t1;
    r = r - qh * t2;
    r = r - ql * t2;
    r = r - qh * t3;
    r = r - ql * t3;
    let quadrant = q - V::from_f64(4.0) * (q * V::from_f64(0.25)).floor();
    (r, quadrant)
}

#[inline]
fn polys<V: LaneOps>(r: V) -> (V, V) {
    let z = r * r;
    (r * horner(z, &SIN), horner(z, &COS))
}

/// Lanes whose quadrant cannot be resolved, NaN included.
#[inline]
fn unreducible<V: LaneOps>(x: V) -> V::Mask {
    V::mask_not(x.abs().cmp_lt(V::splat(integral_threshold::<V::Scalar>())))
}

pub fn sincos<V: LaneOps>(x: V) -> (V, V) {
    let (r, quadrant) = reduce(x);
    let (s, c) = polys(r);
    let q0 = quadrant.cmp_eq(V::from_f64(0.0));
    let q1 = quadrant.cmp_eq(V::from_f64(1.0));
    let q2 = quadrant.cmp_eq(V::from_f64(2.0));

    let sin = V::select(q0, s, V::select(q1, c, V::select(q2, -s, -c)));
    let cos = V::select(q0, c, V::select(q1, -s, V::select(q2, -c, s)));
    let bad = unreducible(x);
    (V::select(bad, nan(), sin), V::select(bad, nan(), cos))
}

pub fn sin<V: LaneOps>(x: V) -> V {
    sincos(x).0
}

pub fn cos<V: LaneOps>(x: V) -> V {
    sincos(x).1
}

pub fn tan<V: LaneOps>(x: V) -> V {
    let (r, quadrant) = reduce(x);
    let (s, c) = polys(r);
    let odd = V::mask_or(
        quadrant.cmp_eq(V::from_f64(1.0)),
        quadrant.cmp_eq(V::from_f64(3.0)),
    );
    let t = V::select(odd, -c / s, s / c);
    V::select(unreducible(x), nan(), t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portable::Lanes;

    #[test]
    fn test_quadrants_match_scalar() {
        let xs = [-4.0, -2.0, -0.5, 0.0, 1.0, 2.5, 4.0, 1.0e6];
        let (s, c) = sincos(Lanes::<f64, 8>::load(&xs));
        for (i, &x) in xs.iter().enumerate() {
            let (ss, sc) = numkern_math::trig::sincos(x);
            assert_eq!((s.0[i], c.0[i]), (ss, sc), "sincos({x})");
        }
    }

    #[test]
    fn test_unreducible_lanes() {
        let xs = [f32::INFINITY, f32::NAN, 2f32.powi(24), 1.0];
        let t = tan(Lanes::<f32, 4>::load(&xs)).0;
        assert!(t[0].is_nan() && t[1].is_nan() && t[2].is_nan());
        assert_eq!(t[3], numkern_math::trig::tan(1.0f32));
    }
}
