// ─────────────────────────────────────────────────────────────────────
// Numkern — Vector Kernels
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Elementary functions over any [`LaneOps`] group.
//!
//! Every kernel performs the operations of its scalar counterpart in
//! `numkern-math` in the same order, on every lane. Branches become
//! masks: all paths are evaluated and blended with `select`, special
//! cases are blended in last from lowest to highest priority. Lanes
//! that would feed garbage into a bit-level hook are replaced with a
//! harmless value first.

pub mod atan;
pub mod erf;
pub mod exp;
pub mod hyperbolic;
pub mod limiter;
pub mod log;
pub mod pow;
pub mod trig;

pub use atan::{acos, asin, atan, atan2};
pub use erf::{erf, erfc};
pub use exp::{exp, exp10, exp2, expm1};
pub use hyperbolic::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use limiter::flux_limiter;
pub use log::{log, log10, log1p, log2};
pub use pow::{pow, pown};
pub use trig::{cos, sin, sincos, tan};

use numkern_math::bits::cody_waite;
use numkern_types::tier::FloatTier;

use crate::lanes::LaneOps;

#[inline]
pub(crate) fn zero<V: LaneOps>() -> V {
    V::splat(V::Scalar::ZERO)
}

#[inline]
pub(crate) fn one<V: LaneOps>() -> V {
    V::splat(V::Scalar::ONE)
}

#[inline]
pub(crate) fn two<V: LaneOps>() -> V {
    V::splat(V::Scalar::TWO)
}

#[inline]
pub(crate) fn half<V: LaneOps>() -> V {
    V::splat(V::Scalar::HALF)
}

#[inline]
pub(crate) fn infinity<V: LaneOps>() -> V {
    V::splat(V::Scalar::INFINITY)
}

#[inline]
pub(crate) fn nan<V: LaneOps>() -> V {
    V::splat(V::Scalar::NAN)
}

/// Lane-wise [`numkern_math::poly::horner`].
#[inline]
pub fn horner<V: LaneOps>(x: V, coeffs: &[f64]) -> V {
    let Some((&last, rest)) = coeffs.split_last() else {
        return zero();
    };
    let mut acc = V::from_f64(last);
    for &c in rest.iter().rev() {
        acc = acc * x + V::from_f64(c);
    }
    acc
}

/// `p * 2^n` in two factors, for integral `n` whose halves are normal
/// exponents.
#[inline]
pub fn scale_pow2<V: LaneOps>(p: V, n: V) -> V {
    let n1 = (n * half()).floor();
    let n2 = n - n1;
    p * V::pow2i(n1) * V::pow2i(n2)
}

/// Splatted [`cody_waite`] pair.
#[inline]
pub(crate) fn cody_waite_lanes<V: LaneOps>(c: f64, c_lo: f64) -> (V, V) {
    let (hi, lo) = cody_waite::<V::Scalar>(c, c_lo);
    (V::splat(hi), V::splat(lo))
}
