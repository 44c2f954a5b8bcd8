// ─────────────────────────────────────────────────────────────────────
// Numkern — Vector Flux Limiters
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use numkern_math::limiter::FluxLimiter;
use numkern_types::tier::FloatTier;

use super::{half, one, two, zero};
use crate::lanes::LaneOps;

/// Lane-wise [`FluxLimiter::apply`].
pub fn flux_limiter<V: LaneOps>(kind: FluxLimiter, d1: V, d2: V) -> V {
    let eps = V::splat(V::Scalar::EPSILON);
    let r = d1 / d2;
    let limited = match kind {
        FluxLimiter::Total => return zero(),
        FluxLimiter::Null => return one(),
        FluxLimiter::Centred => return V::select(d2.abs().cmp_le(eps), zero(), r),
        FluxLimiter::Superbee => (two::<V>() * r).min(one()).max(r.min(two())),
        FluxLimiter::Minmod => r.min(one()),
        FluxLimiter::VanLeer => (r + r.abs()) / (one::<V>() + r.abs()),
        FluxLimiter::VanAlbada => (r + r * r) / (one::<V>() + r * r),
        FluxLimiter::Minsuper => r.min(two()),
        FluxLimiter::Supermin => (two::<V>() * r).min(one()),
        FluxLimiter::MonotonizedCentral => {
            let steep = r.cmp_ge(V::from_f64(3.0));
            let moderate = r.cmp_ge(V::from_f64(1.0 / 3.0));
            let r_mid = half::<V>() * (r + one());
            V::select(steep, two(), V::select(moderate, r_mid, two::<V>() * r))
        }
        FluxLimiter::Mean => half::<V>() * (r + one()),
    };
    let opposed = (d1 * d2).cmp_le(eps);
    V::select(opposed, zero(), limited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portable::Lanes;

    #[test]
    fn test_every_limiter_matches_scalar() {
        let d1 = [4.0, 1.0, 1.0, -2.0, 0.3, 1.0e-20, 5.0, 1.0];
        let d2 = [1.0, 4.0, 2.0, -1.0, 0.9, 1.0e-20, -5.0, 3.0];
        let (v1, v2) = (Lanes::<f64, 8>::load(&d1), Lanes::<f64, 8>::load(&d2));
        for kind in FluxLimiter::ALL {
            let v = flux_limiter(kind, v1, v2).0;
            for i in 0..8 {
                assert_eq!(v[i], kind.apply(d1[i], d2[i]), "{} lane {i}", kind.name());
            }
        }
    }
}
