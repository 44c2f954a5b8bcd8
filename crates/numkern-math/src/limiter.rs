// ─────────────────────────────────────────────────────────────────────
// Numkern — Flux Limiters
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Slope limiters for upwind advection schemes.
//!
//! Each limiter maps two consecutive differences `d1`, `d2` to a factor
//! in `[0, 2]`, usually through the ratio `r = d1 / d2`. Opposite-signed
//! or vanishing differences (`d1 * d2 <= eps`) give 0.

use numkern_types::error::{KernelError, KernelResult};
use numkern_types::tier::FloatTier;

/// The eleven limiters, in stable code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FluxLimiter {
    /// Always 0: first-order upwind.
    Total,
    /// Always 1: no limiting.
    Null,
    /// Plain ratio `d1 / d2`.
    Centred,
    Superbee,
    Minmod,
    VanLeer,
    VanAlbada,
    Minsuper,
    Supermin,
    MonotonizedCentral,
    Mean,
}

impl FluxLimiter {
    pub const ALL: [FluxLimiter; 11] = [
        FluxLimiter::Total,
        FluxLimiter::Null,
        FluxLimiter::Centred,
        FluxLimiter::Superbee,
        FluxLimiter::Minmod,
        FluxLimiter::VanLeer,
        FluxLimiter::VanAlbada,
        FluxLimiter::Minsuper,
        FluxLimiter::Supermin,
        FluxLimiter::MonotonizedCentral,
        FluxLimiter::Mean,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> KernelResult<Self> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| KernelError::ConfigError(format!("unknown flux limiter code {code}")))
    }

    pub fn name(self) -> &'static str {
        match self {
            FluxLimiter::Total => "total",
            FluxLimiter::Null => "null",
            FluxLimiter::Centred => "centred",
            FluxLimiter::Superbee => "superbee",
            FluxLimiter::Minmod => "minmod",
            FluxLimiter::VanLeer => "van_leer",
            FluxLimiter::VanAlbada => "van_albada",
            FluxLimiter::Minsuper => "minsuper",
            FluxLimiter::Supermin => "supermin",
            FluxLimiter::MonotonizedCentral => "monotonized_central",
            FluxLimiter::Mean => "mean",
        }
    }

    pub fn apply<T: FloatTier>(self, d1: T, d2: T) -> T {
        self.select::<T>()(d1, d2)
    }

    /// The limiter as a plain function pointer, for inner loops that
    /// choose once and call many times.
    pub fn select<T: FloatTier>(self) -> fn(T, T) -> T {
        match self {
            FluxLimiter::Total => total,
            FluxLimiter::Null => null,
            FluxLimiter::Centred => centred,
            FluxLimiter::Superbee => superbee,
            FluxLimiter::Minmod => minmod,
            FluxLimiter::VanLeer => van_leer,
            FluxLimiter::VanAlbada => van_albada,
            FluxLimiter::Minsuper => minsuper,
            FluxLimiter::Supermin => supermin,
            FluxLimiter::MonotonizedCentral => monotonized_central,
            FluxLimiter::Mean => mean,
        }
    }
}

/// Smaller of two values by `a < b`; the second wins ties and NaN.
#[inline]
pub fn min_of<T: FloatTier>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

#[inline]
pub fn max_of<T: FloatTier>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// `Some(d1 / d2)` when the differences share a sign and are not both
/// negligible.
#[inline]
fn ratio<T: FloatTier>(d1: T, d2: T) -> Option<T> {
    if d1 * d2 <= T::EPSILON {
        None
    } else {
        Some(d1 / d2)
    }
}

pub fn total<T: FloatTier>(_d1: T, _d2: T) -> T {
    T::ZERO
}

pub fn null<T: FloatTier>(_d1: T, _d2: T) -> T {
    T::ONE
}

pub fn centred<T: FloatTier>(d1: T, d2: T) -> T {
    if d2.abs() <= T::EPSILON {
        T::ZERO
    } else {
        d1 / d2
    }
}

pub fn superbee<T: FloatTier>(d1: T, d2: T) -> T {
    ratio(d1, d2).map_or(T::ZERO, |r| {
        max_of(min_of(T::TWO * r, T::ONE), min_of(r, T::TWO))
    })
}

pub fn minmod<T: FloatTier>(d1: T, d2: T) -> T {
    ratio(d1, d2).map_or(T::ZERO, |r| min_of(r, T::ONE))
}

pub fn van_leer<T: FloatTier>(d1: T, d2: T) -> T {
    ratio(d1, d2).map_or(T::ZERO, |r| (r + r.abs()) / (T::ONE + r.abs()))
}

pub fn van_albada<T: FloatTier>(d1: T, d2: T) -> T {
    ratio(d1, d2).map_or(T::ZERO, |r| (r + r * r) / (T::ONE + r * r))
}

pub fn minsuper<T: FloatTier>(d1: T, d2: T) -> T {
    ratio(d1, d2).map_or(T::ZERO, |r| min_of(r, T::TWO))
}

pub fn supermin<T: FloatTier>(d1: T, d2: T) -> T {
    ratio(d1, d2).map_or(T::ZERO, |r| min_of(T::TWO * r, T::ONE))
}

pub fn monotonized_central<T: FloatTier>(d1: T, d2: T) -> T {
    ratio(d1, d2).map_or(T::ZERO, |r| {
        if r >= T::from_f64(3.0) {
            T::TWO
        } else if r >= T::from_f64(1.0 / 3.0) {
            T::HALF * (r + T::ONE)
        } else {
            T::TWO * r
        }
    })
}

pub fn mean<T: FloatTier>(d1: T, d2: T) -> T {
    ratio(d1, d2).map_or(T::ZERO, |r| T::HALF * (r + T::ONE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for (i, limiter) in FluxLimiter::ALL.iter().enumerate() {
            assert_eq!(limiter.code() as usize, i);
            assert_eq!(FluxLimiter::from_code(i as u8).unwrap(), *limiter);
        }
        assert!(FluxLimiter::from_code(11).is_err());
    }

    #[test]
    fn test_equal_differences_give_one() {
        for limiter in FluxLimiter::ALL {
            let expected = if limiter == FluxLimiter::Total { 0.0 } else { 1.0 };
            for &d in &[0.5f64, -3.0, 100.0] {
                assert_eq!(limiter.apply(d, d), expected, "{}", limiter.name());
            }
            assert_eq!(limiter.apply(2.0f32, 2.0f32), expected as f32);
        }
    }

    #[test]
    fn test_opposite_signs_are_clipped() {
        for limiter in FluxLimiter::ALL {
            let v = limiter.apply(1.0f64, -1.0);
            match limiter {
                FluxLimiter::Null => assert_eq!(v, 1.0),
                FluxLimiter::Centred => assert_eq!(v, -1.0),
                _ => assert_eq!(v, 0.0, "{}", limiter.name()),
            }
        }
    }

    #[test]
    fn test_known_values() {
        // r = 4
        assert_eq!(superbee(4.0f64, 1.0), 2.0);
        assert_eq!(minmod(4.0f64, 1.0), 1.0);
        assert_eq!(van_leer(4.0f64, 1.0), 1.6);
        assert_eq!(van_albada(4.0f64, 1.0), 20.0 / 17.0);
        assert_eq!(minsuper(4.0f64, 1.0), 2.0);
        assert_eq!(supermin(4.0f64, 1.0), 1.0);
        assert_eq!(monotonized_central(4.0f64, 1.0), 2.0);
        assert_eq!(mean(4.0f64, 1.0), 2.5);
        // r = 1/4
        assert_eq!(superbee(1.0f64, 4.0), 0.5);
        assert_eq!(monotonized_central(1.0f64, 4.0), 0.5);
        assert_eq!(monotonized_central(1.0f64, 2.0), 0.75);
    }

    #[test]
    fn test_centred_guard() {
        assert_eq!(centred(1.0f64, 0.0), 0.0);
        assert_eq!(centred(1.0f64, 1.0e-20), 0.0);
        assert_eq!(centred(3.0f64, 2.0), 1.5);
    }
}
