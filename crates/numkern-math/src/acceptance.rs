// ─────────────────────────────────────────────────────────────────────
// Numkern — Acceptance Check
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Escalating-epsilon comparison of computed against reference values.
//!
//! A pair `(got, expected)` is accepted at multiplier `k` when
//! `|got - expected| <= k * eps * max(|expected|, MIN_POSITIVE)`.
//! The smallest power-of-two `k` accepting a whole batch is the figure
//! reported for a function.

use numkern_types::config::AcceptanceConfig;
use numkern_types::tier::FloatTier;

/// Relative comparison at `k` epsilons. NaN only matches NaN and an
/// infinity only matches the same infinity.
pub fn within<T: FloatTier>(got: T, expected: T, k: u32) -> bool {
    if expected.is_nan() || got.is_nan() {
        return expected.is_nan() && got.is_nan();
    }
    if expected.is_infinite() || got.is_infinite() {
        return got == expected;
    }
    let magnitude = expected.abs();
    let scale = if magnitude > T::MIN_POSITIVE {
        magnitude
    } else {
        T::MIN_POSITIVE
    };
    let tolerance = (T::from_f64(f64::from(k)) * T::EPSILON) * scale;
    (got - expected).abs() <= tolerance
}

/// Smallest power of two `k <= cap` accepting every pair, if any.
pub fn minimal_multiplier<T: FloatTier>(pairs: &[(T, T)], cap: u32) -> Option<u32> {
    let mut k = 1u32;
    while k <= cap {
        if pairs.iter().all(|&(got, expected)| within(got, expected, k)) {
            return Some(k);
        }
        k = k.checked_mul(2)?;
    }
    None
}

/// Index and value of the pair furthest from its reference, measured in
/// epsilons of the reference magnitude.
pub fn worst_pair<T: FloatTier>(pairs: &[(T, T)]) -> Option<(usize, T, T)> {
    let mut worst: Option<(usize, f64)> = None;
    for (i, &(got, expected)) in pairs.iter().enumerate() {
        let scale = expected.abs().to_f64().max(T::MIN_POSITIVE.to_f64());
        let err = if within(got, expected, 0) {
            0.0
        } else {
            let diff = (got.to_f64() - expected.to_f64()).abs();
            if diff.is_nan() {
                f64::INFINITY
            } else {
                diff / (scale * T::EPSILON.to_f64())
            }
        };
        if worst.map_or(true, |(_, e)| err > e) {
            worst = Some((i, err));
        }
    }
    worst.map(|(i, _)| (i, pairs[i].0, pairs[i].1))
}

/// Runs the acceptance check with a configured cap.
pub trait AcceptanceCheck {
    fn check<T: FloatTier>(&self, pairs: &[(T, T)]) -> Option<u32>;
}

impl AcceptanceCheck for AcceptanceConfig {
    fn check<T: FloatTier>(&self, pairs: &[(T, T)]) -> Option<u32> {
        let k = minimal_multiplier(pairs, self.max_multiplier);
        if k.is_none() {
            if let Some((index, got, expected)) = worst_pair(pairs) {
                tracing::warn!(
                    index,
                    got = %got.format(),
                    expected = %expected.format(),
                    cap = self.max_multiplier,
                    "acceptance check failed"
                );
            }
        }
        k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_relative() {
        let x = 1.0f64;
        let next = f64::from_bits(x.to_bits() + 1);
        assert!(within(next, x, 1));
        assert!(!within(x + 4.0 * f64::EPSILON, x, 2));
        assert!(within(x + 4.0 * f64::EPSILON, x, 4));
    }

    #[test]
    fn test_within_special_values() {
        assert!(within(f64::NAN, f64::NAN, 1));
        assert!(!within(1.0, f64::NAN, 1024));
        assert!(!within(f64::NAN, 1.0, 1024));
        assert!(within(f64::INFINITY, f64::INFINITY, 1));
        assert!(!within(f64::MAX, f64::INFINITY, 1024));
        assert!(!within(f64::NEG_INFINITY, f64::INFINITY, 1024));
        assert!(within(0.0f32, 0.0, 1));
        assert!(within(f32::from_bits(1), 0.0, 1));
    }

    #[test]
    fn test_minimal_multiplier_escalates() {
        let base = 2.0f64;
        let pairs = [(base, base), (base + 3.0 * base * f64::EPSILON, base)];
        assert_eq!(minimal_multiplier(&pairs, 1024), Some(4));
        assert_eq!(minimal_multiplier(&pairs, 2), None);
        assert_eq!(minimal_multiplier::<f64>(&[], 1024), Some(1));
    }

    #[test]
    fn test_worst_pair_points_at_largest_error() {
        let pairs = [(1.0f64, 1.0), (1.5, 1.0), (1.1, 1.0)];
        let (i, got, _) = worst_pair(&pairs).unwrap();
        assert_eq!(i, 1);
        assert_eq!(got, 1.5);
    }

    #[test]
    fn test_config_check_uses_cap() {
        let cfg = AcceptanceConfig {
            max_multiplier: 8,
            ..AcceptanceConfig::default()
        };
        let pairs = [(1.0f32 + 16.0 * f32::EPSILON, 1.0f32)];
        assert_eq!(cfg.check(&pairs), None);
        assert_eq!(AcceptanceConfig::default().check(&pairs), Some(16));
    }
}
