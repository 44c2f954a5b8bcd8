// ─────────────────────────────────────────────────────────────────────
// Numkern — Property-Based Tests (proptest) for numkern-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for numkern-types using proptest.
//!
//! Covers: tier text format roundtrip, bit-level sign helpers,
//! configuration serialization roundtrip.

use numkern_types::config::{AcceptanceConfig, KernelConfig};
use numkern_types::tier::{FloatTier, PAIRING};
use proptest::prelude::*;

// ── Tier Text Format ─────────────────────────────────────────────────

proptest! {
    /// Printing with the tier format and parsing back is lossless (f64).
    #[test]
    fn f64_format_roundtrip(x in -1.0e300f64..1.0e300) {
        let text = FloatTier::format(x);
        let back = <f64 as FloatTier>::parse(&text).unwrap();
        prop_assert_eq!(back, x, "text = {}", text);
    }

    /// Printing with the tier format and parsing back is lossless (f32).
    #[test]
    fn f32_format_roundtrip(x in -1.0e30f32..1.0e30) {
        let text = FloatTier::format(x);
        let back = <f32 as FloatTier>::parse(&text).unwrap();
        prop_assert_eq!(back, x, "text = {}", text);
    }
}

// ── Bit-Level Sign Helpers ───────────────────────────────────────────

proptest! {
    /// Bitwise abs agrees with the inherent abs.
    #[test]
    fn abs_matches_inherent(x in proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL) {
        prop_assert_eq!(FloatTier::abs(x), x.abs());
    }

    /// copysign keeps magnitude and takes the sign of the second argument.
    #[test]
    fn copysign_matches_inherent(x in -1.0e10f64..1.0e10, s in -1.0f64..1.0) {
        prop_assert_eq!(FloatTier::copysign(x, s), x.copysign(s));
    }

    /// Raw bit roundtrip is the identity for f32.
    #[test]
    fn f32_raw_roundtrip(bits in 0u32..0x7f80_0000) {
        let x = f32::from_bits(bits);
        prop_assert_eq!(<f32 as FloatTier>::from_raw(FloatTier::to_raw(x)), x);
    }
}

// ── Configuration ────────────────────────────────────────────────────

proptest! {
    /// Any power-of-two multiplier with positive samples validates and
    /// survives a JSON roundtrip.
    #[test]
    fn config_roundtrip(shift in 0u32..16, samples in 1usize..100_000, seed in any::<u64>()) {
        let cfg = KernelConfig {
            pairing: PAIRING.code,
            acceptance: AcceptanceConfig {
                max_multiplier: 1 << shift,
                samples,
                seed,
            },
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back = KernelConfig::from_json(&json).unwrap();
        prop_assert_eq!(back.acceptance.max_multiplier, 1 << shift);
        prop_assert_eq!(back.acceptance.samples, samples);
        prop_assert_eq!(back.acceptance.seed, seed);
    }
}
