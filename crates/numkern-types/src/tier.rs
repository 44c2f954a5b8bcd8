// ─────────────────────────────────────────────────────────────────────
// Numkern — Precision Tiers
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Floating-point precision tiers.
//!
//! Every kernel function is generic over [`FloatTier`]. Two tiers, [`Low`]
//! and [`High`], are bound at build time through Cargo features:
//!
//! | feature            | code | Low | High |
//! |--------------------|------|-----|------|
//! | `pairing-f32-f32`  | 0    | f32 | f32  |
//! | (default)          | 1    | f32 | f64  |
//! | `pairing-f64-f64`  | 2    | f64 | f64  |

use std::fmt::{Debug, Display, LowerExp};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};

#[cfg(all(feature = "pairing-f32-f32", feature = "pairing-f64-f64"))]
compile_error!("features `pairing-f32-f32` and `pairing-f64-f64` are mutually exclusive");

/// Storage kind of a precision tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierKind {
    F32,
    F64,
    /// x87 extended precision (80 bits stored in 96/128).
    F80,
    F128,
}

impl TierKind {
    /// Storage width in bits.
    pub fn bits(self) -> u32 {
        match self {
            TierKind::F32 => 32,
            TierKind::F64 => 64,
            TierKind::F80 => 80,
            TierKind::F128 => 128,
        }
    }

    /// Whether a native Rust float backs this kind.
    pub fn is_supported(self) -> bool {
        matches!(self, TierKind::F32 | TierKind::F64)
    }
}

/// A (LOW, HIGH) tier binding, identified by a small integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPairing {
    pub code: u8,
    pub low: TierKind,
    pub high: TierKind,
}

impl TierPairing {
    pub const F32_F32: TierPairing = TierPairing {
        code: 0,
        low: TierKind::F32,
        high: TierKind::F32,
    };
    pub const F32_F64: TierPairing = TierPairing {
        code: 1,
        low: TierKind::F32,
        high: TierKind::F64,
    };
    pub const F64_F64: TierPairing = TierPairing {
        code: 2,
        low: TierKind::F64,
        high: TierKind::F64,
    };

    /// Resolve a pairing code. Codes 3..=5 name extended and quad
    /// pairings, which are rejected.
    pub fn from_code(code: u8) -> KernelResult<Self> {
        match code {
            0 => Ok(Self::F32_F32),
            1 => Ok(Self::F32_F64),
            2 => Ok(Self::F64_F64),
            3 | 4 => Err(KernelError::UnsupportedTier(TierKind::F80)),
            5 => Err(KernelError::UnsupportedTier(TierKind::F128)),
            other => Err(KernelError::ConfigError(format!(
                "unknown tier pairing code {other}"
            ))),
        }
    }
}

#[cfg(feature = "pairing-f32-f32")]
pub type Low = f32;
#[cfg(feature = "pairing-f32-f32")]
pub type High = f32;
#[cfg(feature = "pairing-f32-f32")]
pub const PAIRING: TierPairing = TierPairing::F32_F32;

#[cfg(feature = "pairing-f64-f64")]
pub type Low = f64;
#[cfg(feature = "pairing-f64-f64")]
pub type High = f64;
#[cfg(feature = "pairing-f64-f64")]
pub const PAIRING: TierPairing = TierPairing::F64_F64;

#[cfg(not(any(feature = "pairing-f32-f32", feature = "pairing-f64-f64")))]
pub type Low = f32;
#[cfg(not(any(feature = "pairing-f32-f32", feature = "pairing-f64-f64")))]
pub type High = f64;
#[cfg(not(any(feature = "pairing-f32-f32", feature = "pairing-f64-f64")))]
pub const PAIRING: TierPairing = TierPairing::F32_F64;

/// A floating-point type usable as a kernel precision tier.
///
/// Raw bits are widened to `u64` so bit-level algorithms can be written
/// once for both widths.
pub trait FloatTier:
    Copy
    + Debug
    + Display
    + LowerExp
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const KIND: TierKind;
    /// Machine epsilon of the tier.
    const EPSILON: Self;
    /// Explicit mantissa bits (52 for f64).
    const MANTISSA_BITS: u32;
    const EXPONENT_BITS: u32;
    const EXPONENT_BIAS: i32;
    /// Fractional digits printed by [`FloatTier::format`].
    const DIGITS: usize;

    const ZERO: Self;
    const ONE: Self;
    const HALF: Self;
    const TWO: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    const NAN: Self;
    const MAX: Self;
    const MIN_POSITIVE: Self;

    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
    fn to_raw(self) -> u64;
    fn from_raw(bits: u64) -> Self;
    /// IEEE 754 correctly rounded square root.
    fn sqrt(self) -> Self;
    fn parse(text: &str) -> KernelResult<Self>;

    fn from_i32(value: i32) -> Self {
        Self::from_f64(f64::from(value))
    }

    /// Truncating conversion of an integral value; saturates outside `i32`.
    fn to_i32(self) -> i32 {
        self.to_f64() as i32
    }

    fn sign_bit() -> u64 {
        1u64 << (Self::MANTISSA_BITS + Self::EXPONENT_BITS)
    }

    fn mantissa_mask() -> u64 {
        (1u64 << Self::MANTISSA_BITS) - 1
    }

    fn exponent_mask() -> u64 {
        ((1u64 << Self::EXPONENT_BITS) - 1) << Self::MANTISSA_BITS
    }

    fn abs(self) -> Self {
        Self::from_raw(self.to_raw() & !Self::sign_bit())
    }

    /// Magnitude of `self` with the sign bit of `sign`.
    fn copysign(self, sign: Self) -> Self {
        Self::from_raw((self.to_raw() & !Self::sign_bit()) | (sign.to_raw() & Self::sign_bit()))
    }

    fn is_sign_negative(self) -> bool {
        self.to_raw() & Self::sign_bit() != 0
    }

    #[allow(clippy::eq_op)]
    fn is_nan(self) -> bool {
        self != self
    }

    fn is_infinite(self) -> bool {
        self.abs() == Self::INFINITY
    }

    fn is_finite(self) -> bool {
        self.abs() < Self::INFINITY
    }

    /// Scientific notation with the tier's digit count.
    fn format(self) -> String {
        format!("{:.*e}", Self::DIGITS, self)
    }
}

impl FloatTier for f32 {
    const KIND: TierKind = TierKind::F32;
    const EPSILON: Self = f32::EPSILON;
    const MANTISSA_BITS: u32 = 23;
    const EXPONENT_BITS: u32 = 8;
    const EXPONENT_BIAS: i32 = 127;
    const DIGITS: usize = 8;

    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const NAN: Self = f32::NAN;
    const MAX: Self = f32::MAX;
    const MIN_POSITIVE: Self = f32::MIN_POSITIVE;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn to_raw(self) -> u64 {
        u64::from(self.to_bits())
    }

    #[inline]
    fn from_raw(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }

    fn parse(text: &str) -> KernelResult<Self> {
        text.trim().parse::<f32>().map_err(|_| KernelError::Parse {
            text: text.to_string(),
            kind: TierKind::F32,
        })
    }
}

impl FloatTier for f64 {
    const KIND: TierKind = TierKind::F64;
    const EPSILON: Self = f64::EPSILON;
    const MANTISSA_BITS: u32 = 52;
    const EXPONENT_BITS: u32 = 11;
    const EXPONENT_BIAS: i32 = 1023;
    const DIGITS: usize = 16;

    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const NAN: Self = f64::NAN;
    const MAX: Self = f64::MAX;
    const MIN_POSITIVE: Self = f64::MIN_POSITIVE;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn to_raw(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn from_raw(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    fn parse(text: &str) -> KernelResult<Self> {
        text.trim().parse::<f64>().map_err(|_| KernelError::Parse {
            text: text.to_string(),
            kind: TierKind::F64,
        })
    }
}
