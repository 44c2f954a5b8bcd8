// ─────────────────────────────────────────────────────────────────────
// Numkern — Lane Abstraction
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The lane-group interface every SIMD backend implements.
//!
//! A lane group holds `LANES` values of one precision tier. Comparisons
//! yield a backend-specific mask that only feeds `select` and the mask
//! combinators, so vector kernels compute every branch and blend the
//! results without leaving the registers.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use numkern_math::bits::integral_threshold;
use numkern_types::tier::FloatTier;

/// Instruction-set family a lane group is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Isa {
    /// Plain arrays, any width; also the RISC-V path.
    Portable,
    Sse2,
    Avx2,
    Avx512,
    Neon,
}

impl Isa {
    pub fn name(self) -> &'static str {
        match self {
            Isa::Portable => "portable",
            Isa::Sse2 => "sse2",
            Isa::Avx2 => "avx2",
            Isa::Avx512 => "avx512f",
            Isa::Neon => "neon",
        }
    }

    /// Register width in bits, or `None` for the portable arrays.
    pub fn register_bits(self) -> Option<u32> {
        match self {
            Isa::Portable => None,
            Isa::Sse2 | Isa::Neon => Some(128),
            Isa::Avx2 => Some(256),
            Isa::Avx512 => Some(512),
        }
    }

    /// Backends compiled into this build.
    pub fn available() -> Vec<Isa> {
        let mut isas = vec![Isa::Portable];
        if cfg!(target_arch = "x86_64") {
            isas.push(Isa::Sse2);
        }
        if cfg!(all(target_arch = "x86_64", target_feature = "avx2")) {
            isas.push(Isa::Avx2);
        }
        if cfg!(all(target_arch = "x86_64", target_feature = "avx512f")) {
            isas.push(Isa::Avx512);
        }
        if cfg!(target_arch = "aarch64") {
            isas.push(Isa::Neon);
        }
        isas
    }
}

/// A group of `LANES` floating-point values processed together.
///
/// Arithmetic is IEEE 754 per lane with the same rounding as the scalar
/// operators, so a kernel written against this trait reproduces the
/// scalar kernel when it performs the same operations in the same order.
pub trait LaneOps:
    Copy
    + Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    type Scalar: FloatTier;
    type Mask: Copy;
    const LANES: usize;
    const ISA: Isa;

    fn splat(value: Self::Scalar) -> Self;

    /// Load up to `LANES` values; missing lanes are zero.
    fn load(src: &[Self::Scalar]) -> Self;

    /// Store up to `dst.len()` lanes; surplus lanes are dropped.
    fn store(self, dst: &mut [Self::Scalar]);

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;

    /// Magnitude of `self` with the sign bit of `sign`.
    fn copysign(self, sign: Self) -> Self;

    fn cmp_eq(self, other: Self) -> Self::Mask;
    fn cmp_lt(self, other: Self) -> Self::Mask;
    fn cmp_le(self, other: Self) -> Self::Mask;
    fn cmp_gt(self, other: Self) -> Self::Mask;

    fn mask_and(a: Self::Mask, b: Self::Mask) -> Self::Mask;
    fn mask_or(a: Self::Mask, b: Self::Mask) -> Self::Mask;
    fn mask_not(a: Self::Mask) -> Self::Mask;

    /// `on_true` where the mask is set, `on_false` elsewhere.
    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self;

    /// 2^n per lane for integral `n` in the normal exponent range.
    fn pow2i(n: Self) -> Self;

    /// Mantissa in `[1, 2)` and exponent of positive normal lanes.
    fn split_exponent(self) -> (Self, Self);

    /// Clear the low `MANTISSA_BITS / 2 + 1` mantissa bits of each lane.
    fn truncate_half(self) -> Self;

    #[inline]
    fn from_f64(value: f64) -> Self {
        Self::splat(Self::Scalar::from_f64(value))
    }

    #[inline]
    fn cmp_ge(self, other: Self) -> Self::Mask {
        other.cmp_le(self)
    }

    #[inline]
    fn cmp_ne(self, other: Self) -> Self::Mask {
        Self::mask_not(self.cmp_eq(other))
    }

    #[inline]
    fn is_nan(self) -> Self::Mask {
        self.cmp_ne(self)
    }

    #[inline]
    fn is_finite(self) -> Self::Mask {
        self.abs().cmp_lt(Self::splat(Self::Scalar::INFINITY))
    }

    #[inline]
    fn is_infinite(self) -> Self::Mask {
        self.abs().cmp_eq(Self::splat(Self::Scalar::INFINITY))
    }

    #[inline]
    fn is_sign_negative(self) -> Self::Mask {
        Self::splat(Self::Scalar::ONE)
            .copysign(self)
            .cmp_lt(Self::splat(Self::Scalar::ZERO))
    }

    /// Round to nearest, ties to even; integral lanes, infinities and NaN
    /// pass through.
    #[inline]
    fn round_int(self) -> Self {
        let big = Self::splat(integral_threshold::<Self::Scalar>());
        let shift = big.copysign(self);
        let rounded = (self + shift) - shift;
        Self::select(self.abs().cmp_lt(big), rounded, self)
    }

    #[inline]
    fn floor(self) -> Self {
        let r = self.round_int();
        Self::select(r.cmp_gt(self), r - Self::splat(Self::Scalar::ONE), r)
    }

    /// Lane-wise `self < other ? self : other`.
    #[inline]
    fn min(self, other: Self) -> Self {
        Self::select(self.cmp_lt(other), self, other)
    }

    /// Lane-wise `self > other ? self : other`.
    #[inline]
    fn max(self, other: Self) -> Self {
        Self::select(self.cmp_gt(other), self, other)
    }

    fn to_vec(self) -> Vec<Self::Scalar> {
        let mut out = vec![Self::Scalar::ZERO; Self::LANES];
        self.store(&mut out);
        out
    }
}

/// `Add`/`Sub`/`Mul`/`Div` for a single-register newtype from the
/// matching two-operand intrinsics.
macro_rules! lane_arith {
    ($ty:ident, $add:ident, $sub:ident, $mul:ident, $div:ident) => {
        impl std::ops::Add for $ty {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                // SAFETY: the backend module is only compiled when its
                // target feature is enabled.
                $ty(unsafe { $add(self.0, rhs.0) })
            }
        }

        impl std::ops::Sub for $ty {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                // SAFETY: as for `add`.
                $ty(unsafe { $sub(self.0, rhs.0) })
            }
        }

        impl std::ops::Mul for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                // SAFETY: as for `add`.
                $ty(unsafe { $mul(self.0, rhs.0) })
            }
        }

        impl std::ops::Div for $ty {
            type Output = Self;
            #[inline]
            fn div(self, rhs: Self) -> Self {
                // SAFETY: as for `add`.
                $ty(unsafe { $div(self.0, rhs.0) })
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use lane_arith;
