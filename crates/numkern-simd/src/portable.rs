// ─────────────────────────────────────────────────────────────────────
// Numkern — Portable Lanes
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Array-backed lane groups of any width.
//!
//! Serves targets without stable intrinsics (RISC-V V included) and the
//! widths a target has no register for. The optimiser usually maps the
//! lane loops onto whatever vector unit is enabled.

use std::array;
use std::ops::{Add, Div, Mul, Neg, Sub};

use numkern_math::bits::{split_exponent, truncate_half};
use numkern_types::tier::FloatTier;

use crate::lanes::{Isa, LaneOps};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lanes<T, const N: usize>(pub [T; N]);

impl<T: FloatTier, const N: usize> Lanes<T, N> {
    #[inline]
    fn map(self, f: impl Fn(T) -> T) -> Self {
        Lanes(array::from_fn(|i| f(self.0[i])))
    }

    #[inline]
    fn zip(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        Lanes(array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    #[inline]
    fn compare(self, other: Self, f: impl Fn(T, T) -> bool) -> [bool; N] {
        array::from_fn(|i| f(self.0[i], other.0[i]))
    }
}

impl<T: FloatTier, const N: usize> Add for Lanes<T, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl<T: FloatTier, const N: usize> Sub for Lanes<T, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl<T: FloatTier, const N: usize> Mul for Lanes<T, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a * b)
    }
}

impl<T: FloatTier, const N: usize> Div for Lanes<T, N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a / b)
    }
}

impl<T: FloatTier, const N: usize> Neg for Lanes<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<T: FloatTier, const N: usize> LaneOps for Lanes<T, N> {
    type Scalar = T;
    type Mask = [bool; N];
    const LANES: usize = N;
    const ISA: Isa = Isa::Portable;

    #[inline]
    fn splat(value: T) -> Self {
        Lanes([value; N])
    }

    #[inline]
    fn load(src: &[T]) -> Self {
        Lanes(array::from_fn(|i| src.get(i).copied().unwrap_or(T::ZERO)))
    }

    #[inline]
    fn store(self, dst: &mut [T]) {
        for (d, s) in dst.iter_mut().zip(self.0) {
            *d = s;
        }
    }

    #[inline]
    fn sqrt(self) -> Self {
        self.map(FloatTier::sqrt)
    }

    #[inline]
    fn abs(self) -> Self {
        self.map(FloatTier::abs)
    }

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        self.zip(sign, FloatTier::copysign)
    }

    #[inline]
    fn cmp_eq(self, other: Self) -> [bool; N] {
        self.compare(other, |a, b| a == b)
    }

    #[inline]
    fn cmp_lt(self, other: Self) -> [bool; N] {
        self.compare(other, |a, b| a < b)
    }

    #[inline]
    fn cmp_le(self, other: Self) -> [bool; N] {
        self.compare(other, |a, b| a <= b)
    }

    #[inline]
    fn cmp_gt(self, other: Self) -> [bool; N] {
        self.compare(other, |a, b| a > b)
    }

    #[inline]
    fn mask_and(a: [bool; N], b: [bool; N]) -> [bool; N] {
        array::from_fn(|i| a[i] && b[i])
    }

    #[inline]
    fn mask_or(a: [bool; N], b: [bool; N]) -> [bool; N] {
        array::from_fn(|i| a[i] || b[i])
    }

    #[inline]
    fn mask_not(a: [bool; N]) -> [bool; N] {
        a.map(|m| !m)
    }

    #[inline]
    fn select(mask: [bool; N], on_true: Self, on_false: Self) -> Self {
        Lanes(array::from_fn(|i| {
            if mask[i] {
                on_true.0[i]
            } else {
                on_false.0[i]
            }
        }))
    }

    #[inline]
    fn pow2i(n: Self) -> Self {
        n.map(|k| {
            let biased = (k.to_f64() as i64).wrapping_add(i64::from(T::EXPONENT_BIAS));
            T::from_raw(((biased as u64) << T::MANTISSA_BITS) & T::exponent_mask())
        })
    }

    #[inline]
    fn split_exponent(self) -> (Self, Self) {
        let parts: [(T, T); N] = self.0.map(split_exponent);
        (
            Lanes(parts.map(|(m, _)| m)),
            Lanes(parts.map(|(_, e)| e)),
        )
    }

    #[inline]
    fn truncate_half(self) -> Self {
        self.map(truncate_half)
    }
}
