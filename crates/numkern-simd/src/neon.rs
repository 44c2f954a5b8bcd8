// ─────────────────────────────────────────────────────────────────────
// Numkern — NEON Lanes
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! 128-bit AArch64 lane groups. Advanced SIMD is mandatory on AArch64,
//! including the double-precision forms.
//!
//! Masks are unsigned vectors with all bits set per true lane and feed
//! the bitwise select directly.

use std::arch::aarch64::*;
use std::ops::Neg;

use crate::lanes::{lane_arith, Isa, LaneOps};
use crate::layout::{f32bits, f64bits};

#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct F32x4(float32x4_t);

#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct F64x2(float64x2_t);

lane_arith!(F32x4, vaddq_f32, vsubq_f32, vmulq_f32, vdivq_f32);
lane_arith!(F64x2, vaddq_f64, vsubq_f64, vmulq_f64, vdivq_f64);

// SAFETY (all blocks below): NEON is part of the AArch64 baseline, and
// every pointer handed to a load or store covers a full register.

impl Neg for F32x4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        F32x4(unsafe { vnegq_f32(self.0) })
    }
}

impl Neg for F64x2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        F64x2(unsafe { vnegq_f64(self.0) })
    }
}

impl LaneOps for F32x4 {
    type Scalar = f32;
    type Mask = uint32x4_t;
    const LANES: usize = 4;
    const ISA: Isa = Isa::Neon;

    #[inline]
    fn splat(value: f32) -> Self {
        F32x4(unsafe { vdupq_n_f32(value) })
    }

    #[inline]
    fn load(src: &[f32]) -> Self {
        if src.len() >= 4 {
            return F32x4(unsafe { vld1q_f32(src.as_ptr()) });
        }
        let mut buf = [0.0f32; 4];
        buf[..src.len()].copy_from_slice(src);
        F32x4(unsafe { vld1q_f32(buf.as_ptr()) })
    }

    #[inline]
    fn store(self, dst: &mut [f32]) {
        if dst.len() >= 4 {
            unsafe { vst1q_f32(dst.as_mut_ptr(), self.0) };
            return;
        }
        let mut buf = [0.0f32; 4];
        unsafe { vst1q_f32(buf.as_mut_ptr(), self.0) };
        let n = dst.len();
        dst.copy_from_slice(&buf[..n]);
    }

    #[inline]
    fn sqrt(self) -> Self {
        F32x4(unsafe { vsqrtq_f32(self.0) })
    }

    #[inline]
    fn abs(self) -> Self {
        F32x4(unsafe { vabsq_f32(self.0) })
    }

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        F32x4(unsafe { vbslq_f32(vdupq_n_u32(f32bits::SIGN), sign.0, self.0) })
    }

    #[inline]
    fn cmp_eq(self, other: Self) -> uint32x4_t {
        unsafe { vceqq_f32(self.0, other.0) }
    }

    #[inline]
    fn cmp_lt(self, other: Self) -> uint32x4_t {
        unsafe { vcltq_f32(self.0, other.0) }
    }

    #[inline]
    fn cmp_le(self, other: Self) -> uint32x4_t {
        unsafe { vcleq_f32(self.0, other.0) }
    }

    #[inline]
    fn cmp_gt(self, other: Self) -> uint32x4_t {
        unsafe { vcgtq_f32(self.0, other.0) }
    }

    #[inline]
    fn mask_and(a: uint32x4_t, b: uint32x4_t) -> uint32x4_t {
        unsafe { vandq_u32(a, b) }
    }

    #[inline]
    fn mask_or(a: uint32x4_t, b: uint32x4_t) -> uint32x4_t {
        unsafe { vorrq_u32(a, b) }
    }

    #[inline]
    fn mask_not(a: uint32x4_t) -> uint32x4_t {
        unsafe { vmvnq_u32(a) }
    }

    #[inline]
    fn select(mask: uint32x4_t, on_true: Self, on_false: Self) -> Self {
        F32x4(unsafe { vbslq_f32(mask, on_true.0, on_false.0) })
    }

    #[inline]
    fn pow2i(n: Self) -> Self {
        unsafe {
            let biased = vaddq_f32(n.0, vdupq_n_f32(f32bits::POW2_MAGIC));
            let field = vshlq_n_u32::<23>(vreinterpretq_u32_f32(biased));
            F32x4(vreinterpretq_f32_u32(field))
        }
    }

    #[inline]
    fn split_exponent(self) -> (Self, Self) {
        unsafe {
            let bits = vreinterpretq_u32_f32(self.0);
            let m = vorrq_u32(
                vandq_u32(bits, vdupq_n_u32(f32bits::MANTISSA)),
                vdupq_n_u32(f32bits::ONE),
            );
            let field = vshrq_n_u32::<23>(vandq_u32(bits, vdupq_n_u32(f32bits::EXPONENT)));
            let tagged = vorrq_u32(field, vdupq_n_u32(f32bits::FIELD_MAGIC));
            let e = vsubq_f32(vreinterpretq_f32_u32(tagged), vdupq_n_f32(f32bits::POW2_MAGIC));
            (F32x4(vreinterpretq_f32_u32(m)), F32x4(e))
        }
    }

    #[inline]
    fn truncate_half(self) -> Self {
        unsafe {
            let kept = vandq_u32(vreinterpretq_u32_f32(self.0), vdupq_n_u32(!f32bits::HALF_LOW));
            F32x4(vreinterpretq_f32_u32(kept))
        }
    }
}

impl LaneOps for F64x2 {
    type Scalar = f64;
    type Mask = uint64x2_t;
    const LANES: usize = 2;
    const ISA: Isa = Isa::Neon;

    #[inline]
    fn splat(value: f64) -> Self {
        F64x2(unsafe { vdupq_n_f64(value) })
    }

    #[inline]
    fn load(src: &[f64]) -> Self {
        if src.len() >= 2 {
            return F64x2(unsafe { vld1q_f64(src.as_ptr()) });
        }
        let mut buf = [0.0f64; 2];
        buf[..src.len()].copy_from_slice(src);
        F64x2(unsafe { vld1q_f64(buf.as_ptr()) })
    }

    #[inline]
    fn store(self, dst: &mut [f64]) {
        if dst.len() >= 2 {
            unsafe { vst1q_f64(dst.as_mut_ptr(), self.0) };
            return;
        }
        let mut buf = [0.0f64; 2];
        unsafe { vst1q_f64(buf.as_mut_ptr(), self.0) };
        let n = dst.len();
        dst.copy_from_slice(&buf[..n]);
    }

    #[inline]
    fn sqrt(self) -> Self {
        F64x2(unsafe { vsqrtq_f64(self.0) })
    }

    #[inline]
    fn abs(self) -> Self {
        F64x2(unsafe { vabsq_f64(self.0) })
    }

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        F64x2(unsafe { vbslq_f64(vdupq_n_u64(f64bits::SIGN), sign.0, self.0) })
    }

    #[inline]
    fn cmp_eq(self, other: Self) -> uint64x2_t {
        unsafe { vceqq_f64(self.0, other.0) }
    }

    #[inline]
    fn cmp_lt(self, other: Self) -> uint64x2_t {
        unsafe { vcltq_f64(self.0, other.0) }
    }

    #[inline]
    fn cmp_le(self, other: Self) -> uint64x2_t {
        unsafe { vcleq_f64(self.0, other.0) }
    }

    #[inline]
    fn cmp_gt(self, other: Self) -> uint64x2_t {
        unsafe { vcgtq_f64(self.0, other.0) }
    }

    #[inline]
    fn mask_and(a: uint64x2_t, b: uint64x2_t) -> uint64x2_t {
        unsafe { vandq_u64(a, b) }
    }

    #[inline]
    fn mask_or(a: uint64x2_t, b: uint64x2_t) -> uint64x2_t {
        unsafe { vorrq_u64(a, b) }
    }

    #[inline]
    fn mask_not(a: uint64x2_t) -> uint64x2_t {
        // No 64-bit MVN form.
        unsafe { veorq_u64(a, vdupq_n_u64(u64::MAX)) }
    }

    #[inline]
    fn select(mask: uint64x2_t, on_true: Self, on_false: Self) -> Self {
        F64x2(unsafe { vbslq_f64(mask, on_true.0, on_false.0) })
    }

    #[inline]
    fn pow2i(n: Self) -> Self {
        unsafe {
            let biased = vaddq_f64(n.0, vdupq_n_f64(f64bits::POW2_MAGIC));
            let field = vshlq_n_u64::<52>(vreinterpretq_u64_f64(biased));
            F64x2(vreinterpretq_f64_u64(field))
        }
    }

    #[inline]
    fn split_exponent(self) -> (Self, Self) {
        unsafe {
            let bits = vreinterpretq_u64_f64(self.0);
            let m = vorrq_u64(
                vandq_u64(bits, vdupq_n_u64(f64bits::MANTISSA)),
                vdupq_n_u64(f64bits::ONE),
            );
            let field = vshrq_n_u64::<52>(vandq_u64(bits, vdupq_n_u64(f64bits::EXPONENT)));
            let tagged = vorrq_u64(field, vdupq_n_u64(f64bits::FIELD_MAGIC));
            let e = vsubq_f64(vreinterpretq_f64_u64(tagged), vdupq_n_f64(f64bits::POW2_MAGIC));
            (F64x2(vreinterpretq_f64_u64(m)), F64x2(e))
        }
    }

    #[inline]
    fn truncate_half(self) -> Self {
        unsafe {
            let kept = vandq_u64(vreinterpretq_u64_f64(self.0), vdupq_n_u64(!f64bits::HALF_LOW));
            F64x2(vreinterpretq_f64_u64(kept))
        }
    }
}
