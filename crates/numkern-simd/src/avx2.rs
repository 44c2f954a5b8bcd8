// ─────────────────────────────────────────────────────────────────────
// Numkern — AVX2 Lanes
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! 256-bit x86 lane groups, compiled when `avx2` is enabled for the
//! target (`-C target-feature=+avx2` or `-C target-cpu=native`).

use std::arch::x86_64::*;
use std::ops::Neg;

use crate::lanes::{lane_arith, Isa, LaneOps};
use crate::layout::{f32bits, f64bits};

#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct F32x8(__m256);

#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct F64x4(__m256d);

lane_arith!(F32x8, _mm256_add_ps, _mm256_sub_ps, _mm256_mul_ps, _mm256_div_ps);
lane_arith!(F64x4, _mm256_add_pd, _mm256_sub_pd, _mm256_mul_pd, _mm256_div_pd);

// SAFETY (all blocks below): the module is only compiled with `avx2`
// enabled, and every pointer handed to a load or store covers a full
// register.

#[inline]
fn bits_ps(v: u32) -> __m256 {
    unsafe { _mm256_castsi256_ps(_mm256_set1_epi32(v as i32)) }
}

#[inline]
fn bits_pd(v: u64) -> __m256d {
    unsafe { _mm256_castsi256_pd(_mm256_set1_epi64x(v as i64)) }
}

impl Neg for F32x8 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        F32x8(unsafe { _mm256_xor_ps(self.0, bits_ps(f32bits::SIGN)) })
    }
}

impl Neg for F64x4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        F64x4(unsafe { _mm256_xor_pd(self.0, bits_pd(f64bits::SIGN)) })
    }
}

impl LaneOps for F32x8 {
    type Scalar = f32;
    type Mask = __m256;
    const LANES: usize = 8;
    const ISA: Isa = Isa::Avx2;

    #[inline]
    fn splat(value: f32) -> Self {
        F32x8(unsafe { _mm256_set1_ps(value) })
    }

    #[inline]
    fn load(src: &[f32]) -> Self {
        if src.len() >= 8 {
            return F32x8(unsafe { _mm256_loadu_ps(src.as_ptr()) });
        }
        let mut buf = [0.0f32; 8];
        buf[..src.len()].copy_from_slice(src);
        F32x8(unsafe { _mm256_loadu_ps(buf.as_ptr()) })
    }

    #[inline]
    fn store(self, dst: &mut [f32]) {
        if dst.len() >= 8 {
            unsafe { _mm256_storeu_ps(dst.as_mut_ptr(), self.0) };
            return;
        }
        let mut buf = [0.0f32; 8];
        unsafe { _mm256_storeu_ps(buf.as_mut_ptr(), self.0) };
        let n = dst.len();
        dst.copy_from_slice(&buf[..n]);
    }

    #[inline]
    fn sqrt(self) -> Self {
        F32x8(unsafe { _mm256_sqrt_ps(self.0) })
    }

    #[inline]
    fn abs(self) -> Self {
        F32x8(unsafe { _mm256_andnot_ps(bits_ps(f32bits::SIGN), self.0) })
    }

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        let s = bits_ps(f32bits::SIGN);
        F32x8(unsafe { _mm256_or_ps(_mm256_andnot_ps(s, self.0), _mm256_and_ps(s, sign.0)) })
    }

    #[inline]
    fn cmp_eq(self, other: Self) -> __m256 {
        unsafe { _mm256_cmp_ps::<_CMP_EQ_OQ>(self.0, other.0) }
    }

    #[inline]
    fn cmp_lt(self, other: Self) -> __m256 {
        unsafe { _mm256_cmp_ps::<_CMP_LT_OQ>(self.0, other.0) }
    }

    #[inline]
    fn cmp_le(self, other: Self) -> __m256 {
        unsafe { _mm256_cmp_ps::<_CMP_LE_OQ>(self.0, other.0) }
    }

    #[inline]
    fn cmp_gt(self, other: Self) -> __m256 {
        unsafe { _mm256_cmp_ps::<_CMP_GT_OQ>(self.0, other.0) }
    }

    #[inline]
    fn mask_and(a: __m256, b: __m256) -> __m256 {
        unsafe { _mm256_and_ps(a, b) }
    }

    #[inline]
    fn mask_or(a: __m256, b: __m256) -> __m256 {
        unsafe { _mm256_or_ps(a, b) }
    }

    #[inline]
    fn mask_not(a: __m256) -> __m256 {
        unsafe { _mm256_xor_ps(a, bits_ps(u32::MAX)) }
    }

    #[inline]
    fn select(mask: __m256, on_true: Self, on_false: Self) -> Self {
        F32x8(unsafe { _mm256_blendv_ps(on_false.0, on_true.0, mask) })
    }

    #[inline]
    fn pow2i(n: Self) -> Self {
        unsafe {
            let biased = _mm256_add_ps(n.0, _mm256_set1_ps(f32bits::POW2_MAGIC));
            let field = _mm256_slli_epi32::<23>(_mm256_castps_si256(biased));
            F32x8(_mm256_castsi256_ps(field))
        }
    }

    #[inline]
    fn split_exponent(self) -> (Self, Self) {
        unsafe {
            let m = _mm256_or_ps(
                _mm256_and_ps(self.0, bits_ps(f32bits::MANTISSA)),
                bits_ps(f32bits::ONE),
            );
            let exponent = _mm256_castps_si256(_mm256_and_ps(self.0, bits_ps(f32bits::EXPONENT)));
            let field = _mm256_srli_epi32::<23>(exponent);
            let tagged = _mm256_or_si256(field, _mm256_set1_epi32(f32bits::FIELD_MAGIC as i32));
            let e = _mm256_sub_ps(_mm256_castsi256_ps(tagged), _mm256_set1_ps(f32bits::POW2_MAGIC));
            (F32x8(m), F32x8(e))
        }
    }

    #[inline]
    fn truncate_half(self) -> Self {
        F32x8(unsafe { _mm256_and_ps(self.0, bits_ps(!f32bits::HALF_LOW)) })
    }
}

impl LaneOps for F64x4 {
    type Scalar = f64;
    type Mask = __m256d;
    const LANES: usize = 4;
    const ISA: Isa = Isa::Avx2;

    #[inline]
    fn splat(value: f64) -> Self {
        F64x4(unsafe { _mm256_set1_pd(value) })
    }

    #[inline]
    fn load(src: &[f64]) -> Self {
        if src.len() >= 4 {
            return F64x4(unsafe { _mm256_loadu_pd(src.as_ptr()) });
        }
        let mut buf = [0.0f64; 4];
        buf[..src.len()].copy_from_slice(src);
        F64x4(unsafe { _mm256_loadu_pd(buf.as_ptr()) })
    }

    #[inline]
    fn store(self, dst: &mut [f64]) {
        if dst.len() >= 4 {
            unsafe { _mm256_storeu_pd(dst.as_mut_ptr(), self.0) };
            return;
        }
        let mut buf = [0.0f64; 4];
        unsafe { _mm256_storeu_pd(buf.as_mut_ptr(), self.0) };
        let n = dst.len();
        dst.copy_from_slice(&buf[..n]);
    }

    #[inline]
    fn sqrt(self) -> Self {
        F64x4(unsafe { _mm256_sqrt_pd(self.0) })
    }

    #[inline]
    fn abs(self) -> Self {
        F64x4(unsafe { _mm256_andnot_pd(bits_pd(f64bits::SIGN), self.0) })
    }

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        let s = bits_pd(f64bits::SIGN);
        F64x4(unsafe { _mm256_or_pd(_mm256_andnot_pd(s, self.0), _mm256_and_pd(s, sign.0)) })
    }

    #[inline]
    fn cmp_eq(self, other: Self) -> __m256d {
        unsafe { _mm256_cmp_pd::<_CMP_EQ_OQ>(self.0, other.0) }
    }

    #[inline]
    fn cmp_lt(self, other: Self) -> __m256d {
        unsafe { _mm256_cmp_pd::<_CMP_LT_OQ>(self.0, other.0) }
    }

    #[inline]
    fn cmp_le(self, other: Self) -> __m256d {
        unsafe { _mm256_cmp_pd::<_CMP_LE_OQ>(self.0, other.0) }
    }

    #[inline]
    fn cmp_gt(self, other: Self) -> __m256d {
        unsafe { _mm256_cmp_pd::<_CMP_GT_OQ>(self.0, other.0) }
    }

    #[inline]
    fn mask_and(a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_and_pd(a, b) }
    }

    #[inline]
    fn mask_or(a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_or_pd(a, b) }
    }

    #[inline]
    fn mask_not(a: __m256d) -> __m256d {
        unsafe { _mm256_xor_pd(a, bits_pd(u64::MAX)) }
    }

    #[inline]
    fn select(mask: __m256d, on_true: Self, on_false: Self) -> Self {
        F64x4(unsafe { _mm256_blendv_pd(on_false.0, on_true.0, mask) })
    }

    #[inline]
    fn pow2i(n: Self) -> Self {
        unsafe {
            let biased = _mm256_add_pd(n.0, _mm256_set1_pd(f64bits::POW2_MAGIC));
            let field = _mm256_slli_epi64::<52>(_mm256_castpd_si256(biased));
            F64x4(_mm256_castsi256_pd(field))
        }
    }

    #[inline]
    fn split_exponent(self) -> (Self, Self) {
        unsafe {
            let m = _mm256_or_pd(
                _mm256_and_pd(self.0, bits_pd(f64bits::MANTISSA)),
                bits_pd(f64bits::ONE),
            );
            let exponent = _mm256_castpd_si256(_mm256_and_pd(self.0, bits_pd(f64bits::EXPONENT)));
            let field = _mm256_srli_epi64::<52>(exponent);
            let tagged = _mm256_or_si256(field, _mm256_set1_epi64x(f64bits::FIELD_MAGIC as i64));
            let e = _mm256_sub_pd(_mm256_castsi256_pd(tagged), _mm256_set1_pd(f64bits::POW2_MAGIC));
            (F64x4(m), F64x4(e))
        }
    }

    #[inline]
    fn truncate_half(self) -> Self {
        F64x4(unsafe { _mm256_and_pd(self.0, bits_pd(!f64bits::HALF_LOW)) })
    }
}
