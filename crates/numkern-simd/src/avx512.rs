// ─────────────────────────────────────────────────────────────────────
// Numkern — AVX-512 Lanes
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! 512-bit x86 lane groups, compiled when `avx512f` is enabled for the
//! target. Comparisons produce `k` mask registers; bitwise float work
//! goes through the integer domain, which AVX-512F covers without DQ.

use std::arch::x86_64::*;
use std::ops::Neg;

use crate::lanes::{lane_arith, Isa, LaneOps};
use crate::layout::{f32bits, f64bits};

#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct F32x16(__m512);

#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct F64x8(__m512d);

lane_arith!(F32x16, _mm512_add_ps, _mm512_sub_ps, _mm512_mul_ps, _mm512_div_ps);
lane_arith!(F64x8, _mm512_add_pd, _mm512_sub_pd, _mm512_mul_pd, _mm512_div_pd);

// SAFETY (all blocks below): the module is only compiled with `avx512f`
// enabled, and every pointer handed to a load or store covers a full
// register.

#[inline]
fn and_ps(a: __m512, b: __m512) -> __m512 {
    unsafe { _mm512_castsi512_ps(_mm512_and_si512(_mm512_castps_si512(a), _mm512_castps_si512(b))) }
}

#[inline]
fn or_ps(a: __m512, b: __m512) -> __m512 {
    unsafe { _mm512_castsi512_ps(_mm512_or_si512(_mm512_castps_si512(a), _mm512_castps_si512(b))) }
}

#[inline]
fn and_pd(a: __m512d, b: __m512d) -> __m512d {
    unsafe { _mm512_castsi512_pd(_mm512_and_si512(_mm512_castpd_si512(a), _mm512_castpd_si512(b))) }
}

#[inline]
fn or_pd(a: __m512d, b: __m512d) -> __m512d {
    unsafe { _mm512_castsi512_pd(_mm512_or_si512(_mm512_castpd_si512(a), _mm512_castpd_si512(b))) }
}

#[inline]
fn bits_ps(v: u32) -> __m512 {
    unsafe { _mm512_castsi512_ps(_mm512_set1_epi32(v as i32)) }
}

#[inline]
fn bits_pd(v: u64) -> __m512d {
    unsafe { _mm512_castsi512_pd(_mm512_set1_epi64(v as i64)) }
}

impl Neg for F32x16 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let flipped = unsafe {
            _mm512_xor_si512(_mm512_castps_si512(self.0), _mm512_set1_epi32(f32bits::SIGN as i32))
        };
        F32x16(unsafe { _mm512_castsi512_ps(flipped) })
    }
}

impl Neg for F64x8 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let flipped = unsafe {
            _mm512_xor_si512(_mm512_castpd_si512(self.0), _mm512_set1_epi64(f64bits::SIGN as i64))
        };
        F64x8(unsafe { _mm512_castsi512_pd(flipped) })
    }
}

impl LaneOps for F32x16 {
    type Scalar = f32;
    type Mask = __mmask16;
    const LANES: usize = 16;
    const ISA: Isa = Isa::Avx512;

    #[inline]
    fn splat(value: f32) -> Self {
        F32x16(unsafe { _mm512_set1_ps(value) })
    }

    #[inline]
    fn load(src: &[f32]) -> Self {
        if src.len() >= 16 {
            return F32x16(unsafe { _mm512_loadu_ps(src.as_ptr()) });
        }
        let mut buf = [0.0f32; 16];
        buf[..src.len()].copy_from_slice(src);
        F32x16(unsafe { _mm512_loadu_ps(buf.as_ptr()) })
    }

    #[inline]
    fn store(self, dst: &mut [f32]) {
        if dst.len() >= 16 {
            unsafe { _mm512_storeu_ps(dst.as_mut_ptr(), self.0) };
            return;
        }
        let mut buf = [0.0f32; 16];
        unsafe { _mm512_storeu_ps(buf.as_mut_ptr(), self.0) };
        let n = dst.len();
        dst.copy_from_slice(&buf[..n]);
    }

    #[inline]
    fn sqrt(self) -> Self {
        F32x16(unsafe { _mm512_sqrt_ps(self.0) })
    }

    #[inline]
    fn abs(self) -> Self {
        F32x16(unsafe { _mm512_abs_ps(self.0) })
    }

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        F32x16(or_ps(
            and_ps(self.0, bits_ps(!f32bits::SIGN)),
            and_ps(sign.0, bits_ps(f32bits::SIGN)),
        ))
    }

    #[inline]
    fn cmp_eq(self, other: Self) -> __mmask16 {
        unsafe { _mm512_cmp_ps_mask::<_CMP_EQ_OQ>(self.0, other.0) }
    }

    #[inline]
    fn cmp_lt(self, other: Self) -> __mmask16 {
        unsafe { _mm512_cmp_ps_mask::<_CMP_LT_OQ>(self.0, other.0) }
    }

    #[inline]
    fn cmp_le(self, other: Self) -> __mmask16 {
        unsafe { _mm512_cmp_ps_mask::<_CMP_LE_OQ>(self.0, other.0) }
    }

    #[inline]
    fn cmp_gt(self, other: Self) -> __mmask16 {
        unsafe { _mm512_cmp_ps_mask::<_CMP_GT_OQ>(self.0, other.0) }
    }

    #[inline]
    fn mask_and(a: __mmask16, b: __mmask16) -> __mmask16 {
        a & b
    }

    #[inline]
    fn mask_or(a: __mmask16, b: __mmask16) -> __mmask16 {
        a | b
    }

    #[inline]
    fn mask_not(a: __mmask16) -> __mmask16 {
        !a
    }

    #[inline]
    fn select(mask: __mmask16, on_true: Self, on_false: Self) -> Self {
        F32x16(unsafe { _mm512_mask_blend_ps(mask, on_false.0, on_true.0) })
    }

    #[inline]
    fn pow2i(n: Self) -> Self {
        unsafe {
            let biased = _mm512_add_ps(n.0, _mm512_set1_ps(f32bits::POW2_MAGIC));
            let field = _mm512_slli_epi32::<23>(_mm512_castps_si512(biased));
            F32x16(_mm512_castsi512_ps(field))
        }
    }

    #[inline]
    fn split_exponent(self) -> (Self, Self) {
        let m = or_ps(and_ps(self.0, bits_ps(f32bits::MANTISSA)), bits_ps(f32bits::ONE));
        let exponent = and_ps(self.0, bits_ps(f32bits::EXPONENT));
        unsafe {
            let field = _mm512_srli_epi32::<23>(_mm512_castps_si512(exponent));
            let tagged = _mm512_or_si512(field, _mm512_set1_epi32(f32bits::FIELD_MAGIC as i32));
            let e = _mm512_sub_ps(_mm512_castsi512_ps(tagged), _mm512_set1_ps(f32bits::POW2_MAGIC));
            (F32x16(m), F32x16(e))
        }
    }

    #[inline]
    fn truncate_half(self) -> Self {
        F32x16(and_ps(self.0, bits_ps(!f32bits::HALF_LOW)))
    }
}

impl LaneOps for F64x8 {
    type Scalar = f64;
    type Mask = __mmask8;
    const LANES: usize = 8;
    const ISA: Isa = Isa::Avx512;

    #[inline]
    fn splat(value: f64) -> Self {
        F64x8(unsafe { _mm512_set1_pd(value) })
    }

    #[inline]
    fn load(src: &[f64]) -> Self {
        if src.len() >= 8 {
            return F64x8(unsafe { _mm512_loadu_pd(src.as_ptr()) });
        }
        let mut buf = [0.0f64; 8];
        buf[..src.len()].copy_from_slice(src);
        F64x8(unsafe { _mm512_loadu_pd(buf.as_ptr()) })
    }

    #[inline]
    fn store(self, dst: &mut [f64]) {
        if dst.len() >= 8 {
            unsafe { _mm512_storeu_pd(dst.as_mut_ptr(), self.0) };
            return;
        }
        let mut buf = [0.0f64; 8];
        unsafe { _mm512_storeu_pd(buf.as_mut_ptr(), self.0) };
        let n = dst.len();
        dst.copy_from_slice(&buf[..n]);
    }

    #[inline]
    fn sqrt(self) -> Self {
        F64x8(unsafe { _mm512_sqrt_pd(self.0) })
    }

    #[inline]
    fn abs(self) -> Self {
        F64x8(unsafe { _mm512_abs_pd(self.0) })
    }

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        F64x8(or_pd(
            and_pd(self.0, bits_pd(!f64bits::SIGN)),
            and_pd(sign.0, bits_pd(f64bits::SIGN)),
        ))
    }

    #[inline]
    fn cmp_eq(self, other: Self) -> __mmask8 {
        unsafe { _mm512_cmp_pd_mask::<_CMP_EQ_OQ>(self.0, other.0) }
    }

    #[inline]
    fn cmp_lt(self, other: Self) -> __mmask8 {
        unsafe { _mm512_cmp_pd_mask::<_CMP_LT_OQ>(self.0, other.0) }
    }

    #[inline]
    fn cmp_le(self, other: Self) -> __mmask8 {
        unsafe { _mm512_cmp_pd_mask::<_CMP_LE_OQ>(self.0, other.0) }
    }

    #[inline]
    fn cmp_gt(self, other: Self) -> __mmask8 {
        unsafe { _mm512_cmp_pd_mask::<_CMP_GT_OQ>(self.0, other.0) }
    }

    #[inline]
    fn mask_and(a: __mmask8, b: __mmask8) -> __mmask8 {
        a & b
    }

    #[inline]
    fn mask_or(a: __mmask8, b: __mmask8) -> __mmask8 {
        a | b
    }

    #[inline]
    fn mask_not(a: __mmask8) -> __mmask8 {
        !a
    }

    #[inline]
    fn select(mask: __mmask8, on_true: Self, on_false: Self) -> Self {
        F64x8(unsafe { _mm512_mask_blend_pd(mask, on_false.0, on_true.0) })
    }

    #[inline]
    fn pow2i(n: Self) -> Self {
        unsafe {
            let biased = _mm512_add_pd(n.0, _mm512_set1_pd(f64bits::POW2_MAGIC));
            let field = _mm512_slli_epi64::<52>(_mm512_castpd_si512(biased));
            F64x8(_mm512_castsi512_pd(field))
        }
    }

    #[inline]
    fn split_exponent(self) -> (Self, Self) {
        let m = or_pd(and_pd(self.0, bits_pd(f64bits::MANTISSA)), bits_pd(f64bits::ONE));
        let exponent = and_pd(self.0, bits_pd(f64bits::EXPONENT));
        unsafe {
            let field = _mm512_srli_epi64::<52>(_mm512_castpd_si512(exponent));
            let tagged = _mm512_or_si512(field, _mm512_set1_epi64(f64bits::FIELD_MAGIC as i64));
            let e = _mm512_sub_pd(_mm512_castsi512_pd(tagged), _mm512_set1_pd(f64bits::POW2_MAGIC));
            (F64x8(m), F64x8(e))
        }
    }

    #[inline]
    fn truncate_half(self) -> Self {
        F64x8(and_pd(self.0, bits_pd(!f64bits::HALF_LOW)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_registers() {
        let a = F32x16::load(&[1.0, f32::NAN, -1.0]);
        let positive = a.cmp_gt(F32x16::splat(0.0));
        assert_eq!(positive, 0b1);
        assert_eq!(a.is_nan(), 0b10);
        assert_eq!(F32x16::mask_not(positive) & 0b111, 0b110);
    }

    #[test]
    fn test_copysign_and_abs() {
        let a = F64x8::load(&[-1.0, 2.0, -0.0, 4.0]);
        let s = F64x8::splat(-1.0);
        assert_eq!(&a.abs().to_vec()[..4], &[1.0, 2.0, 0.0, 4.0]);
        assert_eq!(&a.copysign(s).to_vec()[..4], &[-1.0, -2.0, -0.0, -4.0]);
    }
}
