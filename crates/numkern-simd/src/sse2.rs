// ─────────────────────────────────────────────────────────────────────
// Numkern — SSE2 Lanes
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! 128-bit x86 lane groups. SSE2 is part of the x86_64 baseline, so this
//! backend is always compiled there.
//!
//! Masks are full registers (all ones per true lane); `select` blends
//! with and/andnot/or since SSE2 has no blend instruction.

use std::arch::x86_64::*;
use std::ops::Neg;

use crate::lanes::{lane_arith, Isa, LaneOps};
use crate::layout::{f32bits, f64bits};

#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct F32x4(__m128);

#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct F64x2(__m128d);

lane_arith!(F32x4, _mm_add_ps, _mm_sub_ps, _mm_mul_ps, _mm_div_ps);
lane_arith!(F64x2, _mm_add_pd, _mm_sub_pd, _mm_mul_pd, _mm_div_pd);

// SAFETY (all blocks below): SSE2 is always enabled on x86_64, and every
// pointer handed to a load or store covers a full register.

#[inline]
fn bits_ps(v: u32) -> __m128 {
    unsafe { _mm_castsi128_ps(_mm_set1_epi32(v as i32)) }
}

#[inline]
fn bits_pd(v: u64) -> __m128d {
    unsafe { _mm_castsi128_pd(_mm_set1_epi64x(v as i64)) }
}

impl Neg for F32x4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        F32x4(unsafe { _mm_xor_ps(self.0, bits_ps(f32bits::SIGN)) })
    }
}

impl Neg for F64x2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        F64x2(unsafe { _mm_xor_pd(self.0, bits_pd(f64bits::SIGN)) })
    }
}

impl LaneOps for F32x4 {
    type Scalar = f32;
    type Mask = __m128;
    const LANES: usize = 4;
    const ISA: Isa = Isa::Sse2;

    #[inline]
    fn splat(value: f32) -> Self {
        F32x4(unsafe { _mm_set1_ps(value) })
    }

    #[inline]
    fn load(src: &[f32]) -> Self {
        if src.len() >= 4 {
            return F32x4(unsafe { _mm_loadu_ps(src.as_ptr()) });
        }
        let mut buf = [0.0f32; 4];
        buf[..src.len()].copy_from_slice(src);
        F32x4(unsafe { _mm_loadu_ps(buf.as_ptr()) })
    }

    #[inline]
    fn store(self, dst: &mut [f32]) {
        if dst.len() >= 4 {
            unsafe { _mm_storeu_ps(dst.as_mut_ptr(), self.0) };
            return;
        }
        let mut buf = [0.0f32; 4];
        unsafe { _mm_storeu_ps(buf.as_mut_ptr(), self.0) };
        let n = dst.len();
        dst.copy_from_slice(&buf[..n]);
    }

    #[inline]
    fn sqrt(self) -> Self {
        F32x4(unsafe { _mm_sqrt_ps(self.0) })
    }

    #[inline]
    fn abs(self) -> Self {
        F32x4(unsafe { _mm_andnot_ps(bits_ps(f32bits::SIGN), self.0) })
    }

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        let s = bits_ps(f32bits::SIGN);
        F32x4(unsafe { _mm_or_ps(_mm_andnot_ps(s, self.0), _mm_and_ps(s, sign.0)) })
    }

    #[inline]
    fn cmp_eq(self, other: Self) -> __m128 {
        unsafe { _mm_cmpeq_ps(self.0, other.0) }
    }

    #[inline]
    fn cmp_lt(self, other: Self) -> __m128 {
        unsafe { _mm_cmplt_ps(self.0, other.0) }
    }

    #[inline]
    fn cmp_le(self, other: Self) -> __m128 {
        unsafe { _mm_cmple_ps(self.0, other.0) }
    }

    #[inline]
    fn cmp_gt(self, other: Self) -> __m128 {
        unsafe { _mm_cmpgt_ps(self.0, other.0) }
    }

    #[inline]
    fn mask_and(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_and_ps(a, b) }
    }

    #[inline]
    fn mask_or(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_or_ps(a, b) }
    }

    #[inline]
    fn mask_not(a: __m128) -> __m128 {
        unsafe { _mm_xor_ps(a, bits_ps(u32::MAX)) }
    }

    #[inline]
    fn select(mask: __m128, on_true: Self, on_false: Self) -> Self {
        F32x4(unsafe { _mm_or_ps(_mm_and_ps(mask, on_true.0), _mm_andnot_ps(mask, on_false.0)) })
    }

    #[inline]
    fn pow2i(n: Self) -> Self {
        unsafe {
            let biased = _mm_add_ps(n.0, _mm_set1_ps(f32bits::POW2_MAGIC));
            let field = _mm_slli_epi32::<23>(_mm_castps_si128(biased));
            F32x4(_mm_castsi128_ps(field))
        }
    }

    #[inline]
    fn split_exponent(self) -> (Self, Self) {
        unsafe {
            let m = _mm_or_ps(_mm_and_ps(self.0, bits_ps(f32bits::MANTISSA)), bits_ps(f32bits::ONE));
            let exponent = _mm_castps_si128(_mm_and_ps(self.0, bits_ps(f32bits::EXPONENT)));
            let field = _mm_srli_epi32::<23>(exponent);
            let tagged = _mm_or_si128(field, _mm_set1_epi32(f32bits::FIELD_MAGIC as i32));
            let e = _mm_sub_ps(_mm_castsi128_ps(tagged), _mm_set1_ps(f32bits::POW2_MAGIC));
            (F32x4(m), F32x4(e))
        }
    }

    #[inline]
    fn truncate_half(self) -> Self {
        F32x4(unsafe { _mm_and_ps(self.0, bits_ps(!f32bits::HALF_LOW)) })
    }
}

impl LaneOps for F64x2 {
    type Scalar = f64;
    type Mask = __m128d;
    const LANES: usize = 2;
    const ISA: Isa = Isa::Sse2;

    #[inline]
    fn splat(value: f64) -> Self {
        F64x2(unsafe { _mm_set1_pd(value) })
    }

    #[inline]
    fn load(src: &[f64]) -> Self {
        if src.len() >= 2 {
            return F64x2(unsafe { _mm_loadu_pd(src.as_ptr()) });
        }
        let mut buf = [0.0f64; 2];
        buf[..src.len()].copy_from_slice(src);
        F64x2(unsafe { _mm_loadu_pd(buf.as_ptr()) })
    }

    #[inline]
    fn store(self, dst: &mut [f64]) {
        if dst.len() >= 2 {
            unsafe { _mm_storeu_pd(dst.as_mut_ptr(), self.0) };
            return;
        }
        let mut buf = [0.0f64; 2];
        unsafe { _mm_storeu_pd(buf.as_mut_ptr(), self.0) };
        let n = dst.len();
        dst.copy_from_slice(&buf[..n]);
    }

    #[inline]
    fn sqrt(self) -> Self {
        F64x2(unsafe { _mm_sqrt_pd(self.0) })
    }

    #[inline]
    fn abs(self) -> Self {
        F64x2(unsafe { _mm_andnot_pd(bits_pd(f64bits::SIGN), self.0) })
    }

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        let s = bits_pd(f64bits::SIGN);
        F64x2(unsafe { _mm_or_pd(_mm_andnot_pd(s, self.0), _mm_and_pd(s, sign.0)) })
    }

    #[inline]
    fn cmp_eq(self, other: Self) -> __m128d {
        unsafe { _mm_cmpeq_pd(self.0, other.0) }
    }

    #[inline]
    fn cmp_lt(self, other: Self) -> __m128d {
        unsafe { _mm_cmplt_pd(self.0, other.0) }
    }

    #[inline]
    fn cmp_le(self, other: Self) -> __m128d {
        unsafe { _mm_cmple_pd(self.0, other.0) }
    }

    #[inline]
    fn cmp_gt(self, other: Self) -> __m128d {
        unsafe { _mm_cmpgt_pd(self.0, other.0) }
    }

    #[inline]
    fn mask_and(a: __m128d, b: __m128d) -> __m128d {
        unsafe { _mm_and_pd(a, b) }
    }

    #[inline]
    fn mask_or(a: __m128d, b: __m128d) -> __m128d {
        unsafe { _mm_or_pd(a, b) }
    }

    #[inline]
    fn mask_not(a: __m128d) -> __m128d {
        unsafe { _mm_xor_pd(a, bits_pd(u64::MAX)) }
    }

    #[inline]
    fn select(mask: __m128d, on_true: Self, on_false: Self) -> Self {
        F64x2(unsafe { _mm_or_pd(_mm_and_pd(mask, on_true.0), _mm_andnot_pd(mask, on_false.0)) })
    }

    #[inline]
    fn pow2i(n: Self) -> Self {
        unsafe {
            let biased = _mm_add_pd(n.0, _mm_set1_pd(f64bits::POW2_MAGIC));
            let field = _mm_slli_epi64::<52>(_mm_castpd_si128(biased));
            F64x2(_mm_castsi128_pd(field))
        }
    }

    #[inline]
    fn split_exponent(self) -> (Self, Self) {
        unsafe {
            let m = _mm_or_pd(_mm_and_pd(self.0, bits_pd(f64bits::MANTISSA)), bits_pd(f64bits::ONE));
            let exponent = _mm_castpd_si128(_mm_and_pd(self.0, bits_pd(f64bits::EXPONENT)));
            let field = _mm_srli_epi64::<52>(exponent);
            let tagged = _mm_or_si128(field, _mm_set1_epi64x(f64bits::FIELD_MAGIC as i64));
            let e = _mm_sub_pd(_mm_castsi128_pd(tagged), _mm_set1_pd(f64bits::POW2_MAGIC));
            (F64x2(m), F64x2(e))
        }
    }

    #[inline]
    fn truncate_half(self) -> Self {
        F64x2(unsafe { _mm_and_pd(self.0, bits_pd(!f64bits::HALF_LOW)) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numkern_math::bits::{split_exponent, truncate_half};

    #[test]
    fn test_partial_load_store() {
        let v = F32x4::load(&[1.0, 2.0, 3.0]);
        assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0, 0.0]);
        let mut out = [0.0f64; 1];
        F64x2::load(&[5.0, 6.0]).store(&mut out);
        assert_eq!(out, [5.0]);
    }

    #[test]
    fn test_select_and_sign_handling() {
        let a = F64x2::load(&[-0.0, 3.0]);
        assert_eq!((-a).to_vec(), vec![0.0, -3.0]);
        assert!((-a).to_vec()[0].is_sign_positive());
        let picked = F64x2::select(a.cmp_gt(F64x2::splat(0.0)), a, F64x2::splat(7.0));
        assert_eq!(picked.to_vec(), vec![7.0, 3.0]);
        let nan = F32x4::splat(f32::NAN);
        let mask = F32x4::mask_not(nan.is_nan());
        assert_eq!(F32x4::select(mask, nan, F32x4::splat(1.0)).to_vec(), vec![1.0; 4]);
    }

    #[test]
    fn test_bit_hooks_match_scalar() {
        let xs = [1.0e-30f32, 0.75, 3.0, 6.5e37];
        let (m, e) = F32x4::load(&xs).split_exponent();
        for (i, &x) in xs.iter().enumerate() {
            let (sm, se) = split_exponent(x);
            assert_eq!((m.to_vec()[i], e.to_vec()[i]), (sm, se), "x = {x}");
        }
        let n = F64x2::load(&[-1022.0, 1023.0]);
        assert_eq!(F64x2::pow2i(n).to_vec(), vec![f64::MIN_POSITIVE, 2f64.powi(1023)]);
        let t = F64x2::splat(std::f64::consts::PI).truncate_half();
        assert_eq!(t.to_vec()[0], truncate_half(std::f64::consts::PI));
    }
}
