// ─────────────────────────────────────────────────────────────────────
// Numkern — SIMD Kernel
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Lane-parallel elementary functions.
//!
//! [`LaneOps`] abstracts a register of floats; the backends below
//! implement it per instruction set and [`math`] builds the kernels on
//! top of it once. The width aliases name the best backend compiled for
//! the target and fall back to portable [`Lanes`] elsewhere.

pub mod aligned;
pub mod lanes;
mod layout;
pub mod math;
pub mod portable;
pub mod slice;

#[cfg(target_arch = "x86_64")]
pub mod sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub mod avx2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
pub mod avx512;

#[cfg(target_arch = "aarch64")]
pub mod neon;

pub use aligned::AlignedBuffer;
pub use lanes::{Isa, LaneOps};
pub use portable::Lanes;
pub use slice::{cos_slice, exp_slice, limiter_slice, log_slice, map, map2, sin_slice};

// ── 128-bit ──

#[cfg(target_arch = "x86_64")]
pub use sse2::{F32x4, F64x2};

#[cfg(target_arch = "aarch64")]
pub use neon::{F32x4, F64x2};

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub type F32x4 = Lanes<f32, 4>;
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub type F64x2 = Lanes<f64, 2>;

// ── 256-bit ──

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub use avx2::{F32x8, F64x4};

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
pub type F32x8 = Lanes<f32, 8>;
#[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
pub type F64x4 = Lanes<f64, 4>;

// ── 512-bit ──

#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
pub use avx512::{F32x16, F64x8};

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx512f")))]
pub type F32x16 = Lanes<f32, 16>;
#[cfg(not(all(target_arch = "x86_64", target_feature = "avx512f")))]
pub type F64x8 = Lanes<f64, 8>;
