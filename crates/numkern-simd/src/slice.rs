// ─────────────────────────────────────────────────────────────────────
// Numkern — Slice Drivers
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Apply a lane kernel across whole slices.
//!
//! Full lane groups are loaded straight from the input; the tail is
//! zero-padded into one last group and only the live lanes are stored.

use numkern_math::limiter::FluxLimiter;
use numkern_types::error::{KernelError, KernelResult};

use crate::lanes::LaneOps;
use crate::math;

fn check_lengths(input: usize, output: usize) -> KernelResult<()> {
    if input == output {
        return Ok(());
    }
    tracing::warn!(input, output, "slice kernel called with mismatched lengths");
    Err(KernelError::LengthMismatch { input, output })
}

/// `output[i] = f(input[i])`, `V::LANES` elements at a time.
pub fn map<V, F>(f: F, input: &[V::Scalar], output: &mut [V::Scalar]) -> KernelResult<()>
where
    V: LaneOps,
    F: Fn(V) -> V,
{
    check_lengths(input.len(), output.len())?;
    let mut src = input.chunks_exact(V::LANES);
    let mut dst = output.chunks_exact_mut(V::LANES);
    for (s, d) in (&mut src).zip(&mut dst) {
        f(V::load(s)).store(d);
    }
    let tail = src.remainder();
    if !tail.is_empty() {
        f(V::load(tail)).store(dst.into_remainder());
    }
    Ok(())
}

/// `output[i] = f(a[i], b[i])`.
pub fn map2<V, F>(f: F, a: &[V::Scalar], b: &[V::Scalar], output: &mut [V::Scalar]) -> KernelResult<()>
where
    V: LaneOps,
    F: Fn(V, V) -> V,
{
    check_lengths(a.len(), b.len())?;
    check_lengths(a.len(), output.len())?;
    let mut sa = a.chunks_exact(V::LANES);
    let mut sb = b.chunks_exact(V::LANES);
    let mut dst = output.chunks_exact_mut(V::LANES);
    for ((x, y), d) in (&mut sa).zip(&mut sb).zip(&mut dst) {
        f(V::load(x), V::load(y)).store(d);
    }
    let (ta, tb) = (sa.remainder(), sb.remainder());
    if !ta.is_empty() {
        f(V::load(ta), V::load(tb)).store(dst.into_remainder());
    }
    Ok(())
}

pub fn exp_slice<V: LaneOps>(input: &[V::Scalar], output: &mut [V::Scalar]) -> KernelResult<()> {
    map(math::exp::<V>, input, output)
}

pub fn log_slice<V: LaneOps>(input: &[V::Scalar], output: &mut [V::Scalar]) -> KernelResult<()> {
    map(math::log::<V>, input, output)
}

pub fn sin_slice<V: LaneOps>(input: &[V::Scalar], output: &mut [V::Scalar]) -> KernelResult<()> {
    map(math::sin::<V>, input, output)
}

pub fn cos_slice<V: LaneOps>(input: &[V::Scalar], output: &mut [V::Scalar]) -> KernelResult<()> {
    map(math::cos::<V>, input, output)
}

/// Limiter factors for paired differences `d1[i]`, `d2[i]`.
pub fn limiter_slice<V: LaneOps>(
    kind: FluxLimiter,
    d1: &[V::Scalar],
    d2: &[V::Scalar],
    output: &mut [V::Scalar],
) -> KernelResult<()> {
    map2::<V, _>(|a, b| math::flux_limiter(kind, a, b), d1, d2, output)
}
