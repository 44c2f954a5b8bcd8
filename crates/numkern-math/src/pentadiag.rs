// ─────────────────────────────────────────────────────────────────────
// Numkern — Pentadiag
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Banded Gaussian elimination for pentadiagonal systems.
//!
//! Row `i` reads
//! `B[i-2]·x[i-2] + C[i-1]·x[i-1] + D[i]·x[i] + E[i]·x[i+1] + F[i]·x[i+2] = H[i]`.
//! Each forward step uses row `i-1` to clear the entries one and two rows
//! below its pivot; `C`, `D`, `E` and `H` are overwritten and `H` ends
//! up holding the solution.

use numkern_types::error::{KernelError, KernelResult};
use numkern_types::tier::FloatTier;

use crate::tridiag::check_band;

fn check_bands<T>(b: &[T], c: &[T], d: &[T], e: &[T], f: &[T], h: &[T]) -> KernelResult<usize> {
    let n = d.len();
    let one = n.saturating_sub(1);
    let two = n.saturating_sub(2);
    check_band("B", two, b.len())?;
    check_band("C", one, c.len())?;
    check_band("E", one, e.len())?;
    check_band("F", two, f.len())?;
    check_band("H", n, h.len())?;
    Ok(n)
}

/// One forward step: eliminate column `i-1` from rows `i` and `i+1`.
#[inline]
#[allow(clippy::too_many_arguments)]
fn eliminate_step<T: FloatTier>(
    i: usize,
    pivot: T,
    b: &[T],
    c: &mut [T],
    d: &mut [T],
    e: &mut [T],
    f: &[T],
    h: &mut [T],
) {
    let n = d.len();
    let k = c[i - 1] / pivot;
    d[i] -= k * e[i - 1];
    if i + 2 <= n {
        e[i] -= k * f[i - 1];
    }
    h[i] -= k * h[i - 1];

    if i + 1 < n {
        let k2 = b[i - 1] / pivot;
        c[i] -= k2 * e[i - 1];
        d[i + 1] -= k2 * f[i - 1];
        h[i + 1] -= k2 * h[i - 1];
    }
}

/// Right-hand side of row `i` with the already solved unknowns removed.
#[inline]
fn reduced_rhs<T: FloatTier>(i: usize, e: &[T], f: &[T], h: &[T]) -> T {
    let n = h.len();
    let mut v = h[i];
    if i + 1 < n {
        v -= e[i] * h[i + 1];
    }
    if i + 2 < n {
        v -= f[i] * h[i + 2];
    }
    v
}

/// Solve a pentadiagonal system without pivoting.
///
/// Band lengths: `b`, `f` \[n-2\]; `c`, `e` \[n-1\]; `d`, `h` \[n\].
/// An exactly zero pivot returns [`KernelError::SingularMatrix`].
pub fn solve_pentadiagonal<T: FloatTier>(
    b: &[T],
    c: &mut [T],
    d: &mut [T],
    e: &mut [T],
    f: &[T],
    h: &mut [T],
) -> KernelResult<()> {
    let n = check_bands(b, c, d, e, f, h)?;
    if n == 0 {
        return Ok(());
    }

    for i in 1..n {
        let pivot = d[i - 1];
        if pivot == T::ZERO {
            tracing::warn!(column = i - 1, "pentadiagonal solve hit a zero pivot");
            return Err(KernelError::SingularMatrix { column: i - 1 });
        }
        eliminate_step(i, pivot, b, c, d, e, f, h);
    }

    for i in (0..n).rev() {
        if d[i] == T::ZERO {
            tracing::warn!(column = i, "pentadiagonal solve hit a zero pivot");
            return Err(KernelError::SingularMatrix { column: i });
        }
        h[i] = reduced_rhs(i, e, f, h) / d[i];
    }
    Ok(())
}

/// Zero-avoiding variant of [`solve_pentadiagonal`]: negligible pivots
/// (`|p| <= eps`) skip their elimination step and zero their unknown.
pub fn solve_pentadiagonal_zero<T: FloatTier>(
    b: &[T],
    c: &mut [T],
    d: &mut [T],
    e: &mut [T],
    f: &[T],
    h: &mut [T],
) -> KernelResult<()> {
    let n = check_bands(b, c, d, e, f, h)?;
    if n == 0 {
        return Ok(());
    }

    for i in 1..n {
        let pivot = d[i - 1];
        if pivot.abs() <= T::EPSILON {
            tracing::debug!(column = i - 1, "negligible pivot, elimination skipped");
            continue;
        }
        eliminate_step(i, pivot, b, c, d, e, f, h);
    }

    for i in (0..n).rev() {
        h[i] = if d[i].abs() <= T::EPSILON {
            T::ZERO
        } else {
            reduced_rhs(i, e, f, h) / d[i]
        };
    }
    Ok(())
}
