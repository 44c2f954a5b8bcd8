// ─────────────────────────────────────────────────────────────────────
// Numkern — Tridiag
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thomas algorithm for tridiagonal systems, solved in place.
//!
//! Row `i` reads `C[i-1]·x[i-1] + D[i]·x[i] + E[i]·x[i+1] = H[i]`.
//! The forward sweep overwrites `D` and `H`; back substitution leaves the
//! solution in `H`.

use numkern_types::error::{KernelError, KernelResult};
use numkern_types::tier::FloatTier;

/// Band length check shared by the banded solvers.
pub(crate) fn check_band(band: &'static str, expected: usize, actual: usize) -> KernelResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(KernelError::DimensionMismatch {
            band,
            expected,
            actual,
        })
    }
}

fn check_bands<T>(c: &[T], d: &[T], e: &[T], h: &[T]) -> KernelResult<usize> {
    let n = d.len();
    let off = n.saturating_sub(1);
    check_band("C", off, c.len())?;
    check_band("E", off, e.len())?;
    check_band("H", n, h.len())?;
    Ok(n)
}

/// Solve a tridiagonal system without pivoting.
///
/// - `c`: sub-diagonal \[n-1\]
/// - `d`: main diagonal \[n\], overwritten
/// - `e`: super-diagonal \[n-1\]
/// - `h`: right-hand side \[n\], overwritten with the solution
///
/// An exactly zero pivot returns [`KernelError::SingularMatrix`].
pub fn solve_tridiagonal<T: FloatTier>(
    c: &[T],
    d: &mut [T],
    e: &[T],
    h: &mut [T],
) -> KernelResult<()> {
    let n = check_bands(c, d, e, h)?;
    if n == 0 {
        return Ok(());
    }

    // Forward sweep
    for i in 1..n {
        let pivot = d[i - 1];
        if pivot == T::ZERO {
            tracing::warn!(column = i - 1, "tridiagonal solve hit a zero pivot");
            return Err(KernelError::SingularMatrix { column: i - 1 });
        }
        let k = c[i - 1] / pivot;
        d[i] -= k * e[i - 1];
        h[i] -= k * h[i - 1];
    }

    // Back substitution
    if d[n - 1] == T::ZERO {
        tracing::warn!(column = n - 1, "tridiagonal solve hit a zero pivot");
        return Err(KernelError::SingularMatrix { column: n - 1 });
    }
    h[n - 1] /= d[n - 1];
    for i in (0..n - 1).rev() {
        h[i] = (h[i] - e[i] * h[i + 1]) / d[i];
    }
    Ok(())
}

/// Zero-avoiding variant of [`solve_tridiagonal`].
///
/// A pivot with `|p| <= eps` skips its elimination step and the matching
/// unknown is set to exactly zero.
pub fn solve_tridiagonal_zero<T: FloatTier>(
    c: &[T],
    d: &mut [T],
    e: &[T],
    h: &mut [T],
) -> KernelResult<()> {
    let n = check_bands(c, d, e, h)?;
    if n == 0 {
        return Ok(());
    }

    for i in 1..n {
        let pivot = d[i - 1];
        if pivot.abs() <= T::EPSILON {
            tracing::debug!(column = i - 1, "negligible pivot, elimination skipped");
            continue;
        }
        let k = c[i - 1] / pivot;
        d[i] -= k * e[i - 1];
        h[i] -= k * h[i - 1];
    }

    for i in (0..n).rev() {
        if d[i].abs() <= T::EPSILON {
            h[i] = T::ZERO;
            continue;
        }
        let coupled = if i + 1 < n { e[i] * h[i + 1] } else { T::ZERO };
        h[i] = (h[i] - coupled) / d[i];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Multiply the tridiagonal matrix by `x`.
    fn apply(c: &[f64], d: &[f64], e: &[f64], x: &[f64]) -> Vec<f64> {
        let n = d.len();
        (0..n)
            .map(|i| {
                let mut v = d[i] * x[i];
                if i > 0 {
                    v += c[i - 1] * x[i - 1];
                }
                if i + 1 < n {
                    v += e[i] * x[i + 1];
                }
                v
            })
            .collect()
    }

    #[test]
    fn test_thomas_identity() {
        // Solve I * x = [1,2,3,4,5]
        let n = 5;
        let c = vec![0.0; n - 1];
        let mut d = vec![1.0; n];
        let e = vec![0.0; n - 1];
        let mut h = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        solve_tridiagonal(&c, &mut d, &e, &mut h).unwrap();
        for (i, &x) in h.iter().enumerate() {
            assert!((x - (i + 1) as f64).abs() < 1e-12, "x[{i}] = {x}");
        }
    }

    #[test]
    fn test_known_solution_fixture() {
        let c = [1.0, -1.0, -1.0];
        let mut d = [2.0, 2.0, 2.0, 1.0];
        let e = [1.0, 1.0, -1.0];
        let mut h = [4.0, 8.0, 0.0, 1.0];
        solve_tridiagonal(&c, &mut d, &e, &mut h).unwrap();
        for (i, &x) in h.iter().enumerate() {
            assert!((x - (i + 1) as f64).abs() < 1e-14, "x[{i}] = {x}");
        }
    }

    #[test]
    fn test_thomas_laplacian() {
        // [ 2 -1  0  0]   [x0]   [1]
        // [-1  2 -1  0] * [x1] = [0]
        // [ 0 -1  2 -1]   [x2]   [0]
        // [ 0  0 -1  2]   [x3]   [1]
        let c = [-1.0; 3];
        let d0 = [2.0; 4];
        let e = [-1.0; 3];
        let rhs = [1.0, 0.0, 0.0, 1.0];
        let mut d = d0;
        let mut h = rhs;
        solve_tridiagonal(&c, &mut d, &e, &mut h).unwrap();
        let ax = apply(&c, &d0, &e, &h);
        for i in 0..4 {
            assert!((ax[i] - rhs[i]).abs() < 1e-12, "Ax[{i}] = {}", ax[i]);
        }
    }

    #[test]
    fn test_heat_equation_pattern_f32() {
        // main = 1 + 2*alpha, sub/super = -alpha
        let n = 10;
        let alpha = 0.4f32;
        let c = vec![-alpha; n - 1];
        let mut d = vec![1.0 + 2.0 * alpha; n];
        let e = vec![-alpha; n - 1];
        let mut h = vec![1.0f32; n];
        solve_tridiagonal(&c, &mut d, &e, &mut h).unwrap();
        for (i, &x) in h.iter().enumerate() {
            assert!(x > 0.0 && x.is_finite(), "x[{i}] = {x}");
        }
    }

    #[test]
    fn test_zero_pivot_strict_vs_zero_avoiding() {
        // First unknown decoupled with a zero diagonal.
        let c = [0.0, 1.0];
        let e = [0.0, 1.0];
        let mut d = [0.0, 2.0, 3.0];
        let mut h = [5.0, 3.0, 4.0];
        assert!(matches!(
            solve_tridiagonal(&c, &mut d, &e, &mut h),
            Err(KernelError::SingularMatrix { column: 0 })
        ));

        let mut d = [0.0, 2.0, 3.0];
        let mut h = [5.0, 3.0, 4.0];
        solve_tridiagonal_zero(&c, &mut d, &e, &mut h).unwrap();
        assert_eq!(h[0], 0.0);
        // [2 1; 1 3] x = [3 4] -> x = [1, 1]
        assert!((h[1] - 1.0).abs() < 1e-14);
        assert!((h[2] - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_zero_variant_matches_strict_when_regular() {
        let c = [1.0, -1.0, -1.0];
        let e = [1.0, 1.0, -1.0];
        let mut d1 = [2.0, 2.0, 2.0, 1.0];
        let mut h1 = [4.0, 8.0, 0.0, 1.0];
        let mut d2 = d1;
        let mut h2 = h1;
        solve_tridiagonal(&c, &mut d1, &e, &mut h1).unwrap();
        solve_tridiagonal_zero(&c, &mut d2, &e, &mut h2).unwrap();
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_band_lengths_checked() {
        let mut d = [1.0; 3];
        let mut h = [1.0; 3];
        let err = solve_tridiagonal(&[0.0; 3], &mut d, &[0.0; 2], &mut h);
        assert!(matches!(
            err,
            Err(KernelError::DimensionMismatch { band: "C", expected: 2, actual: 3 })
        ));
        let mut empty: [f64; 0] = [];
        let mut empty_h: [f64; 0] = [];
        solve_tridiagonal(&[], &mut empty, &[], &mut empty_h).unwrap();
    }
}
