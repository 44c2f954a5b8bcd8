// ─────────────────────────────────────────────────────────────────────
// Numkern — Dense Gaussian Elimination
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gaussian elimination with row scaling and partial pivoting.
//!
//! The system is an `n × (n+1)` augmented matrix (coefficients followed
//! by the right-hand side), stored row-major either as a flat slice or
//! as an [`Array2`]. It is reduced in place and the solution is left in
//! the last column.

use ndarray::{Array2, ArrayViewMut2};
use numkern_types::error::{KernelError, KernelResult};
use numkern_types::tier::FloatTier;

/// What to do with a column that has no usable pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SingularPolicy {
    /// Report [`KernelError::SingularMatrix`].
    Fail,
    /// Skip the column and set its unknown to zero.
    Zero,
}

fn eliminate<T: FloatTier>(mut m: ArrayViewMut2<'_, T>, policy: SingularPolicy) -> KernelResult<()> {
    let n = m.nrows();
    let rhs = n;

    // Scale each row by its largest coefficient.
    for i in 0..n {
        let scale = (0..n).fold(T::ZERO, |acc, j| {
            let v = m[[i, j]].abs();
            if v > acc {
                v
            } else {
                acc
            }
        });
        if scale == T::ZERO {
            if policy == SingularPolicy::Fail {
                tracing::warn!(row = i, "dense solve: all-zero coefficient row");
                return Err(KernelError::ZeroRow { row: i });
            }
            continue;
        }
        for j in 0..=rhs {
            m[[i, j]] /= scale;
        }
    }

    // Forward elimination with partial pivoting.
    let mut skipped = vec![false; n];
    for col in 0..n {
        let mut pivot_row = col;
        let mut best = m[[col, col]].abs();
        for r in col + 1..n {
            let v = m[[r, col]].abs();
            if v > best {
                best = v;
                pivot_row = r;
            }
        }

        let unusable = match policy {
            SingularPolicy::Fail => best == T::ZERO,
            SingularPolicy::Zero => best <= T::EPSILON,
        };
        if unusable {
            if policy == SingularPolicy::Fail {
                tracing::warn!(column = col, "dense solve: no pivot");
                return Err(KernelError::SingularMatrix { column: col });
            }
            tracing::debug!(column = col, "negligible pivot, unknown set to zero");
            skipped[col] = true;
            continue;
        }

        if pivot_row != col {
            for j in 0..=rhs {
                m.swap([pivot_row, j], [col, j]);
            }
        }

        let pivot = m[[col, col]];
        for r in col + 1..n {
            let k = m[[r, col]] / pivot;
            if k == T::ZERO {
                continue;
            }
            for j in col..=rhs {
                let delta = k * m[[col, j]];
                m[[r, j]] -= delta;
            }
        }
    }

    // Back substitution into the right-hand side column.
    for i in (0..n).rev() {
        if skipped[i] {
            m[[i, rhs]] = T::ZERO;
            continue;
        }
        let mut sum = m[[i, rhs]];
        for j in i + 1..n {
            sum -= m[[i, j]] * m[[j, rhs]];
        }
        m[[i, rhs]] = sum / m[[i, i]];
    }
    Ok(())
}

fn flat_view<T: FloatTier>(matrix: &mut [T], n: usize) -> KernelResult<ArrayViewMut2<'_, T>> {
    let expected = n * (n + 1);
    if matrix.len() != expected {
        return Err(KernelError::DimensionMismatch {
            band: "matrix",
            expected,
            actual: matrix.len(),
        });
    }
    ArrayViewMut2::from_shape((n, n + 1), matrix).map_err(|_| KernelError::DimensionMismatch {
        band: "matrix",
        expected,
        actual: expected,
    })
}

fn check_array<T>(matrix: &Array2<T>) -> KernelResult<()> {
    let (rows, cols) = matrix.dim();
    if cols != rows + 1 {
        return Err(KernelError::DimensionMismatch {
            band: "matrix columns",
            expected: rows + 1,
            actual: cols,
        });
    }
    Ok(())
}

/// Solve the row-major `n × (n+1)` augmented system in `matrix`.
///
/// Returns [`KernelError::SingularMatrix`] when a column has no non-zero
/// pivot after scaling and [`KernelError::ZeroRow`] when a coefficient
/// row is entirely zero; the matrix contents are then unspecified.
pub fn solve_dense<T: FloatTier>(matrix: &mut [T], n: usize) -> KernelResult<()> {
    eliminate(flat_view(matrix, n)?, SingularPolicy::Fail)
}

/// Zero-avoiding variant of [`solve_dense`]: a column whose best pivot
/// has `|p| <= eps` gets a zero unknown.
pub fn solve_dense_zero<T: FloatTier>(matrix: &mut [T], n: usize) -> KernelResult<()> {
    eliminate(flat_view(matrix, n)?, SingularPolicy::Zero)
}

/// [`solve_dense`] on ndarray storage of shape `(n, n+1)`.
pub fn solve_dense_array<T: FloatTier>(matrix: &mut Array2<T>) -> KernelResult<()> {
    check_array(matrix)?;
    eliminate(matrix.view_mut(), SingularPolicy::Fail)
}

/// [`solve_dense_zero`] on ndarray storage of shape `(n, n+1)`.
pub fn solve_dense_array_zero<T: FloatTier>(matrix: &mut Array2<T>) -> KernelResult<()> {
    check_array(matrix)?;
    eliminate(matrix.view_mut(), SingularPolicy::Zero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_solve_2x2() {
        // 2x + y = 5, x + 3y = 10 -> x = 1, y = 3
        let mut m = [2.0, 1.0, 5.0, 1.0, 3.0, 10.0];
        solve_dense(&mut m, 2).unwrap();
        assert!((m[2] - 1.0).abs() < 1e-14);
        assert!((m[5] - 3.0).abs() < 1e-14);
    }

    #[test]
    fn test_needs_pivoting() {
        // Zero in the leading position.
        let mut m = array![[0.0, 1.0, 1.0, 5.0], [1.0, 0.0, 1.0, 4.0], [1.0, 1.0, 0.0, 3.0]];
        solve_dense_array(&mut m).unwrap();
        // x = 1, y = 2, z = 3
        for (i, expected) in [1.0, 2.0, 3.0].iter().enumerate() {
            assert!((m[[i, 3]] - expected).abs() < 1e-14, "x[{i}] = {}", m[[i, 3]]);
        }
    }

    #[test]
    fn test_badly_scaled_rows() {
        let mut m = [1.0e-12f64, 2.0e-12, 3.0e-12, 1.0e12, -1.0e12, 0.0];
        solve_dense(&mut m, 2).unwrap();
        assert!((m[2] - 1.0).abs() < 1e-12);
        assert!((m[5] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_singular_strict_and_zero() {
        // Second column is zero: y is undetermined.
        let base = [1.0, 0.0, 2.0, 2.0, 0.0, 4.0];
        let mut m = base;
        assert!(matches!(
            solve_dense(&mut m, 2),
            Err(KernelError::SingularMatrix { column: 1 })
        ));
        let mut m = base;
        solve_dense_zero(&mut m, 2).unwrap();
        assert_eq!(m[5], 0.0);
        assert!((m[2] - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_zero_row_strict() {
        let mut m = [1.0, 1.0, 2.0, 0.0, 0.0, 0.0];
        assert!(matches!(solve_dense(&mut m, 2), Err(KernelError::ZeroRow { row: 1 })));

        // Row 0 is zero, every column still has a pivot candidate.
        let mut m = array![[0.0, 0.0, 0.0, 1.0], [1.0, 2.0, 0.0, 3.0], [0.0, 1.0, 1.0, 2.0]];
        let err = solve_dense_array(&mut m).unwrap_err();
        assert!(matches!(err, KernelError::ZeroRow { row: 0 }));
        assert_eq!(err.to_string(), "Singular matrix: coefficient row 0 is all zero");
    }

    #[test]
    fn test_shape_checks() {
        let mut m = [1.0; 5];
        assert!(matches!(
            solve_dense(&mut m, 2),
            Err(KernelError::DimensionMismatch { expected: 6, actual: 5, .. })
        ));
        let mut a = Array2::<f64>::zeros((3, 3));
        assert!(solve_dense_array(&mut a).is_err());
        let mut empty: [f32; 0] = [];
        solve_dense(&mut empty, 0).unwrap();
    }

    #[test]
    fn test_f32_tier() {
        let mut m = [4.0f32, -2.0, 1.0, 11.0, -2.0, 4.0, -2.0, -16.0, 1.0, -2.0, 4.0, 17.0];
        solve_dense(&mut m, 3).unwrap();
        for (i, expected) in [1.0f32, -2.0, 3.0].iter().enumerate() {
            assert!((m[4 * i + 3] - expected).abs() < 1e-5, "x[{i}] = {}", m[4 * i + 3]);
        }
    }
}
