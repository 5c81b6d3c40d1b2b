use alloc::vec::Vec;

use crate::linalg::primitives::{add_row, find_pivot, multiply_row, swap_rows};
use crate::linalg::{ensure_square, LinalgError};
use crate::matrix::DimensionMismatch;
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

/// Reduced row-echelon form by Gauss–Jordan elimination.
///
/// Columns are scanned left to right. A column without a pivot (see
/// [`find_pivot`](crate::linalg::primitives::find_pivot)) is skipped;
/// otherwise the pivot row is swapped into the next pivot position, scaled to
/// a leading 1, and the column is cleared from every other row. Pivot entries
/// are set to exactly one and eliminated entries to exactly zero, so reducing
/// an already reduced matrix leaves it unchanged. Negative zeros in the
/// result are replaced by positive zeros.
///
/// No partial pivoting is performed.
///
/// ```
/// use densolve::Matrix;
/// use densolve::linalg::row_echelon;
///
/// let a = Matrix::from_rows(2, 3, &[2.0_f64, 4.0, 2.0, 1.0, 3.0, 2.0]);
/// let r = row_echelon(&a);
/// assert_eq!(r.as_slice(), &[1.0, 0.0, -1.0, 0.0, 1.0, 1.0]);
/// ```
pub fn row_echelon<T: FloatScalar>(m: &Matrix<T>) -> Matrix<T> {
    let mut a = m.clone();
    let (rows, cols) = a.shape();
    let mut lead = 0;

    for col in 0..cols {
        if lead == rows {
            break;
        }
        let Some(pivot) = find_pivot(&a, col, lead) else {
            continue;
        };

        swap_rows(&mut a, lead, pivot);
        let inv = T::one() / a[(lead, col)];
        multiply_row(&mut a, lead, inv);
        a[(lead, col)] = T::one();

        for i in (0..rows).filter(|&i| i != lead) {
            let factor = a[(i, col)];
            if factor != T::zero() {
                add_row(&mut a, i, lead, -factor);
                a[(i, col)] = T::zero();
            }
        }
        lead += 1;
    }

    for x in a.as_mut_slice() {
        if *x == T::zero() {
            *x = T::zero();
        }
    }
    a
}

/// Number of rows holding at least one entry larger than
/// [`FloatScalar::NEGLIGIBLE`] in magnitude.
///
/// Applied to a reduced row-echelon form this is the number of pivots.
pub fn non_zero_rows<T: FloatScalar>(m: &Matrix<T>) -> usize {
    (0..m.nrows())
        .filter(|&i| m.row_slice(i).iter().any(|x| x.abs() > T::NEGLIGIBLE))
        .count()
}

/// Determinant by cofactor expansion along the first row.
///
/// 1×1 and 2×2 matrices use the closed forms; the empty matrix has
/// determinant one. The expansion costs `O(n!)`, which is fine for the small
/// matrices this crate targets and exact for integer elements.
///
/// ```
/// use densolve::Matrix;
/// use densolve::linalg::determinant;
///
/// let a = Matrix::from_rows(3, 3, &[2_i64, 0, 1, 1, 3, 2, 1, 1, 2]);
/// assert_eq!(determinant(&a), Ok(6));
/// ```
pub fn determinant<T: Scalar>(m: &Matrix<T>) -> Result<T, LinalgError> {
    let n = ensure_square(m)?;
    let mut cols: Vec<usize> = (0..n).collect();
    Ok(cofactor(m, 0, &mut cols))
}

/// Determinant of the minor made of rows `row..` and the columns in `cols`.
fn cofactor<T: Scalar>(m: &Matrix<T>, row: usize, cols: &mut Vec<usize>) -> T {
    match cols.len() {
        0 => T::one(),
        1 => m[(row, cols[0])],
        2 => {
            let (c0, c1) = (cols[0], cols[1]);
            m[(row, c0)] * m[(row + 1, c1)] - m[(row, c1)] * m[(row + 1, c0)]
        }
        k => {
            let mut det = T::zero();
            for idx in 0..k {
                let c = cols.remove(idx);
                let term = m[(row, c)] * cofactor(m, row + 1, cols);
                cols.insert(idx, c);
                det = if idx % 2 == 0 { det + term } else { det - term };
            }
            det
        }
    }
}

/// Natural logarithm of the determinant.
///
/// NaN for a negative determinant, `-inf` for a singular matrix.
pub fn log_determinant<T: FloatScalar>(m: &Matrix<T>) -> Result<T, LinalgError> {
    determinant(m).map(T::ln)
}

/// Inverse by Gauss–Jordan elimination of `[A | I]`.
///
/// Returns [`LinalgError::NotSquare`] for rectangular input and
/// [`LinalgError::Singular`] when the determinant is exactly zero.
///
/// ```
/// use densolve::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
/// let inv = a.inverse().unwrap();
/// assert!((&a * &inv).all_close(&Matrix::identity(2)));
/// ```
pub fn inverse<T: FloatScalar>(m: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    let n = ensure_square(m)?;
    if determinant(m)? == T::zero() {
        return Err(LinalgError::Singular);
    }
    let reduced = row_echelon(&m.hstack(&Matrix::identity(n)));
    Ok(reduced.slice(0, n, n, 2 * n))
}

/// Rank of a matrix.
///
/// A square matrix with non-zero determinant has full rank without any
/// elimination; otherwise the rank is the [`non_zero_rows`] count of the
/// reduced row-echelon form.
///
/// A row counts when any of its entries exceeds [`FloatScalar::NEGLIGIBLE`],
/// and the elimination skips pivotless columns instead of stepping along the
/// diagonal. Rank-deficient inputs with a pivotless leading column, or rows
/// whose last entry is zero, can therefore rank higher than under a
/// trailing-element count with a diagonal-only scan.
///
/// ```
/// use densolve::Matrix;
/// use densolve::linalg::rank;
///
/// let a = Matrix::from_rows(3, 3, &[1.0_f64, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 0.0, 1.0]);
/// assert_eq!(rank(&a), 2);
/// ```
pub fn rank<T: FloatScalar>(m: &Matrix<T>) -> usize {
    if m.is_square() && m.nrows() > 0 && cofactor_nonzero(m) {
        return m.nrows();
    }
    non_zero_rows(&row_echelon(m))
}

fn cofactor_nonzero<T: FloatScalar>(m: &Matrix<T>) -> bool {
    matches!(determinant(m), Ok(d) if d != T::zero())
}

/// Batch solve in row form: `rhsᵀ · A⁻¹`.
///
/// `rhs` is `n x k`; the result is `k x n` and row `r` satisfies
/// `x_r · A = rhs[:, r]ᵀ`, i.e. it solves `Aᵀ x = b` for column `r` of
/// `rhs`. For symmetric `A` this coincides with [`solve_columns`]; otherwise
/// use that function to solve `A x = b`.
///
/// # Errors
///
/// [`LinalgError::DimensionMismatch`] if `rhs` does not have `n` rows, plus
/// the errors of [`inverse`].
///
/// ```
/// use densolve::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 0.0, 1.0]);
/// let b = Matrix::from_rows(2, 1, &[1.0, 1.0]);
/// let x = a.solve(&b).unwrap();
/// assert!(x.all_close(&Matrix::from_rows(1, 2, &[1.0, -1.0])));
/// ```
pub fn solve<T: FloatScalar>(m: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    let inv = checked_inverse(m, rhs)?;
    Ok(rhs.transpose().matmul(&inv))
}

/// Solve `A x = b` for every column `b` of `rhs`.
///
/// The result is `k x n`: row `r` holds the solution for column `r` of
/// `rhs`, the transposed batch `(A⁻¹ · rhs)ᵀ`. Errors as for [`solve`].
///
/// ```
/// use densolve::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 0.0, 1.0]);
/// let b = Matrix::from_rows(2, 1, &[1.0, 1.0]);
/// let x = a.solve_columns(&b).unwrap();
/// assert!(x.all_close(&Matrix::from_rows(1, 2, &[-1.0, 1.0])));
/// ```
pub fn solve_columns<T: FloatScalar>(
    m: &Matrix<T>,
    rhs: &Matrix<T>,
) -> Result<Matrix<T>, LinalgError> {
    let inv = checked_inverse(m, rhs)?;
    Ok(rhs.transpose().matmul(&inv.transpose()))
}

fn checked_inverse<T: FloatScalar>(m: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    let n = ensure_square(m)?;
    if rhs.nrows() != n {
        return Err(DimensionMismatch {
            expected: (n, rhs.ncols()),
            got: rhs.shape(),
        }
        .into());
    }
    inverse(m)
}

// ── Method forms on Matrix ──────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// See [`determinant`].
    pub fn det(&self) -> Result<T, LinalgError> {
        determinant(self)
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// See [`row_echelon`].
    pub fn row_echelon(&self) -> Matrix<T> {
        row_echelon(self)
    }

    /// See [`log_determinant`].
    pub fn log_det(&self) -> Result<T, LinalgError> {
        log_determinant(self)
    }

    /// See [`inverse`].
    pub fn inverse(&self) -> Result<Matrix<T>, LinalgError> {
        inverse(self)
    }

    /// See [`rank`].
    pub fn rank(&self) -> usize {
        rank(self)
    }

    /// See [`solve`].
    pub fn solve(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
        solve(self, rhs)
    }

    /// See [`solve_columns`].
    pub fn solve_columns(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
        solve_columns(self, rhs)
    }
}
