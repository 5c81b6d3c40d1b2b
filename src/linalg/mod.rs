//! Decompositions and derived quantities.
//!
//! Free functions take `&Matrix<T>` and return new values; the input is never
//! modified. The in-place building blocks live in [`primitives`].
//!
//! | Operation | Function | Method |
//! |---|---|---|
//! | reduced row-echelon form | [`row_echelon`] | `a.row_echelon()` |
//! | determinant (cofactor) | [`determinant`] | `a.det()` |
//! | inverse | [`inverse`] | `a.inverse()` |
//! | rank | [`rank`] | `a.rank()` |
//! | batch solve, row form `bᵀ·A⁻¹` | [`solve`] | `a.solve(&b)` |
//! | linear solve `A x = b` | [`solve_columns`] | `a.solve_columns(&b)` |
//! | QR (Gram–Schmidt) | [`qr_decomp`] | `a.qr()` |
//! | LU (Doolittle) | [`lu_decomp`] | `a.lu()` |
//! | Cholesky | [`cholesky`] | `a.cholesky()` |
//! | QR algorithm | [`qr_algo`] | |
//! | eigenvalues / eigenvectors | [`eigenvalues`], [`eigenvectors`] | `a.eigenvalues()` |
//! | SVD | [`svd`] | `a.svd()` |

mod cholesky;
mod echelon;
mod eigen;
mod lu;
pub mod primitives;
mod qr;
mod svd;

pub use cholesky::{cholesky, CholeskyDecomposition};
pub use echelon::{
    determinant, inverse, log_determinant, non_zero_rows, rank, row_echelon, solve, solve_columns,
};
pub use eigen::{eigenvalues, eigenvectors, qr_algo, qr_algo_with, QrAlgoResult, QrAlgoSettings};
pub use lu::{lu_decomp, LuDecomposition};
pub use qr::{qr_decomp, QrDecomposition};
pub use svd::{svd, svd_with, SvdDecomposition, SvdSettings};

use crate::matrix::DimensionMismatch;
use crate::Matrix;

/// Errors from linear algebra operations.
///
/// Returned when an input violates an operation's precondition. Numerical
/// trouble past the precondition (a zero pivot in LU, a non-positive-definite
/// Cholesky input, an iteration cap) is not an error: it shows up as NaN/Inf
/// in the result or as `converged == false`.
///
/// ```
/// use densolve::Matrix;
/// use densolve::linalg::LinalgError;
///
/// let singular = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Singular);
///
/// let rect = Matrix::<f64>::zeros(2, 3);
/// assert_eq!(rect.det().unwrap_err(), LinalgError::NotSquare);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Operation requires a square matrix.
    NotSquare,
    /// Matrix has a zero determinant.
    Singular,
    /// Matrix is not all-close to its transpose (required for Cholesky).
    NotSymmetric,
    /// Operand shapes are incompatible.
    DimensionMismatch(DimensionMismatch),
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::NotSquare => write!(f, "matrix is not square"),
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::NotSymmetric => write!(f, "matrix is not symmetric"),
            LinalgError::DimensionMismatch(d) => write!(f, "{}", d),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

impl From<DimensionMismatch> for LinalgError {
    fn from(d: DimensionMismatch) -> Self {
        LinalgError::DimensionMismatch(d)
    }
}

#[inline]
pub(crate) fn ensure_square<T>(m: &Matrix<T>) -> Result<usize, LinalgError> {
    if m.is_square() {
        Ok(m.nrows())
    } else {
        Err(LinalgError::NotSquare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display() {
        assert_eq!(LinalgError::Singular.to_string(), "matrix is singular");
        let d = LinalgError::from(DimensionMismatch {
            expected: (3, 1),
            got: (2, 1),
        });
        assert_eq!(d.to_string(), "dimension mismatch: expected 3x1, got 2x1");
    }

    #[test]
    fn ensure_square_reports_dimension() {
        assert_eq!(ensure_square(&Matrix::<f64>::zeros(4, 4)), Ok(4));
        assert_eq!(
            ensure_square(&Matrix::<f64>::zeros(4, 2)),
            Err(LinalgError::NotSquare)
        );
    }
}
