use crate::linalg::{ensure_square, LinalgError};
use crate::matrix::{DimensionMismatch, Vector};
use crate::traits::FloatScalar;
use crate::Matrix;

/// Cholesky decomposition `A = L·Lᵀ` of a symmetric positive-definite matrix.
///
/// # Example
///
/// ```
/// use densolve::{Matrix, Vector};
///
/// let a = Matrix::from_rows(2, 2, &[4.0_f64, 2.0, 2.0, 3.0]);
/// let chol = a.cholesky().unwrap();
///
/// let x = chol.solve(&Vector::from_slice(&[8.0, 7.0])).unwrap();
/// assert!((4.0 * x[0] + 2.0 * x[1] - 8.0).abs() < 1e-12);
/// assert!((chol.det() - 8.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CholeskyDecomposition<T> {
    l: Matrix<T>,
}

impl<T: FloatScalar> CholeskyDecomposition<T> {
    /// Decompose a symmetric matrix (Cholesky–Banachiewicz, row by row).
    ///
    /// Symmetry is checked with [`Matrix::is_symmetric`]; positive
    /// definiteness is not, so an indefinite input yields NaN on the diagonal.
    pub fn new(a: &Matrix<T>) -> Result<Self, LinalgError> {
        let n = ensure_square(a)?;
        if !a.is_symmetric() {
            return Err(LinalgError::NotSymmetric);
        }

        let mut l = Matrix::zeros(n, n);
        for i in 0..n {
            for j in 0..=i {
                let sum = (0..j).fold(T::zero(), |acc, k| acc + l[(i, k)] * l[(j, k)]);
                l[(i, j)] = if i == j {
                    (a[(i, i)] - sum).sqrt()
                } else {
                    (a[(i, j)] - sum) / l[(j, j)]
                };
            }
        }

        Ok(Self { l })
    }

    /// The lower-triangular factor `L`.
    #[inline]
    pub fn l(&self) -> &Matrix<T> {
        &self.l
    }

    /// Take ownership of `L`.
    #[inline]
    pub fn into_l(self) -> Matrix<T> {
        self.l
    }

    /// `det(A) = Π L[i][i]²`.
    pub fn det(&self) -> T {
        let d = (0..self.l.nrows()).fold(T::one(), |acc, i| acc * self.l[(i, i)]);
        d * d
    }

    /// Solve `A x = b` by forward substitution on `L` and back substitution on `Lᵀ`.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        let n = self.l.nrows();
        if b.len() != n {
            return Err(DimensionMismatch {
                expected: (1, n),
                got: (1, b.len()),
            }
            .into());
        }

        let mut x = Vector::zeros(n);
        for i in 0..n {
            let sum = (0..i).fold(b[i], |acc, j| acc - self.l[(i, j)] * x[j]);
            x[i] = sum / self.l[(i, i)];
        }
        for i in (0..n).rev() {
            let sum = ((i + 1)..n).fold(x[i], |acc, j| acc - self.l[(j, i)] * x[j]);
            x[i] = sum / self.l[(i, i)];
        }
        Ok(x)
    }
}

/// Cholesky factor `L` of a symmetric matrix. See [`CholeskyDecomposition::new`].
///
/// ```
/// use densolve::Matrix;
/// use densolve::linalg::cholesky;
///
/// let a = Matrix::from_rows(3, 3, &[4.0_f64, 12.0, -16.0, 12.0, 37.0, -43.0, -16.0, -43.0, 98.0]);
/// let l = cholesky(&a).unwrap();
/// assert_eq!(l.as_slice(), &[2.0, 0.0, 0.0, 6.0, 1.0, 0.0, -8.0, 5.0, 3.0]);
/// ```
pub fn cholesky<T: FloatScalar>(a: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    CholeskyDecomposition::new(a).map(CholeskyDecomposition::into_l)
}

impl<T: FloatScalar> Matrix<T> {
    /// See [`CholeskyDecomposition::new`].
    pub fn cholesky(&self) -> Result<CholeskyDecomposition<T>, LinalgError> {
        CholeskyDecomposition::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spd_3x3() -> Matrix<f64> {
        Matrix::from_rows(3, 3, &[4.0, 2.0, 1.0, 2.0, 10.0, 3.5, 1.0, 3.5, 4.5])
    }

    #[test]
    fn cholesky_reconstructs() {
        let a = spd_3x3();
        let l = cholesky(&a).unwrap();
        assert!(l.is_lower_triangular());
        let reconstructed = &l * &l.transpose();
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (reconstructed[(i, j)] - a[(i, j)]).abs() < 1e-12,
                    "mismatch at ({},{})",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn cholesky_identity() {
        let id = Matrix::<f64>::identity(3);
        assert_eq!(cholesky(&id).unwrap(), id);
    }

    #[test]
    fn cholesky_solve_and_det() {
        let a = spd_3x3();
        let chol = a.cholesky().unwrap();
        let b = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let x = chol.solve(&b).unwrap();
        for i in 0..3 {
            let ax: f64 = (0..3).map(|j| a[(i, j)] * x[j]).sum();
            assert!((ax - b[i]).abs() < 1e-10, "residual[{}] = {}", i, ax - b[i]);
        }
        assert!((chol.det() - a.det().unwrap()).abs() < 1e-10);
    }

    #[test]
    fn cholesky_rejects_asymmetric() {
        let a = Matrix::from_rows(2, 2, &[4.0, 1.0, 2.0, 3.0]);
        assert_eq!(cholesky(&a).unwrap_err(), LinalgError::NotSymmetric);
        assert_eq!(
            cholesky(&Matrix::<f64>::zeros(2, 3)).unwrap_err(),
            LinalgError::NotSquare
        );
    }

    #[test]
    fn cholesky_indefinite_gives_nan() {
        let a = Matrix::<f64>::from_rows(2, 2, &[1.0, 5.0, 5.0, 1.0]);
        let l = cholesky(&a).unwrap();
        assert!(l[(1, 1)].is_nan());
    }
}
