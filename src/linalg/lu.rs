use crate::linalg::{ensure_square, LinalgError};
use crate::matrix::{DimensionMismatch, Vector};
use crate::traits::FloatScalar;
use crate::Matrix;

/// LU decomposition `A = L·U` without pivoting (Doolittle).
///
/// `L` is unit lower triangular, `U` is upper triangular.
///
/// # Example
///
/// ```
/// use densolve::Matrix;
///
/// let a = Matrix::from_rows(3, 3, &[2.0_f64, -1.0, -2.0, -4.0, 6.0, 3.0, -4.0, -2.0, 8.0]);
/// let lu = a.lu().unwrap();
/// assert!((lu.l() * lu.u()).all_close(&a));
/// assert!((lu.det() - 24.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition<T> {
    l: Matrix<T>,
    u: Matrix<T>,
}

impl<T: FloatScalar> LuDecomposition<T> {
    /// Decompose a square matrix.
    ///
    /// Only the shape is checked. A zero pivot `U[i][i]` is divided by as-is
    /// and fills the later rows of `L` with Inf or NaN; permute the rows
    /// beforehand if the leading minors may vanish.
    pub fn new(a: &Matrix<T>) -> Result<Self, LinalgError> {
        let n = ensure_square(a)?;
        let mut l = Matrix::zeros(n, n);
        let mut u = Matrix::zeros(n, n);

        for i in 0..n {
            for k in i..n {
                let sum = (0..i).fold(T::zero(), |acc, j| acc + l[(i, j)] * u[(j, k)]);
                u[(i, k)] = a[(i, k)] - sum;
            }

            let pivot = u[(i, i)];
            for k in (i + 1)..n {
                let sum = (0..i).fold(T::zero(), |acc, j| acc + l[(k, j)] * u[(j, i)]);
                l[(k, i)] = (a[(k, i)] - sum) / pivot;
            }

            l[(i, i)] = T::one();
        }

        Ok(Self { l, u })
    }

    /// The unit lower-triangular factor `L`.
    #[inline]
    pub fn l(&self) -> &Matrix<T> {
        &self.l
    }

    /// The upper-triangular factor `U`.
    #[inline]
    pub fn u(&self) -> &Matrix<T> {
        &self.u
    }

    /// Take ownership of `(L, U)`.
    #[inline]
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>) {
        (self.l, self.u)
    }

    /// Determinant: product of the diagonal of `U`.
    pub fn det(&self) -> T {
        (0..self.u.nrows()).fold(T::one(), |acc, i| acc * self.u[(i, i)])
    }

    /// Solve `A x = b` by forward substitution on `L` then back substitution on `U`.
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
            x[i] = (0..i).fold(b[i], |acc, j| acc - self.l[(i, j)] * x[j]);
        }
        for i in (0..n).rev() {
            let sum = ((i + 1)..n).fold(x[i], |acc, j| acc - self.u[(i, j)] * x[j]);
            x[i] = sum / self.u[(i, i)];
        }
        Ok(x)
    }
}

/// Doolittle LU decomposition of a square matrix. See [`LuDecomposition::new`].
pub fn lu_decomp<T: FloatScalar>(a: &Matrix<T>) -> Result<LuDecomposition<T>, LinalgError> {
    LuDecomposition::new(a)
}

impl<T: FloatScalar> Matrix<T> {
    /// See [`lu_decomp`].
    pub fn lu(&self) -> Result<LuDecomposition<T>, LinalgError> {
        LuDecomposition::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lu_3x3_factors() {
        let a = Matrix::from_rows(3, 3, &[2.0, -1.0, -2.0, -4.0, 6.0, 3.0, -4.0, -2.0, 8.0]);
        let lu = lu_decomp(&a).unwrap();
        let l = Matrix::from_rows(3, 3, &[1.0, 0.0, 0.0, -2.0, 1.0, 0.0, -2.0, -1.0, 1.0]);
        let u = Matrix::from_rows(3, 3, &[2.0, -1.0, -2.0, 0.0, 4.0, -1.0, 0.0, 0.0, 3.0]);
        assert_eq!(lu.l(), &l);
        assert_eq!(lu.u(), &u);
    }

    #[test]
    fn lu_shapes() {
        let a = Matrix::from_fn(4, 4, |i, j| 1.0 / (i + j + 1) as f64 + if i == j { 2.0 } else { 0.0 });
        let (l, u) = lu_decomp(&a).unwrap().into_parts();
        assert!(l.is_lower_triangular());
        assert!(u.is_upper_triangular());
        assert!(l.diagonal(0).as_slice().iter().all(|&d| d == 1.0));
        assert!((&l * &u).all_close(&a));
    }

    #[test]
    fn lu_solve_and_det() {
        let a = Matrix::from_rows(3, 3, &[4.0, 3.0, 2.0, 2.0, 1.0, 3.0, 3.0, 2.0, 1.0]);
        let lu = a.lu().unwrap();
        let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
        let x = lu.solve(&b).unwrap();
        for i in 0..3 {
            let ax: f64 = (0..3).map(|j| a[(i, j)] * x[j]).sum();
            assert!((ax - b[i]).abs() < 1e-10, "residual[{}] = {}", i, ax - b[i]);
        }
        assert!((lu.det() - a.det().unwrap()).abs() < 1e-12);
    }

    #[test]
    fn lu_zero_pivot_propagates_non_finite() {
        let a = Matrix::<f64>::from_rows(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        let lu = lu_decomp(&a).unwrap();
        assert!(!lu.l()[(1, 0)].is_finite());
    }

    #[test]
    fn lu_requires_square() {
        assert_eq!(
            lu_decomp(&Matrix::<f64>::zeros(2, 3)).unwrap_err(),
            LinalgError::NotSquare
        );
    }
}
