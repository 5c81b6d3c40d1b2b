use crate::traits::FloatScalar;

use super::vector::Vector;
use super::Matrix;

// ── Vector norms ────────────────────────────────────────────────────

impl<T: FloatScalar> Vector<T> {
    /// L2 (Euclidean) norm.
    ///
    /// ```
    /// use densolve::Vector;
    /// let v = Vector::from_slice(&[3.0_f64, 4.0]);
    /// assert!((v.norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn norm(&self) -> T {
        self.dot(self).sqrt()
    }

    /// L1 norm (sum of absolute values).
    pub fn norm_l1(&self) -> T {
        self.as_slice().iter().fold(T::zero(), |acc, &x| acc + x.abs())
    }

    /// Unit vector in the same direction. A zero vector yields NaNs.
    pub fn normalize(&self) -> Self {
        let inv = T::one() / self.norm();
        Vector {
            inner: self.inner.scale(inv),
        }
    }
}

// ── Matrix norms ────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Frobenius norm: square root of the sum of squared elements.
    ///
    /// ```
    /// use densolve::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
    /// assert!((m.frobenius_norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }

    /// Infinity norm: maximum absolute row sum.
    pub fn norm_inf(&self) -> T {
        (0..self.nrows)
            .map(|i| self.row_slice(i).iter().fold(T::zero(), |acc, &x| acc + x.abs()))
            .fold(T::zero(), T::max)
    }

    /// One norm: maximum absolute column sum.
    pub fn norm_one(&self) -> T {
        (0..self.ncols)
            .map(|j| (0..self.nrows).fold(T::zero(), |acc, i| acc + self[(i, j)].abs()))
            .fold(T::zero(), T::max)
    }

    /// Largest element magnitude, zero for an empty matrix.
    pub fn max_abs(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc.max(x.abs()))
    }

    /// Scale to unit Frobenius norm. A zero matrix yields NaNs.
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.frobenius_norm())
    }
}
