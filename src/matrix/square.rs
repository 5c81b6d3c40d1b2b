use alloc::vec::Vec;

use crate::traits::{FloatScalar, Scalar};

use super::vector::Vector;
use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Sum of diagonal elements.
    ///
    /// ```
    /// use densolve::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows.min(self.ncols);
        (0..n).fold(T::zero(), |acc, i| acc + self[(i, i)])
    }

    /// Extract the `k`-th diagonal as a vector.
    ///
    /// `k = 0` is the main diagonal, `k > 0` lies above it and `k < 0` below.
    /// For an `n x n` matrix the result has `n - |k|` elements.
    ///
    /// Panics if `|k|` is not smaller than the matrix dimension along the
    /// offset direction.
    ///
    /// ```
    /// use densolve::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    /// assert_eq!(m.diagonal(0).as_slice(), &[0.0, 4.0, 8.0]);
    /// assert_eq!(m.diagonal(1).as_slice(), &[1.0, 5.0]);
    /// assert_eq!(m.diagonal(-2).as_slice(), &[6.0]);
    /// ```
    pub fn diagonal(&self, k: isize) -> Vector<T> {
        let off = k.unsigned_abs();
        let (row0, col0) = if k >= 0 { (0, off) } else { (off, 0) };
        assert!(
            row0 < self.nrows.max(1) && col0 < self.ncols.max(1),
            "diagonal {} out of range for {}x{} matrix",
            k, self.nrows, self.ncols,
        );
        let len = (self.nrows - row0).min(self.ncols - col0);
        let data: Vec<T> = (0..len).map(|i| self[(row0 + i, col0 + i)]).collect();
        Vector::from_vec(data)
    }

    /// Create a square diagonal matrix from a vector.
    pub fn from_diag(v: &Vector<T>) -> Self {
        let n = v.len();
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = v[i];
        }
        m
    }

    /// Lower-triangular part: keeps elements with `j <= i + k`, zeroes the rest.
    ///
    /// `tril(0)` includes the diagonal, `tril(-1)` is strictly lower.
    ///
    /// ```
    /// use densolve::Matrix;
    /// let m = Matrix::fill(2, 2, 1.0_f64);
    /// assert_eq!(m.tril(-1).as_slice(), &[0.0, 0.0, 1.0, 0.0]);
    /// ```
    pub fn tril(&self, k: isize) -> Self {
        Matrix::from_fn(self.nrows, self.ncols, |i, j| {
            if (j as isize) <= i as isize + k {
                self[(i, j)]
            } else {
                T::zero()
            }
        })
    }

    /// Upper-triangular part: keeps elements with `j >= i + k`, zeroes the rest.
    ///
    /// `triu(0)` includes the diagonal, `triu(1)` is strictly upper.
    pub fn triu(&self, k: isize) -> Self {
        Matrix::from_fn(self.nrows, self.ncols, |i, j| {
            if (j as isize) >= i as isize + k {
                self[(i, j)]
            } else {
                T::zero()
            }
        })
    }

    /// Whether every element strictly below the diagonal is exactly zero.
    pub fn is_upper_triangular(&self) -> bool {
        (0..self.nrows).all(|i| (0..i.min(self.ncols)).all(|j| self[(i, j)] == T::zero()))
    }

    /// Whether every element strictly above the diagonal is exactly zero.
    pub fn is_lower_triangular(&self) -> bool {
        (0..self.nrows).all(|i| ((i + 1)..self.ncols).all(|j| self[(i, j)] == T::zero()))
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Square and [`all_close`](Matrix::all_close) to its own transpose.
    ///
    /// ```
    /// use densolve::Matrix;
    /// let sym = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0 + 1e-12, 3.0]);
    /// assert!(sym.is_symmetric());
    /// ```
    pub fn is_symmetric(&self) -> bool {
        self.is_square() && self.all_close(&self.transpose())
    }
}
