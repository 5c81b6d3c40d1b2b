use alloc::vec::Vec;

use crate::traits::Scalar;

use super::vector::Vector;
use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Copy of rows `r0..r1` and columns `c0..c1` (half-open ranges).
    ///
    /// Panics if a range is reversed or extends beyond the matrix.
    ///
    /// ```
    /// use densolve::Matrix;
    /// let m = Matrix::from_fn(3, 4, |i, j| (i * 4 + j) as f64);
    /// let s = m.slice(1, 3, 2, 4);
    /// assert_eq!(s.shape(), (2, 2));
    /// assert_eq!(s.as_slice(), &[6.0, 7.0, 10.0, 11.0]);
    /// ```
    pub fn slice(&self, r0: usize, r1: usize, c0: usize, c1: usize) -> Self {
        assert!(
            r0 <= r1 && c0 <= c1 && r1 <= self.nrows && c1 <= self.ncols,
            "slice [{}..{}, {}..{}] out of bounds for {}x{} matrix",
            r0, r1, c0, c1, self.nrows, self.ncols,
        );
        let mut data = Vec::with_capacity((r1 - r0) * (c1 - c0));
        for i in r0..r1 {
            data.extend_from_slice(&self.row_slice(i)[c0..c1]);
        }
        Matrix {
            data,
            nrows: r1 - r0,
            ncols: c1 - c0,
        }
    }

    /// Place `other` to the right of `self`: `[self | other]`.
    ///
    /// Panics if the row counts differ.
    ///
    /// ```
    /// use densolve::Matrix;
    /// let a = Matrix::from_rows(2, 1, &[1.0, 2.0]);
    /// let aug = a.hstack(&Matrix::identity(2));
    /// assert_eq!(aug.as_slice(), &[1.0, 1.0, 0.0, 2.0, 0.0, 1.0]);
    /// ```
    pub fn hstack(&self, other: &Self) -> Self {
        assert_eq!(
            self.nrows, other.nrows,
            "hstack: row count mismatch ({} vs {})",
            self.nrows, other.nrows,
        );
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        for i in 0..self.nrows {
            data.extend_from_slice(self.row_slice(i));
            data.extend_from_slice(other.row_slice(i));
        }
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols + other.ncols,
        }
    }

    /// Place `other` below `self`.
    ///
    /// Panics if the column counts differ.
    pub fn vstack(&self, other: &Self) -> Self {
        assert_eq!(
            self.ncols, other.ncols,
            "vstack: column count mismatch ({} vs {})",
            self.ncols, other.ncols,
        );
        let mut data = self.data.clone();
        data.extend_from_slice(&other.data);
        Matrix {
            data,
            nrows: self.nrows + other.nrows,
            ncols: self.ncols,
        }
    }

    /// Copy of row `i` as a vector.
    pub fn row(&self, i: usize) -> Vector<T> {
        Vector::from_slice(self.row_slice(i))
    }

    /// Copy of column `j` as a vector.
    pub fn col(&self, j: usize) -> Vector<T> {
        Vector::from_vec((0..self.nrows).map(|i| self[(i, j)]).collect())
    }

    /// Overwrite column `j` with the elements of `v`.
    ///
    /// Panics if `v.len() != nrows`.
    pub fn set_col(&mut self, j: usize, v: &Vector<T>) {
        assert_eq!(v.len(), self.nrows, "column length mismatch");
        for i in 0..self.nrows {
            self[(i, j)] = v[i];
        }
    }
}
