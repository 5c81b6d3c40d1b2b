use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

/// Dense vector (wraps a 1×N [`Matrix`]).
///
/// Enforces the single-row shape and provides single-index access `v[i]`.
/// Singular values and eigenvalues are returned as vectors.
///
/// # Examples
///
/// ```
/// use densolve::Vector;
///
/// let v = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// assert!((v.dot(&v) - 14.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    pub(crate) inner: Matrix<T>,
}

impl<T: Scalar> Vector<T> {
    /// Create a vector from a slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            inner: Matrix::from_rows(1, data.len(), data),
        }
    }

    /// Create a vector from an owned `Vec`.
    ///
    /// ```
    /// use densolve::Vector;
    /// let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(v[2], 3.0);
    /// ```
    pub fn from_vec(data: Vec<T>) -> Self {
        let n = data.len();
        Self {
            inner: Matrix::from_vec(1, n, data),
        }
    }

    /// Zero vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self {
            inner: Matrix::zeros(1, n),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.ncols()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dot product.
    ///
    /// Panics on length mismatch.
    pub fn dot(&self, rhs: &Self) -> T {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        self.as_slice()
            .iter()
            .zip(rhs.as_slice())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// View the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }

    /// The underlying 1×N matrix.
    #[inline]
    pub fn as_matrix(&self) -> &Matrix<T> {
        &self.inner
    }

    /// Consume the vector, returning the 1×N matrix.
    #[inline]
    pub fn into_matrix(self) -> Matrix<T> {
        self.inner
    }

    /// Consume the vector, returning the element buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_vec()
    }
}

impl<T: FloatScalar> Vector<T> {
    /// Element-wise [`is_close`](FloatScalar::is_close) against `other`.
    ///
    /// Returns `false` if the lengths differ.
    ///
    /// ```
    /// use densolve::Vector;
    /// let a = Vector::from_slice(&[1.0_f64, 2.0]);
    /// let b = Vector::from_slice(&[1.0 + 1e-9, 2.0]);
    /// assert!(a.all_close(&b));
    /// ```
    pub fn all_close(&self, other: &Self) -> bool {
        self.inner.all_close(&other.inner)
    }
}

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.inner.as_slice()[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.inner.as_mut_slice()[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_and_index() {
        let mut v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v.len(), 3);
        v[1] = 5.0;
        assert_eq!(v.as_slice(), &[1.0, 5.0, 3.0]);
    }

    #[test]
    fn zeros_is_single_row() {
        let v = Vector::<f64>::zeros(4);
        assert_eq!(v.as_matrix().shape(), (1, 4));
        assert!(!v.is_empty());
        assert!(Vector::<f64>::zeros(0).is_empty());
    }

    #[test]
    fn dot() {
        let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
        assert_eq!(a.dot(&b), 32.0);
    }

    #[test]
    #[should_panic(expected = "vector length mismatch")]
    fn dot_length_mismatch() {
        let a = Vector::from_slice(&[1.0, 2.0]);
        let b = Vector::from_slice(&[1.0]);
        let _ = a.dot(&b);
    }

    #[test]
    fn all_close_length_mismatch() {
        let a = Vector::from_slice(&[1.0_f64, 2.0]);
        let b = Vector::from_slice(&[1.0_f64]);
        assert!(!a.all_close(&b));
    }
}
