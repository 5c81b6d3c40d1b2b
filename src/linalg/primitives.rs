//! Row and column primitives.
//!
//! The building blocks of elimination and Gram–Schmidt. Everything here works
//! in place on anything implementing [`MatrixMut`] and costs `O(cols)` per row
//! operation or `O(rows)` per column operation. Row indices refer to the
//! current state of the matrix, so callers tracking pivots must account for
//! earlier swaps.
//!
//! Operations that read one matrix while writing another take the source by
//! shared reference; the borrow checker rules out aliasing the destination.

use crate::traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
use crate::Matrix;

/// First row at or below `row` whose entry in column `col` exceeds
/// [`FloatScalar::NEGLIGIBLE`] in magnitude.
///
/// The search takes the first adequate entry, not the largest, so it does not
/// perform partial pivoting. `None` when no such row exists.
///
/// ```
/// use densolve::Matrix;
/// use densolve::linalg::primitives::find_pivot;
///
/// let m = Matrix::from_rows(3, 2, &[0.0_f64, 1.0, 1e-12, 2.0, 3.0, 4.0]);
/// assert_eq!(find_pivot(&m, 0, 0), Some(2));
/// assert_eq!(find_pivot(&m, 1, 1), Some(1));
/// assert_eq!(find_pivot(&m, 0, 3), None);
/// ```
pub fn find_pivot<T: FloatScalar>(m: &impl MatrixRef<T>, col: usize, row: usize) -> Option<usize> {
    (row..m.nrows()).find(|&i| m.get(i, col).abs() > T::NEGLIGIBLE)
}

/// Exchange rows `a` and `b`.
pub fn swap_rows<T: Copy>(m: &mut impl MatrixMut<T>, a: usize, b: usize) {
    if a == b {
        return;
    }
    for j in 0..m.ncols() {
        let tmp = *m.get(a, j);
        *m.get_mut(a, j) = *m.get(b, j);
        *m.get_mut(b, j) = tmp;
    }
}

/// Multiply every element of `row` by `s`.
pub fn multiply_row<T: Scalar>(m: &mut impl MatrixMut<T>, row: usize, s: T) {
    for x in m.row_as_mut_slice(row, 0) {
        *x = *x * s;
    }
}

/// `row[dst] += s * row[src]`.
pub fn add_row<T: Scalar>(m: &mut impl MatrixMut<T>, dst: usize, src: usize, s: T) {
    for j in 0..m.ncols() {
        let v = *m.get(src, j);
        let d = m.get_mut(dst, j);
        *d = *d + s * v;
    }
}

/// Copy column `col` of `src` into column `dst_col` of `dst`.
///
/// Both matrices must have the same number of rows.
pub fn col_copy<T: Copy>(
    src: &impl MatrixRef<T>,
    col: usize,
    dst: &mut impl MatrixMut<T>,
    dst_col: usize,
) {
    debug_assert_eq!(src.nrows(), dst.nrows());
    for i in 0..src.nrows() {
        *dst.get_mut(i, dst_col) = *src.get(i, col);
    }
}

/// `m[:, col] -= s * m[:, other_col]` within one matrix.
pub fn col_sub<T: Scalar>(m: &mut impl MatrixMut<T>, col: usize, other_col: usize, s: T) {
    for i in 0..m.nrows() {
        let v = *m.get(i, other_col);
        let d = m.get_mut(i, col);
        *d = *d - s * v;
    }
}

/// `m[:, col] -= s * other[:, other_col]` across two matrices.
pub fn col_sub_from<T: Scalar>(
    m: &mut impl MatrixMut<T>,
    col: usize,
    other: &impl MatrixRef<T>,
    other_col: usize,
    s: T,
) {
    debug_assert_eq!(m.nrows(), other.nrows());
    for i in 0..m.nrows() {
        let d = m.get_mut(i, col);
        *d = *d - s * *other.get(i, other_col);
    }
}

/// `m[:, col] /= s`. Division by zero follows IEEE semantics.
pub fn col_div<T: Scalar>(m: &mut impl MatrixMut<T>, col: usize, s: T) {
    for i in 0..m.nrows() {
        let d = m.get_mut(i, col);
        *d = *d / s;
    }
}

/// Inner product of column `col_a` of `a` with column `col_b` of `b`.
pub fn dot_cols<T: Scalar>(
    a: &impl MatrixRef<T>,
    col_a: usize,
    b: &impl MatrixRef<T>,
    col_b: usize,
) -> T {
    debug_assert_eq!(a.nrows(), b.nrows());
    (0..a.nrows()).fold(T::zero(), |acc, i| acc + *a.get(i, col_a) * *b.get(i, col_b))
}

/// Euclidean length of column `col`.
pub fn col_length<T: FloatScalar>(m: &impl MatrixRef<T>, col: usize) -> T {
    dot_cols(m, col, m, col).sqrt()
}

// ── Method forms on Matrix ──────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Exchange rows `a` and `b` in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        swap_rows(self, a, b);
    }

    /// Multiply row `row` by `s` in place.
    pub fn multiply_row(&mut self, row: usize, s: T) {
        multiply_row(self, row, s);
    }

    /// `row[dst] += s * row[src]` in place.
    pub fn add_row(&mut self, dst: usize, src: usize, s: T) {
        add_row(self, dst, src, s);
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// See [`find_pivot`].
    pub fn find_pivot(&self, col: usize, row: usize) -> Option<usize> {
        find_pivot(self, col, row)
    }
}
