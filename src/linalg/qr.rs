use crate::linalg::primitives::{col_copy, col_div, col_length, col_sub, dot_cols};
use crate::linalg::{determinant, ensure_square, LinalgError};
use crate::matrix::{DimensionMismatch, Vector};
use crate::traits::FloatScalar;
use crate::Matrix;

/// QR decomposition `A = Q·R` of a square matrix by Gram–Schmidt.
///
/// `Q` has orthonormal columns and `R` is upper triangular with a
/// non-negative diagonal.
///
/// # Example
///
/// ```
/// use densolve::Matrix;
///
/// let a = Matrix::from_rows(3, 3, &[12.0_f64, -51.0, 4.0, 6.0, 167.0, -68.0, -4.0, 24.0, -41.0]);
/// let qr = a.qr().unwrap();
/// assert!((qr.q() * qr.r()).all_close(&a));
/// assert!((qr.r()[(0, 0)] - 14.0).abs() < 1e-12);
///
/// let (q, _r) = qr.into_parts();
/// assert!((q.transpose() * &q).all_close(&Matrix::identity(3)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QrDecomposition<T> {
    q: Matrix<T>,
    r: Matrix<T>,
}

impl<T: FloatScalar> QrDecomposition<T> {
    /// Decompose a square, non-singular matrix.
    ///
    /// Returns [`LinalgError::NotSquare`] or, when the determinant is exactly
    /// zero, [`LinalgError::Singular`].
    pub fn new(a: &Matrix<T>) -> Result<Self, LinalgError> {
        ensure_square(a)?;
        if determinant(a)? == T::zero() {
            return Err(LinalgError::Singular);
        }
        Ok(classical_gram_schmidt(a))
    }

    /// The orthogonal factor `Q`.
    #[inline]
    pub fn q(&self) -> &Matrix<T> {
        &self.q
    }

    /// The upper-triangular factor `R`.
    #[inline]
    pub fn r(&self) -> &Matrix<T> {
        &self.r
    }

    /// Take ownership of `(Q, R)`.
    #[inline]
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>) {
        (self.q, self.r)
    }

    /// Solve `A x = b` as `R x = Qᵀ b` by back substitution.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        let n = self.q.nrows();
        if b.len() != n {
            return Err(DimensionMismatch {
                expected: (1, n),
                got: (1, b.len()),
            }
            .into());
        }
        let mut x = Vector::zeros(n);
        for i in (0..n).rev() {
            let qtb = (0..n).fold(T::zero(), |acc, k| acc + self.q[(k, i)] * b[k]);
            let sum = ((i + 1)..n).fold(qtb, |acc, j| acc - self.r[(i, j)] * x[j]);
            x[i] = sum / self.r[(i, i)];
        }
        Ok(x)
    }
}

/// QR decomposition of a square, non-singular matrix.
///
/// Classical Gram–Schmidt: the projection coefficients of column `i` of `A`
/// onto the earlier columns of `Q` fill column `i` of `R` above the
/// diagonal, and the remainder after subtracting them is normalized (its
/// length is `R[i][i]`). Less robust than Householder QR on ill-conditioned
/// input.
pub fn qr_decomp<T: FloatScalar>(a: &Matrix<T>) -> Result<QrDecomposition<T>, LinalgError> {
    QrDecomposition::new(a)
}

fn classical_gram_schmidt<T: FloatScalar>(a: &Matrix<T>) -> QrDecomposition<T> {
    let n = a.nrows();
    let mut q = Matrix::zeros(n, n);
    let mut r = Matrix::zeros(n, n);

    for i in 0..n {
        col_copy(a, i, &mut q, i);
        for j in 0..i {
            let proj = dot_cols(a, i, &q, j);
            r[(j, i)] = proj;
            col_sub(&mut q, i, j, proj);
        }
        let norm = col_length(&q, i);
        r[(i, i)] = norm;
        col_div(&mut q, i, norm);
    }

    QrDecomposition { q, r }
}

/// Gram–Schmidt kernel of the iterative solvers, without the
/// non-singularity check.
///
/// Projections are subtracted one at a time, and a column whose remainder
/// collapses is projected a second time. If it is still no longer than
/// [`FloatScalar::NEGLIGIBLE`] times the largest entry of `a`, the column is
/// linearly dependent on its predecessors: `R[i][i]` is set to zero and `Q` is completed with the standard basis vector that is least
/// covered by the columns so far, so `Q` stays orthonormal and `Q·R`
/// reproduces `A` up to the discarded remainder.
///
/// `a` must be square.
pub(crate) fn gram_schmidt<T: FloatScalar>(a: &Matrix<T>) -> QrDecomposition<T> {
    let n = a.nrows();
    debug_assert_eq!(n, a.ncols());
    let mut q = Matrix::zeros(n, n);
    let mut r = Matrix::zeros(n, n);
    let half = T::one() / (T::one() + T::one());
    let cutoff = T::NEGLIGIBLE * a.max_abs();

    for i in 0..n {
        col_copy(a, i, &mut q, i);
        let before = col_length(&q, i);
        project_out(&mut q, i, Some(&mut r));

        let mut norm = col_length(&q, i);
        if norm < half * before {
            project_out(&mut q, i, Some(&mut r));
            norm = col_length(&q, i);
        }

        if norm > cutoff {
            r[(i, i)] = norm;
            col_div(&mut q, i, norm);
        } else {
            r[(i, i)] = T::zero();
            complete_basis(&mut q, i);
        }
    }

    QrDecomposition { q, r }
}

/// Subtract from column `i` of `q` its projections onto columns `0..i`,
/// accumulating the coefficients into column `i` of `r` when given.
fn project_out<T: FloatScalar>(q: &mut Matrix<T>, i: usize, mut r: Option<&mut Matrix<T>>) {
    for j in 0..i {
        let proj = dot_cols(&*q, i, &*q, j);
        if let Some(r) = r.as_deref_mut() {
            r[(j, i)] = r[(j, i)] + proj;
        }
        col_sub(q, i, j, proj);
    }
}

/// Fill column `i` of `q` with a unit vector orthogonal to columns `0..i`.
fn complete_basis<T: FloatScalar>(q: &mut Matrix<T>, i: usize) {
    let n = q.nrows();
    // The residual of e_k has squared length 1 - Σ_j q[k][j]², largest for the
    // row least covered by the current basis.
    let k = (0..n)
        .map(|k| (k, (0..i).fold(T::zero(), |acc, j| acc + q[(k, j)] * q[(k, j)])))
        .fold((0, T::infinity()), |best, (k, c)| if c < best.1 { (k, c) } else { best })
        .0;
    log::trace!("gram_schmidt: column {} is dependent, completing with e_{}", i, k);

    for row in 0..n {
        q[(row, i)] = if row == k { T::one() } else { T::zero() };
    }
    project_out(q, i, None);
    project_out(q, i, None);
    let norm = col_length(&*q, i);
    col_div(q, i, norm);
}

impl<T: FloatScalar> Matrix<T> {
    /// See [`qr_decomp`].
    pub fn qr(&self) -> Result<QrDecomposition<T>, LinalgError> {
        QrDecomposition::new(self)
    }
}
