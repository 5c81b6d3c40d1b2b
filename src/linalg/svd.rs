use crate::linalg::qr::gram_schmidt;
use crate::linalg::{ensure_square, LinalgError};
use crate::matrix::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Iteration cap for [`svd_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvdSettings {
    pub max_iter: usize,
}

impl Default for SvdSettings {
    fn default() -> Self {
        Self { max_iter: 100 }
    }
}

/// Singular value decomposition `A ≈ U · diag(σ) · Vᵀ`.
///
/// Produced by alternating QR iteration: the working matrix `S` is
/// factored from the left and from the right until it is diagonal.
/// `U` and `V` accumulate the orthogonal factors, so
/// `A = U · S · Vᵀ` holds after every step.
///
/// # Example
///
/// ```
/// use densolve::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[3.0_f64, 0.0, 4.0, 5.0]);
/// let svd = a.svd().unwrap();
/// assert!(svd.reconstruct().all_close(&a));
///
/// let mut sigma = svd.singular().as_slice().to_vec();
/// sigma.sort_by(|x, y| y.partial_cmp(x).unwrap());
/// assert!((sigma[0] - 45.0_f64.sqrt()).abs() < 1e-9);
/// assert!((sigma[1] - 5.0_f64.sqrt()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SvdDecomposition<T> {
    left: Matrix<T>,
    right: Matrix<T>,
    singular: Vector<T>,
    off_diagonal: T,
    iterations: usize,
    converged: bool,
}

impl<T: FloatScalar> SvdDecomposition<T> {
    /// Decompose a square matrix with the default settings.
    pub fn new(a: &Matrix<T>) -> Result<Self, LinalgError> {
        Self::with_settings(a, &SvdSettings::default())
    }

    /// Decompose a square matrix, running at most `settings.max_iter`
    /// alternations.
    ///
    /// Iteration stops early once every diagonal entry of the working matrix
    /// is all-close to zero, which only a (numerically) zero input reaches.
    /// Otherwise the full cap is spent; [`off_diagonal`](Self::off_diagonal)
    /// reports how far the working matrix is from diagonal at that point.
    pub fn with_settings(a: &Matrix<T>, settings: &SvdSettings) -> Result<Self, LinalgError> {
        let n = ensure_square(a)?;
        let mut left = Matrix::identity(n);
        let mut right = Matrix::identity(n);
        let mut s = a.clone();
        let zeros = Vector::zeros(n);

        let mut iterations = 0;
        let mut converged = false;
        while iterations < settings.max_iter {
            iterations += 1;

            let (q, r) = gram_schmidt(&s).into_parts();
            left = &left * &q;

            let (q, r) = gram_schmidt(&r.transpose()).into_parts();
            right = &right * &q;
            s = r.transpose();

            log::trace!("svd: iteration {}, off-diagonal {:?}", iterations, off_diagonal_max(&s));

            if s.diagonal(0).all_close(&zeros) {
                converged = true;
                break;
            }
        }

        let off_diagonal = off_diagonal_max(&s);
        if converged {
            log::debug!("svd: diagonal vanished after {} iterations", iterations);
        } else {
            // The diagonal test never fires for a non-singular input, so
            // reaching the cap is the normal exit.
            log::debug!(
                "svd: stopped at {} iterations, off-diagonal {:?}",
                iterations,
                off_diagonal
            );
        }

        Ok(Self {
            left,
            right,
            singular: s.diagonal(0),
            off_diagonal,
            iterations,
            converged,
        })
    }

    /// Left singular vectors `U`, one per column.
    #[inline]
    pub fn left(&self) -> &Matrix<T> {
        &self.left
    }

    /// Right singular vectors `V`, one per column.
    #[inline]
    pub fn right(&self) -> &Matrix<T> {
        &self.right
    }

    /// Diagonal of the final working matrix.
    ///
    /// Entries are non-negative but not sorted.
    #[inline]
    pub fn singular(&self) -> &Vector<T> {
        &self.singular
    }

    /// Largest absolute off-diagonal entry of the final working matrix.
    #[inline]
    pub fn off_diagonal(&self) -> T {
        self.off_diagonal
    }

    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the diagonal convergence test fired before the cap.
    #[inline]
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// `U · diag(σ) · Vᵀ`.
    pub fn reconstruct(&self) -> Matrix<T> {
        let sigma = Matrix::from_diag(&self.singular);
        &(&self.left * &sigma) * &self.right.transpose()
    }

    /// Take ownership of `(U, σ, V)`.
    #[inline]
    pub fn into_parts(self) -> (Matrix<T>, Vector<T>, Matrix<T>) {
        (self.left, self.singular, self.right)
    }
}

fn off_diagonal_max<T: FloatScalar>(s: &Matrix<T>) -> T {
    s.tril(-1).max_abs().max(s.triu(1).max_abs())
}

/// SVD of a square matrix with the default 100-iteration cap.
pub fn svd<T: FloatScalar>(a: &Matrix<T>) -> Result<SvdDecomposition<T>, LinalgError> {
    SvdDecomposition::new(a)
}

/// SVD of a square matrix with explicit settings.
pub fn svd_with<T: FloatScalar>(
    a: &Matrix<T>,
    settings: &SvdSettings,
) -> Result<SvdDecomposition<T>, LinalgError> {
    SvdDecomposition::with_settings(a, settings)
}

impl<T: FloatScalar> Matrix<T> {
    /// See [`svd`].
    pub fn svd(&self) -> Result<SvdDecomposition<T>, LinalgError> {
        SvdDecomposition::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(q: &Matrix<f64>) {
        let qtq = q.transpose() * q;
        assert!(
            qtq.all_close(&Matrix::identity(q.ncols())),
            "columns not orthonormal:\n{}",
            qtq
        );
    }

    #[test]
    fn svd_lower_triangular() {
        let a = Matrix::from_rows(3, 3, &[14.0, 0.0, 0.0, 21.0, 175.0, 0.0, -14.0, -70.0, 35.0]);
        let svd = svd(&a).unwrap();
        assert!(svd.iterations() <= 100);
        assert!(svd.reconstruct().all_close(&a));
        assert_orthonormal(svd.left());
        assert_orthonormal(svd.right());
        assert!(svd.off_diagonal() < 1e-9);

        let mut sigma: alloc::vec::Vec<f64> = svd.singular().as_slice().iter().map(|s| s.abs()).collect();
        sigma.sort_by(|x, y| y.partial_cmp(x).unwrap());
        // Product of singular values equals |det A| = 14 * 175 * 35.
        let product: f64 = sigma.iter().product();
        assert!((product - 85750.0).abs() < 1e-6);
        assert!((sigma[0] - 190.567_243_722_544_65).abs() < 1e-8);
        assert!((sigma[2] - 13.694_920_383_322_035).abs() < 1e-8);
    }

    #[test]
    fn svd_identity() {
        let id = Matrix::<f64>::identity(3);
        let svd = id.svd().unwrap();
        assert_eq!(svd.left(), &id);
        assert_eq!(svd.right(), &id);
        assert_eq!(svd.singular().as_slice(), &[1.0, 1.0, 1.0]);
        assert!(!svd.converged());
        assert_eq!(svd.iterations(), 100);
    }

    #[test]
    fn svd_zero_matrix_converges_immediately() {
        let z = Matrix::<f64>::zeros(2, 2);
        let svd = svd(&z).unwrap();
        assert!(svd.converged());
        assert_eq!(svd.iterations(), 1);
        assert!(svd.reconstruct().all_close(&z));
    }

    #[test]
    fn svd_rank_deficient() {
        let a = Matrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 0.0, 1.0]);
        let svd = svd(&a).unwrap();
        assert!(svd.reconstruct().all_close(&a));
        assert_orthonormal(svd.left());
        assert_orthonormal(svd.right());
        let smallest = svd
            .singular()
            .as_slice()
            .iter()
            .fold(f64::INFINITY, |m, s| m.min(s.abs()));
        assert!(smallest < 1e-9);
    }

    #[test]
    fn svd_small_magnitude_is_not_rank_deficient() {
        let a = Matrix::<f64>::from_rows(2, 2, &[2e-11, 1e-11, 1e-11, 3e-11]);
        let svd = svd(&a).unwrap();
        assert_orthonormal(svd.left());
        assert_orthonormal(svd.right());
        assert!(svd.singular().as_slice().iter().all(|s| s.abs() > 1e-12));

        // |det A| = 5e-22 is carried by the triangular working matrix.
        let product: f64 = svd.singular().as_slice().iter().product();
        assert!((product.abs() * 1e22 - 5.0).abs() < 1e-9);
        let back = svd.reconstruct();
        for i in 0..2 {
            for j in 0..2 {
                assert!((back[(i, j)] - a[(i, j)]).abs() < 1e-24);
            }
        }
    }

    #[test]
    fn svd_iteration_cap() {
        let a = Matrix::from_rows(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let svd = svd_with(&a, &SvdSettings { max_iter: 3 }).unwrap();
        assert_eq!(svd.iterations(), 3);
        assert!(!svd.converged());
    }

    #[test]
    fn svd_requires_square() {
        assert_eq!(
            svd(&Matrix::<f64>::zeros(2, 3)).unwrap_err(),
            LinalgError::NotSquare
        );
    }
}
