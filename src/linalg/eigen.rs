use alloc::vec::Vec;

use crate::linalg::qr::gram_schmidt;
use crate::linalg::svd::SvdDecomposition;
use crate::linalg::{ensure_square, LinalgError};
use crate::matrix::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Iteration cap and convergence tolerance for [`qr_algo_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrAlgoSettings<T> {
    pub max_iter: usize,
    /// Iteration stops once every entry strictly below the diagonal is
    /// smaller than this in magnitude. For inputs whose largest entry is
    /// below one, the tolerance is scaled by that entry.
    pub tol: T,
}

impl<T: FloatScalar> Default for QrAlgoSettings<T> {
    fn default() -> Self {
        Self {
            max_iter: 500,
            tol: T::NEGLIGIBLE,
        }
    }
}

/// Outcome of the unshifted QR algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct QrAlgoResult<T> {
    /// Final iterate, similar to the input. Upper triangular (up to `tol`)
    /// when the iteration converged.
    pub matrix: Matrix<T>,
    pub iterations: usize,
    pub converged: bool,
}

/// Unshifted QR algorithm with the default settings.
///
/// ```
/// use densolve::Matrix;
/// use densolve::linalg::qr_algo;
///
/// let a = Matrix::from_rows(2, 2, &[4.0_f64, 1.0, 2.0, 3.0]);
/// let res = qr_algo(&a).unwrap();
/// assert!(res.converged);
/// assert!((res.matrix[(0, 0)] - 5.0).abs() < 1e-9);
/// assert!((res.matrix[(1, 1)] - 2.0).abs() < 1e-9);
/// ```
pub fn qr_algo<T: FloatScalar>(a: &Matrix<T>) -> Result<QrAlgoResult<T>, LinalgError> {
    qr_algo_with(a, &QrAlgoSettings::default())
}

/// Unshifted QR algorithm: `A ← R·Q` where `A = Q·R`.
///
/// Each step is a similarity transform, so the iterate keeps the
/// eigenvalues of `a`. For real eigenvalues of distinct magnitude it tends
/// to upper-triangular form with the eigenvalues on the diagonal. Complex
/// pairs never settle; the cap is then reached and `converged` is false.
pub fn qr_algo_with<T: FloatScalar>(
    a: &Matrix<T>,
    settings: &QrAlgoSettings<T>,
) -> Result<QrAlgoResult<T>, LinalgError> {
    ensure_square(a)?;
    let limit = settings.tol * a.max_abs().min(T::one());
    let mut m = a.clone();

    for iter in 1..=settings.max_iter {
        let (q, r) = gram_schmidt(&m).into_parts();
        m = &r * &q;

        let residual = m.tril(-1).max_abs();
        log::trace!("qr_algo: iteration {}, sub-diagonal {:?}", iter, residual);
        if residual < limit || residual == T::zero() {
            log::debug!("qr_algo: converged after {} iterations", iter);
            return Ok(QrAlgoResult {
                matrix: m,
                iterations: iter,
                converged: true,
            });
        }
    }

    log::warn!(
        "qr_algo: no convergence within {} iterations, sub-diagonal {:?}",
        settings.max_iter,
        m.tril(-1).max_abs()
    );
    Ok(QrAlgoResult {
        matrix: m,
        iterations: settings.max_iter,
        converged: false,
    })
}

/// Eigenvalues of a square matrix: the diagonal of the [`qr_algo`] iterate.
///
/// Ordered as they appear on that diagonal, typically by decreasing
/// magnitude. Only meaningful for real spectra.
///
/// ```
/// use densolve::Matrix;
/// use densolve::linalg::eigenvalues;
///
/// let ev = eigenvalues(&Matrix::<f64>::identity(3)).unwrap();
/// assert_eq!(ev.as_slice(), &[1.0, 1.0, 1.0]);
/// ```
pub fn eigenvalues<T: FloatScalar>(a: &Matrix<T>) -> Result<Vector<T>, LinalgError> {
    Ok(qr_algo(a)?.matrix.diagonal(0))
}

/// Eigenvectors of a square matrix, one per column, in the order of
/// [`eigenvalues`].
///
/// For each eigenvalue `λ` the SVD of `A − λI` is taken and the right
/// singular vector with the smallest singular value, normalized to unit
/// length, becomes the column. An eigenvalue repeated `m` times takes the
/// `m` smallest singular directions in turn, so `I` yields `I`.
pub fn eigenvectors<T: FloatScalar>(a: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    let n = ensure_square(a)?;
    let lambdas = eigenvalues(a)?;
    let mut vectors = Matrix::zeros(n, n);

    for i in 0..n {
        let lambda = lambdas[i];
        let repeat = (0..i).filter(|&j| lambdas[j].is_close(lambda)).count();

        let mut shifted = a.clone();
        for k in 0..n {
            shifted[(k, k)] = shifted[(k, k)] - lambda;
        }
        let svd = SvdDecomposition::new(&shifted)?;

        let sigma = svd.singular();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&x, &y| {
            sigma[x]
                .abs()
                .partial_cmp(&sigma[y].abs())
                .unwrap_or(core::cmp::Ordering::Equal)
        });
        let k = order[repeat.min(n - 1)];

        let v = svd.right().col(k).normalize();
        vectors.set_col(i, &v);
    }

    Ok(vectors)
}

impl<T: FloatScalar> Matrix<T> {
    /// See [`eigenvalues`].
    pub fn eigenvalues(&self) -> Result<Vector<T>, LinalgError> {
        eigenvalues(self)
    }

    /// See [`eigenvectors`].
    pub fn eigenvectors(&self) -> Result<Matrix<T>, LinalgError> {
        eigenvectors(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_eigenpairs(a: &Matrix<f64>, tol: f64) {
        let lambdas = a.eigenvalues().unwrap();
        let vecs = a.eigenvectors().unwrap();
        let n = a.nrows();
        for i in 0..n {
            let v = vecs.col(i);
            assert!((v.norm() - 1.0).abs() < 1e-12);
            for r in 0..n {
                let av: f64 = (0..n).map(|c| a[(r, c)] * v[c]).sum();
                assert!(
                    (av - lambdas[i] * v[r]).abs() < tol,
                    "pair {}: (Av - λv)[{}] = {}",
                    i,
                    r,
                    av - lambdas[i] * v[r]
                );
            }
        }
    }

    #[test]
    fn identity_spectrum() {
        let id = Matrix::<f64>::identity(3);
        let res = qr_algo(&id).unwrap();
        assert!(res.converged);
        assert_eq!(res.iterations, 1);
        assert_eq!(eigenvalues(&id).unwrap().as_slice(), &[1.0, 1.0, 1.0]);
        assert_eq!(eigenvectors(&id).unwrap(), id);
    }

    #[test]
    fn symmetric_tridiagonal() {
        // Eigenvalues 3 and 3 ± √3.
        let a = Matrix::from_rows(3, 3, &[2.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 4.0]);
        let ev = eigenvalues(&a).unwrap();
        let s3 = 3.0_f64.sqrt();
        assert!((ev[0] - (3.0 + s3)).abs() < 1e-9);
        assert!((ev[1] - 3.0).abs() < 1e-9);
        assert!((ev[2] - (3.0 - s3)).abs() < 1e-9);
        assert_eigenpairs(&a, 1e-8);
    }

    #[test]
    fn non_symmetric_real_spectrum() {
        let a = Matrix::from_rows(2, 2, &[4.0, 1.0, 2.0, 3.0]);
        let res = qr_algo(&a).unwrap();
        assert!(res.converged);
        assert!(res.matrix.tril(-1).max_abs() < 1e-10);
        assert_eigenpairs(&a, 1e-8);
    }

    #[test]
    fn trace_is_preserved() {
        let a = Matrix::from_rows(3, 3, &[2.0, 0.0, 0.0, 0.0, 3.0, 4.0, 0.0, 4.0, 9.0]);
        let ev = eigenvalues(&a).unwrap();
        let sum: f64 = ev.as_slice().iter().sum();
        assert!((sum - a.trace()).abs() < 1e-9);
        assert_eigenpairs(&a, 1e-8);
    }

    #[test]
    fn small_magnitude_spectrum() {
        // 1e-11 · [[2, 1], [1, 3]] has eigenvalues 1e-11 · (5 ± √5) / 2.
        let a = Matrix::<f64>::from_rows(2, 2, &[2e-11, 1e-11, 1e-11, 3e-11]);
        let res = qr_algo(&a).unwrap();
        assert!(res.converged);
        let s5 = 5.0_f64.sqrt();
        let ev = eigenvalues(&a).unwrap();
        assert!((ev[0] * 1e11 - (5.0 + s5) / 2.0).abs() < 1e-8, "ev[0] = {}", ev[0]);
        assert!((ev[1] * 1e11 - (5.0 - s5) / 2.0).abs() < 1e-8, "ev[1] = {}", ev[1]);
    }

    #[test]
    fn zero_matrix_converges() {
        let res = qr_algo(&Matrix::<f64>::zeros(2, 2)).unwrap();
        assert!(res.converged);
        assert_eq!(res.iterations, 1);
    }

    #[test]
    fn rotation_does_not_converge() {
        let a = Matrix::from_rows(2, 2, &[0.0, -1.0, 1.0, 0.0]);
        let settings = QrAlgoSettings {
            max_iter: 20,
            ..QrAlgoSettings::default()
        };
        let res = qr_algo_with(&a, &settings).unwrap();
        assert!(!res.converged);
        assert_eq!(res.iterations, 20);
        assert!(res.matrix.all_close(&a));
    }

    #[test]
    fn requires_square() {
        let m = Matrix::<f64>::zeros(2, 3);
        assert_eq!(qr_algo(&m).unwrap_err(), LinalgError::NotSquare);
        assert_eq!(eigenvalues(&m).unwrap_err(), LinalgError::NotSquare);
        assert_eq!(eigenvectors(&m).unwrap_err(), LinalgError::NotSquare);
    }
}
