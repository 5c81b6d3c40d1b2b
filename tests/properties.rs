use densolve::linalg::{
    cholesky, determinant, inverse, lu_decomp, qr_decomp, rank, row_echelon, solve, solve_columns,
    svd,
};
use densolve::Matrix;
use proptest::prelude::*;

/// Strictly diagonally dominant `n×n` matrices: off-diagonal entries in
/// `[-1, 1]`, diagonal entries at least `n` in magnitude. Non-singular with
/// non-vanishing leading minors, so LU without pivoting succeeds.
fn diag_dominant() -> impl Strategy<Value = Matrix<f64>> {
    (1usize..=5).prop_flat_map(|n| {
        (prop::collection::vec(-1.0..=1.0_f64, n * n), prop::bool::ANY).prop_map(move |(data, neg)| {
            let mut m = Matrix::from_vec(n, n, data);
            let shift = if neg { -(n as f64 + 1.0) } else { n as f64 + 1.0 };
            for i in 0..n {
                m[(i, i)] = m[(i, i)] + shift;
            }
            m
        })
    })
}

/// Symmetric positive-definite `B·Bᵀ + n·I`.
fn spd() -> impl Strategy<Value = Matrix<f64>> {
    (1usize..=5).prop_flat_map(|n| {
        prop::collection::vec(-1.0..=1.0_f64, n * n).prop_map(move |data| {
            let b = Matrix::from_vec(n, n, data);
            &(&b * &b.transpose()) + &(Matrix::identity(n) * n as f64)
        })
    })
}

fn any_matrix() -> impl Strategy<Value = Matrix<f64>> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(r, c)| {
        prop::collection::vec(-10.0..=10.0_f64, r * c).prop_map(move |data| Matrix::from_vec(r, c, data))
    })
}

proptest! {
    #[test]
    fn inverse_is_two_sided(a in diag_dominant()) {
        let n = a.nrows();
        let inv = inverse(&a).unwrap();
        prop_assert!((&a * &inv).all_close(&Matrix::identity(n)));
        prop_assert!((&inv * &a).all_close(&Matrix::identity(n)));
    }

    #[test]
    fn solve_rows_satisfy_system(a in diag_dominant(), seed in prop::collection::vec(-1.0..=1.0_f64, 10)) {
        let n = a.nrows();
        let rhs = Matrix::from_fn(n, 2, |i, j| seed[i * 2 + j]);
        let x = solve(&a, &rhs).unwrap();
        prop_assert!((&x * &a).all_close(&rhs.transpose()));
        let y = solve_columns(&a, &rhs).unwrap();
        prop_assert!((&a * &y.transpose()).all_close(&rhs));
    }

    #[test]
    fn lu_factors(a in diag_dominant()) {
        let lu = lu_decomp(&a).unwrap();
        prop_assert!(lu.l().is_lower_triangular());
        prop_assert!(lu.u().is_upper_triangular());
        prop_assert!(lu.l().diagonal(0).as_slice().iter().all(|&d| d == 1.0));
        prop_assert!((lu.l() * lu.u()).all_close(&a));

        let det = determinant(&a).unwrap();
        prop_assert!((lu.det() - det).abs() <= 1e-9 * det.abs());
    }

    #[test]
    fn qr_factors(a in diag_dominant()) {
        let n = a.nrows();
        let (q, r) = qr_decomp(&a).unwrap().into_parts();
        prop_assert!(r.is_upper_triangular());
        prop_assert!((q.transpose() * &q).all_close(&Matrix::identity(n)));
        prop_assert!((&q * &r).all_close(&a));
    }

    #[test]
    fn cholesky_reconstructs(a in spd()) {
        let l = cholesky(&a).unwrap();
        prop_assert!(l.is_lower_triangular());
        prop_assert!((&l * &l.transpose()).all_close(&a));
    }

    #[test]
    fn row_echelon_is_idempotent(a in any_matrix()) {
        let once = row_echelon(&a);
        prop_assert_eq!(row_echelon(&once), once);
    }

    #[test]
    fn full_rank_reduces_to_identity(a in diag_dominant()) {
        let n = a.nrows();
        prop_assert_eq!(rank(&a), n);
        prop_assert_eq!(row_echelon(&a), Matrix::identity(n));
    }

    #[test]
    fn svd_factors_stay_orthogonal(a in diag_dominant()) {
        let n = a.nrows();
        let svd = svd(&a).unwrap();
        prop_assert!((svd.left().transpose() * svd.left()).all_close(&Matrix::identity(n)));
        prop_assert!((svd.right().transpose() * svd.right()).all_close(&Matrix::identity(n)));

        // The working matrix is triangular, so its diagonal carries |det A|.
        let product: f64 = svd.singular().as_slice().iter().product();
        let det = determinant(&a).unwrap();
        prop_assert!((product.abs() - det.abs()).abs() <= 1e-9 * det.abs());
    }
}
