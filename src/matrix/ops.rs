use alloc::vec;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    fn zip_with(&self, rhs: &Self, op: &str, f: impl Fn(T, T) -> T) -> Self {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "dimension mismatch: {}x{} {} {}x{}",
            self.nrows, self.ncols, op, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    fn map_elements(&self, f: impl Fn(T) -> T) -> Self {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Matrix product `self * rhs`, `(M×N) * (N×P) → (M×P)`.
    ///
    /// Panics if `self.ncols() != rhs.nrows()`. Also available as the `*`
    /// operator on owned and borrowed operands.
    pub fn matmul(&self, rhs: &Self) -> Self {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let (m, n, p) = (self.nrows, self.ncols, rhs.ncols);
        let mut data = vec![T::zero(); m * p];
        for i in 0..m {
            let out = &mut data[i * p..(i + 1) * p];
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                for (o, &b) in out.iter_mut().zip(&rhs.data[k * p..(k + 1) * p]) {
                    *o = *o + a_ik * b;
                }
            }
        }
        Matrix {
            data,
            nrows: m,
            ncols: p,
        }
    }

    /// Transpose: `(M×N) → (N×M)`.
    ///
    /// ```
    /// use densolve::Matrix;
    /// let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 1)], 6.0);
    /// ```
    pub fn transpose(&self) -> Self {
        Matrix::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }

    /// Multiply every element by `s`.
    pub fn scale(&self, s: T) -> Self {
        self.map_elements(|x| x * s)
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Element-wise closeness test: `|a - b| <= ATOL + RTOL * |b|` for every
    /// pair, with `other` as the reference.
    ///
    /// Returns `false` when the shapes differ.
    ///
    /// ```
    /// use densolve::Matrix;
    /// let a = Matrix::from_rows(1, 2, &[1.0_f64, 100.0]);
    /// let b = Matrix::from_rows(1, 2, &[1.0 + 1e-9, 100.0 + 1e-4]);
    /// assert!(a.all_close(&b));
    /// assert!(!a.all_close(&Matrix::zeros(2, 1)));
    /// ```
    pub fn all_close(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| a.is_close(b))
    }
}

// ── Element-wise addition / subtraction ─────────────────────────────

macro_rules! impl_elementwise {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign:ident, $sym:literal, $op:tt) => {
        impl<T: Scalar> $trait<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;
            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                self.zip_with(rhs, $sym, |a, b| a $op b)
            }
        }

        impl<T: Scalar> $trait for Matrix<T> {
            type Output = Matrix<T>;
            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                &self $op &rhs
            }
        }

        impl<T: Scalar> $trait<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;
            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                &self $op rhs
            }
        }

        impl<T: Scalar> $trait<Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;
            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                self $op &rhs
            }
        }

        impl<T: Scalar> $assign_trait<&Matrix<T>> for Matrix<T> {
            fn $assign(&mut self, rhs: &Matrix<T>) {
                assert_eq!(
                    self.shape(),
                    rhs.shape(),
                    "dimension mismatch: {}x{} {}= {}x{}",
                    self.nrows, self.ncols, $sym, rhs.nrows, rhs.ncols,
                );
                for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
                    *a = *a $op b;
                }
            }
        }
    };
}

impl_elementwise!(Add, add, AddAssign, add_assign, "+", +);
impl_elementwise!(Sub, sub, SubAssign, sub_assign, "-", -);

impl<T: Scalar + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        self.map_elements(|x| -x)
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        self.map_elements(|x| -x)
    }
}

// ── Matrix multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.matmul(rhs)
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self.matmul(&rhs)
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.matmul(rhs)
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self.matmul(&rhs)
    }
}

// ── Scalar multiplication / division ────────────────────────────────

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn div(self, rhs: T) -> Matrix<T> {
        self.map_elements(|x| x / rhs)
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn div(self, rhs: T) -> Matrix<T> {
        self.map_elements(|x| x / rhs)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs.scale(self)
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i32, i64);
