use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be stored in a [`Matrix`](crate::Matrix).
///
/// Blanket-implemented for all types satisfying the bounds, so integer
/// matrices work for storage, arithmetic and products.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by everything that needs `sqrt`, `abs` or a tolerance:
/// elimination, decompositions, norms and the iterative solvers.
/// Implemented for `f32` and `f64`.
pub trait FloatScalar: Scalar + Float {
    /// Magnitude at or below which a pivot or column norm is treated as zero.
    ///
    /// `1e-10` for `f64`.
    const NEGLIGIBLE: Self;

    /// Absolute tolerance of [`all_close`](crate::Matrix::all_close).
    const ATOL: Self;

    /// Relative tolerance of [`all_close`](crate::Matrix::all_close).
    const RTOL: Self;

    /// `|a - b| <= ATOL + RTOL * |b|`.
    ///
    /// Asymmetric in its arguments: `b` is the reference value.
    #[inline]
    fn is_close(self, b: Self) -> bool {
        (self - b).abs() <= Self::ATOL + Self::RTOL * b.abs()
    }
}

macro_rules! impl_float_scalar {
    ($($t:ty => ($negligible:expr, $atol:expr, $rtol:expr)),* $(,)?) => {
        $(
            impl FloatScalar for $t {
                const NEGLIGIBLE: $t = $negligible;
                const ATOL: $t = $atol;
                const RTOL: $t = $rtol;
            }
        )*
    };
}

impl_float_scalar! {
    f64 => (1e-10, 1e-8, 1e-5),
    f32 => (1e-6, 1e-6, 1e-4),
}

/// Read-only access to a matrix-like type.
///
/// The row/column primitives in [`linalg`](crate::linalg) are written
/// against this trait so they work on anything with row-major storage.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;

    /// Contiguous slice of row `row`, from `col_start` to the end.
    fn row_as_slice(&self, row: usize, col_start: usize) -> &[T];
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling the in-place
/// row operations of Gaussian elimination.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Mutable contiguous slice of row `row`, from `col_start` to the end.
    fn row_as_mut_slice(&mut self, row: usize, col_start: usize) -> &mut [T];
}
