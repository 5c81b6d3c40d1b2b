//! # densolve
//!
//! Dense linear algebra on heap-allocated, runtime-sized matrices: row
//! reduction, determinants, inverses, QR/LU/Cholesky decompositions,
//! QR-iteration eigensolving and SVD. No-std compatible (needs `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use densolve::{Matrix, Vector};
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::from_rows(3, 3, &[
//!     2.0_f64, 1.0, -1.0,
//!     -3.0, -1.0, 2.0,
//!     -2.0, 1.0, 2.0,
//! ]);
//! let b = Matrix::from_rows(3, 1, &[8.0, -11.0, -3.0]);
//! let x = a.solve_columns(&b).unwrap(); // x = [2, 3, -1]
//! assert!(x.all_close(&Matrix::from_rows(1, 3, &[2.0, 3.0, -1.0])));
//!
//! let v = Vector::from_slice(&[3.0_f64, 4.0]);
//! assert_eq!(v.norm(), 5.0);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: `Matrix<T>` with runtime dimensions and `Vec<T>` row-major
//!   storage. Arithmetic operators, indexing, norms, block operations,
//!   triangular parts and diagonals. [`Vector<T>`] wraps a 1×N matrix with
//!   single-index access.
//!
//! - [`linalg`]: Reduced row-echelon form, cofactor determinant, inverse,
//!   rank and linear solves; Gram–Schmidt QR, Doolittle LU and Cholesky
//!   decompositions; the unshifted QR algorithm for eigenvalues and
//!   eigenvectors; SVD by alternating QR. In-place row/column building blocks
//!   are in [`linalg::primitives`].
//!
//! - [`wire`]: Flat `{rows}{cols}{elements}` byte layout for moving
//!   matrices and vectors across process boundaries.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`) with the tolerances
//!     used by comparisons and pivoting
//!   - [`MatrixRef`] / [`MatrixMut`]: generic read/write access for algorithms
//!
//! ## Errors and logging
//!
//! Precondition violations (non-square input, singular matrix, asymmetric
//! Cholesky input, mismatched shapes) return [`LinalgError`]. Shape
//! contracts on constructors and operators panic. Iterative solvers report
//! non-convergence through a flag and emit diagnostics through the [`log`]
//! facade; no logger is installed.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//! | `libm`    | no       | Pure-Rust software float fallback for `no_std` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod linalg;
pub mod matrix;
pub mod traits;
pub mod wire;

pub use linalg::LinalgError;
pub use matrix::{DimensionMismatch, Matrix, Matrixf32, Matrixf64, Vector, Vectorf32, Vectorf64};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
