//! Flat in-memory layout of matrices and vectors.
//!
//! A matrix is written as `{rows: u32}{cols: u32}` followed by the elements
//! in row-major order; a vector as `{size: u32}` followed by its elements.
//! Everything is in host byte order, so the bytes are only portable between
//! machines of the same endianness.
//!
//! ```
//! use densolve::Matrix;
//! use densolve::wire::{decode_matrix, encode_matrix};
//!
//! let m = Matrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! let bytes = encode_matrix(&m).unwrap();
//! assert_eq!(bytes.len(), 8 + 6 * 8);
//!
//! let (back, used) = decode_matrix::<f64>(&bytes).unwrap();
//! assert_eq!(back, m);
//! assert_eq!(used, bytes.len());
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::matrix::Vector;
use crate::traits::Scalar;
use crate::Matrix;

const DIM_BYTES: usize = core::mem::size_of::<u32>();

/// Errors from encoding or decoding the wire layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    /// Input ended before the header or the announced elements.
    Truncated { needed: usize, available: usize },
    /// A dimension does not fit in `u32`, or `rows * cols` overflows `usize`.
    DimensionOverflow,
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::Truncated { needed, available } => write!(
                f,
                "truncated input: need {} bytes, have {}",
                needed, available
            ),
            WireError::DimensionOverflow => write!(f, "dimension overflow"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WireError {}

/// Element types with a fixed-size host-order byte representation.
pub trait WireElement: Scalar {
    const SIZE: usize;

    fn write_ne(self, out: &mut Vec<u8>);

    /// `bytes` is exactly [`SIZE`](Self::SIZE) long.
    fn read_ne(bytes: &[u8]) -> Self;
}

macro_rules! impl_wire_element {
    ($($t:ty),*) => {
        $(
            impl WireElement for $t {
                const SIZE: usize = core::mem::size_of::<$t>();

                #[inline]
                fn write_ne(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_ne_bytes());
                }

                #[inline]
                fn read_ne(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; core::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(buf)
                }
            }
        )*
    };
}

impl_wire_element!(f32, f64);

fn write_dim(n: usize, out: &mut Vec<u8>) -> Result<(), WireError> {
    let n = u32::try_from(n).map_err(|_| WireError::DimensionOverflow)?;
    out.extend_from_slice(&n.to_ne_bytes());
    Ok(())
}

fn read_dim(bytes: &[u8], offset: usize) -> Result<usize, WireError> {
    let end = offset + DIM_BYTES;
    if bytes.len() < end {
        return Err(WireError::Truncated {
            needed: end,
            available: bytes.len(),
        });
    }
    let mut buf = [0u8; DIM_BYTES];
    buf.copy_from_slice(&bytes[offset..end]);
    usize::try_from(u32::from_ne_bytes(buf)).map_err(|_| WireError::DimensionOverflow)
}

fn read_elements<T: WireElement>(
    bytes: &[u8],
    offset: usize,
    count: usize,
) -> Result<(Vec<T>, usize), WireError> {
    let end = count
        .checked_mul(T::SIZE)
        .and_then(|len| len.checked_add(offset))
        .ok_or(WireError::DimensionOverflow)?;
    if bytes.len() < end {
        return Err(WireError::Truncated {
            needed: end,
            available: bytes.len(),
        });
    }
    let data = bytes[offset..end]
        .chunks_exact(T::SIZE)
        .map(T::read_ne)
        .collect();
    Ok((data, end))
}

/// Encode a matrix as `{rows}{cols}{elements}`.
pub fn encode_matrix<T: WireElement>(m: &Matrix<T>) -> Result<Vec<u8>, WireError> {
    let mut out = Vec::with_capacity(2 * DIM_BYTES + m.as_slice().len() * T::SIZE);
    write_dim(m.nrows(), &mut out)?;
    write_dim(m.ncols(), &mut out)?;
    for &x in m.as_slice() {
        x.write_ne(&mut out);
    }
    Ok(out)
}

/// Encode a vector as `{size}{elements}`.
pub fn encode_vector<T: WireElement>(v: &Vector<T>) -> Result<Vec<u8>, WireError> {
    let mut out = Vec::with_capacity(DIM_BYTES + v.len() * T::SIZE);
    write_dim(v.len(), &mut out)?;
    for &x in v.as_slice() {
        x.write_ne(&mut out);
    }
    Ok(out)
}

/// Decode a matrix from the front of `bytes`.
///
/// Returns the matrix and the number of bytes consumed; trailing bytes are
/// left for the caller.
pub fn decode_matrix<T: WireElement>(bytes: &[u8]) -> Result<(Matrix<T>, usize), WireError> {
    let rows = read_dim(bytes, 0)?;
    let cols = read_dim(bytes, DIM_BYTES)?;
    let count = rows.checked_mul(cols).ok_or(WireError::DimensionOverflow)?;
    let (data, used) = read_elements(bytes, 2 * DIM_BYTES, count)?;
    Ok((Matrix::from_vec(rows, cols, data), used))
}

/// Decode a vector from the front of `bytes`.
pub fn decode_vector<T: WireElement>(bytes: &[u8]) -> Result<(Vector<T>, usize), WireError> {
    let size = read_dim(bytes, 0)?;
    let (data, used) = read_elements(bytes, DIM_BYTES, size)?;
    Ok((Vector::from_vec(data), used))
}
