use alloc::vec::Vec;
use core::fmt;

use super::vector::Vector;
use super::Matrix;

impl<T: Copy> Matrix<T> {
    /// Apply `f` to every element, producing a matrix of a possibly different type.
    ///
    /// ```
    /// use densolve::Matrix;
    /// let m = Matrix::from_rows(1, 2, &[1_i32, 2]);
    /// let f = m.map(|x| x as f64 * 0.5);
    /// assert_eq!(f.as_slice(), &[0.5, 1.0]);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, n) = (self.nrows, self.ncols);

        // Right-align each column to its widest entry.
        let mut widths: Vec<usize> = alloc::vec![0; n];
        for i in 0..m {
            for (j, w) in widths.iter_mut().enumerate() {
                *w = (*w).max(display_width(&self[(i, j)]));
            }
        }

        for i in 0..m {
            write!(f, "[")?;
            for (j, &width) in widths.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = width)?;
            }
            write!(f, "]")?;
            if i + 1 < m {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

fn display_width<T: fmt::Display>(x: &T) -> usize {
    struct Counter(usize);
    impl fmt::Write for Counter {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.0 += s.chars().count();
            Ok(())
        }
    }
    let mut c = Counter(0);
    let _ = fmt::write(&mut c, format_args!("{}", x));
    c.0
}
