// src/numerics/types/display.rs
// Human-readable text forms of Matrix. Text is always row-major, the way the
// matrix reads on paper, regardless of the column-major storage.

use core::fmt::{self, Write};
use core::str::FromStr;

use super::error::MatrixError;
use super::matrix::Matrix;
use super::traits::Scalar;

impl<T: Scalar, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// Write a labelled dump of the matrix:
    ///
    /// ```text
    /// name = [
    /// [1, 0],
    /// [0, 1]]
    /// ```
    pub fn print<W: fmt::Write>(&self, out: &mut W, name: &str) -> fmt::Result {
        writeln!(out, "{name} = [")?;
        self.write_rows(out, None)?;
        writeln!(out, "]")
    }

    fn write_rows<W: fmt::Write + ?Sized>(&self, out: &mut W, precision: Option<usize>) -> fmt::Result {
        for i in 0..ROWS {
            if i > 0 {
                out.write_str(",\n")?;
            }
            out.write_char('[')?;
            for j in 0..COLS {
                if j > 0 {
                    out.write_str(", ")?;
                }
                match precision {
                    Some(p) => write!(out, "{:.*}", p, self[(i, j)])?,
                    None => write!(out, "{}", self[(i, j)])?,
                }
            }
            out.write_char(']')?;
        }
        Ok(())
    }
}

/// Nested bracketed rows, e.g. `[[1, 0],\n[0, 1]]`. A precision in the format
/// spec (`{:.3}`) applies to every element.
impl<T: Scalar, const ROWS: usize, const COLS: usize> fmt::Display for Matrix<T, ROWS, COLS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        f.write_char('[')?;
        self.write_rows(f, precision)?;
        f.write_char(']')
    }
}

/// Parses `ROWS * COLS` numbers in row-major order. Commas, whitespace and
/// brackets are separators, so both `"1 2 3 4"` and the `Display` output
/// are accepted.
impl<T, const ROWS: usize, const COLS: usize> FromStr for Matrix<T, ROWS, COLS>
where
    T: Scalar + FromStr,
{
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c == ',' || c == '[' || c == ']' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<T>()
                    .map_err(|_| MatrixError::Parse(format!("invalid element {token:?}")))
            })
            .collect::<Result<Vec<T>, _>>()?;
        Self::from_row_major(&values)
    }
}
