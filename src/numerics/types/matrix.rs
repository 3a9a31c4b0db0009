// src/numerics/types/matrix.rs
// Fixed-size dense matrix with column-major storage.

use core::ops::{Index, IndexMut};

use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use super::error::{MatrixError, Result};
use super::traits::{FloatingPoint, Scalar};

/// Dense `ROWS x COLS` matrix stored inline in column-major order.
///
/// `data[j]` is column `j`, so element `(i, j)` sits at flat offset
/// `j * ROWS + i` of [`as_slice`](Self::as_slice). The shape is part of the
/// type: matrices of different shapes never convert into each other
/// implicitly.
///
/// Every constructor fills all elements; there is no uninitialized state.
/// Callers that want to skip the zeroing pass use [`from_fn`](Self::from_fn).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix<T: Scalar, const ROWS: usize, const COLS: usize> {
    pub data: [[T; ROWS]; COLS],
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// Number of elements, `ROWS * COLS`.
    pub const SIZE: usize = ROWS * COLS;

    /// Matrix with every element set to zero.
    pub fn zeros() -> Self {
        Self { data: [[T::zero(); ROWS]; COLS] }
    }

    /// Construct directly from columns (the storage layout).
    pub fn from_columns(data: [[T; ROWS]; COLS]) -> Self {
        Self { data }
    }

    /// Construct from rows written the way the matrix reads on paper.
    pub fn from_rows(rows: [[T; COLS]; ROWS]) -> Self {
        Self::from_fn(|i, j| rows[i][j])
    }

    /// Build a matrix by evaluating `f(i, j)` once per element.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self {
            data: core::array::from_fn(|j| core::array::from_fn(|i| f(i, j))),
        }
    }

    /// Construct from a flat list in row-major (human readable) order.
    ///
    /// The first `COLS` values fill row 0, the next `COLS` fill row 1 and so
    /// on. The list must hold exactly `ROWS * COLS` values.
    ///
    /// # Examples
    /// ```
    /// # use smallmat::Matrix;
    /// let m = Matrix::<i32, 2, 2>::from_row_major(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(m[(0, 1)], 2);
    /// assert_eq!(m[(1, 0)], 3);
    /// assert!(Matrix::<i32, 2, 2>::from_row_major(&[1, 2, 3]).is_err());
    /// ```
    pub fn from_row_major(values: &[T]) -> Result<Self> {
        Self::check_len(values.len())?;
        Ok(Self::from_fn(|i, j| values[i * COLS + j]))
    }

    /// Construct from a flat list already in column-major storage order.
    pub fn from_column_major_slice(values: &[T]) -> Result<Self> {
        Self::check_len(values.len())?;
        Ok(Self::from_fn(|i, j| values[j * ROWS + i]))
    }

    fn check_len(got: usize) -> Result<()> {
        if got != Self::SIZE {
            tracing::trace!(expected = Self::SIZE, got, "element list length mismatch");
            return Err(MatrixError::LengthMismatch { expected: Self::SIZE, got });
        }
        Ok(())
    }

    /// Element-wise `as` conversion from a matrix of another scalar type.
    pub fn cast<S>(other: &Matrix<S, ROWS, COLS>) -> Self
    where
        S: Scalar + AsPrimitive<T>,
        T: 'static,
    {
        Self::from_fn(|i, j| other.data[j][i].as_())
    }

    /// Apply `f` to every element, producing a matrix of the same shape.
    pub fn map<U, F>(&self, mut f: F) -> Matrix<U, ROWS, COLS>
    where
        U: Scalar,
        F: FnMut(T) -> U,
    {
        Matrix::from_fn(|i, j| f(self.data[j][i]))
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    pub const fn cols(&self) -> usize {
        COLS
    }

    /// The `(rows, cols)` pair serialization adapters record next to the buffer.
    pub const fn dims(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    pub const fn size(&self) -> usize {
        ROWS * COLS
    }

    /// The contiguous column-major element buffer.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Raw pointer to the first element. Valid for `size()` reads while the
    /// matrix is alive and not reassigned.
    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut_slice().as_mut_ptr()
    }

    /// Copy the column-major buffer out into a `Vec`.
    pub fn into_column_major(self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Iterate over the columns.
    pub fn columns(&self) -> impl Iterator<Item = &[T; ROWS]> {
        self.data.iter()
    }

    /// Get a row by index
    pub fn row(&self, i: usize) -> [T; COLS] {
        core::array::from_fn(|j| self.data[j][i])
    }

    /// Get a column by index
    pub fn column(&self, j: usize) -> [T; ROWS] {
        self.data[j]
    }

    pub fn transpose(&self) -> Matrix<T, COLS, ROWS> {
        Matrix::from_fn(|j, i| self.data[j][i])
    }

    /// Sum of squares of all elements.
    pub fn squared_norm(&self) -> T {
        self.as_slice().iter().fold(T::zero(), |acc, &v| acc + v * v)
    }

    /// Euclidean (Frobenius) norm over all elements.
    pub fn norm(&self) -> T
    where
        T: FloatingPoint,
    {
        self.squared_norm().sqrt()
    }

    /// Sum of element-wise products, treating both operands as flat vectors.
    pub fn dot(&self, other: &Self) -> T {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Extract the `N x M` block whose top-left corner is `(i0, j0)`.
    ///
    /// The block must lie inside the matrix; reading past the edge panics.
    pub fn block<const N: usize, const M: usize>(&self, i0: usize, j0: usize) -> Matrix<T, N, M> {
        debug_assert!(i0 + N <= ROWS && j0 + M <= COLS, "block out of bounds");
        Matrix::from_fn(|i, j| self.data[j + j0][i + i0])
    }

    /// Lift a column vector into homogeneous coordinates by appending a 1.
    ///
    /// `R1` must equal `ROWS + 1`.
    ///
    /// # Examples
    /// ```
    /// # use smallmat::Matrix;
    /// let p = Matrix::<f64, 2, 1>::from_row_major(&[3.0, 4.0]).unwrap();
    /// let h = p.extend::<3>().unwrap();
    /// assert_eq!(h.as_slice(), &[3.0, 4.0, 1.0]);
    /// ```
    pub fn extend<const R1: usize>(&self) -> Result<Matrix<T, R1, 1>> {
        Self::check_column_vector()?;
        if R1 != ROWS + 1 {
            return Err(MatrixError::DimensionMismatch { expected: (ROWS + 1, 1), got: (R1, 1) });
        }
        let mut res = Matrix::<T, R1, 1>::zeros();
        res.data[0][..ROWS].copy_from_slice(&self.data[0]);
        res.data[0][ROWS] = T::one();
        Ok(res)
    }

    /// Perspective divide: divide the first `ROWS - 1` elements by the last
    /// one.
    ///
    /// `R1` must equal `ROWS - 1`. A zero last element is not trapped; the
    /// result follows the scalar type's own division-by-zero behavior.
    pub fn project<const R1: usize>(&self) -> Result<Matrix<T, R1, 1>> {
        Self::check_column_vector()?;
        if R1 + 1 != ROWS {
            return Err(MatrixError::DimensionMismatch {
                expected: (ROWS.saturating_sub(1), 1),
                got: (R1, 1),
            });
        }
        Ok(self.block::<R1, 1>(0, 0) / self.data[0][R1])
    }

    fn check_column_vector() -> Result<()> {
        if COLS != 1 {
            tracing::trace!(rows = ROWS, cols = COLS, "homogeneous operation on a non-vector");
            return Err(MatrixError::NotColumnVector { cols: COLS });
        }
        Ok(())
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Identity matrix
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> Default for Matrix<T, ROWS, COLS> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> From<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    fn from(rows: [[T; COLS]; ROWS]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> Index<(usize, usize)> for Matrix<T, ROWS, COLS> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[j][i]
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> IndexMut<(usize, usize)> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[j][i]
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> Index<usize> for Matrix<T, ROWS, COLS> {
    type Output = T;

    #[inline]
    fn index(&self, k: usize) -> &T {
        &self.as_slice()[k]
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> IndexMut<usize> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn index_mut(&mut self, k: usize) -> &mut T {
        &mut self.as_mut_slice()[k]
    }
}

// Serialized form: the dimensions next to the flat column-major buffer, so a
// reader can validate the shape before accepting the elements.
#[derive(Serialize)]
#[serde(rename = "Matrix")]
struct MatrixRepr<'a, T> {
    rows: usize,
    cols: usize,
    data: &'a [T],
}

#[derive(Deserialize)]
#[serde(rename = "Matrix")]
struct MatrixBuf<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T, const ROWS: usize, const COLS: usize> Serialize for Matrix<T, ROWS, COLS>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        MatrixRepr { rows: ROWS, cols: COLS, data: self.as_slice() }.serialize(serializer)
    }
}

impl<'de, T, const ROWS: usize, const COLS: usize> Deserialize<'de> for Matrix<T, ROWS, COLS>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let buf = MatrixBuf::<T>::deserialize(deserializer)?;
        if (buf.rows, buf.cols) != (ROWS, COLS) {
            return Err(D::Error::custom(MatrixError::DimensionMismatch {
                expected: (ROWS, COLS),
                got: (buf.rows, buf.cols),
            }));
        }
        Self::from_column_major_slice(&buf.data).map_err(D::Error::custom)
    }
}
