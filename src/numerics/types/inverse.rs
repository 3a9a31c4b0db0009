// src/numerics/types/inverse.rs
// Closed-form inverses for square matrices up to 4x4.
//
// Each size gets its own `Invert` impl, so the algorithm is picked when the
// matrix type is known. All of them build the adjugate first and then apply a
// single multiply by `1 / det`.

use core::ops::Neg;

use super::error::{MatrixError, Result};
use super::matrix::Matrix;
use super::traits::Scalar;

/// Square matrices that can be inverted.
///
/// Sizes 1 through 4 have closed-form implementations. Sizes 5 through 16
/// implement the trait but always return [`MatrixError::Unsupported`]; larger
/// sizes do not implement it at all.
pub trait Invert: Sized {
    fn invert(&self) -> Result<Self>;
}

/// Square matrices with a closed-form determinant.
pub trait Determinant {
    type Output;

    fn determinant(&self) -> Self::Output;
}

/// Free-function form of [`Invert::invert`].
pub fn inverse<M: Invert>(m: &M) -> Result<M> {
    m.invert()
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Inverse of a square matrix.
    ///
    /// Fails with [`MatrixError::Singular`] when the determinant is exactly
    /// zero. No tolerance is applied: the type targets small, well-conditioned
    /// transforms, and a nearly singular input yields a large but finite result.
    ///
    /// # Examples
    /// ```
    /// # use smallmat::Matrix;
    /// let m = Matrix::from_rows([[2.0, 0.0], [0.0, 2.0]]);
    /// assert_eq!(m.inverse().unwrap(), Matrix::from_rows([[0.5, 0.0], [0.0, 0.5]]));
    ///
    /// let singular = Matrix::from_rows([[1.0, 1.0], [1.0, 1.0]]);
    /// assert!(singular.inverse().unwrap_err().is_singular());
    /// ```
    pub fn inverse(&self) -> Result<Self>
    where
        Self: Invert,
    {
        self.invert()
    }

    pub fn determinant(&self) -> T
    where
        Self: Determinant<Output = T>,
    {
        Determinant::determinant(self)
    }
}

fn scale_adjugate<T: Scalar, const N: usize>(adj: Matrix<T, N, N>, det: T) -> Result<Matrix<T, N, N>> {
    if det == T::zero() {
        tracing::debug!(dim = N, "determinant is zero, matrix is not invertible");
        return Err(MatrixError::Singular { dim: N });
    }
    Ok(adj * (T::one() / det))
}

// 1x1

impl<T: Scalar> Determinant for Matrix<T, 1, 1> {
    type Output = T;

    fn determinant(&self) -> T {
        self[0]
    }
}

impl<T: Scalar> Invert for Matrix<T, 1, 1> {
    fn invert(&self) -> Result<Self> {
        scale_adjugate(Matrix::from_columns([[T::one()]]), self[0])
    }
}

// 2x2

fn adjugate2<T: Scalar + Neg<Output = T>>(m: &Matrix<T, 2, 2>) -> Matrix<T, 2, 2> {
    Matrix::from_rows([
        [m[(1, 1)], -m[(0, 1)]],
        [-m[(1, 0)], m[(0, 0)]],
    ])
}

impl<T: Scalar> Determinant for Matrix<T, 2, 2> {
    type Output = T;

    fn determinant(&self) -> T {
        let m = self;
        m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
    }
}

impl<T: Scalar + Neg<Output = T>> Invert for Matrix<T, 2, 2> {
    fn invert(&self) -> Result<Self> {
        scale_adjugate(adjugate2(self), Determinant::determinant(self))
    }
}

// 3x3

fn adjugate3<T: Scalar>(m: &Matrix<T, 3, 3>) -> Matrix<T, 3, 3> {
    Matrix::from_rows([
        [
            m[(1, 1)] * m[(2, 2)] - m[(2, 1)] * m[(1, 2)],
            m[(0, 2)] * m[(2, 1)] - m[(0, 1)] * m[(2, 2)],
            m[(0, 1)] * m[(1, 2)] - m[(0, 2)] * m[(1, 1)],
        ],
        [
            m[(1, 2)] * m[(2, 0)] - m[(1, 0)] * m[(2, 2)],
            m[(0, 0)] * m[(2, 2)] - m[(0, 2)] * m[(2, 0)],
            m[(1, 0)] * m[(0, 2)] - m[(0, 0)] * m[(1, 2)],
        ],
        [
            m[(1, 0)] * m[(2, 1)] - m[(2, 0)] * m[(1, 1)],
            m[(2, 0)] * m[(0, 1)] - m[(0, 0)] * m[(2, 1)],
            m[(0, 0)] * m[(1, 1)] - m[(1, 0)] * m[(0, 1)],
        ],
    ])
}

impl<T: Scalar> Determinant for Matrix<T, 3, 3> {
    type Output = T;

    /// First-row cofactor expansion.
    fn determinant(&self) -> T {
        let m = self;
        m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(2, 1)] * m[(1, 2)])
            - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
            + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
    }
}

impl<T: Scalar> Invert for Matrix<T, 3, 3> {
    fn invert(&self) -> Result<Self> {
        scale_adjugate(adjugate3(self), Determinant::determinant(self))
    }
}

// 4x4

/// Adjugate of a 4x4 matrix, indexed on the flat column-major buffer.
fn adjugate4<T: Scalar + Neg<Output = T>>(mat: &Matrix<T, 4, 4>) -> Matrix<T, 4, 4> {
    let m = mat.as_slice();
    let mut adj = Matrix::<T, 4, 4>::zeros();
    let t = adj.as_mut_slice();
    t[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
        + m[9] * m[7] * m[14] + m[13] * m[6] * m[11] - m[13] * m[7] * m[10];
    t[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
        - m[9] * m[3] * m[14] - m[13] * m[2] * m[11] + m[13] * m[3] * m[10];
    t[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
        + m[5] * m[3] * m[14] + m[13] * m[2] * m[7] - m[13] * m[3] * m[6];
    t[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
        - m[5] * m[3] * m[10] - m[9] * m[2] * m[7] + m[9] * m[3] * m[6];
    t[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
        - m[8] * m[7] * m[14] - m[12] * m[6] * m[11] + m[12] * m[7] * m[10];
    t[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
        + m[8] * m[3] * m[14] + m[12] * m[2] * m[11] - m[12] * m[3] * m[10];
    t[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
        - m[4] * m[3] * m[14] - m[12] * m[2] * m[7] + m[12] * m[3] * m[6];
    t[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
        + m[4] * m[3] * m[10] + m[8] * m[2] * m[7] - m[8] * m[3] * m[6];
    t[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
        + m[8] * m[7] * m[13] + m[12] * m[5] * m[11] - m[12] * m[7] * m[9];
    t[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
        - m[8] * m[3] * m[13] - m[12] * m[1] * m[11] + m[12] * m[3] * m[9];
    t[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
        + m[4] * m[3] * m[13] + m[12] * m[1] * m[7] - m[12] * m[3] * m[5];
    t[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
        - m[4] * m[3] * m[9] - m[8] * m[1] * m[7] + m[8] * m[3] * m[5];
    t[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
        - m[8] * m[6] * m[13] - m[12] * m[5] * m[10] + m[12] * m[6] * m[9];
    t[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
        + m[8] * m[2] * m[13] + m[12] * m[1] * m[10] - m[12] * m[2] * m[9];
    t[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
        - m[4] * m[2] * m[13] - m[12] * m[1] * m[6] + m[12] * m[2] * m[5];
    t[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
        + m[4] * m[2] * m[9] + m[8] * m[1] * m[6] - m[8] * m[2] * m[5];
    adj
}

// Expansion along the first row, reusing the adjugate's cofactors.
fn det4_from_adjugate<T: Scalar>(m: &Matrix<T, 4, 4>, adj: &Matrix<T, 4, 4>) -> T {
    m[0] * adj[0] + m[1] * adj[4] + m[2] * adj[8] + m[3] * adj[12]
}

impl<T: Scalar + Neg<Output = T>> Determinant for Matrix<T, 4, 4> {
    type Output = T;

    fn determinant(&self) -> T {
        det4_from_adjugate(self, &adjugate4(self))
    }
}

impl<T: Scalar + Neg<Output = T>> Invert for Matrix<T, 4, 4> {
    fn invert(&self) -> Result<Self> {
        let adj = adjugate4(self);
        let det = det4_from_adjugate(self, &adj);
        scale_adjugate(adj, det)
    }
}

// No closed form beyond 4x4.
macro_rules! impl_unsupported_inverse {
    ($($n:literal),*) => {
        $(
            impl<T: Scalar> Invert for Matrix<T, $n, $n> {
                fn invert(&self) -> Result<Self> {
                    tracing::warn!(dim = $n, "inverse requested for unsupported size");
                    Err(MatrixError::Unsupported { dim: $n })
                }
            }
        )*
    };
}

impl_unsupported_inverse!(5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_1x1() {
        let m = Matrix::from_columns([[4.0f64]]);
        assert_eq!(m.inverse().unwrap()[0], 0.25);
        assert_eq!(m.determinant(), 4.0);
    }

    #[test]
    fn test_inverse_1x1_zero_is_singular() {
        let m = Matrix::<f64, 1, 1>::zeros();
        assert_eq!(m.inverse(), Err(MatrixError::Singular { dim: 1 }));
    }

    #[test]
    fn test_inverse_2x2() {
        let m = Matrix::from_rows([[2.0, 0.0], [0.0, 2.0]]);
        assert_eq!(m.inverse().unwrap(), Matrix::from_rows([[0.5, 0.0], [0.0, 0.5]]));

        let m = Matrix::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        let inv = m.inverse().unwrap();
        let expected = Matrix::from_rows([[0.6, -0.7], [-0.2, 0.4]]);
        assert!((inv - expected).norm() < 1e-12);
    }

    #[test]
    fn test_inverse_2x2_singular() {
        let m = Matrix::from_rows([[1.0, 1.0], [1.0, 1.0]]);
        let err = m.inverse().unwrap_err();
        assert_eq!(err, MatrixError::Singular { dim: 2 });
        assert!(!err.is_precondition());
    }

    #[test]
    fn test_inverse_2x2_integer_exact() {
        let m = Matrix::from_rows([[2, 1], [1, 1]]);
        let inv = m.inverse().unwrap();
        assert_eq!(inv, Matrix::from_rows([[1, -1], [-1, 2]]));
        assert_eq!(m * inv, Matrix::identity());
        assert_eq!(inv * m, Matrix::identity());
    }

    #[test]
    fn test_inverse_3x3_integer_exact() {
        let m = Matrix::from_rows([[1i64, 2, 3], [0, 1, 4], [5, 6, 0]]);
        assert_eq!(m.determinant(), 1);

        let inv = m.inverse().unwrap();
        assert_eq!(inv, Matrix::from_rows([[-24, 18, 5], [20, -15, -4], [-5, 4, 1]]));
        assert_eq!(m * inv, Matrix::identity());
        assert_eq!(inv * m, Matrix::identity());
    }

    #[test]
    fn test_inverse_3x3_singular() {
        let m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), Err(MatrixError::Singular { dim: 3 }));
    }

    #[test]
    fn test_inverse_4x4_integer_exact() {
        let m = Matrix::from_rows([
            [1i32, 2, 3, 4],
            [0, 1, 5, 6],
            [0, 0, 1, 7],
            [0, 0, 0, 1],
        ]);
        assert_eq!(m.determinant(), 1);

        let inv = inverse(&m).unwrap();
        assert_eq!(m * inv, Matrix::identity());
        assert_eq!(inv * m, Matrix::identity());
    }

    #[test]
    fn test_inverse_4x4_rigid_transform() {
        // rotate 90 degrees about z, then translate by (1, 2, 3)
        let m = Matrix::from_rows([
            [0.0, -1.0, 0.0, 1.0],
            [1.0, 0.0, 0.0, 2.0],
            [0.0, 0.0, 1.0, 3.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let inv = m.inverse().unwrap();
        assert_eq!(
            inv,
            Matrix::from_rows([
                [0.0, 1.0, 0.0, -2.0],
                [-1.0, 0.0, 0.0, 1.0],
                [0.0, 0.0, 1.0, -3.0],
                [0.0, 0.0, 0.0, 1.0],
            ])
        );
    }

    #[test]
    fn test_inverse_4x4_singular() {
        let m = Matrix::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 6.0, 8.0],
            [0.0, 1.0, 0.0, 1.0],
            [1.0, 0.0, 1.0, 0.0],
        ]);
        assert_eq!(m.inverse(), Err(MatrixError::Singular { dim: 4 }));
    }

    #[test]
    fn test_unsupported_sizes() {
        let m = Matrix::<f64, 5, 5>::identity();
        assert_eq!(m.inverse(), Err(MatrixError::Unsupported { dim: 5 }));

        let err = Matrix::<f32, 8, 8>::identity().inverse().unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_determinant_of_identity() {
        assert_eq!(Matrix::<f64, 1, 1>::identity().determinant(), 1.0);
        assert_eq!(Matrix::<f64, 2, 2>::identity().determinant(), 1.0);
        assert_eq!(Matrix::<f64, 3, 3>::identity().determinant(), 1.0);
        assert_eq!(Matrix::<f64, 4, 4>::identity().determinant(), 1.0);
    }
}
