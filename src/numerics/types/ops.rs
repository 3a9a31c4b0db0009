// src/numerics/types/ops.rs
// Arithmetic operators for Matrix. Every binary operator has an owned and a
// borrowed form; the borrowed form does the work.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::matrix::Matrix;
use super::traits::Scalar;

// Element-wise matrix +/- matrix

macro_rules! impl_elementwise {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<T: Scalar, const R: usize, const C: usize> $OpAssign<&Matrix<T, R, C>> for Matrix<T, R, C> {
            fn $op_assign(&mut self, rhs: &Matrix<T, R, C>) {
                for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
                    *a = *a $sym b;
                }
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $OpAssign for Matrix<T, R, C> {
            fn $op_assign(&mut self, rhs: Matrix<T, R, C>) {
                self.$op_assign(&rhs);
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&Matrix<T, R, C>> for &Matrix<T, R, C> {
            type Output = Matrix<T, R, C>;

            fn $op(self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                let mut res = *self;
                res.$op_assign(rhs);
                res
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<Matrix<T, R, C>> for &Matrix<T, R, C> {
            type Output = Matrix<T, R, C>;

            fn $op(self, rhs: Matrix<T, R, C>) -> Matrix<T, R, C> {
                self.$op(&rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&Matrix<T, R, C>> for Matrix<T, R, C> {
            type Output = Self;

            fn $op(mut self, rhs: &Matrix<T, R, C>) -> Self {
                self.$op_assign(rhs);
                self
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op for Matrix<T, R, C> {
            type Output = Self;

            fn $op(mut self, rhs: Self) -> Self {
                self.$op_assign(&rhs);
                self
            }
        }
    };
}

impl_elementwise!(Add, add, AddAssign, add_assign, +);
impl_elementwise!(Sub, sub, SubAssign, sub_assign, -);

// Element-wise matrix * scalar, matrix / scalar

macro_rules! impl_scalar_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<T: Scalar, const R: usize, const C: usize> $OpAssign<T> for Matrix<T, R, C> {
            fn $op_assign(&mut self, value: T) {
                for a in self.as_mut_slice() {
                    *a = *a $sym value;
                }
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<T> for &Matrix<T, R, C> {
            type Output = Matrix<T, R, C>;

            fn $op(self, value: T) -> Matrix<T, R, C> {
                let mut res = *self;
                res.$op_assign(value);
                res
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<T> for Matrix<T, R, C> {
            type Output = Self;

            fn $op(mut self, value: T) -> Self {
                self.$op_assign(value);
                self
            }
        }
    };
}

impl_scalar_op!(Mul, mul, MulAssign, mul_assign, *);
impl_scalar_op!(Div, div, DivAssign, div_assign, /);

// scalar * matrix for the float types
macro_rules! impl_left_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    rhs * self
                }
            }
        )*
    };
}

impl_left_scalar_mul!(f32, f64);

// Matrix product: (R x C) * (C x N) -> (R x N)

impl<T: Scalar, const R: usize, const C: usize, const N: usize> Mul<&Matrix<T, C, N>> for &Matrix<T, R, C> {
    type Output = Matrix<T, R, N>;

    fn mul(self, rhs: &Matrix<T, C, N>) -> Matrix<T, R, N> {
        let mut res = Matrix::<T, R, N>::zeros();
        for i in 0..R {
            for j in 0..N {
                let mut acc = T::zero();
                for k in 0..C {
                    acc = acc + self.data[k][i] * rhs.data[j][k];
                }
                res.data[j][i] = acc;
            }
        }
        res
    }
}

impl<T: Scalar, const R: usize, const C: usize, const N: usize> Mul<Matrix<T, C, N>> for Matrix<T, R, C> {
    type Output = Matrix<T, R, N>;

    fn mul(self, rhs: Matrix<T, C, N>) -> Matrix<T, R, N> {
        &self * &rhs
    }
}

impl<T: Scalar, const R: usize, const C: usize, const N: usize> Mul<&Matrix<T, C, N>> for Matrix<T, R, C> {
    type Output = Matrix<T, R, N>;

    fn mul(self, rhs: &Matrix<T, C, N>) -> Matrix<T, R, N> {
        &self * rhs
    }
}

impl<T: Scalar, const R: usize, const C: usize, const N: usize> Mul<Matrix<T, C, N>> for &Matrix<T, R, C> {
    type Output = Matrix<T, R, N>;

    fn mul(self, rhs: Matrix<T, C, N>) -> Matrix<T, R, N> {
        self * &rhs
    }
}

/// In-place product; only defined when the result keeps this matrix's shape.
impl<T: Scalar, const R: usize, const C: usize> MulAssign<&Matrix<T, C, C>> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: &Matrix<T, C, C>) {
        *self = &*self * rhs;
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = &*self * &rhs;
    }
}

impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl<T, const R: usize, const C: usize> Neg for &Matrix<T, R, C>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Matrix<T, R, C>;

    fn neg(self) -> Matrix<T, R, C> {
        self.map(|v| -v)
    }
}
