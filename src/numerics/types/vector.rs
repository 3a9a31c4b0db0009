// src/numerics/types/vector.rs
// Vector2d: named x/y accessors over a 2x1 f64 matrix.

use core::ops::{Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use super::matrix::Matrix;

/// Vector2d is a 2D column vector of `f64`.
///
/// It wraps a `Matrix<f64, 2, 1>` and adds no storage of its own: `x()` and
/// `y()` are the matrix's elements 0 and 1. Every matrix method is reachable
/// through `Deref`, and the two convert into each other freely.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector2d(pub Matrix<f64, 2, 1>);

impl Vector2d {
    /// Construct a new Vector2d
    pub fn new(x: f64, y: f64) -> Self {
        Self(Matrix::from_columns([[x, y]]))
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn x_mut(&mut self) -> &mut f64 {
        &mut self.0[0]
    }

    pub fn y_mut(&mut self) -> &mut f64 {
        &mut self.0[1]
    }

    /// Unwrap into the underlying matrix.
    pub fn into_matrix(self) -> Matrix<f64, 2, 1> {
        self.0
    }
}

impl Deref for Vector2d {
    type Target = Matrix<f64, 2, 1>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Vector2d {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl core::fmt::Display for Vector2d {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

// Conversions between Vector2d and the 2x1 matrix

impl From<Matrix<f64, 2, 1>> for Vector2d {
    fn from(mat: Matrix<f64, 2, 1>) -> Self {
        Self(mat)
    }
}

impl From<Vector2d> for Matrix<f64, 2, 1> {
    fn from(v: Vector2d) -> Self {
        v.0
    }
}

// Conversions between Vector2d and tuples / arrays

impl From<(f64, f64)> for Vector2d {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2d {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2d> for (f64, f64) {
    fn from(v: Vector2d) -> Self {
        (v.x(), v.y())
    }
}

impl From<Vector2d> for [f64; 2] {
    fn from(v: Vector2d) -> Self {
        [v.x(), v.y()]
    }
}

// Arithmetic forwards to the matrix operators

impl Add for Vector2d {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Vector2d {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Mul<f64> for Vector2d {
    type Output = Self;

    fn mul(self, value: f64) -> Self {
        Self(self.0 * value)
    }
}

impl Mul<Vector2d> for f64 {
    type Output = Vector2d;

    fn mul(self, v: Vector2d) -> Vector2d {
        v * self
    }
}

impl Div<f64> for Vector2d {
    type Output = Self;

    fn div(self, value: f64) -> Self {
        Self(self.0 / value)
    }
}

impl Neg for Vector2d {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// A 2x2 transform applied to the vector.
impl Mul<Vector2d> for Matrix<f64, 2, 2> {
    type Output = Vector2d;

    fn mul(self, v: Vector2d) -> Vector2d {
        Vector2d(self * v.0)
    }
}

impl AddAssign for Vector2d {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl SubAssign for Vector2d {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl MulAssign<f64> for Vector2d {
    fn mul_assign(&mut self, value: f64) {
        self.0 *= value;
    }
}

impl DivAssign<f64> for Vector2d {
    fn div_assign(&mut self, value: f64) {
        self.0 /= value;
    }
}
