//! # smallmat - Fixed-Size Dense Matrices
//!
//! `Matrix<T, ROWS, COLS>` is a value type whose shape is part of its type.
//! Elements live inline in column-major order; every text form reads and
//! writes them row-major. Square matrices up to 4x4 invert in closed form.
//!
//! ## Quick Start
//!
//! ```rust
//! use smallmat::{Matrix, MatrixError, Vector2d};
//!
//! # fn main() -> Result<(), MatrixError> {
//! // Row-major list, the way the matrix reads on paper
//! let m = Matrix::<f64, 2, 2>::from_row_major(&[4.0, 7.0, 2.0, 6.0])?;
//!
//! let inv = m.inverse()?;
//! assert!((m * inv - Matrix::identity()).norm() < 1e-12);
//!
//! // Homogeneous lift and perspective divide
//! let p = Vector2d::new(3.0, 4.0);
//! let h = p.extend::<3>()? * 2.0;
//! assert_eq!(Vector2d::from(h.project::<2>()?), p);
//!
//! println!("{}", m);
//! # Ok(())
//! # }
//! ```

pub mod numerics;

// Re-export commonly used types for convenience
pub use numerics::types::error::{MatrixError, Result};
pub use numerics::types::inverse::{inverse, Determinant, Invert};
pub use numerics::types::matrix::Matrix;
pub use numerics::types::traits::{FloatingPoint, Scalar};
pub use numerics::types::vector::Vector2d;

/// Version information for the smallmat crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
