// src/numerics/types/error.rs
// Error type for fallible matrix operations.

/// Errors that can occur during matrix construction, reshaping or inversion.
///
/// Variants fall into three kinds: precondition violations (the input had the
/// wrong shape), singular matrices, and inversions requested for a size with
/// no closed-form implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("Element list length mismatch: expected {expected} elements, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("Not a column vector: operation requires 1 column, matrix has {cols}")]
    NotColumnVector { cols: usize },

    #[error("Dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .got.0, .got.1)]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("Singular matrix: {dim}x{dim} determinant is zero")]
    Singular { dim: usize },

    #[error("Inverse not implemented for {dim}x{dim} matrices")]
    Unsupported { dim: usize },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl MatrixError {
    /// True for errors caused by an input of the wrong shape or length.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. } | Self::NotColumnVector { .. } | Self::DimensionMismatch { .. }
        )
    }

    pub fn is_singular(&self) -> bool {
        matches!(self, Self::Singular { .. })
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Result alias used throughout the numerics types.
pub type Result<T, E = MatrixError> = core::result::Result<T, E>;
