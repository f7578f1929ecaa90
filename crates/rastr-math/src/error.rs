//! Error types for vector operations.
//!
//! Almost every operation in this crate is total: degenerate inputs such as
//! zero-length vectors are handled by returning a zero vector or a zero angle.
//! The one hard failure is division by a scalar whose magnitude is below
//! [`EPSILON`](crate::EPSILON).
//!
//! # Usage
//!
//! ```rust
//! use rastr_math::{MathError, Vec3};
//!
//! let v = Vec3::new(1.0, 2.0, 3.0);
//! let err = v.checked_div(1e-10).unwrap_err();
//! assert!(err.is_division_by_zero());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::Vec2`], [`crate::Vec3`], [`crate::Vec4`] - scalar division
//! - `rastr-color` - wrapped by `ColorError`

use thiserror::Error;

/// Result type alias using [`MathError`] as the error type.
pub type MathResult<T> = std::result::Result<T, MathError>;

/// Errors that can occur during vector arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// Scalar divisor is zero or too close to zero to divide by.
    ///
    /// Returned instead of producing infinite or NaN components.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rastr_math::MathError;
    ///
    /// let err = MathError::division_by_zero(1e-10);
    /// assert!(err.to_string().contains("division"));
    /// ```
    #[error("division by near-zero scalar {divisor:e}")]
    DivisionByZero {
        /// The rejected divisor
        divisor: f32,
    },
}

impl MathError {
    /// Creates a [`MathError::DivisionByZero`] error.
    #[inline]
    pub fn division_by_zero(divisor: f32) -> Self {
        Self::DivisionByZero { divisor }
    }

    /// Returns `true` if this is a division-by-zero error.
    #[inline]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }
}

/// Checks a scalar divisor, returning it unchanged when it is safe to divide by.
#[inline]
pub(crate) fn check_divisor(divisor: f32) -> MathResult<f32> {
    if divisor.abs() < crate::EPSILON || divisor.is_nan() {
        Err(MathError::division_by_zero(divisor))
    } else {
        Ok(divisor)
    }
}
