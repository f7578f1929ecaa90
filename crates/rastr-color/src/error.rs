//! Error types for color operations.
//!
//! Color arithmetic inherits the scalar-division failure from `rastr-math`.
//! The color-specific failures come from parsing: a rejected hex string from
//! the strict parser, or an unknown blend mode name.

use rastr_math::MathError;
use thiserror::Error;

/// Color operation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Scalar arithmetic failed (division by a near-zero scalar).
    #[error(transparent)]
    Math(#[from] MathError),

    /// Hex string could not be parsed.
    #[error("invalid hex color {input:?}: {reason}")]
    InvalidHex {
        /// Input as given, including any leading `#`.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Blend mode name not recognized.
    #[error("unknown blend mode {0:?}")]
    UnknownBlendMode(String),
}

impl ColorError {
    /// Creates an [`ColorError::InvalidHex`] error.
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for hex parse failures.
    pub fn is_invalid_hex(&self) -> bool {
        matches!(self, Self::InvalidHex { .. })
    }
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_converts() {
        let err: ColorError = MathError::division_by_zero(0.0).into();
        assert!(matches!(err, ColorError::Math(e) if e.is_division_by_zero()));
    }

    #[test]
    fn test_invalid_hex_message() {
        let err = ColorError::invalid_hex("#12", "expected 3, 6 or 8 hex digits, got 2");
        assert!(err.is_invalid_hex());
        assert_eq!(
            err.to_string(),
            "invalid hex color \"#12\": expected 3, 6 or 8 hex digits, got 2"
        );
    }
}
