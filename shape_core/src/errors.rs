//! # Error Types
//!
//! Structured error types for shape_core. Every failure a calculation session
//! can hit maps onto one variant, and every variant renders as a single line
//! that can be shown to the user as-is.
//!
//! ## Example
//!
//! ```rust
//! use shape_core::errors::{ShapeError, ShapeResult};
//!
//! fn validate_side(side: f64) -> ShapeResult<f64> {
//!     if !(side > 0.0) {
//!         return Err(ShapeError::invalid_dimension("side", side));
//!     }
//!     Ok(side)
//! }
//!
//! assert!(validate_side(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for shape_core operations
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Structured error type for shape construction and menu handling.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ShapeError {
    /// A length parameter is not strictly positive
    #[error("Invalid {field}: must be greater than zero (got {value})")]
    InvalidDimension { field: String, value: f64 },

    /// Three lengths cannot form the requested triangle
    #[error("These sides do not form a valid triangle: {}, {}, {} ({reason})", .sides[0], .sides[1], .sides[2])]
    InvalidTriangle { sides: [f64; 3], reason: String },

    /// A menu selection outside the recognized set
    #[error("Invalid choice, please try again.")]
    InvalidMenuChoice { choice: i64 },

    /// Text where a number was expected
    #[error("An error occurred: expected a number, got '{input}'")]
    MalformedInput { input: String },
}

impl ShapeError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(field: impl Into<String>, value: f64) -> Self {
        ShapeError::InvalidDimension {
            field: field.into(),
            value,
        }
    }

    /// Create an InvalidTriangle error
    pub fn invalid_triangle(sides: [f64; 3], reason: impl Into<String>) -> Self {
        ShapeError::InvalidTriangle {
            sides,
            reason: reason.into(),
        }
    }

    /// Create an InvalidMenuChoice error
    pub fn invalid_menu_choice(choice: i64) -> Self {
        ShapeError::InvalidMenuChoice { choice }
    }

    /// Create a MalformedInput error
    pub fn malformed_input(input: impl Into<String>) -> Self {
        ShapeError::MalformedInput {
            input: input.into(),
        }
    }

    /// True for errors raised while validating shape parameters
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ShapeError::InvalidDimension { .. } | ShapeError::InvalidTriangle { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ShapeError::InvalidDimension { .. } => "INVALID_DIMENSION",
            ShapeError::InvalidTriangle { .. } => "INVALID_TRIANGLE",
            ShapeError::InvalidMenuChoice { .. } => "INVALID_MENU_CHOICE",
            ShapeError::MalformedInput { .. } => "MALFORMED_INPUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ShapeError::invalid_triangle([1.0, 1.0, 5.0], "side c is too long");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ShapeError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ShapeError::invalid_dimension("side", 0.0).error_code(), "INVALID_DIMENSION");
        assert_eq!(ShapeError::invalid_menu_choice(7).error_code(), "INVALID_MENU_CHOICE");
        assert_eq!(ShapeError::malformed_input("abc").error_code(), "MALFORMED_INPUT");
    }

    #[test]
    fn test_messages_are_single_lines() {
        let errors = [
            ShapeError::invalid_dimension("radius", -2.0),
            ShapeError::invalid_triangle([1.0, 1.0, 5.0], "side c is too long"),
            ShapeError::invalid_menu_choice(9),
            ShapeError::malformed_input("five"),
        ];
        for error in errors {
            assert!(!error.to_string().contains('\n'));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ShapeError::invalid_dimension("radius", -2.0).to_string(),
            "Invalid radius: must be greater than zero (got -2)"
        );
        assert_eq!(
            ShapeError::invalid_menu_choice(9).to_string(),
            "Invalid choice, please try again."
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(ShapeError::invalid_dimension("side", 0.0).is_validation());
        assert!(!ShapeError::malformed_input("x").is_validation());
    }
}
