//! # Shapes
//!
//! Every shape follows the same pattern:
//!
//! - a fallible constructor that validates all lengths up front
//! - private, immutable fields behind read accessors
//! - an implementation of [`Shape`] computing derived values on demand
//!
//! ## Available Shapes
//!
//! - [`square`] - Square from one side
//! - [`rectangle`] - Rectangle from width and height
//! - [`circle`] - Circle from radius (reports circumference)
//! - [`triangle`] - Equilateral, isosceles and scalene triangles

pub mod circle;
pub mod rectangle;
pub mod square;
pub mod triangle;

use serde::{Deserialize, Serialize};

use crate::errors::{ShapeError, ShapeResult};

// Re-export commonly used types
pub use circle::Circle;
pub use rectangle::Rectangle;
pub use square::Square;
pub use triangle::{Triangle, TriangleKind};

/// Capability shared by all geometric shapes.
///
/// Both measurements are pure functions of construction-time state.
pub trait Shape {
    /// Enclosed area
    fn area(&self) -> f64;

    /// Length of the boundary
    fn perimeter(&self) -> f64;

    /// Human-readable shape name (e.g., "square", "isosceles triangle")
    fn name(&self) -> &'static str;

    /// Word used for the boundary length of this shape
    fn perimeter_term(&self) -> PerimeterTerm {
        PerimeterTerm::Perimeter
    }
}

/// Terminology for the boundary length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerimeterTerm {
    Perimeter,
    Circumference,
}

impl PerimeterTerm {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerimeterTerm::Perimeter => "Perimeter",
            PerimeterTerm::Circumference => "Circumference",
        }
    }
}

/// Enum wrapper for all shape types.
///
/// The driver builds one of these per request so it can hand any shape to
/// the same calculation code. Serialize-only: shapes are created through
/// their validating constructors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ShapeKind {
    Square(Square),
    Rectangle(Rectangle),
    Circle(Circle),
    Triangle(Triangle),
}

impl ShapeKind {
    fn as_shape(&self) -> &dyn Shape {
        match self {
            ShapeKind::Square(s) => s,
            ShapeKind::Rectangle(r) => r,
            ShapeKind::Circle(c) => c,
            ShapeKind::Triangle(t) => t,
        }
    }
}

impl Shape for ShapeKind {
    fn area(&self) -> f64 {
        self.as_shape().area()
    }

    fn perimeter(&self) -> f64 {
        self.as_shape().perimeter()
    }

    fn name(&self) -> &'static str {
        self.as_shape().name()
    }

    fn perimeter_term(&self) -> PerimeterTerm {
        self.as_shape().perimeter_term()
    }
}

impl From<Square> for ShapeKind {
    fn from(s: Square) -> Self {
        ShapeKind::Square(s)
    }
}

impl From<Rectangle> for ShapeKind {
    fn from(r: Rectangle) -> Self {
        ShapeKind::Rectangle(r)
    }
}

impl From<Circle> for ShapeKind {
    fn from(c: Circle) -> Self {
        ShapeKind::Circle(c)
    }
}

impl From<Triangle> for ShapeKind {
    fn from(t: Triangle) -> Self {
        ShapeKind::Triangle(t)
    }
}

/// Reject lengths that are not strictly positive. NaN is rejected too.
pub(crate) fn require_positive(field: &str, value: f64) -> ShapeResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        tracing::debug!(field, value, "rejected non-positive dimension");
        Err(ShapeError::invalid_dimension(field, value))
    }
}
