//! # Triangles
//!
//! Three triangle variants share one validation routine and one perimeter
//! formula. Each variant keeps its own area formula:
//!
//! | Variant     | Parameters          | Area                          |
//! |-------------|---------------------|-------------------------------|
//! | Equilateral | side                | (√3/4)·side²                  |
//! | Isosceles   | equal side, base    | base·√(equal² − base²/4) / 2  |
//! | Scalene     | a, b, c             | Heron's formula               |
//!
//! Equilateral and isosceles areas never fall back to Heron's formula.
//!
//! ## Validation Order
//!
//! 1. Every side must be strictly positive (`InvalidDimension`)
//! 2. Every side must be strictly shorter than the sum of the other two
//!    (`InvalidTriangle`)
//! 3. Isosceles only: twice the equal side must exceed the base
//!    (`InvalidTriangle`)
//!
//! ## Example
//!
//! ```rust
//! use shape_core::shapes::{Shape, Triangle};
//!
//! let triangle = Triangle::scalene(3.0, 4.0, 5.0).unwrap();
//! assert_eq!(triangle.area(), 6.0);
//! assert_eq!(triangle.perimeter(), 12.0);
//!
//! assert!(Triangle::scalene(1.0, 1.0, 5.0).is_err());
//! ```

use serde::Serialize;

use super::{require_positive, Shape};
use crate::errors::{ShapeError, ShapeResult};

/// The variant of a triangle, carrying only the parameters it needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum TriangleKind {
    Equilateral { side: f64 },
    Isosceles { equal_side: f64, base: f64 },
    Scalene { a: f64, b: f64, c: f64 },
}

impl TriangleKind {
    /// Side lengths in (a, b, c) order. Isosceles reports (equal, equal, base).
    pub fn sides(&self) -> [f64; 3] {
        match *self {
            TriangleKind::Equilateral { side } => [side, side, side],
            TriangleKind::Isosceles { equal_side, base } => [equal_side, equal_side, base],
            TriangleKind::Scalene { a, b, c } => [a, b, c],
        }
    }
}

/// A validated triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Triangle {
    kind: TriangleKind,
}

impl Triangle {
    /// Equilateral triangle with three sides of length `side`.
    pub fn equilateral(side: f64) -> ShapeResult<Self> {
        require_positive("side", side)?;
        Self::validated(TriangleKind::Equilateral { side })
    }

    /// Isosceles triangle with two sides of `equal_side` and a `base`.
    pub fn isosceles(equal_side: f64, base: f64) -> ShapeResult<Self> {
        require_positive("equal side", equal_side)?;
        require_positive("base", base)?;
        let triangle = Self::validated(TriangleKind::Isosceles { equal_side, base })?;

        if 2.0 * equal_side <= base {
            tracing::debug!(equal_side, base, "rejected isosceles triangle");
            return Err(ShapeError::invalid_triangle(
                triangle.sides(),
                "twice the equal side must exceed the base",
            ));
        }
        Ok(triangle)
    }

    /// Scalene triangle from three independent sides.
    pub fn scalene(a: f64, b: f64, c: f64) -> ShapeResult<Self> {
        Self::validated(TriangleKind::Scalene { a, b, c })
    }

    fn validated(kind: TriangleKind) -> ShapeResult<Self> {
        validate_sides(kind.sides())?;
        Ok(Triangle { kind })
    }

    pub fn kind(&self) -> TriangleKind {
        self.kind
    }

    pub fn sides(&self) -> [f64; 3] {
        self.kind.sides()
    }
}

/// Shared check applied to every variant before it is constructed.
pub fn validate_sides(sides: [f64; 3]) -> ShapeResult<()> {
    const NAMES: [&str; 3] = ["side a", "side b", "side c"];

    for (name, &side) in NAMES.iter().zip(sides.iter()) {
        require_positive(name, side)?;
    }

    let [a, b, c] = sides;
    let pairings = [(a, b + c, NAMES[0]), (b, a + c, NAMES[1]), (c, a + b, NAMES[2])];
    for (side, others, name) in pairings {
        if side >= others {
            tracing::debug!(?sides, "rejected triangle inequality");
            return Err(ShapeError::invalid_triangle(
                sides,
                format!("{name} is not shorter than the other two combined"),
            ));
        }
    }
    Ok(())
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        match self.kind {
            TriangleKind::Equilateral { side } => (3.0_f64.sqrt() / 4.0) * side * side,
            TriangleKind::Isosceles { equal_side, base } => {
                let height = (equal_side * equal_side - (base * base) / 4.0).sqrt();
                (base * height) / 2.0
            }
            TriangleKind::Scalene { a, b, c } => {
                let s = (a + b + c) / 2.0;
                (s * (s - a) * (s - b) * (s - c)).sqrt()
            }
        }
    }

    fn perimeter(&self) -> f64 {
        self.sides().iter().sum()
    }

    fn name(&self) -> &'static str {
        match self.kind {
            TriangleKind::Equilateral { .. } => "equilateral triangle",
            TriangleKind::Isosceles { .. } => "isosceles triangle",
            TriangleKind::Scalene { .. } => "scalene triangle",
        }
    }
}
