//! # Circle
//!
//! A circle's boundary length is reported as its circumference. The value
//! comes from the single [`Shape::perimeter`] formula; [`Circle::circumference`]
//! is the circle-specific name for it.
//!
//! ## Example
//!
//! ```rust
//! use shape_core::shapes::{Circle, Shape};
//!
//! let circle = Circle::new(2.0).unwrap();
//! assert!((circle.area() - 12.566).abs() < 0.001);
//! assert_eq!(circle.circumference(), circle.perimeter());
//! ```

use std::f64::consts::PI;

use serde::Serialize;

use super::{require_positive, PerimeterTerm, Shape};
use crate::errors::ShapeResult;

/// Circle with a validated radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Create a circle. Fails with `InvalidDimension` unless `radius > 0`.
    pub fn new(radius: f64) -> ShapeResult<Self> {
        let radius = require_positive("radius", radius)?;
        Ok(Circle { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Circumference 2πr, same value as `perimeter()`
    pub fn circumference(&self) -> f64 {
        self.perimeter()
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn name(&self) -> &'static str {
        "circle"
    }

    fn perimeter_term(&self) -> PerimeterTerm {
        PerimeterTerm::Circumference
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ShapeError;
    use proptest::prelude::*;

    #[test]
    fn test_circle() {
        let circle = Circle::new(2.0).unwrap();
        // A = π(2)² = 4π, C = 2π(2) = 4π
        assert!((circle.area() - 12.566).abs() < 0.001);
        assert!((circle.circumference() - 12.566).abs() < 0.001);
    }

    #[test]
    fn test_unit_circle() {
        let circle = Circle::new(1.0).unwrap();
        assert_eq!(circle.area(), PI);
        assert_eq!(circle.perimeter(), 2.0 * PI);
    }

    #[test]
    fn test_invalid_radius() {
        assert_eq!(Circle::new(-2.0), Err(ShapeError::invalid_dimension("radius", -2.0)));
        assert!(Circle::new(f64::NAN).is_err());
    }

    proptest! {
        #[test]
        fn circumference_is_perimeter(radius in 1e-6f64..1e6) {
            let circle = Circle::new(radius).unwrap();
            prop_assert_eq!(circle.circumference(), circle.perimeter());
        }
    }
}
