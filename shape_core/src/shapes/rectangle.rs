//! # Rectangle

use serde::Serialize;

use super::{require_positive, Shape};
use crate::errors::ShapeResult;

/// Rectangle with validated width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Create a rectangle. Width is checked before height.
    pub fn new(width: f64, height: f64) -> ShapeResult<Self> {
        let width = require_positive("width", width)?;
        let height = require_positive("height", height)?;
        Ok(Rectangle { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn name(&self) -> &'static str {
        "rectangle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ShapeError;
    use proptest::prelude::*;

    #[test]
    fn test_rectangle() {
        let rect = Rectangle::new(3.0, 4.5).unwrap();
        assert_eq!(rect.area(), 13.5);
        assert_eq!(rect.perimeter(), 15.0);
    }

    #[test]
    fn test_reports_first_invalid_field() {
        assert_eq!(
            Rectangle::new(-1.0, -2.0),
            Err(ShapeError::invalid_dimension("width", -1.0))
        );
        assert_eq!(
            Rectangle::new(1.0, 0.0),
            Err(ShapeError::invalid_dimension("height", 0.0))
        );
    }

    proptest! {
        #[test]
        fn area_is_width_times_height(width in 1e-6f64..1e6, height in 1e-6f64..1e6) {
            let rect = Rectangle::new(width, height).unwrap();
            prop_assert_eq!(rect.area(), width * height);
            prop_assert_eq!(rect.perimeter(), 2.0 * (width + height));
        }
    }
}
