//! # Square
//!
//! ## Example
//!
//! ```rust
//! use shape_core::shapes::{Shape, Square};
//!
//! let square = Square::new(5.0).unwrap();
//! assert_eq!(square.area(), 25.0);
//! assert_eq!(square.perimeter(), 20.0);
//! ```

use serde::Serialize;

use super::{require_positive, Shape};
use crate::errors::ShapeResult;

/// Square with a validated side length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Square {
    side: f64,
}

impl Square {
    /// Create a square. Fails with `InvalidDimension` unless `side > 0`.
    pub fn new(side: f64) -> ShapeResult<Self> {
        let side = require_positive("side", side)?;
        Ok(Square { side })
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn perimeter(&self) -> f64 {
        4.0 * self.side
    }

    fn name(&self) -> &'static str {
        "square"
    }
}
