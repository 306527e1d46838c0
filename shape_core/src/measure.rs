//! # Measurements
//!
//! Turns a shape and a requested measurement into a result the driver can
//! print. The boundary length keeps shape-correct terminology: circles report
//! a circumference, every other shape a perimeter.
//!
//! ## Example
//!
//! ```rust
//! use shape_core::measure::{measure, Measurement};
//! use shape_core::shapes::Square;
//!
//! let square = Square::new(5.0).unwrap();
//! let result = measure(&square, Measurement::Area);
//! assert_eq!(result.to_string(), "The area of the shape is: 25.0");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ShapeError;
use crate::shapes::{PerimeterTerm, Shape};

/// Derived value a user can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    Area,
    Perimeter,
}

impl TryFrom<i64> for Measurement {
    type Error = ShapeError;

    /// Menu numbering: 1 = area, 2 = perimeter/circumference.
    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(Measurement::Area),
            2 => Ok(Measurement::Perimeter),
            other => Err(ShapeError::invalid_menu_choice(other)),
        }
    }
}

/// A computed measurement.
///
/// ## JSON Example
///
/// ```json
/// {
///   "shape": "circle",
///   "measurement": "perimeter",
///   "term": "circumference",
///   "value": 12.566370614359172
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementResult {
    pub shape: &'static str,
    pub measurement: Measurement,
    /// Terminology for the boundary length of this shape
    pub term: PerimeterTerm,
    pub value: f64,
}

impl fmt::Display for MeasurementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // {:?} keeps the trailing ".0" on whole numbers
        match (self.measurement, self.term) {
            (Measurement::Area, _) => write!(f, "The area of the shape is: {:?}", self.value),
            (Measurement::Perimeter, PerimeterTerm::Perimeter) => {
                write!(f, "The perimeter of the shape is: {:?}", self.value)
            }
            (Measurement::Perimeter, PerimeterTerm::Circumference) => {
                write!(f, "The circumference of the {} is: {:?}", self.shape, self.value)
            }
        }
    }
}

/// Compute one measurement of a shape.
pub fn measure(shape: &dyn Shape, measurement: Measurement) -> MeasurementResult {
    let value = match measurement {
        Measurement::Area => shape.area(),
        Measurement::Perimeter => shape.perimeter(),
    };
    MeasurementResult {
        shape: shape.name(),
        measurement,
        term: shape.perimeter_term(),
        value,
    }
}
