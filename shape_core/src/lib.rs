//! # shape_core - Geometric Shape Model
//!
//! `shape_core` holds the shapes behind the interactive calculator: squares,
//! rectangles, circles and three triangle variants, each reporting its area
//! and perimeter (circumference for circles).
//!
//! ## Design Philosophy
//!
//! - **Validated on construction**: every constructor returns a `ShapeResult`,
//!   so an existing shape is always a valid one
//! - **Immutable**: parameters never change after construction
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use shape_core::shapes::{Shape, Triangle};
//! use shape_core::ShapeError;
//!
//! let triangle = Triangle::scalene(3.0, 4.0, 5.0).unwrap();
//! assert_eq!(triangle.area(), 6.0);
//!
//! let err = Triangle::scalene(1.0, 1.0, 5.0).unwrap_err();
//! assert_eq!(err.error_code(), "INVALID_TRIANGLE");
//! ```
//!
//! ## Modules
//!
//! - [`shapes`] - The `Shape` trait and all concrete shapes
//! - [`measure`] - Area/perimeter requests and their printable results
//! - [`errors`] - Structured error types

pub mod errors;
pub mod measure;
pub mod shapes;

// Re-export commonly used types at crate root for convenience
pub use errors::{ShapeError, ShapeResult};
pub use measure::{measure, Measurement, MeasurementResult};
pub use shapes::{Circle, PerimeterTerm, Rectangle, Shape, ShapeKind, Square, Triangle, TriangleKind};
