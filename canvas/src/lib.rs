//!
//! # flo_line_canvas
//!
//! `flo_line_canvas` describes the primitives that `flo_line_raster` converts into points: integer `Point`s,
//! `Segment`s between two points, and `Shape`s such as `Rectangle` that can be broken down into a list of
//! segments.
//!
//! Segments can be created from floating point coordinates with `Segment::try_from_f64()`, which will report
//! a `CanvasError::InvalidSegment` rather than rounding any coordinate that is not a whole number.
//!
//! All of the primitives can be serialized with `serde`, so a set of shapes can be loaded from a description
//! file before being drawn.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod error;
mod point;
mod segment;
mod shape;

pub use self::error::*;
pub use self::point::*;
pub use self::segment::*;
pub use self::shape::*;
