use super::error::*;

use std::fmt;

/// Floating point values at or above this cannot be stored in an i64 (this is 2^63)
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

///
/// A point on the integer grid that line segments are rasterized onto
///
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    ///
    /// Creates a new point
    ///
    #[inline]
    pub const fn new(x: i64, y: i64) -> Point {
        Point { x, y }
    }

    ///
    /// Creates a point from floating point coordinates
    ///
    /// The coordinates must be finite whole numbers that fit in an i64: anything else is rejected rather than truncated.
    ///
    pub fn try_from_f64(x: f64, y: f64) -> Result<Point, CanvasError> {
        Ok(Point {
            x: integer_coordinate(x)?,
            y: integer_coordinate(y)?,
        })
    }
}

///
/// Converts a floating point coordinate to an integer, failing if it would lose information
///
fn integer_coordinate(value: f64) -> Result<i64, CanvasError> {
    if !value.is_finite() {
        Err(CanvasError::InvalidSegment(format!("coordinate {} is not finite", value)))
    } else if value.fract() != 0.0 {
        Err(CanvasError::InvalidSegment(format!("coordinate {} is not a whole number", value)))
    } else if value < -I64_LIMIT || value >= I64_LIMIT {
        Err(CanvasError::InvalidSegment(format!("coordinate {} is out of range", value)))
    } else {
        Ok(value as i64)
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((x, y): (i64, i64)) -> Point {
        Point { x, y }
    }
}

impl From<Point> for (i64, i64) {
    #[inline]
    fn from(point: Point) -> (i64, i64) {
        (point.x, point.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
