use super::point::*;
use super::error::*;

use std::fmt;

///
/// A line segment between two points
///
/// Only segments that are horizontal, vertical or degenerate (both ends at the same point) can be rasterized: diagonal
/// segments can still be described but produce no points.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Segment {
    pub start:  Point,
    pub end:    Point,
}

impl Segment {
    ///
    /// Creates a segment between two points
    ///
    #[inline]
    pub const fn new(start: Point, end: Point) -> Segment {
        Segment { start, end }
    }

    ///
    /// Creates a segment from floating point coordinates, failing if any of them are not whole numbers
    ///
    pub fn try_from_f64(start: (f64, f64), end: (f64, f64)) -> Result<Segment, CanvasError> {
        Ok(Segment {
            start:  Point::try_from_f64(start.0, start.1)?,
            end:    Point::try_from_f64(end.0, end.1)?,
        })
    }

    ///
    /// Returns the same segment, drawn in the opposite direction
    ///
    #[inline]
    pub fn reversed(&self) -> Segment {
        Segment { start: self.end, end: self.start }
    }

    /// True if both ends of this segment are at the same point
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// True if this segment has no horizontal extent
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// True if this segment has no vertical extent
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    ///
    /// True if this segment can be converted to points (it's horizontal, vertical or degenerate)
    ///
    #[inline]
    pub fn is_axis_aligned(&self) -> bool {
        self.is_vertical() || self.is_horizontal()
    }
}

impl From<(Point, Point)> for Segment {
    #[inline]
    fn from((start, end): (Point, Point)) -> Segment {
        Segment { start, end }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Line({}, {})", self.start, self.end)
    }
}
