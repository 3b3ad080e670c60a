use super::point::*;
use super::segment::*;
use super::error::*;

use smallvec::*;

///
/// A shape is anything that can be described as an ordered list of line segments
///
pub trait Shape {
    ///
    /// Returns the segments that make up the outline of this shape, in drawing order
    ///
    fn segments(&self) -> Result<SmallVec<[Segment; 4]>, CanvasError>;
}

///
/// An axis-aligned rectangle, described by its top-left corner and its size
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Rectangle {
    pub x:      i64,
    pub y:      i64,
    pub width:  i64,
    pub height: i64,
}

impl Rectangle {
    ///
    /// Creates a new rectangle
    ///
    #[inline]
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Rectangle {
        Rectangle { x, y, width, height }
    }
}

impl Shape for Rectangle {
    ///
    /// The edges of a rectangle are generated clockwise from the top-left corner: top, right, bottom, then left
    ///
    fn segments(&self) -> Result<SmallVec<[Segment; 4]>, CanvasError> {
        let overflow    = || CanvasError::InvalidSegment(format!("edges of {:?} are outside of the coordinate space", self));
        let x1          = self.x;
        let y1          = self.y;
        let x2          = x1.checked_add(self.width).ok_or_else(overflow)?;
        let y2          = y1.checked_add(self.height).ok_or_else(overflow)?;

        Ok(smallvec![
            Segment::new(Point::new(x1, y1), Point::new(x2, y1)),
            Segment::new(Point::new(x2, y1), Point::new(x2, y2)),
            Segment::new(Point::new(x2, y2), Point::new(x1, y2)),
            Segment::new(Point::new(x1, y2), Point::new(x1, y1)),
        ])
    }
}

impl Shape for Segment {
    #[inline]
    fn segments(&self) -> Result<SmallVec<[Segment; 4]>, CanvasError> {
        Ok(smallvec![*self])
    }
}

impl Shape for Vec<Segment> {
    #[inline]
    fn segments(&self) -> Result<SmallVec<[Segment; 4]>, CanvasError> {
        Ok(self.iter().copied().collect())
    }
}

impl<'a, TShape> Shape for &'a TShape
where
    TShape: Shape + ?Sized,
{
    #[inline]
    fn segments(&self) -> Result<SmallVec<[Segment; 4]>, CanvasError> {
        (**self).segments()
    }
}

impl<TShape> Shape for Box<TShape>
where
    TShape: Shape + ?Sized,
{
    #[inline]
    fn segments(&self) -> Result<SmallVec<[Segment; 4]>, CanvasError> {
        (**self).segments()
    }
}
