use flo_line_canvas::*;

///
/// The extent of a segment, normalized so that the order of its endpoints doesn't matter
///
/// Segments with the same bounding key cover the same points (when they can be rasterized at all), so this is used
/// as the key for the raster cache.
///
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BoundingKey {
    pub left:   i64,
    pub right:  i64,
    pub top:    i64,
    pub bottom: i64,
}

impl BoundingKey {
    ///
    /// Computes the bounding key for a segment
    ///
    #[inline]
    pub fn from_segment(segment: &Segment) -> BoundingKey {
        let Segment { start, end } = *segment;

        BoundingKey {
            left:   start.x.min(end.x),
            right:  start.x.max(end.x),
            top:    start.y.min(end.y),
            bottom: start.y.max(end.y),
        }
    }

    /// True if the key describes a single column of points
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.right == self.left
    }

    /// True if the key describes a single row of points
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.bottom == self.top
    }
}

impl From<&Segment> for BoundingKey {
    #[inline]
    fn from(segment: &Segment) -> BoundingKey {
        BoundingKey::from_segment(segment)
    }
}

impl From<Segment> for BoundingKey {
    #[inline]
    fn from(segment: Segment) -> BoundingKey {
        BoundingKey::from_segment(&segment)
    }
}
