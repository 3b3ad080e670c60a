use flo_line_canvas::*;

use std::sync::*;

///
/// The result of rasterizing a segment, along with how the rasterizer produced it
///
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RasterizedSegment {
    /// The points covered by the segment, in drawing order (shared with any other request for the same points)
    pub points:     Arc<[Point]>,

    /// True if the points were retrieved from a cache rather than newly generated
    pub was_hit:    bool,

    /// The generation that the points were created in (generations are numbered from 1)
    pub generation: u64,
}

///
/// A segment rasterizer converts line segments into the list of points that they cover
///
pub trait SegmentRasterizer : Send + Sync {
    ///
    /// Rasterizes a segment, reporting whether or not the points were already known
    ///
    /// Fails with `CanvasError::InvalidSegment` if the segment covers too many points to generate.
    ///
    fn rasterize_verbose(&self, segment: &Segment) -> Result<RasterizedSegment, CanvasError>;

    ///
    /// Returns the points covered by a segment
    ///
    /// Horizontal and vertical segments produce every point between their two ends (inclusive). Diagonal segments
    /// are not supported and produce no points.
    ///
    #[inline]
    fn rasterize(&self, segment: &Segment) -> Result<Arc<[Point]>, CanvasError> {
        Ok(self.rasterize_verbose(segment)?.points)
    }
}

impl<'a, TRasterizer> SegmentRasterizer for &'a TRasterizer
where
    TRasterizer: SegmentRasterizer + ?Sized,
{
    #[inline]
    fn rasterize_verbose(&self, segment: &Segment) -> Result<RasterizedSegment, CanvasError> {
        (**self).rasterize_verbose(segment)
    }
}

impl<TRasterizer> SegmentRasterizer for Arc<TRasterizer>
where
    TRasterizer: SegmentRasterizer + ?Sized,
{
    #[inline]
    fn rasterize_verbose(&self, segment: &Segment) -> Result<RasterizedSegment, CanvasError> {
        (**self).rasterize_verbose(segment)
    }
}
