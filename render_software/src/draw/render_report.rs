use crate::raster::*;

///
/// Describes the work that was done while drawing a set of shapes
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RenderReport {
    /// Shapes whose points were all sent to the target
    pub shapes_drawn:   usize,

    /// Shapes that could not be converted into segments and were left out of the drawing
    pub shapes_skipped: usize,

    /// Segments that were rasterized
    pub segments:       usize,

    /// Points that were sent to the draw target
    pub points:         usize,

    /// Segments whose points were retrieved from a cache
    pub cache_hits:     usize,

    /// Segments whose points had to be generated
    pub cache_misses:   usize,
}

impl RenderReport {
    ///
    /// Updates this report with the results of rasterizing a segment
    ///
    #[inline]
    pub fn add_segment(&mut self, rasterized: &RasterizedSegment) {
        self.segments   += 1;
        self.points     += rasterized.points.len();

        if rasterized.was_hit {
            self.cache_hits += 1;
        } else {
            self.cache_misses += 1;
        }
    }
}
