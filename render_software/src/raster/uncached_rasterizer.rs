use super::segment_points::*;
use super::rasterizer_trait::*;

use flo_line_canvas::*;

use std::sync::*;
use std::sync::atomic::{AtomicU64, Ordering};

///
/// Rasterizes segments without remembering the results
///
/// Every request generates a new set of points and is assigned a new generation number. This gives the same points as
/// the `RasterCache`, so it can be used where segments are rarely repeated, or to measure how much work a cache saves.
///
pub struct UncachedRasterizer {
    /// The most recently allocated generation
    generation: AtomicU64,

    /// Segments covering more than this many points are rejected
    max_segment_points: u64,
}

impl UncachedRasterizer {
    ///
    /// Creates a new uncached rasterizer
    ///
    pub fn new() -> UncachedRasterizer {
        UncachedRasterizer::with_max_segment_points(DEFAULT_MAX_SEGMENT_POINTS)
    }

    ///
    /// Creates an uncached rasterizer that rejects segments that cover more than `max_segment_points` points
    ///
    pub fn with_max_segment_points(max_segment_points: u64) -> UncachedRasterizer {
        UncachedRasterizer {
            generation: AtomicU64::new(0),
            max_segment_points,
        }
    }

    ///
    /// Returns the number of segments that have been rasterized so far
    ///
    pub fn generation_count(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }
}

impl Default for UncachedRasterizer {
    fn default() -> Self {
        UncachedRasterizer::new()
    }
}

impl SegmentRasterizer for UncachedRasterizer {
    fn rasterize_verbose(&self, segment: &Segment) -> Result<RasterizedSegment, CanvasError> {
        check_point_count(segment, self.max_segment_points)?;

        let points      = segment_points(segment).collect::<Arc<[Point]>>();
        let generation  = self.generation.fetch_add(1, Ordering::Relaxed) + 1;

        log::debug!("{}: Generating points for line", generation);

        Ok(RasterizedSegment {
            points,
            was_hit:    false,
            generation,
        })
    }
}
