use super::draw_target::*;
use super::render_report::*;
use crate::raster::*;

use flo_line_canvas::*;
use smallvec::*;

use std::convert::{Infallible};

///
/// The segments of a shape after rasterization, or the reason the shape could not be rasterized
///
type RasterizedShape = Result<SmallVec<[RasterizedSegment; 4]>, CanvasError>;

///
/// The shape renderer draws shapes by rasterizing each of their segments and sending the resulting points to a target
///
/// Points are sent in order: the shapes in the order they were supplied, the segments of each shape in order, and the
/// points of each segment in the order the rasterizer generated them. A shape that can't be broken down into segments,
/// or that has a segment the rasterizer rejects, is skipped and the remaining shapes are still drawn.
///
pub struct ShapeRenderer<TRasterizer>
where
    TRasterizer: SegmentRasterizer,
{
    rasterizer: TRasterizer,
}

impl<TRasterizer> ShapeRenderer<TRasterizer>
where
    TRasterizer: SegmentRasterizer,
{
    ///
    /// Creates a shape renderer that uses the specified rasterizer
    ///
    pub fn new(rasterizer: TRasterizer) -> Self {
        ShapeRenderer { rasterizer }
    }

    /// The rasterizer used by this renderer
    #[inline]
    pub fn rasterizer(&self) -> &TRasterizer {
        &self.rasterizer
    }

    /// Retrieves the rasterizer from this renderer
    #[inline]
    pub fn into_rasterizer(self) -> TRasterizer {
        self.rasterizer
    }

    ///
    /// Draws a set of shapes, calling `draw_point` for every point that they cover
    ///
    pub fn draw<TShape>(&self, shapes: impl IntoIterator<Item=TShape>, mut draw_point: impl FnMut(Point)) -> RenderReport
    where
        TShape: Shape,
    {
        let rasterized  = shapes.into_iter().map(|shape| self.rasterize_shape(&shape));
        let result      = Self::dispatch(rasterized, |point| -> Result<(), Infallible> { draw_point(point); Ok(()) });

        match result {
            Ok(report)  => report,
            Err(never)  => match never { },
        }
    }

    ///
    /// Draws a set of shapes to a draw target
    ///
    /// Shapes that can't be rasterized are skipped, but if the target reports an error, drawing stops and the error is returned.
    ///
    pub fn draw_to<TShape>(&self, shapes: impl IntoIterator<Item=TShape>, target: &mut impl DrawTarget) -> Result<RenderReport, CanvasError>
    where
        TShape: Shape,
    {
        let rasterized = shapes.into_iter().map(|shape| self.rasterize_shape(&shape));

        Self::dispatch(rasterized, |point| target.draw_point(point))
    }

    ///
    /// Rasterizes all of the segments for a single shape (the shape can't be drawn if any of its segments are invalid)
    ///
    fn rasterize_shape(&self, shape: &impl Shape) -> RasterizedShape {
        let segments = shape.segments()?;

        segments.iter()
            .map(|segment| self.rasterizer.rasterize_verbose(segment))
            .collect()
    }

    ///
    /// Sends the points for a set of rasterized shapes to a draw function
    ///
    fn dispatch<TError>(shapes: impl IntoIterator<Item=RasterizedShape>, mut draw_point: impl FnMut(Point) -> Result<(), TError>) -> Result<RenderReport, TError> {
        let mut report = RenderReport::default();

        for shape in shapes {
            let segments = match shape {
                Ok(segments)    => segments,
                Err(err)        => {
                    log::warn!("Skipping shape that could not be rasterized: {}", err);
                    report.shapes_skipped += 1;
                    continue;
                }
            };

            for segment in segments.iter() {
                report.add_segment(segment);

                for point in segment.points.iter() {
                    draw_point(*point)?;
                }
            }

            report.shapes_drawn += 1;
        }

        log::debug!("Drew {} points from {} shapes ({} cache hits, {} cache misses)", report.points, report.shapes_drawn, report.cache_hits, report.cache_misses);

        Ok(report)
    }
}

#[cfg(feature="multithreading")]
impl<TRasterizer> ShapeRenderer<TRasterizer>
where
    TRasterizer: SegmentRasterizer,
{
    ///
    /// Draws a set of shapes, rasterizing them in parallel
    ///
    /// The points are sent to `draw_point` on the calling thread, in the same order that `draw()` would send them.
    ///
    pub fn draw_parallel<TShape>(&self, shapes: &[TShape], mut draw_point: impl FnMut(Point)) -> RenderReport
    where
        TShape: Shape + Sync,
    {
        let rasterized  = self.rasterize_parallel(shapes);
        let result      = Self::dispatch(rasterized, |point| -> Result<(), Infallible> { draw_point(point); Ok(()) });

        match result {
            Ok(report)  => report,
            Err(never)  => match never { },
        }
    }

    ///
    /// Draws a set of shapes to a draw target, rasterizing them in parallel
    ///
    pub fn draw_parallel_to<TShape>(&self, shapes: &[TShape], target: &mut impl DrawTarget) -> Result<RenderReport, CanvasError>
    where
        TShape: Shape + Sync,
    {
        let rasterized = self.rasterize_parallel(shapes);

        Self::dispatch(rasterized, |point| target.draw_point(point))
    }

    ///
    /// Rasterizes a set of shapes on the rayon thread pool, returning the results in the order the shapes were supplied
    ///
    fn rasterize_parallel<TShape>(&self, shapes: &[TShape]) -> Vec<RasterizedShape>
    where
        TShape: Shape + Sync,
    {
        use rayon::prelude::*;

        shapes.par_iter()
            .map(|shape| self.rasterize_shape(shape))
            .collect()
    }
}
