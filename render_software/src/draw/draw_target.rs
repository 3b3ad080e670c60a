use flo_line_canvas::*;

///
/// A draw target receives the points generated by a `ShapeRenderer`
///
pub trait DrawTarget {
    ///
    /// Draws a single point
    ///
    /// Returning an error stops the rendering operation that's sending the points.
    ///
    fn draw_point(&mut self, point: Point) -> Result<(), CanvasError>;
}

///
/// Draw target that stores the points that are drawn to it, in the order they were drawn
///
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PointCollector {
    points: Vec<Point>,
}

impl PointCollector {
    ///
    /// Creates a new, empty point collector
    ///
    pub fn new() -> PointCollector {
        PointCollector { points: vec![] }
    }

    /// The points that have been drawn so far
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Retrieves the drawn points
    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl DrawTarget for PointCollector {
    #[inline]
    fn draw_point(&mut self, point: Point) -> Result<(), CanvasError> {
        self.points.push(point);
        Ok(())
    }
}

impl<'a, TTarget> DrawTarget for &'a mut TTarget
where
    TTarget: DrawTarget + ?Sized,
{
    #[inline]
    fn draw_point(&mut self, point: Point) -> Result<(), CanvasError> {
        (**self).draw_point(point)
    }
}
