use flo_line_raster::canvas::*;
use flo_line_raster::draw::*;
use flo_line_raster::raster::*;

use std::io;

#[test]
fn draw_rectangle() {
    let renderer    = ShapeRenderer::new(RasterCache::new());
    let mut points  = vec![];
    let report      = renderer.draw(vec![Rectangle::new(1, 1, 10, 10)], |point| points.push(point));

    // Corners are drawn once by each edge that meets there
    assert!(points.len() == 44, "Should draw 4*11 points, drew {}", points.len());
    assert!(report.points == 44);
    assert!(report.segments == 4);
    assert!(report.shapes_drawn == 1);
    assert!(report.cache_misses == 4 && report.cache_hits == 0, "Every edge should be new {:?}", report);

    // First edge is the top edge, drawn left to right
    assert!(points[0] == Point::new(1, 1));
    assert!(points[10] == Point::new(11, 1));

    // Second edge is the right edge
    assert!(points[11] == Point::new(11, 1));
    assert!(points[21] == Point::new(11, 11));

    assert!(renderer.rasterizer().generation_count() == 4);
}

#[test]
fn draw_rectangle_twice() {
    let renderer    = ShapeRenderer::new(RasterCache::new());
    let mut first   = vec![];
    let mut second  = vec![];

    renderer.draw(vec![Rectangle::new(1, 1, 10, 10)], |point| first.push(point));
    let report = renderer.draw(vec![Rectangle::new(1, 1, 10, 10)], |point| second.push(point));

    assert!(report.cache_hits == 4, "Every edge should be retrieved from the cache {:?}", report);
    assert!(report.cache_misses == 0);
    assert!(renderer.rasterizer().generation_count() == 4, "No new generations should be allocated");
    assert!(first == second, "Should draw the same points both times");
}

#[test]
fn draw_two_rectangles() {
    let renderer    = ShapeRenderer::new(RasterCache::new());
    let mut count   = 0;
    let report      = renderer.draw(vec![Rectangle::new(1, 1, 10, 10), Rectangle::new(20, 20, 100, 100)], |_| count += 1);

    assert!(count == 44 + 404, "Unexpected number of points {}", count);
    assert!(report.shapes_drawn == 2);
    assert!(report.cache_misses == 8);
}

#[test]
fn skips_invalid_shapes() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(0, 0, 2, 2)),
        Box::new(Rectangle::new(i64::MAX, 0, 1, 1)),
        Box::new(Segment::new(Point::new(0, 5), Point::new(3, 5))),
    ];

    let renderer    = ShapeRenderer::new(RasterCache::new());
    let mut points  = vec![];
    let report      = renderer.draw(shapes.iter(), |point| points.push(point));

    assert!(report.shapes_skipped == 1, "The overflowing rectangle should be skipped {:?}", report);
    assert!(report.shapes_drawn == 2);
    assert!(points.len() == 12 + 4, "Should still draw the other shapes, drew {}", points.len());
}

#[test]
fn diagonal_segments_draw_nothing() {
    let shapes = vec![
        Segment::new(Point::new(0, 0), Point::new(2, 2)),
        Segment::new(Point::new(0, 0), Point::new(0, 2)),
    ];

    let renderer    = ShapeRenderer::new(RasterCache::new());
    let mut points  = vec![];
    let report      = renderer.draw(&shapes, |point| points.push(point));

    assert!(report.shapes_drawn == 2, "Diagonal lines are not errors {:?}", report);
    assert!(points == vec![Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)], "Only the vertical line should produce points {:?}", points);
}

#[test]
fn draw_to_collector() {
    let renderer        = ShapeRenderer::new(RasterCache::new());
    let mut collector   = PointCollector::new();
    let report          = renderer.draw_to(vec![Segment::new(Point::new(2, 3), Point::new(5, 3))], &mut collector).unwrap();

    assert!(report.points == 4);
    assert!(collector.points() == &[Point::new(2, 3), Point::new(3, 3), Point::new(4, 3), Point::new(5, 3)][..], "Unexpected points {:?}", collector);
}

#[cfg(feature="render_text")]
#[test]
fn draw_text() {
    let renderer    = ShapeRenderer::new(RasterCache::new());
    let mut target  = TextDrawTarget::new(vec![]);

    renderer.draw_to(vec![Segment::new(Point::new(1, 1), Point::new(1, 2))], &mut target).unwrap();

    let text = String::from_utf8(target.into_inner().unwrap()).unwrap();
    assert!(text == "Drawing point at (1, 1)\nDrawing point at (1, 2)\n", "Unexpected text {:?}", text);
}

struct FailingTarget {
    remaining: usize,
}

impl DrawTarget for FailingTarget {
    fn draw_point(&mut self, _point: Point) -> Result<(), CanvasError> {
        if self.remaining == 0 {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "target closed").into())
        } else {
            self.remaining -= 1;
            Ok(())
        }
    }
}

#[test]
fn target_errors_stop_drawing() {
    let renderer    = ShapeRenderer::new(RasterCache::new());
    let mut target  = FailingTarget { remaining: 3 };
    let result      = renderer.draw_to(vec![Rectangle::new(0, 0, 5, 5)], &mut target);

    assert!(matches!(result, Err(CanvasError::Io(_))), "Should report the target's error {:?}", result);
}

#[test]
fn uncached_renderer_generates_every_time() {
    let renderer = ShapeRenderer::new(UncachedRasterizer::new());

    let first   = renderer.draw(vec![Rectangle::new(1, 1, 10, 10)], |_| { });
    let second  = renderer.draw(vec![Rectangle::new(1, 1, 10, 10)], |_| { });

    assert!(first.points == 44 && second.points == 44);
    assert!(second.cache_hits == 0 && second.cache_misses == 4);
    assert!(renderer.rasterizer().generation_count() == 8);
}

#[test]
fn renderer_with_borrowed_cache() {
    let cache = RasterCache::new();

    {
        let renderer = ShapeRenderer::new(&cache);
        renderer.draw(vec![Rectangle::new(0, 0, 3, 3)], |_| { });
    }

    let renderer    = ShapeRenderer::new(&cache);
    let report      = renderer.draw(vec![Rectangle::new(3, 3, -3, -3)], |_| { });

    assert!(report.cache_hits == 4, "Rectangle covering the same edges should hit the cache {:?}", report);
    assert!(cache.generation_count() == 4);
}

#[cfg(feature="multithreading")]
#[test]
fn parallel_draw_matches_sequential_order() {
    let shapes = (0..20)
        .map(|idx| Rectangle::new(idx * 3, idx * 2, 10 + idx, 5))
        .collect::<Vec<_>>();

    let sequential          = ShapeRenderer::new(RasterCache::new());
    let parallel            = ShapeRenderer::new(RasterCache::new());
    let mut seq_points      = vec![];
    let mut par_points      = vec![];

    let seq_report = sequential.draw(&shapes, |point| seq_points.push(point));
    let par_report = parallel.draw_parallel(&shapes, |point| par_points.push(point));

    assert!(seq_points == par_points, "Parallel drawing should send points in the same order");
    assert!(seq_report.points == par_report.points);
    assert!(seq_report.cache_hits + seq_report.cache_misses == par_report.cache_hits + par_report.cache_misses);
    assert!(sequential.rasterizer().len() == parallel.rasterizer().len());
}

#[cfg(feature="multithreading")]
#[test]
fn parallel_draw_to_target() {
    let shapes          = vec![Rectangle::new(1, 1, 10, 10), Rectangle::new(1, 1, 10, 10)];
    let renderer        = ShapeRenderer::new(RasterCache::new());
    let mut collector   = PointCollector::new();
    let report          = renderer.draw_parallel_to(&shapes, &mut collector).unwrap();

    assert!(collector.points().len() == 88);
    assert!(report.cache_misses == 4, "Each edge should only be generated once {:?}", report);
    assert!(report.cache_hits == 4);
}

#[test]
fn skips_shapes_with_oversized_segments() {
    let shapes = vec![
        Segment::new(Point::new(0, 0), Point::new(0, 3)),
        Segment::new(Point::new(0, 0), Point::new(100, 0)),
        Segment::new(Point::new(1, 1), Point::new(3, 1)),
    ];

    let renderer    = ShapeRenderer::new(RasterCache::with_max_segment_points(10));
    let mut points  = vec![];
    let report      = renderer.draw(&shapes, |point| points.push(point));

    assert!(report.shapes_skipped == 1, "The long segment should be skipped {:?}", report);
    assert!(report.shapes_drawn == 2);
    assert!(points.len() == 4 + 3, "Unexpected points {:?}", points);
}

#[cfg(feature="render_text")]
#[test]
fn describe_line_as_text() {
    let mut target = TextDrawTarget::new(vec![]);

    target.draw_line(&Segment::new(Point::new(1, 1), Point::new(11, 1))).unwrap();
    target.draw_point(Point::new(1, 1)).unwrap();

    let text = String::from_utf8(target.into_inner().unwrap()).unwrap();
    assert!(text == "Drawing line from (1, 1) to (11, 1)\nDrawing point at (1, 1)\n", "Unexpected text {:?}", text);
}
