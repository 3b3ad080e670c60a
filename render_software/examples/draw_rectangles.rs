use flo_line_raster::canvas::*;
use flo_line_raster::draw::*;
use flo_line_raster::raster::*;

///
/// Draws two rectangles as text, twice, to show the raster cache at work
///
/// Run with `RUST_LOG=debug` to see the points being generated and `RUST_LOG=trace` to see them being retrieved from the cache.
///
pub fn main() -> Result<(), CanvasError> {
    env_logger::init();

    let rectangles = vec![
        Rectangle::new(1, 1, 10, 10),
        Rectangle::new(20, 20, 100, 100),
    ];

    let renderer    = ShapeRenderer::new(RasterCache::new());
    let mut target  = TextDrawTarget::stdout();

    // The second pass retrieves every edge from the cache
    for _ in 0..2 {
        let report = renderer.draw_to(&rectangles, &mut target)?;
        eprintln!("{:?}", report);
    }

    target.into_inner()?;

    Ok(())
}
