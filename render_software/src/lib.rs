//!
//! # flo_line_raster
//!
//! `flo_line_raster` converts the line segments that make up a shape into the integer points that they cover. Only
//! horizontal and vertical segments can be converted: diagonal segments produce no points.
//!
//! The `RasterCache` remembers the points it has generated for each bounding box, so a segment that covers the same
//! region as one that was drawn earlier (including the same segment drawn in the opposite direction) reuses the
//! earlier points rather than generating them again. Each newly generated set of points is given a generation number,
//! which makes it possible to tell whether a result was generated or retrieved.
//!
//! The `ShapeRenderer` draws a list of shapes by rasterizing each of their segments and sending the points to a
//! `DrawTarget` or a callback function.
//!
//! ```
//! use flo_line_raster::canvas::*;
//! use flo_line_raster::draw::*;
//! use flo_line_raster::raster::*;
//!
//! let renderer    = ShapeRenderer::new(RasterCache::new());
//! let mut points  = vec![];
//! let report      = renderer.draw(vec![Rectangle::new(1, 1, 10, 10)], |point| points.push(point));
//!
//! assert!(points.len() == 44);
//! assert!(report.cache_misses == 4);
//! ```
//!
//! # Features
//!
//! * `multithreading` - adds `ShapeRenderer::draw_parallel()`, which rasterizes shapes on the rayon thread pool
//! * `render_text` - adds the `TextDrawTarget`, which writes a line of text for every point that is drawn
//!

/// Conversion of line segments into points, and the cache that stores the results
pub mod raster;

/// Drawing lists of shapes to a target
pub mod draw;

/// The primitives from `flo_line_canvas`
pub mod canvas {
    pub use flo_line_canvas::*;
}
