mod bounding_key;
mod segment_points;
mod rasterizer_trait;
mod raster_cache;
mod uncached_rasterizer;

pub use bounding_key::*;
pub use segment_points::*;
pub use rasterizer_trait::*;
pub use raster_cache::*;
pub use uncached_rasterizer::*;
