use super::bounding_key::*;
use super::segment_points::*;
use super::rasterizer_trait::*;

use flo_line_canvas::*;
use once_cell::sync::{OnceCell};
use parking_lot::{Mutex};

use std::collections::{HashMap};
use std::sync::{Arc};

///
/// The raster cache converts segments into points, remembering the points it has generated for each bounding box so
/// that segments covering the same region are only rasterized once.
///
/// Each set of newly generated points is assigned a generation number, starting at 1. Segments that are found in the
/// cache report the generation number of the request that first generated them.
///
/// The cache can be shared between threads: requests that arrive at the same time for a bounding box that has not
/// been seen before will only generate the points once, and requests for points that are already cached don't wait
/// for other bounding boxes to finish generating.
///
pub struct RasterCache {
    /// The entries and the generation counter
    core: Mutex<RasterCacheCore>,

    /// Segments covering more than this many points are rejected
    max_segment_points: u64,
}

///
/// A set of points stored in the cache
///
#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub generation: u64,
    pub points:     Arc<[Point]>,
}

///
/// The state of the raster cache, which is protected by the cache's lock
///
#[derive(Default)]
struct RasterCacheCore {
    /// The points for each bounding box (the cell is empty while the points are being generated)
    entries: HashMap<BoundingKey, Arc<OnceCell<CacheEntry>>>,

    /// The most recently allocated generation (0 if nothing has been generated yet)
    generation: u64,
}

impl RasterCache {
    ///
    /// Creates a new, empty raster cache
    ///
    pub fn new() -> RasterCache {
        RasterCache::with_max_segment_points(DEFAULT_MAX_SEGMENT_POINTS)
    }

    ///
    /// Creates a raster cache that rejects segments that cover more than `max_segment_points` points
    ///
    pub fn with_max_segment_points(max_segment_points: u64) -> RasterCache {
        RasterCache {
            core:               Mutex::new(RasterCacheCore::default()),
            max_segment_points,
        }
    }

    /// The largest number of points a segment can cover before it's rejected by this cache
    #[inline]
    pub fn max_segment_points(&self) -> u64 {
        self.max_segment_points
    }

    ///
    /// Returns the number of distinct bounding boxes that are stored in this cache
    ///
    pub fn len(&self) -> usize {
        self.core.lock().entries.values()
            .filter(|cell| cell.get().is_some())
            .count()
    }

    ///
    /// True if nothing has been stored in this cache
    ///
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// Returns the most recently allocated generation number (or 0 if nothing has been rasterized yet)
    ///
    pub fn generation_count(&self) -> u64 {
        self.core.lock().generation
    }

    ///
    /// True if rasterizing the specified segment would retrieve its points from the cache
    ///
    pub fn contains(&self, segment: &Segment) -> bool {
        self.entry(&BoundingKey::from_segment(segment)).is_some()
    }

    ///
    /// True if another request is currently generating the points for a segment
    ///
    pub fn is_generating(&self, segment: &Segment) -> bool {
        self.core.lock().entries.get(&BoundingKey::from_segment(segment))
            .map(|cell| cell.get().is_none())
            .unwrap_or(false)
    }

    ///
    /// Retrieves the entry for a bounding key, if it has been generated
    ///
    pub fn entry(&self, key: &BoundingKey) -> Option<CacheEntry> {
        self.core.lock().entries.get(key)
            .and_then(|cell| cell.get().cloned())
    }

    ///
    /// Removes every entry from the cache
    ///
    /// Generation numbers carry on from where they left off, so a generation number identifies a single set of
    /// points for the lifetime of the cache.
    ///
    pub fn clear(&self) {
        let mut core = self.core.lock();

        log::info!("Clearing {} entries from the raster cache", core.entries.len());
        core.entries.clear();
    }

    ///
    /// Allocates the next generation number
    ///
    fn next_generation(&self) -> u64 {
        let mut core = self.core.lock();

        core.generation += 1;
        core.generation
    }
}

impl Default for RasterCache {
    fn default() -> Self {
        RasterCache::new()
    }
}

impl SegmentRasterizer for RasterCache {
    fn rasterize_verbose(&self, segment: &Segment) -> Result<RasterizedSegment, CanvasError> {
        check_point_count(segment, self.max_segment_points)?;

        let key = BoundingKey::from_segment(segment);

        // The map lock is only held while finding the cell, so generating the points doesn't block requests for other keys
        let cell = {
            let mut core = self.core.lock();
            Arc::clone(core.entries.entry(key).or_default())
        };

        // Requests for the same key wait here while the first request generates the points
        let mut generated   = false;
        let entry           = cell.get_or_init(|| {
            // The generation is only allocated once the points exist
            let points      = points_for_key(key).collect::<Arc<[Point]>>();
            let generation  = self.next_generation();

            log::debug!("{}: Generating points for line", generation);
            generated = true;

            CacheEntry { generation, points }
        });

        if !generated {
            log::trace!("{}: Retrieving points from cache", entry.generation);
        }

        Ok(RasterizedSegment {
            points:     Arc::clone(&entry.points),
            was_hit:    !generated,
            generation: entry.generation,
        })
    }
}
