use super::bounding_key::*;

use flo_line_canvas::*;
use itertools::*;

use std::iter;

///
/// Enumerates the points covered by a bounding key
///
/// Vertical keys generate points in increasing y order and horizontal keys in increasing x order. A key for a single
/// point is treated as vertical so that point is only generated once. Keys that are neither vertical nor horizontal
/// describe diagonal lines, which generate no points at all.
///
pub fn points_for_key(key: BoundingKey) -> impl Iterator<Item=Point> {
    let BoundingKey { left, right, top, bottom } = key;

    if key.is_vertical() {
        Either::Left((top..=bottom).map(move |y| Point::new(left, y)))
    } else if key.is_horizontal() {
        Either::Right(Either::Left((left..=right).map(move |x| Point::new(x, top))))
    } else {
        Either::Right(Either::Right(iter::empty()))
    }
}

///
/// Generates the points that a segment covers, without any caching
///
#[inline]
pub fn segment_points(segment: &Segment) -> impl Iterator<Item=Point> {
    points_for_key(BoundingKey::from_segment(segment))
}

///
/// The largest number of points a single segment can generate unless a rasterizer is configured otherwise
///
pub const DEFAULT_MAX_SEGMENT_POINTS: u64 = 1 << 28;

///
/// Returns the number of points that `points_for_key()` will generate for a key
///
pub fn point_count(key: BoundingKey) -> u128 {
    if key.is_vertical() {
        (key.bottom as i128 - key.top as i128 + 1) as u128
    } else if key.is_horizontal() {
        (key.right as i128 - key.left as i128 + 1) as u128
    } else {
        0
    }
}

///
/// Fails with `InvalidSegment` if a segment would generate more than `max_points` points
///
pub fn check_point_count(segment: &Segment, max_points: u64) -> Result<(), CanvasError> {
    let count = point_count(BoundingKey::from_segment(segment));

    if count > max_points as u128 {
        Err(CanvasError::InvalidSegment(format!("{} covers {} points, more than the limit of {}", segment, count, max_points)))
    } else {
        Ok(())
    }
}
