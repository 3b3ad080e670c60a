use thiserror::Error;

use std::io;

///
/// Errors that can occur while describing or drawing line segments
///
#[derive(Debug, Error)]
pub enum CanvasError {
    /// A coordinate could not be represented as an integer point, or a shape's edges would overflow the coordinate space
    #[error("invalid segment: {0}")]
    InvalidSegment(String),

    /// A draw target could not write out a point
    #[error("could not draw point")]
    Io(#[from] io::Error),
}

impl CanvasError {
    ///
    /// True if this error was caused by the geometry of a segment (rather than by the target it was being drawn to)
    ///
    #[inline]
    pub fn is_invalid_segment(&self) -> bool {
        matches!(self, CanvasError::InvalidSegment(_))
    }
}
