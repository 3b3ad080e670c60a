#[cfg(feature="render_text")]
mod text_draw_target {
    use super::super::draw_target::*;

    use flo_line_canvas::*;

    use std::io;
    use std::io::{Write};

    ///
    /// Draw target that describes each point as a line of text
    ///
    /// Each point is written as `Drawing point at (x, y)`. Segments can also be described before their points are drawn,
    /// as `Drawing line from (x1, y1) to (x2, y2)`.
    ///
    pub struct TextDrawTarget<TWrite>
    where
        TWrite: Write,
    {
        writer: TWrite,
    }

    impl TextDrawTarget<io::Stdout> {
        ///
        /// Creates a text draw target that writes to stdout
        ///
        pub fn stdout() -> Self {
            TextDrawTarget::new(io::stdout())
        }
    }

    impl<TWrite> TextDrawTarget<TWrite>
    where
        TWrite: Write,
    {
        ///
        /// Creates a text draw target that writes to the specified stream
        ///
        pub fn new(writer: TWrite) -> Self {
            TextDrawTarget { writer }
        }

        ///
        /// Writes a description of a segment
        ///
        pub fn draw_line(&mut self, segment: &Segment) -> Result<(), CanvasError> {
            writeln!(self.writer, "Drawing line from {} to {}", segment.start, segment.end)?;
            Ok(())
        }

        ///
        /// Flushes the underlying stream and returns it
        ///
        pub fn into_inner(mut self) -> Result<TWrite, CanvasError> {
            self.writer.flush()?;
            Ok(self.writer)
        }
    }

    impl<TWrite> DrawTarget for TextDrawTarget<TWrite>
    where
        TWrite: Write,
    {
        #[inline]
        fn draw_point(&mut self, point: Point) -> Result<(), CanvasError> {
            writeln!(self.writer, "Drawing point at {}", point)?;
            Ok(())
        }
    }
}

#[cfg(feature="render_text")]
pub use text_draw_target::*;
