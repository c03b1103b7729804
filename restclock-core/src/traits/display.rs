//! Frame sink trait for segment output

/// Pixel output for rendered segment grids
///
/// The renderer computes pixel coordinates; the sink only fills
/// rectangles. Implementations can draw into a frame buffer, a canvas or a
/// test recorder.
pub trait FrameSink {
    /// Error type reported by the underlying display
    type Error;

    /// Fill one lit cell
    ///
    /// - `x`, `y`: top-left corner in pixels (may be off-panel; clip)
    /// - `width`, `height`: size of the filled rectangle in pixels
    fn fill_cell(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), Self::Error>;
}

impl<T: FrameSink + ?Sized> FrameSink for &mut T {
    type Error = T::Error;

    fn fill_cell(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), Self::Error> {
        (**self).fill_cell(x, y, width, height)
    }
}
