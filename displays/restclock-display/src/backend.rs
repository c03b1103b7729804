//! Display backend traits
//!
//! Defines the interface the screen renderer draws through, plus the
//! adapter that lets the segment renderer fill cells on a backend.

use restclock_core::glyph::RenderError;
use restclock_core::traits::FrameSink;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Readout text has no segment rendering
    Unrenderable(RenderError),
}

impl From<RenderError> for DisplayError {
    fn from(e: RenderError) -> Self {
        DisplayError::Unrenderable(e)
    }
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering to displays.
/// Coordinates are pixels from the top-left corner.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at `(x, y)`
    ///
    /// Text running off the panel is clipped.
    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), DisplayError>;
}

/// Extended display backend for displays supporting graphics
pub trait GraphicsDisplayBackend: DisplayBackend {
    /// Fill a rectangle, clipped to the panel
    ///
    /// A zero-sized rectangle is rejected.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), DisplayError>;
}

/// [`FrameSink`] that fills segment cells on a graphics backend
pub struct SegmentSink<'a, B: ?Sized> {
    backend: &'a mut B,
}

impl<'a, B: GraphicsDisplayBackend + ?Sized> SegmentSink<'a, B> {
    /// Wrap a backend
    pub fn new(backend: &'a mut B) -> Self {
        Self { backend }
    }
}

impl<B: GraphicsDisplayBackend + ?Sized> FrameSink for SegmentSink<'_, B> {
    type Error = DisplayError;

    fn fill_cell(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), Self::Error> {
        self.backend.fill_rect(x, y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::{FrameBuffer, HEIGHT, WIDTH};
    use proptest::prelude::*;
    use restclock_core::segment::{render, RenderScale};

    /// Pixels of `[start, start + len)` that land inside `[0, limit)`
    fn overlap(start: i32, len: u32, limit: usize) -> u32 {
        let lo = i64::from(start).max(0);
        let hi = (i64::from(start) + i64::from(len)).min(limit as i64);
        (hi - lo).max(0) as u32
    }

    #[test]
    fn test_segment_sink_fills_cells() {
        let mut fb = FrameBuffer::new();
        let grid = render("1").unwrap();
        grid.draw(&RenderScale::SHORT, &mut SegmentSink::new(&mut fb))
            .unwrap();

        // Five lit cells of 6x6 pixels in the right-hand column
        assert_eq!(fb.lit_count(), 5 * 36);
        let (x, y) = RenderScale::SHORT.cell_origin(0, 2);
        assert_eq!(fb.pixel(x as usize, y as usize), Some(true));
        let (x, y) = RenderScale::SHORT.cell_origin(0, 0);
        assert_eq!(fb.pixel(x as usize, y as usize), Some(false));
    }

    #[test]
    fn test_zero_cell_is_rejected() {
        let mut fb = FrameBuffer::new();
        let mut sink = SegmentSink::new(&mut fb);
        assert_eq!(
            sink.fill_cell(0, 0, 0, 4),
            Err(DisplayError::InvalidCoordinates)
        );
    }

    proptest! {
        #[test]
        fn prop_fill_lights_clipped_area(
            x in -40i32..160,
            y in -40i32..100,
            width in 1u32..64,
            height in 1u32..48,
        ) {
            let mut fb = FrameBuffer::new();
            SegmentSink::new(&mut fb).fill_cell(x, y, width, height).unwrap();

            let expected = overlap(x, width, WIDTH) * overlap(y, height, HEIGHT);
            prop_assert_eq!(fb.lit_count(), expected);
        }

        #[test]
        fn prop_digits_stay_on_panel(secs in 0u32..6000) {
            let text = restclock_core::format_short(secs);
            let grid = render(&text).unwrap();
            let mut fb = FrameBuffer::new();
            grid.draw(&RenderScale::SHORT, &mut SegmentSink::new(&mut fb)).unwrap();

            // Every lit cell is fully on the panel, none clipped
            prop_assert_eq!(fb.lit_count(), grid.lit_cells().count() as u32 * 36);
        }
    }
}
