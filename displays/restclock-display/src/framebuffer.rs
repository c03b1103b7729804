//! 128x64 monochrome frame buffer
//!
//! Laid out the way SSD1306-class controllers expect it: eight pages of
//! 128 column bytes, bit 0 of each byte being the top pixel of the page.

use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::{Primitive, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::{Drawable, Pixel};

use crate::backend::{DisplayBackend, DisplayError, GraphicsDisplayBackend};

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// 1bpp page-organized frame buffer
#[derive(Clone)]
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank frame buffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Set a pixel
    ///
    /// Returns `false` if the pixel is off the panel.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }

        let mask = 1u8 << (y % 8);
        let byte = &mut self.pages[y / 8][x];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
        true
    }

    /// Read a pixel, `None` if off the panel
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        Some(self.pages[y / 8][x] & (1 << (y % 8)) != 0)
    }

    /// Raw bytes of one page
    pub fn page(&self, page: usize) -> Option<&[u8; WIDTH]> {
        self.pages.get(page)
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> u32 {
        self.pages
            .iter()
            .flat_map(|page| page.iter())
            .map(|byte| byte.count_ones())
            .sum()
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.set_pixel(point.x as usize, point.y as usize, color.is_on());
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DisplayBackend for FrameBuffer {
    fn clear(&mut self) -> Result<(), DisplayError> {
        FrameBuffer::clear(self);
        Ok(())
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        // Drawing into memory cannot fail
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self);
        Ok(())
    }
}

impl GraphicsDisplayBackend for FrameBuffer {
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), DisplayError> {
        if width == 0 || height == 0 {
            return Err(DisplayError::InvalidCoordinates);
        }
        let _ = Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_page_bit_mapping() {
        let mut fb = FrameBuffer::new();
        assert!(fb.set_pixel(0, 0, true));
        assert!(fb.set_pixel(0, 7, true));
        assert!(fb.set_pixel(5, 9, true));

        assert_eq!(fb.page(0).unwrap()[0], 0b1000_0001);
        assert_eq!(fb.page(1).unwrap()[5], 0b0000_0010);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut fb = FrameBuffer::new();
        assert!(!fb.set_pixel(WIDTH, 0, true));
        assert!(!fb.set_pixel(0, HEIGHT, true));
        assert_eq!(fb.pixel(WIDTH, 0), None);
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn test_draw_target_clips() {
        let mut fb = FrameBuffer::new();
        Rectangle::new(Point::new(-2, -2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.lit_count(), 4);
        assert_eq!(fb.pixel(1, 1), Some(true));
        assert_eq!(fb.pixel(2, 2), Some(false));
    }

    #[test]
    fn test_draw_text_lights_pixels() {
        let mut fb = FrameBuffer::new();
        fb.draw_text(5, 5, "Goodbye").unwrap();
        assert!(fb.lit_count() > 0);

        // Nothing above the text's top edge
        for x in 0..WIDTH {
            for y in 0..5 {
                assert_eq!(fb.pixel(x, y), Some(false));
            }
        }
    }

    #[test]
    fn test_fill_rect() {
        let mut fb = FrameBuffer::new();
        fb.fill_rect(10, 20, 4, 3).unwrap();
        assert_eq!(fb.lit_count(), 12);
        assert_eq!(fb.pixel(13, 22), Some(true));
        assert_eq!(fb.pixel(14, 22), Some(false));

        assert_eq!(
            fb.fill_rect(10, 20, 0, 3),
            Err(DisplayError::InvalidCoordinates)
        );
    }

    #[test]
    fn test_clear() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(10, 10, true);
        fb.clear();
        assert_eq!(fb.lit_count(), 0);
    }
}
