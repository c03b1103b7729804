//! Segment digit renderer
//!
//! Turns a time string into an abstract grid of lit/unlit cells. The grid
//! has no physical size; [`RenderScale`] maps cells to pixels when the grid
//! is drawn onto a [`FrameSink`].

use heapless::Vec;

use crate::glyph::{glyph_of, Glyph, RenderError, GLYPH_COLS, GLYPH_ROWS};
use crate::traits::FrameSink;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum glyphs in one grid
///
/// The longest long-format string for a `u32` second count is 14 glyphs.
pub const MAX_GLYPHS: usize = 16;

/// Rendered text as a `5 x (3 * len)` cell grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderGrid {
    glyphs: Vec<&'static Glyph, MAX_GLYPHS>,
}

/// Render text into a cell grid
///
/// Glyphs are placed left to right at column `3 * index`. Empty text gives
/// an empty grid. An unsupported character fails the whole render rather
/// than being skipped.
pub fn render(text: &str) -> Result<RenderGrid, RenderError> {
    let mut glyphs = Vec::new();
    for ch in text.chars() {
        let glyph = glyph_of(ch)?;
        glyphs.push(glyph).map_err(|_| RenderError::TooLong)?;
    }
    Ok(RenderGrid { glyphs })
}

impl RenderGrid {
    /// Grid height in cells (always 5)
    pub const fn height(&self) -> usize {
        GLYPH_ROWS
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.glyphs.len() * GLYPH_COLS
    }

    /// Number of glyphs in the grid
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Check if the grid has no columns
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Check whether a cell is lit
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        self.glyphs
            .get(col / GLYPH_COLS)
            .map(|g| g.is_lit(row, col % GLYPH_COLS))
            .unwrap_or(false)
    }

    /// Iterate over one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = bool> + '_ {
        (0..self.width()).map(move |col| self.is_lit(row, col))
    }

    /// Iterate over lit cells as `(row, col)` in row-major order
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GLYPH_ROWS).flat_map(move |row| {
            (0..self.width())
                .filter(move |&col| self.is_lit(row, col))
                .map(move |col| (row, col))
        })
    }

    /// Draw every lit cell onto a sink at the given scale
    ///
    /// Calls [`FrameSink::fill_cell`] exactly once per lit cell and stops at
    /// the first sink error.
    pub fn draw<S: FrameSink>(&self, scale: &RenderScale, sink: &mut S) -> Result<(), S::Error> {
        for (row, col) in self.lit_cells() {
            let (x, y) = scale.cell_origin(row, col);
            sink.fill_cell(x, y, scale.cell_width, scale.cell_height)?;
        }
        Ok(())
    }
}

/// Physical layout of a rendered grid
///
/// Each glyph is preceded by `glyph_gap` pixels. Cells are placed on a
/// `col_pitch` x `row_pitch` lattice and filled with a
/// `cell_width` x `cell_height` rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderScale {
    /// Left edge of the grid (before the first glyph gap)
    pub origin_x: i32,
    /// Top edge of the first row
    pub origin_y: i32,
    /// Horizontal distance between cell origins
    pub col_pitch: u32,
    /// Vertical distance between cell origins
    pub row_pitch: u32,
    /// Filled width of a lit cell
    pub cell_width: u32,
    /// Filled height of a lit cell
    pub cell_height: u32,
    /// Blank pixels before each glyph
    pub glyph_gap: u32,
}

impl RenderScale {
    /// Large `mm:ss` readout used by the countdown screen
    pub const SHORT: Self = Self {
        origin_x: 3,
        origin_y: 15,
        col_pitch: 7,
        row_pitch: 7,
        cell_width: 6,
        cell_height: 6,
        glyph_gap: 3,
    };

    /// Compact `hh:mm:ss` readout used by the session time screen
    pub const LONG: Self = Self {
        origin_x: 0,
        origin_y: 18,
        col_pitch: 4,
        row_pitch: 5,
        cell_width: 4,
        cell_height: 4,
        glyph_gap: 3,
    };

    /// Pixel position of a cell's top-left corner
    ///
    /// Coordinates saturate at the `i32` range.
    pub fn cell_origin(&self, row: usize, col: usize) -> (i32, i32) {
        let glyph = i64::try_from(col / GLYPH_COLS).unwrap_or(i64::MAX);
        let within = (col % GLYPH_COLS) as i64;
        let row = i64::try_from(row).unwrap_or(i64::MAX);

        let x = i64::from(self.origin_x)
            .saturating_add(glyph.saturating_mul(self.glyph_span()))
            .saturating_add(i64::from(self.glyph_gap))
            .saturating_add(within * i64::from(self.col_pitch));
        let y = i64::from(self.origin_y)
            .saturating_add(row.saturating_mul(i64::from(self.row_pitch)));
        (saturate_i32(x), saturate_i32(y))
    }

    /// Pixel width covered by `glyphs` glyphs, saturating at `u32::MAX`
    pub fn pixel_width(&self, glyphs: usize) -> u32 {
        if glyphs == 0 {
            return 0;
        }
        let glyphs = i64::try_from(glyphs).unwrap_or(i64::MAX);
        // The last column only needs its fill, not a full pitch
        let width = glyphs
            .saturating_mul(self.glyph_span())
            .saturating_sub(i64::from(self.col_pitch))
            .saturating_add(i64::from(self.cell_width));
        u32::try_from(width).unwrap_or(u32::MAX)
    }

    /// Pixel height of a grid, saturating at `u32::MAX`
    pub fn pixel_height(&self) -> u32 {
        (GLYPH_ROWS as u32 - 1)
            .saturating_mul(self.row_pitch)
            .saturating_add(self.cell_height)
    }

    /// Distance between the left edges of two adjacent glyphs
    fn glyph_span(&self) -> i64 {
        i64::from(self.glyph_gap) + GLYPH_COLS as i64 * i64::from(self.col_pitch)
    }
}

fn saturate_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

impl Default for RenderScale {
    fn default() -> Self {
        Self::SHORT
    }
}
