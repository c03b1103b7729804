//! Segment glyph table
//!
//! Each displayable character is a 5-row by 3-column bitmap. Rows are
//! stored top to bottom, one byte per row, with bit 2 as the leftmost
//! column.

/// Glyph height in cells
pub const GLYPH_ROWS: usize = 5;

/// Glyph width in cells
pub const GLYPH_COLS: usize = 3;

/// Characters with a glyph, in table order
pub const SUPPORTED_CHARS: &str = "0123456789:";

/// Rendering errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Character has no glyph in the table
    UnsupportedCharacter(char),
    /// Text has more glyphs than a grid can hold
    TooLong,
}

/// A 5x3 segment bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    rows: [u8; GLYPH_ROWS],
}

impl Glyph {
    const fn new(rows: [u8; GLYPH_ROWS]) -> Self {
        Self { rows }
    }

    /// Check whether a cell is lit
    ///
    /// Out-of-range coordinates are never lit.
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        if row >= GLYPH_ROWS || col >= GLYPH_COLS {
            return false;
        }
        self.rows[row] & (0b100 >> col) != 0
    }

    /// One row as booleans, left to right
    pub fn row(&self, row: usize) -> [bool; GLYPH_COLS] {
        core::array::from_fn(|col| self.is_lit(row, col))
    }

    /// Number of lit cells
    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }
}

const GLYPHS: [Glyph; 11] = [
    // 0
    Glyph::new([0b111, 0b101, 0b101, 0b101, 0b111]),
    // 1
    Glyph::new([0b001, 0b001, 0b001, 0b001, 0b001]),
    // 2
    Glyph::new([0b111, 0b001, 0b111, 0b100, 0b111]),
    // 3
    Glyph::new([0b111, 0b001, 0b111, 0b001, 0b111]),
    // 4
    Glyph::new([0b101, 0b101, 0b111, 0b001, 0b001]),
    // 5
    Glyph::new([0b111, 0b100, 0b111, 0b001, 0b111]),
    // 6 (open top)
    Glyph::new([0b100, 0b100, 0b111, 0b101, 0b111]),
    // 7 (bent stem)
    Glyph::new([0b111, 0b001, 0b010, 0b010, 0b010]),
    // 8
    Glyph::new([0b111, 0b101, 0b111, 0b101, 0b111]),
    // 9 (open bottom)
    Glyph::new([0b111, 0b101, 0b111, 0b001, 0b001]),
    // :
    Glyph::new([0b000, 0b010, 0b000, 0b010, 0b000]),
];

/// Look up the glyph for a character
pub fn glyph_of(ch: char) -> Result<&'static Glyph, RenderError> {
    let index = match ch {
        '0'..='9' => ch as usize - '0' as usize,
        ':' => 10,
        _ => return Err(RenderError::UnsupportedCharacter(ch)),
    };
    Ok(&GLYPHS[index])
}
