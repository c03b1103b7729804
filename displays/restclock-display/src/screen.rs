//! Screen content
//!
//! A screen is a handful of text labels at pixel positions plus at most one
//! segment readout. It is built by the renderer and drawn onto any
//! [`GraphicsDisplayBackend`].

use heapless::{String, Vec};
use restclock_core::format::TimeString;
use restclock_core::segment::{render, RenderScale};

use crate::backend::{DisplayError, GraphicsDisplayBackend, SegmentSink};

/// Maximum text labels on one screen
pub const MAX_TEXTS: usize = 6;

/// Maximum characters per label
pub const LINE_LEN: usize = 32;

/// A text label with its top-left corner at `(x, y)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItem {
    /// Left edge in pixels
    pub x: i32,
    /// Top edge in pixels
    pub y: i32,
    /// Label text
    pub text: String<LINE_LEN>,
}

/// Large segment digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    /// Formatted time
    pub text: TimeString,
    /// Cell geometry
    pub scale: RenderScale,
}

/// Screen buffer
#[derive(Debug, Clone)]
pub struct Screen {
    /// Text labels
    texts: Vec<TextItem, MAX_TEXTS>,
    /// Segment readout
    readout: Option<Readout>,
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub const fn new() -> Self {
        Self {
            texts: Vec::new(),
            readout: None,
            dirty: true,
        }
    }

    /// Remove all content
    pub fn clear(&mut self) {
        self.texts.clear();
        self.readout = None;
        self.dirty = true;
    }

    /// Add a text label
    ///
    /// Text beyond [`LINE_LEN`] characters and labels beyond [`MAX_TEXTS`]
    /// are dropped.
    pub fn add_text(&mut self, x: i32, y: i32, text: &str) {
        let mut line = String::new();
        for ch in text.chars() {
            if line.push(ch).is_err() {
                break;
            }
        }
        let _ = self.texts.push(TextItem { x, y, text: line });
        self.dirty = true;
    }

    /// Show a segment readout
    pub fn set_readout(&mut self, text: TimeString, scale: RenderScale) {
        self.readout = Some(Readout { text, scale });
        self.dirty = true;
    }

    /// Text labels
    pub fn texts(&self) -> &[TextItem] {
        &self.texts
    }

    /// Segment readout, if any
    pub fn readout(&self) -> Option<&Readout> {
        self.readout.as_ref()
    }

    /// Check if the screen shows nothing
    pub fn is_blank(&self) -> bool {
        self.texts.is_empty() && self.readout.is_none()
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Clear `backend` and draw this screen onto it
    pub fn draw<B: GraphicsDisplayBackend + ?Sized>(
        &self,
        backend: &mut B,
    ) -> Result<(), DisplayError> {
        backend.clear()?;

        for item in &self.texts {
            backend.draw_text(item.x, item.y, &item.text)?;
        }

        if let Some(readout) = &self.readout {
            let grid = render(&readout.text)?;
            grid.draw(&readout.scale, &mut SegmentSink::new(backend))?;
        }

        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, item) in self.texts.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", item.text.as_str());
        }
        if let Some(readout) = &self.readout {
            defmt::write!(f, " | {}", readout.text.as_str());
        }
        defmt::write!(f, "]");
    }
}
