//! Duration formatting for the segment readouts
//!
//! Both formats only produce characters from the glyph table, so their
//! output can always be rendered.

use core::fmt::Write;

use heapless::String;

/// Capacity of a formatted duration string
///
/// Fits the widest long-format output for `u32` seconds.
pub const FORMAT_CAPACITY: usize = 16;

/// Formatted duration
pub type TimeString = String<FORMAT_CAPACITY>;

/// Format seconds as `MM:SS`
///
/// Minutes are padded to at least two digits and widen past 99 instead of
/// being truncated; keeping the value in a displayable range is up to the
/// caller.
pub fn format_short(seconds: u32) -> TimeString {
    let mut out = TimeString::new();
    // Cannot overflow: at most 8 + 1 + 2 characters
    let _ = write!(out, "{:02}:{:02}", seconds / 60, seconds % 60);
    out
}

/// Format seconds as `0H:MM:SS`
///
/// The hour field is a literal `0` followed by the hour count, so ten hours
/// reads `010:00:00` rather than `10:00:00`.
pub fn format_long(seconds: u32) -> TimeString {
    let hours = seconds / 3600;
    let minutes = (seconds / 60) % 60;
    let secs = seconds % 60;

    let mut out = TimeString::new();
    // Cannot overflow: at most 1 + 7 + 1 + 2 + 1 + 2 characters
    let _ = write!(out, "0{}:{:02}:{:02}", hours, minutes, secs);
    out
}

/// Format a rest budget as minutes with one decimal, e.g. `1.5`
///
/// Used by the rest time picker. The value is rounded to the nearest
/// tenth of a minute, so a 75 s budget reads `1.3`.
pub fn format_minutes(seconds: u32) -> String<12> {
    let mut out = String::new();
    let tenths = (u64::from(seconds) * 10 + 30) / 60;
    // Cannot overflow: at most 9 + 1 + 1 characters
    let _ = write!(out, "{}.{}", tenths / 10, tenths % 10);
    out
}
