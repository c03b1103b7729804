//! Minimal TOML reader for the timer configuration
//!
//! Handles only the subset `timer.toml` needs. It does NOT support full
//! TOML syntax.
//!
//! Supported:
//! - `key = value` pairs (integer, boolean)
//! - `[section]` and `[section.subsection]` headers
//! - Comments (`# ...`), including trailing ones
//!
//! Unknown keys are ignored so older firmware accepts newer files. Unknown
//! sections are rejected.

use super::types::TimerConfig;
use crate::segment::RenderScale;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value could not be read as the key's type
    InvalidValue,
    /// Line is neither a header, a comment, nor `key = value`
    InvalidLine,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Budget,
    Display,
    ShortScale,
    LongScale,
    Ui,
}

/// Parse TOML text into a [`TimerConfig`]
///
/// Starts from the defaults; only keys present in `input` are overridden.
/// The result is not validated, call [`TimerConfig::validate`] afterwards.
pub fn parse_config(input: &str) -> Result<TimerConfig, ParseError> {
    let mut config = TimerConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

/// Parse a header like `budget` or `display.short`
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "budget" => Ok(Section::Budget),
        "display" => Ok(Section::Display),
        "display.short" => Ok(Section::ShortScale),
        "display.long" => Ok(Section::LongScale),
        "ui" => Ok(Section::Ui),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse a `key = value` line, dropping any trailing comment
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = match value.find('#') {
        Some(hash_pos) => value[..hash_pos].trim(),
        None => value.trim(),
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse an integer value, allowing `_` digit separators
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    let mut digits: heapless::String<24> = heapless::String::new();
    for ch in value.chars().filter(|c| *c != '_') {
        digits.push(ch).map_err(|_| ParseError::InvalidValue)?;
    }
    digits.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

fn apply_scale_value(scale: &mut RenderScale, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "origin_x" => scale.origin_x = parse_int(value)?,
        "origin_y" => scale.origin_y = parse_int(value)?,
        "col_pitch" => scale.col_pitch = parse_int(value)?,
        "row_pitch" => scale.row_pitch = parse_int(value)?,
        "cell_width" => scale.cell_width = parse_int(value)?,
        "cell_height" => scale.cell_height = parse_int(value)?,
        "glyph_gap" => scale.glyph_gap = parse_int(value)?,
        _ => {}
    }
    Ok(())
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut TimerConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Budget => match key {
            "min_s" => config.budget.min_s = parse_int(value)?,
            "max_s" => config.budget.max_s = parse_int(value)?,
            "step_s" => config.budget.step_s = parse_int(value)?,
            "default_s" => config.budget.default_s = parse_int(value)?,
            _ => {}
        },
        Section::ShortScale => apply_scale_value(&mut config.display.short, key, value)?,
        Section::LongScale => apply_scale_value(&mut config.display.long, key, value)?,
        Section::Ui => match key {
            "goodbye_ms" => config.ui.goodbye_ms = parse_int(value)?,
            "debounce_ms" => config.ui.debounce_ms = parse_int(value)?,
            "buttons_active_low" => config.ui.buttons_active_low = parse_bool(value)?,
            _ => {}
        },
        Section::Display | Section::Root => {
            // No keys of their own
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_section_header() {
        assert_eq!(parse_section_header("budget"), Ok(Section::Budget));
        assert_eq!(parse_section_header(" display.long "), Ok(Section::LongScale));
        assert_eq!(
            parse_section_header("display.medium"),
            Err(ParseError::InvalidSection)
        );
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(parse_key_value("min_s = 60"), Some(("min_s", "60")));
        assert_eq!(
            parse_key_value("step_s=30   # half a minute"),
            Some(("step_s", "30"))
        );
        assert_eq!(parse_key_value("min_s ="), None);
        assert_eq!(parse_key_value("just words"), None);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int::<u32>("3_000"), Ok(3000));
        assert_eq!(parse_int::<i32>("-4"), Ok(-4));
        assert_eq!(parse_int::<u32>("-4"), Err(ParseError::InvalidValue));
        assert_eq!(parse_int::<u32>("sixty"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(parse_config(""), Ok(TimerConfig::default()));
        assert_eq!(
            parse_config("# nothing here\n\n"),
            Ok(TimerConfig::default())
        );
    }

    #[test]
    fn test_parse_full_config() {
        let input = r#"
# Rest timer
[budget]
min_s = 30
max_s = 900
step_s = 15
default_s = 90

[display.short]
origin_x = 4
cell_width = 5

[display.long]
row_pitch = 6

[ui]
goodbye_ms = 1_500
debounce_ms = 25
buttons_active_low = false
"#;

        let config = parse_config(input).unwrap();
        assert_eq!(config.budget.min_s, 30);
        assert_eq!(config.budget.max_s, 900);
        assert_eq!(config.budget.step_s, 15);
        assert_eq!(config.budget.default_s, 90);
        assert_eq!(config.display.short.origin_x, 4);
        assert_eq!(config.display.short.cell_width, 5);
        assert_eq!(config.display.short.col_pitch, RenderScale::SHORT.col_pitch);
        assert_eq!(config.display.long.row_pitch, 6);
        assert_eq!(config.ui.goodbye_ms, 1500);
        assert_eq!(config.ui.debounce_ms, 25);
        assert!(!config.ui.buttons_active_low);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let config = parse_config("[budget]\ncolour = 3\nmin_s = 120\n").unwrap();
        assert_eq!(config.budget.min_s, 120);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_config("[sound]\n"),
            Err(ParseError::InvalidSection)
        );
        assert_eq!(
            parse_config("[budget]\nmin_s = soon\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[ui]\nbuttons_active_low = 1\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(parse_config("[budget]\nmin_s\n"), Err(ParseError::InvalidLine));
    }
}
