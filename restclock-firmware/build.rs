//! Build script for restclock-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates timer.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sections the firmware parser understands
const KNOWN_SECTIONS: [&str; 3] = ["budget", "display", "ui"];

/// Sub-tables of `[display]`
const SCALE_TABLES: [&str; 2] = ["short", "long"];

/// Largest pitch, glyph gap or origin offset the firmware accepts
const MAX_SCALE_PX: i64 = 128;

/// Keys of a readout scale table
const SCALE_KEYS: [&str; 7] = [
    "origin_x",
    "origin_y",
    "col_pitch",
    "row_pitch",
    "cell_width",
    "cell_height",
    "glyph_gap",
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate timer.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=timer.toml");

    let config_path = Path::new("timer.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: timer.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds timer.toml as its configuration.            ║\n\
            ║  Please create one in the restclock-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read timer.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in timer.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_budget(&config, &mut errors);
    validate_display(&config, &mut errors);
    validate_ui(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in timer.toml                      ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=timer.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reject sections the on-device parser would refuse
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };

    for (name, value) in root {
        if !KNOWN_SECTIONS.contains(&name.as_str()) {
            errors.push(format!("Unknown section [{}]", name));
        } else if !value.is_table() {
            errors.push(format!("'{}' must be a section", name));
        }
    }

    if let Some(display) = config.get("display").and_then(|d| d.as_table()) {
        for (name, value) in display {
            if value.is_table() && !SCALE_TABLES.contains(&name.as_str()) {
                errors.push(format!("Unknown section [display.{}]", name));
            }
        }
    }
}

/// Read an optional non-negative integer key
fn get_unsigned(table: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> Option<i64> {
    match table.get(key) {
        None => None,
        Some(toml::Value::Integer(v)) if *v >= 0 && *v <= u32::MAX as i64 => Some(*v),
        Some(_) => {
            errors.push(format!("[{}] {} must be a non-negative integer", section, key));
            None
        }
    }
}

/// Validate the rest budget bounds
fn validate_budget(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(budget) = config.get("budget") else {
        return;
    };

    // Defaults match the firmware's built-in budget
    let min = get_unsigned(budget, "budget", "min_s", errors).unwrap_or(60);
    let max = get_unsigned(budget, "budget", "max_s", errors).unwrap_or(600);
    let step = get_unsigned(budget, "budget", "step_s", errors).unwrap_or(30);
    let default = get_unsigned(budget, "budget", "default_s", errors).unwrap_or(min);

    if min == 0 {
        errors.push("[budget] min_s must be at least 1".to_string());
    }
    if step == 0 {
        errors.push("[budget] step_s must be at least 1".to_string());
    }
    if min > max {
        errors.push("[budget] min_s must not exceed max_s".to_string());
    }
    if default < min || default > max {
        errors.push("[budget] default_s must lie within min_s..=max_s".to_string());
    }
}

/// Validate the readout scales
fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = config.get("display") else {
        return;
    };

    for name in SCALE_TABLES {
        let Some(scale) = display.get(name) else {
            continue;
        };
        let section = format!("display.{}", name);

        if let Some(table) = scale.as_table() {
            for key in table.keys() {
                if !SCALE_KEYS.contains(&key.as_str()) {
                    errors.push(format!("[{}] unknown key '{}'", section, key));
                }
            }
        }

        for key in ["origin_x", "origin_y"] {
            match scale.get(key) {
                Some(toml::Value::Integer(v)) if v.abs() > MAX_SCALE_PX => errors.push(format!(
                    "[{}] {} must be within -{}..={}",
                    section, key, MAX_SCALE_PX, MAX_SCALE_PX
                )),
                Some(value) if !value.is_integer() => {
                    errors.push(format!("[{}] {} must be an integer", section, key));
                }
                _ => {}
            }
        }

        let col_pitch = get_unsigned(scale, &section, "col_pitch", errors);
        let row_pitch = get_unsigned(scale, &section, "row_pitch", errors);
        let cell_width = get_unsigned(scale, &section, "cell_width", errors);
        let cell_height = get_unsigned(scale, &section, "cell_height", errors);
        let glyph_gap = get_unsigned(scale, &section, "glyph_gap", errors);

        for (key, value) in [
            ("col_pitch", col_pitch),
            ("row_pitch", row_pitch),
            ("glyph_gap", glyph_gap),
        ] {
            if value.is_some_and(|v| v > MAX_SCALE_PX) {
                errors.push(format!("[{}] {} must be at most {}", section, key, MAX_SCALE_PX));
            }
        }

        for (key, value) in [
            ("col_pitch", col_pitch),
            ("row_pitch", row_pitch),
            ("cell_width", cell_width),
            ("cell_height", cell_height),
        ] {
            if value == Some(0) {
                errors.push(format!("[{}] {} must be at least 1", section, key));
            }
        }

        if let (Some(w), Some(pitch)) = (cell_width, col_pitch) {
            if w > pitch {
                errors.push(format!("[{}] cell_width must not exceed col_pitch", section));
            }
        }
        if let (Some(h), Some(pitch)) = (cell_height, row_pitch) {
            if h > pitch {
                errors.push(format!("[{}] cell_height must not exceed row_pitch", section));
            }
        }
    }
}

/// Validate UI timing
fn validate_ui(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(ui) = config.get("ui") else {
        return;
    };

    get_unsigned(ui, "ui", "goodbye_ms", errors);
    if let Some(debounce) = get_unsigned(ui, "ui", "debounce_ms", errors) {
        if debounce > 1000 {
            errors.push("[ui] debounce_ms must be 0-1000".to_string());
        }
    }
    if let Some(value) = ui.get("buttons_active_low") {
        if !value.is_bool() {
            errors.push("[ui] buttons_active_low must be true or false".to_string());
        }
    }
}
