//! View renderer
//!
//! Turns the controller's [`View`] into screen content. Label positions
//! follow a 128x64 panel with a 6x10 font.

use core::fmt::Write;

use heapless::String;
use restclock_core::config::DisplayConfig;
use restclock_core::format::{format_long, format_minutes, format_short};
use restclock_core::menu::MenuItem;
use restclock_core::View;

use crate::screen::Screen;

/// Left edge of menu labels
const MENU_TEXT_X: i32 = 20;

/// Left edge of the menu pointer
const MENU_POINTER_X: i32 = 10;

/// Top edge of each menu row, in [`MenuItem::ALL`] order
const MENU_ROWS_Y: [i32; 3] = [10, 25, 40];

/// Builds screens for views
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    display: DisplayConfig,
}

impl Renderer {
    /// Create a renderer with the given readout geometry
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    /// Build the screen for `view`
    pub fn render(&self, view: &View) -> Screen {
        let mut screen = Screen::new();

        match *view {
            View::Menu { selected } => render_menu(&mut screen, selected),
            View::SelectRest { budget_s } => render_rest_picker(&mut screen, budget_s),
            View::Countdown {
                remaining_s,
                paused,
            } => {
                screen.set_readout(format_short(remaining_s), self.display.short);
                if paused {
                    screen.add_text(5, 54, "paused");
                }
            }
            View::TotalTime { elapsed_s } => {
                screen.set_readout(format_long(elapsed_s), self.display.long);
            }
            View::Goodbye => screen.add_text(30, 40, "Goodbye"),
            View::Blank => {}
        }

        screen
    }
}

fn render_menu(screen: &mut Screen, selected: MenuItem) {
    for (item, y) in MenuItem::ALL.iter().zip(MENU_ROWS_Y) {
        screen.add_text(MENU_TEXT_X, y, item.label());
    }
    screen.add_text(MENU_TEXT_X, 55, "center-select");
    screen.add_text(MENU_POINTER_X, MENU_ROWS_Y[selected.index()], ">");
}

fn render_rest_picker(screen: &mut Screen, budget_s: u32) {
    let mut budget: String<24> = String::new();
    let _ = write!(budget, "<{}> minutes", format_minutes(budget_s));

    screen.add_text(5, 5, "Select rest time:");
    screen.add_text(5, 15, &budget);
    screen.add_text(5, 25, "left/right to change rest time");
    screen.add_text(5, 35, "a-start/resume");
    screen.add_text(5, 45, "b-back/pause");
}
