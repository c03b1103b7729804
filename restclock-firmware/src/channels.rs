//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicBool;

use restclock_core::InputEvent;
use restclock_display::Screen;

/// Channel capacity for button presses
const INPUT_CHANNEL_SIZE: usize = 8;

/// Debounced button presses from the input task
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Latest screen content, written by the controller and drawn by the display task
pub static SCREEN_BUFFER: Mutex<CriticalSectionRawMutex, Screen> = Mutex::new(Screen::new());

/// Signal that the screen buffer holds new content
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal that the panel should be switched off
pub static PANEL_OFF: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Set once the controller reaches its final state
pub static HALTED: AtomicBool = AtomicBool::new(false);
