//! OLED output task
//!
//! Draws the shared screen buffer into the SSD1306 frame buffer and
//! pushes it over I2C whenever the controller publishes an update.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;
use restclock_display::Ssd1306;

use crate::channels::{PANEL_OFF, SCREEN_BUFFER, SCREEN_UPDATE};

/// Concrete panel type on this board
pub type Panel = Ssd1306<I2c<'static, I2C1, Async>>;

/// Display task - initializes the panel and redraws on demand
#[embassy_executor::task]
pub async fn display_task(mut panel: Panel) {
    info!("Display task started");

    if let Err(e) = panel.init().await {
        error!("OLED init failed: {:?}", e);
    }

    loop {
        match select(SCREEN_UPDATE.wait(), PANEL_OFF.wait()).await {
            Either::First(()) => draw_screen(&mut panel).await,
            Either::Second(()) => break,
        }
    }

    panel.buffer_mut().clear();
    if let Err(e) = panel.flush().await {
        warn!("Failed to blank OLED: {:?}", e);
    }
    if let Err(e) = panel.set_display_on(false).await {
        warn!("Failed to switch OLED off: {:?}", e);
    }

    info!("Display off, parking core");
    loop {
        cortex_m::asm::wfi();
    }
}

/// Draw the latest screen and flush it to the panel
async fn draw_screen(panel: &mut Panel) {
    {
        let mut screen = SCREEN_BUFFER.lock().await;
        if !screen.is_dirty() {
            return;
        }

        if let Err(e) = screen.draw(panel.buffer_mut()) {
            warn!("Failed to render screen: {:?}", e);
            return;
        }
        screen.mark_clean();
    }

    if let Err(e) = panel.flush().await {
        warn!("Failed to flush OLED: {:?}", e);
    }
}
