//! Notification routines
//!
//! Short animations that present a single pixol: popup, scroll and blink.

use embassy_time::Duration;
use rand::RngCore;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::display::{DisplayResult, PixoDisplay};
use crate::driver::{Delay, MatrixDriver};
use crate::pixol::{DARK_PIXOL, MATRIX_HEIGHT, Pixol, validate};

#[allow(clippy::cast_possible_wrap)]
const LAST_ROW: i32 = MATRIX_HEIGHT as i32 - 1;

#[allow(clippy::cast_possible_wrap)]
const ROWS: i32 = MATRIX_HEIGHT as i32;

impl<D: MatrixDriver, T: Delay, R: RngCore> PixoDisplay<D, T, R> {
    /// Slide a pixol up into view, hold it, and slide it back down
    pub fn notify_popup(&mut self, image: &[Rgb], hold: Duration) -> DisplayResult<D> {
        let image = validate(image)?;
        let frame = self.config.timings.popup_frame;

        self.slide_in(image, frame)?;
        self.wait(hold);

        for rows in 0..=ROWS {
            self.shifted_frame(image, rows, frame)?;
        }

        self.wait(self.config.timings.settle);
        Ok(())
    }

    /// Scroll a pixol upwards into view and upwards out of it
    ///
    /// The pass runs `loops + 1` times.
    pub fn notify_scroll(
        &mut self,
        image: &[Rgb],
        hold: Duration,
        loops: u32,
    ) -> DisplayResult<D> {
        let image = validate(image)?;
        let frame = self.config.timings.scroll_frame;

        for _pass in 0..=loops {
            #[cfg(feature = "esp32-log")]
            println!("[PixoDisplay.notify_scroll] pass {} of {}", _pass + 1, loops + 1);

            self.slide_in(image, frame)?;
            self.wait(hold);

            for rows in (-ROWS..=0).rev() {
                self.shifted_frame(image, rows, frame)?;
            }

            self.wait(self.config.timings.settle);
        }
        Ok(())
    }

    /// Flash a pixol on and off `loops + 1` times
    pub fn notify_blink(
        &mut self,
        image: &[Rgb],
        hold: Duration,
        loops: u32,
        use_stored_color: bool,
    ) -> DisplayResult<D> {
        let image = validate(image)?;

        for _ in 0..=loops {
            self.show_frame(image, hold, use_stored_color)?;
            self.show_frame(&DARK_PIXOL, hold, use_stored_color)?;
        }
        Ok(())
    }

    /// Move the image from the bottom edge up to its resting place
    fn slide_in(&mut self, image: &Pixol, frame: Duration) -> DisplayResult<D> {
        for rows in (0..=LAST_ROW).rev() {
            self.shifted_frame(image, rows, frame)?;
        }
        Ok(())
    }

    fn shifted_frame(&mut self, image: &Pixol, rows: i32, frame: Duration) -> DisplayResult<D> {
        self.draw_shifted(image, rows)?;
        self.refresh()?;
        self.wait(frame);
        Ok(())
    }
}
