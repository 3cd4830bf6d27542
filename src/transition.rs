//! Pixol to pixol transitions
//!
//! Both transitions draw the source image at once, hold it, then replace
//! it with the destination image one pixel per refresh.

use embassy_time::Duration;
use rand::{Rng, RngCore};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::display::{DisplayResult, PixoDisplay};
use crate::driver::{Delay, MatrixDriver};
use crate::pixol::{Pixol, TOTAL_PIXELS, validate};

impl<D: MatrixDriver, T: Delay, R: RngCore> PixoDisplay<D, T, R> {
    /// Change from `src` to `dst` in scanline order
    ///
    /// # Arguments
    /// * `hold` - Time the source is shown before, and the destination after, the transition
    /// * `step` - Delay between two drawn pixels
    pub fn scan_change(
        &mut self,
        src: &[Rgb],
        dst: &[Rgb],
        hold: Duration,
        step: Duration,
    ) -> DisplayResult<D> {
        let src = validate(src)?;
        let dst = validate(dst)?;

        self.present_source(src, hold)?;

        for (index, &color) in dst.iter().enumerate() {
            self.pixels.set_active(index, true);
            self.pixels.cache_color(index, color);
            self.set_pixel(index, color)?;
            self.refresh()?;
            self.wait(step);
        }

        self.wait(hold);
        Ok(())
    }

    /// Change from `src` to `dst` picking pixels in random order
    ///
    /// Every pixel is drawn exactly once. Picks that land on an already
    /// drawn pixel are rejected and drawn again.
    pub fn rand_change(
        &mut self,
        src: &[Rgb],
        dst: &[Rgb],
        hold: Duration,
        step: Duration,
    ) -> DisplayResult<D> {
        let src = validate(src)?;
        let dst = validate(dst)?;

        self.present_source(src, hold)?;

        let mut remaining = TOTAL_PIXELS;
        while remaining > 0 {
            let index = self.pick_inactive();
            self.pixels.set_active(index, true);
            self.pixels.cache_color(index, dst[index]);
            self.set_pixel(index, dst[index])?;
            self.refresh()?;
            self.wait(step);
            remaining -= 1;
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[PixoDisplay.rand_change] drew {} pixels",
            self.pixels.active_count()
        );

        self.wait(hold);
        Ok(())
    }

    /// Reset the active state and show the source image
    fn present_source(&mut self, src: &Pixol, hold: Duration) -> DisplayResult<D> {
        self.pixels.reset_active();
        self.draw(src)?;
        self.refresh()?;
        self.wait(hold);
        Ok(())
    }

    /// Uniformly pick a pixel that has not been drawn yet
    ///
    /// Must not be called once every pixel is active.
    fn pick_inactive(&mut self) -> usize {
        loop {
            let index = self.rng.gen_range(0..TOTAL_PIXELS);
            if !self.pixels.is_active(index) {
                return index;
            }
        }
    }
}
