use embassy_time::Duration;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{DARK, Rgb, is_lit};
use crate::driver::{Delay, MatrixDriver};
use crate::error::DisplayError;
use crate::pixol::{MATRIX_WIDTH, PixelState, PixelStates, Pixol, TOTAL_PIXELS, validate};

/// Fixed animation delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTimings {
    /// Delay between frames of a popup
    pub popup_frame: Duration,
    /// Delay between frames of a scroll
    pub scroll_frame: Duration,
    /// Pause after a popup and after each scroll pass
    pub settle: Duration,
}

pub const DEFAULT_TIMINGS: DisplayTimings = DisplayTimings {
    popup_frame: Duration::from_millis(50),
    scroll_frame: Duration::from_millis(15),
    settle: Duration::from_millis(100),
};

impl Default for DisplayTimings {
    fn default() -> Self {
        DEFAULT_TIMINGS
    }
}

/// Seed for the default pixel picker
pub const DEFAULT_SEED: u64 = 0x5049_584f;

/// Configuration for the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Brightness applied by [`PixoDisplay::begin`]
    pub brightness: u8,
    pub timings: DisplayTimings,
    /// Seed of the random pixel picker used by [`PixoDisplay::new`]
    pub seed: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            brightness: u8::MAX,
            timings: DEFAULT_TIMINGS,
            seed: DEFAULT_SEED,
        }
    }
}

pub type DisplayResult<D> = Result<(), DisplayError<<D as MatrixDriver>::Error>>;

/// Pixo display - draws pixols on a 16x16 matrix
///
/// Owns the driver, a blocking delay and the random source used by
/// [`PixoDisplay::rand_change`]. Every routine blocks until its animation
/// has finished.
pub struct PixoDisplay<D: MatrixDriver, T: Delay, R: RngCore = SmallRng> {
    // External dependencies and configuration
    pub(crate) driver: D,
    pub(crate) delay: T,
    pub(crate) rng: R,
    pub(crate) config: DisplayConfig,

    // Internal state
    pub(crate) pixels: PixelStates,
}

impl<D: MatrixDriver, T: Delay> PixoDisplay<D, T, SmallRng> {
    /// Create a new display with a seeded [`SmallRng`]
    pub fn new(driver: D, delay: T, config: DisplayConfig) -> Self {
        let rng = SmallRng::seed_from_u64(config.seed);
        Self::with_rng(driver, delay, rng, config)
    }
}

impl<D: MatrixDriver, T: Delay, R: RngCore> PixoDisplay<D, T, R> {
    /// Create a new display with a custom random source
    pub fn with_rng(driver: D, delay: T, rng: R, config: DisplayConfig) -> Self {
        Self {
            driver,
            delay,
            rng,
            config,
            pixels: PixelStates::new(),
        }
    }

    /// Initialize the driver and apply the configured brightness
    pub fn begin(&mut self) -> DisplayResult<D> {
        self.driver.begin().map_err(DisplayError::Driver)?;
        self.driver
            .set_brightness(self.config.brightness)
            .map_err(DisplayError::Driver)?;
        self.pixels = PixelStates::new();

        #[cfg(feature = "esp32-log")]
        println!(
            "[PixoDisplay.begin] brightness set to {}",
            self.config.brightness
        );
        Ok(())
    }

    pub fn set_brightness(&mut self, brightness: u8) -> DisplayResult<D> {
        self.driver
            .set_brightness(brightness)
            .map_err(DisplayError::Driver)?;
        self.config.brightness = brightness;
        Ok(())
    }

    pub const fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Number of pixels touched by the last routine
    pub fn active_pixel_count(&self) -> usize {
        self.pixels.active_count()
    }

    /// Mark every pixel inactive
    pub fn reset_active_state(&mut self) {
        self.pixels.reset_active();
    }

    pub fn pixel_state(&self, index: usize) -> Option<&PixelState> {
        self.pixels.get(index)
    }

    pub const fn pixel_states(&self) -> &PixelStates {
        &self.pixels
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Tear the display apart, returning its dependencies
    pub fn release(self) -> (D, T, R) {
        (self.driver, self.delay, self.rng)
    }

    /// Display a pixol with no animation, then clear the matrix
    ///
    /// Lit pixels are marked active. With `use_stored_color` the active
    /// pixels are drawn with their cached color instead of the image color
    /// and every other pixel is drawn dark.
    pub fn show_pxl(
        &mut self,
        image: &[Rgb],
        hold: Duration,
        use_stored_color: bool,
    ) -> DisplayResult<D> {
        let image = validate(image)?;
        self.show_frame(image, hold, use_stored_color)
    }

    pub(crate) fn show_frame(
        &mut self,
        image: &Pixol,
        hold: Duration,
        use_stored_color: bool,
    ) -> DisplayResult<D> {
        self.pixels.reset_active();

        for (index, &color) in image.iter().enumerate() {
            if is_lit(color) {
                self.pixels.set_active(index, true);
            }

            if use_stored_color {
                let color = if self.pixels.is_active(index) {
                    self.pixels.cached_color(index)
                } else {
                    DARK
                };
                self.set_pixel(index, color)?;
            } else {
                self.pixels.cache_color(index, color);
                self.set_pixel(index, color)?;
            }
        }

        self.refresh()?;
        self.wait(hold);

        self.driver.fill(DARK).map_err(DisplayError::Driver)?;
        self.refresh()
    }

    /// Write every pixel of `image` and cache its colors
    pub(crate) fn draw(&mut self, image: &Pixol) -> DisplayResult<D> {
        for (index, &color) in image.iter().enumerate() {
            self.pixels.cache_color(index, color);
            self.set_pixel(index, color)?;
        }
        Ok(())
    }

    /// Write `image` moved down by `rows` rows (up when negative)
    ///
    /// Positions the shifted image does not cover are written dark, so
    /// every call issues one write per matrix index.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub(crate) fn draw_shifted(&mut self, image: &Pixol, rows: i32) -> DisplayResult<D> {
        let offset = rows * MATRIX_WIDTH as i32;
        for index in 0..TOTAL_PIXELS {
            let source = index as i32 - offset;
            let color = if (0..TOTAL_PIXELS as i32).contains(&source) {
                image[source as usize]
            } else {
                DARK
            };
            self.set_pixel(index, color)?;
        }
        Ok(())
    }

    pub(crate) fn set_pixel(&mut self, index: usize, color: Rgb) -> DisplayResult<D> {
        self.driver
            .set_pixel_color(index, color)
            .map_err(DisplayError::Driver)
    }

    pub(crate) fn refresh(&mut self) -> DisplayResult<D> {
        self.driver.show().map_err(DisplayError::Driver)
    }

    pub(crate) fn wait(&mut self, duration: Duration) {
        self.delay.delay(duration);
    }
}
