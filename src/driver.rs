//! Hardware capabilities the display depends on

use embassy_time::Duration;

use crate::color::Rgb;

/// Abstract LED matrix driver
///
/// Implement this trait to support different hardware platforms.
/// The display is generic over this trait.
pub trait MatrixDriver {
    type Error;

    /// Bring up the hardware
    fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Set the global brightness (0-255)
    fn set_brightness(&mut self, brightness: u8) -> Result<(), Self::Error>;

    /// Set a single pixel by matrix index
    ///
    /// The color is latched until the next [`MatrixDriver::show`].
    fn set_pixel_color(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error>;

    /// Push latched colors to the LEDs
    fn show(&mut self) -> Result<(), Self::Error>;

    /// Set every pixel to one color
    fn fill(&mut self, color: Rgb) -> Result<(), Self::Error>;
}

/// Blocking delay provider
pub trait Delay {
    fn delay(&mut self, duration: Duration);
}

/// Delay that busy-waits on the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingDelay;

impl Delay for BlockingDelay {
    fn delay(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}
