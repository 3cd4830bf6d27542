//! [`MatrixDriver`] on top of a `smart-leds` strip driver
//!
//! Maps logical indices through a [`MatrixLayout`] into a frame buffer
//! and pushes the whole buffer to the strip on every refresh.

use smart_leds::{SmartLedsWrite, brightness};

use crate::color::Rgb;
use crate::driver::MatrixDriver;
use crate::layout::MatrixLayout;
use crate::pixol::{DARK_PIXOL, Pixol};

/// Error returned by [`SmartLedsMatrix`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartLedsError<E> {
    /// Index does not address a pixel of the matrix
    OutOfRange(usize),
    /// The strip driver failed to write the frame
    Write(E),
}

/// Matrix driver backed by any [`SmartLedsWrite`] implementation
pub struct SmartLedsMatrix<W> {
    writer: W,
    layout: MatrixLayout,
    brightness: u8,
    /// Colors in physical chain order
    frame: Pixol,
}

impl<W> SmartLedsMatrix<W> {
    pub const fn new(writer: W, layout: MatrixLayout) -> Self {
        Self {
            writer,
            layout,
            brightness: u8::MAX,
            frame: DARK_PIXOL,
        }
    }

    /// Latched colors in physical chain order
    pub const fn frame(&self) -> &Pixol {
        &self.frame
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> MatrixDriver for SmartLedsMatrix<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    type Error = SmartLedsError<W::Error>;

    fn begin(&mut self) -> Result<(), Self::Error> {
        self.frame = DARK_PIXOL;
        Ok(())
    }

    fn set_brightness(&mut self, brightness: u8) -> Result<(), Self::Error> {
        self.brightness = brightness;
        Ok(())
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error> {
        let physical = self
            .layout
            .physical_index(index)
            .ok_or(SmartLedsError::OutOfRange(index))?;
        self.frame[physical] = color;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.writer
            .write(brightness(self.frame.iter().copied(), self.brightness))
            .map_err(SmartLedsError::Write)
    }

    fn fill(&mut self, color: Rgb) -> Result<(), Self::Error> {
        self.frame.fill(color);
        Ok(())
    }
}
