#![no_std]

pub mod color;
pub mod display;
pub mod driver;
pub mod error;
pub mod layout;
mod notify;
pub mod pixol;
pub mod smart_leds_matrix;
mod transition;

pub use color::{DARK, Rgb, is_lit};
pub use display::{DisplayConfig, DisplayResult, DisplayTimings, PixoDisplay};
pub use driver::{BlockingDelay, Delay, MatrixDriver};
pub use error::{DisplayError, ImageLengthError};
pub use layout::MatrixLayout;
pub use pixol::{
    DARK_PIXOL, MATRIX_HEIGHT, MATRIX_WIDTH, PixelState, PixelStates, Pixol, TOTAL_PIXELS,
};
pub use smart_leds_matrix::{SmartLedsError, SmartLedsMatrix};

pub use embassy_time::Duration;
