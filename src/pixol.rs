//! Pixol images and per-pixel state tracking
//!
//! A pixol is one full frame for the matrix: 256 colors in matrix index
//! order, row by row from the top-left corner.

use crate::color::{DARK, Rgb, rgb_from_triple};
use crate::error::ImageLengthError;

/// Matrix width in pixels
pub const MATRIX_WIDTH: usize = 16;

/// Matrix height in pixels
pub const MATRIX_HEIGHT: usize = 16;

/// Total number of LEDs on the matrix
pub const TOTAL_PIXELS: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// One full-matrix frame
pub type Pixol = [Rgb; TOTAL_PIXELS];

/// Frame with every pixel off
pub const DARK_PIXOL: Pixol = [DARK; TOTAL_PIXELS];

/// Check that `image` covers exactly the whole matrix
pub fn validate(image: &[Rgb]) -> Result<&Pixol, ImageLengthError> {
    <&Pixol>::try_from(image).map_err(|_| ImageLengthError {
        expected: TOTAL_PIXELS,
        actual: image.len(),
    })
}

/// Build a pixol from `[r, g, b]` triples
pub fn from_triples(triples: &[[u8; 3]]) -> Result<Pixol, ImageLengthError> {
    if triples.len() != TOTAL_PIXELS {
        return Err(ImageLengthError {
            expected: TOTAL_PIXELS,
            actual: triples.len(),
        });
    }
    let mut pixol = DARK_PIXOL;
    for (pixel, triple) in pixol.iter_mut().zip(triples) {
        *pixel = rgb_from_triple(*triple);
    }
    Ok(pixol)
}

/// Matrix index of the pixel at column `x`, row `y`
///
/// Returns `None` outside the matrix.
pub const fn index_of(x: usize, y: usize) -> Option<usize> {
    if x >= MATRIX_WIDTH || y >= MATRIX_HEIGHT {
        return None;
    }
    Some(y * MATRIX_WIDTH + x)
}

/// State of a single physical pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelState {
    /// Matrix index of the pixel
    pub id: u8,
    /// Last color a display routine wrote to this pixel
    pub color: Rgb,
    /// Whether the pixel has been touched by the current routine
    pub active: bool,
}

/// State table covering every pixel of the matrix
#[derive(Debug, Clone)]
pub struct PixelStates {
    inner: [PixelState; TOTAL_PIXELS],
}

impl PixelStates {
    /// Create a table with every pixel inactive and dark
    #[allow(clippy::cast_possible_truncation)]
    pub fn new() -> Self {
        let mut inner = [PixelState {
            id: 0,
            color: DARK,
            active: false,
        }; TOTAL_PIXELS];
        for (index, state) in inner.iter_mut().enumerate() {
            state.id = index as u8;
        }
        Self { inner }
    }

    /// Number of active pixels
    pub fn active_count(&self) -> usize {
        self.inner.iter().filter(|state| state.active).count()
    }

    /// Mark every pixel inactive
    ///
    /// Cached colors are kept.
    pub fn reset_active(&mut self) {
        for state in &mut self.inner {
            state.active = false;
        }
    }

    pub fn get(&self, index: usize) -> Option<&PixelState> {
        self.inner.get(index)
    }

    pub(crate) fn is_active(&self, index: usize) -> bool {
        self.inner[index].active
    }

    pub(crate) fn set_active(&mut self, index: usize, active: bool) {
        self.inner[index].active = active;
    }

    pub(crate) fn cached_color(&self, index: usize) -> Rgb {
        self.inner[index].color
    }

    pub(crate) fn cache_color(&mut self, index: usize, color: Rgb) {
        self.inner[index].color = color;
    }

    pub fn iter(&self) -> impl Iterator<Item = &PixelState> {
        self.inner.iter()
    }
}

impl Default for PixelStates {
    fn default() -> Self {
        Self::new()
    }
}
