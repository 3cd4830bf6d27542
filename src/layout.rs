use crate::pixol::{MATRIX_WIDTH, TOTAL_PIXELS};

/// Wiring order of the LEDs on the matrix
///
/// Logical indices always run row by row from the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatrixLayout {
    /// Every row runs left to right
    #[default]
    Progressive,
    /// Even rows run left to right, odd rows right to left
    Serpentine,
}

impl MatrixLayout {
    /// Position on the LED chain of a logical matrix index
    ///
    /// Returns `None` outside the matrix.
    pub const fn physical_index(self, index: usize) -> Option<usize> {
        if index >= TOTAL_PIXELS {
            return None;
        }
        let row = index / MATRIX_WIDTH;
        let col = index % MATRIX_WIDTH;
        match self {
            Self::Serpentine if row % 2 == 1 => Some(row * MATRIX_WIDTH + (MATRIX_WIDTH - 1 - col)),
            Self::Progressive | Self::Serpentine => Some(index),
        }
    }
}
