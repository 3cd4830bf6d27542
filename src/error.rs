use core::fmt;

/// Error returned by the display routines
///
/// `E` is the error type of the underlying [`crate::MatrixDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError<E> {
    /// An image does not cover exactly the whole matrix
    ImageLength { expected: usize, actual: usize },
    /// The driver rejected a call
    Driver(E),
}

impl<E: fmt::Display> fmt::Display for DisplayError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLength { expected, actual } => {
                write!(f, "image has {actual} pixels, expected {expected}")
            }
            Self::Driver(err) => write!(f, "driver error: {err}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for DisplayError<E> {}

/// Error returned when an image does not cover exactly the whole matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLengthError {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for ImageLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image has {} pixels, expected {}", self.actual, self.expected)
    }
}

impl core::error::Error for ImageLengthError {}

impl<E> From<ImageLengthError> for DisplayError<E> {
    fn from(err: ImageLengthError) -> Self {
        Self::ImageLength {
            expected: err.expected,
            actual: err.actual,
        }
    }
}
