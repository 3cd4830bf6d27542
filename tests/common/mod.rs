#![allow(dead_code)]

use pixo_display::{
    Delay, DisplayConfig, Duration, MatrixDriver, PixoDisplay, Pixol, Rgb, TOTAL_PIXELS,
};

/// Call recorded by [`RecordingDriver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Begin,
    Brightness(u8),
    Set(usize, Rgb),
    Show,
    Fill(Rgb),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverFault;

/// Driver that records every call and can fail on the n-th refresh
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub calls: Vec<Call>,
    pub fail_on_show: Option<usize>,
    shows: usize,
}

impl RecordingDriver {
    pub fn failing_on_show(n: usize) -> Self {
        Self {
            fail_on_show: Some(n),
            ..Default::default()
        }
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }

    pub fn shows(&self) -> usize {
        self.count(|call| *call == Call::Show)
    }

    pub fn writes(&self) -> Vec<(usize, Rgb)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Set(index, color) => Some((*index, *color)),
                _ => None,
            })
            .collect()
    }

    /// Writes grouped by the refresh that followed them
    pub fn frames(&self) -> Vec<Vec<(usize, Rgb)>> {
        let mut frames = Vec::new();
        let mut current = Vec::new();
        for call in &self.calls {
            match call {
                Call::Set(index, color) => current.push((*index, *color)),
                Call::Show => frames.push(core::mem::take(&mut current)),
                _ => {}
            }
        }
        frames
    }
}

impl MatrixDriver for RecordingDriver {
    type Error = DriverFault;

    fn begin(&mut self) -> Result<(), Self::Error> {
        self.calls.push(Call::Begin);
        Ok(())
    }

    fn set_brightness(&mut self, brightness: u8) -> Result<(), Self::Error> {
        self.calls.push(Call::Brightness(brightness));
        Ok(())
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error> {
        assert!(index < TOTAL_PIXELS, "write outside the matrix: {index}");
        self.calls.push(Call::Set(index, color));
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.shows += 1;
        if self.fail_on_show == Some(self.shows) {
            return Err(DriverFault);
        }
        self.calls.push(Call::Show);
        Ok(())
    }

    fn fill(&mut self, color: Rgb) -> Result<(), Self::Error> {
        self.calls.push(Call::Fill(color));
        Ok(())
    }
}

/// Delay that only records the requested durations
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub waits: Vec<Duration>,
}

impl RecordingDelay {
    pub fn total(&self) -> Duration {
        self.waits
            .iter()
            .fold(Duration::from_millis(0), |acc, wait| acc + *wait)
    }
}

impl Delay for RecordingDelay {
    fn delay(&mut self, duration: Duration) {
        self.waits.push(duration);
    }
}

pub type TestDisplay = PixoDisplay<RecordingDriver, RecordingDelay>;

pub fn display() -> TestDisplay {
    PixoDisplay::new(
        RecordingDriver::default(),
        RecordingDelay::default(),
        DisplayConfig::default(),
    )
}

pub fn display_with_seed(seed: u64) -> TestDisplay {
    PixoDisplay::new(
        RecordingDriver::default(),
        RecordingDelay::default(),
        DisplayConfig {
            seed,
            ..Default::default()
        },
    )
}

/// Pixol where every pixel has a distinct lit color
#[allow(clippy::cast_possible_truncation)]
pub fn gradient() -> Pixol {
    let mut pixol = [Rgb::default(); TOTAL_PIXELS];
    for (index, pixel) in pixol.iter_mut().enumerate() {
        let half = (index / 2) as u8;
        *pixel = Rgb::new(half + 1, 255 - half, (index % 2) as u8 + 1);
    }
    pixol
}

pub fn solid(color: Rgb) -> Pixol {
    [color; TOTAL_PIXELS]
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
