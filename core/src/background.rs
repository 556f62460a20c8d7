use crate::surface::LinearGradient;

pub const SUNSET_PALETTE: [&str; 7] = ["orange", "red", "yellow", "green", "blue", "purple", "pink"];
pub const SUNSET_ACCENT: &str = "rgb(255, 140, 0)";

/// Top-to-bottom gradient from `color` to the warm accent.
pub fn sunset_gradient(color: &str, height: f64) -> LinearGradient {
    LinearGradient::vertical(height)
        .with_stop(0.0, color)
        .with_stop(1.0, SUNSET_ACCENT)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackgroundCycle {
    index: usize,
}

impl BackgroundCycle {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the color for this press and moves on, wrapping after the last entry.
    pub fn advance(&mut self) -> &'static str {
        let color = SUNSET_PALETTE[self.index];
        self.index = (self.index + 1) % SUNSET_PALETTE.len();
        color
    }
}
