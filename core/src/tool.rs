use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Line width the pencil always draws with, whatever the slider says.
pub const PENCIL_WIDTH: f64 = 2.0;

/// Rectangle side, triangle size, circle diameter and text size are the
/// slider width times this.
pub const SIZE_MULTIPLIER: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Pencil,
    Brush,
    Eraser,
    Rectangle,
    Circle,
    Triangle,
    Text,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::Pencil,
        Tool::Brush,
        Tool::Eraser,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Triangle,
        Tool::Text,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Pencil => "pencil",
            Tool::Brush => "brush",
            Tool::Eraser => "eraser",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Triangle => "triangle",
            Tool::Text => "text",
        }
    }

    /// Pencil and brush build a path segment by segment.
    pub fn is_stroke(self) -> bool {
        matches!(self, Tool::Pencil | Tool::Brush)
    }

    pub fn line_width(self, slider_width: f64) -> f64 {
        match self {
            Tool::Pencil => PENCIL_WIDTH,
            _ => slider_width,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| InputError::UnknownTool(value.to_string()))
    }
}
