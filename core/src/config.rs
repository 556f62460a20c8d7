//! Board configuration.
//!
//! Which optional features a page exposes (shapes, text, triangle rotation,
//! touch input, sunset background) is a configuration choice rather than a
//! separate build. The client reads it as JSON from the canvas `data-config`
//! attribute; every field has a default.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::tool::Tool;

pub const DEFAULT_FONT_FAMILY: &str = "'Dancing Script', cursive";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Features {
    pub shapes: bool,
    pub text: bool,
    pub rotation: bool,
    pub touch: bool,
    pub sunset: bool,
    /// Paint the sunset gradient once the board is initialized.
    pub sunset_on_start: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            shapes: true,
            text: true,
            rotation: true,
            touch: true,
            sunset: true,
            sunset_on_start: false,
        }
    }
}

impl Features {
    pub fn allows(&self, tool: Tool) -> bool {
        match tool {
            Tool::Pencil | Tool::Brush | Tool::Eraser => true,
            Tool::Rectangle | Tool::Circle | Tool::Triangle => self.shapes,
            Tool::Text => self.text,
        }
    }
}

/// How shape and text tools react while the pointer stays down.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StampMode {
    /// Stamp again on every pointer move.
    #[default]
    Continuous,
    /// Stamp once when the pointer goes down.
    Once,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    pub features: Features,
    pub stamp: StampMode,
    pub font_family: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            features: Features::default(),
            stamp: StampMode::default(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}
