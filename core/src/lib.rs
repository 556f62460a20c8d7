//! Drawing controller for the sketchboard canvas.
//!
//! Everything here is platform independent: the browser client supplies a
//! [`surface::Surface`] backed by a 2D canvas context and forwards pointer and
//! control events to a [`board::Board`].

pub mod background;
pub mod board;
pub mod config;
pub mod error;
pub mod geometry;
pub mod render;
pub mod style;
pub mod surface;
pub mod tool;

pub use board::{Board, Download, FontStatus, ToolChange};
pub use config::{BoardConfig, Features, StampMode};
pub use error::{BoardError, ConfigError, InputError, SurfaceError};
pub use surface::Surface;
pub use tool::Tool;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
