//! The drawing surface controller.
//!
//! `Board` owns the surface and every piece of drawing state (tool, color,
//! slider width, text, font, triangle rotation, background cycle, session).
//! Input arrives already parsed into canvas coordinates; control values
//! arrive as the raw strings the controls hold and are validated here.

use crate::background::BackgroundCycle;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::geometry::{normalize_point, text_size};
use crate::render::{
    begin_stroke, draw_segment, draw_shape, draw_text, erase_at, fill_background, font_spec,
};
use crate::style::{
    sanitize_angle, sanitize_color, sanitize_width, StrokeStyle, DEFAULT_COLOR, DEFAULT_WIDTH,
};
use crate::surface::{ImageFormat, Surface};
use crate::tool::Tool;
use crate::{Point, StampMode};

pub const EXPORT_FILENAME: &str = "drawing.png";
pub const FALLBACK_FONT_FAMILY: &str = "sans-serif";

#[derive(Clone, Copy, Debug, PartialEq)]
enum Session {
    Idle,
    Active { last: Point },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStatus {
    Loaded,
    Fallback,
}

/// What the page must update after a tool switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolChange {
    pub tool: Tool,
    pub text_controls_visible: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Download {
    pub filename: &'static str,
    pub mime: &'static str,
    pub href: String,
}

pub struct Board<S: Surface> {
    surface: S,
    config: BoardConfig,
    tool: Tool,
    color: String,
    slider_width: f64,
    text: String,
    font_family: String,
    rotation: f64,
    background: BackgroundCycle,
    session: Session,
}

impl<S: Surface> Board<S> {
    pub fn new(surface: S, config: BoardConfig) -> Self {
        let font_family = config.font_family.clone();
        Self {
            surface,
            config,
            tool: Tool::Pencil,
            color: DEFAULT_COLOR.to_string(),
            slider_width: DEFAULT_WIDTH,
            text: String::new(),
            font_family,
            rotation: 0.0,
            background: BackgroundCycle::default(),
            session: Session::Idle,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn slider_width(&self) -> f64 {
        self.slider_width
    }

    /// Width the active tool strokes with.
    pub fn line_width(&self) -> f64 {
        self.tool.line_width(self.slider_width)
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.session, Session::Active { .. })
    }

    pub fn background_index(&self) -> usize {
        self.background.index()
    }

    /// Size the surface to the viewport once fonts have settled.
    pub fn initialize(&mut self, width: f64, height: f64, font: FontStatus) {
        if font == FontStatus::Fallback {
            log::warn!(
                "font `{}` did not load, falling back to {FALLBACK_FONT_FAMILY}",
                self.font_family
            );
            self.font_family = FALLBACK_FONT_FAMILY.to_string();
        }
        self.surface.resize(width, height);
        self.surface.clear();
        self.surface
            .set_font(&font_spec(text_size(self.slider_width), &self.font_family));
        if self.config.features.sunset && self.config.features.sunset_on_start {
            fill_background(&mut self.surface, &self.color);
        }
        log::info!("Board ready {width}x{height} tool={}", self.tool);
    }

    pub fn pointer_down(&mut self, point: Point) {
        let Some(point) = normalize_point(point) else {
            return;
        };
        self.session = Session::Active { last: point };
        match self.tool {
            Tool::Pencil | Tool::Brush => begin_stroke(&mut self.surface, point),
            Tool::Eraser => {
                let width = self.line_width();
                erase_at(&mut self.surface, point, width);
            }
            Tool::Text => self.stamp(point),
            Tool::Rectangle | Tool::Circle | Tool::Triangle => {
                if self.config.stamp == StampMode::Once {
                    self.stamp(point);
                }
            }
        }
    }

    pub fn pointer_move(&mut self, point: Point) {
        if !self.is_drawing() {
            return;
        }
        let Some(point) = normalize_point(point) else {
            return;
        };
        self.session = Session::Active { last: point };
        match self.tool {
            Tool::Pencil | Tool::Brush => {
                let style = self.style();
                draw_segment(&mut self.surface, point, &style);
            }
            Tool::Eraser => {
                let width = self.line_width();
                erase_at(&mut self.surface, point, width);
            }
            _ => {
                if self.config.stamp == StampMode::Continuous {
                    self.stamp(point);
                }
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.session = Session::Idle;
        self.surface.begin_path();
    }

    fn style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.color.clone(),
            width: self.line_width(),
        }
    }

    fn stamp(&mut self, point: Point) {
        let style = self.style();
        if self.tool == Tool::Text {
            draw_text(
                &mut self.surface,
                &self.text,
                point,
                &self.font_family,
                &style,
            );
        } else {
            let rotation = self.config.features.rotation.then_some(self.rotation);
            draw_shape(&mut self.surface, self.tool, point, &style, rotation);
        }
        log::trace!("stamp {} at ({}, {})", self.tool, point.x, point.y);
    }

    pub fn select_tool(&mut self, name: &str) -> Result<ToolChange, BoardError> {
        let tool = name.parse::<Tool>()?;
        self.set_tool(tool)
    }

    pub fn set_tool(&mut self, tool: Tool) -> Result<ToolChange, BoardError> {
        if !self.config.features.allows(tool) {
            return Err(BoardError::ToolDisabled(tool));
        }
        self.tool = tool;
        log::debug!("tool={tool} line_width={}", self.line_width());
        Ok(ToolChange {
            tool,
            text_controls_visible: tool == Tool::Text,
        })
    }

    pub fn set_color(&mut self, value: &str) {
        self.color = sanitize_color(value);
    }

    pub fn set_width(&mut self, value: &str) -> f64 {
        self.slider_width = sanitize_width(value);
        self.slider_width
    }

    pub fn set_text(&mut self, value: &str) {
        self.text = value.to_string();
    }

    pub fn set_font_family(&mut self, value: &str) {
        let value = value.trim();
        self.font_family = if value.is_empty() {
            self.config.font_family.clone()
        } else {
            value.to_string()
        };
    }

    pub fn set_rotation(&mut self, value: &str) -> f64 {
        self.rotation = sanitize_angle(value);
        self.rotation
    }

    /// Replace the drawing with the next sunset gradient.
    pub fn cycle_background(&mut self) -> Result<&'static str, BoardError> {
        if !self.config.features.sunset {
            return Err(BoardError::BackgroundDisabled);
        }
        let color = self.background.advance();
        fill_background(&mut self.surface, color);
        log::debug!("background={color}");
        Ok(color)
    }

    /// Wipe the surface. A stroke in progress continues from the last
    /// pointer position.
    pub fn clear(&mut self) {
        self.surface.clear();
        if let Session::Active { last } = self.session {
            if self.tool.is_stroke() {
                begin_stroke(&mut self.surface, last);
            }
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        log::info!(
            "Resizing surface from {}x{} to {width}x{height}",
            self.surface.width(),
            self.surface.height()
        );
        self.surface.resize(width, height);
        self.surface.clear();
    }

    pub fn export(&self) -> Result<Download, BoardError> {
        let format = ImageFormat::Png;
        let href = self.surface.to_data_url(format)?;
        Ok(Download {
            filename: EXPORT_FILENAME,
            mime: format.mime(),
            href,
        })
    }
}
