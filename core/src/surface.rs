//! The immediate-mode 2D drawing surface the board draws through.
//!
//! Mirrors the subset of `CanvasRenderingContext2d` the board needs. The
//! surface owns the current path; the board never keeps geometry around.

use crate::error::SurfaceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
}

impl ImageFormat {
    pub fn mime(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Gradient running from the top edge down to `height`.
    pub fn vertical(height: f64) -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            x1: 0.0,
            y1: height,
            stops: Vec::new(),
        }
    }

    pub fn with_stop(mut self, offset: f64, color: impl Into<String>) -> Self {
        self.stops.push(ColorStop {
            offset,
            color: color.into(),
        });
        self
    }
}

pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    /// Resizing drops the pixel buffer, like setting a canvas element's size.
    fn resize(&mut self, width: f64, height: f64);

    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_font(&mut self, font: &str);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn stroke(&mut self);

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_rect_with_gradient(
        &mut self,
        gradient: &LinearGradient,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    );
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);

    /// Encode the current pixels as a `data:` URL.
    fn to_data_url(&self, format: ImageFormat) -> Result<String, SurfaceError>;

    fn clear(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.clear_rect(0.0, 0.0, width, height);
    }
}
