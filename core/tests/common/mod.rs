//! In-memory surface for integration tests.
//!
//! Records every call, and rasterizes the rect-shaped ones (clear, gradient
//! fill) into an RGBA buffer so erase and export can be checked per pixel.
//! Paths and text are recorded only.

#![allow(dead_code)]

use std::io::Cursor;

use base64::Engine;
use image::{Rgba, RgbaImage};

use sketchboard_core::surface::{ImageFormat, LineCap, LinearGradient, Surface};
use sketchboard_core::SurfaceError;

/// Opaque paint used for gradient fills.
pub const PAINT: Rgba<u8> = Rgba([255, 140, 0, 255]);
pub const BLANK: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Resize(f64, f64),
    StrokeStyle(String),
    FillStyle(String),
    LineWidth(f64),
    LineCap(LineCap),
    Font(String),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    Arc(f64, f64, f64),
    Stroke,
    StrokeRect(f64, f64, f64, f64),
    ClearRect(f64, f64, f64, f64),
    GradientRect(LinearGradient, f64, f64, f64, f64),
    FillText(String, f64, f64),
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
}

pub struct TestSurface {
    pub ops: Vec<Op>,
    pub pixels: RgbaImage,
    pub fail_encode: bool,
}

impl TestSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            pixels: RgbaImage::new(0, 0),
            fail_encode: false,
        }
    }

    pub fn take_ops(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.pixels().all(|pixel| *pixel == BLANK)
    }

    fn paint_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba<u8>) {
        let x0 = x.round().max(0.0) as u32;
        let y0 = y.round().max(0.0) as u32;
        let x1 = ((x + width).round().max(0.0) as u32).min(self.pixels.width());
        let y1 = ((y + height).round().max(0.0) as u32).min(self.pixels.height());
        for py in y0..y1 {
            for px in x0..x1 {
                self.pixels.put_pixel(px, py, color);
            }
        }
    }
}

impl Surface for TestSurface {
    fn width(&self) -> f64 {
        self.pixels.width() as f64
    }

    fn height(&self) -> f64 {
        self.pixels.height() as f64
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.ops.push(Op::Resize(width, height));
        self.pixels = RgbaImage::new(width as u32, height as u32);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ops.push(Op::StrokeStyle(color.to_string()));
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ops.push(Op::FillStyle(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ops.push(Op::LineCap(cap));
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(Op::Font(font.to_string()));
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }

    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, _start_angle: f64, _end_angle: f64) {
        self.ops.push(Op::Arc(x, y, radius));
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::StrokeRect(x, y, width, height));
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::ClearRect(x, y, width, height));
        self.paint_rect(x, y, width, height, BLANK);
    }

    fn fill_rect_with_gradient(
        &mut self,
        gradient: &LinearGradient,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) {
        self.ops
            .push(Op::GradientRect(gradient.clone(), x, y, width, height));
        self.paint_rect(x, y, width, height, PAINT);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(Op::FillText(text.to_string(), x, y));
    }

    fn save(&mut self) {
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(Op::Translate(x, y));
    }

    fn rotate(&mut self, radians: f64) {
        self.ops.push(Op::Rotate(radians));
    }

    fn to_data_url(&self, format: ImageFormat) -> Result<String, SurfaceError> {
        if self.fail_encode {
            return Err(SurfaceError::Encode("canvas is tainted".into()));
        }
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .map_err(|error| SurfaceError::Encode(error.to_string()))?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Ok(format!("data:{};base64,{encoded}", format.mime()))
    }
}

/// Decode a `data:image/png;base64,` URL back into an image.
pub fn decode_data_url(href: &str) -> image::DynamicImage {
    let (header, payload) = href.split_once(',').expect("data url has a payload");
    assert_eq!(header, "data:image/png;base64");
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .expect("valid base64");
    image::load_from_memory_with_format(&bytes, image::ImageFormat::Png).expect("valid png")
}
