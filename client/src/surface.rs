use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use sketchboard_core::surface::{ImageFormat, LineCap, LinearGradient, Surface};
use sketchboard_core::SurfaceError;

/// `Surface` backed by the page's `<canvas>` and its 2D context.
pub struct CanvasSurface {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ctx.set_line_cap(cap.as_str());
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        let _ = self.ctx.arc(x, y, radius, start_angle, end_angle);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.stroke_rect(x, y, width, height);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn fill_rect_with_gradient(
        &mut self,
        gradient: &LinearGradient,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) {
        let fill = self
            .ctx
            .create_linear_gradient(gradient.x0, gradient.y0, gradient.x1, gradient.y1);
        for stop in &gradient.stops {
            if let Err(error) = fill.add_color_stop(stop.offset as f32, &stop.color) {
                log::warn!("Invalid gradient stop {:?}: {error:?}", stop.color);
            }
        }
        self.ctx.set_fill_style_canvas_gradient(&fill);
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let _ = self.ctx.fill_text(text, x, y);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        let _ = self.ctx.translate(x, y);
    }

    fn rotate(&mut self, radians: f64) {
        let _ = self.ctx.rotate(radians);
    }

    fn to_data_url(&self, format: ImageFormat) -> Result<String, SurfaceError> {
        self.canvas
            .to_data_url_with_type(format.mime())
            .map_err(|error| SurfaceError::Encode(format!("{error:?}")))
    }
}
