use crate::background::sunset_gradient;
use crate::geometry::{circle_radius, erase_square, rectangle_bounds, text_size, triangle_offsets};
use crate::style::StrokeStyle;
use crate::surface::{LineCap, Surface};
use crate::tool::Tool;
use crate::Point;

pub fn font_spec(size: f64, family: &str) -> String {
    format!("{size}px {family}")
}

/// Start the path a pencil or brush stroke grows from.
pub fn begin_stroke<S: Surface>(surface: &mut S, at: Point) {
    surface.begin_path();
    surface.move_to(at.x, at.y);
}

/// Commit one segment and restart the path at its end, so every segment is
/// stroked with the style current at that moment.
pub fn draw_segment<S: Surface>(surface: &mut S, to: Point, style: &StrokeStyle) {
    surface.set_stroke_style(&style.color);
    surface.set_line_width(style.width);
    surface.set_line_cap(LineCap::Round);
    surface.line_to(to.x, to.y);
    surface.stroke();
    surface.begin_path();
    surface.move_to(to.x, to.y);
}

pub fn erase_at<S: Surface>(surface: &mut S, at: Point, width: f64) {
    let square = erase_square(at, width);
    surface.clear_rect(square.x, square.y, square.width, square.height);
}

/// Outline `tool`'s shape centered on `at`. `rotation` (degrees) only applies
/// to the triangle.
pub fn draw_shape<S: Surface>(
    surface: &mut S,
    tool: Tool,
    at: Point,
    style: &StrokeStyle,
    rotation: Option<f64>,
) {
    surface.set_stroke_style(&style.color);
    surface.set_line_width(style.width);
    match tool {
        Tool::Rectangle => {
            let rect = rectangle_bounds(at, style.width);
            surface.stroke_rect(rect.x, rect.y, rect.width, rect.height);
        }
        Tool::Circle => {
            surface.begin_path();
            surface.arc(
                at.x,
                at.y,
                circle_radius(style.width),
                0.0,
                std::f64::consts::PI * 2.0,
            );
            surface.stroke();
            surface.close_path();
        }
        Tool::Triangle => draw_triangle(surface, at, style.width, rotation),
        _ => {}
    }
}

fn draw_triangle<S: Surface>(surface: &mut S, at: Point, width: f64, rotation: Option<f64>) {
    let [apex, left, right] = triangle_offsets(width);
    match rotation {
        Some(degrees) => {
            surface.save();
            surface.translate(at.x, at.y);
            surface.rotate(degrees.to_radians());
            trace_triangle(surface, Point::new(0.0, 0.0), apex, left, right);
            surface.stroke();
            surface.restore();
        }
        None => {
            trace_triangle(surface, at, apex, left, right);
            surface.stroke();
        }
    }
}

fn trace_triangle<S: Surface>(
    surface: &mut S,
    origin: Point,
    apex: Point,
    left: Point,
    right: Point,
) {
    surface.begin_path();
    surface.move_to(origin.x + apex.x, origin.y + apex.y);
    surface.line_to(origin.x + left.x, origin.y + left.y);
    surface.line_to(origin.x + right.x, origin.y + right.y);
    surface.close_path();
}

pub fn draw_text<S: Surface>(
    surface: &mut S,
    text: &str,
    at: Point,
    family: &str,
    style: &StrokeStyle,
) {
    if text.is_empty() {
        return;
    }
    surface.set_font(&font_spec(text_size(style.width), family));
    surface.set_fill_style(&style.color);
    surface.fill_text(text, at.x, at.y);
}

/// Cover the whole surface with the sunset gradient starting from `color`.
pub fn fill_background<S: Surface>(surface: &mut S, color: &str) {
    let (width, height) = (surface.width(), surface.height());
    let gradient = sunset_gradient(color, height);
    surface.fill_rect_with_gradient(&gradient, 0.0, 0.0, width, height);
}
