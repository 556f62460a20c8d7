use crate::tool::SIZE_MULTIPLIER;
use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }
}

pub fn normalize_point(point: Point) -> Option<Point> {
    if !point.x.is_finite() || !point.y.is_finite() {
        return None;
    }
    Some(point)
}

/// Client coordinates relative to the canvas' bounding box.
pub fn canvas_point(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Option<Point> {
    normalize_point(Point::new(client_x - rect_left, client_y - rect_top))
}

/// The square an eraser punches out: side `width`, centered on `center`.
pub fn erase_square(center: Point, width: f64) -> Rect {
    Rect::centered(center, width, width)
}

pub fn rectangle_bounds(center: Point, slider_width: f64) -> Rect {
    let side = slider_width * SIZE_MULTIPLIER;
    Rect::centered(center, side, side)
}

pub fn circle_radius(slider_width: f64) -> f64 {
    slider_width * SIZE_MULTIPLIER / 2.0
}

/// Apex-up isosceles triangle relative to its own center.
pub fn triangle_offsets(slider_width: f64) -> [Point; 3] {
    let half = slider_width * SIZE_MULTIPLIER / 2.0;
    [
        Point::new(0.0, -half),
        Point::new(-half, half),
        Point::new(half, half),
    ]
}

pub fn text_size(slider_width: f64) -> f64 {
    slider_width * SIZE_MULTIPLIER
}
