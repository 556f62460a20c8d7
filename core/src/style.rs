use crate::error::InputError;

pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_WIDTH: f64 = 5.0;
pub const MIN_WIDTH: f64 = 1.0;
pub const MAX_WIDTH: f64 = 200.0;
const MAX_COLOR_LEN: usize = 32;

/// Color and line width applied to a single drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
}

pub fn sanitize_color(color: &str) -> String {
    let color = color.trim();
    if color.is_empty() {
        return DEFAULT_COLOR.to_string();
    }
    color.chars().take(MAX_COLOR_LEN).collect()
}

pub fn parse_width(raw: &str) -> Result<f64, InputError> {
    match raw.trim().parse::<f64>() {
        Ok(width) if width.is_finite() && width > 0.0 => Ok(width.clamp(MIN_WIDTH, MAX_WIDTH)),
        _ => Err(InputError::InvalidWidth(raw.to_string())),
    }
}

pub fn sanitize_width(raw: &str) -> f64 {
    parse_width(raw).unwrap_or_else(|error| {
        log::warn!("{error}, using {DEFAULT_WIDTH}");
        DEFAULT_WIDTH
    })
}

pub fn parse_angle(raw: &str) -> Result<f64, InputError> {
    match raw.trim().parse::<f64>() {
        Ok(angle) if angle.is_finite() => Ok(angle),
        _ => Err(InputError::InvalidAngle(raw.to_string())),
    }
}

pub fn sanitize_angle(raw: &str) -> f64 {
    parse_angle(raw).unwrap_or_else(|error| {
        log::warn!("{error}, using 0");
        0.0
    })
}
