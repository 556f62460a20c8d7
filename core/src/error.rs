use thiserror::Error;

use crate::tool::Tool;

/// A control delivered a value the board cannot use.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("unknown tool `{0}`")]
    UnknownTool(String),
    #[error("invalid stroke width `{0}`")]
    InvalidWidth(String),
    #[error("invalid rotation angle `{0}`")]
    InvalidAngle(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid board config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error("image encoding failed: {0}")]
    Encode(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum BoardError {
    #[error("tool `{0}` is disabled")]
    ToolDisabled(Tool),
    #[error("background cycling is disabled")]
    BackgroundDisabled,
    #[error("failed to export drawing: {0}")]
    Export(#[from] SurfaceError),
    #[error(transparent)]
    Input(#[from] InputError),
}
