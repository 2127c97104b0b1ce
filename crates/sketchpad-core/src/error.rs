//! Setup errors.
//!
//! Drawing itself never fails; only mounting a sketchpad does.

use thiserror::Error;

/// Errors raised while setting up a sketchpad.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Missing element: {0}")]
    MissingElement(String),
    #[error("Canvas has no 2D rendering context")]
    MissingContext,
    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Host error: {0}")]
    Host(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for setup operations.
pub type Result<T> = std::result::Result<T, SketchError>;
