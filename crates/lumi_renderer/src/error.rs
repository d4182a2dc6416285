//! Error types for rendering and image output.

use lumi_math::MathError;
use thiserror::Error;

/// Errors that can occur while rendering or writing an image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid resolution {width}x{height}: both dimensions must be non-zero")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Framebuffer expects {expected} pixels, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Degenerate geometry: {0}")]
    Degenerate(#[from] MathError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
