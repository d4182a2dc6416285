// Re-export glam for convenience
pub use glam::*;

// Lumi math types
mod ray;
pub use ray::Ray;

use thiserror::Error;

/// Errors raised by vector operations with geometric preconditions.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("cannot normalize degenerate vector ({x}, {y}, {z})")]
    DegenerateVector { x: f32, y: f32, z: f32 },
}

/// Scale a vector to unit length.
///
/// Unlike [`Vec3::normalize`], a zero-length or non-finite input is
/// reported as an error instead of silently producing NaN components.
#[inline]
pub fn unit(v: Vec3) -> Result<Vec3, MathError> {
    v.try_normalize().ok_or(MathError::DegenerateVector {
        x: v.x,
        y: v.y,
        z: v.z,
    })
}

/// Largest of the three components (used for per-pixel tone mapping).
#[inline]
pub fn max_component(v: Vec3) -> f32 {
    v.x.max(v.y.max(v.z))
}
