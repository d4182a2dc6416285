//! Point light source.

use lumi_math::Vec3;

/// A point light with a scalar intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new point light. Negative intensities are clamped to zero.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        if intensity < 0.0 {
            log::warn!("Light at {} has negative intensity {}, clamping to 0", position, intensity);
        }

        Self {
            position,
            intensity: intensity.max(0.0),
        }
    }
}
