//! Surface description for Phong shading.

use lumi_math::{Vec2, Vec3};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Optical response of a surface.
///
/// Materials are plain values: every sphere holds its own copy and nothing
/// mutates them once the scene is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color scaled by the accumulated diffuse light
    pub diffuse_color: Color,
    /// Phong exponent; larger values give tighter highlights
    pub shininess: f32,
    /// Weights of the diffuse (`x`) and specular (`y`) terms
    pub weights: Vec2,
}

impl Material {
    /// Create a new material.
    ///
    /// - `diffuse_color`: color of the lit surface
    /// - `shininess`: specular exponent, expected to be positive
    /// - `weights`: `(diffuse_weight, specular_weight)`
    pub fn new(diffuse_color: Color, shininess: f32, weights: Vec2) -> Self {
        Self {
            diffuse_color,
            shininess,
            weights,
        }
    }

    /// Weight applied to the diffuse term.
    #[inline]
    pub fn diffuse_weight(&self) -> f32 {
        self.weights.x
    }

    /// Weight applied to the specular term.
    #[inline]
    pub fn specular_weight(&self) -> f32 {
        self.weights.y
    }
}

impl Default for Material {
    /// Black, purely diffuse surface.
    fn default() -> Self {
        Self {
            diffuse_color: Color::ZERO,
            shininess: 1.0,
            weights: Vec2::new(1.0, 0.0),
        }
    }
}
