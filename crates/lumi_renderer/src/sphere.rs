//! Sphere primitive for ray casting.

use crate::Material;
use lumi_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// A sphere whose radius is not positive is kept in the scene but never
    /// intersects any ray. Negative and NaN radii are stored as zero.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        if radius <= 0.0 || radius.is_nan() {
            log::warn!(
                "Sphere at {} has non-positive radius {}, it will not be visible",
                center,
                radius
            );
        }

        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Distance along `ray` to the first surface point in front of its origin.
    ///
    /// The ray direction must be unit length. Returns the near root when it
    /// is not behind the origin, otherwise the far root (origin inside the
    /// sphere), otherwise `None`. A sphere without a positive radius is
    /// never hit.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        if self.radius <= 0.0 {
            return None;
        }

        let oc = self.center - ray.origin();
        let proj = ray.direction().dot(oc);
        // Squared distance from the center to the ray's supporting line
        let perp_sq = oc.dot(oc) - proj * proj;
        let radius_sq = self.radius * self.radius;

        if perp_sq > radius_sq {
            return None;
        }

        let half_chord = (radius_sq - perp_sq).sqrt();
        let near = proj - half_chord;
        let far = proj + half_chord;

        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}
