use crate::{unit, MathError, Vec3};

/// A ray in 3D space with an origin and a direction.
///
/// Intersection code assumes the direction is unit length; build rays with
/// [`Ray::through`] when the direction comes from arbitrary geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is stored as given.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray whose direction is `direction` scaled to unit length.
    pub fn through(origin: Vec3, direction: Vec3) -> Result<Self, MathError> {
        Ok(Self::new(origin, unit(direction)?))
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
