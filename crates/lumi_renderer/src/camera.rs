//! Pinhole camera for primary ray generation.

use lumi_math::{MathError, Ray, Vec3};

/// Camera fixed at the origin, looking down -Z with +Y up.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    // Vertical field of view in radians
    fov: f32,

    // Cached computed values (set by with_* builders)
    half_height: f32,
    aspect: f32,
}

impl Camera {
    /// Create a new camera with default settings (1920x1080, 90 degree fov).
    pub fn new() -> Self {
        Self::from_parts(1920, 1080, std::f32::consts::FRAC_PI_2)
    }

    fn from_parts(image_width: u32, image_height: u32, fov: f32) -> Self {
        Self {
            image_width,
            image_height,
            fov,
            half_height: (fov / 2.0).tan(),
            aspect: image_width as f32 / image_height as f32,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(self, width: u32, height: u32) -> Self {
        Self::from_parts(width, height, self.fov)
    }

    /// Set the vertical field of view in radians.
    pub fn with_fov(self, fov: f32) -> Self {
        Self::from_parts(self.image_width, self.image_height, fov)
    }

    /// Vertical field of view in radians.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Eye position. Every primary ray starts here.
    pub fn origin(&self) -> Vec3 {
        Vec3::ZERO
    }

    /// Generate the primary ray through the center of pixel (i, j).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn ray_for_pixel(&self, i: u32, j: u32) -> Result<Ray, MathError> {
        let x = (2.0 * (i as f32 + 0.5) / self.image_width as f32 - 1.0)
            * self.half_height
            * self.aspect;
        let y = -(2.0 * (j as f32 + 0.5) / self.image_height as f32 - 1.0) * self.half_height;

        Ray::through(self.origin(), Vec3::new(x, y, -1.0))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
