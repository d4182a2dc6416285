//! Core ray casting renderer.
//!
//! Casts exactly one ray per pixel, in row-major order, into a
//! [`Framebuffer`] that is handed to the PPM writer once complete.

use crate::{shade, Camera, Color, RenderError, RenderResult, Scene};
use lumi_math::Ray;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Hits at or beyond this distance are treated as misses.
pub const DEFAULT_MAX_DISTANCE: f32 = 1000.0;

/// Color of pixels whose ray misses every sphere.
pub const DEFAULT_BACKGROUND: Color = Color::new(0.1, 0.1, 0.4);

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Background color when ray doesn't hit anything
    pub background: Color,
    /// Maximum visible distance along a primary ray
    pub max_distance: f32,
}

impl Default for RenderConfig {
    /// 1920x1080 with a 90 degree vertical field of view.
    ///
    /// Images meant to match the historical reference renders need
    /// `with_fov(1.0)`: those were produced with the angle truncated to a
    /// whole number of radians.
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fov: std::f32::consts::FRAC_PI_2,
            background: DEFAULT_BACKGROUND,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the vertical field of view in radians.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Set background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the maximum visible distance.
    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Build the camera described by this configuration.
    pub fn camera(&self) -> Camera {
        Camera::new()
            .with_resolution(self.width, self.height)
            .with_fov(self.fov)
    }
}

/// Dense row-major buffer of linear colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Wrap existing pixel data, which must hold exactly `width * height` colors.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> RenderResult<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RenderError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// All pixels, row by row from the top of the image.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} framebuffer",
            x,
            y,
            self.width,
            self.height
        );
        x as usize + y as usize * self.width as usize
    }
}

/// Compute the color seen by a primary ray.
///
/// Returns the configured background when no sphere is hit within
/// `config.max_distance`.
pub fn cast_ray(ray: &Ray, scene: &Scene, config: &RenderConfig) -> RenderResult<Color> {
    Ok(trace(ray, scene, config)?.unwrap_or(config.background))
}

/// Shaded color of the nearest visible hit, or `None` on a miss.
fn trace(ray: &Ray, scene: &Scene, config: &RenderConfig) -> RenderResult<Option<Color>> {
    match scene.find_nearest(ray, config.max_distance)? {
        Some(hit) => Ok(Some(shade(&hit, scene.lights(), ray.direction())?)),
        None => Ok(None),
    }
}

/// Render the entire scene to a framebuffer.
///
/// Single-threaded; every pixel is computed independently from the
/// immutable scene.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderResult<Framebuffer> {
    if config.width == 0 || config.height == 0 {
        return Err(RenderError::InvalidResolution {
            width: config.width,
            height: config.height,
        });
    }

    log::info!(
        "Rendering {}x{} ({} spheres, {} lights)",
        config.width,
        config.height,
        scene.spheres().len(),
        scene.lights().len()
    );
    let start = Instant::now();

    let camera = config.camera();
    let mut image = Framebuffer::new(config.width, config.height);
    let mut missed_pixels = 0usize;

    for y in 0..config.height {
        for x in 0..config.width {
            let ray = camera.ray_for_pixel(x, y)?;
            let color = match trace(&ray, scene, config)? {
                Some(color) => color,
                None => {
                    missed_pixels += 1;
                    config.background
                }
            };
            image.set(x, y, color);
        }
    }

    log::debug!(
        "{} of {} primary rays missed every sphere",
        missed_pixels,
        image.pixels().len()
    );
    log::info!("Rendered in {:?}", start.elapsed());

    Ok(image)
}
