//! Scene container and nearest-hit search.

use crate::{Light, Material, Sphere};
use lumi_math::{unit, MathError, Ray, Vec3};

/// Record of the nearest ray-sphere intersection.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Distance along the ray
    pub distance: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit normal at the intersection
    pub normal: Vec3,
    /// Material of the sphere that was hit
    pub material: &'a Material,
}

/// Spheres and lights to render.
///
/// Sphere order matters only for ties: when two spheres are hit at exactly
/// the same distance, the one added first wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere (builder style).
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.add_sphere(sphere);
        self
    }

    /// Add a light (builder style).
    pub fn with_light(mut self, light: Light) -> Self {
        self.add_light(light);
        self
    }

    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Find the closest sphere hit along `ray`.
    ///
    /// Every sphere is tested; a candidate replaces the current best only
    /// when it is strictly closer. Hits at or beyond `max_distance` are
    /// treated as misses.
    pub fn find_nearest(&self, ray: &Ray, max_distance: f32) -> Result<Option<Hit<'_>>, MathError> {
        let mut closest_so_far = f32::MAX;
        let mut nearest: Option<&Sphere> = None;

        for sphere in &self.spheres {
            if let Some(distance) = sphere.intersect(ray) {
                if distance < closest_so_far {
                    closest_so_far = distance;
                    nearest = Some(sphere);
                }
            }
        }

        let Some(sphere) = nearest else {
            return Ok(None);
        };
        if closest_so_far >= max_distance {
            return Ok(None);
        }

        let point = ray.at(closest_so_far);
        let normal = unit(point - sphere.center())?;

        Ok(Some(Hit {
            distance: closest_so_far,
            point,
            normal,
            material: sphere.material(),
        }))
    }
}
