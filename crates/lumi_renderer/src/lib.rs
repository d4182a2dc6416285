//! Lumi Renderer - CPU Phong Ray Caster
//!
//! Casts one primary ray per pixel from a fixed eye point, resolves the
//! nearest sphere by brute-force search, shades the hit with diffuse and
//! specular Phong terms from every point light and writes the result as a
//! binary PPM image.

mod error;
mod material;
mod sphere;
mod light;
mod scene;
mod shader;
mod camera;
mod renderer;
mod ppm;

pub use error::{RenderError, RenderResult};
pub use material::{Color, Material};
pub use sphere::Sphere;
pub use light::Light;
pub use scene::{Hit, Scene};
pub use shader::{diffuse_term, reflect, shade, specular_term};
pub use camera::Camera;
pub use renderer::{
    cast_ray, render, Framebuffer, RenderConfig, DEFAULT_BACKGROUND, DEFAULT_MAX_DISTANCE,
};
pub use ppm::{color_to_rgb, save_ppm, tone_map, write_ppm};

/// Re-export vector and ray types from lumi_math
pub use lumi_math::{MathError, Ray, Vec2, Vec3};
