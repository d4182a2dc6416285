//! Phong shading without an ambient term.
//!
//! Every light contributes a Lambert-style diffuse term and a specular
//! highlight. Lights are not occluded: there is no shadow test.

use crate::{Color, Hit, Light};
use lumi_math::{unit, MathError, Vec3};

/// Reflect `d` about the normal `n`: `n * 2 * (d . n) - d`.
///
/// Both vectors point away from the surface, so the mirrored vector does too.
#[inline]
pub fn reflect(d: Vec3, n: Vec3) -> Vec3 {
    n * 2.0 * d.dot(n) - d
}

/// Diffuse contribution of one light, before the light intensity is applied.
///
/// `light_dir` points from the surface toward the light. Lights behind the
/// surface contribute nothing.
#[inline]
pub fn diffuse_term(light_dir: Vec3, normal: Vec3) -> f32 {
    light_dir.dot(normal).max(0.0)
}

/// Specular contribution of one light, before the light intensity is applied.
///
/// `view_dir` is the direction of the primary ray (eye toward surface).
pub fn specular_term(light_dir: Vec3, normal: Vec3, view_dir: Vec3, shininess: f32) -> f32 {
    let incoming = -light_dir;
    let outgoing = -reflect(incoming, normal);
    outgoing.dot(-view_dir).max(0.0).powf(shininess)
}

/// Compute the color of `hit` as seen along `view_dir`.
///
/// Fails if a light sits exactly on the hit point, since the light
/// direction is then undefined.
pub fn shade(hit: &Hit, lights: &[Light], view_dir: Vec3) -> Result<Color, MathError> {
    let material = hit.material;
    let mut diffuse_sum = 0.0;
    let mut specular_sum = 0.0;

    for light in lights {
        let light_dir = unit(light.position - hit.point)?;

        diffuse_sum += diffuse_term(light_dir, hit.normal) * light.intensity;
        specular_sum +=
            specular_term(light_dir, hit.normal, view_dir, material.shininess) * light.intensity;
    }

    Ok(material.diffuse_color * diffuse_sum * material.diffuse_weight()
        + Color::ONE * specular_sum * material.specular_weight())
}
