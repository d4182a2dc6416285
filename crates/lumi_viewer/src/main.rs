use anyhow::{Context, Result};
use lumi_math::{Vec2, Vec3};
use lumi_renderer::{render, save_ppm, Color, Light, Material, RenderConfig, Scene, Sphere};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Environment variable naming an optional JSON config file.
const CONFIG_ENV: &str = "LUMI_CONFIG";

/// Viewer settings. Every field may be omitted from the config file.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ViewerConfig {
    render: RenderConfig,
    output: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            output: PathBuf::from("spheres.ppm"),
        }
    }
}

impl ViewerConfig {
    fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }
}

/// Four spheres in two materials, lit by three point lights.
fn build_scene() -> Scene {
    let ivory = Material::new(Color::new(0.2, 0.5, 0.7), 50.0, Vec2::new(0.6, 0.3));
    let apple = Material::new(Color::new(0.3, 0.1, 0.1), 10.0, Vec2::new(0.9, 0.1));

    Scene::new()
        .with_sphere(Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, ivory))
        .with_sphere(Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, apple))
        .with_sphere(Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, apple))
        .with_sphere(Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, ivory))
        .with_light(Light::new(Vec3::new(-20.0, 30.0, 20.0), 1.5))
        .with_light(Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8))
        .with_light(Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => ViewerConfig::load(Path::new(&path))?,
        None => ViewerConfig::default(),
    };
    log::debug!("{:?}", config);

    let start = Instant::now();
    let scene = build_scene();
    let image = render(&scene, &config.render).context("Render failed")?;
    save_ppm(&image, &config.output)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    log::info!("Done in {:?}", start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scene_contents() {
        let scene = build_scene();
        assert_eq!(scene.spheres().len(), 4);
        assert_eq!(scene.lights().len(), 3);
        assert_eq!(scene.spheres()[3].radius(), 4.0);
    }

    #[test]
    fn test_viewer_config_defaults() {
        let config: ViewerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.output, PathBuf::from("spheres.ppm"));
        assert_eq!(config.render, RenderConfig::default());
    }

    #[test]
    fn test_viewer_config_overrides() {
        let config: ViewerConfig = serde_json::from_str(
            r#"{ "output": "small.ppm", "render": { "width": 320, "height": 180, "fov": 1.0 } }"#,
        )
        .unwrap();

        assert_eq!(config.output, PathBuf::from("small.ppm"));
        assert_eq!((config.render.width, config.render.height), (320, 180));
        assert_eq!(config.render.fov, 1.0);
        assert_eq!(config.render.max_distance, 1000.0);
    }

    #[test]
    fn test_reference_scene_renders() {
        let config = RenderConfig::default().with_resolution(48, 27);
        let image = render(&build_scene(), &config).unwrap();

        let lit = image
            .pixels()
            .iter()
            .filter(|c| **c != config.background)
            .count();
        assert!(lit > 0);
        assert!(lit < image.pixels().len());
    }
}
