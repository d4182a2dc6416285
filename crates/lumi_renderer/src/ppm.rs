//! Binary PPM (P6) output.
//!
//! Layout: `"P6\n<width> <height>\n255\n"` followed by `width * height`
//! pixels of three bytes each (R, G, B), rows top to bottom.

use crate::{Color, Framebuffer, RenderResult};
use lumi_math::max_component;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Scale a color down uniformly so that its largest channel is at most 1.
///
/// Colors already in range are returned unchanged. Scaling all channels by
/// the same factor keeps the hue of bright specular highlights.
#[inline]
pub fn tone_map(color: Color) -> Color {
    let max = max_component(color);
    if max > 1.0 {
        color * (1.0 / max)
    } else {
        color
    }
}

/// Convert a color to 8-bit RGB after tone mapping.
///
/// Channels are scaled by 255 and truncated, not rounded.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let mapped = tone_map(color);
    [
        (255.0 * mapped.x) as u8,
        (255.0 * mapped.y) as u8,
        (255.0 * mapped.z) as u8,
    ]
}

/// Write `image` as a binary PPM to any byte sink.
pub fn write_ppm<W: Write>(image: &Framebuffer, mut sink: W) -> RenderResult<()> {
    write!(sink, "P6\n{} {}\n255\n", image.width(), image.height())?;

    let mut bytes = Vec::with_capacity(image.pixels().len() * 3);
    for color in image.pixels() {
        bytes.extend_from_slice(&color_to_rgb(*color));
    }
    sink.write_all(&bytes)?;
    sink.flush()?;

    log::debug!("Wrote {} bytes of pixel data", bytes.len());
    Ok(())
}

/// Write `image` as a binary PPM file at `path`, replacing any existing file.
pub fn save_ppm(image: &Framebuffer, path: impl AsRef<Path>) -> RenderResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_ppm(image, BufWriter::new(file))?;

    log::info!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, Light, Material, RenderConfig, RenderError, Scene, Sphere};
    use lumi_math::{Vec2, Vec3};
    use std::io;

    #[test]
    fn test_tone_map_halves_when_max_is_two() {
        let mapped = tone_map(Color::new(2.0, 1.0, 1.0));
        assert_eq!(mapped, Color::new(1.0, 0.5, 0.5));
    }

    #[test]
    fn test_tone_map_leaves_in_range_colors() {
        let color = Color::new(0.2, 1.0, 0.7);
        assert_eq!(tone_map(color), color);
    }

    #[test]
    fn test_tone_map_preserves_hue() {
        let color = Color::new(3.0, 1.5, 0.75);
        let mapped = tone_map(color);
        assert_eq!(mapped.x, 1.0);
        assert!((mapped.y / mapped.x - 0.5).abs() < 1e-6);
        assert!((mapped.z / mapped.x - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_color_to_rgb_truncates() {
        assert_eq!(color_to_rgb(Color::new(0.1, 0.1, 0.4)), [25, 25, 102]);
        assert_eq!(color_to_rgb(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::new(4.0, 2.0, 0.0)), [255, 127, 0]);
    }

    #[test]
    fn test_header_bytes() {
        let image = Framebuffer::new(4, 3);
        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();

        let header = b"P6\n4 3\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(out.len(), header.len() + 36);
        assert!(out[header.len()..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_pixel_order_is_row_major_rgb() {
        let mut image = Framebuffer::new(2, 2);
        image.set(1, 0, Color::new(1.0, 0.0, 0.0));
        image.set(0, 1, Color::new(0.0, 0.0, 1.0));

        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();

        let pixels = &out[b"P6\n2 2\n255\n".len()..];
        assert_eq!(pixels, &[0, 0, 0, 255, 0, 0, 0, 0, 255, 0, 0, 0]);
    }

    #[test]
    fn test_empty_scene_renders_background_bytes() {
        let config = RenderConfig::default()
            .with_resolution(5, 4)
            .with_background(Color::new(0.1, 0.1, 0.4));
        let image = render(&Scene::new(), &config).unwrap();

        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();

        let header = b"P6\n5 4\n255\n";
        assert_eq!(&out[..header.len()], header);
        let pixels = &out[header.len()..];
        assert_eq!(pixels.len(), 5 * 4 * 3);
        for rgb in pixels.chunks_exact(3) {
            assert_eq!(rgb, &[25, 25, 102]);
        }
    }

    #[test]
    fn test_sphere_on_axis_end_to_end() {
        let material = Material::new(Color::new(0.3, 0.1, 0.1), 10.0, Vec2::new(0.9, 0.1));
        let scene = Scene::new()
            .with_sphere(Sphere::new(Vec3::new(0.0, 0.0, -12.0), 2.0, material))
            .with_light(Light::new(Vec3::ZERO, 1.7));
        let config = RenderConfig::default().with_resolution(9, 7);
        let image = render(&scene, &config).unwrap();

        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();
        let pixels = &out[b"P6\n9 7\n255\n".len()..];
        let at = |x: usize, y: usize| &pixels[(x + y * 9) * 3..(x + y * 9) * 3 + 3];

        assert_ne!(at(4, 3), &[25, 25, 102]);
        for (x, y) in [(0, 0), (8, 0), (0, 6), (8, 6)] {
            assert_eq!(at(x, y), &[25, 25, 102], "corner ({x}, {y})");
        }
    }

    #[test]
    fn test_save_ppm_writes_file() {
        let path = std::env::temp_dir().join(format!("lumi_save_ppm_{}.ppm", std::process::id()));
        let mut image = Framebuffer::new(3, 2);
        image.set(2, 1, Color::new(0.5, 0.25, 1.0));

        save_ppm(&image, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(bytes.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(&bytes[bytes.len() - 3..], &[127, 63, 255]);
    }

    #[test]
    fn test_save_ppm_reports_unopenable_path() {
        let path = std::env::temp_dir()
            .join("lumi_missing_dir_for_ppm_test")
            .join("out.ppm");
        let result = save_ppm(&Framebuffer::new(1, 1), &path);

        assert!(matches!(result, Err(RenderError::Io(_))));
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let result = write_ppm(&Framebuffer::new(2, 2), FailingSink);
        assert!(matches!(result, Err(RenderError::Io(_))));
    }
}
