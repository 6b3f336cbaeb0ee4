//! The per-frame polygon pass.
//!
//! Triangles are processed in list order with no depth sorting or z-buffer;
//! the only hidden-surface option is single-sided normal culling.

use super::framebuffer::FrameBuffer;
use super::rasterizer::draw_line;
use super::RenderMode;
use crate::projection::{model_to_2d, screen_position};
use crate::scene::Scene;
use crate::settings::RenderSettings;

/// Rotates, projects and strokes every triangle in the scene into `fb`.
///
/// When back-face culling is enabled, each face normal is rotated by the
/// same Y-then-X composition as the vertices and the triangle is skipped
/// when the rotated normal points away from the viewer; later triangles in
/// the list are still processed.
pub fn render_scene(
    fb: &mut FrameBuffer,
    scene: &Scene,
    settings: &RenderSettings,
    xangle: f32,
    yangle: f32,
) {
    for triangle in scene.triangles() {
        if settings.backface_culling {
            let normal = triangle.normal.rotate_y(yangle).rotate_x(xangle);
            if normal.z < 0.0 {
                continue;
            }
        }

        let a = screen_position(
            model_to_2d(triangle.a, xangle, yangle, settings.perspective),
            settings,
        );
        let b = screen_position(
            model_to_2d(triangle.b, xangle, yangle, settings.perspective),
            settings,
        );
        let c = screen_position(
            model_to_2d(triangle.c, xangle, yangle, settings.perspective),
            settings,
        );

        if settings.mode.contains(RenderMode::LINES) {
            draw_line(fb, a, b, triangle.color);
            draw_line(fb, a, c, triangle.color);
            draw_line(fb, c, b, triangle.color);
        }
        if settings.mode.contains(RenderMode::FILL) {
            // Polygon fill is not implemented; the flag is accepted and
            // ignored so mixed masks still stroke edges above.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::math::vec3::Vec3;
    use crate::scene::Triangle;

    fn test_settings() -> RenderSettings {
        RenderSettings {
            width: 64,
            height: 64,
            scale: 10.0,
            perspective: 0.0,
            mode: RenderMode::LINES,
            backface_culling: false,
            ..RenderSettings::default()
        }
    }

    fn count_color(fb: &FrameBuffer, color: u32) -> usize {
        let mut count = 0;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.pixel(x, y) == Some(color) {
                    count += 1;
                }
            }
        }
        count
    }

    fn facing_triangle(color: u32) -> Triangle {
        Triangle::with_normal(
            color,
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
    }

    fn away_triangle(color: u32) -> Triangle {
        Triangle::with_normal(
            color,
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
        )
    }

    #[test]
    fn edges_use_the_triangle_color() {
        let mut fb = FrameBuffer::new(64, 64);
        let scene = Scene::new(vec![facing_triangle(colors::RED)]);
        render_scene(&mut fb, &scene, &test_settings(), 0.0, 0.0);

        assert!(count_color(&fb, colors::RED) > 0);
        assert_eq!(count_color(&fb, colors::WHITE), 0);
    }

    #[test]
    fn lines_flag_off_draws_nothing() {
        let mut fb = FrameBuffer::new(64, 64);
        let scene = Scene::new(vec![facing_triangle(colors::RED)]);
        let settings = RenderSettings {
            mode: RenderMode::FILL,
            ..test_settings()
        };
        render_scene(&mut fb, &scene, &settings, 0.0, 0.0);

        assert_eq!(count_color(&fb, colors::RED), 0);
    }

    #[test]
    fn combined_mask_still_strokes_edges() {
        let mut fb = FrameBuffer::new(64, 64);
        let scene = Scene::new(vec![facing_triangle(colors::RED)]);
        let settings = RenderSettings {
            mode: RenderMode::LINES | RenderMode::FILL,
            ..test_settings()
        };
        render_scene(&mut fb, &scene, &settings, 0.0, 0.0);

        assert!(count_color(&fb, colors::RED) > 0);
    }

    #[test]
    fn culled_triangle_is_skipped_but_pass_continues() {
        let mut fb = FrameBuffer::new(64, 64);
        // A back-facing triangle first, then a front-facing one; the first
        // must be dropped without ending the pass.
        let scene = Scene::new(vec![
            away_triangle(colors::RED),
            facing_triangle(colors::WHITE),
        ]);
        let settings = RenderSettings {
            backface_culling: true,
            ..test_settings()
        };
        render_scene(&mut fb, &scene, &settings, 0.0, 0.0);

        assert_eq!(count_color(&fb, colors::RED), 0);
        assert!(count_color(&fb, colors::WHITE) > 0);
    }

    #[test]
    fn culling_disabled_draws_back_faces() {
        let mut fb = FrameBuffer::new(64, 64);
        let scene = Scene::new(vec![away_triangle(colors::RED)]);
        render_scene(&mut fb, &scene, &test_settings(), 0.0, 0.0);

        assert!(count_color(&fb, colors::RED) > 0);
    }

    #[test]
    fn rotation_moves_the_projected_edges() {
        let settings = test_settings();
        let scene = Scene::new(vec![facing_triangle(colors::WHITE)]);

        let mut still = FrameBuffer::new(64, 64);
        render_scene(&mut still, &scene, &settings, 0.0, 0.0);
        let mut rotated = FrameBuffer::new(64, 64);
        render_scene(&mut rotated, &scene, &settings, 0.4, 0.9);

        let still_pixels: Vec<_> = (0..64)
            .flat_map(|y| (0..64).map(move |x| (x, y)))
            .filter(|&(x, y)| still.pixel(x, y) == Some(colors::WHITE))
            .collect();
        let rotated_pixels: Vec<_> = (0..64)
            .flat_map(|y| (0..64).map(move |x| (x, y)))
            .filter(|&(x, y)| rotated.pixel(x, y) == Some(colors::WHITE))
            .collect();
        assert_ne!(still_pixels, rotated_pixels);
    }
}
