//! Model space to screen space.
//!
//! The viewing transform is fixed: rotate about Y first, then about X, then
//! an optional pseudo-perspective divide. Screen mapping scales, flips Y
//! (raster rows grow downward while model-space up is screen-space up) and
//! recenters on the middle of the buffer.

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::settings::RenderSettings;

/// Rotates a model-space point by the viewing angles and applies the
/// perspective divide when perspective strength is non-zero.
///
/// The divide is `x / (2 - z * perspective)` rather than a true projection
/// matrix. The divisor must stay positive for all geometry, which holds as
/// long as model extent times perspective strength stays below 2; this is
/// not checked at runtime.
pub fn model_to_2d(point: Vec3, xangle: f32, yangle: f32, perspective: f32) -> Vec3 {
    let mut p = point.rotate_y(yangle).rotate_x(xangle);
    if perspective > 0.0 {
        let divisor = 2.0 - p.z * perspective;
        p.x /= divisor;
        p.y /= divisor;
    }
    p
}

/// Maps a projected point to pixel coordinates, rounding half away from
/// zero. The result still carries fractional type but holds whole values.
pub fn screen_position(point: Vec3, settings: &RenderSettings) -> Vec2 {
    Vec2::new(
        (point.x * settings.scale).round() + (settings.width / 2) as f32,
        (-point.y * settings.scale).round() + (settings.height / 2) as f32,
    )
}
