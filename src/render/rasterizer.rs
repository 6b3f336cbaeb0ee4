//! Slope-adaptive line rasterization.
//!
//! The stepping axis is chosen from the slope: shallow lines step one pixel
//! in x and accumulate y, steep lines step one pixel in y and accumulate x,
//! and exactly-vertical lines get a dedicated integer sweep. This keeps the
//! drawn segment one pixel wide along its major axis.

use super::framebuffer::FrameBuffer;
use crate::math::vec2::Vec2;

/// Draws a 1-pixel-wide approximation of the segment from `a` to `b`.
///
/// Endpoints are screen-space floats, truncated to integers when the sweep
/// is set up. There is no clipping beyond the per-pixel bounds check, so
/// off-screen endpoints are fine; only in-bounds pixels are written.
pub fn draw_line(fb: &mut FrameBuffer, a: Vec2, b: Vec2, color: u32) {
    if a.x == b.x {
        let x = a.x as i32;
        let (y_min, y_max) = if a.y > b.y {
            (b.y as i32, a.y as i32)
        } else {
            (a.y as i32, b.y as i32)
        };
        for y in y_min..=y_max {
            fb.put_pixel(x, y, color);
        }
        return;
    }

    let slope = (a.y - b.y) / (a.x - b.x);
    if slope.abs() <= 1.0 {
        // Shallow: walk x from the left endpoint, accumulate y.
        let (x_min, x_max, mut y) = if a.x > b.x {
            (b.x as i32, a.x as i32, b.y)
        } else {
            (a.x as i32, b.x as i32, a.y)
        };
        for x in x_min..=x_max {
            fb.put_pixel(x, y.round() as i32, color);
            y += slope;
        }
    } else {
        // Steep: walk y from the top endpoint, accumulate x.
        let inverse_slope = (a.x - b.x) / (a.y - b.y);
        let (y_min, y_max, mut x) = if a.y > b.y {
            (b.y as i32, a.y as i32, b.x)
        } else {
            (a.y as i32, b.y as i32, a.x)
        };
        for y in y_min..=y_max {
            fb.put_pixel(x.round() as i32, y, color);
            x += inverse_slope;
        }
    }
}
