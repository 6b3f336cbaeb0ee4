//! Software rendering: the pixel buffer, line rasterizer, digit glyphs and
//! the per-frame polygon pass.

mod framebuffer;
mod glyphs;
mod rasterizer;
mod renderer;

pub use framebuffer::FrameBuffer;
pub use glyphs::{draw_number, DIGIT_ADVANCE};
pub use rasterizer::draw_line;
pub use renderer::render_scene;

use std::ops::BitOr;

/// Bitmask selecting which primitives the render pass draws.
///
/// Flags are independent bits; both may be active at once. Membership is
/// always tested per flag with a bitwise AND, never by truthiness of the
/// whole mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderMode(u8);

impl RenderMode {
    pub const NONE: Self = Self(0);
    /// Stroke the three edges of each triangle.
    pub const LINES: Self = Self(0x01);
    /// Fill triangle interiors. Accepted but not implemented; the render
    /// pass treats it as a no-op.
    pub const FILL: Self = Self(0x02);

    /// True when any bit of `flag` is set in this mask.
    pub fn contains(self, flag: RenderMode) -> bool {
        self.0 & flag.0 != 0
    }

    /// Flips the bits of `flag` in this mask.
    pub fn toggle(&mut self, flag: RenderMode) {
        self.0 ^= flag.0;
    }
}

impl BitOr for RenderMode {
    type Output = RenderMode;

    fn bitor(self, rhs: RenderMode) -> Self::Output {
        RenderMode(self.0 | rhs.0)
    }
}
