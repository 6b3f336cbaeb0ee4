//! Viewer configuration.
//!
//! [`RenderSettings`] is owned by the frame-loop driver and passed by
//! reference into the render pass and input handling. Nothing here is
//! persisted across runs.

use crate::render::RenderMode;

pub const DEFAULT_HEIGHT: u32 = 720;
pub const DEFAULT_WIDTH: u32 = DEFAULT_HEIGHT * 16 / 9;

/// Scalar configuration for the viewer, mutated live by user input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    /// Output buffer width in pixels.
    pub width: u32,
    /// Output buffer height in pixels.
    pub height: u32,
    /// Pixels per model-space unit.
    pub scale: f32,
    /// Pseudo-perspective strength in [0, 1]; 0 is orthographic.
    pub perspective: f32,
    /// Radians of rotation per frame while an arrow key is held. Also the
    /// per-frame multiplicative step for the scale keys.
    pub sensitivity: f32,
    /// Fixed sleep per frame, capping the frame rate.
    pub frame_delay_ms: u64,
    /// Which primitives the render pass draws.
    pub mode: RenderMode,
    /// Skip triangles whose rotated normal faces away from the viewer.
    pub backface_culling: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: 300.0,
            perspective: 0.5,
            sensitivity: 0.02,
            frame_delay_ms: 10,
            mode: RenderMode::LINES | RenderMode::FILL,
            backface_culling: false,
        }
    }
}
