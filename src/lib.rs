//! A real-time 3D wireframe model viewer rendered entirely on the CPU.
//!
//! Triangles are loaded from a raw binary record format or binary STL,
//! rotated by user-controlled angles each frame, projected with a simple
//! pseudo-perspective divide, and stroked edge by edge into a pixel buffer.
//! SDL2 is used only for window management, input and display.
//!
//! # Quick Start
//!
//! ```ignore
//! use prospect3d::prelude::*;
//!
//! let settings = RenderSettings::default();
//! let scene = Scene::unit_cube();
//! let mut fb = FrameBuffer::new(settings.width, settings.height);
//! render_scene(&mut fb, &scene, &settings, 0.35, 0.35);
//! ```

pub mod colors;
pub mod loader;
pub mod math;
pub mod projection;
pub mod render;
pub mod scene;
pub mod settings;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use loader::LoadError;
pub use render::{FrameBuffer, RenderMode};
pub use scene::{Scene, Triangle};
pub use settings::RenderSettings;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use prospect3d::prelude::*;
/// ```
pub mod prelude {
    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Scene & loading
    pub use crate::loader::{load_model, LoadError};
    pub use crate::scene::{Scene, Triangle};

    // Rendering
    pub use crate::render::{draw_line, draw_number, render_scene, FrameBuffer, RenderMode};

    // Configuration
    pub use crate::settings::RenderSettings;

    // Window & Input
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
