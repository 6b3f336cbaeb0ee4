//! SDL2 window, input and presentation plumbing.
//!
//! Everything is rendered on the CPU; SDL is only asked for a window, a
//! streaming texture, the event queue, keyboard state and a millisecond
//! timer.

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::surface::Surface;
use tracing::warn;

/// Events the frame loop cares about, decoupled from SDL's event type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    Quit,
    /// A key went down. `repeat` distinguishes the initial press from key
    /// repeat, for one-shot bindings.
    KeyDown { key: Keycode, repeat: bool },
    MouseButtonDown { button: MouseButton, x: i32, y: i32 },
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    texture: sdl2::render::Texture<'static>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    /// Opens the window and creates the streaming texture the frame buffer
    /// is presented through. A missing or undecodable icon is logged and
    /// skipped; it never fails the construction.
    pub fn new(
        title: &str,
        width: u32,
        height: u32,
        icon_path: Option<&str>,
    ) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let mut window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        if let Some(path) = icon_path {
            match image::open(path) {
                Ok(icon) => {
                    let icon = icon.into_rgba8();
                    let (icon_width, icon_height) = icon.dimensions();
                    let mut icon_bytes = icon.into_raw();
                    match Surface::from_data(
                        &mut icon_bytes,
                        icon_width,
                        icon_height,
                        icon_width * 4,
                        PixelFormatEnum::ABGR8888,
                    ) {
                        Ok(surface) => window.set_icon(surface),
                        Err(e) => warn!(path, error = %e, "window icon surface not created"),
                    };
                }
                Err(e) => warn!(path, error = %e, "no window icon"),
            }
        }

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // We ensure texture is dropped before texture_creator by struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            canvas,
            texture_creator,
            texture,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// Drains the SDL event queue into frame-loop events.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(WindowEvent::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat,
                    ..
                } => events.push(WindowEvent::KeyDown { key, repeat }),
                Event::MouseButtonDown {
                    mouse_btn, x, y, ..
                } => events.push(WindowEvent::MouseButtonDown {
                    button: mouse_btn,
                    x,
                    y,
                }),
                _ => {}
            }
        }
        events
    }

    /// Live keyboard state, for controls that act every frame while held
    /// (as opposed to the one-shot key-down events).
    pub fn is_scancode_pressed(&self, scancode: Scancode) -> bool {
        self.event_pump.keyboard_state().is_scancode_pressed(scancode)
    }

    /// Uploads the frame-buffer bytes and presents them.
    pub fn present(&mut self, buffer: &[u8]) -> Result<(), String> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(
            &self.texture,
            None,
            Some(Rect::new(0, 0, self.width, self.height)),
        )?;
        self.canvas.present();
        Ok(())
    }

    /// Milliseconds since SDL was initialized.
    pub fn ticks(&self) -> u64 {
        self.timer_subsystem.ticks64()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Caps the frame rate with a fixed per-frame sleep and reports the elapsed
/// wall-clock time of each frame for the FPS readout.
pub struct FrameLimiter {
    previous_frame_time: u64,
    delay_ms: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window, delay_ms: u64) -> Self {
        Self {
            previous_frame_time: window.ticks(),
            delay_ms,
        }
    }

    /// Sleeps the fixed delay, then returns the time in milliseconds since
    /// the previous call (the full frame time including the sleep).
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        std::thread::sleep(std::time::Duration::from_millis(self.delay_ms));
        let current_time = window.ticks();
        let delta_time = current_time - self.previous_frame_time;
        self.previous_frame_time = current_time;
        delta_time
    }
}
