use std::env;

use sdl2::keyboard::{Keycode, Scancode};
use tracing::{error, info};

use prospect3d::colors;
use prospect3d::loader;
use prospect3d::math::vec2::Vec2;
use prospect3d::render::{draw_number, render_scene, FrameBuffer, RenderMode};
use prospect3d::scene::Scene;
use prospect3d::settings::RenderSettings;
use prospect3d::window::{FrameLimiter, Window, WindowEvent};

const WINDOW_TITLE: &str = "Prospect Software 3D model viewer";
const ICON_PATH: &str = "icon.bmp";
const DEFAULT_ROTATION: f32 = 0.35;

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut settings = RenderSettings::default();

    let mut scene = match env::args().nth(1) {
        Some(path) => match loader::load_model(&path) {
            Ok(scene) => {
                info!(%path, triangles = scene.len(), "model loaded");
                scene
            }
            Err(e) => {
                error!(%path, error = %e, "model not loaded");
                Scene::empty()
            }
        },
        None => {
            info!("no model file given, opening the default cube");
            Scene::unit_cube()
        }
    };

    let mut window = Window::new(
        WINDOW_TITLE,
        settings.width,
        settings.height,
        Some(ICON_PATH),
    )?;
    let mut frame_buffer = FrameBuffer::new(settings.width, settings.height);
    let mut limiter = FrameLimiter::new(&window, settings.frame_delay_ms);

    let mut xangle = DEFAULT_ROTATION;
    let mut yangle = DEFAULT_ROTATION;
    let mut fps: u64 = 0;
    let mut running = true;

    while running {
        // One-shot bindings come from the event queue; key repeat is
        // filtered out so each press fires once.
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => running = false,
                WindowEvent::KeyDown { key, repeat: false } => match key {
                    Keycode::Escape | Keycode::X => running = false,
                    Keycode::Num0 => {
                        xangle = DEFAULT_ROTATION;
                        yangle = DEFAULT_ROTATION;
                    }
                    Keycode::S => info!(xangle, yangle, "current rotation"),
                    Keycode::C => settings.backface_culling = !settings.backface_culling,
                    Keycode::L => settings.mode.toggle(RenderMode::LINES),
                    Keycode::F => settings.mode.toggle(RenderMode::FILL),
                    Keycode::A => scene.swap_axes(),
                    _ => {}
                },
                _ => {}
            }
        }

        // Held keys act every frame.
        if window.is_scancode_pressed(Scancode::Right) {
            yangle -= settings.sensitivity;
        }
        if window.is_scancode_pressed(Scancode::Left) {
            yangle += settings.sensitivity;
        }
        if window.is_scancode_pressed(Scancode::Up) {
            xangle += settings.sensitivity;
        }
        if window.is_scancode_pressed(Scancode::Down) {
            xangle -= settings.sensitivity;
        }
        if window.is_scancode_pressed(Scancode::Equals) {
            settings.scale *= 1.0 + settings.sensitivity;
        }
        if window.is_scancode_pressed(Scancode::Minus) {
            settings.scale *= 1.0 - settings.sensitivity;
        }

        frame_buffer.clear(colors::BLACK);
        render_scene(&mut frame_buffer, &scene, &settings, xangle, yangle);
        draw_number(&mut frame_buffer, fps, Vec2::new(10.0, 10.0), 3);
        draw_number(
            &mut frame_buffer,
            settings.scale as u64,
            Vec2::new(10.0, 40.0),
            4,
        );
        window.present(frame_buffer.as_bytes())?;

        let delta_ms = limiter.wait_and_get_delta(&window);
        fps = 1000 / delta_ms.max(1);
    }

    Ok(())
}
