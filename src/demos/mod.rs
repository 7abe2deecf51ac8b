//! The demos and the frame loop that drives them
//!
//! Every frame: reset transient text, measure time, set the camera, update
//! the demo from input, play its sounds, render, then let the platform pump.

pub mod pong;
pub mod raycast;
pub mod template;

pub use pong::PongDemo;
pub use raycast::RaycastDemo;
pub use template::TemplateDemo;

use glam::Vec2;

use crate::audio::{AudioManager, AudioSink, LogSink, SoundEffect};
use crate::frame::FrameArena;
use crate::platform::{InputFrame, Platform, ScriptedPlatform, centered_ortho, screen_to_world};
use crate::renderer::{DrawList, Renderer, camera_for_window};
use crate::settings::{Settings, WindowSettings};

/// A runnable demo
pub trait Demo {
    /// Window configuration for the host
    fn window(&self) -> &WindowSettings;

    /// Size of the simulated screen in world units (origin at the centre)
    fn screen_size(&self) -> Vec2;

    /// Advance by `dt` seconds, returning sounds to play
    fn update(&mut self, platform: &dyn Platform, dt: f32) -> Vec<SoundEffect>;

    /// Draw the current state
    fn render(&self, renderer: &mut dyn Renderer, text: &mut FrameArena);
}

/// Mouse position in world units for a centred orthographic screen
pub fn mouse_world(platform: &dyn Platform, screen: Vec2) -> Vec2 {
    screen_to_world(
        platform.mouse_position(),
        platform.window_size(),
        centered_ortho(screen),
        glam::Mat4::IDENTITY,
    )
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunStats {
    pub frames: u64,
    pub seconds: f64,
}

/// Run `demo` until the platform asks to close
pub fn run<P, R, S>(
    demo: &mut dyn Demo,
    platform: &mut P,
    renderer: &mut R,
    audio: &mut AudioManager<S>,
    show_fps: bool,
) -> RunStats
where
    P: Platform,
    R: Renderer,
    S: AudioSink,
{
    let window = demo.window();
    log::info!(
        "Opening '{}' {}x{} at ({}, {}), clear #{:08x}",
        window.title,
        window.point_width,
        window.point_height,
        window.point_x,
        window.point_y,
        window.clear_color
    );

    let mut arena = FrameArena::new();
    let start = platform.elapsed_seconds();
    let mut last_time = start;
    let mut frames = 0u64;

    while !platform.should_close() {
        arena.reset();
        renderer.begin_frame();

        let now = platform.elapsed_seconds();
        if show_fps && now as i64 != last_time as i64 && now > last_time {
            log::info!("{:.2} FPS", 1.0 / (now - last_time));
        }
        let dt = (now - last_time) as f32;
        last_time = now;

        renderer.set_camera(camera_for_window(platform.window_size(), demo.screen_size()));

        for effect in demo.update(&*platform, dt) {
            audio.play(effect);
        }
        demo.render(renderer, &mut arena);

        platform.pump();
        frames += 1;
    }

    log::info!(
        "'{}' closed after {} frames (peak frame text {} bytes)",
        demo.window().title,
        frames,
        arena.high_water()
    );

    RunStats {
        frames,
        seconds: last_time - start,
    }
}

/// Replay `script` at 60 Hz against `demo` with no window or speakers
pub fn run_headless(demo: &mut dyn Demo, script: Vec<InputFrame>, settings: &Settings) -> RunStats {
    let window = demo.window();
    let window_px = Vec2::new(window.point_width as f32, window.point_height as f32);
    let mut platform = ScriptedPlatform::new(script, 1.0 / 60.0, window_px);
    let mut renderer = DrawList::new();
    let mut audio = AudioManager::new(LogSink, &settings.audio);

    let stats = run(demo, &mut platform, &mut renderer, &mut audio, settings.show_fps);
    log::debug!(
        "Replayed {} input frames, last frame recorded {} draw calls",
        platform.frame_index(),
        renderer.len()
    );
    stats
}
