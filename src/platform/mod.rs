//! Platform abstraction layer
//!
//! Handles the host framework's side of the frame loop:
//! - Time
//! - Keyboard/mouse polling
//! - Window size and close requests
//!
//! [`ScriptedPlatform`] replays recorded input at a fixed timestep so demos
//! can run headless.

use glam::{Mat4, Vec2, Vec4};

/// Keys and mouse buttons the demos poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Escape,
    MouseLeft,
    MouseRight,
    MouseMiddle,
}

/// What the demos need from the host each frame
pub trait Platform {
    /// Monotonic seconds since start
    fn elapsed_seconds(&self) -> f64;

    /// The user asked to close the window
    fn should_close(&self) -> bool;

    fn is_key_down(&self, key: Key) -> bool;

    /// Pressed this frame (was up last frame)
    fn is_key_just_pressed(&self, key: Key) -> bool;

    /// Mouse position in window pixels, origin bottom-left
    fn mouse_position(&self) -> Vec2;

    /// Window size in pixels
    fn window_size(&self) -> Vec2;

    /// End-of-frame housekeeping: advance input and time
    fn pump(&mut self);
}

/// `is_key_down` as 0.0 or 1.0, for axis arithmetic like `W - S`
#[inline]
pub fn key_axis(platform: &dyn Platform, key: Key) -> f32 {
    if platform.is_key_down(key) { 1.0 } else { 0.0 }
}

/// Map a mouse position in window pixels to world coordinates.
///
/// Pixels go to normalized device coordinates, back through the inverse
/// projection, then through the view transform.
pub fn screen_to_world(mouse: Vec2, window: Vec2, projection: Mat4, view: Mat4) -> Vec2 {
    let ndc_x = mouse.x / (window.x * 0.5) - 1.0;
    let ndc_y = mouse.y / (window.y * 0.5) - 1.0;

    let world = projection.inverse() * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
    let world = view * world;
    Vec2::new(world.x, world.y)
}

/// Orthographic projection covering `screen` world units centred on the origin
pub fn centered_ortho(screen: Vec2) -> Mat4 {
    Mat4::orthographic_rh_gl(
        -screen.x / 2.0,
        screen.x / 2.0,
        -screen.y / 2.0,
        screen.y / 2.0,
        -1.0,
        10.0,
    )
}

/// One frame of recorded input
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    pub keys_down: Vec<Key>,
    pub mouse: Vec2,
}

impl InputFrame {
    pub fn with_keys(keys: &[Key]) -> Self {
        Self {
            keys_down: keys.to_vec(),
            mouse: Vec2::ZERO,
        }
    }

    pub fn at_mouse(mut self, mouse: Vec2) -> Self {
        self.mouse = mouse;
        self
    }
}

/// Headless platform replaying a fixed script of input frames.
///
/// Time advances by `dt` per [`Platform::pump`]; the window closes after the
/// last scripted frame.
#[derive(Debug, Clone)]
pub struct ScriptedPlatform {
    frames: Vec<InputFrame>,
    current: usize,
    dt: f64,
    window: Vec2,
}

impl ScriptedPlatform {
    pub fn new(frames: Vec<InputFrame>, dt: f64, window: Vec2) -> Self {
        Self {
            frames,
            current: 0,
            dt,
            window,
        }
    }

    /// Index of the frame being replayed
    #[inline]
    pub fn frame_index(&self) -> usize {
        self.current
    }

    fn frame(&self, index: usize) -> Option<&InputFrame> {
        self.frames.get(index)
    }
}

impl Platform for ScriptedPlatform {
    fn elapsed_seconds(&self) -> f64 {
        self.current as f64 * self.dt
    }

    fn should_close(&self) -> bool {
        self.current >= self.frames.len()
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.frame(self.current)
            .is_some_and(|f| f.keys_down.contains(&key))
    }

    fn is_key_just_pressed(&self, key: Key) -> bool {
        let was_down = self
            .current
            .checked_sub(1)
            .and_then(|i| self.frame(i))
            .is_some_and(|f| f.keys_down.contains(&key));
        self.is_key_down(key) && !was_down
    }

    fn mouse_position(&self) -> Vec2 {
        self.frame(self.current).map(|f| f.mouse).unwrap_or_default()
    }

    fn window_size(&self) -> Vec2 {
        self.window
    }

    fn pump(&mut self) {
        if self.current < self.frames.len() {
            self.current += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_world_identity() {
        let window = Vec2::new(640.0, 360.0);
        let p = screen_to_world(Vec2::ZERO, window, Mat4::IDENTITY, Mat4::IDENTITY);
        assert_eq!(p, Vec2::new(-1.0, -1.0));
        let p = screen_to_world(window, window, Mat4::IDENTITY, Mat4::IDENTITY);
        assert_eq!(p, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_screen_to_world_ortho() {
        let window = Vec2::new(640.0, 352.0);
        let proj = centered_ortho(Vec2::new(320.0, 176.0));
        let centre = screen_to_world(window / 2.0, window, proj, Mat4::IDENTITY);
        assert!(centre.length() < 1e-4);

        let corner = screen_to_world(window, window, proj, Mat4::IDENTITY);
        assert!((corner - Vec2::new(160.0, 88.0)).length() < 1e-3);

        // View offsets the result
        let view = Mat4::from_translation(glam::Vec3::new(10.0, 0.0, 0.0));
        let moved = screen_to_world(window / 2.0, window, proj, view);
        assert!((moved - Vec2::new(10.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_scripted_platform_edges() {
        let mut p = ScriptedPlatform::new(
            vec![
                InputFrame::with_keys(&[Key::Escape]),
                InputFrame::with_keys(&[Key::Escape, Key::W]),
                InputFrame::default(),
            ],
            0.5,
            Vec2::new(640.0, 360.0),
        );
        assert!(p.is_key_just_pressed(Key::Escape));
        p.pump();
        assert!(p.is_key_down(Key::Escape));
        assert!(!p.is_key_just_pressed(Key::Escape));
        assert!(p.is_key_just_pressed(Key::W));
        assert_eq!(key_axis(&p, Key::W) - key_axis(&p, Key::S), 1.0);
        p.pump();
        assert!(!p.should_close());
        assert_eq!(p.elapsed_seconds(), 1.0);
        p.pump();
        assert!(p.should_close());
        p.pump();
        assert_eq!(p.frame_index(), 3);
    }
}
