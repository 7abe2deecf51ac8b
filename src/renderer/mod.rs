//! Rendering interface
//!
//! The host framework does the actual drawing. Demos talk to it through the
//! [`Renderer`] trait; [`DrawList`] records the calls instead, which is what
//! the headless binaries and the tests use.

pub mod camera;
pub mod draw_list;

pub use camera::{camera_for_window, centered_rect_xform, corner_rect_xform};
pub use draw_list::{DrawCommand, DrawList};

use glam::{Mat4, Vec2, Vec4};

/// Handle to a font loaded by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// Size of a block of drawn text, in world units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
}

/// Drawing primitives the demos need from the host
pub trait Renderer {
    /// Called once at the start of every frame
    fn begin_frame(&mut self) {}

    /// Set the camera transform applied to everything drawn after it
    fn set_camera(&mut self, camera: Mat4);

    /// Filled rectangle with its bottom-left corner at the transform origin
    fn draw_rect(&mut self, xform: Mat4, size: Vec2, color: Vec4);

    fn draw_line(&mut self, p0: Vec2, p1: Vec2, width: f32, color: Vec4);

    /// Filled circle inscribed in a `size` box at the transform origin
    fn draw_circle(&mut self, xform: Mat4, size: Vec2, color: Vec4);

    /// Draw text with its baseline-left at `position`
    fn draw_text(
        &mut self,
        font: FontId,
        text: &str,
        font_height: u32,
        position: Vec2,
        scale: Vec2,
        color: Vec4,
    ) -> TextMetrics;

    /// Measure text without drawing it
    fn measure_text(&self, font: FontId, text: &str, font_height: u32, scale: Vec2) -> TextMetrics;
}
