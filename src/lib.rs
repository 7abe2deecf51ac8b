//! Arcade Demos - small interactive demos on a host game framework
//!
//! Core modules:
//! - `sim`: Simulation (grid raycasting, entity pool, collisions, game state)
//! - `demos`: The four demos and the shared frame loop
//! - `renderer`: Draw-call interface and a recording implementation
//! - `platform`: Input/clock abstraction and screen-to-world mapping
//! - `audio`: Sound effect triggering
//! - `frame`: Per-frame transient text storage
//! - `settings`: Window and tuning configuration

pub mod audio;
pub mod demos;
pub mod frame;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{PongTuning, Settings, WindowSettings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Virtual screen size the Pong demos simulate in (world units)
    pub const SCREEN_WIDTH: f32 = 320.0;
    pub const SCREEN_HEIGHT: f32 = 180.0;

    /// Raycast demo screen is 22 tiles tall, so it is slightly shorter
    pub const RAYCAST_SCREEN_HEIGHT: f32 = 176.0;
    /// Size of one raycast tile in world units
    pub const TILE_SIZE: f32 = 8.0;
    /// Raycast map dimensions in tiles
    pub const MAP_WIDTH: usize = 40;
    pub const MAP_HEIGHT: usize = 22;
    /// Maximum ray length in tiles
    pub const RAY_MAX_DISTANCE: f32 = 100.0;
    /// Raycast player speed (world units/s)
    pub const RAYCAST_PLAYER_SPEED: f32 = 25.0;

    /// Entity pool capacity
    pub const MAX_ENTITY_COUNT: usize = 1024;

    /// Paddle defaults
    pub const PADDLE_PADDING: f32 = 20.0;
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 40.0;
    pub const PADDLE_SPEED: f32 = 100.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 5.0;
    pub const BALL_SPEED: f32 = 100.0;

    /// Points needed to end a versus match
    pub const WIN_SCORE: u32 = 5;

    /// Font used for all HUD text
    pub const FONT_PATH: &str = "res/pong/PressStart2P-Regular.ttf";
    pub const FONT_HEIGHT: u32 = 48;
}

/// Convert a world position (origin at screen centre) into tile coordinates
#[inline]
pub fn world_to_tile(pos: Vec2, screen: Vec2, tile_size: f32) -> Vec2 {
    (pos + screen / 2.0) / tile_size
}

/// Convert tile coordinates back into a world position (origin at screen centre)
#[inline]
pub fn tile_to_world(tile: Vec2, screen: Vec2, tile_size: f32) -> Vec2 {
    tile * tile_size - screen / 2.0
}

/// Convert a `0xRRGGBBAA` colour into normalized RGBA
#[inline]
pub fn hex_to_rgba(hex: u32) -> glam::Vec4 {
    glam::Vec4::new(
        ((hex >> 24) & 0xff) as f32 / 255.0,
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// Common colours
pub mod colors {
    use glam::Vec4;

    pub const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);
}
