//! DDA raycast demo
//!
//! WASD moves the player, the mouse aims. Right mouse paints walls, middle
//! mouse erases them. Holding left mouse shows the ray and where it lands.

use glam::Vec2;

use super::{Demo, mouse_world};
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::frame::FrameArena;
use crate::platform::{Key, Platform, key_axis};
use crate::renderer::{Renderer, centered_rect_xform, corner_rect_xform};
use crate::settings::WindowSettings;
use crate::sim::{Cell, Grid, RayHit, cast_ray};
use crate::{colors, hex_to_rgba, tile_to_world, world_to_tile};

pub struct RaycastDemo {
    window: WindowSettings,
    grid: Grid,
    /// Player position in world units
    player: Vec2,
    /// Mouse position in world units
    mouse: Vec2,
    /// Normalized ray direction in tile space
    ray_direction: Vec2,
    hit: Option<RayHit>,
    show_ray: bool,
}

impl RaycastDemo {
    pub fn new(window: WindowSettings) -> Self {
        Self {
            window,
            grid: Grid::new(MAP_WIDTH, MAP_HEIGHT),
            player: Vec2::ZERO,
            mouse: Vec2::ZERO,
            ray_direction: Vec2::ZERO,
            hit: None,
            show_ray: false,
        }
    }

    fn screen(&self) -> Vec2 {
        Vec2::new(SCREEN_WIDTH, RAYCAST_SCREEN_HEIGHT)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn set_player(&mut self, pos: Vec2) {
        self.player = pos;
    }

    /// Result of the latest cast
    pub fn hit(&self) -> Option<RayHit> {
        self.hit
    }

    /// Latest hit point in world units
    pub fn hit_world(&self) -> Option<Vec2> {
        self.hit
            .map(|h| tile_to_world(h.point, self.screen(), TILE_SIZE))
    }
}

impl Demo for RaycastDemo {
    fn window(&self) -> &WindowSettings {
        &self.window
    }

    fn screen_size(&self) -> Vec2 {
        self.screen()
    }

    fn update(&mut self, platform: &dyn Platform, dt: f32) -> Vec<SoundEffect> {
        let axis = Vec2::new(
            key_axis(platform, Key::D) - key_axis(platform, Key::A),
            key_axis(platform, Key::W) - key_axis(platform, Key::S),
        );
        self.player += axis * RAYCAST_PLAYER_SPEED * dt;

        let screen = self.screen();
        self.mouse = mouse_world(platform, screen);

        let ray_start = world_to_tile(self.player, screen, TILE_SIZE);
        let mouse_tile = world_to_tile(self.mouse, screen, TILE_SIZE);
        self.ray_direction = (mouse_tile - ray_start).normalize_or_zero();

        let (tx, ty) = (mouse_tile.x.floor() as i32, mouse_tile.y.floor() as i32);
        if platform.is_key_down(Key::MouseRight) && self.grid.set(tx, ty, Cell::Occupied) {
            log::trace!("Wall at ({tx}, {ty})");
        }
        if platform.is_key_down(Key::MouseMiddle) {
            self.grid.set(tx, ty, Cell::Empty);
        }

        self.hit = cast_ray(&self.grid, ray_start, self.ray_direction, RAY_MAX_DISTANCE);
        self.show_ray = platform.is_key_down(Key::MouseLeft);

        Vec::new()
    }

    fn render(&self, renderer: &mut dyn Renderer, _text: &mut FrameArena) {
        let screen = self.screen();
        let tile = Vec2::splat(TILE_SIZE);
        let inner = Vec2::splat(TILE_SIZE - 1.0);
        let grid_line = hex_to_rgba(0x585858ff);

        for (x, y, cell) in self.grid.iter() {
            let corner = tile_to_world(Vec2::new(x as f32, y as f32), screen, TILE_SIZE);
            let xform = corner_rect_xform(corner);
            renderer.draw_rect(xform, tile, grid_line);
            let fill = match cell {
                Cell::Empty => colors::BLACK,
                Cell::Occupied => colors::BLUE,
            };
            renderer.draw_rect(xform, inner, fill);
        }

        if self.show_ray {
            renderer.draw_line(self.player, self.mouse, 1.0, colors::WHITE);
            if let Some(point) = self.hit_world() {
                renderer.draw_circle(
                    centered_rect_xform(point, Vec2::splat(4.0)),
                    Vec2::splat(4.0),
                    hex_to_rgba(0xe8d282ff),
                );
            }
        }

        renderer.draw_circle(
            centered_rect_xform(self.player, Vec2::splat(8.0)),
            Vec2::splat(8.0),
            colors::RED,
        );
        renderer.draw_circle(
            centered_rect_xform(self.mouse, Vec2::splat(8.0)),
            Vec2::splat(8.0),
            colors::GREEN,
        );
        renderer.draw_line(
            self.player,
            self.player + self.ray_direction * 10.0,
            1.0,
            hex_to_rgba(0xfa6e79ff),
        );
    }
}
