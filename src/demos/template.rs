//! Starting point for new demos: one entity drawn as a square

use glam::Vec2;

use super::Demo;
use crate::audio::SoundEffect;
use crate::colors;
use crate::consts::*;
use crate::frame::FrameArena;
use crate::platform::Platform;
use crate::renderer::{Renderer, corner_rect_xform};
use crate::settings::WindowSettings;
use crate::sim::{EntityKind, EntityPool};

const MARKER_SIZE: Vec2 = Vec2::new(10.0, 10.0);

pub struct TemplateDemo {
    window: WindowSettings,
    entities: EntityPool,
}

impl TemplateDemo {
    pub fn new(window: WindowSettings) -> Self {
        let mut entities = EntityPool::new(MAX_ENTITY_COUNT);
        let player = entities.allocate(EntityKind::Player);
        if let Some(en) = entities.get_mut(player) {
            en.position = Vec2::ZERO;
        }
        Self { window, entities }
    }

    pub fn entities(&self) -> &EntityPool {
        &self.entities
    }
}

impl Demo for TemplateDemo {
    fn window(&self) -> &WindowSettings {
        &self.window
    }

    fn screen_size(&self) -> Vec2 {
        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    fn update(&mut self, _platform: &dyn Platform, _dt: f32) -> Vec<SoundEffect> {
        Vec::new()
    }

    fn render(&self, renderer: &mut dyn Renderer, _text: &mut FrameArena) {
        for en in self.entities.iter_valid() {
            match en.kind {
                EntityKind::Player | EntityKind::Ball | EntityKind::Enemy => {
                    renderer.draw_rect(corner_rect_xform(en.position), MARKER_SIZE, colors::WHITE);
                }
            }
        }
    }
}
