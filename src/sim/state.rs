//! Pong world state
//!
//! The `World` owns every entity plus the current UX state, and is passed
//! explicitly to `tick` each frame.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

use super::ai::EnemyAi;
use super::collision::Aabb;
use super::entity::{Entity, EntityHandle, EntityKind, EntityPool};
use crate::colors;
use crate::consts::*;
use crate::settings::PongTuning;

/// Coarse application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UxState {
    /// Title screen with a START button
    MainMenu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Someone reached the winning score; RESTART button shown
    GameOver,
}

/// Which Pong rules are in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PongVariant {
    /// One paddle against the walls, straight into play, no scoring
    Classic,
    /// Player against an AI paddle, first to the winning score
    Versus,
}

/// The two sides of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

/// Clickable text button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub label: &'static str,
    /// Hit region in world units
    pub region: Aabb,
}

/// Width of one HUD glyph at scale 1 (monospace font)
pub const GLYPH_WIDTH: f32 = 8.0;
/// Height of HUD text at scale 1
pub const GLYPH_HEIGHT: f32 = 8.0;
/// Padding around button labels
const BUTTON_PADDING: Vec2 = Vec2::new(8.0, 6.0);

impl Button {
    /// Button sized to fit `label`, centred at `center`
    pub fn new(label: &'static str, center: Vec2) -> Self {
        let text = Vec2::new(label.len() as f32 * GLYPH_WIDTH, GLYPH_HEIGHT);
        Self {
            label,
            region: Aabb::new(center, text + BUTTON_PADDING * 2.0),
        }
    }

    #[inline]
    pub fn hit(&self, point: Vec2) -> bool {
        self.region.contains_point(point)
    }
}

/// Main menu START button
pub fn start_button() -> Button {
    Button::new("START", Vec2::new(0.0, -20.0))
}

/// Game over RESTART button
pub fn restart_button() -> Button {
    Button::new("RESTART", Vec2::new(0.0, -20.0))
}

/// Place the player's paddle at its starting spot
pub fn setup_player(en: &mut Entity, tuning: &PongTuning) {
    en.kind = EntityKind::Player;
    en.position = Vec2::new(-(tuning.screen_width / 2.0) + tuning.paddle_padding, 0.0);
    en.velocity = Vec2::ZERO;
    en.size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
    en.color = colors::WHITE;
}

/// Place the AI paddle at its starting spot
pub fn setup_enemy(en: &mut Entity, tuning: &PongTuning) {
    en.kind = EntityKind::Enemy;
    en.position = Vec2::new(tuning.screen_width / 2.0 - tuning.paddle_padding, 0.0);
    en.velocity = Vec2::ZERO;
    en.size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
    en.color = Vec4::new(1.0, 0.4, 0.4, 1.0);
}

/// Centre the ball, heading up and to the left
pub fn setup_ball(en: &mut Entity) {
    en.kind = EntityKind::Ball;
    en.position = Vec2::ZERO;
    en.velocity = Vec2::new(-1.0, 1.0);
    en.size = Vec2::new(BALL_SIZE, BALL_SIZE);
    en.color = colors::WHITE;
}

/// Complete Pong state
#[derive(Debug, Clone)]
pub struct World {
    pub entities: EntityPool,
    pub ux_state: UxState,
    pub variant: PongVariant,
    pub tuning: PongTuning,
    pub player: EntityHandle,
    pub ball: EntityHandle,
    /// Only present in the versus variant
    pub enemy: Option<EntityHandle>,
    pub ai: EnemyAi,
}

impl World {
    /// Build a world with its paddles and ball in their starting positions
    pub fn new(variant: PongVariant, tuning: PongTuning) -> Self {
        let mut entities = EntityPool::new(MAX_ENTITY_COUNT);

        let player = entities.allocate(EntityKind::Player);
        let ball = entities.allocate(EntityKind::Ball);
        let enemy = match variant {
            PongVariant::Classic => None,
            PongVariant::Versus => Some(entities.allocate(EntityKind::Enemy)),
        };

        let ux_state = match variant {
            PongVariant::Classic => UxState::Playing,
            PongVariant::Versus => UxState::MainMenu,
        };

        let ai = EnemyAi::new(&tuning);
        let mut world = Self {
            entities,
            ux_state,
            variant,
            tuning,
            player,
            ball,
            enemy,
            ai,
        };
        world.reset_positions();
        world
    }

    /// Put paddles and ball back where they start
    pub fn reset_positions(&mut self) {
        let tuning = &self.tuning;
        if let Some(en) = self.entities.get_mut(self.player) {
            setup_player(en, tuning);
        }
        if let Some(en) = self.entities.get_mut(self.ball) {
            setup_ball(en);
        }
        if let Some(en) = self.enemy.and_then(|h| self.entities.get_mut(h)) {
            setup_enemy(en, tuning);
        }
        self.ai.reset();
    }

    /// Start a fresh match: positions reset and scores zeroed
    pub fn reset_match(&mut self) {
        self.reset_positions();
        for en in self.entities.iter_valid_mut() {
            en.score = 0;
        }
    }

    pub fn player(&self) -> Option<&Entity> {
        self.entities.get(self.player)
    }

    pub fn ball(&self) -> Option<&Entity> {
        self.entities.get(self.ball)
    }

    pub fn enemy(&self) -> Option<&Entity> {
        self.enemy.and_then(|h| self.entities.get(h))
    }

    /// Score for one side (the enemy scores 0 when there is no enemy)
    pub fn score(&self, side: Side) -> u32 {
        let entity = match side {
            Side::Player => self.player(),
            Side::Enemy => self.enemy(),
        };
        entity.map(|e| e.score).unwrap_or(0)
    }

    /// Screen half extents
    #[inline]
    pub fn half_screen(&self) -> Vec2 {
        Vec2::new(self.tuning.screen_width, self.tuning.screen_height) / 2.0
    }
}
