//! Axis-aligned collision detection and paddle response

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};

/// Axis-aligned box described by its centre and full size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    pub fn from_entity(entity: &Entity) -> Self {
        Self::new(entity.position, entity.size)
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.size / 2.0
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.size / 2.0
    }

    /// Whether a point lies inside (edges inclusive); used for UI hit regions
    pub fn contains_point(&self, p: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }
}

/// Overlap test with strict inequalities: boxes that only touch do not collide
#[inline]
pub fn overlaps(a: Aabb, b: Aabb) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}

/// Overlap test between two entities' bounding boxes
#[inline]
pub fn entities_overlap(a: &Entity, b: &Entity) -> bool {
    overlaps(Aabb::from_entity(a), Aabb::from_entity(b))
}

/// Bounce a ball off a paddle it overlaps.
///
/// Sends the ball back toward the side the paddle faces (the player guards
/// the left goal, the enemy the right), moves it out of the paddle so it
/// cannot hit twice, and adds spin: vertical velocity grows with how far from
/// the paddle centre the ball struck (-1 at the bottom edge, +1 at the top
/// edge) times `spin_factor`.
pub fn bounce_off_paddle(ball: &mut Entity, paddle: &Entity, spin_factor: f32) {
    let away = match paddle.kind {
        EntityKind::Player => 1.0,
        EntityKind::Enemy => -1.0,
        EntityKind::Ball if ball.position.x >= paddle.position.x => 1.0,
        EntityKind::Ball => -1.0,
    };
    ball.velocity.x = ball.velocity.x.abs() * away;
    ball.position.x = paddle.position.x + away * (paddle.size.x / 2.0 + ball.size.x / 2.0);

    let half_height = paddle.size.y / 2.0;
    if half_height > 0.0 {
        let offset = ((ball.position.y - paddle.position.y) / half_height).clamp(-1.0, 1.0);
        ball.velocity.y += offset * spin_factor;
    }
}
