//! Enemy paddle AI
//!
//! After every bounce the AI predicts where the ball will cross its paddle
//! line, deliberately misjudges the angle by a random amount, and then chases
//! that target at a fixed speed. A random dead zone each frame keeps it from
//! tracking perfectly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::Entity;
use crate::settings::PongTuning;

/// Where a ball moving in a straight line crosses the vertical line `x`.
///
/// Returns `None` when the ball is not moving toward `x`.
pub fn predict_ball_y(ball: &Entity, x: f32) -> Option<f32> {
    let dx = x - ball.position.x;
    if ball.velocity.x == 0.0 || dx.signum() != ball.velocity.x.signum() {
        return None;
    }
    let t = dx / ball.velocity.x;
    Some(ball.position.y + ball.velocity.y * t)
}

/// Targeting state for the AI paddle
#[derive(Debug, Clone)]
pub struct EnemyAi {
    /// Y position the paddle is moving toward
    pub target_y: f32,
    rng: Pcg32,
    seed: u64,
    max_angle: f32,
    dead_zone_min: f32,
    dead_zone_max: f32,
}

impl EnemyAi {
    pub fn new(tuning: &PongTuning) -> Self {
        Self {
            target_y: 0.0,
            rng: Pcg32::seed_from_u64(tuning.seed),
            seed: tuning.seed,
            max_angle: tuning.ai_max_angle_deg.to_radians(),
            dead_zone_min: tuning.ai_dead_zone_min,
            dead_zone_max: tuning.ai_dead_zone_max,
        }
    }

    /// Re-centre the target and restart the random sequence
    pub fn reset(&mut self) {
        self.target_y = 0.0;
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    /// Pick a new target after a bounce.
    ///
    /// Aims at the ball's projected crossing of the enemy's line plus
    /// `tan(angle) * distance` for a random angle; a ball heading away sends
    /// the paddle back to the centre.
    pub fn retarget(&mut self, ball: &Entity, enemy: &Entity) {
        let Some(projected) = predict_ball_y(ball, enemy.position.x) else {
            self.target_y = 0.0;
            return;
        };

        let angle = if self.max_angle > 0.0 {
            self.rng.random_range(-self.max_angle..=self.max_angle)
        } else {
            0.0
        };
        let distance = (enemy.position.x - ball.position.x).abs();
        self.target_y = projected + angle.tan() * distance;
        log::trace!("AI target y={:.1} (projected {:.1})", self.target_y, projected);
    }

    /// Move the enemy toward the target at `speed`, unless already within
    /// this frame's dead zone
    pub fn track(&mut self, enemy: &mut Entity, speed: f32, dt: f32) {
        let dead_zone = if self.dead_zone_max > self.dead_zone_min {
            self.rng.random_range(self.dead_zone_min..self.dead_zone_max)
        } else {
            self.dead_zone_min
        };

        let diff = self.target_y - enemy.position.y;
        if diff.abs() <= dead_zone {
            enemy.velocity.y = 0.0;
            return;
        }

        let step = (speed * dt).min(diff.abs());
        enemy.velocity.y = diff.signum();
        enemy.position.y += diff.signum() * step;
    }
}
