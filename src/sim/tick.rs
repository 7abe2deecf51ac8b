//! Per-frame Pong update
//!
//! Runs the UX state machine and, while playing, the paddle/ball physics and
//! enemy AI.

use glam::Vec2;

use super::collision::{bounce_off_paddle, entities_overlap};
use super::entity::Entity;
use super::state::{PongVariant, Side, UxState, World, restart_button, setup_ball, start_button};

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Player paddle direction: +1 up, -1 down (`W` minus `S`)
    pub move_axis: f32,
    /// Escape was pressed this frame (edge, not held)
    pub pause: bool,
    /// Left click this frame, in world coordinates
    pub click: Option<Vec2>,
}

/// Things that happened during a tick, for sound and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    StateChanged { from: UxState, to: UxState },
    WallHit,
    PaddleHit { side: Side },
    Scored { by: Side },
    GameOver { winner: Side },
}

fn set_state(world: &mut World, to: UxState, events: &mut Vec<GameEvent>) {
    let from = world.ux_state;
    if from != to {
        log::debug!("UX state {:?} -> {:?}", from, to);
        world.ux_state = to;
        events.push(GameEvent::StateChanged { from, to });
    }
}

/// Advance the world by one frame of `dt` seconds
pub fn tick(world: &mut World, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match world.ux_state {
        UxState::MainMenu => {
            if input.click.is_some_and(|p| start_button().hit(p)) {
                world.reset_match();
                set_state(world, UxState::Playing, &mut events);
            }
        }
        UxState::Paused => {
            if input.pause {
                set_state(world, UxState::Playing, &mut events);
                simulate(world, input, dt, &mut events);
            }
        }
        UxState::GameOver => {
            if input.click.is_some_and(|p| restart_button().hit(p)) {
                world.reset_match();
                set_state(world, UxState::Playing, &mut events);
            }
        }
        UxState::Playing => {
            if input.pause {
                set_state(world, UxState::Paused, &mut events);
            } else {
                simulate(world, input, dt, &mut events);
            }
        }
    }

    events
}

/// Keep a paddle fully on screen vertically
fn clamp_to_screen(en: &mut Entity, half_height: f32) {
    let half = en.size.y / 2.0;
    if en.position.y + half >= half_height {
        en.position.y = half_height - half;
    }
    if en.position.y - half <= -half_height {
        en.position.y = -half_height + half;
    }
}

/// One frame of gameplay
fn simulate(world: &mut World, input: &TickInput, dt: f32, events: &mut Vec<GameEvent>) {
    let half_screen = world.half_screen();
    let tuning = world.tuning.clone();

    // Player paddle
    let Some(player) = world.entities.get_mut(world.player) else {
        log::warn!("Player entity missing");
        return;
    };
    player.velocity.y = input.move_axis.clamp(-1.0, 1.0);
    player.position += player.velocity * tuning.paddle_speed * dt;
    clamp_to_screen(player, half_screen.y);
    let player = player.clone();

    let enemy = world.enemy().cloned();

    // Ball movement and walls
    let Some(ball) = world.entities.get_mut(world.ball) else {
        log::warn!("Ball entity missing");
        return;
    };
    let mut bounced = false;
    ball.velocity = ball.velocity.normalize_or_zero();
    ball.position += ball.velocity * tuning.ball_speed * dt;

    let half_ball = ball.size / 2.0;
    if ball.position.y + half_ball.y >= half_screen.y
        || ball.position.y - half_ball.y <= -half_screen.y
    {
        ball.velocity.y *= -1.0;
        // Snap back inside against whichever wall was hit
        let side = if ball.position.y > 0.0 { 1.0 } else { -1.0 };
        ball.position.y = side * (half_screen.y - half_ball.y);
        bounced = true;
        events.push(GameEvent::WallHit);
    }

    // Paddles
    if entities_overlap(ball, &player) {
        bounce_off_paddle(ball, &player, tuning.spin_factor);
        bounced = true;
        events.push(GameEvent::PaddleHit { side: Side::Player });
    }
    if let Some(enemy) = &enemy {
        if entities_overlap(ball, enemy) {
            bounce_off_paddle(ball, enemy, tuning.spin_factor);
            bounced = true;
            events.push(GameEvent::PaddleHit { side: Side::Enemy });
        }
    }

    // Leaving the court
    let scorer = if ball.position.x + half_ball.x >= half_screen.x {
        Some(Side::Player)
    } else if ball.position.x - half_ball.x <= -half_screen.x {
        Some(Side::Enemy)
    } else {
        None
    };
    if scorer.is_some() {
        // Keeps its heading; only the position is reset
        let velocity = ball.velocity;
        setup_ball(ball);
        ball.velocity = velocity;
    }
    let ball = ball.clone();

    if let Some(by) = scorer {
        on_score(world, by, events);
        if world.ux_state != UxState::Playing {
            return;
        }
    }

    // Enemy AI
    if let Some(handle) = world.enemy {
        let Some(enemy) = world.entities.get_mut(handle) else {
            return;
        };
        if bounced {
            world.ai.retarget(&ball, enemy);
        }
        world.ai.track(enemy, tuning.enemy_speed, dt);
        clamp_to_screen(enemy, half_screen.y);
    }
}

/// Award a point. Classic Pong has no scoreboard, so nothing is counted there.
fn on_score(world: &mut World, by: Side, events: &mut Vec<GameEvent>) {
    if world.variant == PongVariant::Classic {
        return;
    }

    let handle = match by {
        Side::Player => Some(world.player),
        Side::Enemy => world.enemy,
    };
    let Some(scorer) = handle.and_then(|h| world.entities.get_mut(h)) else {
        return;
    };
    scorer.score += 1;
    let score = scorer.score;
    events.push(GameEvent::Scored { by });
    log::info!(
        "{:?} scores: {} - {}",
        by,
        world.score(Side::Player),
        world.score(Side::Enemy)
    );

    if score >= world.tuning.win_score {
        log::info!("Game over, {:?} wins", by);
        events.push(GameEvent::GameOver { winner: by });
        set_state(world, UxState::GameOver, events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PongTuning;
    use crate::sim::collision::{Aabb, overlaps};

    const DT: f32 = 1.0 / 60.0;

    fn click(p: Vec2) -> TickInput {
        TickInput {
            click: Some(p),
            ..Default::default()
        }
    }

    fn escape() -> TickInput {
        TickInput {
            pause: true,
            ..Default::default()
        }
    }

    fn playing_world() -> World {
        let mut world = World::new(PongVariant::Versus, PongTuning::default());
        tick(&mut world, &click(start_button().region.center), DT);
        assert_eq!(world.ux_state, UxState::Playing);
        world
    }

    #[test]
    fn test_menu_ignores_clicks_outside_start() {
        let mut world = World::new(PongVariant::Versus, PongTuning::default());
        let events = tick(&mut world, &click(Vec2::new(100.0, 80.0)), DT);
        assert!(events.is_empty());
        assert_eq!(world.ux_state, UxState::MainMenu);

        // Nothing moves on the menu
        tick(&mut world, &TickInput::default(), DT);
        assert_eq!(world.ball().unwrap().position, Vec2::ZERO);
    }

    #[test]
    fn test_menu_start_click_begins_play() {
        let mut world = World::new(PongVariant::Versus, PongTuning::default());
        let events = tick(&mut world, &click(Vec2::new(0.0, -20.0)), DT);
        assert_eq!(
            events,
            vec![GameEvent::StateChanged {
                from: UxState::MainMenu,
                to: UxState::Playing
            }]
        );
    }

    #[test]
    fn test_escape_toggles_pause() {
        let mut world = playing_world();
        tick(&mut world, &escape(), DT);
        assert_eq!(world.ux_state, UxState::Paused);

        // Held (not pressed) frames leave it paused and frozen
        let frozen = world.ball().unwrap().position;
        tick(&mut world, &TickInput::default(), DT);
        assert_eq!(world.ux_state, UxState::Paused);
        assert_eq!(world.ball().unwrap().position, frozen);

        tick(&mut world, &escape(), DT);
        assert_eq!(world.ux_state, UxState::Playing);
        assert_ne!(world.ball().unwrap().position, frozen);
    }

    #[test]
    fn test_player_paddle_moves_and_clamps() {
        let mut world = playing_world();
        let up = TickInput {
            move_axis: 1.0,
            ..Default::default()
        };
        tick(&mut world, &up, 0.1);
        assert!((world.player().unwrap().position.y - 10.0).abs() < 1e-4);

        for _ in 0..100 {
            tick(&mut world, &up, 0.1);
        }
        // Top edge pinned to the top of the screen
        assert_eq!(world.player().unwrap().position.y, 90.0 - 20.0);
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let mut world = playing_world();
        let ball = world.ball;
        {
            let b = world.entities.get_mut(ball).unwrap();
            b.position = Vec2::new(0.0, 87.0);
            b.velocity = Vec2::new(0.0, 1.0);
        }
        let events = tick(&mut world, &TickInput::default(), DT);
        assert!(events.contains(&GameEvent::WallHit));
        let b = world.ball().unwrap();
        assert!(b.velocity.y < 0.0);
        assert_eq!(b.position.y, 87.5);
    }

    fn score_point(world: &mut World, by: Side) -> Vec<GameEvent> {
        let ball = world.ball;
        let b = world.entities.get_mut(ball).unwrap();
        // Just short of the far edge, heading out
        let (x, vx) = match by {
            Side::Player => (157.0, 1.0),
            Side::Enemy => (-157.0, -1.0),
        };
        b.position = Vec2::new(x, 0.0);
        b.velocity = Vec2::new(vx, 0.0);
        tick(world, &TickInput::default(), DT)
    }

    #[test]
    fn test_score_recenters_ball() {
        let mut world = playing_world();
        let events = score_point(&mut world, Side::Enemy);
        assert!(events.contains(&GameEvent::Scored { by: Side::Enemy }));
        assert_eq!(world.score(Side::Enemy), 1);
        assert_eq!(world.score(Side::Player), 0);
        assert_eq!(world.ball().unwrap().position, Vec2::ZERO);
    }

    #[test]
    fn test_game_over_exactly_at_win_score() {
        let mut world = playing_world();

        for n in 1..5 {
            let events = score_point(&mut world, Side::Player);
            assert_eq!(world.score(Side::Player), n);
            assert!(!events.iter().any(|e| matches!(e, GameEvent::GameOver { .. })));
            assert_eq!(world.ux_state, UxState::Playing);
        }

        let events = score_point(&mut world, Side::Player);
        assert_eq!(world.score(Side::Player), 5);
        assert!(events.contains(&GameEvent::GameOver { winner: Side::Player }));
        assert_eq!(world.ux_state, UxState::GameOver);

        // Next frames stay put and do not repeat the transition
        for _ in 0..3 {
            let events = tick(&mut world, &TickInput::default(), DT);
            assert!(events.is_empty());
            assert_eq!(world.ux_state, UxState::GameOver);
        }
    }

    #[test]
    fn test_restart_resets_match() {
        let mut world = playing_world();
        for _ in 0..5 {
            score_point(&mut world, Side::Enemy);
        }
        assert_eq!(world.ux_state, UxState::GameOver);

        // Start button spot is also restart's, but a miss does nothing
        tick(&mut world, &click(Vec2::new(0.0, 60.0)), DT);
        assert_eq!(world.ux_state, UxState::GameOver);

        tick(&mut world, &click(restart_button().region.center), DT);
        assert_eq!(world.ux_state, UxState::Playing);
        assert_eq!(world.score(Side::Enemy), 0);
        assert_eq!(world.ball().unwrap().position, Vec2::ZERO);
        assert_eq!(world.enemy().unwrap().position, Vec2::new(140.0, 0.0));
    }

    #[test]
    fn test_classic_never_ends() {
        let mut world = World::new(PongVariant::Classic, PongTuning::default());
        for _ in 0..10 {
            let events = score_point(&mut world, Side::Player);
            assert!(!events.iter().any(|e| matches!(e, GameEvent::Scored { .. })));
            assert_eq!(world.ball().unwrap().position, Vec2::ZERO);
        }
        assert_eq!(world.ux_state, UxState::Playing);
    }

    #[test]
    fn test_ball_reflects_off_paddle_on_diagonal_approach() {
        // Tall court so the diagonal path never meets a wall
        let tuning = PongTuning {
            screen_height: 400.0,
            spin_factor: 0.0,
            ..Default::default()
        };
        let mut world = World::new(PongVariant::Classic, tuning);
        let (player, ball) = (world.player, world.ball);
        world.entities.get_mut(player).unwrap().position = Vec2::new(-150.0, 0.0);
        {
            let b = world.entities.get_mut(ball).unwrap();
            b.position = Vec2::new(0.0, -147.5);
            b.velocity = Vec2::new(-1.0, 1.0).normalize();
        }

        let mut hit = false;
        for _ in 0..1000 {
            let before = world.ball().unwrap().clone();
            let events = tick(&mut world, &TickInput::default(), DT);
            if events.contains(&GameEvent::PaddleHit { side: Side::Player }) {
                // The overlap test itself saw the contact
                let moved = Aabb::new(
                    before.position + before.velocity * world.tuning.ball_speed * DT,
                    before.size,
                );
                assert!(overlaps(moved, Aabb::from_entity(world.player().unwrap())));
                assert!(before.velocity.x < 0.0);
                assert!(world.ball().unwrap().velocity.x > 0.0);
                hit = true;
                break;
            }
            if world.ball().unwrap().position.x <= -147.5 {
                break;
            }
        }
        assert!(hit, "ball should meet the paddle");
    }

    #[test]
    fn test_enemy_tracks_ball_after_bounce() {
        let tuning = PongTuning {
            ai_max_angle_deg: 0.0,
            ai_dead_zone_min: 0.0,
            ai_dead_zone_max: 0.0,
            ..Default::default()
        };
        let mut world = World::new(PongVariant::Versus, tuning);
        tick(&mut world, &click(start_button().region.center), DT);

        // Ball just left the player's paddle heading right and up
        let ball = world.ball;
        {
            let b = world.entities.get_mut(ball).unwrap();
            b.position = Vec2::new(-136.0, 0.0);
            b.velocity = Vec2::new(-1.0, 0.1);
        }
        let events = tick(&mut world, &TickInput::default(), DT);
        assert!(events.contains(&GameEvent::PaddleHit { side: Side::Player }));
        assert!(world.ai.target_y > 0.0);
        assert!(world.enemy().unwrap().position.y > 0.0);
    }

    #[test]
    fn test_same_seed_same_match() {
        let run = || {
            let mut world = playing_world();
            let mut log = Vec::new();
            for i in 0..600 {
                let input = TickInput {
                    move_axis: if (i / 40) % 2 == 0 { 1.0 } else { -1.0 },
                    ..Default::default()
                };
                log.extend(tick(&mut world, &input, DT));
            }
            (log, world.enemy().unwrap().position, world.ball().unwrap().position)
        };
        assert_eq!(run(), run());
    }
}
