//! Pong, in both its classic and versus flavours

use glam::{Vec2, Vec4};

use super::{Demo, mouse_world};
use crate::audio::SoundEffect;
use crate::colors;
use crate::consts::*;
use crate::frame::{FrameArena, FrameText};
use crate::platform::{Key, Platform, key_axis};
use crate::renderer::{FontId, Renderer, centered_rect_xform};
use crate::settings::{PongTuning, WindowSettings};
use crate::sim::{
    Button, EntityKind, PongVariant, Side, TickInput, UxState, World, restart_button,
    start_button, tick,
};

const HUD_FONT: FontId = FontId(0);
const TITLE_Y: f32 = 30.0;
const SCORE_Y: f32 = 70.0;

/// HUD text scale: glyphs come out 8 world units tall
fn hud_scale() -> Vec2 {
    Vec2::splat(8.0 / FONT_HEIGHT as f32)
}

pub struct PongDemo {
    window: WindowSettings,
    world: World,
}

impl PongDemo {
    pub fn new(variant: PongVariant, window: WindowSettings, tuning: PongTuning) -> Self {
        log::info!("Starting {:?} pong", variant);
        Self {
            window,
            world: World::new(variant, tuning),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Translate host input into a tick command
    fn read_input(&self, platform: &dyn Platform) -> TickInput {
        let click = platform
            .is_key_just_pressed(Key::MouseLeft)
            .then(|| mouse_world(platform, self.screen_size()));
        TickInput {
            move_axis: key_axis(platform, Key::W) - key_axis(platform, Key::S),
            pause: platform.is_key_just_pressed(Key::Escape),
            click,
        }
    }

    fn draw_centered(
        renderer: &mut dyn Renderer,
        arena: &FrameArena,
        text: FrameText,
        center: Vec2,
        color: Vec4,
    ) {
        let Some(s) = arena.get(text) else {
            return;
        };
        let metrics = renderer.measure_text(HUD_FONT, s, FONT_HEIGHT, hud_scale());
        let position = center - Vec2::new(metrics.width, metrics.height) / 2.0;
        renderer.draw_text(HUD_FONT, s, FONT_HEIGHT, position, hud_scale(), color);
    }

    fn draw_button(renderer: &mut dyn Renderer, arena: &mut FrameArena, button: &Button) {
        let region = button.region;
        renderer.draw_rect(
            centered_rect_xform(region.center, region.size),
            region.size,
            Vec4::new(0.2, 0.2, 0.3, 1.0),
        );
        let label = arena.push_str(button.label);
        Self::draw_centered(renderer, arena, label, region.center, colors::WHITE);
    }
}

impl Demo for PongDemo {
    fn window(&self) -> &WindowSettings {
        &self.window
    }

    fn screen_size(&self) -> Vec2 {
        Vec2::new(self.world.tuning.screen_width, self.world.tuning.screen_height)
    }

    fn update(&mut self, platform: &dyn Platform, dt: f32) -> Vec<SoundEffect> {
        let input = self.read_input(platform);
        tick(&mut self.world, &input, dt)
            .iter()
            .filter_map(SoundEffect::for_event)
            .collect()
    }

    fn render(&self, renderer: &mut dyn Renderer, text: &mut FrameArena) {
        let world = &self.world;

        if world.ux_state != UxState::MainMenu {
            for en in world.entities.iter_valid() {
                match en.kind {
                    EntityKind::Player | EntityKind::Enemy | EntityKind::Ball => {
                        renderer.draw_rect(
                            centered_rect_xform(en.position, en.size),
                            en.size,
                            en.color,
                        );
                    }
                }
            }
        }

        if world.variant == PongVariant::Versus && world.ux_state != UxState::MainMenu {
            let score = text.format(format_args!(
                "{}   {}",
                world.score(Side::Player),
                world.score(Side::Enemy)
            ));
            Self::draw_centered(renderer, text, score, Vec2::new(0.0, SCORE_Y), colors::WHITE);
        }

        match world.ux_state {
            UxState::MainMenu => {
                let title = text.push_str("PONG");
                Self::draw_centered(renderer, text, title, Vec2::new(0.0, TITLE_Y), colors::WHITE);
                Self::draw_button(renderer, text, &start_button());
            }
            UxState::Paused => {
                let paused = text.push_str("PAUSED");
                Self::draw_centered(renderer, text, paused, Vec2::new(0.0, TITLE_Y), colors::WHITE);
            }
            UxState::GameOver => {
                let winner = if world.score(Side::Player) >= world.tuning.win_score {
                    "YOU WIN"
                } else {
                    "YOU LOSE"
                };
                let banner = text.push_str(winner);
                Self::draw_centered(renderer, text, banner, Vec2::new(0.0, TITLE_Y), colors::WHITE);
                Self::draw_button(renderer, text, &restart_button());
            }
            UxState::Playing => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{InputFrame, ScriptedPlatform};
    use crate::renderer::DrawList;

    const WINDOW: Vec2 = Vec2::new(640.0, 360.0);

    fn pixel_for(world: Vec2) -> Vec2 {
        (world / Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT) + 0.5) * WINDOW
    }

    fn versus() -> PongDemo {
        PongDemo::new(PongVariant::Versus, WindowSettings::pong(), PongTuning::default())
    }

    fn draw(demo: &PongDemo) -> DrawList {
        let mut list = DrawList::new();
        demo.render(&mut list, &mut FrameArena::new());
        list
    }

    #[test]
    fn test_menu_click_starts_match() {
        let mut demo = versus();
        let list = draw(&demo);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["PONG", "START"]);

        let p = ScriptedPlatform::new(
            vec![InputFrame::with_keys(&[Key::MouseLeft]).at_mouse(pixel_for(Vec2::new(0.0, -20.0)))],
            1.0 / 60.0,
            WINDOW,
        );
        let sounds = demo.update(&p, 0.0);
        assert_eq!(demo.world().ux_state, UxState::Playing);
        assert_eq!(sounds, vec![SoundEffect::Click]);
    }

    #[test]
    fn test_click_outside_button_does_nothing() {
        let mut demo = versus();
        let p = ScriptedPlatform::new(
            vec![InputFrame::with_keys(&[Key::MouseLeft]).at_mouse(pixel_for(Vec2::new(0.0, 60.0)))],
            1.0 / 60.0,
            WINDOW,
        );
        assert!(demo.update(&p, 0.0).is_empty());
        assert_eq!(demo.world().ux_state, UxState::MainMenu);
    }

    #[test]
    fn test_playing_draws_paddles_ball_and_score() {
        let mut demo = versus();
        demo.world_mut().ux_state = UxState::Playing;
        let list = draw(&demo);
        assert_eq!(list.rect_count(), 3);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["0   0"]);
    }

    #[test]
    fn test_classic_has_no_score_text() {
        let demo = PongDemo::new(
            PongVariant::Classic,
            WindowSettings::pong_classic(),
            PongTuning::default(),
        );
        let list = draw(&demo);
        assert_eq!(list.rect_count(), 2);
        assert_eq!(list.texts().count(), 0);
    }

    #[test]
    fn test_escape_pauses_and_shows_banner() {
        let mut demo = versus();
        demo.world_mut().ux_state = UxState::Playing;
        let p = ScriptedPlatform::new(
            vec![InputFrame::with_keys(&[Key::Escape])],
            1.0 / 60.0,
            WINDOW,
        );
        demo.update(&p, 1.0 / 60.0);
        assert_eq!(demo.world().ux_state, UxState::Paused);
        assert!(draw(&demo).texts().any(|t| t == "PAUSED"));
    }

    #[test]
    fn test_game_over_banner() {
        let mut demo = versus();
        let world = demo.world_mut();
        world.ux_state = UxState::GameOver;
        let enemy = world.enemy.unwrap();
        world.entities.get_mut(enemy).unwrap().score = 5;

        let texts: Vec<String> = draw(&demo).texts().map(str::to_string).collect();
        assert_eq!(texts, vec!["0   5", "YOU LOSE", "RESTART"]);
    }

    #[test]
    fn test_w_moves_player_up() {
        let mut demo = versus();
        demo.world_mut().ux_state = UxState::Playing;
        let p = ScriptedPlatform::new(vec![InputFrame::with_keys(&[Key::W])], 0.1, WINDOW);
        demo.update(&p, 0.1);
        let y = demo.world().player().unwrap().position.y;
        assert!((y - 10.0).abs() < 1e-4);
    }
}
