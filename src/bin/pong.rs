//! Pong against the AI, run headless with a scripted player

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use arcade_demos::Settings;
    use arcade_demos::demos::{PongDemo, run_headless};
    use arcade_demos::platform::{InputFrame, Key};
    use arcade_demos::sim::{PongVariant, Side, start_button};
    use glam::Vec2;

    env_logger::init();
    let settings = Settings::load();
    let window = &settings.pong;
    let screen = Vec2::new(settings.tuning.screen_width, settings.tuning.screen_height);
    let window_px = Vec2::new(window.point_width as f32, window.point_height as f32);

    // Click START, then chase the middle of the court, pausing once on the way
    let start = (start_button().region.center / screen + 0.5) * window_px;
    let mut script = vec![InputFrame::default(), InputFrame::with_keys(&[Key::MouseLeft]).at_mouse(start)];
    for frame in 0..1800 {
        let keys: &[Key] = match frame {
            600..=601 | 660..=661 => &[Key::Escape],
            _ if (frame / 45) % 2 == 0 => &[Key::W],
            _ => &[Key::S],
        };
        script.push(InputFrame::with_keys(keys));
    }

    let mut demo = PongDemo::new(PongVariant::Versus, window.clone(), settings.tuning.clone());
    let stats = run_headless(&mut demo, script, &settings);
    log::info!(
        "Ran {} frames in {:.2}s, final score {} - {}",
        stats.frames,
        stats.seconds,
        demo.world().score(Side::Player),
        demo.world().score(Side::Enemy)
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {}
