//! DDA raycast demo, run headless with scripted mouse and keys

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use arcade_demos::Settings;
    use arcade_demos::consts::{RAYCAST_SCREEN_HEIGHT, SCREEN_WIDTH};
    use arcade_demos::demos::{RaycastDemo, run_headless};
    use arcade_demos::platform::{InputFrame, Key};
    use glam::Vec2;

    env_logger::init();
    let settings = Settings::load();
    let window = &settings.raycast;
    let screen = Vec2::new(SCREEN_WIDTH, RAYCAST_SCREEN_HEIGHT);
    let window_px = Vec2::new(window.point_width as f32, window.point_height as f32);
    let pixel = |world: Vec2| (world / screen + 0.5) * window_px;

    let mut script = Vec::new();
    // Paint a vertical wall to the right of the player
    for i in 0..60 {
        let y = -60.0 + i as f32 * 2.0;
        script.push(InputFrame::with_keys(&[Key::MouseRight]).at_mouse(pixel(Vec2::new(80.0, y))));
    }
    // Walk up while casting at it
    for i in 0..120 {
        let aim = Vec2::new(120.0, -40.0 + i as f32);
        script.push(InputFrame::with_keys(&[Key::W, Key::MouseLeft]).at_mouse(pixel(aim)));
    }
    // Knock a hole in the wall and cast through it
    for _ in 0..30 {
        script.push(InputFrame::with_keys(&[Key::MouseMiddle]).at_mouse(pixel(Vec2::new(84.0, 4.0))));
    }

    let mut demo = RaycastDemo::new(window.clone());
    let stats = run_headless(&mut demo, script, &settings);
    log::info!(
        "Ran {} frames in {:.2}s, {} walls, last hit {:?}",
        stats.frames,
        stats.seconds,
        demo.grid().occupied_count(),
        demo.hit()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {}
