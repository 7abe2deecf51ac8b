//! Single-paddle Pong against the walls, run headless with a scripted player

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use arcade_demos::Settings;
    use arcade_demos::demos::{PongDemo, run_headless};
    use arcade_demos::platform::{InputFrame, Key};
    use arcade_demos::sim::PongVariant;

    env_logger::init();
    let settings = Settings::load();

    // Sweep the paddle up and down, one second each way
    let script = (0..600)
        .map(|frame| match (frame / 60) % 2 {
            0 => InputFrame::with_keys(&[Key::W]),
            _ => InputFrame::with_keys(&[Key::S]),
        })
        .collect();

    let mut demo = PongDemo::new(
        PongVariant::Classic,
        settings.pong_classic.clone(),
        settings.tuning.clone(),
    );
    let stats = run_headless(&mut demo, script, &settings);
    log::info!("Ran {} frames in {:.2}s", stats.frames, stats.seconds);
}

#[cfg(target_arch = "wasm32")]
fn main() {}
