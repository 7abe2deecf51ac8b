//! Template demo, run headless

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use arcade_demos::Settings;
    use arcade_demos::demos::{TemplateDemo, run_headless};
    use arcade_demos::platform::InputFrame;

    env_logger::init();
    let settings = Settings::load();
    let mut demo = TemplateDemo::new(settings.template.clone());
    let stats = run_headless(&mut demo, vec![InputFrame::default(); 120], &settings);
    log::info!("Ran {} frames in {:.2}s", stats.frames, stats.seconds);
}

#[cfg(target_arch = "wasm32")]
fn main() {}
