//! Standalone demo: opens a window with the gradient generator.
//!
//! Pass a JSON config path as the first argument to override the defaults.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_gradient::{gradient_generator, GeneratorConfig, GradientSession};

fn load_config() -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(GeneratorConfig::from_json(&json)?)
        }
        None => Ok(GeneratorConfig::default()),
    }
}

fn main() {
    env_logger::init();

    let config = load_config().unwrap_or_else(|err| {
        log::warn!("falling back to default config: {err}");
        GeneratorConfig::default()
    });
    let session = RwSignal::new(GradientSession::from_config(&config));

    floem::Application::new()
        .window(
            move |_| {
                gradient_generator(session).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((640.0, 760.0))
                    .title("floem-gradient"),
            ),
        )
        .run();
}
