//! Stargrab entry point
//!
//! Runs a headless session: the autopilot flies, a recording renderer stands in
//! for the window, and the final world state is printed as JSON.
//!
//! Environment:
//! - `STARGRAB_SEED`: RNG seed (default: time-derived)
//! - `STARGRAB_FRAMES`: frames to run (default: 3600, one minute at 60 Hz)
//! - `STARGRAB_SETTINGS`: path to a JSON settings file
//! - `RUST_LOG`: log filter

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use stargrab::Settings;
    use stargrab::driver::LoopDriver;
    use stargrab::render::{RecordingRenderer, ZLayer};
    use stargrab::sim::{Autopilot, GameEvent, SystemClock, World};

    env_logger::init();
    log::info!("Stargrab (headless) starting...");

    let settings = Settings::load();
    let seed = env_or("STARGRAB_SEED", || {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
    });
    let frames: u64 = env_or("STARGRAB_FRAMES", || 3600);

    log::info!("Session seed: {seed}, running {frames} frames");

    let mut driver = LoopDriver::new(World::new(settings, seed));
    let mut pilot = Autopilot::default();
    let mut renderer = RecordingRenderer::new();
    let clock = SystemClock::new();

    for _ in 0..frames {
        renderer.begin_frame();
        let outcome = driver.step(&mut pilot, &mut renderer, &clock);
        if outcome.close_requested {
            break;
        }
        for event in outcome.events {
            if let GameEvent::StarCollected { id, score } = event {
                log::info!("tick {}: star {id} collected, score {score}", driver.world().tick());
            }
        }
    }

    let stars_drawn = renderer.on_layer(ZLayer::Stars).count();
    let world = driver.into_world();
    log::info!(
        "Session over after {} ticks: score {}, {} stars live, {} draw calls last frame ({} stars)",
        world.tick(),
        world.player_score(),
        world.stars().len(),
        renderer.commands().len(),
        stars_drawn
    );

    match serde_json::to_string_pretty(&world.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final snapshot: {e}"),
    }
}

/// Parse an environment variable, falling back when unset or invalid
#[cfg(not(target_arch = "wasm32"))]
fn env_or<T: std::str::FromStr>(name: &str, default: impl FnOnce() -> T) -> T {
    match std::env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Ignoring invalid {name}={raw:?}");
                default()
            }
        },
        Err(_) => default(),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host; the library is driven by an embedding page instead
}
