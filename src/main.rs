//! Obstacle Chase entry point
//!
//! Native builds run a headless session: place the field, replay a scripted
//! drag and print the final frame as JSON. The browser build is driven from
//! the page through `obstacle_chase::web`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use glam::Vec2;
    use obstacle_chase::Config;
    use obstacle_chase::sim::{PointerEvent, TickInput, World, tick};

    env_logger::init();
    log::info!("Obstacle Chase (native) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => Config::load(Path::new(&path)),
        None => Config::default(),
    };
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::warn!("Ignoring bad seed argument: {}", e);
            clock_seed()
        }
        None => clock_seed(),
    };

    let mut world = World::new(config, seed);
    let (w, h) = (world.arena.width, world.arena.height);

    // Press near the top-left, sweep to the bottom-right, release in the middle
    let script = [
        (0, PointerEvent::Down(Vec2::new(w * 0.1, h * 0.2))),
        (120, PointerEvent::Move(Vec2::new(w * 0.9, h * 0.8))),
        (240, PointerEvent::Up(Vec2::new(w * 0.5, h * 0.5))),
        (260, PointerEvent::Move(Vec2::new(0.0, 0.0))),
    ];
    let total_ticks = 480;

    for t in 0..total_ticks {
        let input = TickInput::from_events(
            script
                .iter()
                .filter(|(at, _)| *at == t)
                .map(|(_, event)| *event),
        );
        tick(&mut world, &input);

        if t % 60 == 0 {
            let p = world.pursuer.center();
            log::info!(
                "tick {:>3}: pursuer ({:.1}, {:.1}), {:.1} from target",
                world.time_ticks,
                p.x,
                p.y,
                world.pursuer.distance_to_target(world.pointer.pos)
            );
        }
    }

    match serde_json::to_string_pretty(&world.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Snapshot serialization failed: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is obstacle_chase::web::wasm_start, this is just to satisfy the compiler
}
