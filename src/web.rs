//! Browser binding
//!
//! The page owns the canvas, the animation loop and the mouse listeners. It
//! forwards pointer coordinates here, calls `tick` once per frame and draws
//! from the JSON snapshot.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::config::{Config, PlacementPreset};
use crate::sim::{PointerEvent, TickInput, World, tick};

#[wasm_bindgen]
pub struct WebWorld {
    world: World,
    pending: TickInput,
}

#[wasm_bindgen]
impl WebWorld {
    /// Create a world; `preset` is a preset name, unknown names fall back to the default
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, preset: Option<String>, seed: Option<f64>) -> WebWorld {
        let preset = preset
            .as_deref()
            .and_then(PlacementPreset::from_str)
            .unwrap_or_default();
        let config = Config::from_preset(preset).with_arena(width, height);
        let seed = seed.unwrap_or_else(js_sys::Date::now) as u64;
        WebWorld {
            world: World::new(config, seed),
            pending: TickInput::default(),
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pending.events.push(PointerEvent::Down(Vec2::new(x, y)));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pending.events.push(PointerEvent::Move(Vec2::new(x, y)));
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.pending.events.push(PointerEvent::Up(Vec2::new(x, y)));
    }

    /// Advance one frame using the events queued since the last call
    pub fn tick(&mut self) {
        let input = std::mem::take(&mut self.pending);
        tick(&mut self.world, &input);
    }

    pub fn restart(&mut self, seed: Option<f64>) {
        let seed = seed.unwrap_or_else(js_sys::Date::now) as u64;
        self.pending = TickInput::default();
        self.world.restart(seed);
    }

    pub fn snapshot_json(&self) -> String {
        match serde_json::to_string(&self.world.snapshot()) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Snapshot serialization failed: {}", e);
                String::from("null")
            }
        }
    }

    pub fn obstacle_count(&self) -> usize {
        self.world.field.len()
    }
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // Already initialised when the module is instantiated twice
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Obstacle Chase core loaded");
}
