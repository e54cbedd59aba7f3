//! World state
//!
//! Everything a host needs to reproduce a session lives here: the config,
//! the seed the field was placed with, and the mutable pursuer/pointer state.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::field::{ObstacleField, PlacementRules};
use super::pointer::Pointer;
use super::pursuer::Pursuer;
use crate::config::Config;

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub config: Config,
    /// Seed the current field was placed with
    pub rng_state: RngState,
    pub arena: Arena,
    pub field: ObstacleField,
    pub pursuer: Pursuer,
    pub pointer: Pointer,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    /// Build the arena, place the obstacles and spawn the pursuer at the midpoint
    pub fn new(config: Config, seed: u64) -> Self {
        let arena = Arena::new(config.arena_width, config.arena_height, config.top_margin);
        let rng_state = RngState::new(seed);
        let field = place_field(&arena, &config, &rng_state);
        let pursuer = Pursuer::new(
            arena.center(),
            config.pursuer_radius,
            config.pursuer_speed_cap,
            config.arrival,
        );
        log::info!(
            "World {}x{} seeded {}: {} obstacles ({})",
            arena.width,
            arena.height,
            seed,
            field.len(),
            config.preset.as_str()
        );

        Self {
            config,
            rng_state,
            arena,
            pointer: Pointer::new(arena.center()),
            field,
            pursuer,
            time_ticks: 0,
        }
    }

    /// Re-place the field with a new seed and return the pursuer to the midpoint
    pub fn restart(&mut self, seed: u64) {
        self.rng_state = RngState::new(seed);
        self.field = place_field(&self.arena, &self.config, &self.rng_state);
        self.pursuer.reset(self.arena.center());
        self.pointer = Pointer::new(self.arena.center());
        self.time_ticks = 0;
        log::info!("World restarted with seed {}", seed);
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }
}

fn place_field(arena: &Arena, config: &Config, rng_state: &RngState) -> ObstacleField {
    let rules = PlacementRules::from_config(config);
    let mut rng = rng_state.to_rng();
    ObstacleField::populate(arena, &rules, &mut rng)
}
