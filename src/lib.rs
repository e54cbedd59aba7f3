//! Obstacle Chase - obstacle placement and pointer chasing for a 2D arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (arena, obstacle field, pursuer, tick)
//! - `config`: Construction parameters and placement presets
//! - `web`: wasm-bindgen surface for a browser shell (wasm32 only)
//!
//! Nothing in here draws. A host builds a [`sim::World`], forwards pointer
//! events each frame, calls [`sim::tick`] and renders a [`sim::Snapshot`].

pub mod config;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ArrivalBehavior, Config, PlacementPreset};

use glam::Vec2;

/// Default configuration constants (the Corridor preset)
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;
    /// Band along the top edge kept clear of obstacles
    pub const TOP_MARGIN: f32 = 260.0;

    /// Obstacle defaults
    pub const OBSTACLE_COUNT: usize = 10;
    pub const OBSTACLE_RADIUS: f32 = 40.0;
    /// Extra gap between obstacle hit-boxes
    pub const SEPARATION_BUFFER: f32 = 150.0;
    /// Placement gives up after this many candidates
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 500;
    /// Vertical clearance in multiples of the obstacle radius
    pub const VERTICAL_MARGIN_FACTOR: f32 = 2.0;

    /// Obstacle sprite box (rendering hint only)
    pub const SPRITE_WIDTH: f32 = 250.0;
    pub const SPRITE_HEIGHT: f32 = 250.0;
    /// Sprite is drawn this far above the hit-box center
    pub const SPRITE_VERTICAL_BIAS: f32 = 70.0;

    /// Pursuer defaults
    pub const PURSUER_RADIUS: f32 = 50.0;
    /// Maximum displacement per tick (pixels)
    pub const PURSUER_SPEED_CAP: f32 = 5.0;
}

/// Unit direction and distance from `from` to `to`.
///
/// Returns a zero direction when the points coincide instead of dividing by zero.
#[inline]
pub fn direction_and_distance(from: Vec2, to: Vec2) -> (Vec2, f32) {
    let delta = to - from;
    let distance = delta.x.hypot(delta.y);
    if distance == 0.0 {
        (Vec2::ZERO, 0.0)
    } else {
        (delta / distance, distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_and_distance() {
        let (dir, dist) = direction_and_distance(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0));
        assert!((dist - 5.0).abs() < 1e-6);
        assert!((dir - Vec2::new(0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_direction_coincident_points() {
        let p = Vec2::new(640.0, 360.0);
        let (dir, dist) = direction_and_distance(p, p);
        assert_eq!(dir, Vec2::ZERO);
        assert_eq!(dist, 0.0);
        assert!(!dir.x.is_nan() && !dir.y.is_nan());
    }
}
