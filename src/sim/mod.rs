//! Deterministic simulation module
//!
//! All placement and steering logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Obstacles kept in acceptance order
//! - No rendering or platform dependencies

pub mod arena;
pub mod circle;
pub mod collision;
pub mod field;
pub mod pointer;
pub mod pursuer;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use arena::{Arena, Margins};
pub use circle::Circle;
pub use collision::{circles_overlap, first_overlap};
pub use field::{Obstacle, ObstacleField, PlacementRules, SpriteBox};
pub use pointer::{Pointer, PointerEvent, SharedTarget};
pub use pursuer::Pursuer;
pub use snapshot::{ObstacleView, PursuerView, Snapshot};
pub use state::{RngState, World};
pub use tick::{TickInput, tick};
