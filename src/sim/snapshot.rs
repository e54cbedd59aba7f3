//! Read-only frame view for a renderer
//!
//! Built fresh each frame; holds copies so the renderer never borrows the world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::World;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub center: Vec2,
    pub radius: f32,
    /// Top-left corner of the sprite box
    pub sprite_offset: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PursuerView {
    pub center: Vec2,
    pub radius: f32,
    pub velocity: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: f32,
    pub height: f32,
    pub top_margin: f32,
    pub obstacles: Vec<ObstacleView>,
    pub pursuer: PursuerView,
    pub target: Vec2,
    pub dragging: bool,
    pub tick: u64,
}

impl Snapshot {
    /// Segment from the pursuer to its target (the aiming line)
    pub fn guide_line(&self) -> (Vec2, Vec2) {
        (self.pursuer.center, self.target)
    }
}

impl World {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.arena.width,
            height: self.arena.height,
            top_margin: self.arena.top_margin,
            obstacles: self
                .field
                .iter()
                .map(|o| ObstacleView {
                    center: o.center(),
                    radius: o.radius(),
                    sprite_offset: o.sprite_offset,
                })
                .collect(),
            pursuer: PursuerView {
                center: self.pursuer.center(),
                radius: self.pursuer.radius(),
                velocity: self.pursuer.velocity,
            },
            target: self.pointer.pos,
            dragging: self.pointer.pressed,
            tick: self.time_ticks,
        }
    }
}
