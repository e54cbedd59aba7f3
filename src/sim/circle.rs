//! Circular hit-box shared by obstacles and the pursuer
//!
//! Only the hit-box takes part in overlap and bounds tests; sprite boxes are
//! carried separately as rendering hints.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circle in arena space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    /// Fixed after construction
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "circle radius must be positive");
        Self { center, radius }
    }

    /// Euclidean distance between centers
    #[inline]
    pub fn distance_to(&self, other: &Circle) -> f32 {
        (other.center - self.center).length()
    }

    /// Top-left corner of the axis-aligned bounding box
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - Vec2::splat(self.radius)
    }

    /// Bottom-right corner of the axis-aligned bounding box
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + Vec2::splat(self.radius)
    }
}
