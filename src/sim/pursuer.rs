//! The pursuer: a circle that chases the target point at constant speed

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::circle::Circle;
use crate::config::ArrivalBehavior;
use crate::direction_and_distance;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pursuer {
    pub hitbox: Circle,
    /// Maximum displacement per tick
    pub speed_cap: f32,
    /// Unit direction of travel this tick, or zero when stopped
    pub velocity: Vec2,
    pub arrival: ArrivalBehavior,
}

impl Pursuer {
    pub fn new(center: Vec2, radius: f32, speed_cap: f32, arrival: ArrivalBehavior) -> Self {
        debug_assert!(speed_cap > 0.0, "speed cap must be positive");
        Self {
            hitbox: Circle::new(center, radius),
            speed_cap,
            velocity: Vec2::ZERO,
            arrival,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.hitbox.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.hitbox.radius
    }

    /// Move one step toward `target`.
    ///
    /// Farther than one step away: travel `speed_cap` along the unit direction.
    /// Otherwise the velocity drops to zero and, with [`ArrivalBehavior::Snap`],
    /// the center lands on the target.
    pub fn update(&mut self, target: Vec2) {
        let (direction, distance) = direction_and_distance(self.hitbox.center, target);

        if distance > self.speed_cap {
            self.velocity = direction;
        } else {
            self.velocity = Vec2::ZERO;
            if self.arrival == ArrivalBehavior::Snap {
                self.hitbox.center = target;
            }
        }

        self.hitbox.center += self.velocity * self.speed_cap;
        log::trace!(
            "pursuer at ({:.1}, {:.1}), {:.1} from target",
            self.hitbox.center.x,
            self.hitbox.center.y,
            distance
        );
    }

    pub fn distance_to_target(&self, target: Vec2) -> f32 {
        (target - self.hitbox.center).length()
    }

    pub fn is_moving(&self) -> bool {
        self.velocity != Vec2::ZERO
    }

    /// Per-tick displacement from the last update
    pub fn displacement(&self) -> Vec2 {
        self.velocity * self.speed_cap
    }

    /// Put the pursuer back at `center`, stopped
    pub fn reset(&mut self, center: Vec2) {
        self.hitbox.center = center;
        self.velocity = Vec2::ZERO;
    }
}
