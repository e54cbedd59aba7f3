//! Obstacle field and rejection-sampling placement
//!
//! Candidates are drawn uniformly over the arena and kept only if they clear
//! every accepted obstacle and the arena bounds. Placement stops once the
//! target count is reached or the attempt budget runs out, whichever comes
//! first; an under-filled field is a normal outcome.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, Margins};
use super::circle::Circle;
use super::collision::first_overlap;
use crate::config::Config;

/// Sprite box drawn around an obstacle (rendering hint only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteBox {
    pub width: f32,
    pub height: f32,
    /// How far the sprite sits above the hit-box center
    pub vertical_bias: f32,
}

impl SpriteBox {
    /// Top-left corner of the sprite for a hit-box centered at `center`
    #[inline]
    pub fn offset_for(&self, center: Vec2) -> Vec2 {
        center - Vec2::new(self.width * 0.5, self.height * 0.5 + self.vertical_bias)
    }
}

/// A static obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub hitbox: Circle,
    /// Top-left corner of the sprite box
    pub sprite_offset: Vec2,
}

impl Obstacle {
    pub fn new(center: Vec2, radius: f32, sprite: &SpriteBox) -> Self {
        Self {
            hitbox: Circle::new(center, radius),
            sprite_offset: sprite.offset_for(center),
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

    #[inline]
    pub fn distance_to(&self, other: &Obstacle) -> f32 {
        self.hitbox.distance_to(&other.hitbox)
    }
}

/// Parameters for one placement run
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRules {
    pub target_count: usize,
    pub radius: f32,
    /// Extra gap required between hit-boxes
    pub buffer: f32,
    pub max_attempts: u32,
    /// Edge and margin rejection on/off
    pub bounds_checks: bool,
    /// Vertical clearance in multiples of `radius`
    pub vertical_margin_factor: f32,
    pub sprite: SpriteBox,
}

impl PlacementRules {
    pub fn from_config(config: &Config) -> Self {
        Self {
            target_count: config.obstacle_count,
            radius: config.obstacle_radius,
            buffer: config.separation_buffer,
            max_attempts: config.max_placement_attempts,
            bounds_checks: config.bounds_checks,
            vertical_margin_factor: config.vertical_margin_factor,
            sprite: SpriteBox {
                width: config.sprite_width,
                height: config.sprite_height,
                vertical_bias: config.sprite_vertical_bias,
            },
        }
    }

    /// Margins that turn the edge rules into one containment query.
    ///
    /// Horizontally the sprite box must stay inside the arena. Vertically the
    /// center must sit at least `factor * radius` below the top margin and
    /// above the bottom edge.
    pub fn bounds_margins(&self, arena: &Arena) -> Margins {
        let half_sprite = self.sprite.width * 0.5 - self.radius;
        let vertical = (self.vertical_margin_factor - 1.0) * self.radius;
        Margins {
            left: half_sprite,
            right: half_sprite,
            top: arena.top_margin + vertical,
            bottom: vertical,
        }
    }
}

/// Why a candidate was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Overlap,
    OutOfBounds,
}

/// The accepted obstacles, in acceptance order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleField {
    pub obstacles: Vec<Obstacle>,
    /// Candidates drawn during placement
    pub attempts: u32,
    /// Count that was asked for
    pub target_count: usize,
}

impl ObstacleField {
    /// Run placement against `arena` using `rng` as the only source of randomness
    pub fn populate<R: Rng>(arena: &Arena, rules: &PlacementRules, rng: &mut R) -> Self {
        let mut field = Self {
            obstacles: Vec::with_capacity(rules.target_count),
            attempts: 0,
            target_count: rules.target_count,
        };
        let margins = rules.bounds_margins(arena);
        let mut overlaps = 0u32;
        let mut out_of_bounds = 0u32;

        while field.obstacles.len() < rules.target_count && field.attempts < rules.max_attempts {
            let center = Vec2::new(
                rng.random_range(0.0..arena.width),
                rng.random_range(0.0..arena.height),
            );
            let candidate = Obstacle::new(center, rules.radius, &rules.sprite);

            match field.check(&candidate, arena, rules, margins) {
                Ok(()) => field.obstacles.push(candidate),
                Err(Rejection::Overlap) => overlaps += 1,
                Err(Rejection::OutOfBounds) => out_of_bounds += 1,
            }
            field.attempts += 1;
        }

        log::debug!(
            "Placement rejected {} overlapping and {} out-of-bounds candidates",
            overlaps,
            out_of_bounds
        );
        if field.is_complete() {
            log::info!(
                "Placed {} obstacles in {} attempts",
                field.obstacles.len(),
                field.attempts
            );
        } else {
            log::warn!(
                "Placed {}/{} obstacles before the {} attempt budget ran out",
                field.obstacles.len(),
                rules.target_count,
                rules.max_attempts
            );
        }

        field
    }

    /// Test a candidate against the accepted obstacles and the arena bounds
    fn check(
        &self,
        candidate: &Obstacle,
        arena: &Arena,
        rules: &PlacementRules,
        margins: Margins,
    ) -> Result<(), Rejection> {
        let accepted = self.obstacles.iter().map(|o| &o.hitbox);
        if first_overlap(&candidate.hitbox, accepted, rules.buffer).is_some() {
            return Err(Rejection::Overlap);
        }
        if rules.bounds_checks && !arena.contains_with(&candidate.hitbox, margins) {
            return Err(Rejection::OutOfBounds);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Whether placement reached the requested count
    pub fn is_complete(&self) -> bool {
        self.obstacles.len() == self.target_count
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }
}
