//! Rectangular arena bounds

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::circle::Circle;

/// Margins applied around a circle's bounding box before a containment test.
///
/// Positive values inflate the box (the circle needs more room), negative
/// values deflate it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// The playing field, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Band along the top edge reserved as a safe corridor
    pub top_margin: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32, top_margin: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "arena must have positive size");
        debug_assert!(
            top_margin >= 0.0 && top_margin < height,
            "top margin must lie inside the arena"
        );
        Self {
            width,
            height,
            top_margin,
        }
    }

    /// Midpoint of the arena
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// True iff the circle's bounding box, grown by the given margins, lies
    /// inside `[0, width] x [0, height]` (edges inclusive).
    pub fn contains(
        &self,
        circle: &Circle,
        margin_left: f32,
        margin_right: f32,
        margin_top: f32,
        margin_bottom: f32,
    ) -> bool {
        let min = circle.min();
        let max = circle.max();
        min.x - margin_left >= 0.0
            && max.x + margin_right <= self.width
            && min.y - margin_top >= 0.0
            && max.y + margin_bottom <= self.height
    }

    /// [`Arena::contains`] with the margins bundled together
    #[inline]
    pub fn contains_with(&self, circle: &Circle, margins: Margins) -> bool {
        self.contains(
            circle,
            margins.left,
            margins.right,
            margins.top,
            margins.bottom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let arena = Arena::new(1280.0, 720.0, 0.0);
        assert_eq!(arena.center(), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_contains_no_margins() {
        let arena = Arena::new(800.0, 600.0, 0.0);
        let inside = Circle::new(Vec2::new(400.0, 300.0), 50.0);
        assert!(arena.contains(&inside, 0.0, 0.0, 0.0, 0.0));

        // Touching the left edge counts as inside
        let touching = Circle::new(Vec2::new(50.0, 300.0), 50.0);
        assert!(arena.contains(&touching, 0.0, 0.0, 0.0, 0.0));

        let crossing = Circle::new(Vec2::new(30.0, 300.0), 50.0);
        assert!(!arena.contains(&crossing, 0.0, 0.0, 0.0, 0.0));

        let below = Circle::new(Vec2::new(400.0, 580.0), 50.0);
        assert!(!arena.contains(&below, 0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_contains_inflated() {
        let arena = Arena::new(800.0, 600.0, 0.0);
        let circle = Circle::new(Vec2::new(100.0, 300.0), 50.0);
        assert!(arena.contains(&circle, 50.0, 0.0, 0.0, 0.0));
        assert!(!arena.contains(&circle, 51.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_contains_deflated() {
        let arena = Arena::new(800.0, 600.0, 0.0);
        // Box pokes 20px past the right edge, a -20 margin lets it through
        let circle = Circle::new(Vec2::new(770.0, 300.0), 50.0);
        assert!(!arena.contains(&circle, 0.0, 0.0, 0.0, 0.0));
        assert!(arena.contains(&circle, 0.0, -20.0, 0.0, 0.0));
    }

    #[test]
    fn test_contains_with_margins() {
        let arena = Arena::new(800.0, 600.0, 100.0);
        let circle = Circle::new(Vec2::new(400.0, 120.0), 10.0);
        let margins = Margins {
            top: arena.top_margin,
            ..Default::default()
        };
        assert!(arena.contains_with(&circle, margins));
        let margins = Margins { top: 111.0, ..margins };
        assert!(!arena.contains_with(&circle, margins));
    }
}
