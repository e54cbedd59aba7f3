//! Hit-box overlap tests
//!
//! Used by obstacle placement. Nothing here pushes circles apart; an overlap
//! only ever leads to a candidate being discarded.

use super::circle::Circle;

/// Whether two hit-boxes are closer than the sum of their radii plus `buffer`
#[inline]
pub fn circles_overlap(a: &Circle, b: &Circle, buffer: f32) -> bool {
    a.distance_to(b) < a.radius + b.radius + buffer
}

/// First circle in `others` that `candidate` overlaps, if any
pub fn first_overlap<'a>(
    candidate: &Circle,
    others: impl IntoIterator<Item = &'a Circle>,
    buffer: f32,
) -> Option<&'a Circle> {
    others
        .into_iter()
        .find(|other| circles_overlap(candidate, other, buffer))
}
