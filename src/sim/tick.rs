//! Per-frame simulation step
//!
//! The host calls [`tick`] once per animation frame with whatever pointer
//! events arrived since the last one.

use super::pointer::PointerEvent;
use super::state::World;

/// Input collected for a single tick (applied in order)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<PointerEvent>,
}

impl TickInput {
    pub fn from_events(events: impl IntoIterator<Item = PointerEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput) {
    for &event in &input.events {
        world.pointer.apply(event);
    }

    world.pursuer.update(world.pointer.pos);
    world.time_ticks += 1;
}
