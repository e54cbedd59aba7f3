//! Pointer input: the steering target and the drag gate
//!
//! Moves are only captured while the button is held. Press and release
//! always update the position.

use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Pointer events forwarded by the host, in arena coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up(Vec2),
}

/// Last captured pointer state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    /// Steering target
    pub pos: Vec2,
    /// Drag gate
    pub pressed: bool,
}

impl Pointer {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            pressed: false,
        }
    }

    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(pos) => {
                self.pos = pos;
                self.pressed = true;
            }
            PointerEvent::Move(pos) => {
                if self.pressed {
                    self.pos = pos;
                }
            }
            PointerEvent::Up(pos) => {
                self.pos = pos;
                self.pressed = false;
            }
        }
    }
}

/// Target point shared between an input thread and the simulation thread.
///
/// Both coordinates live in one atomic word, so a reader always sees a pair
/// that was stored together.
#[derive(Debug)]
pub struct SharedTarget {
    bits: AtomicU64,
}

impl SharedTarget {
    pub fn new(pos: Vec2) -> Self {
        Self {
            bits: AtomicU64::new(pack(pos)),
        }
    }

    pub fn store(&self, pos: Vec2) {
        self.bits.store(pack(pos), Ordering::Release);
    }

    pub fn load(&self) -> Vec2 {
        unpack(self.bits.load(Ordering::Acquire))
    }
}

#[inline]
fn pack(pos: Vec2) -> u64 {
    ((pos.x.to_bits() as u64) << 32) | pos.y.to_bits() as u64
}

#[inline]
fn unpack(bits: u64) -> Vec2 {
    Vec2::new(
        f32::from_bits((bits >> 32) as u32),
        f32::from_bits(bits as u32),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_move_ignored_until_pressed() {
        let mut pointer = Pointer::new(Vec2::new(640.0, 360.0));
        pointer.apply(PointerEvent::Move(Vec2::new(10.0, 10.0)));
        assert_eq!(pointer.pos, Vec2::new(640.0, 360.0));

        pointer.apply(PointerEvent::Down(Vec2::new(100.0, 200.0)));
        assert!(pointer.pressed);
        assert_eq!(pointer.pos, Vec2::new(100.0, 200.0));

        pointer.apply(PointerEvent::Move(Vec2::new(110.0, 210.0)));
        assert_eq!(pointer.pos, Vec2::new(110.0, 210.0));
    }

    #[test]
    fn test_release_updates_position_and_closes_gate() {
        let mut pointer = Pointer::new(Vec2::ZERO);
        pointer.apply(PointerEvent::Down(Vec2::new(1.0, 1.0)));
        pointer.apply(PointerEvent::Up(Vec2::new(5.0, 6.0)));
        assert!(!pointer.pressed);
        assert_eq!(pointer.pos, Vec2::new(5.0, 6.0));

        pointer.apply(PointerEvent::Move(Vec2::new(50.0, 60.0)));
        assert_eq!(pointer.pos, Vec2::new(5.0, 6.0));
    }

    #[test]
    fn test_shared_target_exact() {
        let target = SharedTarget::new(Vec2::new(640.0, 360.0));
        assert_eq!(target.load(), Vec2::new(640.0, 360.0));
        target.store(Vec2::new(-0.5, 1234.25));
        assert_eq!(target.load(), Vec2::new(-0.5, 1234.25));
    }

    #[test]
    fn test_shared_target_across_threads() {
        let target = Arc::new(SharedTarget::new(Vec2::ZERO));
        let writer = {
            let target = Arc::clone(&target);
            std::thread::spawn(move || {
                for i in 0..1000 {
                    let v = i as f32;
                    target.store(Vec2::new(v, v * 2.0));
                }
            })
        };
        for _ in 0..1000 {
            let p = target.load();
            assert_eq!(p.y, p.x * 2.0);
        }
        writer.join().unwrap();
        assert_eq!(target.load(), Vec2::new(999.0, 1998.0));
    }
}
