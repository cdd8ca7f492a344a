//! Short-lived projectiles thrown by the hero.
//!
//! A fireball flies horizontally at a fixed speed using the resolved body move,
//! so it stops dead at walls. It burns out after a fixed number of ticks.

use bevy_ecs::prelude::Component;

use super::actor::{Actor, ActorState, Facing};
use super::body::Body;
use super::rect::Rect;
use crate::resources::prototypes::Prototype;

pub const FIREBALL_SPEED: i32 = 10;
/// Ticks a fireball lives before it is removed.
pub const FIREBALL_LIFETIME: u32 = 10;

/// Flight parameters and remaining lifetime of a fireball.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fireball {
    pub speed: i32,
    /// Ticks left before the fireball expires.
    pub remaining: u32,
}

impl Default for Fireball {
    fn default() -> Self {
        Self::new(FIREBALL_SPEED, FIREBALL_LIFETIME)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FireballState {
    Flying,
}

impl ActorState for FireballState {
    const ALL: &'static [Self] = &[FireballState::Flying];

    fn slot(self) -> usize {
        0
    }

    fn animation_key(self) -> &'static str {
        "fireball"
    }

    fn initial() -> Self {
        FireballState::Flying
    }

    fn derive(_body: &Body) -> Self {
        FireballState::Flying
    }
}

impl Fireball {
    pub fn new(speed: i32, lifetime: u32) -> Self {
        Self {
            speed,
            remaining: lifetime,
        }
    }

    /// Build a fireball actor with its top-left at `(x, y)` heading along `facing`.
    pub fn launch(
        prototype: &Prototype<FireballState>,
        x: i32,
        y: i32,
        facing: Facing,
    ) -> (Actor<FireballState>, Fireball) {
        let fireball = Fireball::default();
        let mut actor = prototype.spawn(x, y, facing);
        actor.body.set_vx(facing.sign() * fireball.speed);
        (actor, fireball)
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Fly one tick and count down the lifetime. Returns true once expired.
    pub fn fly(&mut self, actor: &mut Actor<FireballState>, obstacles: &[Rect]) -> bool {
        let dx = actor.facing().sign() * self.speed;
        actor.body.move_resolved(dx, 0, obstacles);
        actor.update_state();
        self.remaining = self.remaining.saturating_sub(1);
        self.is_expired()
    }
}
