//! Patrolling enemies.
//!
//! Walkers move at a constant speed without resolved collision: they step first
//! and check afterwards. Running into an obstacle turns them around, and so
//! does stepping off a ledge. The two checks are independent: a wall at the
//! edge of a ledge turns the walker twice in one tick and it keeps going.

use bevy_ecs::prelude::Component;

use super::actor::{Actor, ActorState};
use super::body::Body;
use super::rect::Rect;

/// Default walking speed in pixels per tick.
pub const WALKER_SPEED: i32 = 1;
/// How far below the walker the floor check looks.
pub const LEDGE_DROP: i32 = 5;

/// Patrol behaviour for an enemy actor.
#[derive(Component, Debug, Clone, Copy)]
pub struct Walker {
    pub speed: i32,
}

impl Default for Walker {
    fn default() -> Self {
        Self {
            speed: WALKER_SPEED,
        }
    }
}

/// Walkers only ever walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkerState {
    Walk,
}

impl ActorState for WalkerState {
    const ALL: &'static [Self] = &[WalkerState::Walk];

    fn slot(self) -> usize {
        0
    }

    fn animation_key(self) -> &'static str {
        "walker_walk"
    }

    fn initial() -> Self {
        WalkerState::Walk
    }

    fn derive(_body: &Body) -> Self {
        WalkerState::Walk
    }
}

impl Walker {
    /// Step `actor` one tick along its facing and turn around at walls and ledges.
    ///
    /// The body's `vx` is kept in sync with the resulting facing so that
    /// [`Actor::update_state`] keeps the facing it was given.
    pub fn patrol(&self, actor: &mut Actor<WalkerState>, obstacles: &[Rect]) {
        actor.body.translate(actor.facing().sign() * self.speed, 0);

        let rect = actor.rect();
        if rect.intersects_any(obstacles) {
            actor.set_facing(actor.facing().reversed());
        }
        if !rect.translated(0, LEDGE_DROP).intersects_any(obstacles) {
            actor.set_facing(actor.facing().reversed());
        }
        actor.body.vx = actor.facing().sign() * self.speed;
    }
}
