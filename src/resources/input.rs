//! Per-tick keyboard input resource.
//!
//! Captures the keys the game reacts to and exposes them to systems via the
//! [`InputState`] resource. Arrow keys move, jump and throw; escape quits.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is held this tick.
    pub active: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            key_binding,
        }
    }

    /// Record this tick's raw key state.
    pub fn set(&mut self, down: bool) {
        self.active = down;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Snapshot of gameplay keys, refreshed once per tick before any movement.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    /// Jump. Held down, it retries every tick until the jump fires.
    pub jump: BoolState,
    /// Throw a fireball, gated by the hero's cooldown.
    pub throw: BoolState,
    pub quit: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            jump: BoolState::bound_to(KeyboardKey::KEY_UP),
            throw: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            quit: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
        }
    }
}

impl InputState {
    /// Horizontal direction requested by the player. Right wins when both are held.
    pub fn horizontal(&self) -> i32 {
        if self.right.active {
            1
        } else if self.left.active {
            -1
        } else {
            0
        }
    }
}
