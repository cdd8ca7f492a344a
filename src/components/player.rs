//! Hero marker and animation states.

use bevy_ecs::prelude::Component;

use super::actor::ActorState;
use super::body::Body;

/// Horizontal speed of the hero while a direction key is held.
pub const RUN_SPEED: i32 = 5;

/// Marks the input-controlled hero entity.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Hero states, each backed by an animation folder of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroState {
    Idle,
    Run,
    Jump,
}

impl ActorState for HeroState {
    const ALL: &'static [Self] = &[HeroState::Idle, HeroState::Run, HeroState::Jump];

    fn slot(self) -> usize {
        self as usize
    }

    fn animation_key(self) -> &'static str {
        match self {
            HeroState::Idle => "hero_idle",
            HeroState::Run => "hero_run",
            HeroState::Jump => "hero_jump",
        }
    }

    fn initial() -> Self {
        HeroState::Idle
    }

    /// Airborne wins over everything; on the ground, any horizontal speed is a run.
    fn derive(body: &Body) -> Self {
        if !body.is_grounded() {
            HeroState::Jump
        } else if body.vx == 0 {
            HeroState::Idle
        } else {
            HeroState::Run
        }
    }
}

impl HeroState {
    /// Folder name under `<assets>/hero/` holding this state's frames.
    pub fn folder(self) -> &'static str {
        match self {
            HeroState::Idle => "idle",
            HeroState::Run => "run",
            HeroState::Jump => "jump",
        }
    }
}
