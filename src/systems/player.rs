//! Hero systems.
//!
//! [`player_control`] turns the input snapshot into velocity, jumps and
//! throws, then applies gravity. [`player_movement`] resolves the resulting
//! velocity against the level and updates the hero's animation state.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actor::Actor;
use crate::components::player::{HeroState, Player, RUN_SPEED};
use crate::events::audio::{AudioCmd, FX_FIREBALL, FX_JUMP};
use crate::resources::input::InputState;
use crate::resources::level::LevelGeometry;
use crate::resources::prototypes::ActorPrototypes;

/// Apply this tick's input to the hero.
///
/// Fireballs are spawned through `commands`, so they first fly on the next
/// system in the chain.
pub fn player_control(
    mut commands: Commands,
    input: Res<InputState>,
    prototypes: Res<ActorPrototypes>,
    mut hero: Query<&mut Actor<HeroState>, With<Player>>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let Ok(mut hero) = hero.single_mut() else {
        return;
    };

    hero.body.set_vx(input.horizontal() * RUN_SPEED);

    if input.jump.active && hero.body.jump() {
        audio.write(AudioCmd::play(FX_JUMP));
    }

    if input.throw.active
        && let Some(fireball) = hero.throw_projectile(&prototypes.fireball)
    {
        debug!("fireball thrown at {:?}", fireball.0.rect());
        commands.spawn(fireball);
        audio.write(AudioCmd::play(FX_FIREBALL));
    }

    hero.body.gravity();
}

/// Move the hero and derive its state from where it ended up.
pub fn player_movement(
    level: Res<LevelGeometry>,
    mut hero: Query<&mut Actor<HeroState>, With<Player>>,
) {
    for mut hero in hero.iter_mut() {
        hero.body.update_position(&level.obstacles);
        hero.update_state();
    }
}
