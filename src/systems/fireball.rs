//! Fireball systems.
//!
//! Flight and removal are split: a fireball that burns out this tick still
//! takes part in this tick's contact checks and is only despawned by
//! [`expire_fireballs`] at the end.

use bevy_ecs::prelude::*;

use crate::components::actor::Actor;
use crate::components::fireball::{Fireball, FireballState};
use crate::resources::level::LevelGeometry;

pub fn fireball_flight(
    level: Res<LevelGeometry>,
    mut fireballs: Query<(&mut Fireball, &mut Actor<FireballState>)>,
) {
    for (mut fireball, mut actor) in fireballs.iter_mut() {
        fireball.fly(&mut actor, &level.obstacles);
    }
}

/// Despawn fireballs whose lifetime has run out.
pub fn expire_fireballs(mut commands: Commands, fireballs: Query<(Entity, &Fireball)>) {
    for (entity, fireball) in fireballs.iter() {
        if fireball.is_expired() {
            commands.entity(entity).try_despawn();
        }
    }
}
