use bevy_ecs::prelude::*;

use crate::components::actor::Actor;
use crate::components::walker::{Walker, WalkerState};
use crate::resources::level::LevelGeometry;

/// Step every walker along its patrol and advance its walk cycle.
pub fn walker_patrol(
    level: Res<LevelGeometry>,
    mut walkers: Query<(&Walker, &mut Actor<WalkerState>)>,
) {
    for (walker, mut actor) in walkers.iter_mut() {
        walker.patrol(&mut actor, &level.obstacles);
        actor.update_state();
    }
}
