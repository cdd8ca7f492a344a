//! Cross-entity contact checks.
//!
//! Runs after every actor has finished moving for the tick, so all checks see
//! post-move rectangles. Killed walkers are despawned through `commands`,
//! which applies after this system returns.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::actor::Actor;
use crate::components::fireball::FireballState;
use crate::components::player::{HeroState, Player};
use crate::components::walker::{Walker, WalkerState};
use crate::events::audio::{AudioCmd, FX_SCREAM};
use crate::resources::level::LevelGeometry;

/// Resolve fireball kills, hero deaths and falling out of the level.
///
/// A walker touched by any fireball dies once and screams once. Fireballs
/// survive their kills. Walkers killed this tick cannot hurt the hero.
pub fn resolve_contacts(
    mut commands: Commands,
    level: Res<LevelGeometry>,
    fireballs: Query<&Actor<FireballState>>,
    walkers: Query<(Entity, &Actor<WalkerState>), With<Walker>>,
    mut hero: Query<&mut Actor<HeroState>, With<Player>>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let mut survivors = Vec::new();
    for (entity, walker) in walkers.iter() {
        let rect = walker.rect();
        if fireballs.iter().any(|fireball| fireball.rect().intersects(&rect)) {
            debug!("walker {:?} killed at {:?}", entity, rect);
            commands.entity(entity).try_despawn();
            audio.write(AudioCmd::play(FX_SCREAM));
        } else {
            survivors.push(rect);
        }
    }

    let Ok(mut hero) = hero.single_mut() else {
        return;
    };
    let hero_rect = hero.rect();
    if hero_rect.intersects_any(&survivors) {
        info!("hero caught at {:?}, respawning", hero_rect);
        hero.body.respawn();
    } else if level.is_below(&hero_rect) {
        info!("hero fell out of the level, respawning");
        hero.body.respawn();
    }
}
