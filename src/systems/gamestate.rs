use crate::components::actor::Actor;
use crate::components::player::{HeroState, Player};
use crate::resources::gamestate::GameState;
use crate::resources::input::InputState;
use crate::resources::level::LevelGeometry;
use bevy_ecs::prelude::*;

/// Count down banners and honour the quit key.
pub fn advance_game_state(input: Res<InputState>, mut state: ResMut<GameState>) {
    if input.quit.active {
        state.request_quit();
    }
    state.tick();
}

/// Switch to the win banner once the hero touches any star.
pub fn check_win(
    level: Res<LevelGeometry>,
    hero: Query<&Actor<HeroState>, With<Player>>,
    mut state: ResMut<GameState>,
) {
    let Ok(hero) = hero.single() else {
        return;
    };
    if level.stars.iter().any(|star| hero.rect().intersects(&star.rect)) {
        state.win();
    }
}

pub fn state_is_playing(state: Res<GameState>) -> bool {
    state.is_playing()
}
