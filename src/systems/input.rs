//! Input system.
//!
//! [`update_input_state`] polls raylib once per tick and writes the result
//! into [`InputState`](crate::resources::input::InputState). Everything else
//! reads that snapshot, so a tick never sees input change halfway through.
use bevy_ecs::prelude::*;

use crate::resources::input::InputState;

/// Poll raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    let input = input.as_mut();
    for state in [
        &mut input.left,
        &mut input.right,
        &mut input.jump,
        &mut input.throw,
        &mut input.quit,
    ] {
        state.set(rl.is_key_down(state.key_binding));
    }
}
