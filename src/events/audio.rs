//! Messages exchanged with the audio thread.

use bevy_ecs::message::Message;

/// Sound effects the game plays, by id.
pub const FX_JUMP: &str = "jump";
pub const FX_FIREBALL: &str = "fireball";
pub const FX_SCREAM: &str = "scream";
pub const ALL_FX: [&str; 3] = [FX_JUMP, FX_FIREBALL, FX_SCREAM];

/// Commands sent *to* the audio thread
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum AudioCmd {
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    Shutdown,
}

impl AudioCmd {
    pub fn play(id: &str) -> Self {
        AudioCmd::PlayFx { id: id.to_string() }
    }
}

/// Replies sent *back* from the audio thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioMessage {
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
}
