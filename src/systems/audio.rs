//! Audio system implementation backed by a dedicated thread and raylib.
//!
//! - [`audio_thread`] runs on its own OS thread, owns the raylib audio device
//!   and every loaded [`Sound`], and answers [`AudioCmd`]s with
//!   [`AudioMessage`]s.
//! - [`forward_audio_cmds`] ships the commands gameplay systems wrote this
//!   tick over to the thread.
//! - [`poll_audio_messages`] drains the thread's replies and reports them.
//!
//! Raylib audio calls never leave the audio thread; the game thread only
//! talks to it through channels.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{RaylibAudio, Sound};
use rustc_hash::FxHashMap;

/// Drain pending replies from the audio thread and log them.
pub fn poll_audio_messages(bridge: Res<AudioBridge>) {
    for msg in bridge.rx_msg.try_iter() {
        match msg {
            AudioMessage::FxLoaded { id } => debug!("sound '{}' ready", id),
            AudioMessage::FxLoadFailed { id, error } => {
                warn!("sound '{}' failed to load: {}", id, error)
            }
        }
    }
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // The thread may already be gone during shutdown.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Entry point of the dedicated audio thread.
///
/// Blocks on the command channel until [`AudioCmd::Shutdown`] arrives or every
/// sender is dropped. If the audio device cannot be opened the thread keeps
/// draining commands so the game runs silently.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("Failed to initialize audio device: {}", e);
            for cmd in rx_cmd.iter() {
                if let AudioCmd::LoadFx { id, .. } = cmd {
                    let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                        id,
                        error: "no audio device".into(),
                    });
                } else if matches!(cmd, AudioCmd::Shutdown) {
                    break;
                }
            }
            return;
        }
    };

    info!("[audio] thread starting (id={:?})", std::thread::current().id());

    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    // Ends on Shutdown or once every sender is gone.
    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                Ok(sound) => {
                    debug!("[audio] fx loaded id='{}' path='{}'", id, path);
                    sounds.insert(id.clone(), sound);
                    let _ = tx_evt.send(AudioMessage::FxLoaded { id });
                }
                Err(e) => {
                    let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                        id,
                        error: e.to_string(),
                    });
                }
            },
            AudioCmd::PlayFx { id } => {
                if let Some(sound) = sounds.get(&id) {
                    sound.play();
                } else {
                    warn!("[audio] fx play failed id='{}' reason='not loaded'", id);
                }
            }
            AudioCmd::Shutdown => {
                debug!("[audio] shutdown requested");
                break;
            }
        }
    }

    info!("[audio] thread exiting (id={:?})", std::thread::current().id());
    // Sounds drop before `audio`, which closes the device.
    drop(sounds);
}
