//! Game systems.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread
//! - [`contacts`] – fireball kills, hero deaths and fall-outs
//! - [`fireball`] – projectile flight and expiry
//! - [`gamestate`] – banners, quitting and the win check
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`player`] – hero control and movement
//! - [`render`] – draw the level into the render target and present it
//! - [`walker`] – enemy patrols

pub mod audio;
pub mod contacts;
pub mod fireball;
pub mod gamestate;
pub mod input;
pub mod player;
pub mod render;
pub mod walker;
