//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – shared frame tables keyed by animation name
//! - `audio` – bridge and channels for the background audio thread
//! - `gameconfig` – settings loaded from `config.ini`
//! - `gamestate` – intro, play and win flow
//! - `input` – per-tick keyboard snapshot
//! - `level` – level grid parsing and the assembled geometry
//! - `prototypes` – templates for spawning each kind of actor
//! - `rendertarget` – low-resolution back-buffer
//! - `texturestore` – loaded textures keyed by string IDs
pub mod animationstore;
pub mod audio;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod level;
pub mod prototypes;
pub mod rendertarget;
pub mod texturestore;
