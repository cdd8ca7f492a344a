//! ECS components for entities.
//!
//! Submodules overview:
//! - [`rect`] – integer axis-aligned rectangle shared by all geometry
//! - [`body`] – rectangle with velocity and per-axis collision resolution
//! - [`animation`] – shared frame tables and per-instance playback cursors
//! - [`actor`] – body plus state-driven animation, facing and throw cooldown
//! - [`player`] – hero marker and hero states
//! - [`walker`] – patrolling enemies
//! - [`fireball`] – short-lived projectiles

pub mod actor;
pub mod animation;
pub mod body;
pub mod fireball;
pub mod player;
pub mod rect;
pub mod walker;
