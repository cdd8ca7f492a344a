//! Animation resource registry.
//!
//! Frame tables are loaded once and shared by every actor that plays them.
//! Systems and constructors look an animation up by key and receive a fresh
//! [`AnimationTrack`] pointing at the shared table.

use std::fmt;
use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::actor::{ActorState, TrackSet};
use crate::components::animation::{AnimationTrack, Frame};

/// Failure to find an asset the game needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    MissingAnimation(String),
    EmptyAnimation(String),
    MissingTexture(String),
    MissingSound(String),
    Load { path: String, reason: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::MissingAnimation(key) => write!(f, "animation '{}' is not loaded", key),
            AssetError::EmptyAnimation(key) => write!(f, "animation '{}' has no frames", key),
            AssetError::MissingTexture(path) => write!(f, "texture '{}' not found", path),
            AssetError::MissingSound(path) => write!(f, "sound '{}' not found", path),
            AssetError::Load { path, reason } => write!(f, "failed to load '{}': {}", path, reason),
        }
    }
}

impl std::error::Error for AssetError {}

/// Central registry of shared frame tables keyed by animation name.
#[derive(Resource, Debug, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, Arc<[Frame]>>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a frame table. An existing entry with the same key is replaced.
    pub fn insert(&mut self, key: impl Into<String>, frames: Vec<Frame>) {
        self.animations.insert(key.into(), frames.into());
    }

    /// New track over the shared table stored under `key`.
    pub fn track(&self, key: &str) -> Result<AnimationTrack, AssetError> {
        let frames = self
            .animations
            .get(key)
            .ok_or_else(|| AssetError::MissingAnimation(key.to_string()))?;
        AnimationTrack::new(frames.clone()).ok_or_else(|| AssetError::EmptyAnimation(key.to_string()))
    }

    /// Build the full track set for `S` from each state's animation key.
    pub fn track_set<S: ActorState>(&self) -> Result<TrackSet<S>, AssetError> {
        TrackSet::try_from_fn(|state: S| self.track(state.animation_key()))
    }
}
