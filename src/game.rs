//! Game setup: asset loading and spawning the level's actors.
//!
//! All loading happens once before the main loop starts. Any missing file is
//! fatal and reported as an [`AssetError`].
//!
//! Asset layout under the configured assets folder:
//!
//! ```text
//! hero/idle/*.png  hero/run/*.png  hero/jump/*.png
//! guy/walk/*.png
//! fireball.png
//! jump.wav  fireball.wav  scream.wav
//! ```
//!
//! Block textures `1.png` to `5.png` and the star `7.png` live next to the
//! level grid. Pure white pixels are treated as transparent everywhere.

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::components::actor::{ActorState, Facing};
use crate::components::animation::Frame;
use crate::components::fireball::FireballState;
use crate::components::player::{HeroState, Player};
use crate::components::walker::{Walker, WalkerState};
use crate::events::audio::{ALL_FX, AudioCmd};
use crate::resources::animationstore::{AnimationStore, AssetError};
use crate::resources::gameconfig::GameConfig;
use crate::resources::level::{LevelGeometry, LevelLayout, tile_texture_key};
use crate::resources::prototypes::{ActorPrototypes, Prototype};
use crate::resources::texturestore::TextureStore;

/// Ticks each hero frame is held.
pub const HERO_FRAME_TICKS: u32 = 10;
/// Ticks each walker frame is held.
pub const WALKER_FRAME_TICKS: u32 = 1;

const COLOUR_KEY: Color = Color::WHITE;

/// Load an image, make the colour key transparent and upload it.
fn load_keyed_texture(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, AssetError> {
    let path_str = path.to_string_lossy();
    if !path.is_file() {
        return Err(AssetError::MissingTexture(path_str.into_owned()));
    }
    let mut image = Image::load_image(&path_str).map_err(|e| AssetError::Load {
        path: path_str.to_string(),
        reason: e.to_string(),
    })?;
    image.color_replace(COLOUR_KEY, Color::BLANK);
    rl.load_texture_from_image(th, &image)
        .map_err(|e| AssetError::Load {
            path: path_str.to_string(),
            reason: e.to_string(),
        })
}

/// PNG files in `folder`, sorted by file name.
pub fn frame_files(folder: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let entries = std::fs::read_dir(folder).map_err(|e| AssetError::Load {
        path: folder.display().to_string(),
        reason: e.to_string(),
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        })
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if files.is_empty() {
        return Err(AssetError::EmptyAnimation(folder.display().to_string()));
    }
    Ok(files)
}

/// Load every frame in `folder` and register it as the animation `key`.
fn load_animation(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    textures: &mut TextureStore,
    animations: &mut AnimationStore,
    key: &str,
    folder: &Path,
) -> Result<(), AssetError> {
    let mut frames = Vec::new();
    for (i, file) in frame_files(folder)?.iter().enumerate() {
        let texture = load_keyed_texture(rl, th, file)?;
        let tex_key = format!("{}_{}", key, i);
        frames.push(Frame::new(tex_key.as_str(), texture.width, texture.height, 1));
        textures.insert(tex_key, texture);
    }
    info!("Loaded animation '{}' ({} frames)", key, frames.len());
    animations.insert(key, frames);
    Ok(())
}

/// Load block, star and actor textures plus every animation.
pub fn load_assets(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    config: &GameConfig,
    layout: &LevelLayout,
) -> Result<(TextureStore, AnimationStore), AssetError> {
    let mut textures = TextureStore::new();
    let mut animations = AnimationStore::new();

    for digit in layout.texture_digits() {
        let path = config.level_dir.join(format!("{}.png", digit));
        textures.insert(tile_texture_key(digit), load_keyed_texture(rl, th, &path)?);
    }

    let hero_dir = config.assets_dir.join("hero");
    for state in HeroState::ALL {
        load_animation(
            rl,
            th,
            &mut textures,
            &mut animations,
            state.animation_key(),
            &hero_dir.join(state.folder()),
        )?;
    }

    load_animation(
        rl,
        th,
        &mut textures,
        &mut animations,
        WalkerState::Walk.animation_key(),
        &config.assets_dir.join("guy").join("walk"),
    )?;

    let key = FireballState::Flying.animation_key();
    let texture = load_keyed_texture(rl, th, &config.assets_dir.join("fireball.png"))?;
    animations.insert(key, vec![Frame::new(key, texture.width, texture.height, 1)]);
    textures.insert(key, texture);

    Ok((textures, animations))
}

/// Commands loading every sound effect. Fails if any file is missing.
pub fn sound_commands(assets_dir: &Path) -> Result<Vec<AudioCmd>, AssetError> {
    ALL_FX
        .iter()
        .map(|id| {
            let path = assets_dir.join(format!("{}.wav", id));
            if !path.is_file() {
                return Err(AssetError::MissingSound(path.display().to_string()));
            }
            Ok(AudioCmd::LoadFx {
                id: id.to_string(),
                path: path.display().to_string(),
            })
        })
        .collect()
}

/// Build the actor prototypes and apply each kind's frame timing.
pub fn build_prototypes(animations: &AnimationStore) -> Result<ActorPrototypes, AssetError> {
    let mut hero = Prototype::new(animations.track_set::<HeroState>()?);
    hero.set_shared_duration(HERO_FRAME_TICKS);
    let mut walker = Prototype::new(animations.track_set::<WalkerState>()?);
    walker.set_shared_duration(WALKER_FRAME_TICKS);
    let fireball = Prototype::new(animations.track_set::<FireballState>()?);
    Ok(ActorPrototypes {
        hero,
        walker,
        fireball,
    })
}

/// Spawn the hero and one walker per spawn tile.
pub fn spawn_actors(world: &mut World, hero_spawn: (i32, i32)) {
    let prototypes = world.resource::<ActorPrototypes>().clone();
    let spawns = world.resource::<LevelGeometry>().walker_spawns.clone();

    let (x, y) = hero_spawn;
    world.spawn((Player, prototypes.hero.spawn(x, y, Facing::Right)));

    for (x, y) in &spawns {
        world.spawn((
            Walker::default(),
            prototypes.walker.spawn(*x, *y, Facing::Right),
        ));
    }
    info!("Spawned hero at {:?} and {} walkers", hero_spawn, spawns.len());
}

/// Load everything and populate `world` with the assembled `geometry` of
/// `layout`. Call once before the main loop.
pub fn setup(
    world: &mut World,
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    config: &GameConfig,
    layout: &LevelLayout,
    geometry: LevelGeometry,
) -> Result<(), AssetError> {
    info!(
        "Level {}x{}: {} blocks, {} stars, {} walkers",
        layout.columns(),
        layout.rows(),
        geometry.blocks.len(),
        geometry.stars.len(),
        geometry.walker_spawns.len()
    );

    let (textures, animations) = load_assets(rl, th, config, layout)?;
    let prototypes = build_prototypes(&animations)?;
    let sounds = sound_commands(&config.assets_dir)?;

    world.insert_resource(geometry);
    world.insert_resource(textures);
    world.insert_resource(animations);
    world.insert_resource(prototypes);
    world.resource_mut::<Messages<AudioCmd>>().write_batch(sounds);

    spawn_actors(world, config.hero_spawn);
    Ok(())
}
