//! Starhop main entry point.
//!
//! A small 2D platformer built on:
//! - **raylib** for windowing, graphics and audio
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and the level grid (fatal on error)
//! 2. Open the window, start the audio thread, load assets and spawn actors
//! 3. Run one schedule pass per frame at the configured fixed rate:
//!    input, hero control, walkers, fireballs, hero movement, contacts,
//!    win check, audio forwarding, rendering
//! 4. Stop the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level assets/level_1
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameState;
use crate::resources::input::InputState;
use crate::resources::level::LevelLayout;
use crate::resources::rendertarget::RenderTarget;
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds,
};
use crate::systems::contacts::resolve_contacts;
use crate::systems::fireball::{expire_fireballs, fireball_flight};
use crate::systems::gamestate::{advance_game_state, check_win, state_is_playing};
use crate::systems::input::update_input_state;
use crate::systems::player::{player_control, player_movement};
use crate::systems::render::render_system;
use crate::systems::walker::walker_patrol;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

/// Starhop: get to the star.
#[derive(Parser)]
#[command(version, about = "A tiny tile-based platformer. Reach the star to win.")]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Level folder holding the grid and block textures. Overrides `[level] dir`.
    #[arg(long, value_name = "DIR")]
    level: Option<PathBuf>,

    /// Parse and lay out the level, print a summary and exit without a window.
    #[arg(long)]
    check_level: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = cli.config.map(GameConfig::with_path).unwrap_or_default();
    config.load_from_file()?;
    if let Some(dir) = cli.level {
        config.set_level_dir(dir);
    }

    let layout = LevelLayout::load(&config.level_path())?;
    let (width, height) = config.render_size();
    let geometry = layout.assemble(width, height)?;

    // Early-exit: validate the level and quit (no window/audio needed)
    if cli.check_level {
        println!(
            "{}: {}x{} tiles, {} blocks, {} stars, {} walker spawns",
            config.level_path().display(),
            layout.columns(),
            layout.rows(),
            geometry.blocks.len(),
            geometry.stars.len(),
            geometry.walker_spawns.len()
        );
        if geometry.stars.is_empty() {
            log::warn!("level has no star and cannot be won");
        }
        return Ok(());
    }

    log::info!("Starting Starhop");
    // --------------- Raylib window & render target ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Starhop")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is read as the quit key instead
    rl.set_exit_key(None);

    let render_target =
        RenderTarget::new(&mut rl, &thread, config.render_width, config.render_height)?;

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    // Audio must be up before setup queues the sound loads
    setup_audio(&mut world);
    if let Err(e) = game::setup(&mut world, &mut rl, &thread, &config, &layout, geometry) {
        shutdown_audio(&mut world);
        return Err(e.into());
    }

    world.insert_resource(GameState::new(config.target_fps));
    world.insert_resource(InputState::default());
    world.insert_resource(config);
    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = Schedule::default();
    update.add_systems((update_input_state, advance_game_state).chain());
    update.add_systems(
        // every mover finishes before contacts; despawns apply between steps
        (
            player_control,
            walker_patrol,
            fireball_flight,
            player_movement,
            resolve_contacts,
            check_win,
            expire_fireballs,
        )
            .chain()
            .run_if(state_is_playing)
            .after(advance_game_state),
    );
    update.add_systems(
        // audio systems must be together
        (update_bevy_audio_cmds, forward_audio_cmds, poll_audio_messages)
            .chain()
            .after(expire_fireballs),
    );
    update.add_systems(render_system.after(expire_fireballs));

    update.initialize(&mut world)?;

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<GameState>().should_quit()
    {
        update.run(&mut world);
        world.clear_trackers();
    }
    shutdown_audio(&mut world);
    Ok(())
}
